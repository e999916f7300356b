pub mod board;
pub mod piece;
pub mod setup;
pub mod types;

pub use board::{Board, View};
pub use piece::{Piece, PieceKind};
pub use setup::{board_from_fen, board_from_rows, standard_setup, SetupError};
pub use types::{Position, Side};
