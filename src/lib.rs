//! Static evaluation for a negamax chess search.
//!
//! The board model lives in [`core`], the king-safety collaborators in
//! [`logic`], and the evaluator itself in [`eval`].

pub mod core;
pub mod eval;
pub mod logic;

pub use crate::core::{Board, Piece, PieceKind, Position, Side, View};
pub use crate::eval::{EvalConfig, EvalError, EvalInputs, Evaluator, Rating};
pub use crate::logic::{Rules, StandardRules};
