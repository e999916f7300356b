use super::piece::{Piece, PieceKind};
use super::types::{Position, Side};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const BOARD_SIZE: usize = 8;

/// 盤面
///
/// Rows run from the top of the diagram (row 0, Black's home rank) to the
/// bottom (row 7, White's home rank). Every piece carries its side, so the
/// board never has to be flipped to tell whose piece is whose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    squares: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Board {
            squares: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn place_piece(&mut self, pos: Position, piece: Piece) {
        self.squares[pos.y][pos.x] = Some(piece);
    }

    pub fn get_piece(&self, pos: Position) -> Option<Piece> {
        self.squares[pos.y][pos.x]
    }

    pub fn remove_piece(&mut self, pos: Position) -> Option<Piece> {
        self.squares[pos.y][pos.x].take()
    }

    /// All occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        (0..BOARD_SIZE * BOARD_SIZE).filter_map(move |i| {
            let pos = Position::from_index(i);
            self.get_piece(pos).map(|p| (pos, p))
        })
    }

    pub fn count_kings(&self, side: Side) -> usize {
        self.pieces()
            .filter(|(_, p)| p.side == side && p.kind == PieceKind::King)
            .count()
    }

    pub fn find_king(&self, side: Side) -> Option<Position> {
        self.pieces()
            .find(|(_, p)| p.side == side && p.kind == PieceKind::King)
            .map(|(pos, _)| pos)
    }

    /// Turns the board 180° and hands every piece to the other side.
    ///
    /// Applying it twice restores the original board.
    pub fn flip(&mut self) {
        let mut flipped = [[None; BOARD_SIZE]; BOARD_SIZE];
        for (pos, piece) in self.pieces() {
            let to = pos.rotated();
            flipped[to.y][to.x] = Some(piece.swapped());
        }
        self.squares = flipped;
    }

    pub fn flipped(&self) -> Board {
        let mut board = *self;
        board.flip();
        board
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.squares {
            let line: Vec<String> = row
                .iter()
                .map(|sq| sq.map_or('.', |p| p.display_char()).to_string())
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Read-only view of a board as seen by one side.
///
/// Positions passed to a view are in the viewer's frame: the viewer's home
/// rank is row 7 and its pawns advance towards row 0. For White this is the
/// board itself, for Black every position is rotated 180°.
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    board: &'a Board,
    side: Side,
}

impl<'a> View<'a> {
    pub fn new(board: &'a Board, side: Side) -> Self {
        View { board, side }
    }

    pub fn board(&self) -> &'a Board {
        self.board
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Maps a position in the viewer's frame onto the underlying board.
    pub fn to_board(&self, pos: Position) -> Position {
        match self.side {
            Side::White => pos,
            Side::Black => pos.rotated(),
        }
    }

    pub fn get(&self, pos: Position) -> Option<Piece> {
        self.board.get_piece(self.to_board(pos))
    }

    pub fn own(&self, pos: Position) -> Option<PieceKind> {
        self.get(pos)
            .filter(|p| p.side == self.side)
            .map(|p| p.kind)
    }

    pub fn enemy(&self, pos: Position) -> Option<PieceKind> {
        self.get(pos)
            .filter(|p| p.side != self.side)
            .map(|p| p.kind)
    }

    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// The viewer's pieces, scanned square 0 through 63 of its frame.
    pub fn own_pieces(&self) -> impl Iterator<Item = (Position, PieceKind)> + '_ {
        (0..BOARD_SIZE * BOARD_SIZE).filter_map(move |i| {
            let pos = Position::from_index(i);
            self.own(pos).map(|k| (pos, k))
        })
    }

    pub fn find_own_king(&self) -> Option<Position> {
        self.own_pieces()
            .find(|(_, k)| *k == PieceKind::King)
            .map(|(pos, _)| pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Board {
        let mut board = Board::new();
        board.place_piece(Position::new(4, 7), Piece::new(PieceKind::King, Side::White));
        board.place_piece(Position::new(4, 0), Piece::new(PieceKind::King, Side::Black));
        board.place_piece(Position::new(0, 6), Piece::new(PieceKind::Pawn, Side::White));
        board.place_piece(Position::new(2, 2), Piece::new(PieceKind::Queen, Side::Black));
        board
    }

    #[test]
    fn test_flip_is_self_inverse() {
        let original = sample();
        let mut board = original;
        board.flip();
        assert_ne!(board, original);
        board.flip();
        assert_eq!(board, original);
    }

    #[test]
    fn test_flip_rotates_and_swaps_sides() {
        let board = sample().flipped();
        // White pawn a2 becomes a Black pawn on h7.
        assert_eq!(
            board.get_piece(Position::new(7, 1)),
            Some(Piece::new(PieceKind::Pawn, Side::Black))
        );
        assert_eq!(board.find_king(Side::White), Some(Position::new(3, 7)));
        assert_eq!(board.find_king(Side::Black), Some(Position::new(3, 0)));
    }

    #[test]
    fn test_black_view_matches_flipped_white_view() {
        let board = sample();
        let flipped = board.flipped();
        let black = View::new(&board, Side::Black);
        let white_of_flipped = View::new(&flipped, Side::White);
        for i in 0..64 {
            let pos = Position::from_index(i);
            assert_eq!(black.own(pos), white_of_flipped.own(pos));
            assert_eq!(black.enemy(pos), white_of_flipped.enemy(pos));
        }
    }

    #[test]
    fn test_own_and_enemy_filtering() {
        let board = sample();
        let white = View::new(&board, Side::White);
        assert_eq!(white.own(Position::new(0, 6)), Some(PieceKind::Pawn));
        assert_eq!(white.enemy(Position::new(0, 6)), None);
        assert_eq!(white.enemy(Position::new(2, 2)), Some(PieceKind::Queen));
        assert_eq!(white.own_pieces().count(), 2);
        assert_eq!(white.find_own_king(), Some(Position::new(4, 7)));
        assert_eq!(board.count_kings(Side::Black), 1);
    }
}
