use serde::{Deserialize, Serialize};
use std::fmt;

/// 手番側
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    White, // 盤面下側 (row 6, 7)
    Black, // 盤面上側 (row 0, 1)
}

impl Default for Side {
    fn default() -> Self {
        Side::White
    }
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Side::White => write!(f, "white"),
            Side::Black => write!(f, "black"),
        }
    }
}

/// 盤面座標 (0-indexed, x = file, y = row from the top)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Position { x, y }
    }

    /// Square index in `0..64`, row-major.
    pub fn index(self) -> usize {
        self.y * 8 + self.x
    }

    pub fn from_index(index: usize) -> Self {
        Position {
            x: index % 8,
            y: index / 8,
        }
    }

    /// The same square seen from the other side of the board.
    pub fn rotated(self) -> Self {
        Position {
            x: 7 - self.x,
            y: 7 - self.y,
        }
    }

    /// Steps by `(dx, dy)`; `None` when the result leaves the board.
    pub fn offset(self, dx: i32, dy: i32) -> Option<Position> {
        let x = self.x as i32 + dx;
        let y = self.y as i32 + dy;
        if (0..8).contains(&x) && (0..8).contains(&y) {
            Some(Position::new(x as usize, y as usize))
        } else {
            None
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let file = (b'a' + self.x as u8) as char;
        write!(f, "{}{}", file, 8 - self.y)
    }
}
