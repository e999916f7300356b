use super::board::{Board, BOARD_SIZE};
use super::piece::{Piece, PieceKind};
use super::types::{Position, Side};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("expected 8 rows, got {0}")]
    RowCount(usize),

    #[error("row {row} has {width} squares, expected 8")]
    RowWidth { row: usize, width: usize },

    #[error("unknown piece symbol '{symbol}' at row {row}, column {col}")]
    UnknownPiece { symbol: String, row: usize, col: usize },

    #[error("malformed FEN: {0}")]
    BadFen(String),
}

/// 文字列配列から盤面を初期化する
///
/// Eight rows of eight whitespace-separated tokens, top row first. `.` marks
/// an empty square; a letter is a piece, uppercase for White.
pub fn board_from_rows(rows: &[&str]) -> Result<Board, SetupError> {
    if rows.len() != BOARD_SIZE {
        return Err(SetupError::RowCount(rows.len()));
    }

    let mut board = Board::new();
    for (y, row) in rows.iter().enumerate() {
        let tokens: Vec<&str> = row.split_whitespace().collect();
        if tokens.len() != BOARD_SIZE {
            return Err(SetupError::RowWidth {
                row: y,
                width: tokens.len(),
            });
        }
        for (x, token) in tokens.into_iter().enumerate() {
            if token == "." {
                continue;
            }
            let piece = parse_piece(token).ok_or_else(|| SetupError::UnknownPiece {
                symbol: token.to_string(),
                row: y,
                col: x,
            })?;
            board.place_piece(Position::new(x, y), piece);
        }
    }
    Ok(board)
}

/// Reads the placement and active-colour fields of a FEN record.
pub fn board_from_fen(fen: &str) -> Result<(Board, Side), SetupError> {
    let mut fields = fen.split_whitespace();
    let placement = fields
        .next()
        .ok_or_else(|| SetupError::BadFen("empty record".to_string()))?;

    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != BOARD_SIZE {
        return Err(SetupError::RowCount(ranks.len()));
    }

    let mut board = Board::new();
    for (y, rank) in ranks.iter().enumerate() {
        let mut x = 0;
        for ch in rank.chars() {
            if let Some(skip) = ch.to_digit(10) {
                x += skip as usize;
                continue;
            }
            let piece = parse_piece(&ch.to_string()).ok_or_else(|| SetupError::UnknownPiece {
                symbol: ch.to_string(),
                row: y,
                col: x,
            })?;
            if x >= BOARD_SIZE {
                return Err(SetupError::RowWidth { row: y, width: x + 1 });
            }
            board.place_piece(Position::new(x, y), piece);
            x += 1;
        }
        if x != BOARD_SIZE {
            return Err(SetupError::RowWidth { row: y, width: x });
        }
    }

    let side = match fields.next() {
        None | Some("w") => Side::White,
        Some("b") => Side::Black,
        Some(other) => {
            return Err(SetupError::BadFen(format!("active colour '{}'", other)));
        }
    };

    Ok((board, side))
}

fn parse_piece(token: &str) -> Option<Piece> {
    let mut chars = token.chars();
    let ch = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    let kind = PieceKind::from_char(ch)?;
    let side = if ch.is_ascii_uppercase() {
        Side::White
    } else {
        Side::Black
    };
    Some(Piece::new(kind, side))
}

/// The initial chess position.
pub fn standard_setup() -> Board {
    let mut board = Board::new();
    let back = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];
    for (x, kind) in back.into_iter().enumerate() {
        board.place_piece(Position::new(x, 0), Piece::new(kind, Side::Black));
        board.place_piece(Position::new(x, 1), Piece::new(PieceKind::Pawn, Side::Black));
        board.place_piece(Position::new(x, 6), Piece::new(PieceKind::Pawn, Side::White));
        board.place_piece(Position::new(x, 7), Piece::new(kind, Side::White));
    }
    board
}
