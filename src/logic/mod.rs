//! Rules collaborators consumed by the evaluator.
//!
//! The evaluator needs two services from the rules layer: "would a king on
//! this square be in check" and "where can the king step to". Both work on a
//! [`View`], so the side being asked about always sits at the bottom and its
//! pawns move up.

use crate::core::{Piece, PieceKind, Position, View};

const DIAGONALS: [(i32, i32); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];
const ORTHOGONALS: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];
const KNIGHT_JUMPS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (2, -1),
    (2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
];
const KING_STEPS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// King-safety and king-move services.
pub trait Rules: Send + Sync {
    /// Whether a king of the viewing side standing on `king` would be safe.
    fn king_safe(&self, view: &View<'_>, king: Position) -> bool;

    /// Squares the king on `king` can legally step to.
    fn king_destinations(&self, view: &View<'_>, king: Position) -> Vec<Position>;
}

/// Plain chess attack detection.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRules;

impl Rules for StandardRules {
    fn king_safe(&self, view: &View<'_>, king: Position) -> bool {
        !is_attacked(view, king)
    }

    fn king_destinations(&self, view: &View<'_>, king: Position) -> Vec<Position> {
        KING_STEPS
            .iter()
            .filter_map(|&(dx, dy)| king.offset(dx, dy))
            .filter(|&to| view.own(to).is_none())
            .filter(|&to| {
                let mut next = *view.board();
                next.remove_piece(view.to_board(king));
                next.place_piece(view.to_board(to), Piece::new(PieceKind::King, view.side()));
                !is_attacked(&View::new(&next, view.side()), to)
            })
            .collect()
    }
}

/// 相手の駒が `target` に利いているか判定
pub fn is_attacked(view: &View<'_>, target: Position) -> bool {
    if DIAGONALS
        .iter()
        .any(|&(dx, dy)| ray_hits(view, target, dx, dy, PieceKind::Bishop))
    {
        return true;
    }
    if ORTHOGONALS
        .iter()
        .any(|&(dx, dy)| ray_hits(view, target, dx, dy, PieceKind::Rook))
    {
        return true;
    }
    if KNIGHT_JUMPS.iter().any(|&(dx, dy)| {
        target
            .offset(dx, dy)
            .is_some_and(|pos| view.enemy(pos) == Some(PieceKind::Knight))
    }) {
        return true;
    }
    // Enemy pawns come down the board, so they hit from the row above.
    [-1, 1].iter().any(|&dx| {
        target
            .offset(dx, -1)
            .is_some_and(|pos| view.enemy(pos) == Some(PieceKind::Pawn))
    })
}

/// Walks from `from` in one direction until the first piece and reports
/// whether it is an enemy slider of the given kind, a queen, or an adjacent
/// enemy king.
fn ray_hits(view: &View<'_>, from: Position, dx: i32, dy: i32, slider: PieceKind) -> bool {
    let mut current = from;
    let mut distance = 1;
    while let Some(next) = current.offset(dx, dy) {
        if let Some(piece) = view.get(next) {
            if piece.side == view.side() {
                return false;
            }
            return piece.kind == slider
                || piece.kind == PieceKind::Queen
                || (distance == 1 && piece.kind == PieceKind::King);
        }
        current = next;
        distance += 1;
    }
    false
}
