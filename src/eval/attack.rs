//! Hanging-piece approximation.
//!
//! Every own piece is checked with the king-safety predicate as if a king
//! stood on its square. This cannot tell defended pieces from undefended
//! ones and over-counts squares on lines through the real king, but it only
//! needs one predicate call per piece.

use super::config::EvalConfig;
use crate::core::{PieceKind, Position, View};
use crate::logic::Rules;

fn attacked_penalty(kind: PieceKind, config: &EvalConfig) -> Option<i32> {
    match kind {
        PieceKind::Pawn => Some(config.attacked_pawn),
        PieceKind::Knight | PieceKind::Bishop => Some(config.attacked_minor),
        PieceKind::Rook => Some(config.attacked_rook),
        PieceKind::Queen => Some(config.attacked_queen),
        PieceKind::King => None,
    }
}

/// Halves the accumulated penalty, truncating toward zero.
pub fn halve(total: i32) -> i32 {
    total / 2
}

/// Attack term of the viewing side, whose king stands on `king`.
pub fn evaluate<R: Rules + ?Sized>(
    view: &View<'_>,
    king: Position,
    rules: &R,
    config: &EvalConfig,
) -> i32 {
    let mut total: i32 = 0;
    for (pos, kind) in view.own_pieces() {
        let Some(penalty) = attacked_penalty(kind, config) else {
            continue;
        };
        if !rules.king_safe(view, pos) {
            total = total.saturating_sub(penalty);
        }
    }
    if !rules.king_safe(view, king) {
        total = total.saturating_sub(config.king_in_check);
    }
    halve(total)
}
