use super::config::EvalConfig;
use super::pst::{get_pst_value, Phase};
use crate::core::{PieceKind, Position, View};
use crate::logic::Rules;

/// Piece-square term of the viewing side.
///
/// `material` is the side's own material subtotal and picks the king table.
/// The king also earns a bonus per safe destination square, much larger in
/// the endgame.
pub fn evaluate<R: Rules + ?Sized>(
    view: &View<'_>,
    material: i32,
    king: Position,
    rules: &R,
    config: &EvalConfig,
) -> i32 {
    let phase = Phase::from_material(material, config.phase_threshold);
    let mut score: i32 = 0;
    for (pos, kind) in view.own_pieces() {
        score = score.saturating_add(get_pst_value(kind, phase, pos));
        if kind == PieceKind::King {
            let weight = match phase {
                Phase::Midgame => config.king_mobility_midgame,
                Phase::Endgame => config.king_mobility_endgame,
            };
            let steps = rules.king_destinations(view, king).len();
            let steps = i32::try_from(steps).unwrap_or(i32::MAX);
            score = score.saturating_add(steps.saturating_mul(weight));
        }
    }
    score
}
