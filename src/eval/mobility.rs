use super::config::EvalConfig;

/// Mobility term of the rated side.
///
/// One point per legal move, weighted by `weight_mobility`. With no legal
/// moves the position is over: checkmate when `king_safe` reports the king
/// attacked, stalemate otherwise, and either penalty grows with depth.
/// `king_safe` is only called in that terminal case. `_material` is unused by
/// the formula.
pub fn evaluate<F>(
    legal_moves: u32,
    depth: u32,
    _material: i32,
    king_safe: F,
    config: &EvalConfig,
) -> i32
where
    F: FnOnce() -> bool,
{
    let moves = i32::try_from(legal_moves).unwrap_or(i32::MAX);
    let mut score = moves.saturating_mul(config.weight_mobility);
    if legal_moves == 0 {
        let depth = i32::try_from(depth).unwrap_or(i32::MAX);
        if king_safe() {
            log::debug!("stalemate at depth {}", depth);
            score = score.saturating_sub(config.stalemate_penalty.saturating_mul(depth));
        } else {
            log::debug!("checkmate at depth {}", depth);
            score = score.saturating_sub(config.checkmate_penalty.saturating_mul(depth));
        }
    }
    score
}
