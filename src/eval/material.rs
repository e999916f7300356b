use super::config::EvalConfig;
use crate::core::{PieceKind, View};

/// Returns the flat material value of a piece kind.
///
/// Bishops are paid through the bishop bonus instead, and the king is only
/// rewarded positionally.
pub fn piece_val(kind: PieceKind, config: &EvalConfig) -> i32 {
    match kind {
        PieceKind::Pawn => config.val_pawn,
        PieceKind::Knight => config.val_knight,
        PieceKind::Rook => config.val_rook,
        PieceKind::Queen => config.val_queen,
        PieceKind::Bishop | PieceKind::King => 0,
    }
}

/// Bonus for `count` bishops: a lone bishop gets the single bonus, two or
/// more are paid per bishop.
pub fn bishop_bonus(count: i32, config: &EvalConfig) -> i32 {
    match count {
        0 => 0,
        1 => config.bonus_single_bishop,
        n => config.bonus_per_bishop.saturating_mul(n),
    }
}

/// Material subtotal of the viewing side.
pub fn evaluate(view: &View<'_>, config: &EvalConfig) -> i32 {
    let mut score: i32 = 0;
    let mut bishops = 0;
    for (_, kind) in view.own_pieces() {
        if kind == PieceKind::Bishop {
            bishops += 1;
        }
        score = score.saturating_add(piece_val(kind, config));
    }
    score.saturating_add(bishop_bonus(bishops, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{board_from_fen, standard_setup, Side};

    fn material_of(fen: &str, side: Side) -> i32 {
        let (board, _) = board_from_fen(fen).unwrap();
        evaluate(&View::new(&board, side), &EvalConfig::default())
    }

    #[test]
    fn test_bishop_bonus_scales_with_count() {
        assert_eq!(material_of("8/8/8/8/8/8/8/2B5", Side::White), 250);
        assert_eq!(material_of("8/8/8/8/8/8/8/2B2B2", Side::White), 600);
        assert_eq!(material_of("8/8/8/8/3B4/8/8/2B2B2", Side::White), 900);
    }

    #[test]
    fn test_start_position() {
        let board = standard_setup();
        let config = EvalConfig::default();
        // 8 pawns, 2 knights, 2 rooks, a queen and the bishop pair.
        let expected = 800 + 600 + 1000 + 900 + 600;
        assert_eq!(evaluate(&View::new(&board, Side::White), &config), expected);
        assert_eq!(evaluate(&View::new(&board, Side::Black), &config), expected);
    }

    #[test]
    fn test_only_own_pieces_count() {
        // White rook and king against a Black queen.
        assert_eq!(material_of("3qk3/8/8/8/8/8/8/R3K3", Side::White), 500);
        assert_eq!(material_of("3qk3/8/8/8/8/8/8/R3K3", Side::Black), 900);
    }

    #[test]
    fn test_king_has_no_material_value() {
        assert_eq!(material_of("4k3/8/8/8/8/8/8/4K3", Side::White), 0);
        assert_eq!(piece_val(PieceKind::King, &EvalConfig::default()), 0);
    }

    #[test]
    fn test_huge_values_saturate() {
        let config = EvalConfig {
            val_queen: i32::MAX,
            bonus_per_bishop: i32::MAX,
            ..EvalConfig::default()
        };
        let (board, _) = board_from_fen("8/8/8/8/8/8/8/2BQB3").unwrap();
        assert_eq!(evaluate(&View::new(&board, Side::White), &config), i32::MAX);
        assert_eq!(bishop_bonus(3, &config), i32::MAX);
    }
}
