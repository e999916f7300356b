//! # Rating
//!
//! Combines the four leaf terms into the score handed to a negamax search.
//!
//! ## Scoring Strategy
//! 1. Rate the side to move: attack + material + mobility + positional.
//! 2. Rate its opponent the same way, from the opponent's own frame.
//! 3. Return `-(mover - opponent + depth * tempo)`.
//!
//! The outer negation follows the negamax convention: the caller one ply up
//! negates what it receives, so the result reads "good for the side that just
//! moved into this position". Both passes reuse the mover's legal-move count.

use super::config::EvalConfig;
use super::error::EvalError;
use super::evaluator::Evaluator;
use super::{attack, material, mobility, positional};
use crate::core::{Board, Side, View};
use crate::logic::{Rules, StandardRules};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Per-call inputs supplied by the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EvalInputs {
    pub legal_moves: u32,
    pub depth: u32,
}

impl EvalInputs {
    /// Checks the raw counters a search keeps as signed integers.
    pub fn new(legal_moves: i32, depth: i32) -> Result<Self, EvalError> {
        let legal_moves =
            u32::try_from(legal_moves).map_err(|_| EvalError::NegativeMoveCount(legal_moves))?;
        let depth = u32::try_from(depth).map_err(|_| EvalError::NegativeDepth(depth))?;
        Ok(Self { legal_moves, depth })
    }
}

/// The four terms of one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SideScore {
    pub material: i32,
    pub attack: i32,
    pub mobility: i32,
    pub positional: i32,
}

impl SideScore {
    pub fn total(&self) -> i32 {
        self.attack
            .saturating_add(self.material)
            .saturating_add(self.mobility)
            .saturating_add(self.positional)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakdown {
    pub side: Side,
    pub mover: SideScore,
    pub opponent: SideScore,
    pub tempo: i32,
    pub score: i32,
}

pub struct Rating<R = StandardRules> {
    config: Arc<EvalConfig>,
    rules: R,
}

impl Rating<StandardRules> {
    pub fn new(config: Arc<EvalConfig>) -> Result<Self, EvalError> {
        Self::with_rules(config, StandardRules)
    }
}

impl Default for Rating<StandardRules> {
    fn default() -> Self {
        Self {
            config: Arc::new(EvalConfig::get().clone()),
            rules: StandardRules,
        }
    }
}

impl<R: Rules> Rating<R> {
    pub fn with_rules(config: Arc<EvalConfig>, rules: R) -> Result<Self, EvalError> {
        config.validate()?;
        Ok(Self { config, rules })
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Scores one side of the board from that side's frame.
    pub fn rate_side(&self, view: &View<'_>, inputs: EvalInputs) -> Result<SideScore, EvalError> {
        let side = view.side();
        let count = view.board().count_kings(side);
        let king = match view.find_own_king() {
            Some(pos) if count == 1 => pos,
            _ => return Err(EvalError::KingCount { side, count }),
        };

        let config = self.config();
        let material = material::evaluate(view, config);
        let attack = attack::evaluate(view, king, &self.rules, config);
        let mobility = mobility::evaluate(
            inputs.legal_moves,
            inputs.depth,
            material,
            || self.rules.king_safe(view, king),
            config,
        );
        let positional = positional::evaluate(view, material, king, &self.rules, config);

        Ok(SideScore {
            material,
            attack,
            mobility,
            positional,
        })
    }

    /// Full evaluation with every term exposed.
    pub fn breakdown(
        &self,
        board: &Board,
        side: Side,
        inputs: EvalInputs,
    ) -> Result<Breakdown, EvalError> {
        let max = self.config.max_depth;
        if inputs.depth > max {
            return Err(EvalError::DepthOutOfRange {
                depth: inputs.depth,
                max,
            });
        }

        let mover = self.rate_side(&View::new(board, side), inputs)?;
        let opponent = self.rate_side(&View::new(board, side.opponent()), inputs)?;

        let depth = i32::try_from(inputs.depth).unwrap_or(i32::MAX);
        let tempo = self.config.tempo.saturating_mul(depth);
        let score = mover
            .total()
            .saturating_sub(opponent.total())
            .saturating_add(tempo)
            .saturating_neg();

        log::trace!(
            "rating {}: mover {:?} opponent {:?} tempo {}",
            side,
            mover,
            opponent,
            tempo
        );
        log::debug!("rating {} at depth {}: {}", side, inputs.depth, score);

        Ok(Breakdown {
            side,
            mover,
            opponent,
            tempo,
            score,
        })
    }

    /// Score of `board` with `side` to move, in negamax orientation.
    pub fn rate(&self, board: &Board, side: Side, inputs: EvalInputs) -> Result<i32, EvalError> {
        self.breakdown(board, side, inputs).map(|b| b.score)
    }

    /// Rates independent positions in parallel.
    pub fn rate_batch(
        &self,
        positions: &[(Board, Side, EvalInputs)],
    ) -> Vec<Result<i32, EvalError>> {
        positions
            .par_iter()
            .map(|(board, side, inputs)| self.rate(board, *side, *inputs))
            .collect()
    }
}

impl<R: Rules> Evaluator for Rating<R> {
    fn evaluate(&self, board: &Board, side: Side, inputs: EvalInputs) -> Result<i32, EvalError> {
        self.rate(board, side, inputs)
    }

    fn name(&self) -> &str {
        "rating"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{board_from_fen, standard_setup};
    use crate::eval::test_support::FixedRules;

    fn rating() -> Rating {
        Rating::new(Arc::new(EvalConfig::default())).unwrap()
    }

    #[test]
    fn test_inputs_reject_negatives() {
        assert_eq!(EvalInputs::new(-1, 0), Err(EvalError::NegativeMoveCount(-1)));
        assert_eq!(EvalInputs::new(0, -3), Err(EvalError::NegativeDepth(-3)));
        assert_eq!(
            EvalInputs::new(20, 2),
            Ok(EvalInputs {
                legal_moves: 20,
                depth: 2
            })
        );
    }

    #[test]
    fn test_lone_kings_cancel_out() {
        let (board, side) = board_from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let inputs = EvalInputs::new(20, 0).unwrap();
        let breakdown = rating().breakdown(&board, side, inputs).unwrap();
        let expected = SideScore {
            material: 0,
            attack: 0,
            mobility: 20,
            // Endgame table -30 on e1, five free squares at 30 each.
            positional: -30 + 5 * 30,
        };
        assert_eq!(breakdown.mover, expected);
        assert_eq!(breakdown.opponent, expected);
        assert_eq!(breakdown.score, 0);
    }

    #[test]
    fn test_tempo_term() {
        let (board, side) = board_from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let score = rating()
            .rate(&board, side, EvalInputs::new(20, 2).unwrap())
            .unwrap();
        assert_eq!(score, -100);
    }

    #[test]
    fn test_start_position_is_balanced() {
        let board = standard_setup();
        let score = rating()
            .rate(&board, Side::White, EvalInputs::new(20, 0).unwrap())
            .unwrap();
        assert_eq!(score, 0);
    }

    #[test]
    fn test_depth_limit() {
        let board = standard_setup();
        let result = rating().rate(&board, Side::White, EvalInputs::new(20, 65).unwrap());
        assert_eq!(result, Err(EvalError::DepthOutOfRange { depth: 65, max: 64 }));
    }

    #[test]
    fn test_king_count_is_checked() {
        let (no_black_king, _) = board_from_fen("8/8/8/8/8/8/8/4K3").unwrap();
        assert_eq!(
            rating().rate(&no_black_king, Side::White, EvalInputs::default()),
            Err(EvalError::KingCount {
                side: Side::Black,
                count: 0
            })
        );

        let (two_kings, _) = board_from_fen("4k3/8/8/8/8/8/8/K3K3").unwrap();
        assert_eq!(
            rating().rate(&two_kings, Side::White, EvalInputs::default()),
            Err(EvalError::KingCount {
                side: Side::White,
                count: 2
            })
        );
    }

    #[test]
    fn test_terminal_terms_with_fixed_rules() {
        let (board, side) = board_from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let inputs = EvalInputs::new(0, 3).unwrap();

        let mated = Rating::with_rules(
            Arc::new(EvalConfig::default()),
            FixedRules {
                safe: false,
                destinations: 0,
            },
        )
        .unwrap();
        let breakdown = mated.breakdown(&board, side, inputs).unwrap();
        assert_eq!(breakdown.mover.mobility, -600_000);

        let stalemated = Rating::with_rules(
            Arc::new(EvalConfig::default()),
            FixedRules {
                safe: true,
                destinations: 0,
            },
        )
        .unwrap();
        let breakdown = stalemated.breakdown(&board, side, inputs).unwrap();
        assert_eq!(breakdown.mover.mobility, -450_000);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = EvalConfig {
            checkmate_penalty: i32::MAX,
            ..EvalConfig::default()
        };
        assert!(matches!(
            Rating::new(Arc::new(config)),
            Err(EvalError::InvalidConfig(_))
        ));

        let negative = EvalConfig {
            king_in_check: -1,
            ..EvalConfig::default()
        };
        assert!(matches!(
            Rating::with_rules(Arc::new(negative), StandardRules),
            Err(EvalError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_breakdown_serializes() {
        let board = standard_setup();
        let breakdown = rating()
            .breakdown(&board, Side::White, EvalInputs::new(20, 1).unwrap())
            .unwrap();
        let json = serde_json::to_value(breakdown).unwrap();
        assert_eq!(json["side"], "White");
        assert_eq!(json["tempo"], 50);
        assert_eq!(json["mover"]["material"], 3900);
    }
}
