//! Evaluator trait for board evaluation
//!
//! Defines a common interface for different evaluation strategies.

use super::error::EvalError;
use super::rating::EvalInputs;
use crate::core::{Board, Side};

/// Trait for evaluating board positions
pub trait Evaluator: Send + Sync {
    /// Evaluate the board with `side` to move, in negamax orientation.
    ///
    /// Returns:
    ///   - Positive score: good for the side that just moved
    ///   - Negative score: good for `side`
    ///   - Very large magnitudes: forced mate or stalemate at this depth
    fn evaluate(&self, board: &Board, side: Side, inputs: EvalInputs) -> Result<i32, EvalError>;

    /// Get evaluator name for debugging
    fn name(&self) -> &str;
}
