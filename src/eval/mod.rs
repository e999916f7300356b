//! Static position evaluation.
//!
//! Four independent terms (material, attack, mobility, positional) are
//! computed for the side to move and for its opponent, each from its own
//! frame, and combined by [`Rating`].

pub mod attack;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod material;
pub mod mobility;
pub mod positional;
pub mod pst;
pub mod rating;

pub use config::EvalConfig;
pub use error::EvalError;
pub use evaluator::Evaluator;
pub use pst::Phase;
pub use rating::{Breakdown, EvalInputs, Rating, SideScore};
