//! Board evaluation.
//!
//! - `traits`: the `Evaluator` contract consumed by search
//! - `heuristics`: ready-made evaluators

pub mod traits;
pub mod heuristics;

pub use traits::{terminal_score, Evaluator};
pub use heuristics::{
    AggressiveScore, BlockingScore, CenterScore, ImprovedScore, NullScore, OpenMoveScore,
    WeightedScore,
};
