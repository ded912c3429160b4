//! Adversarial tree search.
//!
//! Two fixed-depth searches share one context type:
//!
//! - `minimax`: expands every node to the depth limit
//! - `alphabeta`: same answer, prunes siblings that cannot matter
//!
//! `iterative_deepening` wraps either one in an anytime loop driven by a
//! `Deadline`. Search is single-threaded and never mutates the board it is
//! given; each node works on its own forecast copy.

pub mod alphabeta;
pub mod config;
pub mod context;
pub mod deadline;
pub mod iterative;
pub mod minimax;
pub mod stats;

pub use alphabeta::alphabeta;
pub use config::{SearchAlgorithm, SearchConfig};
pub use context::{SearchContext, SearchResult, SearchTimeout};
pub use deadline::{Countdown, Deadline, Unbounded};
pub use iterative::{iterative_deepening, SearchReport};
pub use minimax::minimax;
pub use stats::SearchStats;
