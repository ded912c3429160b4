//! Head-to-head matches between agents.

mod runner;

pub use runner::{play_match, EndReason, MatchConfig, MatchOutcome};
