//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one `choose_move` call.
///
/// Counts accumulate across iterative-deepening iterations, including the
/// aborted one.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes entered (deadline polls).
    pub nodes: u64,

    /// Leaves scored by the evaluator.
    pub evaluations: u64,

    /// Nodes scored by `utility` because the player to move was stuck.
    pub terminals: u64,

    /// Alpha-beta cutoffs that skipped at least one sibling.
    pub cutoffs: u64,

    /// Deepest iteration that ran to completion.
    pub completed_depth: u32,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate nodes per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Fraction of nodes that were evaluator leaves.
    #[must_use]
    pub fn evaluation_ratio(&self) -> f64 {
        if self.nodes == 0 {
            0.0
        } else {
            self.evaluations as f64 / self.nodes as f64
        }
    }
}
