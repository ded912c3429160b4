//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Tree-search algorithm.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchAlgorithm {
    /// Plain depth-limited minimax. Visits every node.
    Minimax,
    /// Minimax with alpha-beta pruning. Same result, fewer nodes.
    #[default]
    AlphaBeta,
}

/// Search configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Which tree search to run.
    pub algorithm: SearchAlgorithm,

    /// Deepen 1, 2, 3, ... until the deadline (true), or run a single
    /// search at `search_depth` (false).
    pub iterative: bool,

    /// Plies searched when `iterative` is false.
    pub search_depth: u32,

    /// Deepest iteration when `iterative` is true (0 = unlimited).
    /// The number of empty cells always caps it as well.
    pub max_depth: u32,

    /// Abort once the deadline reports fewer milliseconds than this.
    /// Must leave enough time to unwind and return the move.
    pub timer_threshold_ms: f64,

    /// Seed for the random fallback move.
    pub seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            algorithm: SearchAlgorithm::AlphaBeta,
            iterative: true,
            search_depth: 3,
            max_depth: 0,
            timer_threshold_ms: 10.0,
            seed: 42,
        }
    }
}

impl SearchConfig {
    /// Fixed-depth minimax at depth 3.
    #[must_use]
    pub fn minimax() -> Self {
        Self {
            algorithm: SearchAlgorithm::Minimax,
            iterative: false,
            ..Self::default()
        }
    }

    /// Iterative-deepening alpha-beta.
    #[must_use]
    pub fn alphabeta() -> Self {
        Self::default()
    }

    /// Set the algorithm.
    pub fn with_algorithm(mut self, algorithm: SearchAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Switch to a single fixed-depth search.
    pub fn with_fixed_depth(mut self, depth: u32) -> Self {
        self.iterative = false;
        self.search_depth = depth;
        self
    }

    /// Switch to iterative deepening, capped at `max_depth` (0 = unlimited).
    pub fn with_iterative(mut self, max_depth: u32) -> Self {
        self.iterative = true;
        self.max_depth = max_depth;
        self
    }

    /// Set the timer threshold in milliseconds.
    pub fn with_timer_threshold(mut self, millis: f64) -> Self {
        self.timer_threshold_ms = millis;
        self
    }

    /// Set the fallback seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
