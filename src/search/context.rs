//! Per-search state shared by minimax and alpha-beta.
//!
//! Holds the injected evaluator and deadline, the root player every score
//! is relative to, and the running statistics. Board state is never stored
//! here: each frame owns the board it forecast.

use thiserror::Error;

use crate::core::{Board, Move, PlayerId};
use crate::eval::Evaluator;

use super::deadline::Deadline;
use super::stats::SearchStats;

/// The deadline threshold was crossed; the current iteration is void.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("search deadline reached")]
pub struct SearchTimeout;

/// Outcome of one fixed-depth search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchResult {
    /// Best root move, `None` if the root player has no legal move or the
    /// depth was 0.
    pub best_move: Option<Move>,

    /// Root score from the root player's point of view.
    pub score: f64,
}

/// Search context.
pub struct SearchContext<'a, E: Evaluator + ?Sized> {
    evaluator: &'a E,
    deadline: &'a dyn Deadline,
    timer_threshold: f64,
    root_player: PlayerId,
    pub(crate) stats: SearchStats,
}

impl<'a, E: Evaluator + ?Sized> SearchContext<'a, E> {
    /// Create a context for searching on behalf of `root_player`.
    pub fn new(
        evaluator: &'a E,
        deadline: &'a dyn Deadline,
        timer_threshold: f64,
        root_player: PlayerId,
    ) -> Self {
        Self {
            evaluator,
            deadline,
            timer_threshold,
            root_player,
            stats: SearchStats::default(),
        }
    }

    /// The player every score is relative to.
    #[must_use]
    pub fn root_player(&self) -> PlayerId {
        self.root_player
    }

    /// Statistics so far.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Consume the context, keeping its statistics.
    #[must_use]
    pub fn into_stats(self) -> SearchStats {
        self.stats
    }

    /// Poll the deadline before doing any work at a node.
    pub(crate) fn enter_node(&mut self) -> Result<(), SearchTimeout> {
        if self.deadline.time_left() < self.timer_threshold {
            return Err(SearchTimeout);
        }
        self.stats.nodes += 1;
        Ok(())
    }

    /// Heuristic leaf score.
    pub(crate) fn evaluate(&mut self, board: &Board) -> f64 {
        self.stats.evaluations += 1;
        self.evaluator.score(board, self.root_player)
    }

    /// Exact score of a node where the player to move is stuck.
    pub(crate) fn terminal(&mut self, board: &Board) -> f64 {
        self.stats.terminals += 1;
        board.utility(self.root_player)
    }
}
