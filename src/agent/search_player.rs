use log::debug;

use crate::core::{Board, GameRng, Move};
use crate::eval::{Evaluator, ImprovedScore};
use crate::search::{iterative_deepening, Deadline, SearchAlgorithm, SearchConfig, SearchReport};

use super::Agent;

/// Agent backed by minimax or alpha-beta search.
///
/// Generic over the evaluator, so closures and heuristic structs are
/// dispatched statically.
///
/// ```
/// use isolation::agent::{Agent, SearchPlayer};
/// use isolation::core::Board;
/// use isolation::eval::OpenMoveScore;
/// use isolation::search::{SearchConfig, Unbounded};
///
/// let mut board = Board::new(5, 5);
/// board.apply_move((2, 2).into()).unwrap();
/// board.apply_move((0, 0).into()).unwrap();
///
/// let mut player = SearchPlayer::new(OpenMoveScore, SearchConfig::minimax());
/// let mv = player.choose_move(&board, &Unbounded);
/// assert!(board.is_legal(mv));
/// ```
pub struct SearchPlayer<E: Evaluator> {
    evaluator: E,
    config: SearchConfig,
    rng: GameRng,
    last_report: Option<SearchReport>,
}

impl<E: Evaluator> SearchPlayer<E> {
    /// Create a search player with `evaluator` and `config`.
    pub fn new(evaluator: E, config: SearchConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self {
            evaluator,
            config,
            rng,
            last_report: None,
        }
    }

    /// Fixed-depth minimax player.
    pub fn minimax(evaluator: E, depth: u32) -> Self {
        Self::new(evaluator, SearchConfig::minimax().with_fixed_depth(depth))
    }

    /// Iterative-deepening alpha-beta player.
    pub fn alphabeta(evaluator: E) -> Self {
        Self::new(evaluator, SearchConfig::alphabeta())
    }

    /// Search configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Evaluator in use.
    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Report from the most recent `choose_move`.
    pub fn last_report(&self) -> Option<&SearchReport> {
        self.last_report.as_ref()
    }
}

impl Default for SearchPlayer<ImprovedScore> {
    fn default() -> Self {
        Self::alphabeta(ImprovedScore)
    }
}

impl<E: Evaluator> Agent for SearchPlayer<E> {
    fn choose_move(&mut self, board: &Board, deadline: &dyn Deadline) -> Move {
        let report = iterative_deepening(
            board,
            &self.evaluator,
            deadline,
            &self.config,
            &mut self.rng,
        );

        debug!(
            "{} plays {} (depth {}, {} nodes, {} us)",
            board.active_player(),
            report.best_move,
            report.completed_depth,
            report.stats.nodes,
            report.stats.time_us
        );

        let mv = report.best_move;
        self.last_report = Some(report);
        mv
    }

    fn name(&self) -> &str {
        match self.config.algorithm {
            SearchAlgorithm::Minimax => "minimax",
            SearchAlgorithm::AlphaBeta => "alphabeta",
        }
    }
}
