//! Anytime move selection.
//!
//! Runs fixed-depth searches at depth 1, 2, 3, ... and keeps the move from
//! the deepest one that finished before the deadline threshold. An aborted
//! iteration is thrown away whole; partial results from it never leak into
//! the answer.

use std::time::Instant;

use log::{debug, warn};

use crate::core::{Board, GameRng, Move};
use crate::eval::Evaluator;

use super::alphabeta::alphabeta;
use super::config::{SearchAlgorithm, SearchConfig};
use super::context::{SearchContext, SearchResult, SearchTimeout};
use super::deadline::Deadline;
use super::minimax::minimax;
use super::stats::SearchStats;

impl SearchAlgorithm {
    /// Run one fixed-depth search with this algorithm.
    pub fn search<E: Evaluator + ?Sized>(
        self,
        ctx: &mut SearchContext<'_, E>,
        board: &Board,
        depth: u32,
    ) -> Result<SearchResult, SearchTimeout> {
        match self {
            SearchAlgorithm::Minimax => minimax(ctx, board, depth),
            SearchAlgorithm::AlphaBeta => alphabeta(ctx, board, depth),
        }
    }
}

/// What a move decision produced and how.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchReport {
    /// Move to play. `Move::NONE` only when the player has no legal move.
    pub best_move: Move,

    /// Root score of the deepest completed iteration, if any ran.
    pub score: Option<f64>,

    /// Deepest iteration that completed (0 if none did).
    pub completed_depth: u32,

    /// An iteration was aborted by the deadline.
    pub timed_out: bool,

    /// No iteration completed and the move was picked at random.
    pub fallback: bool,

    /// Node counts and timing.
    pub stats: SearchStats,
}

impl SearchReport {
    fn immediate(best_move: Move) -> Self {
        Self {
            best_move,
            score: None,
            completed_depth: 0,
            timed_out: false,
            fallback: false,
            stats: SearchStats::default(),
        }
    }
}

/// Depths to try, shallowest first.
///
/// Iterative mode never goes past the number of empty cells: no game can
/// last longer than that, so deeper iterations would repeat the last one.
fn depth_schedule(board: &Board, config: &SearchConfig) -> std::ops::RangeInclusive<u32> {
    if !config.iterative {
        let depth = config.search_depth.max(1);
        return depth..=depth;
    }

    let blanks = u32::try_from(board.blank_spaces().len()).unwrap_or(u32::MAX);
    let cap = if config.max_depth > 0 {
        config.max_depth.min(blanks)
    } else {
        blanks
    };
    1..=cap.max(1)
}

/// Pick a move for the player to move on `board`.
///
/// - no legal move: returns `Move::NONE` without searching
/// - one legal move: returns it without searching
/// - otherwise deepens until the deadline, the depth cap, or a decided
///   game (infinite score); falls back to a random legal move from `rng`
///   if not even depth 1 completed
pub fn iterative_deepening<E: Evaluator + ?Sized>(
    board: &Board,
    evaluator: &E,
    deadline: &dyn Deadline,
    config: &SearchConfig,
    rng: &mut GameRng,
) -> SearchReport {
    let moves = board.active_legal_moves();
    match moves.len() {
        0 => return SearchReport::immediate(Move::NONE),
        1 => return SearchReport::immediate(moves[0]),
        _ => {}
    }

    let start = Instant::now();
    let root = board.active_player();
    let mut ctx = SearchContext::new(evaluator, deadline, config.timer_threshold_ms, root);
    let mut best: Option<SearchResult> = None;
    let mut completed_depth = 0;
    let mut timed_out = false;

    for depth in depth_schedule(board, config) {
        match config.algorithm.search(&mut ctx, board, depth) {
            Ok(result) => {
                debug!(
                    "{} depth {}: {:?} score {} ({} nodes)",
                    root,
                    depth,
                    result.best_move,
                    result.score,
                    ctx.stats().nodes
                );
                best = Some(result);
                completed_depth = depth;
                if result.score.is_infinite() {
                    break;
                }
            }
            Err(SearchTimeout) => {
                debug!("{} timed out during depth {}", root, depth);
                timed_out = true;
                break;
            }
        }
    }

    let mut stats = ctx.into_stats();
    stats.completed_depth = completed_depth;
    stats.time_us = start.elapsed().as_micros() as u64;

    let searched = best.and_then(|result| result.best_move.map(|mv| (mv, result.score)));
    match searched {
        Some((best_move, score)) => SearchReport {
            best_move,
            score: Some(score),
            completed_depth,
            timed_out,
            fallback: false,
            stats,
        },
        None => {
            let best_move = rng.choose(moves.as_slice()).copied().unwrap_or(moves[0]);
            warn!(
                "{} found no move before the deadline, playing random {}",
                root, best_move
            );
            SearchReport {
                best_move,
                score: None,
                completed_depth,
                timed_out,
                fallback: true,
                stats,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;
    use crate::eval::ImprovedScore;
    use crate::search::deadline::Unbounded;

    fn corner_board() -> Board {
        let mut board = Board::new(4, 4);
        board.apply_move(Move::new(0, 0)).unwrap();
        board.apply_move(Move::new(3, 3)).unwrap();
        board
    }

    #[test]
    fn test_depth_schedule() {
        let board = corner_board();

        let fixed = SearchConfig::minimax().with_fixed_depth(4);
        assert_eq!(depth_schedule(&board, &fixed), 4..=4);

        let zero = SearchConfig::minimax().with_fixed_depth(0);
        assert_eq!(depth_schedule(&board, &zero), 1..=1);

        let unlimited = SearchConfig::alphabeta();
        assert_eq!(depth_schedule(&board, &unlimited), 1..=14);

        let capped = SearchConfig::alphabeta().with_iterative(3);
        assert_eq!(depth_schedule(&board, &capped), 1..=3);
    }

    #[test]
    fn test_fixed_depth_reports_depth() {
        let board = corner_board();
        let config = SearchConfig::minimax().with_fixed_depth(2);
        let mut rng = GameRng::new(1);

        let report = iterative_deepening(&board, &ImprovedScore, &Unbounded, &config, &mut rng);

        assert_eq!(report.completed_depth, 2);
        assert!(!report.timed_out);
        assert!(!report.fallback);
        assert!(board.is_legal(report.best_move));
        assert_eq!(report.stats.completed_depth, 2);
    }

    #[test]
    fn test_constant_deadline_terminates() {
        // A deadline that never moves would deepen forever without the
        // blank-cell cap.
        let board = corner_board();
        let frozen = || 250.0;
        let mut rng = GameRng::new(1);

        let config = SearchConfig::alphabeta();
        let report = iterative_deepening(&board, &ImprovedScore, &frozen, &config, &mut rng);

        assert!(!report.timed_out);
        assert!(report.completed_depth >= 1);
        assert!(report.completed_depth <= 14);
        assert!(board.is_legal(report.best_move));
    }

    #[test]
    fn test_expired_deadline_falls_back() {
        let board = corner_board();
        let expired = || -1.0;
        let mut rng = GameRng::new(3);

        let config = SearchConfig::alphabeta();
        let report = iterative_deepening(&board, &ImprovedScore, &expired, &config, &mut rng);

        assert!(report.timed_out);
        assert!(report.fallback);
        assert_eq!(report.completed_depth, 0);
        assert_eq!(report.score, None);
        assert!(board.is_legal(report.best_move));
    }

    #[test]
    fn test_fallback_is_seeded() {
        let board = corner_board();
        let expired = || -1.0;
        let config = SearchConfig::alphabeta();

        let a =
            iterative_deepening(&board, &ImprovedScore, &expired, &config, &mut GameRng::new(9));
        let b =
            iterative_deepening(&board, &ImprovedScore, &expired, &config, &mut GameRng::new(9));
        assert_eq!(a.best_move, b.best_move);
    }

    #[test]
    fn test_no_moves_returns_none() {
        let mut board = Board::new(3, 1);
        board.apply_move(Move::new(0, 0)).unwrap();
        board.apply_move(Move::new(0, 2)).unwrap();
        let mut rng = GameRng::new(1);

        let config = SearchConfig::default();
        let report = iterative_deepening(&board, &ImprovedScore, &Unbounded, &config, &mut rng);

        assert!(report.best_move.is_none());
        assert_eq!(report.stats.nodes, 0);
    }

    #[test]
    fn test_decided_game_stops_deepening() {
        // 3x3: Player 1 at a corner, Player 2 in the middle (which has no
        // knight moves). Any Player 1 move leaves Player 2 stuck.
        let mut board = Board::new(3, 3);
        board.apply_move(Move::new(0, 0)).unwrap();
        board.apply_move(Move::new(1, 1)).unwrap();
        let mut rng = GameRng::new(1);

        let config = SearchConfig::alphabeta();
        let report = iterative_deepening(&board, &ImprovedScore, &Unbounded, &config, &mut rng);

        assert_eq!(report.score, Some(f64::INFINITY));
        assert_eq!(report.completed_depth, 1);
        assert_eq!(report.best_move, Move::new(1, 2));
        assert_eq!(board.active_player(), PlayerId::ONE);
    }
}
