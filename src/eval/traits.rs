//! Evaluator trait: the scoring interface the search depends on.
//!
//! Search calls `score` at every leaf that is not already terminal, always
//! from the root player's point of view.
//!
//! ## Contract
//!
//! - `-inf` exactly when `board.is_loser(player)`
//! - `+inf` exactly when `board.is_winner(player)`
//! - finite otherwise
//!
//! Any evaluator meeting the contract can be swapped in. Plain closures
//! work too:
//!
//! ```
//! use isolation::core::{Board, PlayerId};
//! use isolation::eval::Evaluator;
//!
//! let moves_left = |board: &Board, player: PlayerId| board.legal_moves(player).len() as f64;
//! assert_eq!(moves_left.score(&Board::new(3, 3), PlayerId::ONE), 9.0);
//! ```

use crate::core::{Board, PlayerId};

/// Heuristic board evaluation.
pub trait Evaluator {
    /// Score `board` from `player`'s point of view. Higher is better.
    fn score(&self, board: &Board, player: PlayerId) -> f64;
}

impl<F> Evaluator for F
where
    F: Fn(&Board, PlayerId) -> f64,
{
    fn score(&self, board: &Board, player: PlayerId) -> f64 {
        self(board, player)
    }
}

/// Terminal score shared by the built-in heuristics.
///
/// `Some(±inf)` when `board` is decided for `player`, `None` otherwise.
#[must_use]
pub fn terminal_score(board: &Board, player: PlayerId) -> Option<f64> {
    if board.is_loser(player) {
        Some(f64::NEG_INFINITY)
    } else if board.is_winner(player) {
        Some(f64::INFINITY)
    } else {
        None
    }
}
