//! # isolation
//!
//! Isolation board game engine with adversarial search agents.
//!
//! Two players move like chess knights on a rectangular grid. Every cell a
//! player leaves is blocked for good, and the player to move with no legal
//! move loses.
//!
//! ## Design Principles
//!
//! 1. **Copy-on-Forecast**: Search never mutates a board. Each node owns the
//!    board it forecast, so sibling branches cannot see each other.
//!
//! 2. **Injected Strategies**: The evaluator and the deadline are supplied
//!    by the caller. Closures work for both.
//!
//! 3. **Anytime Answers**: Under a deadline the agent always has a legal
//!    move to return, from the deepest finished search or at random.
//!
//! ## Modules
//!
//! - `core`: Players, moves, board, configuration, errors, RNG
//! - `eval`: Evaluator trait and heuristics
//! - `search`: Minimax, alpha-beta, iterative deepening, deadlines
//! - `agent`: Agents that pick moves
//! - `arena`: Matches between two agents
//!
//! ## Example
//!
//! ```
//! use isolation::{play_match, Board, MatchConfig, RandomPlayer, SearchPlayer};
//! use isolation::eval::ImprovedScore;
//!
//! let mut searcher = SearchPlayer::minimax(ImprovedScore, 2);
//! let mut random = RandomPlayer::new(7);
//! let config = MatchConfig::default().with_enforce_timeout(false);
//!
//! let outcome = play_match(Board::new(5, 5), &mut searcher, &mut random, &config);
//! assert!(outcome.board.is_winner(outcome.winner));
//! ```

pub mod core;
pub mod eval;
pub mod search;
pub mod agent;
pub mod arena;

// Re-export commonly used types
pub use crate::core::{
    Board, BoardConfig, Cell, GameRng, IsolationError, Move, MoveList, MoveRecord, PlayerId,
    PlayerMap,
};

pub use crate::eval::{Evaluator, ImprovedScore};

pub use crate::search::{
    alphabeta, iterative_deepening, minimax, Countdown, Deadline, SearchAlgorithm, SearchConfig,
    SearchContext, SearchReport, SearchResult, SearchStats, SearchTimeout, Unbounded,
};

pub use crate::agent::{Agent, RandomPlayer, SearchPlayer};

pub use crate::arena::{play_match, EndReason, MatchConfig, MatchOutcome};
