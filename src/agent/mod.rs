//! Game-playing agents.
//!
//! An agent is asked for one move at a time and gets the board plus a
//! deadline oracle for that move. Agents never mutate the board they are
//! shown; the arena applies the returned move.

mod random;
mod search_player;

pub use random::RandomPlayer;
pub use search_player::SearchPlayer;

use crate::core::{Board, Move};
use crate::search::Deadline;

/// Something that picks moves for the active player.
pub trait Agent {
    /// Choose a move for `board.active_player()`.
    ///
    /// Returns `Move::NONE` if and only if that player has no legal move.
    fn choose_move(&mut self, board: &Board, deadline: &dyn Deadline) -> Move;

    /// Short name for logs.
    fn name(&self) -> &str {
        "agent"
    }
}
