use crate::core::{Board, GameRng, Move};
use crate::search::Deadline;

use super::Agent;

/// Plays a uniformly random legal move. Seeded, so games replay exactly.
#[derive(Clone, Debug)]
pub struct RandomPlayer {
    rng: GameRng,
}

impl RandomPlayer {
    /// Create a random player with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl Agent for RandomPlayer {
    fn choose_move(&mut self, board: &Board, _deadline: &dyn Deadline) -> Move {
        let moves = board.active_legal_moves();
        self.rng
            .choose(moves.as_slice())
            .copied()
            .unwrap_or(Move::NONE)
    }

    fn name(&self) -> &str {
        "random"
    }
}
