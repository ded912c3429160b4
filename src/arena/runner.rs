//! Match loop between two agents.
//!
//! The runner owns the authoritative board. Agents only ever see it by
//! shared reference; their answers are validated with `apply_move` before
//! they take effect.

use im::Vector;
use log::info;
use serde::{Deserialize, Serialize};

use crate::agent::Agent;
use crate::core::{Board, Move, MoveRecord, PlayerId};
use crate::search::{Countdown, Deadline};

/// Configuration for a match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Milliseconds each agent gets per move.
    pub time_limit_ms: u64,

    /// Forfeit an agent that answers after its time limit.
    pub enforce_timeout: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            time_limit_ms: 150,
            enforce_timeout: true,
        }
    }
}

impl MatchConfig {
    /// Create a match config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-move time limit.
    pub fn with_time_limit(mut self, millis: u64) -> Self {
        self.time_limit_ms = millis;
        self
    }

    /// Enable or disable timeout forfeits.
    pub fn with_enforce_timeout(mut self, enforce: bool) -> Self {
        self.enforce_timeout = enforce;
        self
    }
}

/// Why a match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// The loser had no legal move on their turn.
    NoLegalMoves,
    /// The loser answered after the time limit.
    Timeout,
    /// The loser returned a move that was not legal.
    IllegalMove(Move),
}

/// Result of a finished match.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchOutcome {
    /// Winning player.
    pub winner: PlayerId,

    /// How the loser lost.
    pub reason: EndReason,

    /// Board as it stood when the match ended.
    pub board: Board,
}

impl MatchOutcome {
    /// Losing player.
    #[must_use]
    pub fn loser(&self) -> PlayerId {
        self.winner.opponent()
    }

    /// Every move played, in order.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        self.board.history()
    }
}

/// Play `player_one` against `player_two` from `board` until one loses.
pub fn play_match(
    board: Board,
    player_one: &mut dyn Agent,
    player_two: &mut dyn Agent,
    config: &MatchConfig,
) -> MatchOutcome {
    let mut board = board;

    let (loser, reason) = loop {
        let active = board.active_player();
        if !board.has_legal_move(active) {
            break (active, EndReason::NoLegalMoves);
        }

        let agent: &mut dyn Agent = if active == PlayerId::ONE {
            &mut *player_one
        } else {
            &mut *player_two
        };

        let deadline = Countdown::from_millis(config.time_limit_ms);
        let mv = agent.choose_move(&board, &deadline);

        if config.enforce_timeout && deadline.time_left() <= 0.0 {
            break (active, EndReason::Timeout);
        }
        if board.apply_move(mv).is_err() {
            break (active, EndReason::IllegalMove(mv));
        }
    };

    let winner = loser.opponent();
    info!(
        "{} beat {} after {} moves ({:?})",
        winner,
        loser,
        board.move_count(),
        reason
    );

    MatchOutcome {
        winner,
        reason,
        board,
    }
}
