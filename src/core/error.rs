//! Error types for board operations.

use thiserror::Error;

use super::moves::Move;
use super::player::PlayerId;

/// Errors raised by board mutation, forecasting and loading.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IsolationError {
    /// The move is not in the active player's legal move list.
    ///
    /// Covers occupied or blocked targets, non-knight jumps, out-of-bounds
    /// coordinates and the `Move::NONE` sentinel.
    #[error("illegal move {mv} for {player}")]
    IllegalMove { player: PlayerId, mv: Move },

    /// A side is zero or larger than `MAX_BOARD_SIDE`.
    #[error("board size {width}x{height} out of range")]
    InvalidDimensions { width: usize, height: usize },

    /// The grid does not hold `width * height` cells.
    #[error("expected {expected} cells, found {found}")]
    CellCount { expected: usize, found: usize },

    /// A player's recorded position and the grid disagree.
    #[error("position of {player} does not match the grid")]
    MisplacedPlayer { player: PlayerId },

    /// The number of blocked cells does not follow from the moves played.
    #[error("expected {expected} blocked cells, found {found}")]
    BlockedCount { expected: usize, found: usize },

    /// The player to move does not follow from the move count.
    #[error("{active} cannot be to move after {move_count} moves")]
    TurnOrder { active: PlayerId, move_count: u32 },

    /// The move history is longer than the game or out of order.
    #[error("history of {recorded} records does not fit {move_count} moves")]
    History { recorded: usize, move_count: u32 },
}

/// Result alias for board operations.
pub type Result<T> = std::result::Result<T, IsolationError>;
