//! Move representation: a `(row, col)` target cell.
//!
//! A move names the cell the active player jumps into. Placement moves (a
//! player's first move) may target any empty cell; every later move must be
//! a knight displacement from the player's current cell.
//!
//! `Move::NONE` is the `(-1, -1)` sentinel agents return when they have no
//! legal move.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;

/// Knight displacements, in the order legal moves are enumerated.
pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Legal move list.
///
/// SmallVec holds the eight knight destinations inline; only placement
/// moves (every empty cell) spill to the heap.
pub type MoveList = SmallVec<[Move; 8]>;

/// A board coordinate used as a move target or player location.
///
/// ## Example
///
/// ```
/// use isolation::core::Move;
///
/// let mv = Move::new(2, 1);
/// assert_eq!(mv.offset(-2, -1), Move::new(0, 0));
/// assert!(mv.is_knight_jump_from(Move::new(0, 0)));
/// assert!(Move::NONE.is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub row: i32,
    pub col: i32,
}

impl Move {
    /// "No move" sentinel.
    pub const NONE: Move = Move { row: -1, col: -1 };

    /// Create a move targeting `(row, col)`.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Check if this is the no-move sentinel.
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.row == Self::NONE.row && self.col == Self::NONE.col
    }

    /// The coordinate displaced by `(d_row, d_col)`.
    #[must_use]
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self::new(self.row + d_row, self.col + d_col)
    }

    /// Check if `self` is exactly one knight jump away from `from`.
    #[must_use]
    pub fn is_knight_jump_from(self, from: Move) -> bool {
        (self.row - from.row).abs() * (self.col - from.col).abs() == 2
    }
}

impl From<(i32, i32)> for Move {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A move as it was played, for board history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who moved.
    pub player: PlayerId,

    /// The target cell.
    pub mv: Move,

    /// Ply at which the move was made (0 for the first move of the game).
    pub ply: u32,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(player: PlayerId, mv: Move, ply: u32) -> Self {
        Self { player, mv, ply }
    }
}
