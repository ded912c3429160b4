//! Core game types: players, moves, board, configuration, errors, RNG.
//!
//! Everything the search needs to walk the game tree lives here. The board
//! is the only place game rules are encoded.

pub mod player;
pub mod moves;
pub mod config;
pub mod error;
pub mod board;
pub mod rng;

pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use moves::{Move, MoveList, MoveRecord, KNIGHT_OFFSETS};
pub use config::{BoardConfig, MAX_BOARD_SIDE};
pub use error::{IsolationError, Result};
pub use board::{Board, Cell};
pub use rng::GameRng;
