//! Board configuration.

use serde::{Deserialize, Serialize};

/// Largest supported board side.
///
/// Keeps `width * height` and every coordinate comfortably inside `i32`.
pub const MAX_BOARD_SIDE: usize = 1024;

/// Board dimensions.
///
/// The classic Isolation board is 7x7.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of columns.
    pub width: usize,

    /// Number of rows.
    pub height: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: 7,
            height: 7,
        }
    }
}

impl BoardConfig {
    /// Create a config with the given dimensions.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Create a square board config.
    #[must_use]
    pub fn square(side: usize) -> Self {
        Self::new(side, side)
    }

    /// Set the width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Set the height.
    pub fn with_height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    /// Total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Both sides are in `1..=MAX_BOARD_SIDE`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        (1..=MAX_BOARD_SIDE).contains(&self.width) && (1..=MAX_BOARD_SIDE).contains(&self.height)
    }

    /// Panic unless both sides are in `1..=MAX_BOARD_SIDE`.
    pub fn validate(&self) {
        assert!(self.width > 0 && self.height > 0, "Board must have at least 1 cell");
        assert!(
            self.width <= MAX_BOARD_SIDE && self.height <= MAX_BOARD_SIDE,
            "Board side must be at most {}",
            MAX_BOARD_SIDE
        );
    }
}
