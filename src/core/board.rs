//! Isolation board: occupancy grid, player positions and turn order.
//!
//! ## Rules
//!
//! - Player 1 moves first. A player's first move places them on any empty
//!   cell; every later move is a knight jump onto an empty cell.
//! - The cell a player leaves becomes `Blocked` for the rest of the game.
//! - The player to move with no legal move loses.
//!
//! ## Forecasting
//!
//! `forecast_move` returns a fresh board with its own copy of the grid, so
//! sibling branches in a search never observe each other's moves. The move
//! history is an `im::Vector`; cloning a board only bumps a reference count.
//! Search forecasts do not append to it, so inside a search the history
//! stops at the search root.
//!
//! ## Loading
//!
//! Deserialized boards are checked before use: dimensions, grid size,
//! player markers against recorded positions, blocked cells, turn order and
//! history.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::BoardConfig;
use super::error::{IsolationError, Result};
use super::moves::{Move, MoveList, MoveRecord, KNIGHT_OFFSETS};
use super::player::{PlayerId, PlayerMap};

/// Contents of a single board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Available to move into.
    #[default]
    Empty,
    /// Previously occupied; can never be entered again.
    Blocked,
    /// Currently occupied by a player.
    Occupied(PlayerId),
}

/// Isolation game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    width: usize,
    height: usize,

    /// Row-major occupancy grid.
    cells: Vec<Cell>,

    /// Current cell of each player; `None` until their first move.
    positions: PlayerMap<Option<Move>>,

    active_player: PlayerId,

    move_count: u32,

    history: Vector<MoveRecord>,
}

impl Default for Board {
    fn default() -> Self {
        Self::with_config(BoardConfig::default())
    }
}

impl Board {
    /// Create an empty `width` x `height` board with Player 1 to move.
    ///
    /// # Panics
    ///
    /// Panics if either side is zero or larger than `MAX_BOARD_SIDE`.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_config(BoardConfig::new(width, height))
    }

    /// Create an empty board from a config.
    #[must_use]
    pub fn with_config(config: BoardConfig) -> Self {
        config.validate();

        Self {
            width: config.width,
            height: config.height,
            cells: vec![Cell::Empty; config.cell_count()],
            positions: PlayerMap::with_default(),
            active_player: PlayerId::ONE,
            move_count: 0,
            history: Vector::new(),
        }
    }

    // === Lookups ===

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Dimensions as a config.
    #[must_use]
    pub fn config(&self) -> BoardConfig {
        BoardConfig::new(self.width, self.height)
    }

    /// Moves applied so far.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// The player to move.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active_player
    }

    /// The player who just moved (or Player 2 before the first move).
    #[must_use]
    pub fn inactive_player(&self) -> PlayerId {
        self.active_player.opponent()
    }

    /// The opponent of `player`.
    #[must_use]
    pub fn opponent(&self, player: PlayerId) -> PlayerId {
        player.opponent()
    }

    /// Current cell of `player`, or `None` if they have not been placed yet.
    #[must_use]
    pub fn player_location(&self, player: PlayerId) -> Option<Move> {
        self.positions[player]
    }

    /// Moves applied through `apply_move` and `forecast_move`, oldest first.
    ///
    /// Boards forecast inside a search keep the history of the search root,
    /// so this can be shorter than `move_count`.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Check if `mv` lies on the board.
    #[must_use]
    pub fn in_bounds(&self, mv: Move) -> bool {
        mv.row >= 0
            && mv.col >= 0
            && (mv.row as usize) < self.height
            && (mv.col as usize) < self.width
    }

    fn index_of(&self, mv: Move) -> Option<usize> {
        self.in_bounds(mv).then(|| mv.row as usize * self.width + mv.col as usize)
    }

    /// Contents of `(row, col)`, or `None` if out of bounds.
    #[must_use]
    pub fn cell(&self, row: i32, col: i32) -> Option<Cell> {
        self.index_of(Move::new(row, col)).map(|i| self.cells[i])
    }

    /// Check if `mv` is an in-bounds empty cell.
    #[must_use]
    pub fn is_empty(&self, mv: Move) -> bool {
        self.index_of(mv).is_some_and(|i| self.cells[i] == Cell::Empty)
    }

    /// All empty cells in row-major order.
    #[must_use]
    pub fn blank_spaces(&self) -> Vec<Move> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(i, _)| self.coord_of(i))
            .collect()
    }

    fn coord_of(&self, index: usize) -> Move {
        Move::new((index / self.width) as i32, (index % self.width) as i32)
    }

    // === Move Generation ===

    /// Legal moves for `player`, whether or not it is their turn.
    ///
    /// - Unplaced: every empty cell, row-major.
    /// - Placed: empty knight destinations, in `KNIGHT_OFFSETS` order.
    ///
    /// Empty when the player is blocked in.
    #[must_use]
    pub fn legal_moves(&self, player: PlayerId) -> MoveList {
        match self.positions[player] {
            None => self.blank_spaces().into_iter().collect(),
            Some(from) => KNIGHT_OFFSETS
                .iter()
                .map(|&(dr, dc)| from.offset(dr, dc))
                .filter(|&to| self.is_empty(to))
                .collect(),
        }
    }

    /// Legal moves for the player to move.
    #[must_use]
    pub fn active_legal_moves(&self) -> MoveList {
        self.legal_moves(self.active_player)
    }

    /// Check if `player` has at least one legal move.
    ///
    /// Stops at the first hit instead of building the move list.
    #[must_use]
    pub fn has_legal_move(&self, player: PlayerId) -> bool {
        match self.positions[player] {
            None => self.cells.contains(&Cell::Empty),
            Some(from) => KNIGHT_OFFSETS
                .iter()
                .any(|&(dr, dc)| self.is_empty(from.offset(dr, dc))),
        }
    }

    /// Check if `mv` is legal for `player`.
    ///
    /// Equivalent to `legal_moves(player).contains(&mv)`.
    #[must_use]
    pub fn is_legal_for(&self, player: PlayerId, mv: Move) -> bool {
        self.is_empty(mv)
            && self.positions[player].map_or(true, |from| mv.is_knight_jump_from(from))
    }

    /// Check if `mv` is legal for the player to move.
    #[must_use]
    pub fn is_legal(&self, mv: Move) -> bool {
        self.is_legal_for(self.active_player, mv)
    }

    // === Transitions ===

    /// Move the active player into `mv` and pass the turn.
    ///
    /// The vacated cell becomes `Blocked`. On error the board is unchanged.
    pub fn apply_move(&mut self, mv: Move) -> Result<()> {
        if !self.is_legal(mv) {
            return Err(IsolationError::IllegalMove {
                player: self.active_player,
                mv,
            });
        }
        self.history
            .push_back(MoveRecord::new(self.active_player, mv, self.move_count));
        self.play(mv);
        Ok(())
    }

    /// The board that results from the active player playing `mv`.
    ///
    /// Never mutates `self`.
    pub fn forecast_move(&self, mv: Move) -> Result<Board> {
        let mut next = self.clone();
        next.apply_move(mv)?;
        Ok(next)
    }

    /// Forecast for a move taken from `active_legal_moves`.
    ///
    /// Search hot path: skips the legality re-check and leaves the history
    /// alone, so the only allocation is the grid.
    pub(crate) fn forecast_legal(&self, mv: Move) -> Board {
        debug_assert!(self.is_legal(mv), "forecast of illegal move {}", mv);
        let mut next = self.clone();
        next.play(mv);
        next
    }

    fn play(&mut self, mv: Move) {
        let player = self.active_player;

        if let Some(prev) = self.positions[player].and_then(|p| self.index_of(p)) {
            self.cells[prev] = Cell::Blocked;
        }
        if let Some(target) = self.index_of(mv) {
            self.cells[target] = Cell::Occupied(player);
        }
        self.positions[player] = Some(mv);
        self.move_count += 1;
        self.active_player = player.opponent();
    }

    // === Terminal Detection ===

    /// `player` is to move and has no legal move.
    #[must_use]
    pub fn is_loser(&self, player: PlayerId) -> bool {
        player == self.active_player && !self.has_legal_move(player)
    }

    /// `player`'s opponent is to move and has no legal move.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.is_loser(player.opponent())
    }

    /// The winner, if the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.is_loser(self.active_player).then(|| self.inactive_player())
    }

    /// `+inf` if `player` has won, `-inf` if they have lost, `0` otherwise.
    #[must_use]
    pub fn utility(&self, player: PlayerId) -> f64 {
        if self.is_winner(player) {
            f64::INFINITY
        } else if self.is_loser(player) {
            f64::NEG_INFINITY
        } else {
            0.0
        }
    }
}

/// Unchecked wire form of `Board`.
#[derive(Deserialize)]
struct RawBoard {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    positions: PlayerMap<Option<Move>>,
    active_player: PlayerId,
    move_count: u32,
    history: Vector<MoveRecord>,
}

impl TryFrom<RawBoard> for Board {
    type Error = IsolationError;

    fn try_from(raw: RawBoard) -> Result<Self> {
        let RawBoard {
            width,
            height,
            cells,
            positions,
            active_player,
            move_count,
            history,
        } = raw;

        if !BoardConfig::new(width, height).is_valid() {
            return Err(IsolationError::InvalidDimensions { width, height });
        }
        if cells.len() != width * height {
            return Err(IsolationError::CellCount {
                expected: width * height,
                found: cells.len(),
            });
        }

        let board = Board {
            width,
            height,
            cells,
            positions,
            active_player,
            move_count,
            history,
        };

        let mut placed = 0;
        for player in PlayerId::all() {
            let markers = board
                .cells
                .iter()
                .filter(|&&cell| cell == Cell::Occupied(player))
                .count();
            let consistent = match board.positions[player] {
                Some(at) => {
                    placed += 1;
                    markers == 1 && board.cell(at.row, at.col) == Some(Cell::Occupied(player))
                }
                None => markers == 0,
            };
            if !consistent {
                return Err(IsolationError::MisplacedPlayer { player });
            }
        }

        let moves = board.move_count as usize;
        let blocked = board.cells.iter().filter(|&&cell| cell == Cell::Blocked).count();
        if moves < placed || blocked != moves - placed {
            return Err(IsolationError::BlockedCount {
                expected: moves.saturating_sub(placed),
                found: blocked,
            });
        }

        let expected_active = if moves % 2 == 0 {
            PlayerId::ONE
        } else {
            PlayerId::TWO
        };
        if board.active_player != expected_active {
            return Err(IsolationError::TurnOrder {
                active: board.active_player,
                move_count: board.move_count,
            });
        }

        let ordered = board.history.iter().enumerate().all(|(ply, record)| {
            let mover = if ply % 2 == 0 {
                PlayerId::ONE
            } else {
                PlayerId::TWO
            };
            record.ply as usize == ply && record.player == mover
        });
        if board.history.len() > moves || !ordered {
            return Err(IsolationError::History {
                recorded: board.history.len(),
                move_count: board.move_count,
            });
        }

        Ok(board)
    }
}

impl std::fmt::Display for Board {
    /// Grid rendering: `1`/`2` players, `-` blocked, `.` empty.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "  ")?;
        for col in 0..self.width {
            write!(f, " {}", col % 10)?;
        }
        writeln!(f)?;

        for row in 0..self.height {
            write!(f, "{:>2}", row % 100)?;
            for col in 0..self.width {
                let symbol = match self.cells[row * self.width + col] {
                    Cell::Empty => '.',
                    Cell::Blocked => '-',
                    Cell::Occupied(PlayerId::ONE) => '1',
                    Cell::Occupied(_) => '2',
                };
                write!(f, " {}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placed(width: usize, height: usize, p1: Move, p2: Move) -> Board {
        let mut board = Board::new(width, height);
        board.apply_move(p1).unwrap();
        board.apply_move(p2).unwrap();
        board
    }

    #[test]
    fn test_new_board() {
        let board = Board::default();

        assert_eq!(board.width(), 7);
        assert_eq!(board.height(), 7);
        assert_eq!(board.move_count(), 0);
        assert_eq!(board.active_player(), PlayerId::ONE);
        assert_eq!(board.inactive_player(), PlayerId::TWO);
        assert_eq!(board.player_location(PlayerId::ONE), None);
        assert_eq!(board.blank_spaces().len(), 49);
    }

    #[test]
    fn test_unplaced_player_may_move_anywhere_empty() {
        let board = Board::new(3, 2);
        let moves = board.legal_moves(PlayerId::ONE);

        assert_eq!(moves.len(), 6);
        assert_eq!(moves[0], Move::new(0, 0));
        assert_eq!(moves[5], Move::new(1, 2));
    }

    #[test]
    fn test_second_placement_excludes_occupied_cell() {
        let mut board = Board::new(3, 3);
        board.apply_move(Move::new(1, 1)).unwrap();

        let moves = board.active_legal_moves();
        assert_eq!(moves.len(), 8);
        assert!(!moves.contains(&Move::new(1, 1)));
    }

    #[test]
    fn test_knight_moves_in_offset_order() {
        let board = placed(7, 7, Move::new(3, 3), Move::new(0, 0));

        let moves = board.legal_moves(PlayerId::ONE);
        let expected: Vec<Move> = KNIGHT_OFFSETS
            .iter()
            .map(|&(dr, dc)| Move::new(3 + dr, 3 + dc))
            .collect();
        assert_eq!(moves.to_vec(), expected);
    }

    #[test]
    fn test_corner_knight_moves() {
        let board = placed(4, 4, Move::new(0, 0), Move::new(3, 3));

        assert_eq!(
            board.legal_moves(PlayerId::ONE).to_vec(),
            vec![Move::new(1, 2), Move::new(2, 1)]
        );
    }

    #[test]
    fn test_apply_move_blocks_vacated_cell() {
        let mut board = placed(4, 4, Move::new(0, 0), Move::new(3, 3));
        board.apply_move(Move::new(1, 2)).unwrap();

        assert_eq!(board.cell(0, 0), Some(Cell::Blocked));
        assert_eq!(board.cell(1, 2), Some(Cell::Occupied(PlayerId::ONE)));
        assert_eq!(board.player_location(PlayerId::ONE), Some(Move::new(1, 2)));
        assert_eq!(board.active_player(), PlayerId::TWO);
        assert_eq!(board.move_count(), 3);
        assert_eq!(board.history().len(), 3);
        assert_eq!(
            board.history().back(),
            Some(&MoveRecord::new(PlayerId::ONE, Move::new(1, 2), 2))
        );
    }

    #[test]
    fn test_illegal_moves_rejected() {
        let mut board = placed(4, 4, Move::new(0, 0), Move::new(3, 3));
        let before = board.clone();

        for mv in [Move::new(1, 1), Move::new(3, 3), Move::new(4, 2), Move::NONE] {
            assert_eq!(
                board.apply_move(mv),
                Err(IsolationError::IllegalMove {
                    player: PlayerId::ONE,
                    mv
                })
            );
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_blocked_cell_is_not_reenterable() {
        let mut board = placed(5, 5, Move::new(0, 0), Move::new(4, 4));
        board.apply_move(Move::new(1, 2)).unwrap();
        board.apply_move(Move::new(3, 2)).unwrap();

        assert!(!board.active_legal_moves().contains(&Move::new(0, 0)));
        assert!(board.apply_move(Move::new(0, 0)).is_err());
    }

    #[test]
    fn test_forecast_does_not_mutate() {
        let board = placed(4, 4, Move::new(0, 0), Move::new(3, 3));
        let before = board.clone();

        let next = board.forecast_move(Move::new(2, 1)).unwrap();

        assert_eq!(board, before);
        assert_eq!(next.player_location(PlayerId::ONE), Some(Move::new(2, 1)));
        assert_eq!(next.cell(0, 0), Some(Cell::Blocked));
        assert_eq!(board.cell(0, 0), Some(Cell::Occupied(PlayerId::ONE)));
    }

    #[test]
    fn test_forecast_illegal_move() {
        let board = placed(4, 4, Move::new(0, 0), Move::new(3, 3));
        assert!(board.forecast_move(Move::new(0, 1)).is_err());
    }

    #[test]
    fn test_terminal_detection() {
        // Every move on a 3x3 board is forced after the opening placements.
        let mut board = Board::new(3, 3);
        for mv in [(0, 0), (1, 2), (2, 1), (2, 0), (0, 2), (0, 1), (1, 0), (2, 2)] {
            assert!(board.is_legal(Move::from(mv)));
            board.apply_move(Move::from(mv)).unwrap();
        }

        // Player 1 at (1,0): (0,2) is blocked and (2,2) holds Player 2.
        assert!(board.active_legal_moves().is_empty());
        assert!(board.is_loser(PlayerId::ONE));
        assert!(board.is_winner(PlayerId::TWO));
        assert!(!board.is_loser(PlayerId::TWO));
        assert_eq!(board.winner(), Some(PlayerId::TWO));
        assert_eq!(board.utility(PlayerId::ONE), f64::NEG_INFINITY);
        assert_eq!(board.utility(PlayerId::TWO), f64::INFINITY);
    }

    #[test]
    fn test_utility_zero_when_not_terminal() {
        let board = placed(5, 5, Move::new(2, 2), Move::new(0, 0));
        assert_eq!(board.utility(PlayerId::ONE), 0.0);
        assert_eq!(board.utility(PlayerId::TWO), 0.0);
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_loser_requires_being_active() {
        // Player 2 is boxed in on a 1x3 strip but it is Player 1's turn.
        let mut board = Board::new(3, 1);
        board.apply_move(Move::new(0, 0)).unwrap();
        board.apply_move(Move::new(0, 2)).unwrap();

        assert!(!board.has_legal_move(PlayerId::TWO));
        assert!(!board.is_loser(PlayerId::TWO));
        assert!(board.is_loser(PlayerId::ONE));
    }

    #[test]
    fn test_display() {
        let board = placed(3, 2, Move::new(0, 0), Move::new(1, 2));
        let rendered = board.to_string();

        assert_eq!(rendered, "   0 1 2\n 0 1 . .\n 1 . . 2\n");
    }

    #[test]
    fn test_board_serialization() {
        let board = placed(4, 4, Move::new(0, 0), Move::new(3, 3));
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }

    #[test]
    fn test_search_forecast_keeps_root_history() {
        let board = placed(4, 4, Move::new(0, 0), Move::new(3, 3));

        let child = board.forecast_legal(Move::new(1, 2));
        assert_eq!(child.move_count(), 3);
        assert_eq!(child.history(), board.history());
        assert_eq!(child.cell(0, 0), Some(Cell::Blocked));
        assert_eq!(child.player_location(PlayerId::ONE), Some(Move::new(1, 2)));

        // Still loads: a short history is allowed.
        let json = serde_json::to_string(&child).unwrap();
        let loaded: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, child);

        // Public forecasts record the move.
        let next = board.forecast_move(Move::new(1, 2)).unwrap();
        assert_eq!(next.history().len(), 3);
    }

    fn load(value: serde_json::Value) -> std::result::Result<Board, String> {
        serde_json::from_value(value).map_err(|e| e.to_string())
    }

    fn saved(board: &Board) -> serde_json::Value {
        serde_json::to_value(board).unwrap()
    }

    #[test]
    fn test_load_rejects_bad_dimensions() {
        let mut value = saved(&placed(4, 4, Move::new(0, 0), Move::new(3, 3)));
        value["width"] = serde_json::json!(0);

        let err = load(value).unwrap_err();
        assert!(err.contains("out of range"), "{}", err);
    }

    #[test]
    fn test_load_rejects_short_grid() {
        let mut value = saved(&placed(4, 4, Move::new(0, 0), Move::new(3, 3)));
        value["cells"] = serde_json::json!([]);

        let err = load(value).unwrap_err();
        assert!(err.contains("expected 16 cells, found 0"), "{}", err);
    }

    #[test]
    fn test_load_rejects_misplaced_player() {
        let board = placed(4, 4, Move::new(0, 0), Move::new(3, 3));

        // Marker erased under Player 1.
        let mut value = saved(&board);
        value["cells"][0] = serde_json::to_value(Cell::Empty).unwrap();
        let err = load(value).unwrap_err();
        assert!(err.contains("Player 1"), "{}", err);

        // Second marker for Player 2.
        let mut value = saved(&board);
        value["cells"][5] = serde_json::to_value(Cell::Occupied(PlayerId::TWO)).unwrap();
        let err = load(value).unwrap_err();
        assert!(err.contains("Player 2"), "{}", err);

        // Marker with no recorded position.
        let mut value = saved(&Board::new(4, 4));
        value["cells"][3] = serde_json::to_value(Cell::Occupied(PlayerId::ONE)).unwrap();
        assert!(load(value).is_err());
    }

    #[test]
    fn test_load_rejects_inconsistent_counters() {
        let mut board = placed(4, 4, Move::new(0, 0), Move::new(3, 3));
        board.apply_move(Move::new(1, 2)).unwrap();

        let mut value = saved(&board);
        value["cells"][0] = serde_json::to_value(Cell::Empty).unwrap();
        let err = load(value).unwrap_err();
        assert!(err.contains("blocked cells"), "{}", err);

        let mut value = saved(&board);
        value["active_player"] = serde_json::to_value(PlayerId::ONE).unwrap();
        let err = load(value).unwrap_err();
        assert!(err.contains("cannot be to move"), "{}", err);

        let mut value = saved(&board);
        value["move_count"] = serde_json::json!(5);
        assert!(load(value).is_err());

        let mut longer = board.history().clone();
        longer.push_back(MoveRecord::new(PlayerId::TWO, Move::new(2, 1), 3));
        let mut value = saved(&board);
        value["history"] = serde_json::to_value(&longer).unwrap();
        let err = load(value).unwrap_err();
        assert!(err.contains("history"), "{}", err);
    }
}
