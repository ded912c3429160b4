//! Built-in heuristic evaluators.
//!
//! All of these honour the `Evaluator` contract: decided boards score
//! `±inf`, everything else is finite.
//!
//! - `NullScore`, `OpenMoveScore`, `ImprovedScore`, `CenterScore`: the
//!   classic baselines.
//! - `WeightedScore`, `BlockingScore`, `AggressiveScore`: weighted mixes of
//!   mobility, centre control and the ability to steal the opponent's next
//!   square.

use rustc_hash::FxHashSet;

use crate::core::{Board, Move, PlayerId};

use super::traits::{terminal_score, Evaluator};

// =============================================================================
// Features
// =============================================================================

/// Mobility counts for `player` and their opponent.
fn mobility(board: &Board, player: PlayerId) -> (f64, f64) {
    let own = board.legal_moves(player).len() as f64;
    let opp = board.legal_moves(player.opponent()).len() as f64;
    (own, opp)
}

/// `(own - opp) / max(own, opp)`, in `[-1, 1]`.
fn relative_mobility(own: f64, opp: f64) -> f64 {
    let max = own.max(opp);
    if max == 0.0 {
        0.0
    } else {
        (own - opp) / max
    }
}

/// Centre of the board as fractional `(row, col)`.
fn center(board: &Board) -> (f64, f64) {
    (
        (board.height() as f64 - 1.0) / 2.0,
        (board.width() as f64 - 1.0) / 2.0,
    )
}

/// Normalised squared distance from the centre, in `[0, 1]`.
///
/// Unplaced players are treated as sitting on the centre.
fn center_distance(board: &Board, location: Option<Move>) -> f64 {
    let (cy, cx) = center(board);
    let Some(at) = location else {
        return 0.0;
    };
    let span = (cx + cy).powi(2);
    if span == 0.0 {
        return 0.0;
    }
    ((cx - at.col as f64) + (cy - at.row as f64)).powi(2) / span
}

/// 1 if `player` is to move and can jump into a square the opponent could
/// also reach next turn, 0 otherwise.
fn block_ability(board: &Board, player: PlayerId) -> f64 {
    if board.active_player() != player {
        return 0.0;
    }
    let opp_moves: FxHashSet<Move> = board.legal_moves(player.opponent()).into_iter().collect();
    let can_block = board
        .legal_moves(player)
        .iter()
        .any(|mv| opp_moves.contains(mv));
    if can_block {
        1.0
    } else {
        0.0
    }
}

/// 1 if `player` is to move and can jump onto the exact centre cell.
fn center_ability(board: &Board, player: PlayerId) -> f64 {
    if board.active_player() != player {
        return 0.0;
    }
    let (cy, cx) = center(board);
    if cy.fract() != 0.0 || cx.fract() != 0.0 {
        return 0.0;
    }
    let target = Move::new(cy as i32, cx as i32);
    if board.legal_moves(player).contains(&target) {
        1.0
    } else {
        0.0
    }
}

// =============================================================================
// Baselines
// =============================================================================

/// Zero for every undecided board.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullScore;

impl Evaluator for NullScore {
    fn score(&self, board: &Board, player: PlayerId) -> f64 {
        terminal_score(board, player).unwrap_or(0.0)
    }
}

/// Number of legal moves available to the player.
#[derive(Clone, Copy, Debug, Default)]
pub struct OpenMoveScore;

impl Evaluator for OpenMoveScore {
    fn score(&self, board: &Board, player: PlayerId) -> f64 {
        terminal_score(board, player).unwrap_or_else(|| board.legal_moves(player).len() as f64)
    }
}

/// Own legal moves minus opponent legal moves.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImprovedScore;

impl Evaluator for ImprovedScore {
    fn score(&self, board: &Board, player: PlayerId) -> f64 {
        terminal_score(board, player).unwrap_or_else(|| {
            let (own, opp) = mobility(board, player);
            own - opp
        })
    }
}

/// Squared Euclidean distance of the player from the centre.
///
/// Rewards staying towards the edges, where the opponent's knight jumps
/// run out first.
#[derive(Clone, Copy, Debug, Default)]
pub struct CenterScore;

impl Evaluator for CenterScore {
    fn score(&self, board: &Board, player: PlayerId) -> f64 {
        terminal_score(board, player).unwrap_or_else(|| {
            let Some(at) = board.player_location(player) else {
                return 0.0;
            };
            let (cy, cx) = center(board);
            (cy - at.row as f64).powi(2) + (cx - at.col as f64).powi(2)
        })
    }
}

// =============================================================================
// Weighted mixes
// =============================================================================

/// Mobility-dominated mix with centre control.
///
/// `60 * relative_mobility + 15 * own_mobility + 10 * relative_centre
/// + 5 * centre_ability + 10 * block_ability`
#[derive(Clone, Copy, Debug, Default)]
pub struct WeightedScore;

impl Evaluator for WeightedScore {
    fn score(&self, board: &Board, player: PlayerId) -> f64 {
        if let Some(score) = terminal_score(board, player) {
            return score;
        }

        let (own, opp) = mobility(board, player);
        let own_distance = center_distance(board, board.player_location(player));
        let opp_distance = center_distance(board, board.player_location(player.opponent()));

        60.0 * relative_mobility(own, opp)
            + 15.0 * own
            + 10.0 * (opp_distance - own_distance)
            + 5.0 * center_ability(board, player)
            + 10.0 * block_ability(board, player)
    }
}

/// `2 * open_moves + 10 * block_ability`
#[derive(Clone, Copy, Debug, Default)]
pub struct BlockingScore;

impl Evaluator for BlockingScore {
    fn score(&self, board: &Board, player: PlayerId) -> f64 {
        terminal_score(board, player).unwrap_or_else(|| {
            let open = board.legal_moves(player).len() as f64;
            2.0 * open + 10.0 * block_ability(board, player)
        })
    }
}

/// `55 * relative_mobility + 45 * block_ability`
#[derive(Clone, Copy, Debug, Default)]
pub struct AggressiveScore;

impl Evaluator for AggressiveScore {
    fn score(&self, board: &Board, player: PlayerId) -> f64 {
        terminal_score(board, player).unwrap_or_else(|| {
            let (own, opp) = mobility(board, player);
            55.0 * relative_mobility(own, opp) + 45.0 * block_ability(board, player)
        })
    }
}
