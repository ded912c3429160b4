//! Depth-limited minimax.
//!
//! The reference tree walk: every legal move is expanded to the depth
//! limit. The root layer maximizes for the player to move and layers
//! alternate from there. Scores are always from the root player's point of
//! view:
//!
//! - player to move is stuck: `utility(root)`, whatever depth remains
//! - depth exhausted: `evaluator.score(board, root)`
//!
//! Ties keep the first move in enumeration order.

use crate::core::{Board, Move};
use crate::eval::Evaluator;

use super::context::{SearchContext, SearchResult, SearchTimeout};

/// Search `depth` plies below `board` and return the root player's best move.
pub fn minimax<E: Evaluator + ?Sized>(
    ctx: &mut SearchContext<'_, E>,
    board: &Board,
    depth: u32,
) -> Result<SearchResult, SearchTimeout> {
    let (score, best_move) = min_max_value(ctx, board, depth, true)?;
    Ok(SearchResult { best_move, score })
}

fn min_max_value<E: Evaluator + ?Sized>(
    ctx: &mut SearchContext<'_, E>,
    board: &Board,
    depth: u32,
    maximizing: bool,
) -> Result<(f64, Option<Move>), SearchTimeout> {
    ctx.enter_node()?;

    let moves = board.active_legal_moves();
    if moves.is_empty() {
        return Ok((ctx.terminal(board), None));
    }
    if depth == 0 {
        return Ok((ctx.evaluate(board), None));
    }

    let mut best_score = if maximizing {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    };
    let mut best_move = None;

    for mv in moves {
        let child = board.forecast_legal(mv);
        let (score, _) = min_max_value(ctx, &child, depth - 1, !maximizing)?;

        let improves = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if best_move.is_none() || improves {
            best_score = score;
            best_move = Some(mv);
        }
    }

    Ok((best_score, best_move))
}
