//! Depth-limited minimax with alpha-beta pruning.
//!
//! Same tree, same scoring and same tie-breaking as `minimax`, but siblings
//! are skipped once `alpha >= beta`: the opponent already has a better
//! option elsewhere, so nothing below this frame can reach the root.
//!
//! The window is passed by value. Values returned from outside the window
//! are bounds rather than exact scores (fail-soft), which is enough for the
//! root to pick the same move and score as an unpruned search: a bound is
//! never strictly better than the root's current best.

use crate::core::{Board, Move};
use crate::eval::Evaluator;

use super::context::{SearchContext, SearchResult, SearchTimeout};

/// Search `depth` plies below `board` with pruning and return the root
/// player's best move.
pub fn alphabeta<E: Evaluator + ?Sized>(
    ctx: &mut SearchContext<'_, E>,
    board: &Board,
    depth: u32,
) -> Result<SearchResult, SearchTimeout> {
    let (score, best_move) =
        alpha_beta_value(ctx, board, depth, f64::NEG_INFINITY, f64::INFINITY, true)?;
    Ok(SearchResult { best_move, score })
}

fn alpha_beta_value<E: Evaluator + ?Sized>(
    ctx: &mut SearchContext<'_, E>,
    board: &Board,
    depth: u32,
    mut alpha: f64,
    mut beta: f64,
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

    for (i, &mv) in moves.iter().enumerate() {
        let child = board.forecast_legal(mv);
        let (score, _) = alpha_beta_value(ctx, &child, depth - 1, alpha, beta, !maximizing)?;

        if maximizing {
            if best_move.is_none() || score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(best_score);
        } else {
            if best_move.is_none() || score < best_score {
                best_score = score;
                best_move = Some(mv);
            }
            beta = beta.min(best_score);
        }

        if alpha >= beta {
            if i + 1 < moves.len() {
                ctx.stats.cutoffs += 1;
            }
            break;
        }
    }

    Ok((best_score, best_move))
}
