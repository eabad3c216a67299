#[cfg(feature = "instrumentation")]
use tracing::instrument;

use crate::board::Board;
use crate::evaluate::{evaluate, Score, BEST_SCORE};
use crate::move_generation::generate_faction_moves;
use crate::moves::{with_applied_at, Move};

use super::move_orderer::order_moves;
use super::transposition_table::{BoundType, PositionKey};
use super::SearchContext;

/// Negamax with alpha-beta pruning. Scores are relative to the side to move;
/// the returned move is the one that achieved the score, if any.
#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub(crate) fn negamax(
    context: &mut SearchContext,
    board: &mut Board,
    depth: u8,
    mut alpha: Score,
    mut beta: Score,
) -> (Score, Option<Move>) {
    context.stats.nodes += 1;

    let perspective: Score = if board.enemy_turn() { -1 } else { 1 };
    let evaluation = evaluate(board);
    if depth == 0 || evaluation.abs() == BEST_SCORE {
        context.stats.leaves += 1;
        return (evaluation * perspective, None);
    }

    let original_alpha = alpha;
    let key = PositionKey::from_board(board);
    let entry = context.table.probe(&key);

    if let Some(entry) = entry {
        if entry.depth >= depth {
            match entry.bound_type {
                BoundType::Exact => return (entry.score, entry.best_move),
                BoundType::Lower => alpha = alpha.max(entry.score),
                BoundType::Upper => beta = beta.min(entry.score),
            }
            if alpha >= beta {
                return (entry.score, entry.best_move);
            }
        }
    }

    let mut moves = generate_faction_moves(board, board.side_to_move());
    if moves.is_empty() {
        context.stats.leaves += 1;
        return (evaluation * perspective, None);
    }

    let mut best_move = entry.and_then(|entry| entry.best_move);
    order_moves(board, &mut moves, best_move);

    for piece_move in moves {
        let score = -with_applied_at(board, piece_move.index, piece_move.mv.to, |board| {
            negamax(context, board, depth - 1, -beta, -alpha).0
        });

        if score >= beta {
            context.stats.cutoffs += 1;
            context
                .table
                .store(key, beta, depth, BoundType::Lower, Some(piece_move.mv));
            return (beta, Some(piece_move.mv));
        }
        if score > alpha {
            alpha = score;
            best_move = Some(piece_move.mv);
        }
    }

    let bound_type = if alpha > original_alpha {
        BoundType::Exact
    } else {
        BoundType::Upper
    };
    context.table.store(key, alpha, depth, bound_type, best_move);

    (alpha, best_move)
}
