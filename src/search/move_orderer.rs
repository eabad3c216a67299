//! Move ordering for alpha-beta: the cached best move first, then moves that
//! take the most opposing pieces.

use std::cmp::Reverse;

use log::trace;

use crate::board::Board;
use crate::move_generation::PieceMove;
use crate::moves::{with_applied_at, Move};

/// Sorts `moves` in place. The sort is stable, and each move is played and
/// taken back exactly once to count its captures.
pub fn order_moves(board: &mut Board, moves: &mut [PieceMove], cached: Option<Move>) {
    let opponent = board.side_to_move().opposite();
    let before = board.count_faction(opponent);

    moves.sort_by_cached_key(|piece_move| {
        let captures = with_applied_at(board, piece_move.index, piece_move.mv.to, |board| {
            before.saturating_sub(board.count_faction(opponent))
        });
        trace!("{} takes {}", piece_move.mv, captures);
        (Some(piece_move.mv) != cached, Reverse(captures))
    });
}
