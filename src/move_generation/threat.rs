use smallvec::SmallVec;
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use crate::board::{Board, Position};
use crate::moves::with_applied_at;
use crate::pieces::Faction;

use super::generate_moves;

/// Whether some player piece can take the king with its next move. A board
/// without a king has nothing to threaten.
///
/// Player moves are generated without the check filter, so this never
/// re-enters itself. Every tentative move is undone before returning, so the
/// board is left as it was found.
#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub fn is_threatening_king(board: &mut Board) -> bool {
    if !board.has_king() {
        return false;
    }

    for index in 0..board.pieces().len() {
        if board.pieces()[index].faction() != Faction::Player {
            continue;
        }
        let destinations: SmallVec<[Position; 32]> = generate_moves(board, index).collect();
        for destination in destinations {
            if with_applied_at(board, index, destination, |board| !board.has_king()) {
                return true;
            }
        }
    }
    false
}
