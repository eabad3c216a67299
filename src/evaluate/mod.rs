//! Static evaluation, always from the player's point of view: positive scores
//! favour the player whatever the side to move.

#[cfg(feature = "instrumentation")]
use tracing::instrument;

use crate::board::Board;
use crate::move_generation::{count_moves, faction_has_moves, is_threatening_king};
use crate::pieces::Faction;

/// Scores are kept in tenths of a point so every term stays integral.
pub type Score = i32;

/// Points to tenths.
pub const SCORE_SCALE: Score = 10;

/// A won (or, negated, lost) puzzle. Far above any material sum.
pub const BEST_SCORE: Score = 10_000 * SCORE_SCALE;

/// Search window bound. Negating it stays in range.
pub const INFINITY: Score = Score::MAX;

/// Bonus for having the king under attack.
pub const THREAT_BONUS: Score = 10 * SCORE_SCALE;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameEnding {
    Checkmate,
    Stalemate,
}

pub fn material(board: &Board) -> Score {
    board
        .pieces()
        .iter()
        .map(|piece| {
            let value = piece.kind.material_value() * SCORE_SCALE;
            match piece.faction() {
                Faction::Player => value,
                Faction::Enemy => -value,
            }
        })
        .sum()
}

/// Checkmate once the king is gone or boxed in under attack; stalemate when the
/// enemy is boxed in without being attacked. `None` while the enemy can move.
pub fn game_ending(board: &mut Board) -> Option<GameEnding> {
    if !board.has_king() {
        return Some(GameEnding::Checkmate);
    }
    if faction_has_moves(board, Faction::Enemy) {
        return None;
    }
    if is_threatening_king(board) {
        Some(GameEnding::Checkmate)
    } else {
        Some(GameEnding::Stalemate)
    }
}

#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub fn evaluate(board: &mut Board) -> Score {
    if board.count_faction(Faction::Player) == 0 {
        return -BEST_SCORE;
    }
    match game_ending(board) {
        Some(GameEnding::Checkmate) => return BEST_SCORE,
        Some(GameEnding::Stalemate) => return -BEST_SCORE,
        None => {}
    }

    let mut score = material(board);
    if is_threatening_king(board) {
        score += THREAT_BONUS;
    }
    let mobility =
        count_moves(board, Faction::Player) as Score - count_moves(board, Faction::Enemy) as Score;
    score + mobility
}

/// Converts tenths to the points reported on the wire.
pub fn score_to_points(score: Score) -> f64 {
    f64::from(score) / f64::from(SCORE_SCALE)
}
