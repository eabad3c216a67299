//! One playthrough of a puzzle: the player moves, the engine answers, and the
//! session keeps score against the level's move budget.

mod puzzle;

pub use puzzle::{GameError, GameStatus, LossReason, PlayerMoveOutcome, PuzzleGame};

#[cfg(test)]
mod tests;
