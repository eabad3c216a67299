pub mod board;
pub mod evaluate;
pub mod game;
pub mod levels;
pub mod move_generation;
pub mod moves;
pub mod pieces;
pub mod prelude;
pub mod protocol;
pub mod search;

#[cfg(feature = "instrumentation")]
pub mod instrumentation;
