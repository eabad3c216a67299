//! CLI command implementations.

pub trait Command {
    fn execute(self);
}

pub mod best_move;
pub mod levels;
pub mod serve;
pub mod solve;

// Shared utilities for commands
pub(crate) mod util;
