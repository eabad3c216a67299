//! Common types re-exported for convenience.

pub use crate::board::{Board, Level, Piece, Position};
pub use crate::game::{GameStatus, PuzzleGame};
pub use crate::moves::Move;
pub use crate::pieces::{Faction, PieceKind};
pub use crate::search::{get_best_move, SearchConfig, SearchResult};
