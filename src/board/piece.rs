use core::fmt;

use serde::{Deserialize, Serialize};

use crate::pieces::{Faction, PieceKind};

use super::position::Position;

/// A piece on the board. Behaviour lives in [`PieceKind`]; the piece itself is
/// plain data so undo records can hold copies of it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Piece {
    #[serde(rename = "piece")]
    pub kind: PieceKind,
    pub position: Position,
}

impl Piece {
    pub fn new(kind: PieceKind, position: Position) -> Self {
        Self { kind, position }
    }

    pub fn faction(&self) -> Faction {
        self.kind.faction()
    }

    pub fn is_enemy(&self) -> bool {
        self.kind.is_enemy()
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind, self.position)
    }
}
