pub mod error;
pub mod layout;
pub mod piece;
pub mod position;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::pieces::{Faction, PieceKind};

pub use error::BoardError;
pub use piece::Piece;
pub use position::Position;

/// Longest board side accepted by [`Board::validate`].
pub const MAX_BOARD_SIDE: i32 = 64;

/// A puzzle template: the pieces, the board geometry and the number of player
/// moves allowed to deliver checkmate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    pieces: Vec<Piece>,
    board_size: Position,
    #[serde(default)]
    walls: Vec<Position>,
    #[serde(rename = "moves", default)]
    move_budget: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

impl Level {
    pub fn new(
        board_size: Position,
        pieces: Vec<Piece>,
        walls: Vec<Position>,
        move_budget: u32,
    ) -> Self {
        Self {
            pieces,
            board_size,
            walls,
            move_budget,
            text: None,
        }
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn board_size(&self) -> Position {
        self.board_size
    }

    pub fn walls(&self) -> &[Position] {
        &self.walls
    }

    pub fn move_budget(&self) -> u32 {
        self.move_budget
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

/// The unit of search: a level plus whose turn it is. Search probes mutate the
/// piece list in place and restore it through undo records; the board is only
/// cloned to sandbox the legality probe of enemy moves.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    level: Level,
    enemy_turn: bool,
}

impl Board {
    pub fn new(level: Level) -> Self {
        Self {
            level,
            enemy_turn: false,
        }
    }

    pub fn from_level(level: &Level) -> Self {
        Self::new(level.clone())
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.level.pieces
    }

    pub(crate) fn pieces_mut(&mut self) -> &mut Vec<Piece> {
        &mut self.level.pieces
    }

    pub fn size(&self) -> Position {
        self.level.board_size
    }

    pub fn walls(&self) -> &[Position] {
        &self.level.walls
    }

    pub fn move_budget(&self) -> u32 {
        self.level.move_budget
    }

    pub fn enemy_turn(&self) -> bool {
        self.enemy_turn
    }

    pub fn set_enemy_turn(&mut self, enemy_turn: bool) {
        self.enemy_turn = enemy_turn;
    }

    pub fn toggle_turn(&mut self) -> Faction {
        self.enemy_turn = !self.enemy_turn;
        self.side_to_move()
    }

    pub fn side_to_move(&self) -> Faction {
        if self.enemy_turn {
            Faction::Enemy
        } else {
            Faction::Player
        }
    }

    pub fn in_bounds(&self, position: Position) -> bool {
        let size = self.level.board_size;
        position.x >= 0 && position.x < size.x && position.y >= 0 && position.y < size.y
    }

    pub fn is_wall(&self, position: Position) -> bool {
        self.level.walls.contains(&position)
    }

    /// In bounds and not a wall.
    pub fn is_open(&self, position: Position) -> bool {
        self.in_bounds(position) && !self.is_wall(position)
    }

    pub fn index_at(&self, position: Position) -> Option<usize> {
        self.level
            .pieces
            .iter()
            .position(|piece| piece.position == position)
    }

    pub fn piece_at(&self, position: Position) -> Option<&Piece> {
        self.level
            .pieces
            .iter()
            .find(|piece| piece.position == position)
    }

    pub fn is_occupied(&self, position: Position) -> bool {
        self.piece_at(position).is_some()
    }

    pub fn has_king(&self) -> bool {
        self.level
            .pieces
            .iter()
            .any(|piece| piece.kind == PieceKind::King)
    }

    pub fn has_kind(&self, kind: PieceKind) -> bool {
        self.level.pieces.iter().any(|piece| piece.kind == kind)
    }

    pub fn count_faction(&self, faction: Faction) -> usize {
        self.level
            .pieces
            .iter()
            .filter(|piece| piece.faction() == faction)
            .count()
    }

    /// Checks the board invariants: a size between 1 and [`MAX_BOARD_SIDE`]
    /// each way, every piece in bounds and off the walls, one piece per
    /// square, at most one king.
    pub fn validate(&self) -> Result<(), BoardError> {
        let size = self.level.board_size;
        let sides = 1..=MAX_BOARD_SIDE;
        if !sides.contains(&size.x) || !sides.contains(&size.y) {
            return Err(BoardError::InvalidBoardSize { size });
        }

        let mut occupied = FxHashSet::default();
        for piece in self.level.pieces.iter() {
            if !self.in_bounds(piece.position) {
                return Err(BoardError::PieceOutOfBounds {
                    kind: piece.kind,
                    position: piece.position,
                });
            }
            if self.is_wall(piece.position) {
                return Err(BoardError::PieceOnWall {
                    kind: piece.kind,
                    position: piece.position,
                });
            }
            if !occupied.insert(piece.position) {
                return Err(BoardError::SquareOccupied {
                    position: piece.position,
                });
            }
        }

        let kings = self
            .level
            .pieces
            .iter()
            .filter(|piece| piece.kind == PieceKind::King)
            .count();
        if kings > 1 {
            return Err(BoardError::MultipleKings { count: kings });
        }

        Ok(())
    }
}
