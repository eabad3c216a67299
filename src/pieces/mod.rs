//! The piece capability registry.
//!
//! Every piece kind is a variant of [`PieceKind`]. A kind answers four
//! questions: which faction it belongs to, how much material it is worth, which
//! raw destinations it can reach, and what happens to the piece list when it
//! moves. The last two are the only behaviours a new kind has to provide;
//! everything else (bounds, occupancy, check legality, magnets) is layered on
//! top by the move generator.

pub mod candidates;
pub mod hooks;

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::board::{Board, Piece, Position};

pub use candidates::{Candidate, CandidateList};
pub use hooks::{MoveEffect, Relocation};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Faction {
    /// Classic chess pieces defending the king.
    Enemy,
    /// The custom pieces controlled by the puzzle solver.
    Player,
}

impl Faction {
    pub fn opposite(&self) -> Self {
        match self {
            Faction::Enemy => Faction::Player,
            Faction::Player => Faction::Enemy,
        }
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let faction = match self {
            Faction::Enemy => "enemy",
            Faction::Player => "player",
        };
        write!(f, "{}", faction)
    }
}

/// How a raw candidate may be used: `Move` needs an empty square, `Capture` an
/// occupied one, `Both` either.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveType {
    Move,
    Capture,
    Both,
}

#[derive(
    Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum PieceKind {
    King,
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    Bean,
    Shoe,
    Ball,
    Can,
    Bomb,
    ChargedBattery,
    LowBattery,
    Frog,
    Magnet,
}

pub const ALL_PIECE_KINDS: [PieceKind; 15] = [
    PieceKind::King,
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::Bean,
    PieceKind::Shoe,
    PieceKind::Ball,
    PieceKind::Can,
    PieceKind::Bomb,
    PieceKind::ChargedBattery,
    PieceKind::LowBattery,
    PieceKind::Frog,
    PieceKind::Magnet,
];

impl PieceKind {
    pub fn faction(self) -> Faction {
        match self {
            PieceKind::King
            | PieceKind::Pawn
            | PieceKind::Knight
            | PieceKind::Bishop
            | PieceKind::Rook
            | PieceKind::Queen => Faction::Enemy,
            PieceKind::Bean
            | PieceKind::Shoe
            | PieceKind::Ball
            | PieceKind::Can
            | PieceKind::Bomb
            | PieceKind::ChargedBattery
            | PieceKind::LowBattery
            | PieceKind::Frog
            | PieceKind::Magnet => Faction::Player,
        }
    }

    pub fn is_enemy(self) -> bool {
        self.faction() == Faction::Enemy
    }

    /// Material worth in whole points.
    pub fn material_value(self) -> i32 {
        match self {
            PieceKind::King => 0,
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::Bean => 2,
            PieceKind::Shoe => 2,
            PieceKind::Ball => 2,
            PieceKind::Can => 5,
            PieceKind::Bomb => 12,
            PieceKind::ChargedBattery => 7,
            PieceKind::LowBattery => 2,
            PieceKind::Frog => 1,
            PieceKind::Magnet => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PieceKind::King => "king",
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::Bean => "bean",
            PieceKind::Shoe => "shoe",
            PieceKind::Ball => "ball",
            PieceKind::Can => "can",
            PieceKind::Bomb => "bomb",
            PieceKind::ChargedBattery => "chargedBattery",
            PieceKind::LowBattery => "lowBattery",
            PieceKind::Frog => "frog",
            PieceKind::Magnet => "magnet",
        }
    }

    /// Letter used by the text layout: upper case for the enemy, lower case
    /// for the player.
    pub fn to_layout_char(self) -> char {
        match self {
            PieceKind::King => 'K',
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::Bean => 'b',
            PieceKind::Shoe => 's',
            PieceKind::Ball => 'o',
            PieceKind::Can => 'c',
            PieceKind::Bomb => 'x',
            PieceKind::ChargedBattery => 'h',
            PieceKind::LowBattery => 'l',
            PieceKind::Frog => 'f',
            PieceKind::Magnet => 'm',
        }
    }

    pub fn from_layout_char(c: char) -> Option<PieceKind> {
        ALL_PIECE_KINDS
            .iter()
            .copied()
            .find(|kind| kind.to_layout_char() == c)
    }

    /// Raw destinations for `piece`, before any bounds, occupancy or legality
    /// filtering.
    pub fn candidates(self, board: &Board, piece: &Piece) -> CandidateList {
        let mut out = CandidateList::new();
        match self {
            PieceKind::King
            | PieceKind::Bean
            | PieceKind::LowBattery => candidates::steps(piece.position, MoveType::Both, &mut out),
            PieceKind::Shoe | PieceKind::Can | PieceKind::Magnet => {
                candidates::steps(piece.position, MoveType::Move, &mut out)
            }
            PieceKind::Pawn => candidates::pawn(board, piece.position, &mut out),
            PieceKind::Knight => candidates::knight(piece.position, &mut out),
            PieceKind::Bishop => {
                candidates::slide(board, piece.position, &candidates::BISHOP_DIRECTIONS, &mut out)
            }
            PieceKind::Rook | PieceKind::Bomb => {
                candidates::slide(board, piece.position, &candidates::ROOK_DIRECTIONS, &mut out)
            }
            PieceKind::Queen | PieceKind::ChargedBattery => {
                candidates::slide(board, piece.position, &candidates::ROOK_DIRECTIONS, &mut out);
                candidates::slide(board, piece.position, &candidates::BISHOP_DIRECTIONS, &mut out);
            }
            PieceKind::Ball => candidates::ball(board, piece.position, &mut out),
            PieceKind::Frog => candidates::frog(board, piece.position, &mut out),
        }
        out
    }

    /// Moves the piece at `index` to `destination` and returns the record
    /// needed to put the piece list back exactly as it was.
    pub fn on_move(
        self,
        pieces: &mut Vec<Piece>,
        index: usize,
        destination: Position,
        board_size: Position,
    ) -> MoveEffect {
        match self {
            PieceKind::Pawn => hooks::promote(pieces, index, destination, board_size),
            PieceKind::Can => hooks::spawn_bean(pieces, destination),
            PieceKind::Bomb => hooks::explode(pieces, index, destination),
            PieceKind::ChargedBattery => hooks::discharge(pieces, index, destination),
            _ => MoveEffect::Relocated(hooks::relocate(pieces, index, destination)),
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
