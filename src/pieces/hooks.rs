//! Move execution hooks. Each hook mutates the piece list in place and returns a
//! [`MoveEffect`] that [`MoveEffect::revert`] turns back into the exact prior
//! list: same pieces, same order, same kinds and positions.

use smallvec::SmallVec;

use crate::board::{Piece, Position};

use super::PieceKind;

/// The default relocation: the mover's index and origin plus the captured
/// occupant with the list index it was removed from.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Relocation {
    pub mover: usize,
    pub origin: Position,
    pub captured: Option<(usize, Piece)>,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum MoveEffect {
    Relocated(Relocation),
    Promoted(Relocation),
    Discharged(Relocation),
    Spawned {
        index: usize,
    },
    Exploded {
        relocation: Relocation,
        debris: SmallVec<[(usize, Piece); 8]>,
    },
}

impl MoveEffect {
    pub fn revert(self, pieces: &mut Vec<Piece>) {
        match self {
            MoveEffect::Relocated(relocation) => revert(pieces, relocation),
            MoveEffect::Promoted(relocation) => {
                pieces[relocation.mover].kind = PieceKind::Pawn;
                revert(pieces, relocation);
            }
            MoveEffect::Discharged(relocation) => {
                pieces[relocation.mover].kind = PieceKind::ChargedBattery;
                revert(pieces, relocation);
            }
            MoveEffect::Spawned { index } => {
                pieces.remove(index);
            }
            MoveEffect::Exploded { relocation, debris } => {
                for (index, piece) in debris.into_iter().rev() {
                    pieces.insert(index, piece);
                }
                revert(pieces, relocation);
            }
        }
    }

    /// Number of pieces taken off the board by this move.
    pub fn removed_count(&self) -> usize {
        match self {
            MoveEffect::Relocated(relocation)
            | MoveEffect::Promoted(relocation)
            | MoveEffect::Discharged(relocation) => relocation.captured.is_some() as usize,
            MoveEffect::Spawned { .. } => 0,
            MoveEffect::Exploded { relocation, debris } => {
                relocation.captured.is_some() as usize + debris.len()
            }
        }
    }
}

/// Moves the piece at `index` onto `destination`, removing whatever stood there.
/// The returned `mover` index is the piece's index after the removal.
pub fn relocate(pieces: &mut Vec<Piece>, index: usize, destination: Position) -> Relocation {
    let origin = pieces[index].position;
    let captured_index = pieces
        .iter()
        .enumerate()
        .position(|(i, piece)| i != index && piece.position == destination);

    let mut mover = index;
    let captured = captured_index.map(|captured_index| {
        let piece = pieces.remove(captured_index);
        if captured_index < mover {
            mover -= 1;
        }
        (captured_index, piece)
    });

    pieces[mover].position = destination;
    Relocation {
        mover,
        origin,
        captured,
    }
}

pub fn revert(pieces: &mut Vec<Piece>, relocation: Relocation) {
    pieces[relocation.mover].position = relocation.origin;
    if let Some((index, piece)) = relocation.captured {
        pieces.insert(index, piece);
    }
}

pub fn promote(
    pieces: &mut Vec<Piece>,
    index: usize,
    destination: Position,
    board_size: Position,
) -> MoveEffect {
    let relocation = relocate(pieces, index, destination);
    if destination.y == board_size.y - 1 {
        pieces[relocation.mover].kind = PieceKind::Queen;
    }
    MoveEffect::Promoted(relocation)
}

/// A can stays where it is and drops a new bean on the destination.
pub fn spawn_bean(pieces: &mut Vec<Piece>, destination: Position) -> MoveEffect {
    pieces.push(Piece::new(PieceKind::Bean, destination));
    MoveEffect::Spawned {
        index: pieces.len() - 1,
    }
}

/// Relocates the bomb, then clears every square around where it landed.
pub fn explode(pieces: &mut Vec<Piece>, index: usize, destination: Position) -> MoveEffect {
    let relocation = relocate(pieces, index, destination);

    let mut blast: SmallVec<[usize; 8]> = pieces
        .iter()
        .enumerate()
        .filter(|(_, piece)| piece.position.is_adjacent(destination))
        .map(|(i, _)| i)
        .collect();
    blast.sort_unstable_by(|a, b| b.cmp(a));

    // Removed from the back so the recorded indices stay valid; stored in
    // descending order, reinserted ascending.
    let debris = blast
        .into_iter()
        .map(|i| (i, pieces.remove(i)))
        .collect();

    MoveEffect::Exploded { relocation, debris }
}

pub fn discharge(pieces: &mut Vec<Piece>, index: usize, destination: Position) -> MoveEffect {
    let relocation = relocate(pieces, index, destination);
    pieces[relocation.mover].kind = PieceKind::LowBattery;
    MoveEffect::Discharged(relocation)
}
