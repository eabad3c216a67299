//! Legal destinations for a single piece.
//!
//! Raw candidates come from the piece kind; this module filters them (bounds,
//! walls, friendly occupants, move/capture type), adds the magnet squares for
//! player pieces and, for enemy pieces only, drops anything that leaves the
//! king capturable. The player side is never check-filtered: the threat
//! detector generates player moves, and filtering them would recurse forever.

pub mod threat;

use rustc_hash::FxHashSet;

use crate::board::{Board, Piece, Position};
use crate::moves::{with_applied_at, Move};
use crate::pieces::{Candidate, CandidateList, Faction, MoveType, PieceKind};

pub use threat::is_threatening_king;

/// A legal move paired with the mover's index in the board's piece list.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PieceMove {
    pub index: usize,
    pub mv: Move,
}

/// Lazily validated destinations of one piece, deduplicated in first-seen
/// order. Pulling a single item only pays for validating up to that item.
pub struct LegalMoves<'a> {
    board: &'a Board,
    index: usize,
    piece: Piece,
    candidates: smallvec::IntoIter<[Candidate; 32]>,
    seen: FxHashSet<Position>,
    probe: Option<Board>,
}

impl<'a> LegalMoves<'a> {
    fn new(board: &'a Board, index: usize) -> Self {
        let piece = board.pieces()[index];
        let mut candidates = piece.kind.candidates(board, &piece);
        if piece.faction() == Faction::Player {
            add_magnet_squares(board, &mut candidates);
        }
        Self {
            board,
            index,
            piece,
            candidates: candidates.into_iter(),
            seen: FxHashSet::default(),
            probe: None,
        }
    }

    fn is_valid(&mut self, candidate: Candidate) -> bool {
        let board = self.board;
        if !board.is_open(candidate.position) {
            return false;
        }
        let occupant = board.piece_at(candidate.position);
        let allowed = match (occupant, candidate.move_type) {
            (Some(other), _) if other.faction() == self.piece.faction() => false,
            (Some(_), MoveType::Move) => false,
            (None, MoveType::Capture) => false,
            _ => true,
        };
        if !allowed {
            return false;
        }
        if self.piece.is_enemy() {
            return !self.exposes_king(candidate.position);
        }
        true
    }

    /// Plays the move on a private copy of the board and asks whether the
    /// player could then take the king. The copy is reused across candidates.
    fn exposes_king(&mut self, destination: Position) -> bool {
        let board = self.board;
        let index = self.index;
        let probe = self.probe.get_or_insert_with(|| board.clone());
        with_applied_at(probe, index, destination, is_threatening_king)
    }
}

impl<'a> Iterator for LegalMoves<'a> {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        while let Some(candidate) = self.candidates.next() {
            if self.seen.contains(&candidate.position) {
                continue;
            }
            if self.is_valid(candidate) {
                self.seen.insert(candidate.position);
                return Some(candidate.position);
            }
        }
        None
    }
}

/// Every square next to a magnet becomes a move-only destination.
fn add_magnet_squares(board: &Board, candidates: &mut CandidateList) {
    for magnet in board
        .pieces()
        .iter()
        .filter(|piece| piece.kind == PieceKind::Magnet)
    {
        candidates.extend(
            magnet
                .position
                .neighbors()
                .iter()
                .map(|&position| Candidate::new(position, MoveType::Move)),
        );
    }
}

pub fn generate_moves(board: &Board, index: usize) -> LegalMoves<'_> {
    LegalMoves::new(board, index)
}

/// Destinations of the piece on `from`; empty when the square is empty.
pub fn legal_destinations(board: &Board, from: Position) -> Vec<Position> {
    match board.index_at(from) {
        Some(index) => generate_moves(board, index).collect(),
        None => Vec::new(),
    }
}

pub fn is_legal(board: &Board, mv: Move) -> bool {
    match board.index_at(mv.from) {
        Some(index) => generate_moves(board, index).any(|to| to == mv.to),
        None => false,
    }
}

pub fn has_moves(board: &Board, index: usize) -> bool {
    generate_moves(board, index).next().is_some()
}

pub fn faction_has_moves(board: &Board, faction: Faction) -> bool {
    board
        .pieces()
        .iter()
        .enumerate()
        .filter(|(_, piece)| piece.faction() == faction)
        .any(|(index, _)| has_moves(board, index))
}

pub fn count_moves(board: &Board, faction: Faction) -> usize {
    board
        .pieces()
        .iter()
        .enumerate()
        .filter(|(_, piece)| piece.faction() == faction)
        .map(|(index, _)| generate_moves(board, index).count())
        .sum()
}

/// All legal moves of `faction`, in piece-list order.
pub fn generate_faction_moves(board: &Board, faction: Faction) -> Vec<PieceMove> {
    let mut moves = Vec::new();
    for (index, piece) in board.pieces().iter().enumerate() {
        if piece.faction() != faction {
            continue;
        }
        moves.extend(generate_moves(board, index).map(|to| PieceMove {
            index,
            mv: Move::new(piece.position, to),
        }));
    }
    moves
}

#[cfg(test)]
mod tests;
