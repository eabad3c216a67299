//! Cache of search results keyed by the canonical position.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::board::{Board, Position};
use crate::evaluate::Score;
use crate::moves::Move;
use crate::pieces::PieceKind;

/// Piece composition, positions and turn. Pieces are sorted by kind, then x,
/// then y, so list order does not matter and two keys are equal exactly when
/// the positions are.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct PositionKey {
    pieces: SmallVec<[(PieceKind, Position); 16]>,
    enemy_turn: bool,
}

impl PositionKey {
    pub fn from_board(board: &Board) -> Self {
        let mut pieces: SmallVec<[(PieceKind, Position); 16]> = board
            .pieces()
            .iter()
            .map(|piece| (piece.kind, piece.position))
            .collect();
        pieces.sort_unstable();
        Self {
            pieces,
            enemy_turn: board.enemy_turn(),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BoundType {
    Exact,
    Lower,
    Upper,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TTEntry {
    pub score: Score,
    pub depth: u8,
    pub bound_type: BoundType,
    pub best_move: Option<Move>,
}

#[derive(Default)]
pub struct TranspositionTable {
    table: FxHashMap<PositionKey, TTEntry>,
    probes: usize,
    hits: usize,
    overwrites: usize,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(
        &mut self,
        key: PositionKey,
        score: Score,
        depth: u8,
        bound_type: BoundType,
        best_move: Option<Move>,
    ) {
        let entry = TTEntry {
            score,
            depth,
            bound_type,
            best_move,
        };
        if self.table.insert(key, entry).is_some() {
            self.overwrites += 1;
        }
    }

    pub fn probe(&mut self, key: &PositionKey) -> Option<TTEntry> {
        self.probes += 1;
        let entry = self.table.get(key).copied();
        if entry.is_some() {
            self.hits += 1;
        }
        entry
    }

    pub fn clear(&mut self) {
        self.table.clear();
        self.probes = 0;
        self.hits = 0;
        self.overwrites = 0;
    }

    pub fn size(&self) -> usize {
        self.table.len()
    }

    pub fn probes(&self) -> usize {
        self.probes
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn overwrites(&self) -> usize {
        self.overwrites
    }
}
