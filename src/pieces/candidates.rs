use smallvec::SmallVec;

use crate::board::{Board, Position};

use super::{MoveType, PieceKind};

/// A raw destination proposed by a piece kind, still subject to the move
/// generator's filters.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Candidate {
    pub position: Position,
    pub move_type: MoveType,
}

impl Candidate {
    pub fn new(position: Position, move_type: MoveType) -> Self {
        Self {
            position,
            move_type,
        }
    }
}

pub type CandidateList = SmallVec<[Candidate; 32]>;

pub const ROOK_DIRECTIONS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub const BISHOP_DIRECTIONS: [(i32, i32); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
];

pub fn steps(origin: Position, move_type: MoveType, out: &mut CandidateList) {
    out.extend(
        origin
            .neighbors()
            .iter()
            .map(|&position| Candidate::new(position, move_type)),
    );
}

pub fn knight(origin: Position, out: &mut CandidateList) {
    out.extend(
        KNIGHT_OFFSETS
            .iter()
            .map(|&(dx, dy)| Candidate::new(origin.offset(dx, dy), MoveType::Both)),
    );
}

/// Pawns advance towards increasing `y`. The double step is offered only from
/// row 1 and only when the square in front is empty; diagonals are offered only
/// when something stands there.
pub fn pawn(board: &Board, origin: Position, out: &mut CandidateList) {
    let front = origin.offset(0, 1);
    out.push(Candidate::new(front, MoveType::Move));
    if origin.y == 1 && !board.is_occupied(front) {
        out.push(Candidate::new(origin.offset(0, 2), MoveType::Move));
    }
    for dx in [-1, 1].iter() {
        let diagonal = origin.offset(*dx, 1);
        if board.is_occupied(diagonal) {
            out.push(Candidate::new(diagonal, MoveType::Capture));
        }
    }
}

/// Casts a ray per direction. A ray stops before an edge or a wall and stops
/// on (including) the first piece it meets.
pub fn slide(
    board: &Board,
    origin: Position,
    directions: &[(i32, i32)],
    out: &mut CandidateList,
) {
    for &(dx, dy) in directions {
        let mut position = origin.offset(dx, dy);
        while board.is_open(position) {
            out.push(Candidate::new(position, MoveType::Both));
            if board.is_occupied(position) {
                break;
            }
            position = position.offset(dx, dy);
        }
    }
}

/// A ball is kicked away from every adjacent shoe, in piece-list order.
pub fn ball(board: &Board, origin: Position, out: &mut CandidateList) {
    for shoe in board
        .pieces()
        .iter()
        .filter(|other| other.kind == PieceKind::Shoe && other.position.is_adjacent(origin))
    {
        let direction = (origin.x - shoe.position.x, origin.y - shoe.position.y);
        slide(board, origin, &[direction], out);
    }
}

/// A frog leaps over an adjacent frog to the square directly beyond it.
pub fn frog(board: &Board, origin: Position, out: &mut CandidateList) {
    for neighbor in origin.neighbors().iter() {
        if let Some(other) = board.piece_at(*neighbor) {
            if other.kind == PieceKind::Frog {
                let landing = origin.offset(
                    2 * (neighbor.x - origin.x),
                    2 * (neighbor.y - origin.y),
                );
                out.push(Candidate::new(landing, MoveType::Both));
            }
        }
    }
}
