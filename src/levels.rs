//! The built-in puzzle catalogue.

use once_cell::sync::Lazy;

use crate::board::{Level, Piece, Position};
use crate::pieces::PieceKind::{self, *};

type PieceSpec = (PieceKind, i32, i32);

fn build(
    size: (i32, i32),
    pieces: &[PieceSpec],
    walls: &[(i32, i32)],
    moves: u32,
    text: &str,
) -> Level {
    let pieces = pieces
        .iter()
        .map(|&(kind, x, y)| Piece::new(kind, Position::new(x, y)))
        .collect();
    let walls = walls.iter().map(|&wall| wall.into()).collect();
    let level = Level::new(size.into(), pieces, walls, moves);
    if text.is_empty() {
        level
    } else {
        level.with_text(text)
    }
}

static LEVELS: Lazy<Vec<Level>> = Lazy::new(|| {
    vec![
        build(
            (2, 4),
            &[(Bean, 0, 3), (Bean, 1, 3), (King, 0, 0)],
            &[],
            3,
            "Click/tap on or drag an emoji to control it and checkmate the king.",
        ),
        build(
            (3, 4),
            &[
                (Bean, 0, 3),
                (Bean, 1, 3),
                (Bean, 2, 3),
                (King, 1, 0),
                (Pawn, 0, 1),
                (Pawn, 1, 1),
                (Pawn, 2, 1),
            ],
            &[],
            4,
            "",
        ),
        build(
            (8, 4),
            &[
                (Ball, 1, 2),
                (King, 0, 0),
                (Shoe, 0, 2),
                (Shoe, 3, 3),
                (Shoe, 7, 1),
            ],
            &[(0, 1), (1, 1), (2, 1), (3, 1)],
            3,
            "Balls can only be moved when next to shoes. Shoes move like kings.",
        ),
        build(
            (5, 5),
            &[
                (Ball, 1, 3),
                (Bean, 2, 0),
                (King, 4, 0),
                (Pawn, 4, 1),
                (Rook, 4, 2),
                (Shoe, 1, 4),
            ],
            &[],
            4,
            "",
        ),
        build(
            (3, 4),
            &[(Can, 1, 3), (King, 0, 0)],
            &[],
            3,
            "Cans spawn beans instead of moving.",
        ),
        build(
            (4, 5),
            &[
                (Ball, 0, 3),
                (Can, 1, 3),
                (King, 0, 0),
                (Rook, 3, 0),
                (Shoe, 1, 4),
            ],
            &[(2, 0), (2, 1)],
            3,
            "",
        ),
        build(
            (5, 6),
            &[
                (Bean, 0, 1),
                (Bean, 0, 3),
                (Bean, 1, 1),
                (Bean, 2, 1),
                (Bean, 2, 3),
                (Bishop, 2, 2),
                (Bomb, 1, 5),
                (King, 4, 1),
                (Knight, 0, 2),
                (Pawn, 3, 4),
                (Rook, 1, 2),
            ],
            &[
                (3, 1),
                (3, 2),
                (3, 3),
                (4, 2),
                (4, 3),
                (4, 4),
                (4, 5),
            ],
            2,
            "Bombs capture all pieces neighboring the tile they move to.",
        ),
        build(
            (7, 3),
            &[
                (Bean, 2, 2),
                (Bean, 3, 2),
                (Bean, 4, 2),
                (Bomb, 0, 1),
                (Bomb, 0, 2),
                (King, 6, 0),
                (Rook, 6, 2),
            ],
            &[
                (0, 0),
                (1, 0),
                (2, 0),
                (2, 3),
                (2, 4),
                (3, 0),
                (3, 3),
                (3, 4),
                (4, 0),
                (4, 1),
                (4, 3),
                (4, 4),
            ],
            3,
            "",
        ),
        build(
            (6, 6),
            &[
                (Bomb, 1, 5),
                (King, 5, 1),
                (Knight, 3, 2),
                (Pawn, 0, 3),
                (Pawn, 1, 3),
                (Pawn, 2, 3),
                (Rook, 3, 0),
            ],
            &[
                (3, 3),
                (3, 4),
                (3, 5),
                (4, 3),
                (4, 4),
                (4, 5),
                (5, 3),
                (5, 4),
                (5, 5),
            ],
            4,
            "",
        ),
        build(
            (5, 5),
            &[
                (ChargedBattery, 1, 4),
                (ChargedBattery, 4, 4),
                (King, 1, 0),
                (Pawn, 0, 1),
                (Pawn, 1, 1),
                (Pawn, 2, 1),
            ],
            &[],
            1,
            "Batteries behave like queens when full and kings when empty.",
        ),
        build(
            (7, 3),
            &[
                (ChargedBattery, 0, 0),
                (ChargedBattery, 0, 2),
                (King, 6, 0),
                (Rook, 2, 0),
            ],
            &[(3, 2), (4, 2), (5, 1), (5, 2), (6, 1), (6, 2)],
            2,
            "",
        ),
        build(
            (5, 6),
            &[
                (Ball, 2, 3),
                (Bishop, 3, 0),
                (ChargedBattery, 0, 5),
                (ChargedBattery, 2, 5),
                (ChargedBattery, 4, 5),
                (King, 2, 1),
                (Pawn, 0, 1),
                (Pawn, 1, 1),
                (Pawn, 3, 1),
                (Pawn, 4, 1),
                (Shoe, 0, 4),
                (Shoe, 3, 3),
            ],
            &[],
            2,
            "",
        ),
    ]
});

pub fn all() -> &'static [Level] {
    &LEVELS
}

/// Level by zero-based index.
pub fn level(index: usize) -> Option<&'static Level> {
    LEVELS.get(index)
}

pub fn count() -> usize {
    LEVELS.len()
}
