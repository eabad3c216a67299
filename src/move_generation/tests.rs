use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::*;
use crate::board::Level;
use crate::pieces::ALL_PIECE_KINDS;
use crate::puzzle_position;

fn destinations_of(board: &Board, x: i32, y: i32) -> Vec<Position> {
    legal_destinations(board, Position::new(x, y))
}

#[test]
fn test_pinned_rook_keeps_to_its_file() {
    let board = puzzle_position! {
        K.. /
        R.. /
        ... /
        h..
    };
    assert_eq!(
        destinations_of(&board, 0, 1),
        vec![Position::new(0, 2), Position::new(0, 3)]
    );
}

#[test]
fn test_king_cannot_step_into_capture() {
    let board = puzzle_position! {
        K.. /
        ... /
        ..b
    };
    let king_moves = destinations_of(&board, 0, 0);
    assert!(!king_moves.contains(&Position::new(1, 1)));
    assert!(king_moves.contains(&Position::new(1, 0)));
    assert!(king_moves.contains(&Position::new(0, 1)));
}

#[test]
fn test_bean_steps_to_every_open_neighbor() {
    let board = puzzle_position! {
        K.. /
        ... /
        b..
    };
    assert_eq!(
        destinations_of(&board, 0, 2),
        vec![Position::new(1, 2), Position::new(0, 1), Position::new(1, 1)]
    );
}

#[test]
fn test_magnet_opens_squares_for_player_pieces_only() {
    let board = puzzle_position! {
        K... /
        .... /
        ..m. /
        b...
    };
    assert_eq!(
        destinations_of(&board, 0, 3),
        vec![
            Position::new(1, 3),
            Position::new(0, 2),
            Position::new(1, 2),
            Position::new(3, 2),
            Position::new(3, 3),
            Position::new(2, 3),
            Position::new(1, 1),
            Position::new(2, 1),
            Position::new(3, 1),
        ]
    );

    let king_moves = destinations_of(&board, 0, 0);
    assert_eq!(
        king_moves,
        vec![Position::new(1, 0), Position::new(1, 1), Position::new(0, 1)]
    );
}

#[test]
fn test_magnet_squares_are_move_only() {
    // The rook sits next to the magnet but the ball cannot take it through
    // the magnet pass.
    let board = puzzle_position! {
        K... /
        .Rm. /
        .... /
        ...o
    };
    assert!(destinations_of(&board, 3, 3)
        .iter()
        .all(|&to| to != Position::new(1, 1)));
}

#[test]
fn test_capture_only_and_move_only_types() {
    let board = puzzle_position! {
        K.. /
        .P. /
        .b.
    };
    // Blocked pawn with nothing on its diagonals has nowhere to go.
    assert!(destinations_of(&board, 1, 1).is_empty());
    assert!(!has_moves(&board, board.index_at(Position::new(1, 1)).unwrap()));
}

#[test]
fn test_has_moves_and_counts() {
    let board = puzzle_position! {
        K. /
        .. /
        .. /
        bb
    };
    assert!(faction_has_moves(&board, Faction::Enemy));
    assert!(faction_has_moves(&board, Faction::Player));
    assert_eq!(3, count_moves(&board, Faction::Enemy));
    assert_eq!(4, count_moves(&board, Faction::Player));

    let moves = generate_faction_moves(&board, Faction::Player);
    assert_eq!(4, moves.len());
    assert!(moves.iter().all(|m| m.index == 1 || m.index == 2));
    assert_eq!(
        Move::new(Position::new(0, 3), Position::new(0, 2)),
        moves[0].mv
    );
}

#[test]
fn test_is_legal() {
    let board = puzzle_position! { K. / .. / .b };
    assert!(is_legal(
        &board,
        Move::new(Position::new(1, 2), Position::new(1, 1))
    ));
    assert!(!is_legal(
        &board,
        Move::new(Position::new(1, 2), Position::new(1, 0))
    ));
    assert!(!is_legal(
        &board,
        Move::new(Position::new(0, 2), Position::new(0, 1))
    ));
}

#[test]
fn test_generation_leaves_board_untouched() {
    let board = puzzle_position! {
        KR. /
        ..x /
        ff.
    };
    let original = board.clone();
    for index in 0..board.pieces().len() {
        let _ = generate_moves(&board, index).count();
    }
    assert_eq!(original, board);
}

#[test]
fn test_random_destinations_respect_bounds_walls_and_factions() {
    let mut rng = StdRng::seed_from_u64(0x6265616e);
    let size = Position::new(5, 5);

    for _ in 0..200 {
        let mut squares: Vec<Position> = (0..size.x)
            .flat_map(|x| (0..size.y).map(move |y| Position::new(x, y)))
            .collect();

        let walls: Vec<Position> = (0..rng.gen_range(0..4))
            .map(|_| squares.swap_remove(rng.gen_range(0..squares.len())))
            .collect();
        let mut pieces = vec![Piece::new(
            PieceKind::King,
            squares.swap_remove(rng.gen_range(0..squares.len())),
        )];
        for _ in 0..rng.gen_range(1..7) {
            let kind = ALL_PIECE_KINDS[rng.gen_range(1..ALL_PIECE_KINDS.len())];
            let square = squares.swap_remove(rng.gen_range(0..squares.len()));
            pieces.push(Piece::new(kind, square));
        }
        let board = Board::new(Level::new(size, pieces, walls, 3));
        board.validate().unwrap();

        for (index, piece) in board.pieces().iter().enumerate() {
            let destinations: Vec<Position> = generate_moves(&board, index).collect();
            let unique: FxHashSet<Position> = destinations.iter().copied().collect();
            assert_eq!(unique.len(), destinations.len(), "duplicate destination");
            for to in destinations {
                assert!(board.in_bounds(to), "{} left the board", piece);
                assert!(!board.is_wall(to), "{} entered a wall", piece);
                if let Some(occupant) = board.piece_at(to) {
                    assert_ne!(occupant.faction(), piece.faction(), "{} hit a friend", piece);
                }
            }
        }
    }
}
