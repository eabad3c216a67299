use super::*;
use crate::board::Position;
use crate::evaluate::{game_ending, GameEnding};
use crate::levels;
use crate::move_generation::faction_has_moves;
use crate::moves::execute_move;
use crate::pieces::Faction;
use crate::puzzle_position;

fn mv(from: (i32, i32), to: (i32, i32)) -> Move {
    Move::new(from.into(), to.into())
}

#[test]
fn test_depth_limit() {
    let config = SearchConfig::default();
    assert_eq!(5, config.depth_limit(3));
    assert_eq!(2, config.depth_limit(0));
    assert_eq!(u8::MAX, config.depth_limit(u32::MAX));
    assert_eq!(4, SearchConfig::new(2, Some(4)).depth_limit(3));
    assert_eq!(1, SearchConfig::new(0, None).depth_limit(1));
}

#[test]
fn test_takes_the_king_when_it_can() {
    let mut board = puzzle_position! { K. / .b };
    let result = get_best_move(&mut board, 0).unwrap();
    assert_eq!(Some(mv((1, 1), (0, 0))), result.best_move);
    assert_eq!(BEST_SCORE, result.score);
    assert_eq!(1, result.depth);
}

#[test]
fn test_finds_mate_in_one() {
    let mut board = Board::from_level(levels::level(9).unwrap());
    let result = get_best_move(&mut board, 1).unwrap();
    assert_eq!(BEST_SCORE, result.score);

    let best_move = result.best_move.unwrap();
    execute_move(&mut board, best_move.from, best_move.to).unwrap();
    assert_eq!(Some(GameEnding::Checkmate), game_ending(&mut board));
}

#[test]
fn test_checkmated_enemy_has_no_move() {
    let mut board: Board = "K./bb/.. e".parse().unwrap();
    let result = get_best_move(&mut board, 1).unwrap();
    assert_eq!(None, result.best_move);
    assert_eq!(-BEST_SCORE, result.score);
}

#[test]
fn test_kingless_board_is_already_won() {
    let mut board = puzzle_position! { R. / .b };
    let result = get_best_move(&mut board, 2).unwrap();
    assert_eq!(None, result.best_move);
    assert_eq!(BEST_SCORE, result.score);
    assert_eq!(1, result.depth);
}

#[test]
fn test_zero_depth_limit_reports_static_score() {
    let mut board = puzzle_position! { K. / .. / .. / bb };
    let mut context = SearchContext::new(SearchConfig::new(0, Some(0)));
    let result = search(&mut context, &mut board, 3).unwrap();
    assert_eq!(None, result.best_move);
    assert_eq!(0, result.depth);
    assert_eq!(evaluate(&mut board), result.score);
}

#[test]
fn test_invalid_board_is_rejected() {
    let mut board = puzzle_position! { K. / .b };
    board
        .pieces_mut()
        .push(crate::board::Piece::new(crate::pieces::PieceKind::King, Position::new(1, 0)));
    assert_eq!(
        Err(SearchError::InvalidBoard(BoardError::MultipleKings { count: 2 })),
        get_best_move(&mut board, 1)
    );
}

#[test]
fn test_search_leaves_board_untouched() {
    let mut board = Board::from_level(levels::level(4).unwrap());
    let original = board.clone();
    get_best_move(&mut board, 3).unwrap();
    assert_eq!(original, board);
}

#[test]
fn test_search_is_deterministic() {
    let mut board = Board::from_level(levels::level(0).unwrap());
    let first = get_best_move(&mut board, 3).unwrap();
    let second = get_best_move(&mut board, 3).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_context_records_statistics() {
    let mut board = Board::from_level(levels::level(0).unwrap());
    let mut context = SearchContext::new(SearchConfig::default());
    let result = search(&mut context, &mut board, 3).unwrap();
    assert_eq!(BEST_SCORE, result.score);
    assert!(context.searched_position_count() > 0);
    assert!(context.tt_size() > 0);
    assert!(context.tt_probes() >= context.tt_hits());
    assert!(context.stats().leaves > 0);
}

/// Both sides play the engine's choice; the player has to mate within the
/// level's three moves.
#[test]
fn test_first_level_is_solved_within_budget() {
    let level = levels::level(0).unwrap();
    let mut board = Board::from_level(level);
    let budget = level.move_budget();

    for used in 0..budget {
        let result = get_best_move(&mut board, budget - used).unwrap();
        assert_eq!(BEST_SCORE, result.score, "lost the thread on move {}", used + 1);
        let player_move = result.best_move.unwrap();
        execute_move(&mut board, player_move.from, player_move.to).unwrap();

        if !board.has_king() || !faction_has_moves(&board, Faction::Enemy) {
            assert_eq!(Some(GameEnding::Checkmate), game_ending(&mut board));
            return;
        }

        let reply = get_best_move(&mut board, budget - used - 1).unwrap();
        let enemy_move = reply.best_move.unwrap();
        execute_move(&mut board, enemy_move.from, enemy_move.to).unwrap();
    }
    panic!("no checkmate within {} moves:\n{}", budget, board);
}
