use super::*;
use crate::levels;
use crate::prelude::*;

fn mv(from: (i32, i32), to: (i32, i32)) -> Move {
    Move::new(from.into(), to.into())
}

fn game(layout: &str) -> PuzzleGame {
    PuzzleGame::from_board(layout.parse::<Board>().unwrap()).unwrap()
}

#[test]
fn test_new_game_state() {
    let game = PuzzleGame::new(levels::level(0).unwrap()).unwrap();
    assert_eq!(GameStatus::InProgress, game.status());
    assert_eq!(0, game.moves_used());
    assert_eq!(3, game.moves_remaining());
    assert_eq!(
        vec![Position::new(0, 2), Position::new(1, 2)],
        game.legal_moves(Position::new(0, 3))
    );
    assert!(game.legal_moves(Position::new(0, 0)).is_empty());
}

#[test]
fn test_capturing_the_king_wins() {
    let mut game = game("K./.b p 1");
    assert_eq!(
        Ok(PlayerMoveOutcome::Checkmate),
        game.player_move(mv((1, 1), (0, 0)))
    );
    assert_eq!(GameStatus::Won, game.status());
    assert_eq!(
        Err(GameError::Finished {
            status: GameStatus::Won
        }),
        game.player_move(mv((0, 0), (1, 0)))
    );
}

#[test]
fn test_boxing_in_an_unchecked_king_is_stalemate() {
    let mut game = game("K../.../b.b p 2");
    assert_eq!(
        Ok(PlayerMoveOutcome::Stalemate),
        game.player_move(mv((2, 2), (2, 1)))
    );
    assert_eq!(GameStatus::Lost(LossReason::Stalemate), game.status());
}

#[test]
fn test_check_then_enemy_escapes() {
    let mut game = game("K../.../..b p 2");
    assert_eq!(
        Ok(PlayerMoveOutcome::Check),
        game.player_move(mv((2, 2), (1, 1)))
    );
    assert_eq!(Faction::Enemy, game.board().side_to_move());

    // The bean is unprotected, so the king takes it.
    assert_eq!(Ok(Some(mv((0, 0), (1, 1)))), game.enemy_move());
    assert_eq!(GameStatus::Lost(LossReason::NoMovesLeft), game.status());
}

#[test]
fn test_running_out_of_moves_loses() {
    let mut game = game("K../.../..b p 1");
    assert_eq!(
        Ok(PlayerMoveOutcome::Continue),
        game.player_move(mv((2, 2), (2, 1)))
    );
    assert_eq!(0, game.moves_remaining());
    assert_eq!(Ok(Some(mv((0, 0), (0, 1)))), game.enemy_move());
    assert_eq!(GameStatus::Lost(LossReason::OutOfMoves), game.status());
}

#[test]
fn test_rejects_bad_player_moves() {
    let mut game = PuzzleGame::new(levels::level(0).unwrap()).unwrap();
    assert_eq!(
        Err(GameError::NotYourPiece {
            position: Position::new(0, 0)
        }),
        game.player_move(mv((0, 0), (1, 0)))
    );
    assert_eq!(
        Err(GameError::NotYourPiece {
            position: Position::new(1, 1)
        }),
        game.player_move(mv((1, 1), (1, 0)))
    );
    assert_eq!(
        Err(GameError::IllegalMove {
            mv: mv((0, 3), (0, 1))
        }),
        game.player_move(mv((0, 3), (0, 1)))
    );
    assert_eq!(
        Err(GameError::WrongTurn {
            faction: Faction::Enemy
        }),
        game.enemy_move()
    );
    assert_eq!(0, game.moves_used());
}

#[test]
fn test_player_cannot_move_twice() {
    let mut game = PuzzleGame::new(levels::level(0).unwrap()).unwrap();
    game.player_move(mv((0, 3), (0, 2))).unwrap();
    assert_eq!(
        Err(GameError::WrongTurn {
            faction: Faction::Player
        }),
        game.player_move(mv((1, 3), (1, 2)))
    );
    assert_eq!(
        Err(GameError::WrongTurn {
            faction: Faction::Player
        }),
        game.suggest_move()
    );
}

#[test]
fn test_undo_restores_the_position_before_the_player_move() {
    let mut game = PuzzleGame::new(levels::level(0).unwrap()).unwrap();
    assert_eq!(Err(GameError::NothingToUndo), game.undo());

    let start = game.board().clone();
    game.player_move(mv((0, 3), (0, 2))).unwrap();
    let after_first = game.board().clone();
    game.enemy_move().unwrap();
    game.player_move(mv((1, 3), (1, 2))).unwrap();
    assert_eq!(2, game.moves_used());

    game.undo().unwrap();
    assert_ne!(&after_first, game.board());
    assert!(!game.board().enemy_turn());
    assert_eq!(1, game.moves_used());

    game.undo().unwrap();
    assert_eq!(&start, game.board());
    assert_eq!(3, game.moves_remaining());
}

#[test]
fn test_undo_reopens_a_finished_puzzle() {
    let mut game = game("K./.b p 1");
    game.player_move(mv((1, 1), (0, 0))).unwrap();
    game.undo().unwrap();
    assert_eq!(GameStatus::InProgress, game.status());
    assert!(game.board().has_king());
}

#[test]
fn test_reset() {
    let mut game = PuzzleGame::new(levels::level(0).unwrap()).unwrap();
    let start = game.board().clone();
    game.player_move(mv((0, 3), (0, 2))).unwrap();
    game.enemy_move().unwrap();
    game.reset();
    assert_eq!(&start, game.board());
    assert_eq!(0, game.moves_used());
    assert_eq!(GameStatus::InProgress, game.status());
}

#[test]
fn test_suggest_move_finds_mate_in_one() {
    let mut game = PuzzleGame::new(levels::level(9).unwrap()).unwrap();
    let hint = game.suggest_move().unwrap().unwrap();
    assert_eq!(Ok(PlayerMoveOutcome::Checkmate), game.player_move(hint));
}

#[test]
fn test_autoplay_solves_first_level() {
    let mut game = PuzzleGame::new(levels::level(0).unwrap()).unwrap();
    let played = game.autoplay().unwrap();
    assert_eq!(GameStatus::Won, game.status());
    assert!(game.moves_used() <= 3);
    assert_eq!(mv((0, 3), (0, 2)), played[0]);
    assert_eq!(played.len() as u32, game.moves_used() * 2 - 1);
}

#[test]
fn test_autoplay_solves_second_level() {
    let mut game = PuzzleGame::new(levels::level(1).unwrap()).unwrap();
    game.autoplay().unwrap();
    assert_eq!(GameStatus::Won, game.status());
    assert!(game.moves_used() <= 4);
}

#[test]
fn test_autoplay_solves_every_level_within_budget() {
    for (index, level) in levels::all().iter().enumerate() {
        let mut game = PuzzleGame::new(level).unwrap();
        let hint = game.suggest_move().unwrap();
        assert!(hint.is_some(), "no hint for level {}", index + 1);

        game.autoplay().unwrap();
        assert_eq!(
            GameStatus::Won,
            game.status(),
            "level {} ended {}",
            index + 1,
            game.status()
        );
        assert!(game.moves_used() <= level.move_budget());
    }
}

#[test]
fn test_rejects_invalid_board() {
    let mut board: Board = "K./.b".parse().unwrap();
    board.set_enemy_turn(true);
    assert!(PuzzleGame::from_board(board).is_ok());

    let level = Level::new(Position::new(0, 0), vec![], vec![], 1);
    assert!(matches!(
        PuzzleGame::new(&level),
        Err(GameError::Board(_))
    ));
}
