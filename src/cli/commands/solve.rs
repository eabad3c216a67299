//! Solve command - let the engine play a puzzle through.

use gambit::game::PuzzleGame;
use gambit::moves::execute_move;
use structopt::StructOpt;

use super::util::{exit_with_error, PositionArgs};
use super::Command;

#[derive(StructOpt)]
pub struct SolveArgs {
    #[structopt(flatten)]
    pub position: PositionArgs,
}

impl Command for SolveArgs {
    fn execute(self) {
        let board = self
            .position
            .load()
            .unwrap_or_else(|err| exit_with_error(&err));
        let mut game = PuzzleGame::from_board(board.clone())
            .unwrap_or_else(|err| exit_with_error(&err.to_string()));

        let played = match game.autoplay() {
            Ok(played) => played,
            Err(err) => exit_with_error(&format!("Autoplay failed: {}", err)),
        };

        let mut replay = board;
        println!("{}", replay);
        for mv in played {
            let mover = replay.side_to_move();
            if let Err(err) = execute_move(&mut replay, mv.from, mv.to) {
                exit_with_error(&err.to_string());
            }
            println!("{}: {}", mover, mv);
            println!("{}", replay);
        }
        println!(
            "{} after {} of {} moves",
            game.status(),
            game.moves_used(),
            game.board().move_budget()
        );
    }
}
