//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    best_move::BestMoveArgs, levels::LevelsArgs, serve::ServeArgs, solve::SolveArgs,
};

#[derive(StructOpt)]
#[structopt(
    name = "gambit",
    about = "Checkmate-the-king puzzles with odd pieces, and the engine that plays the king"
)]
pub enum Gambit {
    #[structopt(
        name = "levels",
        about = "List the built-in levels with their board size, move budget and hint."
    )]
    Levels(LevelsArgs),
    #[structopt(
        name = "best-move",
        about = "Search the given position for the side to move and print the best move and its score. The position comes from `--level N`, a text `--layout` (e.g. \"K./../../bb p 3\") or a JSON `--board` file. The lookahead defaults to the position's move budget; override it with `--depth`."
    )]
    BestMove(BestMoveArgs),
    #[structopt(
        name = "solve",
        about = "Let the engine play both sides of a level until it is won or lost, printing every move."
    )]
    Solve(SolveArgs),
    #[structopt(
        name = "serve",
        about = "Answer JSON search requests, one per line on stdin, with one JSON response per line on stdout."
    )]
    Serve(ServeArgs),
}

impl crate::cli::commands::Command for Gambit {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Levels(cmd),
            BestMove(cmd),
            Solve(cmd),
            Serve(cmd),
        }
    }
}
