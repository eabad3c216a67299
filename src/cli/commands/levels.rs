//! Levels command - list the built-in puzzles.

use gambit::board::Board;
use gambit::levels;
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct LevelsArgs {
    #[structopt(long, help = "Also print each level's starting position")]
    pub show: bool,
}

impl Command for LevelsArgs {
    fn execute(self) {
        for (index, level) in levels::all().iter().enumerate() {
            let size = level.board_size();
            println!(
                "{:>2}. {}x{}, {} move(s){}",
                index + 1,
                size.x,
                size.y,
                level.move_budget(),
                level
                    .text()
                    .map(|text| format!(" - {}", text))
                    .unwrap_or_default()
            );
            if self.show {
                println!("{}", Board::from_level(level));
            }
        }
    }
}
