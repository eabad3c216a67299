//! Best move command - search a position for the side to move.

use gambit::evaluate::score_to_points;
use gambit::search::{search, SearchConfig, SearchContext};
use structopt::StructOpt;

use super::util::{exit_with_error, PositionArgs};
use super::Command;

#[derive(StructOpt)]
pub struct BestMoveArgs {
    #[structopt(flatten)]
    pub position: PositionArgs,
    #[structopt(short, long, help = "Lookahead budget (default: the position's move budget)")]
    pub depth: Option<u32>,
    #[structopt(long, default_value = "2")]
    pub extra_depth: u8,
    #[structopt(long, help = "Search for the enemy instead of the player")]
    pub enemy: bool,
}

impl Command for BestMoveArgs {
    fn execute(self) {
        let mut board = self
            .position
            .load()
            .unwrap_or_else(|err| exit_with_error(&err));
        if self.enemy {
            board.set_enemy_turn(true);
        }
        let lookahead = self.depth.unwrap_or_else(|| board.move_budget());

        println!("{}", board);
        let config = SearchConfig::new(self.extra_depth, None);
        let mut context = SearchContext::new(config);
        let result = match search(&mut context, &mut board, lookahead) {
            Ok(result) => result,
            Err(err) => exit_with_error(&format!("Failed to calculate best move: {}", err)),
        };

        match result.best_move {
            Some(best_move) => println!("{}", best_move),
            None => println!("no legal move"),
        }
        println!(
            "score {:.1} at depth {} ({} positions searched, {} table entries)",
            score_to_points(result.score),
            result.depth,
            context.searched_position_count(),
            context.tt_size()
        );
    }
}
