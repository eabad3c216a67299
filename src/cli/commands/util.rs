//! Shared utilities for CLI commands.

use std::fs;
use std::path::PathBuf;
use std::process;

use gambit::board::Board;
use gambit::levels;
use structopt::StructOpt;

/// Where a command takes its starting position from. Exactly one source must
/// be given.
#[derive(StructOpt)]
pub struct PositionArgs {
    #[structopt(short, long, help = "Built-in level, counted from 1")]
    pub level: Option<usize>,
    #[structopt(long, help = "Text layout such as \"K./../../bb p 3\"")]
    pub layout: Option<Board>,
    #[structopt(long, parse(from_os_str), help = "JSON board file")]
    pub board: Option<PathBuf>,
}

impl PositionArgs {
    pub fn load(self) -> Result<Board, String> {
        match (self.level, self.layout, self.board) {
            (Some(number), None, None) => number
                .checked_sub(1)
                .and_then(levels::level)
                .map(Board::from_level)
                .ok_or_else(|| {
                    format!(
                        "There is no level {}, pick one from 1 to {}",
                        number,
                        levels::count()
                    )
                }),
            (None, Some(board), None) => Ok(board),
            (None, None, Some(path)) => {
                let json = fs::read_to_string(&path)
                    .map_err(|err| format!("Cannot read {}: {}", path.display(), err))?;
                let board: Board = serde_json::from_str(&json)
                    .map_err(|err| format!("Cannot parse {}: {}", path.display(), err))?;
                board.validate().map_err(|err| err.to_string())?;
                Ok(board)
            }
            _ => Err("Give exactly one of --level, --layout or --board".to_string()),
        }
    }
}

pub(crate) fn exit_with_error(message: &str) -> ! {
    eprintln!("{}", message);
    process::exit(1);
}
