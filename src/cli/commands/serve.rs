//! Serve command - JSON-lines search server on stdin/stdout.

use std::io;

use gambit::protocol::serve;
use gambit::search::SearchConfig;
use structopt::StructOpt;

use super::util::exit_with_error;
use super::Command;

#[derive(StructOpt)]
pub struct ServeArgs {
    #[structopt(long, default_value = "2")]
    pub extra_depth: u8,
    #[structopt(long, help = "Never search deeper than this")]
    pub max_depth: Option<u8>,
}

impl Command for ServeArgs {
    fn execute(self) {
        let config = SearchConfig::new(self.extra_depth, self.max_depth);
        let stdin = io::stdin();
        let stdout = io::stdout();
        if let Err(err) = serve(stdin.lock(), stdout.lock(), &config) {
            exit_with_error(&format!("Server stopped: {}", err));
        }
    }
}
