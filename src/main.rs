mod cli;

use cli::commands::Command;
use structopt::StructOpt;

fn main() {
    env_logger::init();

    #[cfg(feature = "instrumentation")]
    gambit::instrumentation::init_tracing();

    cli::Gambit::from_args().execute();

    #[cfg(feature = "instrumentation")]
    gambit::instrumentation::print_timing_statistics();
}
