use imgfetch_core::logging;

mod cli;

use crate::cli::{exit_code, Cli};

fn main() {
    let cli = Cli::parse_normalized(std::env::args_os());

    // A missing log file never stops the run.
    if cli.prot {
        if let Err(err) = logging::init_logging() {
            logging::init_logging_stderr();
            tracing::warn!("logging to file disabled: {:#}", err);
        }
    } else {
        logging::init_logging_stderr();
    }

    let outcome = cli.run();
    std::process::exit(exit_code(&outcome));
}
