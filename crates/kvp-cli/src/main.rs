use kvp_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Initialize logging as early as possible; fall back to stderr if the state dir is unusable.
    if let Err(file_err) = logging::init_logging() {
        if let Err(err) = logging::init_logging_stderr() {
            eprintln!("kvp: logging disabled: {:#}", err);
        } else {
            tracing::warn!("log file unavailable, logging to stderr: {:#}", file_err);
        }
    }

    // Parse CLI and dispatch.
    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("kvp error: {:#}", err);
        std::process::exit(1);
    }
}
