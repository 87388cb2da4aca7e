// screenrec-cli/src/main.rs
//
// Entry point of the `screenrec` binary.
//
// Responsibilities:
// - Parsing command-line arguments.
// - Setting up console and optional file logging.
// - Installing the stop handler before ffmpeg starts, so an early Ctrl+C
//   is not lost.
// - Running the recording and mapping its result to the exit code.

use clap::Parser;
use log::error;
use screenrec_cli::{Cli, logging, run_record};
use screenrec_core::install_stop_handler;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(cli.verbose, cli.log_dir.as_deref()) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    let stop_rx = match install_stop_handler() {
        Ok(rx) => rx,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match run_record(&cli, &stop_rx) {
        Ok(outcome) if outcome.completed() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
