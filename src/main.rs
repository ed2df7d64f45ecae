//! `dotstow` command-line entry point.
use std::process::ExitCode;

use clap::Parser;

use dotstow::cli::Cli;
use dotstow::commands;
use dotstow::logging::{self, Log as _, Logger};

fn main() -> ExitCode {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = Cli::parse();
    logging::init_subscriber(args.verbose, "stow");
    let log = Logger::new();

    match commands::stow::run(&args.global, &log) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log.error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
