//! CLI entry point for stereogram generation

use std::process::ExitCode;

use autostereogram::io::cli::{Cli, Pipeline};
use autostereogram::io::configuration::{DEFAULT_LOG_LEVEL, LOG_LEVEL_ENV};
use clap::Parser;

fn main() -> ExitCode {
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(LOG_LEVEL_ENV, DEFAULT_LOG_LEVEL),
    )
    .init();

    let pipeline = Pipeline::new(Cli::parse());
    if let Err(err) = pipeline.process() {
        log::error!("{err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
