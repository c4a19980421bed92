//! Command-line front end for the `rut-check` binary

pub mod commands;
pub mod output;

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

pub use commands::{execute, Command};

use crate::config::{Args, Config};

/// Parse arguments, set up logging and run the requested command.
///
/// Exit code 1 means the input was checked and found invalid.
pub fn run() -> Result<ExitCode> {
    let args = Args::parse();

    env_logger::Builder::new()
        .parse_filters(&args.log_level)
        .parse_default_env()
        .init();

    // Config::from_args logs, so the logger is initialized first
    let config = Config::from_args(&args)?;
    if !config.has_project_config() {
        log::debug!("No configuration file found, using default form schema");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let ok = execute(&args.command, &config, &mut out)?;

    Ok(if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
