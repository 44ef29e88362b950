//! envsweep: find Python virtual environments, `__pycache__` and
//! `node_modules` directories, freeze requirements, and clean them up.
//!
//! This is the main entry point for the `envsweep` CLI. It parses arguments,
//! sets up logging, runs the sweep, and handles errors with proper exit codes.

mod cli;
mod commands;
mod config;
mod confirm;
mod delete;
mod error;
mod exit_codes;
mod fs;
mod logging;
mod scan;
mod snapshot;

#[cfg(test)]
mod test_support;

use cli::Cli;
use error::SweepError;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.log_config());

    match commands::dispatch(&cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            let code = err.exit_code();
            report_error(err, cli.debug);
            ExitCode::from(code as u8)
        }
    }
}

/// Print a failure to stderr.
///
/// Debug mode prints the whole error chain and the error's fields, e.g. the
/// path behind a permission failure.
fn report_error(err: SweepError, debug: bool) {
    if debug {
        let detail = format!("{:#?}", err);
        eprintln!("Error: {:?}", anyhow::Error::new(err));
        eprintln!();
        eprintln!("{}", detail);
    } else {
        eprintln!("Error: {}", err);
    }
}
