//! Implementation of the sweep command.
//!
//! One run, in order:
//! 1. Find virtual environments, freeze each one's requirements next to it,
//!    and delete it if asked (with confirmation unless `--yes`)
//! 2. Delete every `__pycache__` if asked (never prompted)
//! 3. Delete every `node_modules` if asked (with confirmation unless `--yes`)
//!
//! The first error aborts the rest of the run.
//!
//! # Dry run
//!
//! With `--dry-run` the scans run and the plan is printed; nothing is
//! written, deleted or asked.

mod display;
mod execution;
mod planning;
mod report;
mod types;


use crate::cli::Cli;
use crate::config::Config;
use crate::confirm::{ResponseSource, StdinPrompt};
use crate::error::Result;
use display::{print_summary, print_sweep_plan};
use execution::Sweeper;
use planning::build_sweep_plan;
use report::write_report;
use tracing::{debug, warn};
use types::{SweepOptions, SweepOutcome};

/// Execute the sweep command from parsed arguments.
///
/// Loads the config for the root (adding any `--exclude` globs) and answers
/// prompts from stdin.
pub fn cmd_sweep(cli: &Cli) -> Result<()> {
    let options = SweepOptions::from_cli(cli);

    let mut config = Config::discover(&options.root, cli.config.as_deref())?;
    config.exclude.extend(cli.exclude.iter().cloned());
    debug!(?options, ?config, "starting sweep");

    run_sweep(&config, &options, &mut StdinPrompt)?;
    Ok(())
}

/// Run a sweep with an explicit config and prompt source.
pub fn run_sweep(
    config: &Config,
    options: &SweepOptions,
    prompt: &mut dyn ResponseSource,
) -> Result<SweepOutcome> {
    let sweeper = Sweeper::new(config)?;

    if options.dry_run {
        let plan = build_sweep_plan(&sweeper.scanner, options)?;
        print_sweep_plan(&plan, &sweeper.snapshotter, options.delete_venv);
        if options.report.is_some() {
            warn!("--report is ignored in dry-run mode");
        }
        println!("Dry-run mode: no changes made.");
        return Ok(SweepOutcome::default());
    }

    let outcome = sweeper.execute(options, prompt)?;
    print_summary(&outcome);

    if let Some(path) = &options.report {
        write_report(path, options, &outcome)?;
    }

    Ok(outcome)
}
