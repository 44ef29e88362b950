//! CLI argument parsing for envsweep.
//!
//! Uses clap derive macros for declarative argument definitions. The sweep
//! itself lives in the `commands` module.

use crate::logging::LogConfig;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Clean up Python virtual environments (venv), __pycache__ and node_modules
/// directories, saving a requirements.txt for every venv first.
///
/// Every venv found under ROOT_DIR has its installed packages frozen to a
/// requirements.txt in the venv's parent directory. Deletion only happens
/// when one of the --delete-* flags is given.
#[derive(Parser, Debug)]
#[command(name = "envsweep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Root directory to search.
    pub root_dir: PathBuf,

    /// Delete everything (venv, __pycache__, node_modules).
    #[arg(long)]
    pub delete_all: bool,

    /// Delete virtual environments.
    #[arg(long)]
    pub delete_venv: bool,

    /// Delete __pycache__ directories (never prompted).
    #[arg(long)]
    pub delete_pycache: bool,

    /// Delete node_modules directories.
    #[arg(long)]
    pub delete_node: bool,

    /// Yes to all: skip the venv and node_modules confirmation prompts.
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Enable debug logging and print the full error chain on failure.
    #[arg(long)]
    pub debug: bool,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Config file (default: ROOT_DIR/.envsweep.yaml when present).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Glob patterns, relative to ROOT_DIR, to leave out of the scan.
    #[arg(long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Print what would be frozen and deleted without doing it.
    #[arg(long)]
    pub dry_run: bool,

    /// Write a JSON report of the run to this file.
    #[arg(long)]
    pub report: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Logging settings chosen on the command line.
    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            verbose: self.verbose,
            debug: self.debug,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_root_only() {
        let cli = Cli::try_parse_from(["envsweep", "./projects"]).unwrap();
        assert_eq!(cli.root_dir, PathBuf::from("./projects"));
        assert!(!cli.delete_all);
        assert!(!cli.delete_venv);
        assert!(!cli.delete_pycache);
        assert!(!cli.delete_node);
        assert!(!cli.yes);
        assert!(!cli.debug);
        assert!(!cli.dry_run);
        assert!(cli.config.is_none());
        assert!(cli.report.is_none());
        assert!(cli.exclude.is_empty());
    }

    #[test]
    fn parse_root_is_required() {
        assert!(Cli::try_parse_from(["envsweep"]).is_err());
    }

    #[test]
    fn parse_delete_flags() {
        let cli = Cli::try_parse_from([
            "envsweep",
            "src",
            "--delete-venv",
            "--delete-pycache",
            "--delete-node",
            "-y",
            "--debug",
        ])
        .unwrap();
        assert!(cli.delete_venv);
        assert!(cli.delete_pycache);
        assert!(cli.delete_node);
        assert!(cli.yes);
        assert!(cli.debug);
    }

    #[test]
    fn parse_long_yes_and_delete_all() {
        let cli = Cli::try_parse_from(["envsweep", "src", "--delete-all", "--yes"]).unwrap();
        assert!(cli.delete_all);
        assert!(cli.yes);
    }

    #[test]
    fn parse_verbosity_and_log_config() {
        let cli = Cli::try_parse_from(["envsweep", "src", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.log_config().level(), "debug");
    }

    #[test]
    fn parse_extras() {
        let cli = Cli::try_parse_from([
            "envsweep",
            "src",
            "--config",
            "sweep.yaml",
            "--exclude",
            "archive/**,vendor",
            "--dry-run",
            "--report",
            "out/report.json",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("sweep.yaml")));
        assert_eq!(cli.exclude, vec!["archive/**", "vendor"]);
        assert!(cli.dry_run);
        assert_eq!(cli.report, Some(PathBuf::from("out/report.json")));
    }
}
