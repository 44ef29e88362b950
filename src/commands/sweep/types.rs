//! Data types for the sweep command.

use crate::cli::Cli;
use crate::scan::Category;
use serde::Serialize;
use std::path::PathBuf;

/// What a run has been asked to do.
#[derive(Debug, Clone, Default)]
pub struct SweepOptions {
    /// Directory to scan.
    pub root: PathBuf,
    /// Delete virtual environments after snapshotting them.
    pub delete_venv: bool,
    /// Delete `__pycache__` directories (never prompted).
    pub delete_pycache: bool,
    /// Delete `node_modules` directories.
    pub delete_node: bool,
    /// Answer yes to every prompt.
    pub yes: bool,
    /// Print what would happen; write and delete nothing.
    pub dry_run: bool,
    /// Where to write the JSON run report, if anywhere.
    pub report: Option<PathBuf>,
}

impl SweepOptions {
    /// Build options from parsed arguments. `--delete-all` turns on every category.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            root: cli.root_dir.clone(),
            delete_venv: cli.delete_venv || cli.delete_all,
            delete_pycache: cli.delete_pycache || cli.delete_all,
            delete_node: cli.delete_node || cli.delete_all,
            yes: cli.yes,
            dry_run: cli.dry_run,
            report: cli.report.clone(),
        }
    }
}

/// Directories found by a dry run.
#[derive(Debug, Default)]
pub struct SweepPlan {
    pub venvs: Vec<PathBuf>,
    /// Empty unless pycache deletion was requested.
    pub pycache: Vec<PathBuf>,
    /// Empty unless node_modules deletion was requested.
    pub node_modules: Vec<PathBuf>,
}

/// A directory acted upon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Target {
    pub category: Category,
    pub path: PathBuf,
}

impl Target {
    pub fn new(category: Category, path: PathBuf) -> Self {
        Self { category, path }
    }
}

/// A requirements file written for a venv.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub venv: PathBuf,
    pub requirements: PathBuf,
}

/// Everything a run did.
#[derive(Debug, Default, Serialize)]
pub struct SweepOutcome {
    pub snapshots: Vec<Snapshot>,
    pub removed: Vec<Target>,
    /// Declined at the prompt.
    pub skipped: Vec<Target>,
    /// Gone before removal was attempted.
    pub already_gone: Vec<Target>,
}
