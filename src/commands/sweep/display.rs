//! Display and formatting for sweep command output.

use super::types::{SweepOutcome, SweepPlan};
use crate::snapshot::Snapshotter;
use std::path::PathBuf;

/// Print what a dry run found.
pub fn print_sweep_plan(plan: &SweepPlan, snapshotter: &Snapshotter, delete_venv: bool) {
    println!("Sweep plan:");
    println!();

    if plan.venvs.is_empty() {
        println!("No virtual environments found.");
        println!();
    } else {
        let action = if delete_venv {
            "freeze, then delete"
        } else {
            "freeze"
        };
        println!("Virtual environments ({}, {}):", plan.venvs.len(), action);
        for venv in &plan.venvs {
            println!(
                "  - {} -> {}",
                venv.display(),
                snapshotter.requirements_path(venv).display()
            );
        }
        println!();
    }

    print_section("__pycache__ directories to delete", &plan.pycache);
    print_section("node_modules directories to delete", &plan.node_modules);
}

fn print_section(title: &str, paths: &[PathBuf]) {
    if paths.is_empty() {
        return;
    }
    println!("{} ({}):", title, paths.len());
    for path in paths {
        println!("  - {}", path.display());
    }
    println!();
}

/// Print the end-of-run summary.
pub fn print_summary(outcome: &SweepOutcome) {
    println!();
    println!("Sweep complete:");
    println!("  Requirements frozen: {}", outcome.snapshots.len());
    println!("  Removed: {} directory(s)", outcome.removed.len());
    if !outcome.skipped.is_empty() {
        println!("  Skipped: {} directory(s)", outcome.skipped.len());
        for target in &outcome.skipped {
            println!("    - {} ({})", target.path.display(), target.category);
        }
    }
    if !outcome.already_gone.is_empty() {
        println!("  Already gone: {} directory(s)", outcome.already_gone.len());
    }
}
