//! Dry-run plan building.

use super::types::{SweepOptions, SweepPlan};
use crate::error::Result;
use crate::scan::{Category, Scanner};

/// Scan for everything a real run with `options` would touch.
///
/// Venvs are always listed since they are always snapshotted. A real run
/// scans for caches only after venvs are handled, so caches inside a venv
/// being deleted are listed here but gone by then.
pub fn build_sweep_plan(scanner: &Scanner, options: &SweepOptions) -> Result<SweepPlan> {
    let mut plan = SweepPlan {
        venvs: scanner.find(Category::Venv, &options.root)?,
        ..SweepPlan::default()
    };

    if options.delete_pycache {
        plan.pycache = scanner.find(Category::Pycache, &options.root)?;
    }
    if options.delete_node {
        plan.node_modules = scanner.find(Category::NodeModules, &options.root)?;
    }

    Ok(plan)
}
