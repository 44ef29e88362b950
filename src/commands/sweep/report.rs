//! JSON run report.

use super::types::{SweepOptions, SweepOutcome};
use crate::error::{Result, SweepError};
use crate::fs::atomic_write_file;
use crate::scan::Category;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// Report written with `--report`.
#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    /// RFC3339 timestamp of when the report was written.
    pub ts: DateTime<Utc>,
    /// Machine the sweep ran on.
    pub host: String,
    pub root: &'a Path,
    pub deleted_categories: Vec<Category>,
    #[serde(flatten)]
    pub outcome: &'a SweepOutcome,
}

impl<'a> RunReport<'a> {
    pub fn new(options: &'a SweepOptions, outcome: &'a SweepOutcome) -> Self {
        let deleted_categories = [
            (options.delete_venv, Category::Venv),
            (options.delete_pycache, Category::Pycache),
            (options.delete_node, Category::NodeModules),
        ]
        .into_iter()
        .filter_map(|(on, category)| on.then_some(category))
        .collect();

        Self {
            ts: Utc::now(),
            host: host_name(),
            root: &options.root,
            deleted_categories,
            outcome,
        }
    }
}

/// Write the report for a finished run to `path`.
pub fn write_report(path: &Path, options: &SweepOptions, outcome: &SweepOutcome) -> Result<()> {
    let report = RunReport::new(options, outcome);
    let mut json = serde_json::to_string_pretty(&report).map_err(|e| SweepError::Io {
        context: "failed to serialize report",
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    json.push('\n');

    atomic_write_file(path, &json)?;
    info!(path = %path.display(), "report written");
    Ok(())
}

fn host_name() -> String {
    hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string())
}
