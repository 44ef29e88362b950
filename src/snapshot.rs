//! Requirements snapshots.
//!
//! Runs a venv's own pip with the configured freeze arguments and writes the
//! output to a requirements file in the venv's parent directory. The write is
//! atomic, so an existing file is either fully replaced or left untouched.

use crate::config::Config;
use crate::error::{Result, SweepError};
use crate::fs::atomic_write;
use crate::scan::VenvLayout;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

/// Writes requirements snapshots for virtual environments.
#[derive(Debug, Clone)]
pub struct Snapshotter {
    layout: VenvLayout,
    requirements_file: String,
    freeze_argv: Vec<String>,
}

impl Snapshotter {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            layout: VenvLayout::from_config(config)?,
            requirements_file: config.requirements_file.clone(),
            freeze_argv: config.freeze_argv()?,
        })
    }

    /// Where the snapshot for `venv` is written.
    pub fn requirements_path(&self, venv: &Path) -> PathBuf {
        parent_dir(venv).join(&self.requirements_file)
    }

    /// Freeze `venv`'s installed packages into its requirements file.
    ///
    /// # Returns
    ///
    /// * `Ok(PathBuf)` - Path of the written requirements file
    /// * `Err(SweepError::PipNotFound)` - The venv has no pip executable
    /// * `Err(SweepError::Freeze)` - pip could not be run or exited non-zero
    pub fn save_requirements(&self, venv: &Path) -> Result<PathBuf> {
        let pip = self
            .layout
            .locate_pip(venv)
            .ok_or_else(|| SweepError::PipNotFound {
                venv: venv.to_path_buf(),
            })?;

        debug!(pip = %pip.display(), args = ?self.freeze_argv, "running freeze");
        let output = Command::new(&pip)
            .args(&self.freeze_argv)
            .output()
            .map_err(|e| SweepError::Freeze {
                venv: venv.to_path_buf(),
                message: format!("failed to execute {}: {}", pip.display(), e),
            })?;

        if !output.status.success() {
            let exit_code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(SweepError::Freeze {
                venv: venv.to_path_buf(),
                message: format!("{} exited with code {}: {}", pip.display(), exit_code, stderr),
            });
        }

        let target = self.requirements_path(venv);
        atomic_write(&target, &output.stdout)?;
        info!(path = %target.display(), bytes = output.stdout.len(), "requirements written");

        Ok(target)
    }
}

/// Parent of `path`, treating a bare relative name as living in `.`.
fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
