//! Recursive removal of discovered directories.
//!
//! Removal is idempotent: a path that is already gone is reported as
//! [`Removal::AlreadyGone`], never as an error. Before anything is removed the
//! path is checked against the category it is being removed as, so a stale
//! or mistyped path cannot take an unrelated tree with it.

use crate::config::Config;
use crate::error::{Result, SweepError};
use crate::scan::{Category, VenvLayout};
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Outcome of a single removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    /// The tree existed and was removed.
    Removed,
    /// Nothing was at the path.
    AlreadyGone,
}

/// Removes venv, `__pycache__` and `node_modules` trees.
#[derive(Debug, Clone)]
pub struct Deleter {
    layout: VenvLayout,
    pycache_dir_name: String,
    node_modules_dir_name: String,
}

impl Deleter {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            layout: VenvLayout::from_config(config)?,
            pycache_dir_name: config.pycache_dir_name.clone(),
            node_modules_dir_name: config.node_modules_dir_name.clone(),
        })
    }

    /// Remove `path` as a directory of `category`.
    pub fn delete(&self, category: Category, path: &Path) -> Result<Removal> {
        match category {
            Category::Venv => self.delete_venv(path),
            Category::Pycache => self.delete_pycache(path),
            Category::NodeModules => self.delete_node_modules(path),
        }
    }

    /// Remove a virtual environment.
    pub fn delete_venv(&self, path: &Path) -> Result<Removal> {
        remove_tree(path, |path| {
            if self.layout.is_venv(path) {
                Ok(())
            } else {
                Err("not a virtual environment".to_string())
            }
        })
    }

    /// Remove a bytecode cache directory.
    pub fn delete_pycache(&self, path: &Path) -> Result<Removal> {
        remove_tree(path, |path| require_name(path, &self.pycache_dir_name))
    }

    /// Remove a dependency cache directory.
    pub fn delete_node_modules(&self, path: &Path) -> Result<Removal> {
        remove_tree(path, |path| require_name(path, &self.node_modules_dir_name))
    }
}

fn remove_tree<F>(path: &Path, check: F) -> Result<Removal>
where
    F: FnOnce(&Path) -> std::result::Result<(), String>,
{
    let meta = match fs::symlink_metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "already removed");
            return Ok(Removal::AlreadyGone);
        }
        Err(e) => return Err(SweepError::from_io("failed to inspect", path, e)),
    };

    if !meta.is_dir() {
        return Err(SweepError::Refused {
            path: path.to_path_buf(),
            reason: "not a directory".to_string(),
        });
    }

    check(path).map_err(|reason| SweepError::Refused {
        path: path.to_path_buf(),
        reason,
    })?;

    match fs::remove_dir_all(path) {
        Ok(()) => {
            debug!(path = %path.display(), "removed");
            Ok(Removal::Removed)
        }
        // Something else removed it between the check and now.
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Removal::AlreadyGone),
        Err(e) => Err(SweepError::from_io("failed to remove directory", path, e)),
    }
}

fn require_name(path: &Path, expected: &str) -> std::result::Result<(), String> {
    if path.file_name().is_some_and(|name| name == expected) {
        Ok(())
    } else {
        Err(format!("not a {} directory", expected))
    }
}
