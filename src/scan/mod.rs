//! Directory classification scan.
//!
//! Finds the three kinds of directories envsweep cleans up:
//! - Python virtual environments (not descended into once found)
//! - `__pycache__` bytecode caches (all of them, including nested ones)
//! - `node_modules` dependency caches (not descended into once found)

mod detect;
mod walk;


pub use detect::VenvLayout;

use crate::config::Config;
use crate::error::Result;
use globset::GlobSet;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;
use walk::{Visit, collect_dirs};

/// The kinds of directory a sweep handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Venv,
    Pycache,
    NodeModules,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Venv => write!(f, "venv"),
            Category::Pycache => write!(f, "__pycache__"),
            Category::NodeModules => write!(f, "node_modules"),
        }
    }
}

/// Classifies directories under a root according to a [`Config`].
#[derive(Debug, Clone)]
pub struct Scanner {
    layout: VenvLayout,
    pycache_dir_name: String,
    node_modules_dir_name: String,
    excludes: GlobSet,
}

impl Scanner {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            layout: VenvLayout::from_config(config)?,
            pycache_dir_name: config.pycache_dir_name.clone(),
            node_modules_dir_name: config.node_modules_dir_name.clone(),
            excludes: config.exclude_set()?,
        })
    }

    /// Find every candidate of `category` under `root`.
    pub fn find(&self, category: Category, root: &Path) -> Result<Vec<PathBuf>> {
        match category {
            Category::Venv => self.find_venv_dirs(root),
            Category::Pycache => self.find_pycache_dirs(root),
            Category::NodeModules => self.find_node_modules_dirs(root),
        }
    }

    /// Find virtual environments under `root`.
    ///
    /// Nothing inside a venv is examined once it has been classified.
    pub fn find_venv_dirs(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let found = collect_dirs(root, &self.excludes, |entry| {
            if self.layout.is_venv(entry.path()) {
                Visit::Claim
            } else {
                Visit::Descend
            }
        })?;
        debug!(root = %root.display(), count = found.len(), "venv scan finished");
        Ok(found)
    }

    /// Find every bytecode cache directory under `root`, however deep.
    pub fn find_pycache_dirs(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let found = collect_dirs(root, &self.excludes, |entry| {
            if entry.file_name() == self.pycache_dir_name.as_str() {
                Visit::ClaimAndDescend
            } else {
                Visit::Descend
            }
        })?;
        debug!(root = %root.display(), count = found.len(), "__pycache__ scan finished");
        Ok(found)
    }

    /// Find outermost `node_modules` directories under `root`.
    pub fn find_node_modules_dirs(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let found = collect_dirs(root, &self.excludes, |entry| {
            if entry.file_name() == self.node_modules_dir_name.as_str() {
                Visit::Claim
            } else {
                Visit::Descend
            }
        })?;
        debug!(root = %root.display(), count = found.len(), "node_modules scan finished");
        Ok(found)
    }
}
