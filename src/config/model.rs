//! Config struct definition and default implementation.

use super::types::*;
use serde::Deserialize;

/// Configuration for a sweep.
///
/// This struct represents the contents of `.envsweep.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Virtual environment detection
    // =========================================================================
    /// Subdirectories of a venv that hold its scripts (`bin`, `Scripts`).
    #[serde(default = "default_script_dirs")]
    pub script_dirs: Vec<String>,

    /// File names that mark a script directory as holding an activation script.
    #[serde(default = "default_activation_files")]
    pub activation_files: Vec<String>,

    /// Regex matched against file names in a script directory to find pip.
    #[serde(default = "default_pip_pattern")]
    pub pip_pattern: String,

    // =========================================================================
    // Cache directory names
    // =========================================================================
    /// Base name of bytecode cache directories.
    #[serde(default = "default_pycache_dir_name")]
    pub pycache_dir_name: String,

    /// Base name of dependency cache directories.
    #[serde(default = "default_node_modules_dir_name")]
    pub node_modules_dir_name: String,

    // =========================================================================
    // Snapshot settings
    // =========================================================================
    /// File written next to each venv with the frozen requirements.
    #[serde(default = "default_requirements_file")]
    pub requirements_file: String,

    /// Arguments passed to pip to produce the snapshot (shell-word syntax).
    #[serde(default = "default_freeze_args")]
    pub freeze_args: String,

    // =========================================================================
    // Traversal
    // =========================================================================
    /// Glob patterns (relative to the scan root) that are never scanned.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            script_dirs: default_script_dirs(),
            activation_files: default_activation_files(),
            pip_pattern: default_pip_pattern(),
            pycache_dir_name: default_pycache_dir_name(),
            node_modules_dir_name: default_node_modules_dir_name(),
            requirements_file: default_requirements_file(),
            freeze_args: default_freeze_args(),
            exclude: Vec::new(),
        }
    }
}
