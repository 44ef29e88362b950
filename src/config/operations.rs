//! Config loading, validation, and compiled-pattern accessors.

use super::model::Config;
use super::types::CONFIG_FILE_NAME;
use crate::error::{Result, SweepError};
use globset::{Glob, GlobSet, GlobSetBuilder};
use regex::Regex;
use std::path::Path;
use tracing::debug;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(SweepError::Config)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            SweepError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Resolve the config for a scan of `root`.
    ///
    /// An explicit path must exist. Otherwise `<root>/.envsweep.yaml` is used
    /// when present, and defaults when not.
    pub fn discover(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading config");
            return Self::load(path);
        }

        let candidate = root.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            debug!(path = %candidate.display(), "loading config");
            Self::load(&candidate)
        } else {
            debug!("no config file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not an empty map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| SweepError::Config(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `pip_pattern` must compile as a regex
    /// - every `exclude` entry must compile as a glob
    /// - `script_dirs`, `activation_files` must be non-empty
    /// - directory and file names must be single path components
    /// - `freeze_args` must parse with shell-word rules
    pub fn validate(&self) -> Result<()> {
        self.pip_regex()?;
        self.exclude_set()?;
        self.freeze_argv()?;

        if self.script_dirs.is_empty() {
            return Err(SweepError::Config(
                "config validation failed: script_dirs must not be empty".to_string(),
            ));
        }
        if self.activation_files.is_empty() {
            return Err(SweepError::Config(
                "config validation failed: activation_files must not be empty".to_string(),
            ));
        }

        for (field, name) in [
            ("pycache_dir_name", &self.pycache_dir_name),
            ("node_modules_dir_name", &self.node_modules_dir_name),
            ("requirements_file", &self.requirements_file),
        ] {
            if !is_plain_name(name) {
                return Err(SweepError::Config(format!(
                    "config validation failed: {} must be a plain file name, got '{}'",
                    field, name
                )));
            }
        }

        Ok(())
    }

    /// Compile `pip_pattern`.
    pub fn pip_regex(&self) -> Result<Regex> {
        Regex::new(&self.pip_pattern).map_err(|e| {
            SweepError::Config(format!(
                "config validation failed: invalid pip_pattern '{}': {}",
                self.pip_pattern, e
            ))
        })
    }

    /// Compile the `exclude` globs into a single set.
    pub fn exclude_set(&self) -> Result<GlobSet> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &self.exclude {
            let glob = Glob::new(pattern).map_err(|e| {
                SweepError::Config(format!(
                    "config validation failed: invalid exclude glob '{}': {}",
                    pattern, e
                ))
            })?;
            builder.add(glob);
        }
        builder
            .build()
            .map_err(|e| SweepError::Config(format!("failed to build exclude globs: {}", e)))
    }

    /// Split `freeze_args` into an argument vector.
    pub fn freeze_argv(&self) -> Result<Vec<String>> {
        shell_words::split(&self.freeze_args).map_err(|e| {
            SweepError::Config(format!(
                "config validation failed: cannot parse freeze_args '{}': {}",
                self.freeze_args, e
            ))
        })
    }
}

fn is_plain_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}
