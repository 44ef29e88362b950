//! Virtual environment detection.
//!
//! A directory is a venv when one of its script directories holds both an
//! activation file and a pip executable.

use crate::config::Config;
use crate::error::Result;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::trace;

/// Compiled venv layout rules.
#[derive(Debug, Clone)]
pub struct VenvLayout {
    script_dirs: Vec<String>,
    activation_files: Vec<String>,
    pip: Regex,
}

impl VenvLayout {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            script_dirs: config.script_dirs.clone(),
            activation_files: config.activation_files.clone(),
            pip: config.pip_regex()?,
        })
    }

    /// Returns true if `dir` looks like a virtual environment.
    pub fn is_venv(&self, dir: &Path) -> bool {
        self.script_dirs.iter().any(|name| {
            let scripts = dir.join(name);
            scripts.is_dir()
                && self.has_activation(&scripts)
                && self.pip_in(&scripts).is_some()
        })
    }

    /// Find the pip executable inside a venv.
    ///
    /// Script directories are searched in configured order. Within one
    /// directory `pip` wins over `pip3`, which wins over versioned names.
    pub fn locate_pip(&self, venv: &Path) -> Option<PathBuf> {
        self.script_dirs
            .iter()
            .map(|name| venv.join(name))
            .filter(|scripts| scripts.is_dir())
            .find_map(|scripts| self.pip_in(&scripts))
    }

    fn has_activation(&self, scripts: &Path) -> bool {
        self.activation_files
            .iter()
            .any(|file| scripts.join(file).is_file())
    }

    fn pip_in(&self, scripts: &Path) -> Option<PathBuf> {
        let entries = match fs::read_dir(scripts) {
            Ok(entries) => entries,
            Err(e) => {
                trace!(path = %scripts.display(), error = %e, "cannot list script directory");
                return None;
            }
        };

        let mut candidates: Vec<(u8, String)> = entries
            .flatten()
            .filter_map(|entry| {
                let name = entry.file_name().to_str()?.to_string();
                (self.pip.is_match(&name) && entry.path().is_file()).then_some(name)
            })
            .map(|name| (pip_rank(&name), name))
            .collect();

        candidates.sort();
        candidates
            .into_iter()
            .next()
            .map(|(_, name)| scripts.join(name))
    }
}

fn pip_rank(name: &str) -> u8 {
    match name.strip_suffix(".exe").unwrap_or(name) {
        "pip" => 0,
        "pip3" => 1,
        _ => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn layout() -> VenvLayout {
        VenvLayout::from_config(&Config::default()).unwrap()
    }

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn posix_layout_is_detected() {
        let temp = TempDir::new().unwrap();
        let venv = temp.path().join(".venv");
        touch(&venv.join("bin/activate"));
        touch(&venv.join("bin/pip"));

        assert!(layout().is_venv(&venv));
    }

    #[test]
    fn windows_layout_is_detected() {
        let temp = TempDir::new().unwrap();
        let venv = temp.path().join("env");
        touch(&venv.join("Scripts/activate.bat"));
        touch(&venv.join("Scripts/pip.exe"));

        assert!(layout().is_venv(&venv));
        assert_eq!(
            layout().locate_pip(&venv),
            Some(venv.join("Scripts/pip.exe"))
        );
    }

    #[test]
    fn activation_without_pip_is_not_a_venv() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("tools");
        touch(&dir.join("bin/activate"));
        touch(&dir.join("bin/python"));

        assert!(!layout().is_venv(&dir));
    }

    #[test]
    fn pip_without_activation_is_not_a_venv() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("usr");
        touch(&dir.join("bin/pip"));

        assert!(!layout().is_venv(&dir));
    }

    #[test]
    fn markers_split_across_script_dirs_do_not_count() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("mixed");
        touch(&dir.join("bin/activate"));
        touch(&dir.join("Scripts/pip.exe"));

        assert!(!layout().is_venv(&dir));
    }

    #[test]
    fn locate_pip_prefers_unversioned_name() {
        let temp = TempDir::new().unwrap();
        let venv = temp.path().join("venv");
        touch(&venv.join("bin/activate"));
        touch(&venv.join("bin/pip3.12"));
        touch(&venv.join("bin/pip3"));
        touch(&venv.join("bin/pip"));

        assert_eq!(layout().locate_pip(&venv), Some(venv.join("bin/pip")));
    }

    #[test]
    fn locate_pip_falls_back_to_versioned_name() {
        let temp = TempDir::new().unwrap();
        let venv = temp.path().join("venv");
        touch(&venv.join("bin/pip3.11"));

        assert_eq!(layout().locate_pip(&venv), Some(venv.join("bin/pip3.11")));
    }

    #[test]
    fn locate_pip_ignores_directories_named_pip() {
        let temp = TempDir::new().unwrap();
        let venv = temp.path().join("venv");
        fs::create_dir_all(venv.join("bin/pip")).unwrap();

        assert_eq!(layout().locate_pip(&venv), None);
    }
}
