//! Constants and default value functions used by the Config struct.

/// File name looked up in the scan root when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = ".envsweep.yaml";

pub(crate) fn default_script_dirs() -> Vec<String> {
    vec!["bin".to_string(), "Scripts".to_string()]
}

pub(crate) fn default_activation_files() -> Vec<String> {
    vec![
        "activate".to_string(),
        "activate.bat".to_string(),
        "Activate.ps1".to_string(),
    ]
}

/// Matches `pip`, `pip3`, `pip3.12` and their `.exe` forms.
pub(crate) fn default_pip_pattern() -> String {
    r"^pip(3(\.\d+)*)?(\.exe)?$".to_string()
}

pub(crate) fn default_pycache_dir_name() -> String {
    "__pycache__".to_string()
}

pub(crate) fn default_node_modules_dir_name() -> String {
    "node_modules".to_string()
}

pub(crate) fn default_requirements_file() -> String {
    "requirements.txt".to_string()
}

pub(crate) fn default_freeze_args() -> String {
    "freeze".to_string()
}
