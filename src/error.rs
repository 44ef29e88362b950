//! Error types for the envsweep CLI.
//!
//! Uses thiserror for derive macros. Each "not found" or "not allowed"
//! condition is its own variant so callers can match on it instead of
//! inspecting message strings.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Message shown when a directory cannot be read or removed.
pub const PERMISSION_DENIED_MESSAGE: &str =
    "Unable to access directories, please close any open directories before running";

/// Main error type for envsweep operations.
#[derive(Error, Debug)]
pub enum SweepError {
    /// A directory could not be read or removed due to permissions.
    ///
    /// The message is fixed; the offending path is kept for debug output.
    #[error("{}", PERMISSION_DENIED_MESSAGE)]
    PermissionDenied { path: PathBuf },

    /// No pip executable exists inside a virtual environment.
    #[error("pip executable not found in virtual environment: {}", .venv.display())]
    PipNotFound { venv: PathBuf },

    /// A path that must exist does not.
    #[error("path not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// Running the freeze command failed.
    #[error("failed to freeze requirements for {}: {message}", .venv.display())]
    Freeze { venv: PathBuf, message: String },

    /// A deletion was refused by a safety check.
    #[error("refusing to remove {}: {reason}", .path.display())]
    Refused { path: PathBuf, reason: String },

    /// Configuration could not be read or is invalid.
    #[error("{0}")]
    Config(String),

    /// Any other filesystem failure.
    #[error("{context} '{}': {source}", .path.display())]
    Io {
        context: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SweepError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            SweepError::PermissionDenied { .. }
            | SweepError::PipNotFound { .. }
            | SweepError::NotFound { .. }
            | SweepError::Freeze { .. }
            | SweepError::Refused { .. }
            | SweepError::Config(_)
            | SweepError::Io { .. } => exit_codes::FAILURE,
        }
    }

    /// Map an I/O error on `path` into the matching variant.
    ///
    /// Permission and not-found failures get their own variants; everything
    /// else is wrapped with `context`.
    pub fn from_io(context: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => SweepError::PermissionDenied { path },
            std::io::ErrorKind::NotFound => SweepError::NotFound { path },
            _ => SweepError::Io {
                context,
                path,
                source,
            },
        }
    }
}

/// Result type alias for envsweep operations.
pub type Result<T> = std::result::Result<T, SweepError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn every_variant_exits_with_failure() {
        let errors = [
            SweepError::PermissionDenied {
                path: PathBuf::from("/locked"),
            },
            SweepError::PipNotFound {
                venv: PathBuf::from(".venv"),
            },
            SweepError::NotFound {
                path: PathBuf::from("missing"),
            },
            SweepError::Freeze {
                venv: PathBuf::from(".venv"),
                message: "exit code 2".to_string(),
            },
            SweepError::Refused {
                path: PathBuf::from("src"),
                reason: "not a node_modules directory".to_string(),
            },
            SweepError::Config("bad yaml".to_string()),
        ];
        for err in errors {
            assert_eq!(err.exit_code(), exit_codes::FAILURE);
        }
    }

    #[test]
    fn permission_denied_message_is_fixed() {
        let err = SweepError::PermissionDenied {
            path: PathBuf::from("/some/where"),
        };
        assert_eq!(err.to_string(), PERMISSION_DENIED_MESSAGE);
    }

    #[test]
    fn pip_not_found_names_the_environment() {
        let err = SweepError::PipNotFound {
            venv: PathBuf::from("project/.venv"),
        };
        assert_eq!(
            err.to_string(),
            "pip executable not found in virtual environment: project/.venv"
        );
    }

    #[test]
    fn from_io_maps_kinds_to_variants() {
        let denied = SweepError::from_io(
            "failed to read",
            "a",
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(denied, SweepError::PermissionDenied { .. }));

        let missing = SweepError::from_io(
            "failed to read",
            "b",
            io::Error::from(io::ErrorKind::NotFound),
        );
        assert!(matches!(missing, SweepError::NotFound { .. }));

        let other = SweepError::from_io("failed to read", "c", io::Error::other("boom"));
        assert!(matches!(other, SweepError::Io { .. }));
        assert_eq!(other.to_string(), "failed to read 'c': boom");
    }
}
