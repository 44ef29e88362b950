//! Atomic file writes.
//!
//! All atomic writes follow this pattern:
//! 1. Write content to a temporary file in the same directory
//! 2. Sync the file to disk (fsync)
//! 3. Rename the temporary file over the target
//!
//! `std::fs::rename` replaces an existing target on every supported platform
//! as long as source and destination share a filesystem, which holds because
//! the temporary file is a sibling of the target. On crash, a temporary file
//! named `.{filename}.tmp` may remain.

use crate::error::{Result, SweepError};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file.
///
/// The target is never left in a partial state: it either keeps its old
/// content or gets all of `content`.
///
/// # Returns
///
/// * `Ok(())` - On successful atomic write
/// * `Err(SweepError)` - On write or rename failure
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)
            .map_err(|e| SweepError::from_io("failed to create parent directory", parent, e))?;
    }

    let temp_path = generate_temp_path(path)?;
    write_and_sync(&temp_path, content)?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        SweepError::from_io("failed to atomically replace", path, e)
    })?;

    Ok(())
}

/// Atomically write a string to a file.
///
/// Convenience wrapper around `atomic_write` for string content.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// Generate a temporary file path in the same directory as the target.
fn generate_temp_path(target: &Path) -> Result<PathBuf> {
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| SweepError::Io {
            context: "invalid file path",
            path: target.to_path_buf(),
            source: std::io::Error::other("path has no UTF-8 file name"),
        })?;

    Ok(target.with_file_name(format!(".{}.tmp", filename)))
}

/// Write content to a file and sync to disk.
fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path)
        .map_err(|e| SweepError::from_io("failed to create temporary file", path, e))?;

    let written = file.write_all(content).and_then(|()| file.sync_all());
    if let Err(e) = written {
        let _ = fs::remove_file(path);
        return Err(SweepError::from_io("failed to write temporary file", path, e));
    }

    Ok(())
}
