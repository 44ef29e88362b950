//! Depth-first directory walk shared by every detector.

use crate::error::{Result, SweepError};
use globset::GlobSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::trace;
use walkdir::{DirEntry, WalkDir};

/// What to do with a directory the walk reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Visit {
    /// Not a candidate; keep walking into it.
    Descend,
    /// Candidate; record it and do not walk into it.
    Claim,
    /// Candidate; record it and keep walking into it.
    ClaimAndDescend,
}

/// Walk every directory below `root` and collect those `classify` claims.
///
/// The root itself is never classified. Directories matching `excludes`
/// (as root-relative paths) are skipped along with everything under them.
/// Symlinks are not followed. Entries are visited in file name order.
pub(super) fn collect_dirs<F>(root: &Path, excludes: &GlobSet, mut classify: F) -> Result<Vec<PathBuf>>
where
    F: FnMut(&DirEntry) -> Visit,
{
    let meta = fs::metadata(root).map_err(|e| SweepError::from_io("failed to read", root, e))?;
    if !meta.is_dir() {
        return Err(SweepError::Io {
            context: "not a directory",
            path: root.to_path_buf(),
            source: io::Error::other("scan root must be a directory"),
        });
    }

    let mut found = Vec::new();
    let mut walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();

    while let Some(entry) = walker.next() {
        let entry = entry.map_err(walk_error)?;
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            continue;
        }

        if is_excluded(root, entry.path(), excludes) {
            trace!(path = %entry.path().display(), "excluded");
            walker.skip_current_dir();
            continue;
        }

        match classify(&entry) {
            Visit::Descend => {}
            Visit::Claim => {
                found.push(entry.into_path());
                walker.skip_current_dir();
            }
            Visit::ClaimAndDescend => found.push(entry.into_path()),
        }
    }

    Ok(found)
}

fn is_excluded(root: &Path, path: &Path, excludes: &GlobSet) -> bool {
    if excludes.is_empty() {
        return false;
    }
    let relative = path.strip_prefix(root).unwrap_or(path);
    excludes.is_match(relative)
}

fn walk_error(err: walkdir::Error) -> SweepError {
    let path = err.path().map(Path::to_path_buf).unwrap_or_default();
    let message = err.to_string();
    match err.into_io_error() {
        Some(source) => SweepError::from_io("failed to read directory", path, source),
        None => SweepError::Io {
            context: "failed to walk",
            path,
            source: io::Error::other(message),
        },
    }
}
