//! Recursive directory-tree replication
//!
//! Copies every file under a source directory to the matching relative path
//! under a destination directory. Destination subdirectories are created
//! lazily, when the first file beneath them is copied; directories
//! themselves produce no direct action, so empty source subtrees are simply
//! not reproduced.

use std::path::Path;

use walkdir::WalkDir;

use crate::error::{InstallError, Result};
use crate::layout;

/// What a completed copy task touched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyStats {
    /// Number of files copied
    pub files: u64,
    /// Total bytes written to the destination
    pub bytes: u64,
}

/// Copy every file under `src` to the same relative path under `dest`
///
/// Both `src` and `dest` must already exist and be directories. A
/// destination file that already exists is truncated and overwritten.
/// Fails fast on the first file that cannot be read or written.
pub fn copy_dir(src: &Path, dest: &Path) -> Result<CopyStats> {
    if !layout::is_dir(src) {
        return Err(InstallError::SourceNotADirectory {
            path: src.display().to_string(),
        });
    }
    if !layout::is_dir(dest) {
        return Err(InstallError::DestinationNotADirectory {
            path: dest.display().to_string(),
        });
    }

    let mut stats = CopyStats::default();

    for entry in WalkDir::new(src) {
        let entry = entry.map_err(|e| InstallError::FileCopyFailed {
            from: src.display().to_string(),
            to: dest.display().to_string(),
            reason: e.to_string(),
        })?;

        if entry.file_type().is_dir() {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| InstallError::FileCopyFailed {
                from: entry.path().display().to_string(),
                to: dest.display().to_string(),
                reason: e.to_string(),
            })?;

        stats.bytes += copy_file(entry.path(), &dest.join(relative))?;
        stats.files += 1;
    }

    Ok(stats)
}

/// Copy a single file, creating missing destination parent directories
///
/// Returns the number of bytes written. `std::fs::copy` truncates an
/// existing destination file before writing.
pub fn copy_file(src: &Path, dest: &Path) -> Result<u64> {
    if let Some(parent) = dest.parent() {
        std::fs::create_dir_all(parent).map_err(|e| InstallError::create_dir_failed(parent, &e))?;
    }

    std::fs::copy(src, dest).map_err(|e| InstallError::file_copy_failed(src, dest, &e))
}
