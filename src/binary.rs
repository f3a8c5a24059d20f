//! Executable placement with ordered fallback
//!
//! The installed binary must land in exactly one of the candidate system
//! locations; the service unit's ExecStart line is later built from
//! whichever candidate actually accepted the copy, never from a hardcoded
//! favorite.

use std::path::{Path, PathBuf};

use crate::copier;
use crate::error::{InstallError, Result};

/// Copy `source` to the first candidate destination that accepts it
///
/// Candidates are tried strictly in order and the first successful copy
/// short-circuits the rest. The winner is marked world-executable
/// (rwxr-xr-x). If every candidate fails, the collected per-candidate
/// errors are returned in [`InstallError::NoUsableBinaryPath`].
pub fn place_binary(source: &Path, candidates: &[PathBuf]) -> Result<PathBuf> {
    let mut attempts = Vec::with_capacity(candidates.len());

    for dest in candidates {
        match copier::copy_file(source, dest) {
            Ok(_) => {
                set_executable(dest)?;
                return Ok(dest.clone());
            }
            Err(e) => attempts.push(format!("{}: {e}", dest.display())),
        }
    }

    Err(InstallError::NoUsableBinaryPath { attempts })
}

/// Mark a file executable by owner, group and others (no-op on Windows)
fn set_executable(path: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).map_err(|e| {
            InstallError::SetPermissionsFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            }
        })?;
    }
    #[cfg(not(unix))]
    let _ = path;
    Ok(())
}
