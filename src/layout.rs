//! Path resolution for the installer
//!
//! Resolves the two roots every run revolves around: the application
//! directory the assets are copied *from* (next to the running executable)
//! and the installation root they are copied *to*. Both can be overridden
//! with environment variables, which is also the seam the integration tests
//! use.

use std::path::{Path, PathBuf};

use crate::error::{InstallError, Result};

/// Default install root on Unix-like systems
const UNIX_INSTALL_ROOT: &str = "/etc/nps";

/// Default install root on Windows
const WINDOWS_INSTALL_ROOT: &str = r"C:\Program Files\nps";

/// Subdirectories scaffolded under a fresh install root
pub const INSTALL_SUBDIRS: &[&str] = &["conf", "web/static", "web/views"];

/// Check whether a path exists at all
pub fn path_exists(path: &Path) -> bool {
    std::fs::metadata(path).is_ok()
}

/// Check whether a path exists and is a directory
pub fn is_dir(path: &Path) -> bool {
    std::fs::metadata(path).is_ok_and(|m| m.is_dir())
}

/// Get the installation root path
///
/// Platform default (`/etc/nps` on Unix, `C:\Program Files\nps` on Windows),
/// overridable with the `NPS_INSTALL_ROOT` environment variable.
pub fn install_root() -> PathBuf {
    if let Ok(root) = std::env::var("NPS_INSTALL_ROOT") {
        return PathBuf::from(root);
    }

    if cfg!(windows) {
        PathBuf::from(WINDOWS_INSTALL_ROOT)
    } else {
        PathBuf::from(UNIX_INSTALL_ROOT)
    }
}

/// Get the application directory holding the built executable and its assets
///
/// Defaults to the directory of the running executable, overridable with the
/// `NPS_APP_ROOT` environment variable.
pub fn app_root() -> Result<PathBuf> {
    if let Ok(root) = std::env::var("NPS_APP_ROOT") {
        return Ok(PathBuf::from(root));
    }

    let exe = std::env::current_exe().map_err(|e| InstallError::AppRootUnavailable {
        reason: e.to_string(),
    })?;

    let dir = exe
        .parent()
        .ok_or_else(|| InstallError::AppRootUnavailable {
            reason: format!("executable path {} has no parent directory", exe.display()),
        })?;

    Ok(dunce::canonicalize(dir).unwrap_or_else(|_| dir.to_path_buf()))
}
