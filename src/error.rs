//! Error types and handling for the installer
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for install operations
#[derive(Error, Diagnostic, Debug)]
pub enum InstallError {
    #[error("Install root already exists: {path}")]
    #[diagnostic(
        code(nps_install::already_installed),
        help(
            "Re-installation over an existing root is not supported. Remove the directory first if you really want a fresh install"
        )
    )]
    AlreadyInstalled { path: String },

    #[error("Copy source is missing or not a directory: {path}")]
    #[diagnostic(
        code(nps_install::source_not_a_directory),
        help("Run the installer from the nps build output, next to the web/ and conf/ directories")
    )]
    SourceNotADirectory { path: String },

    #[error("Copy destination is missing or not a directory: {path}")]
    #[diagnostic(code(nps_install::destination_not_a_directory))]
    DestinationNotADirectory { path: String },

    #[error("Failed to create directory {path}: {reason}")]
    #[diagnostic(
        code(nps_install::create_dir_failed),
        help("Check permissions and free disk space, then re-run from scratch")
    )]
    CreateDirFailed { path: String, reason: String },

    #[error("Failed to copy {from} to {to}: {reason}")]
    #[diagnostic(code(nps_install::file_copy_failed))]
    FileCopyFailed {
        from: String,
        to: String,
        reason: String,
    },

    #[error("Failed to set executable permissions on {path}: {reason}")]
    #[diagnostic(code(nps_install::set_permissions_failed))]
    SetPermissionsFailed { path: String, reason: String },

    #[error("Could not place the executable in any system binary directory")]
    #[diagnostic(
        code(nps_install::no_usable_binary_path),
        help("Run the installer with sufficient privileges to write to a system bin directory")
    )]
    NoUsableBinaryPath { attempts: Vec<String> },

    #[error("Could not locate the application directory: {reason}")]
    #[diagnostic(
        code(nps_install::app_root_unavailable),
        help("Set NPS_APP_ROOT to the directory holding the nps executable and its assets")
    )]
    AppRootUnavailable { reason: String },
}

/// Result type alias for install operations
pub type Result<T> = std::result::Result<T, InstallError>;

impl InstallError {
    pub(crate) fn create_dir_failed(path: &std::path::Path, e: &std::io::Error) -> Self {
        Self::CreateDirFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        }
    }

    pub(crate) fn file_copy_failed(
        from: &std::path::Path,
        to: &std::path::Path,
        e: &std::io::Error,
    ) -> Self {
        Self::FileCopyFailed {
            from: from.display().to_string(),
            to: to.display().to_string(),
            reason: e.to_string(),
        }
    }
}
