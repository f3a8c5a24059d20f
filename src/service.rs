//! Systemd service unit generation and installation
//!
//! Unit installation is the one deliberately non-fatal step of the run: a
//! host without a systemd directory still gets a working binary and assets,
//! so failures here degrade to a warning instead of aborting.

use std::path::{Path, PathBuf};

use crate::layout;
use crate::platform::UNIT_FILE_NAME;

/// Outcome of the service-integration attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitOutcome {
    /// Unit file written at this path
    Installed(PathBuf),
    /// No candidate systemd directory exists on this host
    NoServiceDir,
    /// A directory was found but the unit file could not be written
    WriteFailed { path: PathBuf, reason: String },
    /// Platform has no service-manager integration
    Skipped,
}

/// Render the nps service unit with the given ExecStart path
pub fn render_unit(exec_start: &Path) -> String {
    let unit = "[Unit]\n\
        Description=nps - convenient proxy server\n\
        Documentation=https://github.com/ehang-io/nps/\n\
        After=network-online.target remote-fs.target nss-lookup.target\n\
        Wants=network-online.target";
    let service = format!(
        "[Service]\n\
        Type=simple\n\
        KillMode=process\n\
        Restart=always\n\
        RestartSec=15s\n\
        StandardOutput=append:/var/log/nps/nps.log\n\
        ExecStartPre=/bin/echo 'Starting nps'\n\
        ExecStopPost=/bin/echo 'Stopping nps'\n\
        ExecStart={}",
        exec_start.display()
    );
    let install = "[Install]\nWantedBy=multi-user.target";

    format!("{unit}\n\n{service}\n\n{install}\n")
}

/// Write the unit file into the first existing candidate directory
///
/// A pre-existing unit at the chosen location is removed first; a failed
/// removal is tolerated since the subsequent write fails on its own if the
/// removal actually mattered.
pub fn install_unit(installed_binary: &Path, candidate_dirs: &[PathBuf]) -> UnitOutcome {
    let Some(dir) = candidate_dirs.iter().find(|d| layout::path_exists(d)) else {
        return UnitOutcome::NoServiceDir;
    };

    let unit_path = dir.join(UNIT_FILE_NAME);
    let _ = std::fs::remove_file(&unit_path);

    match std::fs::write(&unit_path, render_unit(installed_binary)) {
        Ok(()) => UnitOutcome::Installed(unit_path),
        Err(e) => UnitOutcome::WriteFailed {
            path: unit_path,
            reason: e.to_string(),
        },
    }
}
