//! Installation orchestration
//!
//! One strictly linear pass: guard, scaffold, asset copies, then (where the
//! platform supports it) binary placement, service-unit installation and
//! log-directory creation. Every setup step before service integration is
//! fatal on error; the run never rolls back.

use std::path::PathBuf;

use crate::binary;
use crate::copier::{self, CopyStats};
use crate::error::Result;
use crate::layout::{self, INSTALL_SUBDIRS};
use crate::platform::{BINARY_NAME, PlatformPolicy};
use crate::report::InstallReport;
use crate::scaffold;
use crate::service::{self, UnitOutcome};

/// The asset subtrees replicated from the application directory
const COPY_TASKS: &[&str] = &["web/views", "web/static", "conf"];

/// Everything one orchestration run needs up front
#[derive(Debug, Clone)]
pub struct InstallContext {
    /// Directory holding the built executable and its assets
    pub app_root: PathBuf,
    /// Destination root that must not yet exist
    pub install_root: PathBuf,
    /// Platform branch, taken once
    pub policy: PlatformPolicy,
}

impl InstallContext {
    /// Resolve a context from the host environment
    pub fn from_host() -> Result<Self> {
        Ok(Self {
            app_root: layout::app_root()?,
            install_root: layout::install_root(),
            policy: PlatformPolicy::host(),
        })
    }
}

/// Run the whole installation
///
/// Returns the aggregated report on success. Any error means the run was
/// aborted; depending on how far it got, the install root may have been
/// left partially populated for the operator to remove.
pub fn run(ctx: &InstallContext) -> Result<InstallReport> {
    // Fresh-install-only guard: never merge into an existing root.
    if layout::path_exists(&ctx.install_root) {
        return Err(crate::error::InstallError::AlreadyInstalled {
            path: ctx.install_root.display().to_string(),
        });
    }

    scaffold::ensure_subdirs(&ctx.install_root, INSTALL_SUBDIRS)?;

    let mut assets: Vec<(String, CopyStats)> = Vec::with_capacity(COPY_TASKS.len());
    for task in COPY_TASKS {
        let stats = copier::copy_dir(&ctx.app_root.join(task), &ctx.install_root.join(task))?;
        assets.push(((*task).to_string(), stats));
    }

    let mut report = InstallReport::new(ctx.install_root.clone(), assets);

    if !ctx.policy.service_integration() {
        return Ok(report);
    }

    let placed = binary::place_binary(
        &ctx.app_root.join(BINARY_NAME),
        ctx.policy.binary_candidates(),
    )?;

    let unit = service::install_unit(&placed, ctx.policy.unit_dir_candidates());
    match &unit {
        UnitOutcome::Installed(_) | UnitOutcome::Skipped => {}
        UnitOutcome::NoServiceDir => {
            report.warn("Write systemd service failed: no systemd system path found");
        }
        UnitOutcome::WriteFailed { path, reason } => {
            report.warn(format!(
                "Write systemd service failed at {}: {reason}",
                path.display()
            ));
        }
    }

    if let Some(log_dir) = ctx.policy.log_dir() {
        if let Err(e) = std::fs::create_dir_all(log_dir) {
            report.warn(format!(
                "Failed to create log directory {}: {e}",
                log_dir.display()
            ));
        }
    }

    report.set_service_integration(placed, unit);
    Ok(report)
}
