//! Platform policy for the installer
//!
//! The Windows/non-Windows branch is taken exactly once, at orchestration
//! start, by building a [`PlatformPolicy`]. Everything downstream consumes
//! the policy's candidate lists and flags and never asks the OS again.

use std::path::PathBuf;

/// Name of the installed executable
pub const BINARY_NAME: &str = "nps";

/// Name of the service unit file written into a systemd directory
pub const UNIT_FILE_NAME: &str = "nps.service";

/// Ordered system binary directories tried for executable placement
const UNIX_BIN_DIRS: &[&str] = &["/usr/bin", "/usr/local/bin"];

/// Ordered systemd unit directories tried for the service definition
const UNIX_UNIT_DIRS: &[&str] = &["/usr/lib/systemd/system", "/lib/systemd/system"];

/// Log directory referenced by the unit's StandardOutput line
const UNIX_LOG_DIR: &str = "/var/log/nps";

/// Resolved per-platform installation policy
#[derive(Debug, Clone)]
pub struct PlatformPolicy {
    /// Whether binary placement and service-manager integration run at all
    service_integration: bool,
    /// Binary destination candidates, in priority order
    binary_candidates: Vec<PathBuf>,
    /// Service unit directory candidates, in priority order
    unit_dir_candidates: Vec<PathBuf>,
    /// Log directory created best-effort at the end of the run
    log_dir: Option<PathBuf>,
}

impl PlatformPolicy {
    /// Build the policy for the host platform
    ///
    /// The candidate lists can be overridden with `NPS_BIN_DIRS`,
    /// `NPS_UNIT_DIRS` and `NPS_LOG_DIR` (colon-separated lists for the
    /// former two), which is how the integration tests redirect the
    /// installer away from real system paths.
    pub fn host() -> Self {
        if cfg!(windows) {
            return Self::windows();
        }
        Self::unix()
    }

    /// Policy for Unix-like hosts: full service-manager integration
    pub fn unix() -> Self {
        Self {
            service_integration: true,
            binary_candidates: env_dir_list("NPS_BIN_DIRS", UNIX_BIN_DIRS)
                .into_iter()
                .map(|d| d.join(BINARY_NAME))
                .collect(),
            unit_dir_candidates: env_dir_list("NPS_UNIT_DIRS", UNIX_UNIT_DIRS),
            log_dir: Some(
                std::env::var("NPS_LOG_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from(UNIX_LOG_DIR)),
            ),
        }
    }

    /// Policy for Windows hosts: assets only, no binary/service placement
    pub fn windows() -> Self {
        Self {
            service_integration: false,
            binary_candidates: Vec::new(),
            unit_dir_candidates: Vec::new(),
            log_dir: None,
        }
    }

    /// Fully explicit policy, used by tests to point at temp directories
    pub fn custom(
        service_integration: bool,
        binary_candidates: Vec<PathBuf>,
        unit_dir_candidates: Vec<PathBuf>,
        log_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            service_integration,
            binary_candidates,
            unit_dir_candidates,
            log_dir,
        }
    }

    pub fn service_integration(&self) -> bool {
        self.service_integration
    }

    pub fn binary_candidates(&self) -> &[PathBuf] {
        &self.binary_candidates
    }

    pub fn unit_dir_candidates(&self) -> &[PathBuf] {
        &self.unit_dir_candidates
    }

    pub fn log_dir(&self) -> Option<&PathBuf> {
        self.log_dir.as_ref()
    }
}

/// Read a colon-separated directory list from the environment, falling back
/// to the built-in defaults
fn env_dir_list(var: &str, defaults: &[&str]) -> Vec<PathBuf> {
    match std::env::var(var) {
        Ok(value) => value
            .split(':')
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .collect(),
        Err(_) => defaults.iter().map(PathBuf::from).collect(),
    }
}
