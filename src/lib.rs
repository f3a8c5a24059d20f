//! nps-install - one-shot installer for the nps proxy server
//!
//! Relocates runtime assets (web templates, static files, configuration)
//! from the build directory into a fixed installation root, places the
//! executable on the system binary search path and, on non-Windows hosts,
//! installs a systemd service unit pointing at the placed binary.

pub mod binary;
pub mod cli;
pub mod copier;
pub mod error;
pub mod install;
pub mod layout;
pub mod platform;
pub mod report;
pub mod scaffold;
pub mod service;

pub use error::{InstallError, Result};
pub use install::{InstallContext, run};
pub use report::InstallReport;
