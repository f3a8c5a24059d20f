//! Common test utilities for nps-install integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A sandboxed install scenario: seeded application directory plus fresh
/// destination directories, all inside one temp dir
#[allow(dead_code)]
pub struct TestInstall {
    /// Temporary directory
    pub temp: TempDir,
    /// Application/build directory the assets are copied from
    pub app_root: PathBuf,
    /// Install root handed to the installer (not created up front)
    pub install_root: PathBuf,
    /// Binary destination directory
    pub bin_dir: PathBuf,
    /// Systemd unit directory
    pub unit_dir: PathBuf,
    /// Log directory handed to the installer (not created up front)
    pub log_dir: PathBuf,
}

#[allow(dead_code)]
impl TestInstall {
    /// Create a scenario with the standard nps asset layout and a fake
    /// executable
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let app_root = temp.path().join("app");
        for dir in ["web/views", "web/static", "conf"] {
            std::fs::create_dir_all(app_root.join(dir)).expect("Failed to create asset dir");
        }
        std::fs::write(app_root.join("conf/app.conf"), "x=1").expect("Failed to write conf");
        std::fs::write(app_root.join("nps"), b"#!/bin/sh\nexit 0\n")
            .expect("Failed to write fake executable");

        let bin_dir = temp.path().join("bin");
        let unit_dir = temp.path().join("systemd");
        std::fs::create_dir_all(&bin_dir).expect("Failed to create bin dir");
        std::fs::create_dir_all(&unit_dir).expect("Failed to create unit dir");

        Self {
            install_root: temp.path().join("root"),
            log_dir: temp.path().join("log"),
            app_root,
            bin_dir,
            unit_dir,
            temp,
        }
    }

    /// Write a file under the application directory
    pub fn write_asset(&self, rel: &str, content: &str) {
        let path = self.app_root.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, content).expect("Failed to write file");
    }

    /// Read a file under the install root
    pub fn read_installed(&self, rel: &str) -> String {
        std::fs::read_to_string(self.install_root.join(rel)).expect("Failed to read file")
    }

    /// Build an installer command wired to this scenario via env overrides
    // Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
    #[allow(deprecated)]
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("nps-install").expect("Failed to find binary");
        cmd.env("NPS_APP_ROOT", &self.app_root)
            .env("NPS_INSTALL_ROOT", &self.install_root)
            .env("NPS_BIN_DIRS", &self.bin_dir)
            .env("NPS_UNIT_DIRS", &self.unit_dir)
            .env("NPS_LOG_DIR", &self.log_dir);
        cmd
    }
}
