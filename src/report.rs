//! Aggregated run report and operator-facing output
//!
//! Components stay silent and hand structured outcomes to the orchestrator;
//! everything the operator sees is rendered here, once, at the end of the
//! run.

use std::path::PathBuf;

use console::style;

use crate::copier::CopyStats;
use crate::service::UnitOutcome;

/// What a successful run did, plus any degraded-mode warnings
#[derive(Debug)]
pub struct InstallReport {
    install_root: PathBuf,
    assets: Vec<(String, CopyStats)>,
    installed_binary: Option<PathBuf>,
    unit: UnitOutcome,
    warnings: Vec<String>,
}

impl InstallReport {
    pub fn new(install_root: PathBuf, assets: Vec<(String, CopyStats)>) -> Self {
        Self {
            install_root,
            assets,
            installed_binary: None,
            unit: UnitOutcome::Skipped,
            warnings: Vec::new(),
        }
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn set_service_integration(&mut self, installed_binary: PathBuf, unit: UnitOutcome) {
        self.installed_binary = Some(installed_binary);
        self.unit = unit;
    }

    pub fn install_root(&self) -> &PathBuf {
        &self.install_root
    }

    pub fn installed_binary(&self) -> Option<&PathBuf> {
        self.installed_binary.as_ref()
    }

    pub fn unit(&self) -> &UnitOutcome {
        &self.unit
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Print the report and the platform-appropriate operator guidance
    ///
    /// Guidance is conditioned on the platform branch only, never on whether
    /// unit installation succeeded; manual invocation works either way.
    pub fn render(&self, verbose: bool) {
        if verbose {
            for (task, stats) in &self.assets {
                println!(
                    "  {} {} ({} files, {} bytes)",
                    style("copied").green(),
                    task,
                    stats.files,
                    stats.bytes
                );
            }
            if let UnitOutcome::Installed(path) = &self.unit {
                println!("  {} {}", style("unit").green(), path.display());
            }
        }

        if let Some(binary) = &self.installed_binary {
            println!("Executable file has been copied to {}", binary.display());
        }

        for warning in &self.warnings {
            println!("{} {warning}", style("warning:").yellow().bold());
        }

        println!("{}", style("install ok!").green().bold());
        println!("Static files and configuration files in the current directory will be useless");
        println!(
            "The new configuration file is located in {} , you can edit them",
            self.install_root.display()
        );

        if self.installed_binary.is_some() {
            println!(
                "You can start with:\n\
                 sudo systemctl enable|disable|start|stop|restart|status nps\n\
                 or:\n\
                 nps test|start|stop|restart|status\n\
                 anywhere!"
            );
        } else {
            println!(
                "You can copy executable files to any directory and start working with:\n\
                 nps.exe test|start|stop|restart|status\n\
                 now!"
            );
        }
    }
}
