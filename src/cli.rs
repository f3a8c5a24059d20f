//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};

/// nps-install - one-shot installer for the nps proxy server
///
/// Copies the runtime assets next to the executable into the install root,
/// places the nps binary on the system path and registers a systemd unit.
#[derive(Parser, Debug)]
#[command(
    name = "nps-install",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "One-shot installer for the nps proxy server",
    long_about = "Relocates the nps runtime assets (web/views, web/static, conf) from the \
                  build directory into the install root, copies the executable to a system \
                  binary directory and, on non-Windows hosts, installs a systemd service unit.",
    after_help = "\x1b[1m\x1b[32mEnvironment:\x1b[0m\n    \
                  NPS_INSTALL_ROOT  override the install root (default /etc/nps)\n    \
                  NPS_APP_ROOT      override the application/build directory\n    \
                  NPS_BIN_DIRS      colon-separated binary directory candidates\n    \
                  NPS_UNIT_DIRS     colon-separated systemd directory candidates\n    \
                  NPS_LOG_DIR       override the log directory\n\n\
                  \x1b[1m\x1b[32mDocumentation:\x1b[0m\n    \
                  https://github.com/ehang-io/nps"
)]
pub struct Cli {
    /// Show per-directory copy statistics
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
