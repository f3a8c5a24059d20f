use clap::Parser;

use nps_install::cli::Cli;
use nps_install::install::{self, InstallContext};

fn main() {
    let cli = Cli::parse();

    let result = InstallContext::from_host().and_then(|ctx| install::run(&ctx));

    match result {
        Ok(report) => report.render(cli.verbose),
        Err(e) => {
            eprintln!("Error: {:?}", miette::Report::new(e));
            std::process::exit(1);
        }
    }
}
