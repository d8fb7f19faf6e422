//! commit-train - unpushed commits leave the station
//!
//! Binary entry point.

use clap::Parser;

use commit_train::app;
use commit_train::config::Cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let config = Cli::parse().into_config();
    match app::run(&config) {
        Ok(()) => Ok(()),
        Err(e) if e.is_user_facing() => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
