use crate::cli::DynoBenchCli;
use clap::Parser;

/// Initialise the CLI and logging for the dyno runner.
pub fn init() -> DynoBenchCli {
    env_logger::init();

    DynoBenchCli::parse()
}
