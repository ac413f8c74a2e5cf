use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(about, long_about = None)]
pub struct DynoBenchCli {
    /// The algorithm variant to benchmark
    ///
    /// This names a build target and result directory; the configured templates decide what is
    /// built and executed for it.
    pub algorithm: String,

    /// Path to the harness configuration file
    #[clap(short, long, default_value = "dyno.toml")]
    pub config: PathBuf,

    /// The number of repeated runs per graph, overriding the configured value
    #[clap(long)]
    pub repetitions: Option<usize>,

    /// Do not build the algorithm binary before the sweep
    #[clap(long, default_value = "false")]
    pub skip_build: bool,

    /// Carry on with the remaining graphs when one graph's run fails.
    ///
    /// Without this flag the sweep aborts on the first per-graph failure. Failed graphs get no
    /// row in the results file either way.
    #[clap(long, default_value = "false")]
    pub keep_going: bool,

    /// Do not show a progress bar on the CLI.
    ///
    /// This is recommended for CI/CD environments where the progress bar isn't being looked at by anyone and is just adding noise to the logs.
    #[clap(long, default_value = "false")]
    pub no_progress: bool,
}
