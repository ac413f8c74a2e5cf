mod build;
mod cli;
mod config;
mod executor;
mod init;
mod progress;
mod report;
mod run;
mod types;

pub mod prelude {
    pub use crate::cli::DynoBenchCli;
    pub use crate::config::{
        load_config, BuildConfig, CorpusConfig, HarnessConfig, OutputConfig, RunConfig,
        SentinelOverride,
    };
    pub use crate::init::init;
    pub use crate::run::run;
    pub use crate::types::DynoResult;
}
