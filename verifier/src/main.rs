use anyhow::Context;
use clap::Parser;
use dyno_measurement_model::load_run_manifests;
use dyno_runner::prelude::{load_config, HarnessConfig};
use dyno_verifier::{files_equal, DEFAULT_BLOCK_SIZE};
use std::path::PathBuf;

pub(crate) mod filter;

#[derive(Parser)]
#[command(about, long_about = None)]
struct DynoVerifyCli {
    /// First result set to compare, named by algorithm
    algorithm_a: String,

    /// Second result set to compare, named by algorithm
    algorithm_b: String,

    /// Path to the harness configuration file
    #[clap(short, long, default_value = "dyno.toml")]
    config: PathBuf,

    /// Comparison block size in bytes
    #[clap(long, default_value_t = DEFAULT_BLOCK_SIZE)]
    block_size: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = DynoVerifyCli::parse();
    let config = load_config(&cli.config)?;

    warn_on_mismatched_sweeps(&config, &cli.algorithm_a, &cli.algorithm_b);

    println!(
        "===============  {}  VS  {}  ===============",
        cli.algorithm_a, cli.algorithm_b
    );

    for graph in &config.corpus.graphs {
        let path_a = output_path(&config, &cli.algorithm_a, graph);
        let path_b = output_path(&config, &cli.algorithm_b, graph);

        // An unreadable output is a hard failure; inequality is a normal reportable outcome.
        let equal = files_equal(&path_a, &path_b, cli.block_size)
            .with_context(|| format!("Failed to compare outputs for graph {graph}"))?;

        println!("{equal}  {graph}");
    }

    Ok(())
}

fn output_path(config: &HarnessConfig, algorithm: &str, graph: &str) -> PathBuf {
    config
        .output
        .results_dir
        .join(algorithm)
        .join("output")
        .join(format!("{graph}.txt"))
}

/// Warn when the latest sweeps of the two algorithms were not run with a comparable
/// configuration. Absent manifests are fine; older result layouts have none.
fn warn_on_mismatched_sweeps(config: &HarnessConfig, algorithm_a: &str, algorithm_b: &str) {
    let manifest_path = config.output.results_dir.join("run_manifest.jsonl");
    if !manifest_path.exists() {
        return;
    }

    let manifests = match load_run_manifests(manifest_path) {
        Ok(manifests) => manifests,
        Err(e) => {
            log::warn!("Could not read run manifests: {e:#}");
            return;
        }
    };

    let latest = filter::latest_run_manifests_by_algorithm(manifests);
    let find = |algorithm: &str| {
        latest
            .iter()
            .find(|(name, _)| name == algorithm)
            .map(|(_, manifest)| manifest)
    };

    if let (Some(manifest_a), Some(manifest_b)) = (find(algorithm_a), find(algorithm_b)) {
        if manifest_a.sweep_fingerprint() != manifest_b.sweep_fingerprint() {
            log::warn!(
                "The latest sweeps of {algorithm_a} and {algorithm_b} used different configurations; their outputs may not be comparable"
            );
        }
    }
}
