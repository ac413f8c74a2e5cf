use anyhow::Context;
use indicatif::ProgressBar;

use crate::build::build_algorithm;
use crate::cli::DynoBenchCli;
use crate::config::{load_config, HarnessConfig};
use crate::executor::execute_capture;
use crate::progress::sweep_progress;
use crate::report::{print_sweep_summary, CsvSink, SweepRow};
use crate::types::DynoResult;
use dyno_core::prelude::GraphBailError;
use dyno_measurement_model::{append_run_manifest, AggregatedRow, RunManifest, SampleSet};
use dyno_summariser::{aggregate, parse_capture};

/// Run one benchmark sweep: build the algorithm binary, execute it over the configured corpus
/// and write one aggregated row per graph.
pub fn run(cli: DynoBenchCli) -> DynoResult<()> {
    let config = load_config(&cli.config)?;
    let algorithm = cli.algorithm.clone();
    let repetitions = cli.repetitions.unwrap_or(config.run.repetitions);

    log::info!("Benchmarking algorithm: {algorithm}");

    if !cli.skip_build {
        build_algorithm(&config.build, &algorithm)?;
    }

    let run_id = nanoid::nanoid!();
    let started_at = chrono::Utc::now().timestamp();

    let csv_path = config
        .output
        .results_dir
        .join(&algorithm)
        .join("benchmark.csv");
    let mut sink = CsvSink::create(&csv_path, config.output.round_columns)?;

    let binary = config.run.binary(&algorithm);
    let pb = if cli.no_progress {
        ProgressBar::hidden()
    } else {
        sweep_progress(config.corpus.graphs.len() as u64)
    };

    let mut summary_rows = Vec::new();
    let mut failed_graphs = Vec::new();

    for graph in &config.corpus.graphs {
        pb.set_message(graph.clone());

        match run_graph(&config, &algorithm, &binary, repetitions, graph) {
            Ok((row, sample_count)) => {
                summary_rows.push(SweepRow::new(&row, sample_count));
                sink.write_row(&row)?;
            }
            Err(e) if e.is::<GraphBailError>() && cli.keep_going => {
                log::warn!("Skipping graph {graph}: {e}");
                failed_graphs.push(graph.clone());
            }
            Err(e) => {
                pb.finish_and_clear();
                return Err(e).context(format!("Benchmark failed for graph {graph}"));
            }
        }

        pb.inc(1);
    }

    pb.finish_and_clear();
    sink.finish()?;

    let manifest = RunManifest::new(
        run_id,
        algorithm,
        started_at,
        repetitions,
        config.corpus.graphs.clone(),
        env!("CARGO_PKG_VERSION").to_string(),
    );
    log::info!(
        "Run {} finished with fingerprint {}",
        manifest.run_id,
        manifest.fingerprint()
    );
    append_run_manifest(
        manifest,
        config.output.results_dir.join("run_manifest.jsonl"),
    )
    .context("Failed to record the run manifest")?;

    print_sweep_summary(&summary_rows);
    log::info!("Results file: {}", csv_path.display());

    if !failed_graphs.is_empty() {
        log::warn!(
            "{} out of {} graphs failed: {}",
            failed_graphs.len(),
            config.corpus.graphs.len(),
            failed_graphs.join(", ")
        );
    }

    Ok(())
}

/// Benchmark one graph: execute the binary `repetitions` times, parse each capture and reduce
/// the collected records to one row.
///
/// Expected per-graph failures are wrapped in [GraphBailError] so the sweep can carry on past
/// them when the operator asked for that.
fn run_graph(
    config: &HarnessConfig,
    algorithm: &str,
    binary: &str,
    repetitions: usize,
    graph: &str,
) -> DynoResult<(AggregatedRow, usize)> {
    if let Some(sentinel) = config.override_for(algorithm, graph) {
        log::warn!(
            "Substituting configured sentinel values for {graph}; this combination is listed as pathological"
        );
        let row = AggregatedRow {
            graph: graph.to_string(),
            values: sentinel.values.clone(),
        };
        return Ok((row, 0));
    }

    let graph_path = config.corpus.graph_path(graph);
    let mut samples = SampleSet::new();

    for repetition in 0..repetitions {
        let capture = execute_capture(&config.build.workdir, binary, &config.run.args, &graph_path)
            .map_err(|e| {
                GraphBailError::new(format!("Repetition {repetition} failed for {graph}: {e:#}"))
            })?;

        let mut records = parse_capture(&capture);
        if config.run.discard_first_record && !records.is_empty() {
            // The first block is the binary's warmup pass
            records.remove(0);
        }
        samples.extend(records);
    }

    let sample_count = samples.len();
    let row = aggregate(graph, &samples).map_err(|e| GraphBailError::new(e.to_string()))?;

    Ok((row, sample_count))
}
