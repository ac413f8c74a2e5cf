use itertools::Itertools;
use serde::{Deserialize, Serialize};
use sha3::Digest;
use std::io::{BufRead, Read, Write};
use std::path::PathBuf;

/// One measurement extracted from a single application segment.
///
/// The field order is fixed: the running time first, then the counter initialization times if
/// the binary reported any, then one entry per round in the order the rounds appeared in the
/// output. A segment that did not report a running time never becomes a record at all, so
/// `running_time` is always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRecord {
    /// Total running time reported by the binary, in seconds
    pub running_time: f64,
    /// Counter initialization times, in label order
    ///
    /// Binaries that report counter initialization emit one or two labelled values; binaries
    /// that don't emit none. The two values are reported together or not at all.
    pub counter_init_times: Vec<f64>,
    /// Per-round times, in the order they appeared in the output
    pub round_times: Vec<f64>,
}

impl MeasurementRecord {
    /// Create a record carrying only a running time
    pub fn new(running_time: f64) -> Self {
        Self {
            running_time,
            counter_init_times: Vec::new(),
            round_times: Vec::new(),
        }
    }

    /// Flatten to the positional vector consumed by the aggregator
    pub fn values(&self) -> Vec<f64> {
        let mut values = Vec::with_capacity(self.value_count());
        values.push(self.running_time);
        values.extend_from_slice(&self.counter_init_times);
        values.extend_from_slice(&self.round_times);
        values
    }

    /// Number of positional values, at least 1
    pub fn value_count(&self) -> usize {
        1 + self.counter_init_times.len() + self.round_times.len()
    }
}

/// The records collected from repeated executions of the same (algorithm, graph) pair
///
/// Records in a sample set may have different lengths when runs completed different numbers of
/// rounds.
pub type SampleSet = Vec<MeasurementRecord>;

/// The elementwise-mean reduction of a [SampleSet], padded to a common length
///
/// This is the unit handed to the CSV sink, one row per graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedRow {
    /// The graph that produced the samples
    pub graph: String,
    /// Mean value per position, length equal to the longest sample
    pub values: Vec<f64>,
}

/// Manifest of a sweep
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunManifest {
    /// The unique run id
    ///
    /// Chosen by the runner. Unique for each sweep.
    pub run_id: String,
    /// The algorithm variant that was benchmarked
    pub algorithm: String,
    /// The time the sweep started
    ///
    /// This is a Unix timestamp in seconds.
    pub started_at: i64,
    /// The number of repeated executions per graph that were aggregated
    pub repetitions: usize,
    /// The graph corpus the sweep covered, in row order
    pub graphs: Vec<String>,
    /// The version of dyno that produced this sweep
    pub dyno_version: String,
}

impl RunManifest {
    /// Create a new run manifest
    pub fn new(
        run_id: String,
        algorithm: String,
        started_at: i64,
        repetitions: usize,
        graphs: Vec<String>,
        dyno_version: String,
    ) -> Self {
        Self {
            run_id,
            algorithm,
            started_at,
            repetitions,
            graphs,
            dyno_version,
        }
    }

    /// Compute a fingerprint for this run manifest
    ///
    /// The fingerprint is intended to uniquely identify the configuration used for the sweep,
    /// so that two result sets can be checked for comparability. It uses the
    ///     - Algorithm name
    ///     - Repetition count
    ///     - Graph corpus, order-insensitively
    ///     - dyno version
    ///
    /// The fingerprint is computed using [sha3::Sha3_256].
    pub fn fingerprint(&self) -> String {
        let mut hasher = sha3::Sha3_256::new();
        Digest::update(&mut hasher, self.algorithm.as_bytes());
        Digest::update(&mut hasher, self.repetitions.to_le_bytes());
        self.graphs
            .iter()
            .sorted()
            .for_each(|graph| Digest::update(&mut hasher, graph.as_bytes()));
        Digest::update(&mut hasher, self.dyno_version.as_bytes());

        format!("{:x}", hasher.finalize())
    }

    /// Fingerprint over the comparable configuration only, ignoring which algorithm ran
    ///
    /// Two sweeps are comparable when they covered the same corpus the same number of times
    /// with the same harness version.
    pub fn sweep_fingerprint(&self) -> String {
        let mut hasher = sha3::Sha3_256::new();
        Digest::update(&mut hasher, self.repetitions.to_le_bytes());
        self.graphs
            .iter()
            .sorted()
            .for_each(|graph| Digest::update(&mut hasher, graph.as_bytes()));
        Digest::update(&mut hasher, self.dyno_version.as_bytes());

        format!("{:x}", hasher.finalize())
    }
}

/// Append the run manifest to a file
///
/// The manifest will be serialized to JSON and output as a single line followed by a newline.
/// The recommended file extension is `.jsonl`.
pub fn append_run_manifest(run_manifest: RunManifest, path: PathBuf) -> anyhow::Result<()> {
    let mut file = std::fs::OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)?;
    store_run_manifest(run_manifest, &mut file)?;
    let _ = file.write("\n".as_bytes())?;
    Ok(())
}

/// Serialize the run manifest to a writer
pub fn store_run_manifest<W: Write>(
    run_manifest: RunManifest,
    writer: &mut W,
) -> anyhow::Result<()> {
    serde_json::to_writer(writer, &run_manifest)?;
    Ok(())
}

/// Load a run manifest from a reader
pub fn load_run_manifest<R: Read>(reader: R) -> anyhow::Result<RunManifest> {
    let reader = std::io::BufReader::new(reader);
    let run_manifest: RunManifest = serde_json::from_reader(reader)?;
    Ok(run_manifest)
}

/// Load run manifests from a file
///
/// The file should contain one JSON object per line. This is the format produced by
/// [append_run_manifest].
pub fn load_run_manifests(path: PathBuf) -> anyhow::Result<Vec<RunManifest>> {
    let file = std::fs::File::open(path)?;
    let reader = std::io::BufReader::new(file);
    let mut manifests = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let manifest: RunManifest = serde_json::from_str(&line)?;
        manifests.push(manifest);
    }
    Ok(manifests)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_manifest(algorithm: &str, graphs: &[&str]) -> RunManifest {
        RunManifest::new(
            "test-run".to_string(),
            algorithm.to_string(),
            1700000000,
            2,
            graphs.iter().map(|g| g.to_string()).collect(),
            "0.1.0".to_string(),
        )
    }

    #[test]
    fn values_preserve_field_order() {
        let record = MeasurementRecord {
            running_time: 1.5,
            counter_init_times: vec![0.1, 0.2],
            round_times: vec![0.3, 0.4, 0.5],
        };

        assert_eq!(record.values(), vec![1.5, 0.1, 0.2, 0.3, 0.4, 0.5]);
        assert_eq!(record.value_count(), 6);
    }

    #[test]
    fn manifest_round_trips_through_a_writer() {
        let manifest = test_manifest("approximate", &["HepPh_sym", "flickr_sym"]);

        let mut buffer = Vec::new();
        store_run_manifest(manifest.clone(), &mut buffer).unwrap();
        let loaded = load_run_manifest(buffer.as_slice()).unwrap();

        assert_eq!(loaded, manifest);
    }

    #[test]
    fn manifest_round_trips_through_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run_manifest.jsonl");

        let first = test_manifest("deterministic", &["HepPh_sym"]);
        let second = test_manifest("tas", &["HepPh_sym", "flickr_sym"]);
        append_run_manifest(first.clone(), path.clone()).unwrap();
        append_run_manifest(second.clone(), path.clone()).unwrap();

        let loaded = load_run_manifests(path).unwrap();
        assert_eq!(loaded, vec![first, second]);
    }

    #[test]
    fn fingerprint_is_stable_and_corpus_order_insensitive() {
        let forward = test_manifest("deterministic", &["a", "b", "c"]);
        let backward = test_manifest("deterministic", &["c", "b", "a"]);

        assert_eq!(forward.fingerprint(), backward.fingerprint());
        assert_eq!(forward.sweep_fingerprint(), backward.sweep_fingerprint());
    }

    #[test]
    fn fingerprint_distinguishes_algorithms_but_sweep_fingerprint_does_not() {
        let a = test_manifest("deterministic", &["a", "b"]);
        let b = test_manifest("tas", &["a", "b"]);

        assert_ne!(a.fingerprint(), b.fingerprint());
        assert_eq!(a.sweep_fingerprint(), b.sweep_fingerprint());
    }

    #[test]
    fn fingerprint_changes_with_repetitions() {
        let mut a = test_manifest("deterministic", &["a", "b"]);
        let b = test_manifest("deterministic", &["a", "b"]);
        a.repetitions = 3;

        assert_ne!(a.fingerprint(), b.fingerprint());
    }
}
