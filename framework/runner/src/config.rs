use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Harness configuration, loaded from a TOML file at startup.
///
/// The loaded value is passed down explicitly; nothing in the harness reads configuration
/// through process-wide state.
#[derive(Debug, Clone, Deserialize)]
pub struct HarnessConfig {
    pub corpus: CorpusConfig,
    pub build: BuildConfig,
    pub run: RunConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub overrides: Vec<SentinelOverride>,
}

impl HarnessConfig {
    /// The sentinel override for an (algorithm, graph) pair, if one is configured.
    pub fn override_for(&self, algorithm: &str, graph: &str) -> Option<&SentinelOverride> {
        self.overrides
            .iter()
            .find(|o| o.algorithm == algorithm && o.graph == graph)
    }
}

/// The fixed corpus of graph inputs, addressed by name.
#[derive(Debug, Clone, Deserialize)]
pub struct CorpusConfig {
    /// Directory the graph files live in
    pub graph_dir: PathBuf,
    /// Graph names without extension, in results-row order
    pub graphs: Vec<String>,
    /// File extension appended to each graph name
    #[serde(default = "default_graph_extension")]
    pub extension: String,
}

impl CorpusConfig {
    pub fn graph_path(&self, graph: &str) -> PathBuf {
        self.graph_dir
            .join(format!("{graph}{ext}", ext = self.extension))
    }
}

/// How to build an algorithm binary.
#[derive(Debug, Clone, Deserialize)]
pub struct BuildConfig {
    /// Build tool executable, e.g. `bazel`
    pub program: String,
    /// Arguments placed before the build target
    #[serde(default)]
    pub args: Vec<String>,
    /// Build target with `{algorithm}` substituted
    pub target_template: String,
    /// Directory the build tool and the built binaries are invoked from
    #[serde(default = "default_workdir")]
    pub workdir: PathBuf,
}

impl BuildConfig {
    pub fn target(&self, algorithm: &str) -> String {
        self.target_template.replace("{algorithm}", algorithm)
    }
}

/// How to execute a built algorithm binary.
#[derive(Debug, Clone, Deserialize)]
pub struct RunConfig {
    /// Path to the built binary with `{algorithm}` substituted, relative to the build workdir
    pub binary_template: String,
    /// Arguments placed before the graph path
    #[serde(default)]
    pub args: Vec<String>,
    /// Repeated executions per graph that are aggregated into one row
    #[serde(default = "default_repetitions")]
    pub repetitions: usize,
    /// Drop the first parsed record of every capture.
    ///
    /// The benchmark binaries emit a warmup block before the measured blocks.
    #[serde(default = "default_discard_first_record")]
    pub discard_first_record: bool,
}

impl RunConfig {
    pub fn binary(&self, algorithm: &str) -> String {
        self.binary_template.replace("{algorithm}", algorithm)
    }
}

/// Where and how results are written.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory the per-algorithm results and the run manifest are written to
    #[serde(default = "default_results_dir")]
    pub results_dir: PathBuf,
    /// Number of per-round columns in the results header
    #[serde(default = "default_round_columns")]
    pub round_columns: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            results_dir: default_results_dir(),
            round_columns: default_round_columns(),
        }
    }
}

/// A known-pathological (algorithm, graph) pair that must not be executed.
///
/// The fixed values are written to that graph's results row instead of running the binary.
/// Keeping these as an explicit list makes the exception visible and reproducible rather than
/// a silent skip.
#[derive(Debug, Clone, Deserialize)]
pub struct SentinelOverride {
    pub algorithm: String,
    pub graph: String,
    pub values: Vec<f64>,
}

/// Load the harness configuration from a TOML file.
pub fn load_config(path: &Path) -> anyhow::Result<HarnessConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config at {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("Failed to parse config at {}", path.display()))
}

fn default_graph_extension() -> String {
    ".bin".to_string()
}

fn default_workdir() -> PathBuf {
    PathBuf::from(".")
}

fn default_repetitions() -> usize {
    2
}

fn default_discard_first_record() -> bool {
    true
}

fn default_results_dir() -> PathBuf {
    PathBuf::from("results")
}

fn default_round_columns() -> usize {
    3
}
