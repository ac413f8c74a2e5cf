use anyhow::Context;
use dyno_measurement_model::AggregatedRow;
use std::path::Path;
use tabled::{Table, Tabled};

/// Writes the results file for one sweep.
///
/// The header carries a fixed set of columns but rows keep however many values the aggregation
/// produced, so the writer is flexible about record width. Shorter vectors were already
/// zero-padded against their own sample set by the aggregator.
pub struct CsvSink {
    writer: csv::Writer<std::fs::File>,
}

impl CsvSink {
    /// Create the results file and write the header.
    pub fn create(path: &Path, round_columns: usize) -> anyhow::Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create results dir {}", parent.display()))?;
        }

        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_path(path)
            .with_context(|| format!("Failed to create results file {}", path.display()))?;

        let mut header = vec![
            "graph name".to_string(),
            "Running Time".to_string(),
            "Counter Initialization Time".to_string(),
        ];
        header.extend((1..=round_columns).map(|round| round.to_string()));
        writer.write_record(&header)?;

        Ok(Self { writer })
    }

    /// Append one aggregated row.
    pub fn write_row(&mut self, row: &AggregatedRow) -> anyhow::Result<()> {
        let mut record = vec![row.graph.clone()];
        record.extend(row.values.iter().map(|value| value.to_string()));
        self.writer.write_record(&record)?;
        Ok(())
    }

    pub fn finish(mut self) -> anyhow::Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[derive(Tabled)]
pub struct SweepRow {
    pub graph: String,
    #[tabled(display = "float4")]
    pub running_time: f64,
    pub values: usize,
    pub samples: usize,
}

impl SweepRow {
    pub fn new(row: &AggregatedRow, samples: usize) -> Self {
        Self {
            graph: row.graph.clone(),
            // The running time is always first; only a sentinel row can be empty
            running_time: row.values.first().copied().unwrap_or(0.0),
            values: row.values.len(),
            samples,
        }
    }
}

fn float4(n: &f64) -> String {
    format!("{:.4}", n)
}

/// Print the console summary table for a finished sweep.
pub fn print_sweep_summary(rows: &[SweepRow]) {
    if rows.is_empty() {
        return;
    }
    println!("{}", Table::new(rows));
}
