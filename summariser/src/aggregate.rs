use dyno_measurement_model::{AggregatedRow, MeasurementRecord};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AggregateError {
    #[error("cannot aggregate an empty sample set for graph `{graph}`")]
    EmptySampleSet { graph: String },
}

/// Reduce repeated measurements of one graph to a single representative row.
///
/// Every record is flattened to its positional vector and right-padded with zeros to the
/// length of the longest record before the elementwise arithmetic mean is taken. A shorter
/// record means that run produced no measurement for the trailing positions, and the zero
/// padding pulls the mean for those positions down; rows with different completion counts are
/// therefore not directly comparable at their tails.
///
/// Aggregating a single record returns it unchanged. An empty sample set is an error, never a
/// zero row.
pub fn aggregate(
    graph: &str,
    samples: &[MeasurementRecord],
) -> Result<AggregatedRow, AggregateError> {
    if samples.is_empty() {
        return Err(AggregateError::EmptySampleSet {
            graph: graph.to_string(),
        });
    }

    let rows: Vec<Vec<f64>> = samples.iter().map(MeasurementRecord::values).collect();

    // Safe to unwrap because there must have been at least one row
    let width = rows.iter().map(|row| row.len()).max().unwrap();

    // Positions a row is missing contribute zero to the sum, which is the padding policy.
    let mut sums = vec![0.0; width];
    for row in &rows {
        for (position, value) in row.iter().enumerate() {
            sums[position] += value;
        }
    }

    let count = rows.len() as f64;
    let values = sums.into_iter().map(|sum| sum / count).collect();

    Ok(AggregatedRow {
        graph: graph.to_string(),
        values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(values: &[f64]) -> MeasurementRecord {
        let mut record = MeasurementRecord::new(values[0]);
        record.round_times = values[1..].to_vec();
        record
    }

    #[test]
    fn shorter_records_are_right_padded_with_zeros() {
        let samples = vec![record(&[1.0, 2.0]), record(&[3.0])];

        let row = aggregate("HepPh_sym", &samples).unwrap();
        assert_eq!(row.graph, "HepPh_sym");
        assert_eq!(row.values, vec![2.0, 1.0]);
    }

    #[test]
    fn single_sample_aggregates_to_itself() {
        let samples = vec![record(&[1.5, 0.2, 0.3])];

        let row = aggregate("flickr_sym", &samples).unwrap();
        assert_eq!(row.values, vec![1.5, 0.2, 0.3]);
    }

    #[test]
    fn mean_is_elementwise_over_equal_length_records() {
        let samples = vec![record(&[1.0, 10.0, 100.0]), record(&[3.0, 30.0, 300.0])];

        let row = aggregate("grid", &samples).unwrap();
        assert_eq!(row.values, vec![2.0, 20.0, 200.0]);
    }

    #[test]
    fn empty_sample_set_is_an_error_not_a_zero_row() {
        let result = aggregate("HepPh_sym", &[]);

        assert!(matches!(
            result,
            Err(AggregateError::EmptySampleSet { graph }) if graph == "HepPh_sym"
        ));
    }

    #[test]
    fn more_than_two_samples_are_supported() {
        let samples = vec![
            record(&[1.0]),
            record(&[2.0, 6.0]),
            record(&[3.0, 0.0, 9.0]),
        ];

        let row = aggregate("grid", &samples).unwrap();
        assert_eq!(row.values, vec![2.0, 2.0, 3.0]);
    }
}
