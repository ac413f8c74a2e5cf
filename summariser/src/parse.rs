use crate::grammar::{SegmentGrammar, SEGMENT_MARKER};
use dyno_measurement_model::MeasurementRecord;

/// Parse the complete captured stdout of one execution.
///
/// The capture is split at each `### Application:` marker and every block is parsed
/// independently. Blocks without the required running-time field produce no record; this is
/// how build noise, banners and other preamble text are tolerated rather than reported as
/// errors. An empty capture parses to an empty sequence.
pub fn parse_capture(capture: &str) -> Vec<MeasurementRecord> {
    let grammar = SegmentGrammar::standard();

    capture
        .split(SEGMENT_MARKER)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .filter_map(|segment| parse_segment(&grammar, segment))
        .collect()
}

/// Parse one segment into at most one record.
///
/// Fields are searched independently, so their order within the segment does not matter; the
/// record always lists values in the grammar's fixed field order. A value that matches the
/// float pattern but fails conversion drops the segment, not the capture.
fn parse_segment(grammar: &SegmentGrammar, segment: &str) -> Option<MeasurementRecord> {
    let running_times = grammar.running_time.extract(segment)?;
    let Some(running_time) = running_times.first().copied() else {
        // Not a data segment, e.g. an informational banner
        return None;
    };

    let mut counter_init_times = grammar.counter_init_time.extract(segment)?;
    counter_init_times.extend(grammar.counter_init_time2.extract(segment)?);

    let round_times = grammar.round_time.extract(segment)?;

    Some(MeasurementRecord {
        running_time,
        counter_init_times,
        round_times,
    })
}
