//! The output grammar of the benchmark binaries.
//!
//! A capture is a sequence of segments, each introduced by [SEGMENT_MARKER]. Within a segment
//! the fields are labelled lines that may appear in any order; the extracted record always
//! lists them in the fixed order below:
//!
//! | field                     | label                               | arity     |
//! |---------------------------|-------------------------------------|-----------|
//! | running time              | `### Running Time:`                 | required  |
//! | counter init time         | `## Counter initialization time =`  | optional  |
//! | counter init time 2       | `## Counter initialization time2 =` | optional  |
//! | round time                | `## round = <n> time =`             | repeating |
//!
//! Every field value is the same floating-point literal grammar, defined once in [FLOAT].

use regex::Regex;

/// Marker preceding each application's output block within a capture.
pub(crate) const SEGMENT_MARKER: &str = "### Application:";

/// Floating-point literal: decimal or exponential notation, optionally signed.
const FLOAT: &str = r"[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?";

/// How often a field may appear within one segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Arity {
    Required,
    Optional,
    Repeating,
}

/// One labelled field extractor.
pub(crate) struct FieldRule {
    pub(crate) name: &'static str,
    pub(crate) arity: Arity,
    pattern: Regex,
}

impl FieldRule {
    fn new(name: &'static str, arity: Arity, label_pattern: &str) -> Self {
        let pattern = Regex::new(&format!(r"{label_pattern}\s*({FLOAT})"))
            .expect("Failed to compile field pattern");
        Self {
            name,
            arity,
            pattern,
        }
    }

    /// Extract this field's values from a segment.
    ///
    /// Returns `None` when a matched value fails numeric conversion, which drops the whole
    /// segment. An absent field yields `Some` of an empty vector; the caller enforces arity.
    pub(crate) fn extract(&self, segment: &str) -> Option<Vec<f64>> {
        let mut values = Vec::new();
        for captures in self.pattern.captures_iter(segment) {
            let text = &captures[1];
            match text.parse::<f64>() {
                Ok(value) => values.push(value),
                Err(_) => {
                    log::debug!(
                        "Dropping segment: field `{}` value `{}` is not a number",
                        self.name,
                        text
                    );
                    return None;
                }
            }
            if self.arity != Arity::Repeating {
                break;
            }
        }
        Some(values)
    }
}

/// The ordered field table for one segment.
pub(crate) struct SegmentGrammar {
    pub(crate) running_time: FieldRule,
    pub(crate) counter_init_time: FieldRule,
    pub(crate) counter_init_time2: FieldRule,
    pub(crate) round_time: FieldRule,
}

impl SegmentGrammar {
    pub(crate) fn standard() -> Self {
        Self {
            running_time: FieldRule::new("running_time", Arity::Required, r"### Running Time:"),
            counter_init_time: FieldRule::new(
                "counter_init_time",
                Arity::Optional,
                r"## Counter initialization time\s*=",
            ),
            counter_init_time2: FieldRule::new(
                "counter_init_time2",
                Arity::Optional,
                r"## Counter initialization time2\s*=",
            ),
            round_time: FieldRule::new(
                "round_time",
                Arity::Repeating,
                r"## round\s*=\s*[0-9]+\s*time\s*=",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_pattern_accepts_standard_notations() {
        let rule = FieldRule::new("test", Arity::Required, "value:");
        for text in [
            "value: 1.5",
            "value: -0.25",
            "value: +3",
            "value: 1e-3",
            "value: 2.5E+10",
            "value: .5",
        ] {
            let values = rule.extract(text).unwrap();
            assert_eq!(values.len(), 1, "no value extracted from `{text}`");
        }
    }

    #[test]
    fn counter_init_labels_do_not_shadow_each_other() {
        let grammar = SegmentGrammar::standard();
        let segment = "## Counter initialization time2 = 0.5";

        assert_eq!(
            grammar.counter_init_time.extract(segment),
            Some(Vec::new())
        );
        assert_eq!(
            grammar.counter_init_time2.extract(segment),
            Some(vec![0.5])
        );
    }

    #[test]
    fn repeating_rule_extracts_every_occurrence() {
        let grammar = SegmentGrammar::standard();
        let segment = "## round = 1 time = 0.1\n## round = 2 time = 0.2\n## round = 3 time = 0.3";

        assert_eq!(
            grammar.round_time.extract(segment),
            Some(vec![0.1, 0.2, 0.3])
        );
    }
}
