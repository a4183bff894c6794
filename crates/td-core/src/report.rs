//! Run summaries, human-readable and machine-readable.

use serde::Serialize;

use crate::ranges::{LineRange, compress, render};
use crate::sink::{Emphasis, TraceSink};

/// How a comparison run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    /// Every line pair was examined.
    Complete,
    /// The scan stopped early after the mistake limit was exceeded.
    LimitReached,
    /// The logs had different line counts; nothing was scanned.
    LengthMismatch,
}

/// Summary of one comparison run.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub outcome: Outcome,
    /// Line count of the first log.
    pub first_lines: usize,
    /// Line count of the second log.
    pub second_lines: usize,
    /// Divergent line indices in discovery order.
    pub mistakes: Vec<usize>,
    /// Compressed mistake ranges, ascending.
    pub ranges: Vec<LineRange>,
}

impl ComparisonReport {
    /// Report for a completed or limit-truncated scan.
    pub fn scanned(lines: usize, mistakes: Vec<usize>, truncated: bool) -> Self {
        let ranges = compress(&mistakes);
        Self {
            outcome: if truncated {
                Outcome::LimitReached
            } else {
                Outcome::Complete
            },
            first_lines: lines,
            second_lines: lines,
            mistakes,
            ranges,
        }
    }

    /// Report for logs that could not be compared line by line.
    pub fn length_mismatch(first_lines: usize, second_lines: usize) -> Self {
        Self {
            outcome: Outcome::LengthMismatch,
            first_lines,
            second_lines,
            mistakes: Vec::new(),
            ranges: Vec::new(),
        }
    }

    /// Index of the first divergent line, if any.
    pub fn first_mistake(&self) -> Option<usize> {
        self.mistakes.first().copied()
    }

    /// True when the two logs agreed on every tracked field.
    pub fn passed(&self) -> bool {
        self.outcome != Outcome::LengthMismatch && self.mistakes.is_empty()
    }

    /// Emit the final summary line. The length-mismatch notice is emitted
    /// by the driver together with the full dumps, so there is nothing to
    /// add here in that case.
    pub fn emit_summary(&self, sink: &mut dyn TraceSink) {
        match self.outcome {
            Outcome::LengthMismatch => {}
            _ if self.mistakes.is_empty() => {
                sink.emit("no mistakes found! celebrate!", Emphasis::Contrast);
            }
            _ => {
                sink.emit(
                    &format!("mistake lines: {}", render(&self.ranges)),
                    Emphasis::Alert,
                );
            }
        }
    }

    /// Pretty JSON rendering for machine consumption.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::PlainSink;

    fn summary_of(report: &ComparisonReport) -> String {
        let mut sink = PlainSink::new(Vec::new());
        report.emit_summary(&mut sink);
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn test_clean_run_passes() {
        let report = ComparisonReport::scanned(10, vec![], false);
        assert!(report.passed());
        assert_eq!(report.outcome, Outcome::Complete);
        assert_eq!(report.first_mistake(), None);
        assert!(summary_of(&report).contains("no mistakes found"));
    }

    #[test]
    fn test_mistakes_render_as_ranges() {
        let report = ComparisonReport::scanned(20, vec![3, 10, 11, 12, 13, 14, 22], false);
        assert!(!report.passed());
        assert_eq!(report.first_mistake(), Some(3));
        assert_eq!(summary_of(&report), "mistake lines: 3, 10..14, 22\n");
    }

    #[test]
    fn test_length_mismatch_fails_silently_in_summary() {
        let report = ComparisonReport::length_mismatch(5, 7);
        assert!(!report.passed());
        assert_eq!(report.first_lines, 5);
        assert_eq!(report.second_lines, 7);
        assert!(summary_of(&report).is_empty());
    }

    #[test]
    fn test_json_export_carries_outcome_and_ranges() {
        let report = ComparisonReport::scanned(8, vec![2, 5], false);
        let json = report.to_json();
        assert!(json.contains("\"outcome\""));
        assert!(json.contains("\"Complete\""));
        assert!(json.contains("\"mistakes\""));
        assert!(json.contains("\"ranges\""));
    }
}
