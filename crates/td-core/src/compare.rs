//! Comparison driver: loads two trace logs and walks them line by line.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::diff::{diff_lines, render_diffs};
use crate::report::ComparisonReport;
use crate::sink::{Emphasis, TraceSink};

/// How many earlier line pairs to show before each divergence.
const CONTEXT_LINES: usize = 3;

/// Errors raised while loading a trace log.
#[derive(Error, Debug)]
pub enum LogError {
    #[error("could not read log '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Settings for one comparison run.
#[derive(Debug, Clone)]
pub struct CompareConfig {
    /// Field keys excluded from every diff.
    pub ignored_keys: BTreeSet<String>,
    /// Stop scanning once more than this many mistakes are recorded.
    pub mistake_limit: usize,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            ignored_keys: BTreeSet::new(),
            mistake_limit: 64,
        }
    }
}

/// Read a whole trace log into lines.
pub fn read_log(path: &Path) -> Result<Vec<String>, LogError> {
    let text = fs::read_to_string(path).map_err(|source| LogError::Read {
        path: path.display().to_string(),
        source,
    })?;
    Ok(text.lines().map(str::to_string).collect())
}

/// Compare two trace logs and report divergences through `sink`.
///
/// Logs of unequal length are dumped and not scanned. Byte-identical line
/// pairs are skipped without parsing; a pair whose filtered field diff is
/// non-empty is recorded as a mistake and printed with up to
/// [`CONTEXT_LINES`] preceding pairs for context. Scanning stops early once
/// the mistake count exceeds `config.mistake_limit`.
pub fn compare_logs(
    first: &[String],
    second: &[String],
    config: &CompareConfig,
    sink: &mut dyn TraceSink,
) -> ComparisonReport {
    if first.len() != second.len() {
        emit_length_mismatch(first, second, sink);
        return ComparisonReport::length_mismatch(first.len(), second.len());
    }

    let mut mistakes: Vec<usize> = Vec::new();
    let mut truncated = false;

    for i in 0..first.len() {
        let (l1, l2) = (&first[i], &second[i]);
        if l1 == l2 {
            continue;
        }
        let diff = diff_lines(l1, l2, &config.ignored_keys);
        if diff.is_empty() {
            // Textual difference confined to ignored or non-field segments.
            continue;
        }

        sink.emit(
            &format!("diff on line {}: {}", i, render_diffs(&diff)),
            Emphasis::Alert,
        );
        emit_context(first, second, i, config, sink);
        sink.emit(&format!("Emulator 1: {}", l1), Emphasis::Alert);
        sink.emit(&format!("Emulator 2: {}", l2), Emphasis::Contrast);

        mistakes.push(i);
        if mistakes.len() > config.mistake_limit {
            sink.emit("ending because too many mistakes", Emphasis::None);
            truncated = true;
            break;
        }
    }

    let report = ComparisonReport::scanned(first.len(), mistakes, truncated);
    report.emit_summary(sink);
    report
}

/// Show up to [`CONTEXT_LINES`] earlier pairs, each annotated with its own
/// ignore-aware field diff when the raw lines disagree. Adjacent mistakes
/// therefore reappear here with their diffs attached.
fn emit_context(
    first: &[String],
    second: &[String],
    at: usize,
    config: &CompareConfig,
    sink: &mut dyn TraceSink,
) {
    for back in (1..=CONTEXT_LINES).rev() {
        if at < back {
            continue;
        }
        let j = at - back;
        let mut note = format!("Previous {}: {}", back, first[j]);
        if first[j] != second[j] {
            let diff = diff_lines(&first[j], &second[j], &config.ignored_keys);
            if !diff.is_empty() {
                note.push_str(&format!(" (diff: {})", render_diffs(&diff)));
            }
        }
        sink.emit(&note, Emphasis::None);
    }
}

/// A length mismatch aborts the scan; both logs are dumped in full so the
/// missing or extra records are visible.
fn emit_length_mismatch(first: &[String], second: &[String], sink: &mut dyn TraceSink) {
    sink.emit(
        &format!(
            "log lengths are different! {} lines vs {} lines",
            first.len(),
            second.len()
        ),
        Emphasis::Alert,
    );
    sink.emit("Emulator 1 log:", Emphasis::None);
    for line in first {
        sink.emit(line, Emphasis::Alert);
    }
    sink.emit("Emulator 2 log:", Emphasis::None);
    for line in second {
        sink.emit(line, Emphasis::Contrast);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CompareConfig::default();
        assert!(config.ignored_keys.is_empty());
        assert_eq!(config.mistake_limit, 64);
    }

    #[test]
    fn test_read_log_missing_file() {
        let err = read_log(Path::new("does_not_exist_em1.txt")).unwrap_err();
        assert!(err.to_string().contains("does_not_exist_em1.txt"));
    }
}
