//! Per-line field diffing.
//!
//! Compares the parsed records of a line pair, producing one [`FieldDiff`]
//! per disagreeing field.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::record::Record;

/// Placeholder value for a field the second log never set.
pub const NOT_SET: &str = "(not set)";

/// One disagreeing field between a pair of trace lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDiff {
    pub key: String,
    /// Value recorded by the first emulator.
    pub first: String,
    /// Value recorded by the second emulator, or [`NOT_SET`].
    pub second: String,
}

impl fmt::Display for FieldDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: em1={}, em2={}", self.key, self.first, self.second)
    }
}

/// Compare two raw lines field by field, skipping `ignored` keys.
///
/// Only keys present in the first line's record are candidates; a key that
/// appears only on the second side is never reported. An empty result means
/// the lines agree on every tracked field.
pub fn diff_lines(first: &str, second: &str, ignored: &BTreeSet<String>) -> Vec<FieldDiff> {
    let r1 = Record::parse(first);
    let r2 = Record::parse(second);

    let mut diffs = Vec::new();
    for (key, v1) in r1.iter() {
        if ignored.contains(key) {
            continue;
        }
        match r2.get(key) {
            Some(v2) if v2 == v1 => {}
            Some(v2) => diffs.push(FieldDiff {
                key: key.to_string(),
                first: v1.to_string(),
                second: v2.to_string(),
            }),
            None => diffs.push(FieldDiff {
                key: key.to_string(),
                first: v1.to_string(),
                second: NOT_SET.to_string(),
            }),
        }
    }
    diffs
}

/// Render a diff list the way it appears in diagnostics.
pub fn render_diffs(diffs: &[FieldDiff]) -> String {
    let parts: Vec<String> = diffs.iter().map(ToString::to_string).collect();
    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_ignores() -> BTreeSet<String> {
        BTreeSet::new()
    }

    fn ignoring(keys: &[&str]) -> BTreeSet<String> {
        keys.iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn test_diff_is_reflexive() {
        for line in ["", "a:1/b:2", "x", "pc:0100/sp:fffe/af:01b0"] {
            assert!(diff_lines(line, line, &no_ignores()).is_empty());
        }
    }

    #[test]
    fn test_diff_reports_changed_value() {
        let diffs = diff_lines("k:1/j:2", "k:9/j:2", &no_ignores());
        assert_eq!(diffs.len(), 1);
        assert_eq!(diffs[0].key, "k");
        assert_eq!(diffs[0].first, "1");
        assert_eq!(diffs[0].second, "9");
    }

    #[test]
    fn test_ignored_key_is_skipped() {
        let diffs = diff_lines("k:1/j:2", "k:9/j:2", &ignoring(&["k"]));
        assert!(diffs.is_empty());
    }

    #[test]
    fn test_missing_key_uses_sentinel() {
        let diffs = diff_lines("a:1", "b:2", &no_ignores());
        assert_eq!(diffs.len(), 1);
        assert_eq!(diffs[0].key, "a");
        assert_eq!(diffs[0].second, NOT_SET);
    }

    #[test]
    fn test_key_only_on_second_side_is_never_reported() {
        let diffs = diff_lines("a:1", "a:1/b:2", &no_ignores());
        assert!(diffs.is_empty());
    }

    #[test]
    fn test_display_rendering() {
        let diffs = diff_lines("s:1", "s:2", &no_ignores());
        assert_eq!(render_diffs(&diffs), "s: em1=1, em2=2");
    }

    #[test]
    fn test_multiple_diffs_render_in_key_order() {
        let diffs = diff_lines("b:2/a:1", "b:9/a:8", &no_ignores());
        assert_eq!(render_diffs(&diffs), "a: em1=1, em2=8, b: em1=2, em2=9");
    }
}
