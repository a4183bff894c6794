//! Compression of divergent line indices into contiguous ranges.

use std::fmt;

use serde::Serialize;

/// Inclusive run of consecutive line indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl fmt::Display for LineRange {
    /// A singleton renders as a bare number, a run as `start..end`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}..{}", self.start, self.end)
        }
    }
}

/// Collapse line indices into maximal runs of consecutive integers.
///
/// Input order does not matter and duplicates are discarded. Output ranges
/// are ascending and disjoint; a lone index yields `start == end`.
pub fn compress(indices: &[usize]) -> Vec<LineRange> {
    let mut sorted = indices.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let mut ranges = Vec::new();
    let mut run: Option<LineRange> = None;
    for &i in &sorted {
        match run {
            Some(ref mut r) if i == r.end + 1 => r.end = i,
            Some(r) => {
                ranges.push(r);
                run = Some(LineRange { start: i, end: i });
            }
            None => run = Some(LineRange { start: i, end: i }),
        }
    }
    if let Some(r) = run {
        ranges.push(r);
    }
    ranges
}

/// Comma-joined summary rendering, e.g. `3, 10..14, 22`.
pub fn render(ranges: &[LineRange]) -> String {
    let parts: Vec<String> = ranges.iter().map(ToString::to_string).collect();
    parts.join(", ")
}
