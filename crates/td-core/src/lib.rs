//! Trace log comparison for emulator parity debugging.
//!
//! Two emulator builds expected to behave identically each write a trace
//! log, one record per line, each line a `/`-separated list of `key:value`
//! segments. This crate parses those records, diffs line pairs field by
//! field under a configurable ignore set, and collapses divergent line
//! indices into compact ranges for reporting.
//!
//! All diagnostic output flows through the [`sink::TraceSink`] capability,
//! so the comparison logic has no terminal dependency.

pub mod compare;
pub mod diff;
pub mod ranges;
pub mod record;
pub mod report;
pub mod sink;

pub use compare::{CompareConfig, LogError, compare_logs, read_log};
pub use diff::{FieldDiff, NOT_SET, diff_lines};
pub use ranges::{LineRange, compress};
pub use record::Record;
pub use report::{ComparisonReport, Outcome};
pub use sink::{Emphasis, PlainSink, TraceSink};
