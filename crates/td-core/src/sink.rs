//! Output capability for comparison diagnostics.
//!
//! Comparison code emits text through [`TraceSink`] so terminal styling
//! stays in the frontend crate and tests can capture output directly.

use std::io::Write;

/// Visual weight of one emitted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    /// Neutral context output.
    None,
    /// Divergence headers and the first emulator's side of a divergence.
    Alert,
    /// The second emulator's side of a divergence.
    Contrast,
}

/// Receiver for diagnostic output, one line per call.
pub trait TraceSink {
    fn emit(&mut self, text: &str, emphasis: Emphasis);
}

/// Unstyled sink writing to any [`Write`]; used by tests and piped output.
pub struct PlainSink<W: Write> {
    out: W,
}

impl<W: Write> PlainSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TraceSink for PlainSink<W> {
    fn emit(&mut self, text: &str, _emphasis: Emphasis) {
        // A closed pipe must not abort a scan already in progress.
        let _ = writeln!(self.out, "{}", text);
    }
}
