//! Colored terminal output for comparison diagnostics.
//!
//! Maps [`Emphasis`] onto crossterm styles: divergence output for the
//! first emulator in bold red, the second emulator's side in green.

use crossterm::style::Stylize;
use td_core::sink::{Emphasis, TraceSink};

/// Stdout sink with optional crossterm styling.
pub struct StyledSink {
    color: bool,
}

impl StyledSink {
    /// Sink with an explicit color choice.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Color on only when stdout is a terminal.
    pub fn auto() -> Self {
        Self::new(atty::is(atty::Stream::Stdout))
    }
}

impl TraceSink for StyledSink {
    fn emit(&mut self, text: &str, emphasis: Emphasis) {
        if !self.color {
            println!("{}", text);
            return;
        }
        match emphasis {
            Emphasis::None => println!("{}", text),
            Emphasis::Alert => println!("{}", text.red().bold()),
            Emphasis::Contrast => println!("{}", text.green()),
        }
    }
}
