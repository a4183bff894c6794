//! Compare two emulator trace logs and report where they diverge.
//!
//! Main entry point for the comparison tool.

use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use td_cli::style::StyledSink;
use td_core::{CompareConfig, compare_logs, read_log};

/// Find where two emulator trace logs diverge, field by field.
#[derive(Parser, Debug)]
#[command(name = "tracediff")]
#[command(author, version, about = "Find where two emulator trace logs diverge", long_about = None)]
struct Args {
    /// First trace log (shown as "Emulator 1")
    #[arg(default_value = "log_em1.txt")]
    first: PathBuf,

    /// Second trace log (shown as "Emulator 2")
    #[arg(default_value = "log_em2.txt")]
    second: PathBuf,

    /// Comma-separated field keys to exclude from every diff
    #[arg(long = "i", visible_alias = "ignore", value_delimiter = ',', value_name = "KEYS")]
    ignored: Vec<String>,

    /// Maximum recorded mistakes before the scan stops early
    #[arg(long = "l", visible_alias = "limit", default_value_t = 64, value_name = "N")]
    limit: usize,

    /// Disable colored output
    #[arg(long = "no-color")]
    no_color: bool,

    /// Print the run summary as JSON after the diagnostics
    #[arg(long = "json")]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let first = read_log(&args.first)?;
    let second = read_log(&args.second)?;

    let config = CompareConfig {
        ignored_keys: args.ignored.iter().cloned().collect::<BTreeSet<_>>(),
        mistake_limit: args.limit,
    };

    let mut sink = if args.no_color {
        StyledSink::new(false)
    } else {
        StyledSink::auto()
    };

    let report = compare_logs(&first, &second, &config, &mut sink);

    if args.json {
        println!("{}", report.to_json());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let args = Args::try_parse_from(["tracediff"]).unwrap();
        assert_eq!(args.first, PathBuf::from("log_em1.txt"));
        assert_eq!(args.second, PathBuf::from("log_em2.txt"));
        assert!(args.ignored.is_empty());
        assert_eq!(args.limit, 64);
    }

    #[test]
    fn test_ignore_and_limit_flags() {
        let args = Args::try_parse_from(["tracediff", "--i=cy,t", "--l=10"]).unwrap();
        assert_eq!(args.ignored, vec!["cy".to_string(), "t".to_string()]);
        assert_eq!(args.limit, 10);
    }

    #[test]
    fn test_long_aliases() {
        let args =
            Args::try_parse_from(["tracediff", "--ignore=pc", "--limit=3", "one.txt", "two.txt"])
                .unwrap();
        assert_eq!(args.ignored, vec!["pc".to_string()]);
        assert_eq!(args.limit, 3);
        assert_eq!(args.first, PathBuf::from("one.txt"));
        assert_eq!(args.second, PathBuf::from("two.txt"));
    }
}
