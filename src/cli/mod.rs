//! CLI definition and entry points for json-merge.
//!
//! This module defines the CLI structure using clap's derive macros and the
//! `run`/`execute` entry points. `run` takes an injected argument vector and
//! returns a process status, so the whole surface is testable without
//! spawning a process; `main` only converts the status to an `ExitCode`.

use crate::document;
use crate::error::MergeResult;
use crate::merge::{ArrayPolicy, deep_merge};
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use std::ffi::OsString;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

/// Array handling strategy selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ArrayStrategy {
    /// Overlay arrays replace base arrays outright (default)
    #[default]
    Replace,
    /// Append overlay elements after base elements
    Concat,
    /// Merge array elements pairwise by index
    IndexMerge,
}

/// Deep-merge two JSON documents and print the result
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the overlay JSON document (its values win conflicts)
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Path to the base JSON document
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Array merge strategy
    #[arg(short, long, value_enum, default_value_t = ArrayStrategy::Replace)]
    pub arrays: ArrayStrategy,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Logging output: 0/off (default), 1/stdout, 2/stderr, or filename
    #[arg(short, long, default_value = "0")]
    pub log: String,
}

/// Convert CLI ArrayStrategy to merge ArrayPolicy
fn strategy_to_policy(strategy: ArrayStrategy) -> ArrayPolicy {
    match strategy {
        ArrayStrategy::Replace => ArrayPolicy::Replace,
        ArrayStrategy::Concat => ArrayPolicy::Concat,
        ArrayStrategy::IndexMerge => ArrayPolicy::IndexMerge,
    }
}

/// Parse the argument vector, merge the two documents, and print the result.
///
/// Returns the process status: 0 on success (and for `--help`/`--version`),
/// 1 for usage errors and for any read/parse failure.
pub fn run(args: Vec<OsString>) -> u8 {
    let cli = match Cli::try_parse_from(args.iter().cloned()) {
        Ok(cli) => cli,
        Err(err) => return report_parse_error(err, &args),
    };

    if let Err(err) = init_logging(&cli) {
        eprintln!("Error: {err}");
        return 1;
    }

    match execute(&cli) {
        Ok(rendered) => {
            println!("{rendered}");
            0
        }
        Err(err) => {
            eprintln!("Error: {err}");
            1
        }
    }
}

/// Load both documents, merge them, and render the result as pretty JSON.
pub fn execute(cli: &Cli) -> MergeResult<String> {
    let overlay = document::load(&cli.source)?;
    let base = document::load(&cli.target)?;

    debug!(
        source = %cli.source.display(),
        target = %cli.target.display(),
        strategy = ?cli.arrays,
        "Merging documents"
    );

    let merged = deep_merge(base, overlay, strategy_to_policy(cli.arrays));
    document::to_pretty_json(&merged)
}

/// Usage line shown when the positional arguments are missing.
pub fn usage_line(args: &[OsString]) -> String {
    let prog = args
        .first()
        .and_then(|arg| Path::new(arg).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());
    format!("Usage: {prog} <source_file.json> <target_file.json>")
}

fn report_parse_error(err: clap::Error, args: &[OsString]) -> u8 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            0
        }
        ErrorKind::MissingRequiredArgument => {
            eprintln!("{}", usage_line(args));
            1
        }
        _ => {
            let _ = err.print();
            1
        }
    }
}

/// Initialize logging based on the --log option.
///
/// Defaults to off so standard output carries nothing but the merged
/// document.
fn init_logging(cli: &Cli) -> anyhow::Result<()> {
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    match cli.log.as_str() {
        "0" | "off" => {
            // No logging
        }
        "1" | "stdout" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stdout)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        "2" | "stderr" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        filename => {
            // Log to file (append mode)
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(filename)?;
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(file)
                .with_ansi(false)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["json-merge", "source.json", "target.json"]).unwrap();
        assert_eq!(cli.source, PathBuf::from("source.json"));
        assert_eq!(cli.target, PathBuf::from("target.json"));
        assert_eq!(cli.arrays, ArrayStrategy::Replace);
        assert!(!cli.verbose);
        assert_eq!(cli.log, "0");
    }

    #[test]
    fn test_parse_array_strategy() {
        let cli = Cli::try_parse_from(["json-merge", "s.json", "t.json", "--arrays", "concat"])
            .unwrap();
        assert_eq!(cli.arrays, ArrayStrategy::Concat);

        let cli =
            Cli::try_parse_from(["json-merge", "s.json", "t.json", "--arrays", "index-merge"])
                .unwrap();
        assert_eq!(cli.arrays, ArrayStrategy::IndexMerge);
    }

    #[test]
    fn test_invalid_array_strategy_is_rejected() {
        let err = Cli::try_parse_from(["json-merge", "s.json", "t.json", "--arrays", "zip"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_missing_arguments_is_usage_error() {
        let err = Cli::try_parse_from(["json-merge"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let err = Cli::try_parse_from(["json-merge", "only-one.json"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_usage_line_uses_program_basename() {
        let args = vec![OsString::from("/usr/local/bin/json-merge")];
        assert_eq!(
            usage_line(&args),
            "Usage: json-merge <source_file.json> <target_file.json>"
        );
    }

    #[test]
    fn test_usage_line_falls_back_to_package_name() {
        assert_eq!(
            usage_line(&[]),
            "Usage: json-merge <source_file.json> <target_file.json>"
        );
    }

    #[test]
    fn test_strategy_conversion() {
        assert_eq!(
            strategy_to_policy(ArrayStrategy::Replace),
            ArrayPolicy::Replace
        );
        assert_eq!(
            strategy_to_policy(ArrayStrategy::Concat),
            ArrayPolicy::Concat
        );
        assert_eq!(
            strategy_to_policy(ArrayStrategy::IndexMerge),
            ArrayPolicy::IndexMerge
        );
    }
}
