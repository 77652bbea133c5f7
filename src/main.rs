//! json-merge
//!
//! Reads two JSON documents and writes their deep merge to stdout.
//! All argument handling lives in [`json_merge::cli::run`] so the CLI
//! can be exercised in tests without spawning a process.

use std::process::ExitCode;

fn main() -> ExitCode {
    ExitCode::from(json_merge::cli::run(std::env::args_os().collect()))
}
