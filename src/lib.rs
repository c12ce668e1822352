//! Core library entry for the `taskbell` CLI.
//!
//! `taskbell` keeps a single-user task list in a local key-value store and
//! raises one reminder per task as its deadline approaches.

pub mod adapters;
pub mod alert;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod ports;
pub mod store;
pub mod task;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// `--help` and `--version` print to stdout and succeed.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => {
            err.print().map_err(|e| e.to_string())?;
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    commands::dispatch(&cli)
}
