//! Core library entry for the `gsd2ralph` CLI.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod discover;
pub mod extract;
pub mod ports;
pub mod prd;
pub mod progress;

use clap::{CommandFactory, Parser};

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or the conversion
/// fails. Parse failures carry the usage line; help and version requests
/// already render their own.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| match err.kind() {
        clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
            err.to_string()
        }
        _ => format!("{}\n\n{}", err.to_string().trim_end(), cli::Cli::command().render_usage()),
    })?;
    commands::dispatch(&cli)
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn run_errors_on_non_integer_argument() {
        let err = run(["gsd2ralph", "not-a-number"]).unwrap_err();
        assert!(err.contains("Usage"), "usage missing from: {err}");
    }

    #[test]
    fn run_errors_without_planning_directory() {
        // The crate root has no .planning directory.
        let err = run(["gsd2ralph"]).unwrap_err();
        assert!(err.contains(".planning"));
    }
}
