//! Command dispatch and handlers.

pub mod convert;

use crate::cli::Cli;

/// Dispatch parsed arguments to the conversion command.
///
/// # Errors
///
/// Returns an error string if the conversion fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    convert::run(cli.phase)
}
