//! Binary entrypoint for the `gsd2ralph` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    match gsd2ralph::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
