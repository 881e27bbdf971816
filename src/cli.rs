//! CLI argument definitions.

use clap::Parser;

/// Top-level CLI parser for `gsd2ralph`.
#[derive(Debug, Parser)]
#[command(name = "gsd2ralph", version, about = "Convert GSD phase plans to Ralph's prd.json")]
pub struct Cli {
    /// Phase number to convert; all phases when omitted.
    pub phase: Option<u32>,
}
