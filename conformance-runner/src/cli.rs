use std::path::PathBuf;

use clap::Parser;

/// Runs YAML conformance cases against the pattern engine.
#[derive(Parser, Debug, Clone)]
#[command(name = "conformance-runner")]
pub struct Cli {
    /// Directory searched recursively for *.yaml case files
    #[arg(default_value = "conformance")]
    pub path: PathBuf,

    /// Print every case as it is checked
    #[arg(short, long)]
    pub verbose: bool,

    /// Break results down per case file and list common failures
    #[arg(short, long)]
    pub analyze: bool,
}
