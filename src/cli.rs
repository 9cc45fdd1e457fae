use clap::Parser;
use std::path::PathBuf;

use crate::constants::DEFAULT_OUTPUT_DIR;

/// Command-line arguments for the linux-triage tool.
///
/// The collector is deliberately non-interactive: everything is decided from
/// these flags plus the detected distribution family.
#[derive(Parser, Debug)]
#[clap(name = "linux-triage", about = "Best-effort forensic triage collector for live Linux hosts")]
pub struct Args {
    /// Directory where the staging tree and the final archive are written
    #[clap(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Keep the staging directory after the archive is created
    #[clap(long)]
    pub keep_staging: bool,

    /// Collect artifacts but skip creating the final archive
    #[clap(long)]
    pub skip_package: bool,

    /// Verbose logging
    #[clap(short, long)]
    pub verbose: bool,
}
