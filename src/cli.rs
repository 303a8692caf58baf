//! Command-line argument parsing for the notepad

use clap::Parser;
use std::path::PathBuf;

/// A tabbed notepad for the terminal
#[derive(Parser, Debug)]
#[command(name = "fire-notepad", version, about = "A tabbed notepad for the terminal")]
pub struct CliArgs {
    /// Directory holding the saved session (defaults to the platform data dir)
    #[arg(long, value_name = "DIR", conflicts_with = "ephemeral")]
    pub data_dir: Option<PathBuf>,

    /// Keep the session in memory only
    #[arg(long)]
    pub ephemeral: bool,

    /// Directory that `export` writes into when none is given
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub export_dir: PathBuf,
}
