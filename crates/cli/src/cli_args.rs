//! Command-line argument parsing.

use clap::Parser;

/// Command-line arguments for the dbshift CLI tool.
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the saved connection presets YAML.
    ///
    /// If not provided, defaults to `~/.dbshift/presets.yml`.
    #[arg(long, short = 'p')]
    pub presets_path: Option<String>,

    /// Do not offer to save a newly entered connection as a preset.
    #[arg(long, short = 's', action)]
    pub skip_save: bool,

    /// Source (MongoDB) connection URL.
    ///
    /// Together with `--target` this bypasses the menu. On its own it is the
    /// default for the source prompt.
    #[arg(long)]
    pub source: Option<String>,

    /// Target (PostgreSQL) connection URL.
    ///
    /// Together with `--source` this bypasses the menu. On its own it is the
    /// default for the target prompt.
    #[arg(long)]
    pub target: Option<String>,
}
