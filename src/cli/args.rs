//! CLI argument definitions
//!
//! Every flag is optional: a bare `kobo-verify` performs a full run.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "kobo-verify")]
#[command(
    about = "Mark KoboToolbox surveys created in the last 24 hours for review",
    version
)]
pub(crate) struct Cli {
    /// Config file (default: ~/.config/kobo-verify/config.toml)
    #[arg(long, value_name = "PATH")]
    pub(crate) config: Option<PathBuf>,

    /// Only consider projects whose name contains this text (case-insensitive)
    #[arg(short = 't', long, value_name = "TEXT")]
    pub(crate) title_filter: Option<String>,

    /// CSV file receiving one row per run
    #[arg(short, long, value_name = "PATH")]
    pub(crate) log_file: Option<PathBuf>,

    /// Report what would be renamed without renaming anything
    #[arg(short = 'n', long)]
    pub(crate) dry_run: bool,

    /// Do not send the summary email
    #[arg(long)]
    pub(crate) no_email: bool,

    /// Print the run summary as JSON instead of a table
    #[arg(short, long)]
    pub(crate) json: bool,

    /// Timezone for human-facing timestamps (e.g., "UTC", "Africa/Nairobi")
    #[arg(long, value_name = "TZ")]
    pub(crate) timezone: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge config file flags into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // The config file can switch dry run on, never off
        if !self.dry_run && config.dry_run {
            self.dry_run = true;
        }
        self
    }
}
