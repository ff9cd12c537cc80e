//! CLI for the rsscap feed capture job.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{run_capture, run_plan};

/// Top-level CLI for the rsscap feed capture job.
#[derive(Debug, Parser)]
#[command(name = "rsscap")]
#[command(about = "rsscap: scheduled feed capture job", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch all configured feeds and rewrite captures whose content changed.
    Run {
        /// Path to the feeds config file.
        #[arg(long, value_name = "PATH", default_value = "feeds.toml")]
        config: PathBuf,

        /// Process only the first N expanded targets (test mode).
        #[arg(long, value_name = "N")]
        limit: Option<usize>,

        /// Skip the Telegram notification even if configured.
        #[arg(long)]
        no_notify: bool,
    },

    /// Print the expanded url -> filepath list without fetching anything.
    Plan {
        /// Path to the feeds config file.
        #[arg(long, value_name = "PATH", default_value = "feeds.toml")]
        config: PathBuf,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        match cli.command {
            CliCommand::Run {
                config,
                limit,
                no_notify,
            } => run_capture(&config, limit, no_notify)?,
            CliCommand::Plan { config } => run_plan(&config)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
