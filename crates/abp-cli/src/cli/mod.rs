//! CLI for the ABP bot provisioner.

mod commands;

use anyhow::Result;
use abp_core::config::ProvisionConfig;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use commands::{run_checksum, run_describe, run_ladder_config, run_provision};

/// Top-level CLI for the ABP bot provisioner.
#[derive(Debug, Parser)]
#[command(name = "abp")]
#[command(about = "ABP: bot provisioning for competitive-AI arena ladders", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download, verify and extract a bot's bundles from its record.
    Provision {
        /// Path to the bot record JSON (as served by the arena API).
        record: PathBuf,
    },

    /// Print the launch descriptor derived from a bot record.
    Describe {
        /// Path to the bot record JSON.
        record: PathBuf,
    },

    /// Compute MD5 of a file (e.g. a bundle before publishing).
    Checksum {
        /// Path to the file.
        path: String,
    },

    /// Print the parsed ladderbots.json of an installed bot.
    LadderConfig {
        /// Bot name under the bots directory.
        bot: String,
    },
}

impl CliCommand {
    pub fn run_from_args(cfg: ProvisionConfig) -> Result<()> {
        let cli = Cli::parse();
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Provision { record } => run_provision(cfg, &record)?,
            CliCommand::Describe { record } => run_describe(cfg, &record)?,
            CliCommand::Checksum { path } => run_checksum(Path::new(&path))?,
            CliCommand::LadderConfig { bot } => run_ladder_config(cfg, &bot)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
