//! CLI command handlers. Each command is in its own file for clarity.

mod checksum;
mod describe;
mod ladder_config;
mod provision;

pub use checksum::run_checksum;
pub use describe::run_describe;
pub use ladder_config::run_ladder_config;
pub use provision::run_provision;

use anyhow::{Context, Result};
use abp_core::record::BotRecord;
use std::path::Path;

/// Reads a bot record JSON file as served by the arena API.
pub(crate) fn load_record(path: &Path) -> Result<BotRecord> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("read bot record {}", path.display()))?;
    let record: BotRecord = serde_json::from_str(&data)
        .with_context(|| format!("parse bot record {}", path.display()))?;
    Ok(record)
}
