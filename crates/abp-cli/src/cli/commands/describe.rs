//! `abp describe <record.json>` – print the launch descriptor as JSON.

use anyhow::Result;
use abp_core::config::ProvisionConfig;
use abp_core::provision::BotProvisioner;
use std::path::Path;

use super::load_record;

pub fn run_describe(cfg: ProvisionConfig, record_path: &Path) -> Result<()> {
    let record = load_record(record_path)?;
    let provisioner = BotProvisioner::new(cfg);
    let descriptor = provisioner.launch_descriptor(&record);
    println!("{}", serde_json::to_string_pretty(&descriptor)?);
    Ok(())
}
