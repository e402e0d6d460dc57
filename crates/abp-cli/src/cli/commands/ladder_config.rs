//! `abp ladder-config <bot>` – print an installed bot's ladderbots.json.

use anyhow::Result;
use abp_core::config::ProvisionConfig;
use abp_core::provision::BotProvisioner;

pub fn run_ladder_config(cfg: ProvisionConfig, bot: &str) -> Result<()> {
    let provisioner = BotProvisioner::new(cfg);
    let value = provisioner.read_ladder_config(bot)?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
