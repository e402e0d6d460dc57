//! `abp provision <record.json>` – full provisioning run for one bot.

use anyhow::Result;
use abp_core::config::ProvisionConfig;
use abp_core::provision::BotProvisioner;
use std::path::Path;

use super::load_record;

pub fn run_provision(cfg: ProvisionConfig, record_path: &Path) -> Result<()> {
    let record = load_record(record_path)?;
    let provisioner = BotProvisioner::new(cfg);

    match provisioner.provision(&record) {
        Ok(()) => {
            println!("bot {} provisioned", record.name);
            Ok(())
        }
        Err(err) => {
            tracing::error!("provisioning {} failed: {}", record.name, err);
            Err(err.into())
        }
    }
}
