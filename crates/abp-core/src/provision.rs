//! Provisioning orchestration: fetch, verify, extract, fix up, describe.
//!
//! Fully sequential and blocking. One provisioning attempt touches only its
//! own bot-named staging file and install directory, so callers wanting
//! parallelism across bots can run independent attempts side by side as long
//! as bot names are unique.

use std::path::PathBuf;

use crate::archive;
use crate::config::ProvisionConfig;
use crate::error::ProvisionError;
use crate::fetch;
use crate::ladder;
use crate::launch::{self, LaunchDescriptor};
use crate::record::{BotRecord, RuntimeType};

pub struct BotProvisioner {
    config: ProvisionConfig,
}

impl BotProvisioner {
    pub fn new(config: ProvisionConfig) -> Self {
        Self { config }
    }

    /// Full provisioning run: primary bundle, permission fix-up, data bundle.
    /// Any failure aborts the attempt; nothing already extracted is undone.
    pub fn provision(&self, record: &BotRecord) -> Result<(), ProvisionError> {
        self.install_bot_bundle(record)?;
        self.install_data_bundle(record)?;
        Ok(())
    }

    /// Downloads, verifies and extracts the primary bundle into
    /// `<bots_directory>/<name>`, then makes the binary executable for
    /// native Linux bots.
    pub fn install_bot_bundle(&self, record: &BotRecord) -> Result<(), ProvisionError> {
        tracing::info!("downloading bot {}", record.name);
        let staging = self.config.temp_path.join(format!("{}.zip", record.name));
        let dest = self.bot_root(record);
        self.install_bundle(&record.bot_zip, &record.bot_zip_md5hash, staging, &dest)?;

        if record.runtime == RuntimeType::CppLinux {
            archive::make_owner_executable(&dest.join(&record.name))?;
        }
        Ok(())
    }

    /// Installs the optional private-data bundle into
    /// `<bots_directory>/<name>/data`. A record without a data-bundle
    /// reference succeeds immediately: nothing to verify or extract, no
    /// network call, no filesystem write.
    pub fn install_data_bundle(&self, record: &BotRecord) -> Result<(), ProvisionError> {
        let Some(url) = &record.bot_data else {
            tracing::debug!("bot {} has no data bundle", record.name);
            return Ok(());
        };
        // A data URL without a published digest still goes through the fetch
        // path; the absent digest can never match the transferred file, so
        // the checksum gate rejects the bundle after download.
        let expected_md5 = record.bot_data_md5hash.as_deref().unwrap_or("");

        tracing::info!("downloading bot data for {}", record.name);
        let staging = self
            .config
            .temp_path
            .join(format!("{}-data.zip", record.name));
        let dest = self.bot_root(record).join("data");
        self.install_bundle(url, expected_md5, staging, &dest)
    }

    /// Shared fetch -> verify -> extract sequence for both bundles.
    /// On checksum mismatch no extraction is attempted and the destination
    /// directory is never created.
    fn install_bundle(
        &self,
        url: &str,
        expected_md5: &str,
        staging: PathBuf,
        dest: &std::path::Path,
    ) -> Result<(), ProvisionError> {
        let verified = match fetch::fetch_and_verify(url, expected_md5, &staging, &self.config.api_token)
        {
            Ok(path) => path,
            Err(err) => {
                if let ProvisionError::ChecksumMismatch { expected, computed } = &err {
                    tracing::warn!(
                        "MD5 hash ({}) does not match transferred file ({})",
                        expected,
                        computed
                    );
                }
                return Err(err);
            }
        };
        tracing::info!("MD5 hash matches transferred file");

        tracing::info!("extracting {} to {}", verified.display(), dest.display());
        archive::install_archive(&verified, dest)
    }

    /// Launch fields for a validated record; pure, no I/O.
    pub fn launch_descriptor(&self, record: &BotRecord) -> LaunchDescriptor {
        launch::build_launch_descriptor(record, &self.config.bots_directory)
    }

    /// Parses `<bots_directory>/<bot_name>/ladderbots.json`.
    pub fn read_ladder_config(&self, bot_name: &str) -> Result<serde_json::Value, ProvisionError> {
        ladder::read_ladder_config(&self.config.bots_directory.join(bot_name))
    }

    fn bot_root(&self, record: &BotRecord) -> PathBuf {
        self.config.bots_directory.join(&record.name)
    }
}
