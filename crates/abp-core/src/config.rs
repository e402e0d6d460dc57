use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/abp/config.toml`.
///
/// Injected into [`crate::provision::BotProvisioner`] at construction; the
/// library never reads process-wide state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvisionConfig {
    /// Arena API token sent as `Authorization: Token <api_token>` on bundle
    /// downloads.
    pub api_token: String,
    /// Directory for staged downloads (`<temp_path>/<bot>.zip`).
    pub temp_path: PathBuf,
    /// Root of the install tree (`<bots_directory>/<bot>/`).
    pub bots_directory: PathBuf,
    /// Optional tracing filter (e.g. "info,abp=debug"); RUST_LOG wins if set.
    #[serde(default)]
    pub log_filter: Option<String>,
}

impl Default for ProvisionConfig {
    fn default() -> Self {
        Self {
            api_token: String::new(),
            temp_path: std::env::temp_dir(),
            bots_directory: PathBuf::from("bots"),
            log_filter: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("abp")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ProvisionConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ProvisionConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: ProvisionConfig = toml::from_str(&data)?;
    Ok(cfg)
}
