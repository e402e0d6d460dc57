//! Logging init: file under XDG state dir, or graceful fallback to stderr.

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,abp=debug";

fn env_filter(config_filter: Option<&str>) -> EnvFilter {
    // RUST_LOG overrides the config; the config overrides the built-in default.
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(config_filter.unwrap_or(DEFAULT_FILTER))
    })
}

/// Log file path under the XDG state dir (`~/.local/state/abp/abp.log`).
/// `with_prefix` already appends the app dir, so no extra path segment here.
fn state_log_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("abp")?;
    Ok(xdg_dirs.get_state_home().join("abp.log"))
}

/// Initialize structured logging to `~/.local/state/abp/abp.log`.
/// On failure (e.g. log dir unwritable), returns Err so the caller can fall
/// back to [`init_logging_stderr`].
pub fn init_logging(config_filter: Option<&str>) -> Result<()> {
    let log_file_path = state_log_path()?;
    if let Some(log_dir) = log_file_path.parent() {
        fs::create_dir_all(log_dir)?;
    }

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config_filter))
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();

    tracing::info!("abp logging initialized at {}", log_file_path.display());

    Ok(())
}

/// Initialize logging to stderr only (no file). Use when init_logging() fails
/// so the CLI doesn't crash.
pub fn init_logging_stderr(config_filter: Option<&str>) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config_filter))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_path_has_single_app_dir() {
        let path = state_log_path().unwrap();
        assert!(path.ends_with("abp/abp.log"), "got {}", path.display());
        assert!(!path.ends_with("abp/abp/abp.log"), "got {}", path.display());
    }
}
