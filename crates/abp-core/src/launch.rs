//! Launch descriptor: what a process launcher needs to start a bot.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::record::BotRecord;

/// Normalized launch fields, serialized with the launcher-facing names.
/// Ephemeral: recomputed on demand, never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchDescriptor {
    #[serde(rename = "Race")]
    pub race: String,
    #[serde(rename = "RootPath")]
    pub root_path: PathBuf,
    #[serde(rename = "FileName")]
    pub file_name: String,
    #[serde(rename = "Type")]
    pub runtime: String,
    #[serde(rename = "botID")]
    pub bot_id: String,
}

/// Pure translation from a validated record to launch fields; performs no
/// I/O. Total over [`crate::record::Race`] and [`crate::record::RuntimeType`]
/// since wire codes were validated at deserialization.
pub fn build_launch_descriptor(record: &BotRecord, bots_directory: &Path) -> LaunchDescriptor {
    LaunchDescriptor {
        race: record.plays_race.name().to_string(),
        root_path: bots_directory.join(&record.name),
        file_name: record.runtime.launch_filename(&record.name),
        runtime: record.runtime.family().to_string(),
        bot_id: record.game_display_id.clone(),
    }
}
