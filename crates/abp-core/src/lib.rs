pub mod config;
pub mod logging;

pub mod archive;
pub mod checksum;
pub mod error;
pub mod fetch;
pub mod ladder;
pub mod launch;
pub mod provision;
pub mod record;
