//! Typed provisioning failures.
//!
//! Every step that can fail reports one of these variants instead of
//! defaulting; the CLI turns them into a non-zero exit, never a panic.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProvisionError {
    /// Network or local I/O failure while downloading a bundle.
    #[error("download of {url} failed: {reason}")]
    Transfer { url: String, reason: String },

    /// Downloaded bundle does not match the digest published by the arena.
    /// Extraction must never run after this.
    #[error("checksum mismatch: expected {expected}, computed {computed}")]
    ChecksumMismatch { expected: String, computed: String },

    /// Archive corrupt, or filesystem failure while unpacking / fixing modes.
    #[error("extraction failed at {path}: {reason}")]
    Extraction { path: PathBuf, reason: String },

    /// Race or runtime-type code outside the supported set. Surfaced at the
    /// validation boundary so an incorrect filename/runtime pairing cannot
    /// travel to the launcher.
    #[error("unknown {what} code {code:?}")]
    Lookup { what: &'static str, code: String },

    /// Missing or malformed `ladderbots.json`.
    #[error("{path}: {kind}")]
    File { path: PathBuf, kind: FileErrorKind },
}

#[derive(Debug)]
pub enum FileErrorKind {
    NotFound,
    Io(String),
    Malformed(String),
}

impl fmt::Display for FileErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileErrorKind::NotFound => write!(f, "file not found"),
            FileErrorKind::Io(e) => write!(f, "read failed: {}", e),
            FileErrorKind::Malformed(e) => write!(f, "malformed JSON: {}", e),
        }
    }
}

impl ProvisionError {
    pub(crate) fn transfer(url: &str, reason: impl fmt::Display) -> Self {
        ProvisionError::Transfer {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn extraction(path: &std::path::Path, reason: impl fmt::Display) -> Self {
        ProvisionError::Extraction {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }
}
