//! `ladderbots.json` sidecar reader.
//!
//! The sidecar is bot-authored; only well-formedness is checked here, schema
//! validation belongs to whoever consumes the fields.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{FileErrorKind, ProvisionError};

pub const LADDER_CONFIG_NAME: &str = "ladderbots.json";

/// Reads `<bot_directory>/ladderbots.json` into generic JSON.
pub fn read_ladder_config(bot_directory: &Path) -> Result<serde_json::Value, ProvisionError> {
    let path = bot_directory.join(LADDER_CONFIG_NAME);
    let data = fs::read_to_string(&path).map_err(|e| ProvisionError::File {
        path: path.clone(),
        kind: if e.kind() == ErrorKind::NotFound {
            FileErrorKind::NotFound
        } else {
            FileErrorKind::Io(e.to_string())
        },
    })?;
    serde_json::from_str(&data).map_err(|e| ProvisionError::File {
        path,
        kind: FileErrorKind::Malformed(e.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FileErrorKind, ProvisionError};

    #[test]
    fn reads_well_formed_sidecar() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(LADDER_CONFIG_NAME),
            r#"{"Bots": {"alpha": {"Race": "Terran"}}}"#,
        )
        .unwrap();

        let value = read_ladder_config(dir.path()).unwrap();
        assert_eq!(value["Bots"]["alpha"]["Race"], "Terran");
    }

    #[test]
    fn missing_sidecar_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        match read_ladder_config(dir.path()) {
            Err(ProvisionError::File {
                kind: FileErrorKind::NotFound,
                ..
            }) => {}
            other => panic!("expected File/NotFound, got {:?}", other),
        }
    }

    #[test]
    fn malformed_sidecar_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(LADDER_CONFIG_NAME), "{not json").unwrap();
        match read_ladder_config(dir.path()) {
            Err(ProvisionError::File {
                kind: FileErrorKind::Malformed(_),
                ..
            }) => {}
            other => panic!("expected File/Malformed, got {:?}", other),
        }
    }
}
