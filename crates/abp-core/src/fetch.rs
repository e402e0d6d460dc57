//! Authenticated bundle download with integrity verification.
//!
//! Streams the response body to a staging file, then gates on the published
//! digest. The staging file is left in place on failure; cleanup is the
//! caller's concern.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::checksum;
use crate::error::ProvisionError;

/// Downloads `url` to `staging_path` with an `Authorization: Token ...`
/// header, then compares the file's MD5 against `expected_md5`
/// (case-insensitive). Returns the staging path once verified.
///
/// No retries and no overall timeout at this layer; a hanging transfer blocks
/// the calling thread until the peer gives up.
pub fn fetch_and_verify(
    url: &str,
    expected_md5: &str,
    staging_path: &Path,
    api_token: &str,
) -> Result<PathBuf, ProvisionError> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(|e| ProvisionError::transfer(url, e))?;
    easy.follow_location(true)
        .map_err(|e| ProvisionError::transfer(url, e))?;
    easy.max_redirections(10)
        .map_err(|e| ProvisionError::transfer(url, e))?;

    let mut list = curl::easy::List::new();
    list.append(&format!("Authorization: Token {}", api_token))
        .map_err(|e| ProvisionError::transfer(url, e))?;
    easy.http_headers(list)
        .map_err(|e| ProvisionError::transfer(url, e))?;

    let mut file = File::create(staging_path).map_err(|e| ProvisionError::transfer(url, e))?;
    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(move |data| match file.write_all(data) {
                Ok(()) => Ok(data.len()),
                Err(e) => {
                    tracing::warn!("staging write failed: {}", e);
                    Ok(0) // abort transfer
                }
            })
            .map_err(|e| ProvisionError::transfer(url, e))?;
        transfer
            .perform()
            .map_err(|e| ProvisionError::transfer(url, e))?;
    }

    let code = easy
        .response_code()
        .map_err(|e| ProvisionError::transfer(url, e))?;
    if !(200..300).contains(&code) {
        return Err(ProvisionError::transfer(url, format!("HTTP {}", code)));
    }

    let computed = checksum::md5_path(staging_path).map_err(|e| ProvisionError::transfer(url, e))?;
    if !computed.eq_ignore_ascii_case(expected_md5) {
        return Err(ProvisionError::ChecksumMismatch {
            expected: expected_md5.to_ascii_lowercase(),
            computed,
        });
    }

    Ok(staging_path.to_path_buf())
}
