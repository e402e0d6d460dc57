//! Bundle extraction into the install tree.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use zip::ZipArchive;

use crate::error::ProvisionError;

/// Fully extracts a verified zip archive into `destination` (created if
/// absent), preserving archive-internal paths. Entries whose names escape the
/// destination are skipped.
pub fn install_archive(archive_path: &Path, destination: &Path) -> Result<(), ProvisionError> {
    fs::create_dir_all(destination).map_err(|e| ProvisionError::extraction(destination, e))?;

    let file = File::open(archive_path).map_err(|e| ProvisionError::extraction(archive_path, e))?;
    let mut archive =
        ZipArchive::new(file).map_err(|e| ProvisionError::extraction(archive_path, e))?;

    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| ProvisionError::extraction(archive_path, e))?;
        let outpath = match entry.enclosed_name() {
            Some(path) => destination.join(path),
            None => {
                tracing::warn!("skipping unsafe archive entry {:?}", entry.name());
                continue;
            }
        };

        if entry.is_dir() {
            fs::create_dir_all(&outpath).map_err(|e| ProvisionError::extraction(&outpath, e))?;
        } else {
            if let Some(parent) = outpath.parent() {
                fs::create_dir_all(parent).map_err(|e| ProvisionError::extraction(parent, e))?;
            }
            let mut outfile =
                File::create(&outpath).map_err(|e| ProvisionError::extraction(&outpath, e))?;
            io::copy(&mut entry, &mut outfile)
                .map_err(|e| ProvisionError::extraction(&outpath, e))?;
        }
    }

    Ok(())
}

/// Sets `path` to mode 744 (rwxr--r--) so a native-binary bot can be
/// executed. No-op on non-unix targets.
pub fn make_owner_executable(path: &Path) -> Result<(), ProvisionError> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o744))
            .map_err(|e| ProvisionError::extraction(path, e))?;
    }
    #[cfg(not(unix))]
    let _ = path;
    Ok(())
}
