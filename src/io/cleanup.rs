//! Pruning of stale exported textures

use crate::io::error::{Result, TextureError};
use log::info;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

/// Whether a file last modified at `modified` is older than `max_age` at `now`
pub fn is_stale(modified: SystemTime, now: SystemTime, max_age: Duration) -> bool {
    now.duration_since(modified)
        .is_ok_and(|age| age > max_age)
}

/// Delete PNG files in `dir` older than `max_age`, returning the removed paths
///
/// A missing directory is treated as empty. Non-PNG files and subdirectories
/// are left alone.
///
/// # Errors
///
/// Returns an error if the directory cannot be listed or a stale file cannot be removed
pub fn prune_stale(dir: &Path, max_age: Duration, now: SystemTime) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let listing_error = |source| TextureError::FileSystem {
        path: dir.to_path_buf(),
        operation: "list directory",
        source,
    };

    let mut removed = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(listing_error)? {
        let path = entry.map_err(listing_error)?.path();
        if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("png") {
            continue;
        }

        let modified = std::fs::metadata(&path)
            .and_then(|metadata| metadata.modified())
            .map_err(|e| TextureError::FileSystem {
                path: path.clone(),
                operation: "read metadata",
                source: e,
            })?;

        if is_stale(modified, now, max_age) {
            std::fs::remove_file(&path).map_err(|e| TextureError::FileSystem {
                path: path.clone(),
                operation: "remove file",
                source: e,
            })?;
            info!("Removed stale texture {}", path.display());
            removed.push(path);
        }
    }

    removed.sort();
    Ok(removed)
}
