//! Atomic file writes for exported documents.
//!
//! Writes go to a temporary file in the target directory, are synced, and
//! then renamed over the destination, so an interrupted run never leaves a
//! truncated JSON file behind.

use crate::error::{PortrayError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file.
///
/// The parent directory is created if missing. On failure the target file
/// is left untouched (a stray `.{name}.tmp` may remain after a crash).
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            PortrayError::IoError(format!(
                "failed to create directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path);
    write_and_sync(&temp_path, content)?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        PortrayError::IoError(format!("failed to write '{}': {}", path.display(), e))
    })
}

fn temp_path_for(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "output".to_string());
    path.with_file_name(format!(".{}.tmp", file_name))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let io_err = |e: std::io::Error| {
        PortrayError::IoError(format!("failed to write '{}': {}", path.display(), e))
    };

    let mut file = File::create(path).map_err(io_err)?;
    file.write_all(content).map_err(io_err)?;
    file.sync_all().map_err(io_err)?;
    Ok(())
}
