//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::PaError;

/// Read a whole file, `None` if it doesn't exist
pub fn read_bytes<P: AsRef<Path>>(path: P) -> Result<Option<Vec<u8>>, PaError> {
    let path = path.as_ref();
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(PaError::Io(format!(
            "Failed to read {}: {}",
            path.display(),
            e
        ))),
    }
}

/// Write bytes to a file atomically (write to temp, then rename)
///
/// The temporary file is hidden (leading `.`) and lives in the target's
/// directory, so the rename stays on one filesystem and directory scans that
/// skip hidden names never see it. The target ends up owner-readable only.
pub fn write_bytes_atomic<P: AsRef<Path>>(path: P, data: &[u8]) -> Result<(), PaError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            PaError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path)?;

    let result = write_and_sync(&temp_path, data).and_then(|_| {
        fs::rename(&temp_path, path)
            .map_err(|e| PaError::Io(format!("Failed to rename temp file: {}", e)))
    });

    if result.is_err() {
        // Try to clean up temp file if anything failed
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn temp_path_for(path: &Path) -> Result<PathBuf, PaError> {
    let name = path
        .file_name()
        .ok_or_else(|| PaError::Io(format!("Invalid target path: {}", path.display())))?;
    let mut temp_name = std::ffi::OsString::from(".");
    temp_name.push(name);
    temp_name.push(".tmp");
    Ok(path.with_file_name(temp_name))
}

fn write_and_sync(temp_path: &Path, data: &[u8]) -> Result<(), PaError> {
    let mut file = File::create(temp_path)
        .map_err(|e| PaError::Io(format!("Failed to create temp file: {}", e)))?;

    restrict_file(&file)?;

    file.write_all(data)
        .map_err(|e| PaError::Io(format!("Failed to write data: {}", e)))?;

    // Sync to disk before rename
    file.sync_all()
        .map_err(|e| PaError::Io(format!("Failed to sync data: {}", e)))
}

#[cfg(unix)]
fn restrict_file(file: &File) -> Result<(), PaError> {
    use std::os::unix::fs::PermissionsExt;

    file.set_permissions(fs::Permissions::from_mode(0o600))
        .map_err(|e| PaError::Io(format!("Failed to restrict file permissions: {}", e)))
}

#[cfg(not(unix))]
fn restrict_file(_file: &File) -> Result<(), PaError> {
    Ok(())
}
