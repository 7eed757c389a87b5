//! Password repository over a directory of ciphertext files
//!
//! Each entry is one `<site>:<account>.age` file in the passwords directory.
//! The directory listing is the index; there is no other metadata.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{PaError, PaResult};
use crate::models::Entry;
use crate::naming;

use super::file_io::{read_bytes, write_bytes_atomic};
use super::Repository;

/// Names that may share the directory but are never entries
pub const RESERVED_NAMES: [&str; 4] = ["identities", "recipients", ".", ".."];

/// Filesystem-backed repository of encrypted entries
#[derive(Debug, Clone)]
pub struct PasswordStore {
    dir: PathBuf,
}

impl PasswordStore {
    /// Create a store rooted at `dir`
    ///
    /// The directory is not created here; a missing directory lists as empty.
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, entry: &Entry) -> PathBuf {
        self.dir.join(entry.file_name())
    }
}

/// Whether a directory entry name can never be a password file
fn is_reserved(name: &str) -> bool {
    // Hidden names cover version-control metadata and our own temp files
    RESERVED_NAMES.contains(&name) || name.starts_with('.')
}

impl Repository for PasswordStore {
    fn list(&self) -> PaResult<Vec<Entry>> {
        let read_dir = match fs::read_dir(&self.dir) {
            Ok(rd) => rd,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(PaError::Io(format!(
                    "Failed to read passwords directory {}: {}",
                    self.dir.display(),
                    e
                )))
            }
        };

        let mut entries = Vec::new();
        for dir_entry in read_dir {
            let dir_entry = dir_entry
                .map_err(|e| PaError::Io(format!("Failed to read directory entry: {}", e)))?;

            let file_name = dir_entry.file_name();
            let Some(name) = file_name.to_str() else {
                debug!(name = ?file_name, "skipping non UTF-8 file name");
                continue;
            };

            if is_reserved(name) || !dir_entry.path().is_file() {
                continue;
            }

            match naming::decode(name) {
                Ok(entry) => entries.push(entry),
                Err(e) => debug!(error = %e, "skipping file in passwords directory"),
            }
        }

        Ok(entries)
    }

    fn exists(&self, entry: &Entry) -> bool {
        self.path_for(entry).is_file()
    }

    fn read(&self, entry: &Entry) -> PaResult<Vec<u8>> {
        read_bytes(self.path_for(entry))?.ok_or_else(|| PaError::not_found(entry.to_string()))
    }

    fn write(&self, entry: &Entry, ciphertext: &[u8]) -> PaResult<()> {
        write_bytes_atomic(self.path_for(entry), ciphertext)?;
        info!(entry = %entry, "wrote entry");
        Ok(())
    }

    fn delete(&self, entry: &Entry) -> PaResult<()> {
        match fs::remove_file(self.path_for(entry)) {
            Ok(()) => {
                info!(entry = %entry, "deleted entry");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(PaError::not_found(entry.to_string()))
            }
            Err(e) => Err(PaError::Io(format!("Failed to delete {}: {}", entry, e))),
        }
    }

    fn rename(&self, from: &Entry, to: &Entry) -> PaResult<()> {
        if !self.exists(from) {
            return Err(PaError::not_found(from.to_string()));
        }
        if from == to {
            return Ok(());
        }
        if self.exists(to) {
            return Err(PaError::conflict(to.to_string()));
        }

        fs::rename(self.path_for(from), self.path_for(to))
            .map_err(|e| PaError::Io(format!("Failed to rename {} to {}: {}", from, to, e)))?;
        info!(from = %from, to = %to, "renamed entry");
        Ok(())
    }
}
