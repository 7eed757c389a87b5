//! Path management for pa
//!
//! Resolves the store directory and the key files the encryption tool uses.
//!
//! ## Path Resolution Order
//!
//! 1. `PA_DIR` environment variable (if set)
//! 2. The platform data directory from `directories` joined with `pa`
//!    (`$XDG_DATA_HOME/pa` or `~/.local/share/pa` on Linux)

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::PaError;

/// Environment variable that overrides the base directory
pub const DIR_ENV: &str = "PA_DIR";

/// Manages all paths used by pa
#[derive(Debug, Clone)]
pub struct PaPaths {
    /// Base directory holding the key files and the passwords directory
    base_dir: PathBuf,
}

impl PaPaths {
    /// Create a new PaPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and `PA_DIR`
    /// is unset.
    pub fn new() -> Result<Self, PaError> {
        let base_dir = match std::env::var_os(DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create PaPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding one ciphertext file per entry
    pub fn passwords_dir(&self) -> PathBuf {
        self.base_dir.join("passwords")
    }

    /// Private key material consumed by decrypt
    pub fn identities_file(&self) -> PathBuf {
        self.base_dir.join("identities")
    }

    /// Public key list consumed by encrypt
    pub fn recipients_file(&self) -> PathBuf {
        self.base_dir.join("recipients")
    }

    /// Ensure the base and passwords directories exist
    pub fn ensure_directories(&self) -> Result<(), PaError> {
        std::fs::create_dir_all(self.passwords_dir())
            .map_err(|e| PaError::Io(format!("Failed to create passwords directory: {}", e)))?;

        restrict_dir(&self.base_dir)?;
        restrict_dir(&self.passwords_dir())?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, PaError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| PaError::Config("Could not determine home directory".into()))?;
    Ok(dirs.data_dir().join("pa"))
}

#[cfg(unix)]
fn restrict_dir(path: &std::path::Path) -> Result<(), PaError> {
    use std::os::unix::fs::PermissionsExt;

    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o700)).map_err(|e| {
        PaError::Io(format!(
            "Failed to restrict permissions on {}: {}",
            path.display(),
            e
        ))
    })
}

#[cfg(not(unix))]
fn restrict_dir(_path: &std::path::Path) -> Result<(), PaError> {
    Ok(())
}
