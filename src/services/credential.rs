//! Credential service
//!
//! Provides the store operations behind every workflow: validation,
//! encryption, and repository calls. Nothing here prompts the user; callers
//! pass in already resolved entries and secrets.

use tracing::debug;

use crate::crypto::{Cipher, Secret};
use crate::error::{PaError, PaResult};
use crate::models::Entry;
use crate::storage::Repository;

/// Service for credential management
pub struct CredentialService<'a> {
    store: &'a dyn Repository,
    cipher: &'a dyn Cipher,
}

/// Accept a password entered twice
///
/// Fails with `PasswordMismatch` if the entries differ and with `Validation`
/// if the password is empty.
pub fn confirm_passwords(first: Secret, second: Secret) -> PaResult<Secret> {
    if first != second {
        return Err(PaError::PasswordMismatch);
    }
    require_password(&first)?;
    Ok(first)
}

fn require_password(password: &Secret) -> PaResult<()> {
    if password.is_empty() {
        return Err(PaError::Validation("Password cannot be empty".into()));
    }
    Ok(())
}

impl<'a> CredentialService<'a> {
    /// Create a new credential service
    pub fn new(store: &'a dyn Repository, cipher: &'a dyn Cipher) -> Self {
        Self { store, cipher }
    }

    /// All entries in the store
    pub fn list(&self) -> PaResult<Vec<Entry>> {
        self.store.list()
    }

    pub fn exists(&self, entry: &Entry) -> bool {
        self.store.exists(entry)
    }

    /// Fail with `NotFound` unless the entry exists
    pub fn require(&self, entry: &Entry) -> PaResult<()> {
        if self.store.exists(entry) {
            Ok(())
        } else {
            Err(PaError::not_found(entry.to_string()))
        }
    }

    /// Store a password under a new entry
    ///
    /// Fails with `Conflict` if the entry already exists; use [`Self::replace`]
    /// to change an existing password.
    pub fn add(&self, entry: &Entry, password: &Secret) -> PaResult<()> {
        if self.store.exists(entry) {
            return Err(PaError::conflict(entry.to_string()));
        }
        self.encrypt_and_write(entry, password)
    }

    /// Re-encrypt an existing entry with a new password, overwriting it
    pub fn replace(&self, entry: &Entry, password: &Secret) -> PaResult<()> {
        self.require(entry)?;
        self.encrypt_and_write(entry, password)
    }

    fn encrypt_and_write(&self, entry: &Entry, password: &Secret) -> PaResult<()> {
        require_password(password)?;

        // Encrypt fully before touching the file so a failure writes nothing
        let ciphertext = self.cipher.encrypt(password)?;
        debug!(entry = %entry, bytes = ciphertext.len(), "encrypted password");

        self.store.write(entry, &ciphertext)
    }

    /// Decrypt the password stored for an entry
    pub fn show(&self, entry: &Entry) -> PaResult<Secret> {
        let ciphertext = self.store.read(entry)?;
        self.cipher.decrypt(&ciphertext)
    }

    pub fn delete(&self, entry: &Entry) -> PaResult<()> {
        self.store.delete(entry)
    }

    /// Move an entry to a new identifier; rejects an occupied target
    pub fn rename(&self, from: &Entry, to: &Entry) -> PaResult<()> {
        self.store.rename(from, to)
    }
}
