//! Storage layer for pa
//!
//! The store is a directory of ciphertext files. Workflows only see the
//! [`Repository`] trait, so the naming scheme behind it can change without
//! touching them.

pub mod file_io;
pub mod passwords;

pub use file_io::{read_bytes, write_bytes_atomic};
pub use passwords::PasswordStore;

use crate::error::PaResult;
use crate::models::Entry;

/// Repository of encrypted entries
pub trait Repository {
    /// All decodable entries, in directory enumeration order
    fn list(&self) -> PaResult<Vec<Entry>>;

    fn exists(&self, entry: &Entry) -> bool;

    /// Ciphertext of an entry; `NotFound` if absent
    fn read(&self, entry: &Entry) -> PaResult<Vec<u8>>;

    /// Create or replace an entry's ciphertext
    fn write(&self, entry: &Entry, ciphertext: &[u8]) -> PaResult<()>;

    /// Remove an entry; `NotFound` if absent
    fn delete(&self, entry: &Entry) -> PaResult<()>;

    /// Move an entry to a new identifier
    ///
    /// Fails with `NotFound` if `from` is absent and with `Conflict` if `to`
    /// is already taken. Renaming an entry onto itself does nothing.
    fn rename(&self, from: &Entry, to: &Entry) -> PaResult<()>;
}
