//! Encryption gateway for pa
//!
//! pa implements no cryptography. Ciphertext is produced and consumed by an
//! external asymmetric-encryption tool (age), reached through the [`Cipher`]
//! trait so workflows can run against a fake in tests.

pub mod age;
pub mod generate;
pub mod secure_memory;

pub use age::AgeCli;
pub use generate::{parse_pattern, random_password};
pub use secure_memory::Secret;

use crate::error::PaResult;

/// Turns secrets into ciphertext and back
pub trait Cipher {
    /// Encrypt a secret for the store's recipients
    ///
    /// An empty secret is a caller error and fails with `CryptoFailure`.
    fn encrypt(&self, plaintext: &Secret) -> PaResult<Vec<u8>>;

    /// Decrypt ciphertext with the store's identities
    fn decrypt(&self, ciphertext: &[u8]) -> PaResult<Secret>;
}
