//! Secure memory handling for secrets
//!
//! Provides the type that carries plaintext passwords. Its memory is zeroed
//! on drop and it never prints its contents.

use std::fmt;

use zeroize::Zeroizing;

use crate::error::{PaError, PaResult};

/// A plaintext password that zeros its contents on drop
///
/// Use this for every plaintext value between input or decryption and
/// encryption or the clipboard.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret {
    inner: Zeroizing<String>,
}

impl Secret {
    /// Create a new Secret
    pub fn new(s: impl Into<String>) -> Self {
        Self {
            inner: Zeroizing::new(s.into()),
        }
    }

    /// Build a secret from decrypted bytes
    ///
    /// A single trailing newline is dropped, since the store may hold files
    /// written by tools that terminate the plaintext with one.
    pub fn from_utf8(bytes: Vec<u8>) -> PaResult<Self> {
        let mut text = String::from_utf8(bytes).map_err(|e| {
            let mut bytes = e.into_bytes();
            zeroize::Zeroize::zeroize(&mut bytes);
            PaError::CryptoFailure("Decrypted secret is not valid UTF-8".into())
        })?;
        if text.ends_with('\n') {
            text.pop();
            if text.ends_with('\r') {
                text.pop();
            }
        }
        Ok(Self::new(text))
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.inner.as_bytes()
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.inner.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl From<String> for Secret {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for Secret {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

// Don't print the contents in Debug output
impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secret")
            .field("len", &self.inner.len())
            .finish()
    }
}

// Don't print the contents in Display output
impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED {} bytes]", self.inner.len())
    }
}
