//! Service layer for pa
//!
//! The service layer provides the store operations on top of the repository
//! and the cipher, handling validation and the overwrite policy.

pub mod credential;

pub use credential::{confirm_passwords, CredentialService};
