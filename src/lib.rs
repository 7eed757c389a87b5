//! pa - a minimal personal password store
//!
//! Every credential lives in its own file under the store directory, named
//! after its site and account and encrypted with an external age-compatible
//! tool. pa never implements cryptography itself and never keeps a decrypted
//! secret on disk.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and per-invocation settings
//! - `error`: Custom error types
//! - `models`: The `(site, account)` entry identifier
//! - `naming`: Mapping between entries and file names
//! - `storage`: One-file-per-entry repository with atomic writes
//! - `crypto`: The encryption gateway, password generator and secret buffers
//! - `services`: Store operations on top of storage and crypto
//! - `select`: Aligned candidate lines and interactive selection
//! - `ui`: The interactive host (terminal prompts and clipboard)
//! - `cli`: The add/show/edit/delete/rename/list workflows
//!
//! # Example
//!
//! ```rust,ignore
//! use pa_store::config::{PaPaths, Settings};
//! use pa_store::crypto::AgeCli;
//! use pa_store::services::CredentialService;
//! use pa_store::storage::PasswordStore;
//!
//! let paths = PaPaths::new()?;
//! let settings = Settings::default();
//! let store = PasswordStore::new(paths.passwords_dir());
//! let cipher = AgeCli::from_config(&paths, &settings);
//! let service = CredentialService::new(&store, &cipher);
//! ```

pub mod cli;
pub mod config;
pub mod crypto;
pub mod error;
pub mod models;
pub mod naming;
pub mod select;
pub mod services;
pub mod storage;
pub mod ui;

pub use error::{PaError, PaResult};
