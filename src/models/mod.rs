//! Core data models for pa
//!
//! The store holds a flat set of entries; the secret behind each one lives
//! in `crypto::Secret` and is never part of the model.

pub mod entry;

pub use entry::Entry;
