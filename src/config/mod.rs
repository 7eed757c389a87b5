//! Configuration module for pa
//!
//! This module provides:
//! - Store directory and key file resolution
//! - Per-invocation settings from flags and environment

pub mod paths;
pub mod settings;

pub use paths::PaPaths;
pub use settings::{AlignMode, Settings, SettingsArgs};
