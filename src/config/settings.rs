//! User settings for pa
//!
//! Settings are never persisted. They come from command-line flags, falling
//! back to `PA_*` environment variables and then to built-in defaults.

use std::time::Duration;

use clap::{Args, ValueEnum};

use crate::crypto::generate::parse_pattern;
use crate::error::{PaError, PaResult};

/// Default length of generated passwords
pub const DEFAULT_PASSWORD_LENGTH: usize = 50;

/// Default alphabet pattern for generated passwords (`A-Z a-z 0-9 _ -`)
pub const DEFAULT_PASSWORD_PATTERN: &str = "_A-Z-a-z-0-9";

/// Default encryption tool
pub const DEFAULT_AGE_BINARY: &str = "age";

/// Default subprocess timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Default clipboard hold time in seconds
pub const DEFAULT_CLIP_SECS: u64 = 45;

/// How the selector lines up the account column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum AlignMode {
    /// Align every account one common column past the longest site
    #[default]
    Relative,
    /// Push every account against the right edge of the terminal
    Absolute,
}

/// Resolved settings for one invocation
#[derive(Debug, Clone)]
pub struct Settings {
    /// Length of generated passwords
    pub password_length: usize,

    /// `tr`-style alphabet pattern for generated passwords
    pub password_pattern: String,

    /// Selector alignment
    pub align: AlignMode,

    /// Encryption tool to invoke
    pub age_binary: String,

    /// Upper bound on a single encrypt or decrypt call
    pub crypto_timeout: Duration,

    /// How long a copied secret stays on the clipboard (zero keeps it)
    pub clipboard_clear: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            password_length: DEFAULT_PASSWORD_LENGTH,
            password_pattern: DEFAULT_PASSWORD_PATTERN.to_string(),
            align: AlignMode::default(),
            age_binary: DEFAULT_AGE_BINARY.to_string(),
            crypto_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            clipboard_clear: Duration::from_secs(DEFAULT_CLIP_SECS),
        }
    }
}

impl Settings {
    /// Reject settings that would make a workflow fail halfway
    pub fn validate(&self) -> PaResult<()> {
        if self.password_length == 0 {
            return Err(PaError::Validation(
                "Password length must be greater than zero".into(),
            ));
        }
        if self.crypto_timeout.is_zero() {
            return Err(PaError::Validation(
                "Encryption timeout must be greater than zero".into(),
            ));
        }
        if self.age_binary.trim().is_empty() {
            return Err(PaError::Config("Encryption tool cannot be empty".into()));
        }
        self.alphabet()?;
        Ok(())
    }

    /// Characters generated passwords are drawn from
    pub fn alphabet(&self) -> PaResult<Vec<char>> {
        parse_pattern(&self.password_pattern)
    }
}

/// Command-line flags mirroring [`Settings`]
#[derive(Args, Debug, Clone)]
pub struct SettingsArgs {
    /// Length of generated passwords
    #[arg(long, env = "PA_LENGTH", default_value_t = DEFAULT_PASSWORD_LENGTH, global = true)]
    pub length: usize,

    /// Alphabet for generated passwords, as a tr-style pattern
    #[arg(long, env = "PA_PATTERN", default_value = DEFAULT_PASSWORD_PATTERN, global = true)]
    pub pattern: String,

    /// Selector alignment
    #[arg(long, env = "PA_ALIGN", value_enum, default_value_t = AlignMode::Relative, global = true)]
    pub align: AlignMode,

    /// Encryption tool binary
    #[arg(long, env = "PA_AGE", default_value = DEFAULT_AGE_BINARY, global = true)]
    pub age: String,

    /// Encryption tool timeout in seconds
    #[arg(long, env = "PA_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    pub timeout: u64,

    /// Seconds before a copied secret is cleared from the clipboard (0 keeps it)
    #[arg(long, env = "PA_CLIP_TIME", default_value_t = DEFAULT_CLIP_SECS, global = true)]
    pub clip_time: u64,
}

impl From<SettingsArgs> for Settings {
    fn from(args: SettingsArgs) -> Self {
        Self {
            password_length: args.length,
            password_pattern: args.pattern,
            align: args.align,
            age_binary: args.age,
            crypto_timeout: Duration::from_secs(args.timeout),
            clipboard_clear: Duration::from_secs(args.clip_time),
        }
    }
}
