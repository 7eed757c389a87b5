//! Interactive host for pa
//!
//! Workflows never touch the terminal or clipboard directly; they go through
//! [`Host`]. `TerminalHost` is the real implementation.

pub mod fuzzy;
pub mod terminal;

pub use terminal::TerminalHost;

use crate::crypto::Secret;
use crate::error::PaResult;

/// Prompts, confirmations, selection and clipboard access
pub trait Host {
    /// Ask for a line of visible text
    fn prompt(&self, text: &str) -> PaResult<String>;

    /// Ask for hidden input
    fn prompt_secret(&self, text: &str) -> PaResult<Secret>;

    /// Ask a yes/no question; anything but an explicit yes is no
    fn confirm(&self, text: &str) -> PaResult<bool>;

    /// Let the user pick one of `candidates`; `None` when cancelled
    fn select(&self, prompt: &str, candidates: &[String]) -> PaResult<Option<usize>>;

    fn copy_to_clipboard(&self, secret: &Secret) -> PaResult<()>;

    /// Columns available to one candidate line
    fn surface_width(&self) -> usize;
}
