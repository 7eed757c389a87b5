//! Terminal implementation of the interactive host
//!
//! Visible prompts go through stdout/stdin, hidden input through rpassword,
//! and the clipboard through arboard.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use zeroize::Zeroizing;

use crate::crypto::Secret;
use crate::error::{PaError, PaResult};

use super::fuzzy::{self, Step};
use super::Host;

const FALLBACK_WIDTH: usize = 80;

/// Room reserved left of each candidate for its number
const GUTTER: usize = 6;

/// How long a copied secret stays on the clipboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClipboardHold {
    /// Keep it until something else takes the clipboard
    UntilReplaced,
    /// Clear it after the delay unless it was replaced
    ClearAfter(Duration),
}

impl ClipboardHold {
    fn from_setting(clear: Duration) -> Self {
        if clear.is_zero() {
            ClipboardHold::UntilReplaced
        } else {
            ClipboardHold::ClearAfter(clear)
        }
    }
}

/// Host backed by the controlling terminal
#[derive(Debug, Clone)]
pub struct TerminalHost {
    clipboard_clear: Duration,
}

impl TerminalHost {
    /// Create a terminal host; copied secrets are cleared after `clipboard_clear`
    /// unless it is zero
    pub fn new(clipboard_clear: Duration) -> Self {
        Self { clipboard_clear }
    }

    /// Print `text` and read one line; `None` at end of input
    fn read_line(&self, text: &str) -> PaResult<Option<String>> {
        print!("{}", text);
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            println!();
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn print_candidates(candidates: &[String], visible: &[usize]) {
        let digits = visible.len().to_string().len();
        for (n, &i) in visible.iter().enumerate() {
            println!("{:>digits$}  {}", n + 1, candidates[i], digits = digits);
        }
    }
}

impl Host for TerminalHost {
    fn prompt(&self, text: &str) -> PaResult<String> {
        self.read_line(&format!("{}: ", text))?
            .ok_or(PaError::Aborted)
    }

    fn prompt_secret(&self, text: &str) -> PaResult<Secret> {
        rpassword::prompt_password(format!("{}: ", text))
            .map(Secret::new)
            .map_err(|e| PaError::Io(format!("Failed to read password: {}", e)))
    }

    fn confirm(&self, text: &str) -> PaResult<bool> {
        let answer = self.read_line(&format!("{} [y/N]: ", text))?;
        Ok(matches!(
            answer.as_deref().map(str::to_lowercase).as_deref(),
            Some("y") | Some("yes")
        ))
    }

    fn select(&self, prompt: &str, candidates: &[String]) -> PaResult<Option<usize>> {
        let mut visible: Vec<usize> = (0..candidates.len()).collect();

        loop {
            Self::print_candidates(candidates, &visible);

            let Some(input) =
                self.read_line(&format!("{} (number or search, empty to cancel): ", prompt))?
            else {
                return Ok(None);
            };

            if input.is_empty() {
                return Ok(None);
            }

            match fuzzy::narrow(&input, candidates, &visible) {
                Step::Picked(i) => return Ok(Some(i)),
                Step::Narrowed(matches) => visible = matches,
                Step::NoMatch => println!("No matches for '{}'.", input),
            }
        }
    }

    fn copy_to_clipboard(&self, secret: &Secret) -> PaResult<()> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| PaError::Clipboard(e.to_string()))?;

        let delay = match ClipboardHold::from_setting(self.clipboard_clear) {
            ClipboardHold::UntilReplaced => return hold_until_replaced(&mut clipboard, secret),
            ClipboardHold::ClearAfter(delay) => delay,
        };

        clipboard
            .set_text(secret.as_str())
            .map_err(|e| PaError::Clipboard(e.to_string()))?;

        // Holding the clipboard open also keeps the selection alive on X11
        println!(
            "Copied to clipboard. Clearing in {} seconds.",
            delay.as_secs()
        );
        thread::sleep(delay);

        let current = Zeroizing::new(clipboard.get_text().unwrap_or_default());
        if current.as_str() == secret.as_str() {
            clipboard
                .clear()
                .map_err(|e| PaError::Clipboard(e.to_string()))?;
        }
        Ok(())
    }

    fn surface_width(&self) -> usize {
        crossterm::terminal::size()
            .map(|(cols, _)| cols as usize)
            .unwrap_or(FALLBACK_WIDTH)
            .saturating_sub(GUTTER)
    }
}

/// Set the secret and keep serving it until another program takes over
///
/// X11 and Wayland clipboards live only as long as their owner, so the call
/// blocks until the selection is replaced.
#[cfg(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
))]
fn hold_until_replaced(clipboard: &mut arboard::Clipboard, secret: &Secret) -> PaResult<()> {
    use arboard::SetExtLinux;

    println!("Copied to clipboard. It stays there until something else is copied.");
    clipboard
        .set()
        .wait()
        .text(secret.as_str())
        .map_err(|e| PaError::Clipboard(e.to_string()))
}

#[cfg(not(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
)))]
fn hold_until_replaced(clipboard: &mut arboard::Clipboard, secret: &Secret) -> PaResult<()> {
    // The system clipboard keeps the text after we exit
    println!("Copied to clipboard.");
    clipboard
        .set_text(secret.as_str())
        .map_err(|e| PaError::Clipboard(e.to_string()))
}
