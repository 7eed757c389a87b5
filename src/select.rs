//! Interactive entry selection
//!
//! Entries are shown as one line each, site on the left and account lined up
//! in a common column. The run of spaces between them is the only separator,
//! which is unambiguous because identifiers never contain whitespace.

use crate::config::AlignMode;
use crate::error::{PaError, PaResult};
use crate::models::Entry;
use crate::ui::Host;

/// Columns between the longest site and the account column in relative mode
pub const RELATIVE_GAP: usize = 3;

/// How the account column is placed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    /// Accounts start `RELATIVE_GAP` columns past the longest site
    Relative,
    /// Accounts end at the right edge of a surface `width` columns wide
    Absolute { width: usize },
}

impl Alignment {
    pub fn from_mode(mode: AlignMode, surface_width: usize) -> Self {
        match mode {
            AlignMode::Relative => Alignment::Relative,
            AlignMode::Absolute => Alignment::Absolute {
                width: surface_width,
            },
        }
    }
}

/// One selectable line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub display: String,
    pub entry: Entry,
}

fn width(s: &str) -> usize {
    s.chars().count()
}

/// Build aligned display lines, sorted by site then account
pub fn build_candidates(entries: &[Entry], alignment: Alignment) -> Vec<Candidate> {
    let mut entries = entries.to_vec();
    entries.sort();

    let column = entries.iter().map(|e| width(e.site())).max().unwrap_or(0) + RELATIVE_GAP;

    entries
        .into_iter()
        .map(|entry| {
            let used = width(entry.site());
            let padding = match alignment {
                Alignment::Relative => column - used,
                // At least one space so the line still splits
                Alignment::Absolute { width: surface } => surface
                    .saturating_sub(used + width(entry.account()))
                    .max(1),
            };
            let display = format!("{}{}{}", entry.site(), " ".repeat(padding), entry.account());
            Candidate { display, entry }
        })
        .collect()
}

/// Split a display line back into its entry
pub fn split_display(display: &str) -> PaResult<Entry> {
    let (site, rest) = display
        .split_once(' ')
        .ok_or_else(|| PaError::MalformedEntry(display.to_string()))?;
    Entry::new(site, rest.trim_start_matches(' '))
        .map_err(|_| PaError::MalformedEntry(display.to_string()))
}

/// Ask the host to pick one candidate and return its entry
///
/// Fails with `Aborted` if the user cancels and with `NotFound` if there is
/// nothing to choose from.
pub fn resolve<H: Host + ?Sized>(host: &H, prompt: &str, candidates: &[Candidate]) -> PaResult<Entry> {
    if candidates.is_empty() {
        return Err(PaError::not_found("no matching entries"));
    }

    let lines: Vec<String> = candidates.iter().map(|c| c.display.clone()).collect();
    let index = host.select(prompt, &lines)?.ok_or(PaError::Aborted)?;
    let chosen = lines.get(index).ok_or(PaError::Aborted)?;

    split_display(chosen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::testing::ScriptedHost;

    fn entries() -> Vec<Entry> {
        vec![
            Entry::new("github.com", "octocat").unwrap(),
            Entry::new("acme.com", "alice").unwrap(),
            Entry::new("acme.com", "bob").unwrap(),
        ]
    }

    #[test]
    fn test_relative_alignment() {
        let candidates = build_candidates(&entries(), Alignment::Relative);
        let lines: Vec<&str> = candidates.iter().map(|c| c.display.as_str()).collect();

        // Longest site is 10 chars, so accounts start at column 13
        assert_eq!(
            lines,
            vec![
                "acme.com     alice",
                "acme.com     bob",
                "github.com   octocat",
            ]
        );
    }

    #[test]
    fn test_absolute_alignment_right_edge() {
        let candidates = build_candidates(&entries(), Alignment::Absolute { width: 30 });
        for c in &candidates {
            assert_eq!(c.display.chars().count(), 30);
            assert!(c.display.ends_with(c.entry.account()));
        }
    }

    #[test]
    fn test_absolute_alignment_degenerates_to_one_space() {
        let long = vec![Entry::new("very-long-site.example.com", "account").unwrap()];
        let candidates = build_candidates(&long, Alignment::Absolute { width: 10 });
        assert_eq!(candidates[0].display, "very-long-site.example.com account");
        assert_eq!(split_display(&candidates[0].display).unwrap(), long[0]);
    }

    #[test]
    fn test_split_recovers_every_candidate() {
        for alignment in [Alignment::Relative, Alignment::Absolute { width: 80 }] {
            for c in build_candidates(&entries(), alignment) {
                assert_eq!(split_display(&c.display).unwrap(), c.entry);
            }
        }
    }

    #[test]
    fn test_split_rejects_single_field() {
        assert!(split_display("nospace").is_err());
        assert!(split_display("trailing   ").is_err());
    }

    #[test]
    fn test_resolve_picks_selected() {
        let host = ScriptedHost::new().with_selection(Some(2));
        let candidates = build_candidates(&entries(), Alignment::Relative);

        let chosen = resolve(&host, "show", &candidates).unwrap();
        assert_eq!(chosen, Entry::new("github.com", "octocat").unwrap());
    }

    #[test]
    fn test_resolve_cancelled() {
        let host = ScriptedHost::new().with_selection(None);
        let candidates = build_candidates(&entries(), Alignment::Relative);

        assert!(resolve(&host, "show", &candidates).unwrap_err().is_aborted());
    }

    #[test]
    fn test_resolve_empty_store() {
        let host = ScriptedHost::new();
        assert!(resolve(&host, "show", &[]).unwrap_err().is_not_found());
    }
}
