//! Entry naming scheme
//!
//! Maps a (site, account) pair to the file name `<site>:<account>.age` and
//! back. Sites and accounts may not contain the separator or whitespace, which
//! keeps the mapping reversible.

use crate::error::{PaError, PaResult};
use crate::models::Entry;

/// Separates site from account inside a file name
pub const SEPARATOR: char = ':';

/// Extension carried by every ciphertext file
pub const EXTENSION: &str = "age";

/// Check one identifier field against the naming rules
pub fn validate_identifier(field: &str, value: &str) -> PaResult<()> {
    if value.is_empty() {
        return Err(PaError::InvalidIdentifier(format!("{} cannot be empty", field)));
    }
    if value.contains(SEPARATOR) {
        return Err(PaError::InvalidIdentifier(format!(
            "{} '{}' contains '{}'",
            field, value, SEPARATOR
        )));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(PaError::InvalidIdentifier(format!(
            "{} '{}' contains whitespace",
            field, value
        )));
    }
    Ok(())
}

/// Check a site, which also leads the file name
///
/// A leading `.` would make the file hidden, and hidden files are never
/// listed, so such a site is rejected up front.
pub fn validate_site(value: &str) -> PaResult<()> {
    validate_identifier("site", value)?;
    if value.starts_with('.') {
        return Err(PaError::InvalidIdentifier(format!(
            "site '{}' starts with '.'",
            value
        )));
    }
    Ok(())
}

/// Encode a site and account into a file name
pub fn encode(site: &str, account: &str) -> PaResult<String> {
    Ok(file_name(&Entry::new(site, account)?))
}

/// File name of an already validated entry
pub(crate) fn file_name(entry: &Entry) -> String {
    format!(
        "{}{}{}.{}",
        entry.site(),
        SEPARATOR,
        entry.account(),
        EXTENSION
    )
}

/// Decode a file name back into an entry
///
/// Returns `MalformedEntry` for names that lack the extension, lack a
/// separator, or whose halves break the identifier rules. Callers decide
/// whether that is fatal.
pub fn decode(file_name: &str) -> PaResult<Entry> {
    let malformed = || PaError::MalformedEntry(file_name.to_string());

    let stem = file_name
        .strip_suffix(EXTENSION)
        .and_then(|s| s.strip_suffix('.'))
        .ok_or_else(malformed)?;

    let (site, account) = stem.split_once(SEPARATOR).ok_or_else(malformed)?;

    Entry::new(site, account).map_err(|_| malformed())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        assert_eq!(encode("acme.com", "alice").unwrap(), "acme.com:alice.age");
    }

    #[test]
    fn test_encode_rejects_space() {
        assert!(matches!(
            encode("a b", "c"),
            Err(PaError::InvalidIdentifier(_))
        ));
        assert!(matches!(
            encode("a", "c\td"),
            Err(PaError::InvalidIdentifier(_))
        ));
    }

    #[test]
    fn test_encode_rejects_separator_and_empty() {
        assert!(encode("a:b", "c").is_err());
        assert!(encode("a", ":").is_err());
        assert!(encode("", "c").is_err());
        assert!(encode("a", "").is_err());
    }

    #[test]
    fn test_site_cannot_be_hidden() {
        assert!(matches!(
            encode(".env", "me"),
            Err(PaError::InvalidIdentifier(_))
        ));
        assert!(matches!(
            decode(".env:me.age"),
            Err(PaError::MalformedEntry(_))
        ));
        // Only the site leads the file name
        assert_eq!(encode("env", ".me").unwrap(), "env:.me.age");
    }

    #[test]
    fn test_round_trip() {
        let pairs = [
            ("acme.com", "alice"),
            ("example.org", "bob@example.org"),
            ("x", "y"),
            ("bank-é", "ünïcode_user"),
            ("a.age", "b.age"),
        ];
        for (site, account) in pairs {
            let name = encode(site, account).unwrap();
            let entry = decode(&name).unwrap();
            assert_eq!((entry.site(), entry.account()), (site, account));
        }
    }

    #[test]
    fn test_decode_malformed() {
        for name in [
            "nosplit.age",
            "acme.com:alice",
            "acme.com:alice.txt",
            ":alice.age",
            "acme.com:.age",
            "a:b:c.age",
            "a b:c.age",
            ".age",
        ] {
            assert!(
                matches!(decode(name), Err(PaError::MalformedEntry(_))),
                "{} should be malformed",
                name
            );
        }
    }
}
