//! Entry model
//!
//! An entry names one stored credential by its site and account.

use std::fmt;

use crate::error::PaResult;
use crate::naming;

/// One (site, account) credential record
///
/// Both fields are non-empty and free of `:` and whitespace, and the site
/// does not start with `.`. The only way to build an `Entry` is through
/// [`Entry::new`], which enforces that.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Entry {
    site: String,
    account: String,
}

impl Entry {
    /// Create a validated entry
    pub fn new(site: impl Into<String>, account: impl Into<String>) -> PaResult<Self> {
        let site = site.into();
        let account = account.into();
        naming::validate_site(&site)?;
        naming::validate_identifier("account", &account)?;
        Ok(Self { site, account })
    }

    pub fn site(&self) -> &str {
        &self.site
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    /// The on-disk file name for this entry
    pub fn file_name(&self) -> String {
        naming::file_name(self)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.site, naming::SEPARATOR, self.account)
    }
}
