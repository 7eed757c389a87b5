//! Add workflow
//!
//! Creates a new entry. Identifiers are validated and checked for collisions
//! before any password is asked for, so a bad name never costs a prompt.

use crate::error::{PaError, PaResult};
use crate::models::Entry;

use super::target::{identifier_or_prompt, obtain_password};
use super::{Context, Outcome};

pub fn run(
    ctx: &Context<'_>,
    site: Option<String>,
    account: Option<String>,
    generate: bool,
) -> PaResult<Outcome> {
    let site = identifier_or_prompt(ctx, site, "Site")?;
    let account = identifier_or_prompt(ctx, account, "Account")?;
    let entry = Entry::new(site, account)?;

    if ctx.service.exists(&entry) {
        return Err(PaError::conflict(entry.to_string()));
    }

    let (password, generated) = obtain_password(ctx, generate)?;
    ctx.service.add(&entry, &password)?;

    Ok(Outcome::Added { entry, generated })
}
