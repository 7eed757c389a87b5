//! Shared workflow steps: picking the target entry and obtaining a password

use crate::crypto::{random_password, Secret};
use crate::error::{PaError, PaResult};
use crate::models::Entry;
use crate::select::{self, Alignment};
use crate::services::confirm_passwords;

use super::Context;

/// Resolve an existing entry from optional site/account arguments
///
/// With both given the entry is used as is. Otherwise the entries are
/// narrowed by whatever was given; a single survivor of a narrowed list is
/// taken without asking, anything else goes through the selector.
pub(super) fn resolve_existing(
    ctx: &Context<'_>,
    site: Option<String>,
    account: Option<String>,
    prompt: &str,
) -> PaResult<Entry> {
    if let (Some(site), Some(account)) = (&site, &account) {
        let entry = Entry::new(site.as_str(), account.as_str())?;
        ctx.service.require(&entry)?;
        return Ok(entry);
    }

    let narrowed = site.is_some() || account.is_some();
    let entries: Vec<Entry> = ctx
        .service
        .list()?
        .into_iter()
        .filter(|e| site.as_deref().map_or(true, |s| e.site() == s))
        .filter(|e| account.as_deref().map_or(true, |a| e.account() == a))
        .collect();

    if narrowed && entries.len() == 1 {
        return Ok(entries[0].clone());
    }
    if entries.is_empty() {
        let filter = site.or(account).unwrap_or_else(|| "store is empty".to_string());
        return Err(PaError::not_found(filter));
    }

    let alignment = Alignment::from_mode(ctx.settings.align, ctx.host.surface_width());
    let candidates = select::build_candidates(&entries, alignment);
    select::resolve(ctx.host, prompt, &candidates)
}

/// Take an identifier from the arguments or ask for it
pub(super) fn identifier_or_prompt(
    ctx: &Context<'_>,
    value: Option<String>,
    label: &str,
) -> PaResult<String> {
    match value {
        Some(v) => Ok(v),
        None => Ok(ctx.host.prompt(label)?.trim().to_string()),
    }
}

/// Get a password by generating one or by asking for it twice
///
/// Returns the password and whether it was generated.
pub(super) fn obtain_password(ctx: &Context<'_>, generate: bool) -> PaResult<(Secret, bool)> {
    let generate = generate || ctx.host.confirm("Generate a password?")?;

    if generate {
        let alphabet = ctx.settings.alphabet()?;
        let password = random_password(ctx.settings.password_length, &alphabet)?;
        return Ok((password, true));
    }

    let first = ctx.host.prompt_secret("Enter password")?;
    let second = ctx.host.prompt_secret("Confirm password")?;
    Ok((confirm_passwords(first, second)?, false))
}

/// Ask for confirmation; a "no" becomes `Aborted`
pub(super) fn confirm_or_abort(ctx: &Context<'_>, question: &str) -> PaResult<()> {
    if ctx.host.confirm(question)? {
        Ok(())
    } else {
        Err(PaError::Aborted)
    }
}
