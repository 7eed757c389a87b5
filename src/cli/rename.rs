//! Rename workflow
//!
//! Moves an entry to a new site and/or account. The ciphertext is moved as
//! is, so no decryption takes place.

use crate::error::{PaError, PaResult};
use crate::models::Entry;

use super::target::{confirm_or_abort, resolve_existing};
use super::{Context, Outcome};

pub fn run(
    ctx: &Context<'_>,
    site: Option<String>,
    account: Option<String>,
    new_site: Option<String>,
    new_account: Option<String>,
) -> PaResult<Outcome> {
    let from = resolve_existing(ctx, site, account, "Rename")?;

    let new_site = new_value(ctx, new_site, "New site", from.site())?;
    let new_account = new_value(ctx, new_account, "New account", from.account())?;
    let to = Entry::new(new_site, new_account)?;

    if to == from {
        return Ok(Outcome::Unchanged(from));
    }
    if ctx.service.exists(&to) {
        return Err(PaError::conflict(to.to_string()));
    }

    confirm_or_abort(ctx, &format!("Rename {} to {}?", from, to))?;
    ctx.service.rename(&from, &to)?;

    Ok(Outcome::Renamed { from, to })
}

/// Argument, or a prompt where an empty answer keeps the current value
fn new_value(
    ctx: &Context<'_>,
    value: Option<String>,
    label: &str,
    current: &str,
) -> PaResult<String> {
    if let Some(v) = value {
        return Ok(v);
    }
    let answer = ctx.host.prompt(&format!("{} [{}]", label, current))?;
    let answer = answer.trim();
    if answer.is_empty() {
        Ok(current.to_string())
    } else {
        Ok(answer.to_string())
    }
}
