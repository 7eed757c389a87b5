//! Show workflow
//!
//! Decrypts an entry and hands the password to the clipboard. The password
//! is never printed.

use crate::error::PaResult;

use super::target::resolve_existing;
use super::{Context, Outcome};

pub fn run(ctx: &Context<'_>, site: Option<String>, account: Option<String>) -> PaResult<Outcome> {
    let entry = resolve_existing(ctx, site, account, "Show")?;

    let secret = ctx.service.show(&entry)?;
    ctx.host.copy_to_clipboard(&secret)?;

    Ok(Outcome::Copied(entry))
}
