//! List workflow
//!
//! Prints the same aligned lines the selector shows.

use crate::error::PaResult;
use crate::select::{build_candidates, Alignment};

use super::{Context, Outcome};

pub fn run(ctx: &Context<'_>) -> PaResult<Outcome> {
    let entries = ctx.service.list()?;
    let alignment = Alignment::from_mode(ctx.settings.align, ctx.host.surface_width());

    let lines = build_candidates(&entries, alignment)
        .into_iter()
        .map(|c| c.display)
        .collect();

    Ok(Outcome::Listed(lines))
}
