//! Edit workflow
//!
//! Re-encrypts an existing entry under the same name with a new password.

use crate::error::PaResult;

use super::target::{confirm_or_abort, obtain_password, resolve_existing};
use super::{Context, Outcome};

pub fn run(
    ctx: &Context<'_>,
    site: Option<String>,
    account: Option<String>,
    generate: bool,
) -> PaResult<Outcome> {
    let entry = resolve_existing(ctx, site, account, "Edit")?;

    confirm_or_abort(ctx, &format!("Replace the password for {}?", entry))?;

    let (password, generated) = obtain_password(ctx, generate)?;
    ctx.service.replace(&entry, &password)?;

    Ok(Outcome::Edited { entry, generated })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::testing::{entry, Fixture};
    use crate::error::PaError;
    use crate::ui::testing::ScriptedHost;

    fn ctx<'a>(fixture: &'a Fixture, host: &'a ScriptedHost) -> Context<'a> {
        Context {
            host,
            service: fixture.service(),
            settings: &fixture.settings,
        }
    }

    #[test]
    fn test_edit_replaces_password() {
        let fixture = Fixture::with_entries(&[("acme.com", "alice", "old")]);
        let host = ScriptedHost::new()
            .with_confirm(true)
            .with_confirm(false)
            .with_secret("new")
            .with_secret("new");

        let outcome = run(
            &ctx(&fixture, &host),
            Some("acme.com".into()),
            Some("alice".into()),
            false,
        )
        .unwrap();

        assert_eq!(
            outcome,
            Outcome::Edited {
                entry: entry("acme.com", "alice"),
                generated: false
            }
        );
        assert_eq!(fixture.password("acme.com", "alice"), "new");
    }

    #[test]
    fn test_edit_declined_leaves_store_unchanged() {
        let fixture = Fixture::with_entries(&[("acme.com", "alice", "old"), ("b", "c", "d")]);
        let before = fixture.snapshot();
        let host = ScriptedHost::new().with_confirm(false);

        let err = run(
            &ctx(&fixture, &host),
            Some("acme.com".into()),
            Some("alice".into()),
            true,
        )
        .unwrap_err();

        assert!(err.is_aborted());
        assert_eq!(fixture.snapshot(), before);
    }

    #[test]
    fn test_edit_mismatch_keeps_old_password() {
        let fixture = Fixture::with_entries(&[("acme.com", "alice", "old")]);
        let host = ScriptedHost::new()
            .with_confirm(true)
            .with_confirm(false)
            .with_secret("new1")
            .with_secret("new2");

        let err = run(
            &ctx(&fixture, &host),
            Some("acme.com".into()),
            Some("alice".into()),
            false,
        )
        .unwrap_err();

        assert!(matches!(err, PaError::PasswordMismatch));
        assert_eq!(fixture.password("acme.com", "alice"), "old");
    }

    #[test]
    fn test_edit_generated() {
        let fixture = Fixture::with_entries(&[("acme.com", "alice", "old")]);
        let host = ScriptedHost::new().with_confirm(true);

        run(
            &ctx(&fixture, &host),
            Some("acme.com".into()),
            Some("alice".into()),
            true,
        )
        .unwrap();

        assert_eq!(fixture.password("acme.com", "alice").chars().count(), 50);
    }

    #[test]
    fn test_edit_missing_is_not_found() {
        let fixture = Fixture::new();
        let host = ScriptedHost::new().with_confirm(true);

        let err = run(
            &ctx(&fixture, &host),
            Some("acme.com".into()),
            Some("alice".into()),
            true,
        )
        .unwrap_err();

        assert!(err.is_not_found());
        assert!(fixture.snapshot().is_empty());
    }
}
