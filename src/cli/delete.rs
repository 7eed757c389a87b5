//! Delete workflow

use crate::error::PaResult;

use super::target::{confirm_or_abort, resolve_existing};
use super::{Context, Outcome};

pub fn run(ctx: &Context<'_>, site: Option<String>, account: Option<String>) -> PaResult<Outcome> {
    let entry = resolve_existing(ctx, site, account, "Delete")?;

    confirm_or_abort(ctx, &format!("Delete {}?", entry))?;
    ctx.service.delete(&entry)?;

    Ok(Outcome::Deleted(entry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::testing::{entry, Fixture};
    use crate::ui::testing::ScriptedHost;

    fn ctx<'a>(fixture: &'a Fixture, host: &'a ScriptedHost) -> Context<'a> {
        Context {
            host,
            service: fixture.service(),
            settings: &fixture.settings,
        }
    }

    #[test]
    fn test_delete_confirmed() {
        let fixture = Fixture::with_entries(&[("acme.com", "alice", "pw"), ("acme.com", "bob", "pw")]);
        let host = ScriptedHost::new().with_confirm(true);

        let outcome = run(
            &ctx(&fixture, &host),
            Some("acme.com".into()),
            Some("alice".into()),
        )
        .unwrap();

        assert_eq!(outcome, Outcome::Deleted(entry("acme.com", "alice")));
        assert!(!fixture.service().exists(&entry("acme.com", "alice")));
        assert!(fixture.service().exists(&entry("acme.com", "bob")));
        assert!(fixture
            .service()
            .show(&entry("acme.com", "alice"))
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_delete_declined_leaves_store_unchanged() {
        let fixture = Fixture::with_entries(&[("acme.com", "alice", "pw")]);
        let before = fixture.snapshot();
        let host = ScriptedHost::new().with_confirm(false);

        let err = run(
            &ctx(&fixture, &host),
            Some("acme.com".into()),
            Some("alice".into()),
        )
        .unwrap_err();

        assert!(err.is_aborted());
        assert_eq!(fixture.snapshot(), before);
    }

    #[test]
    fn test_delete_missing_is_not_found() {
        let fixture = Fixture::new();
        let host = ScriptedHost::new().with_confirm(true);

        let err = run(
            &ctx(&fixture, &host),
            Some("acme.com".into()),
            Some("alice".into()),
        )
        .unwrap_err();

        assert!(err.is_not_found());
        // Nothing to confirm when the target doesn't exist
        assert!(host.asked.borrow().is_empty());
    }

    #[test]
    fn test_delete_via_selector() {
        let fixture = Fixture::with_entries(&[("a", "one", "pw"), ("b", "two", "pw")]);
        let host = ScriptedHost::new().with_selection(Some(1)).with_confirm(true);

        run(&ctx(&fixture, &host), None, None).unwrap();

        assert!(fixture.service().exists(&entry("a", "one")));
        assert!(!fixture.service().exists(&entry("b", "two")));
    }
}
