use tests::prelude::*;

use sitestore::SiteAuthority;

struct Session {
    site: &'static str,
}

impl SiteAuthority for Session {
    fn current_site(&self) -> String {
        self.site.to_string()
    }

    fn can_update(&self, site: &str) -> bool {
        site == self.site
    }
}

#[test]
fn connect_by_url() {
    run(async {
        let db = assert_ok!(
            Db::builder()
                .register_all(assert_ok!(kinds::default_tables()))
                .auto_ddl(true)
                .connect("sqlite::memory:")
                .await
        );

        assert_eq!(db.tables().count(), 3);
        assert!(format!("{db:?}").contains("sqlite::memory:"));

        let cx = db.context("site-a", true);
        let key = assert_ok!(
            db.insert(
                kinds::mapping::TABLE,
                &db.context("!admin", true),
                &input([("matchurl", "a"), ("launch", "b")])
            )
            .await
        );
        assert!(assert_err!(db.get(kinds::mapping::TABLE, &cx, key).await).is_permission());
    });
}

#[test]
fn unsupported_scheme() {
    run(async {
        let err = assert_err!(Db::builder().connect("postgresql://localhost/lti").await);
        assert!(err.to_string().contains("unsupported database"), "{err}");
    });
}

#[test]
fn duplicate_tables_are_rejected() {
    run(async {
        let tool = assert_ok!(kinds::tool::table_def());
        let err = assert_err!(
            Db::builder()
                .register(tool.clone())
                .register(tool)
                .connect("sqlite::memory:")
                .await
        );
        assert!(err.is_invalid_model(), "{err}");
    });
}

#[test]
fn custom_admin_site() {
    run(async {
        let t = Fixture::with(|builder| {
            builder.admin_site("root");
        })
        .await;

        let root = t.db.resolve_context(&Session { site: "root" });
        assert!(root.is_admin());

        let site = t.db.resolve_context(&Session { site: "site-a" });
        assert!(site.is_maintain());
        assert!(!site.is_admin());

        // The default admin tenant is an ordinary tenant here
        assert!(!t.db.context("!admin", true).is_admin());

        let key = assert_ok!(
            t.db.insert(
                kinds::mapping::TABLE,
                &root,
                &input([("matchurl", "a"), ("launch", "b")])
            )
            .await
        );
        assert_some!(assert_ok!(t.db.get(kinds::mapping::TABLE, &root, key).await));
    });
}
