use tests::prelude::*;

use sitestore::kinds::tool;

fn tool_input(title: &str) -> Input {
    input([
        ("title", title),
        ("launch", "https://tool.example/launch"),
        ("consumerkey", "key"),
        ("secret", "secret"),
    ])
}

#[test]
fn writes_require_update_rights() {
    run(async {
        let t = Fixture::new().await;
        let owner = maintain("site-a");
        let key = assert_ok!(t.db.insert(tool::TABLE, &owner, &tool_input("A")).await);
        t.log.clear();

        for cx in [guest("site-a"), guest("!admin")] {
            let err = assert_err!(t.db.insert(tool::TABLE, &cx, &tool_input("B")).await);
            assert!(err.is_permission(), "{err}");
            assert_eq!(err.severity(), Severity::Recoverable);

            let err = assert_err!(
                t.db.update(tool::TABLE, &cx, key, &input([("title", "C")]))
                    .await
            );
            assert!(err.is_permission(), "{err}");

            let err = assert_err!(t.db.delete(tool::TABLE, &cx, key).await);
            assert!(err.is_permission(), "{err}");
        }

        // Denied before reaching the store
        assert!(t.log.is_empty());
    });
}

#[test]
fn tenants_are_isolated() {
    run(async {
        let t = Fixture::new().await;
        let a = maintain("site-a");
        let b = maintain("site-b");

        let key = assert_ok!(t.db.insert(tool::TABLE, &a, &tool_input("A")).await);

        assert_none!(assert_ok!(t.db.get(tool::TABLE, &b, key).await));

        let err = assert_err!(
            t.db.update(tool::TABLE, &b, key, &input([("title", "stolen")]))
                .await
        );
        assert!(err.is_record_not_found(), "{err}");

        let err = assert_err!(t.db.delete(tool::TABLE, &b, key).await);
        assert!(err.is_record_not_found(), "{err}");

        let row = assert_some!(assert_ok!(t.db.get(tool::TABLE, &a, key).await));
        assert_eq!(row.get_str("title"), Some("A"));
    });
}

#[test]
fn ownership_is_checked_before_input() {
    run(async {
        let t = Fixture::new().await;
        let a = maintain("site-a");
        let b = maintain("site-b");
        let bad = input([("frameheight", "tall")]);

        let key = assert_ok!(t.db.insert(tool::TABLE, &a, &tool_input("A")).await);
        let shared = assert_ok!(t.db.insert(tool::TABLE, &admin(), &tool_input("S")).await);

        let err = assert_err!(t.db.update(tool::TABLE, &b, key, &bad).await);
        assert!(err.is_record_not_found(), "{err}");

        let err = assert_err!(t.db.update(tool::TABLE, &b, 9999, &bad).await);
        assert!(err.is_record_not_found(), "{err}");

        let err = assert_err!(t.db.update(tool::TABLE, &b, shared, &bad).await);
        assert!(err.is_permission(), "{err}");

        // The owner gets the validation failure, and nothing is written
        t.log.clear();
        let err = assert_err!(t.db.update(tool::TABLE, &a, key, &bad).await);
        assert!(err.is_validation(), "{err}");
        assert_eq!(t.log.statements().len(), 1);

        let row = assert_some!(assert_ok!(t.db.get(tool::TABLE, &a, key).await));
        assert_eq!(row.get_str("title"), Some("A"));
    });
}

#[test]
fn admin_reaches_every_tenant() {
    run(async {
        let t = Fixture::new().await;
        let key = assert_ok!(
            t.db.insert(tool::TABLE, &maintain("site-a"), &tool_input("A"))
                .await
        );

        let cx = admin();
        let row = assert_some!(assert_ok!(t.db.get(tool::TABLE, &cx, key).await));
        assert_eq!(row.get_str("SITE_ID"), Some("site-a"));

        assert_eq!(
            assert_ok!(
                t.db.update(tool::TABLE, &cx, key, &input([("title", "B")]))
                    .await
            ),
            1
        );
        assert_eq!(assert_ok!(t.db.delete(tool::TABLE, &cx, key).await), 1);
    });
}

#[test]
fn insert_stamps_the_callers_tenant() {
    run(async {
        let t = Fixture::new().await;
        let cx = maintain("site-a");

        let mut forged = tool_input("A");
        forged.insert("SITE_ID", "site-b");

        let key = assert_ok!(t.db.insert(tool::TABLE, &cx, &forged).await);
        let row = assert_some!(assert_ok!(t.db.get(tool::TABLE, &admin(), key).await));
        assert_eq!(row.get_str("SITE_ID"), Some("site-a"));

        // Admins choose the tenant themselves
        let key = assert_ok!(t.db.insert(tool::TABLE, &admin(), &forged).await);
        let row = assert_some!(assert_ok!(t.db.get(tool::TABLE, &admin(), key).await));
        assert_eq!(row.get_str("SITE_ID"), Some("site-b"));
    });
}

#[test]
fn shared_rows_are_readable_but_not_writable() {
    run(async {
        let t = Fixture::new().await;

        // Inserted by an admin without a tenant
        let key = assert_ok!(t.db.insert(tool::TABLE, &admin(), &tool_input("Shared")).await);

        for cx in [guest("site-a"), maintain("site-b")] {
            let row = assert_some!(assert_ok!(t.db.get(tool::TABLE, &cx, key).await));
            assert_eq!(row.get("SITE_ID"), Some(&Value::Null));
        }

        let err = assert_err!(
            t.db.update(tool::TABLE, &maintain("site-a"), key, &input([("title", "Mine")]))
                .await
        );
        assert!(err.is_permission(), "{err}");

        let err = assert_err!(t.db.delete(tool::TABLE, &maintain("site-a"), key).await);
        assert!(err.is_permission(), "{err}");
    });
}

#[test]
fn list_returns_own_and_shared_rows_in_key_order() {
    run(async {
        let t = Fixture::new().await;

        let shared = assert_ok!(t.db.insert(tool::TABLE, &admin(), &tool_input("Shared")).await);
        let a1 = assert_ok!(
            t.db.insert(tool::TABLE, &maintain("site-a"), &tool_input("A1"))
                .await
        );
        assert_ok!(
            t.db.insert(tool::TABLE, &maintain("site-b"), &tool_input("B1"))
                .await
        );
        let a2 = assert_ok!(
            t.db.insert(tool::TABLE, &maintain("site-a"), &tool_input("A2"))
                .await
        );

        let rows = assert_ok!(
            t.db.list(tool::TABLE, &guest("site-a"), &ListQuery::new())
                .await
        );
        let keys = rows.iter().filter_map(Record::id).collect::<Vec<_>>();
        assert_eq!(keys, [shared, a1, a2]);

        let all = assert_ok!(t.db.list(tool::TABLE, &admin(), &ListQuery::new()).await);
        assert_eq!(all.len(), 4);
    });
}

#[test]
fn tables_without_tenant_column_are_admin_only() {
    run(async {
        let t = Fixture::new().await;
        let mapping = input([
            ("matchurl", "https://old.example"),
            ("launch", "https://new.example"),
        ]);

        let err = assert_err!(
            t.db.insert(kinds::mapping::TABLE, &maintain("site-a"), &mapping)
                .await
        );
        assert!(err.is_permission());

        let err = assert_err!(
            t.db.list(kinds::mapping::TABLE, &maintain("site-a"), &ListQuery::new())
                .await
        );
        assert!(err.is_permission());

        let key = assert_ok!(t.db.insert(kinds::mapping::TABLE, &admin(), &mapping).await);
        assert_some!(assert_ok!(t.db.get(kinds::mapping::TABLE, &admin(), key).await));
    });
}
