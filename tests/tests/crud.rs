use tests::prelude::*;

use sitestore::kinds::tool;

fn quiz() -> Input {
    input([
        ("title", "Quiz"),
        ("launch", "https://tool.example/launch"),
        ("consumerkey", "key"),
        ("secret", "secret"),
        ("frameheight", "400"),
        ("allowframeheight", "on"),
    ])
}

#[test]
fn insert_then_get_round_trips() {
    run(async {
        let t = Fixture::new().await;
        let cx = maintain("site-a");

        let key = assert_ok!(t.db.insert(tool::TABLE, &cx, &quiz()).await);
        assert!(key >= 1);

        let row = assert_some!(assert_ok!(t.db.get(tool::TABLE, &cx, key).await));

        assert_eq!(row.id(), Some(key));
        assert_eq!(row.columns().next(), Some("id"));
        assert_eq!(row.get_str("title"), Some("Quiz"));
        assert_eq!(row.get_i64("frameheight"), Some(400));
        assert_eq!(row.get_i64("allowframeheight"), Some(1));
        assert_eq!(row.get_str("SITE_ID"), Some("site-a"));
        assert_eq!(row.get("description"), Some(&Value::Null));
        assert!(matches!(row.get("created_at"), Some(Value::Timestamp(_))));
        assert!(matches!(row.get("updated_at"), Some(Value::Timestamp(_))));
    });
}

#[test]
fn update_is_partial() {
    run(async {
        let t = Fixture::new().await;
        let cx = maintain("site-a");

        let key = assert_ok!(t.db.insert(tool::TABLE, &cx, &quiz()).await);
        let before = assert_some!(assert_ok!(t.db.get(tool::TABLE, &cx, key).await));

        let count = assert_ok!(
            t.db.update(tool::TABLE, &cx, key, &input([("frameheight", "900")]))
                .await
        );
        assert_eq!(count, 1);

        let after = assert_some!(assert_ok!(t.db.get(tool::TABLE, &cx, key).await));
        assert_eq!(after.get_i64("frameheight"), Some(900));
        assert_eq!(after.get_str("title"), Some("Quiz"));
        assert_eq!(after.get("created_at"), before.get("created_at"));
    });
}

#[test]
fn delete_removes_the_row() {
    run(async {
        let t = Fixture::new().await;
        let cx = maintain("site-a");

        let key = assert_ok!(t.db.insert(tool::TABLE, &cx, &quiz()).await);
        assert_eq!(assert_ok!(t.db.delete(tool::TABLE, &cx, key).await), 1);
        assert_none!(assert_ok!(t.db.get(tool::TABLE, &cx, key).await));
    });
}

#[test]
fn missing_keys_fail() {
    run(async {
        let t = Fixture::new().await;

        for cx in [admin(), maintain("site-a")] {
            assert_none!(assert_ok!(t.db.get(tool::TABLE, &cx, 42).await));

            let err = assert_err!(t.db.delete(tool::TABLE, &cx, 42).await);
            assert!(err.is_record_not_found(), "{err}");
            assert_eq!(err.severity(), Severity::Recoverable);

            let err = assert_err!(
                t.db.update(tool::TABLE, &cx, 42, &input([("title", "x")]))
                    .await
            );
            assert!(err.is_record_not_found(), "{err}");
        }
    });
}

#[test]
fn contract_violations_never_reach_the_store() {
    run(async {
        let t = Fixture::new().await;
        let cx = admin();

        let err = assert_err!(t.db.get(tool::TABLE, &cx, 0).await);
        assert!(err.is_contract_violation());
        assert_eq!(err.severity(), Severity::Fatal);

        assert!(assert_err!(t.db.delete(tool::TABLE, &cx, -3).await).is_contract_violation());
        assert!(assert_err!(t.db.get("lti_unknown", &cx, 1).await).is_contract_violation());
        assert!(
            assert_err!(t.db.insert("lti_unknown", &cx, &quiz()).await).is_contract_violation()
        );

        assert!(t.log.is_empty());
    });
}

#[test]
fn validation_errors_list_every_field() {
    run(async {
        let t = Fixture::new().await;
        let cx = maintain("site-a");

        let err = assert_err!(
            t.db.insert(
                tool::TABLE,
                &cx,
                &input([("title", ""), ("frameheight", "tall")])
            )
            .await
        );

        let fields = err
            .validation_errors()
            .unwrap()
            .iter()
            .map(|e| e.field().to_string())
            .collect::<Vec<_>>();
        assert_eq!(
            fields,
            ["title", "launch", "consumerkey", "secret", "frameheight"]
        );
        assert_eq!(err.severity(), Severity::Recoverable);

        // Nothing was written
        assert!(t.log.is_empty());
    });
}

#[test]
fn statements_bind_every_value() {
    run(async {
        let t = Fixture::new().await;
        let cx = maintain("site-a");

        let key = assert_ok!(t.db.insert(tool::TABLE, &cx, &quiz()).await);
        t.log.clear();

        assert_ok!(t.db.get(tool::TABLE, &cx, key).await);

        let sql = t.log.sql();
        assert_eq!(sql.len(), 1);

        let (text, params) = &sql[0];
        assert!(
            text.ends_with(r#"FROM "lti_tools" WHERE "id" = ?1 AND ("SITE_ID" = ?2 OR "SITE_ID" IS NULL);"#),
            "{text}"
        );
        assert!(!text.contains("site-a"));
        assert_eq!(params, &[Value::from(key), Value::from("site-a")]);
    });
}
