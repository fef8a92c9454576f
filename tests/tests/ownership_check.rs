use tests::prelude::*;

use sitestore::{driver::operation::Transaction, kinds::tool};

fn tool_input(title: &str) -> Input {
    input([
        ("title", title),
        ("launch", "https://tool.example/launch"),
        ("consumerkey", "key"),
        ("secret", "secret"),
    ])
}

#[test]
fn scoped_write_runs_in_a_transaction() {
    run(async {
        let t = Fixture::new().await;
        let cx = maintain("site-a");
        let key = assert_ok!(t.db.insert(tool::TABLE, &cx, &tool_input("A")).await);
        t.log.clear();

        assert_ok!(
            t.db.update(tool::TABLE, &cx, key, &input([("title", "B")]))
                .await
        );

        assert_eq!(
            t.log.transactions(),
            [Transaction::Start, Transaction::Commit]
        );

        // Ownership check, then the write
        let statements = t.log.statements();
        assert_eq!(statements.len(), 2);
        assert!(statements[0].is_query());
        assert!(statements[1].as_update().is_some());
    });
}

#[test]
fn failed_check_rolls_back() {
    run(async {
        let t = Fixture::new().await;
        let key = assert_ok!(t.db.insert(tool::TABLE, &admin(), &tool_input("Shared")).await);
        t.log.clear();

        let err = assert_err!(t.db.delete(tool::TABLE, &maintain("site-a"), key).await);
        assert!(err.is_permission());

        assert_eq!(
            t.log.transactions(),
            [Transaction::Start, Transaction::Rollback]
        );
        assert_eq!(t.log.statements().len(), 1);
    });
}

#[test]
fn admin_writes_skip_the_check() {
    run(async {
        let t = Fixture::new().await;
        let key = assert_ok!(t.db.insert(tool::TABLE, &admin(), &tool_input("A")).await);
        t.log.clear();

        assert_ok!(t.db.delete(tool::TABLE, &admin(), key).await);

        assert!(t.log.transactions().is_empty());
        assert_eq!(t.log.statements().len(), 1);
    });
}

#[test]
fn check_can_run_outside_a_transaction() {
    run(async {
        let t = Fixture::with(|builder| {
            builder.transactional_ownership_check(false);
        })
        .await;
        let cx = maintain("site-a");
        let key = assert_ok!(t.db.insert(tool::TABLE, &cx, &tool_input("A")).await);
        t.log.clear();

        assert_ok!(t.db.delete(tool::TABLE, &cx, key).await);

        assert!(t.log.transactions().is_empty());
        assert_eq!(t.log.statements().len(), 2);
    });
}

#[test]
fn store_failures_surface_as_driver_errors() {
    run(async {
        // Registered but never created
        let t = Fixture::with(|builder| {
            builder.auto_ddl(false);
        })
        .await;

        let err = assert_err!(t.db.insert(tool::TABLE, &admin(), &tool_input("A")).await);
        assert!(err.is_driver(), "{err}");
        assert_eq!(err.severity(), Severity::Fatal);
        assert_eq!(t.log.failures(), 1);
    });
}
