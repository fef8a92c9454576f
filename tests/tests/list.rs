use tests::prelude::*;

use sitestore::kinds::tool;

async fn seed(t: &Fixture, titles: &[&str]) {
    let cx = maintain("site-a");
    for &title in titles {
        let launch = format!("https://tool.example/{}", title.to_lowercase());
        let input = input([
            ("title", title),
            ("launch", launch.as_str()),
            ("consumerkey", "key"),
            ("secret", "secret"),
        ]);
        assert_ok!(t.db.insert(tool::TABLE, &cx, &input).await);
    }
}

fn titles(rows: &[Record]) -> Vec<&str> {
    rows.iter().filter_map(|row| row.get_str("title")).collect()
}

#[test]
fn search_matches_any_text_column() {
    run(async {
        let t = Fixture::new().await;
        seed(&t, &["Quiz", "Forum", "Wiki", "Quiz_2"]).await;
        let cx = guest("site-a");

        let rows = assert_ok!(
            t.db.list(tool::TABLE, &cx, &ListQuery::new().search("quiz"))
                .await
        );
        assert_eq!(titles(&rows), ["Quiz", "Quiz_2"]);

        // Matches the launch URL, not the title
        let rows = assert_ok!(
            t.db.list(tool::TABLE, &cx, &ListQuery::new().search("example/forum"))
                .await
        );
        assert_eq!(titles(&rows), ["Forum"]);

        // Wildcards in the term are literal
        let rows = assert_ok!(
            t.db.list(tool::TABLE, &cx, &ListQuery::new().search("z_"))
                .await
        );
        assert_eq!(titles(&rows), ["Quiz_2"]);

        // A blank term lists everything
        let rows = assert_ok!(
            t.db.list(tool::TABLE, &cx, &ListQuery::new().search("   "))
                .await
        );
        assert_eq!(rows.len(), 4);
    });
}

#[test]
fn order_and_range() {
    run(async {
        let t = Fixture::new().await;
        seed(&t, &["B", "D", "A", "C"]).await;
        let cx = guest("site-a");

        let query = ListQuery::new().order_by("title", Direction::Desc);
        let rows = assert_ok!(t.db.list(tool::TABLE, &cx, &query).await);
        assert_eq!(titles(&rows), ["D", "C", "B", "A"]);

        let query = ListQuery::new()
            .order_by("title", Direction::Asc)
            .range(1, 2);
        let rows = assert_ok!(t.db.list(tool::TABLE, &cx, &query).await);
        assert_eq!(titles(&rows), ["B", "C"]);

        let query = ListQuery::new().range(3, 3);
        let rows = assert_ok!(t.db.list(tool::TABLE, &cx, &query).await);
        assert_eq!(titles(&rows), ["C"]);
    });
}

#[test]
fn open_ended_range() {
    run(async {
        let t = Fixture::new().await;
        seed(&t, &["A", "B", "C"]).await;
        let cx = maintain("site-a");

        let rows = assert_ok!(
            t.db.list(tool::TABLE, &cx, &ListQuery::new().range(0, u64::MAX))
                .await
        );
        assert_eq!(titles(&rows), ["A", "B", "C"]);

        let rows = assert_ok!(
            t.db.list(tool::TABLE, &cx, &ListQuery::new().range(1, u64::MAX))
                .await
        );
        assert_eq!(titles(&rows), ["B", "C"]);

        let rows = assert_ok!(
            t.db.list(tool::TABLE, &cx, &ListQuery::new().range(u64::MAX, u64::MAX))
                .await
        );
        assert!(rows.is_empty());
    });
}

#[test]
fn bad_queries_are_contract_violations() {
    run(async {
        let t = Fixture::new().await;
        let cx = admin();

        for query in [
            ListQuery::new().order_by("title; DROP TABLE lti_tools", Direction::Asc),
            ListQuery::new().order_by("frame_header", Direction::Asc),
            ListQuery::new().range(5, 4),
        ] {
            let err = assert_err!(t.db.list(tool::TABLE, &cx, &query).await);
            assert!(err.is_contract_violation(), "{err}");
        }

        assert!(t.log.is_empty());
    });
}
