//! # Ledger Versioning Properties
//!
//! Tests for the append-only versioning guarantees: version chains, the
//! HISTORY/active relationship, constraint rollback, soft deletion, the
//! restart round-trip, and the documented stale-index limitation.
//!
//! ## Running Tests
//!
//! ```sh
//! cargo test --test ledger_versioning
//! ```

use ledgerdb::{Database, ExecuteResult, LedgerError, Row, Value};
use tempfile::tempdir;

fn open_db(dir: &std::path::Path) -> Database {
    Database::open(dir).expect("Failed to open database")
}

fn rows(result: ExecuteResult) -> Vec<Row> {
    match result {
        ExecuteResult::Rows(rows) => rows,
        other => panic!("expected rows, got {:?}", other),
    }
}

fn wallet_db(dir: &std::path::Path) -> Database {
    let mut db = open_db(dir);
    db.execute("CREATE TABLE wallets (wallet_id INT PRIMARY KEY, balance FLOAT) LEDGER")
        .unwrap();
    db
}

mod version_chain_tests {
    use super::*;

    #[test]
    fn n_updates_leave_one_active_row_and_versions_one_through_n_plus_one() {
        let dir = tempdir().unwrap();
        let mut db = wallet_db(dir.path());
        db.execute("INSERT INTO wallets VALUES (1, 100.0)").unwrap();

        let n = 4;
        for i in 0..n {
            let sql = format!(
                "UPDATE wallets SET balance = {}.0 WHERE wallet_id = 1",
                200 + i
            );
            db.execute(&sql).unwrap();
        }

        let history = rows(db.execute("SELECT * FROM wallets HISTORY").unwrap());
        assert_eq!(history.len(), n + 1);

        let active: Vec<&Row> = history.iter().filter(|r| r.is_active()).collect();
        assert_eq!(active.len(), 1, "exactly one version SHOULD be active");
        assert_eq!(active[0].version(), Some((n + 1) as i64));

        let versions: Vec<Option<i64>> = history.iter().map(Row::version).collect();
        let expected: Vec<Option<i64>> = (1..=(n + 1) as i64).map(Some).collect();
        assert_eq!(
            versions, expected,
            "versions SHOULD run 1..N+1 in creation order"
        );
    }

    #[test]
    fn version_counts_are_per_primary_key_group() {
        let dir = tempdir().unwrap();
        let mut db = wallet_db(dir.path());
        db.execute("INSERT INTO wallets VALUES (1, 100.0)").unwrap();
        db.execute("INSERT INTO wallets VALUES (2, 200.0)").unwrap();
        db.execute("UPDATE wallets SET balance = 150.0 WHERE wallet_id = 1").unwrap();

        let history = rows(db.execute("SELECT * FROM wallets HISTORY WHERE wallet_id = 2").unwrap());

        assert_eq!(history.len(), 1);
        assert_eq!(
            history[0].version(),
            Some(1),
            "an untouched key SHOULD stay at version 1"
        );
    }

    #[test]
    fn timestamps_are_recorded_per_version() {
        let dir = tempdir().unwrap();
        let mut db = wallet_db(dir.path());
        db.execute("INSERT INTO wallets VALUES (1, 100.0)").unwrap();
        db.execute("UPDATE wallets SET balance = 150.0 WHERE wallet_id = 1").unwrap();

        let history = rows(db.execute("SELECT * FROM wallets HISTORY").unwrap());

        for row in &history {
            let ts = row.created_at().expect("ledger row missing _created_at");
            assert!(ts.contains('T'), "timestamp SHOULD be ISO-8601, got {}", ts);
        }
    }
}

mod visibility_tests {
    use super::*;

    #[test]
    fn history_is_a_superset_and_non_history_equals_active_rows() {
        let dir = tempdir().unwrap();
        let mut db = wallet_db(dir.path());
        db.execute("INSERT INTO wallets VALUES (1, 100.0)").unwrap();
        db.execute("INSERT INTO wallets VALUES (2, 200.0)").unwrap();
        db.execute("UPDATE wallets SET balance = 150.0 WHERE wallet_id = 1").unwrap();
        db.execute("UPDATE wallets SET balance = 175.0 WHERE wallet_id = 1").unwrap();

        let current = rows(db.execute("SELECT * FROM wallets WHERE wallet_id = 1").unwrap());
        let history = rows(db.execute("SELECT * FROM wallets HISTORY WHERE wallet_id = 1").unwrap());

        assert!(history.len() >= current.len());
        assert_eq!(history.len(), 3);
        assert_eq!(current.len(), 1);
        assert!(current.iter().all(Row::is_active));
        assert_eq!(
            history.iter().filter(|r| r.is_active()).count(),
            current.len(),
            "non-HISTORY results SHOULD be exactly the active rows"
        );
    }

    #[test]
    fn history_keeps_interleaved_insertion_order() {
        let dir = tempdir().unwrap();
        let mut db = wallet_db(dir.path());
        db.execute("INSERT INTO wallets VALUES (1, 100.0)").unwrap();
        db.execute("INSERT INTO wallets VALUES (2, 200.0)").unwrap();
        db.execute("UPDATE wallets SET balance = 150.0 WHERE wallet_id = 1").unwrap();

        let history = rows(db.execute("SELECT * FROM wallets HISTORY").unwrap());
        let ids: Vec<Option<&Value>> = history.iter().map(|r| r.get("wallet_id")).collect();

        // update rewrote key 1's lineage in place: [1 v1, 1 v2, 2 v1]
        assert_eq!(
            ids,
            vec![
                Some(&Value::Int(1)),
                Some(&Value::Int(1)),
                Some(&Value::Int(2)),
            ],
            "HISTORY SHOULD keep storage order, not group by key"
        );
    }
}

mod deletion_tests {
    use super::*;

    #[test]
    fn ledger_delete_never_decreases_row_count() {
        let dir = tempdir().unwrap();
        let mut db = wallet_db(dir.path());
        db.execute("INSERT INTO wallets VALUES (1, 100.0)").unwrap();
        db.execute("INSERT INTO wallets VALUES (2, 200.0)").unwrap();

        db.execute("DELETE FROM wallets WHERE wallet_id = 1").unwrap();

        let history = rows(db.execute("SELECT * FROM wallets HISTORY").unwrap());
        assert_eq!(history.len(), 2, "ledger DELETE SHOULD retain every row");

        let current = rows(db.execute("SELECT * FROM wallets").unwrap());
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].get("wallet_id"), Some(&Value::Int(2)));
    }

    #[test]
    fn delete_terminates_the_lineage_without_a_new_version() {
        let dir = tempdir().unwrap();
        let mut db = wallet_db(dir.path());
        db.execute("INSERT INTO wallets VALUES (1, 100.0)").unwrap();
        db.execute("UPDATE wallets SET balance = 150.0 WHERE wallet_id = 1").unwrap();

        db.execute("DELETE FROM wallets WHERE wallet_id = 1").unwrap();

        let history = rows(db.execute("SELECT * FROM wallets HISTORY").unwrap());
        assert_eq!(history.len(), 2, "DELETE SHOULD NOT append a version");
        assert!(history.iter().all(|r| !r.is_active()));
    }

    #[test]
    fn unpredicated_ledger_delete_deactivates_everything() {
        let dir = tempdir().unwrap();
        let mut db = wallet_db(dir.path());
        db.execute("INSERT INTO wallets VALUES (1, 100.0)").unwrap();
        db.execute("INSERT INTO wallets VALUES (2, 200.0)").unwrap();

        db.execute("DELETE FROM wallets").unwrap();

        assert!(rows(db.execute("SELECT * FROM wallets").unwrap()).is_empty());
        assert_eq!(rows(db.execute("SELECT * FROM wallets HISTORY").unwrap()).len(), 2);
    }
}

mod guard_tests {
    use super::*;

    #[test]
    fn duplicate_primary_key_fails_and_storage_is_untouched() {
        let dir = tempdir().unwrap();
        let mut db = wallet_db(dir.path());
        db.execute("INSERT INTO wallets VALUES (1, 100.0)").unwrap();

        let err = db.execute("INSERT INTO wallets VALUES (1, 999.0)").unwrap_err();
        assert!(matches!(err, LedgerError::ConstraintViolation(col) if col == "wallet_id"));

        let history = rows(db.execute("SELECT * FROM wallets HISTORY").unwrap());
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].get("balance"), Some(&Value::Float(100.0)));
    }

    #[test]
    fn update_without_where_fails_and_storage_is_untouched() {
        let dir = tempdir().unwrap();
        let mut db = wallet_db(dir.path());
        db.execute("INSERT INTO wallets VALUES (1, 100.0)").unwrap();

        let err = db.execute("UPDATE wallets SET balance = 0.0").unwrap_err();
        assert!(matches!(err, LedgerError::MissingWhereClause));

        let history = rows(db.execute("SELECT * FROM wallets HISTORY").unwrap());
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].get("balance"), Some(&Value::Float(100.0)));
    }
}

mod persistence_tests {
    use super::*;

    #[test]
    fn active_row_set_survives_restart() {
        let dir = tempdir().unwrap();
        let before;
        {
            let mut db = wallet_db(dir.path());
            for i in 1..=5 {
                let sql = format!("INSERT INTO wallets VALUES ({}, {}.0)", i, i * 100);
                db.execute(&sql).unwrap();
            }
            db.execute("UPDATE wallets SET balance = 999.0 WHERE wallet_id = 3").unwrap();
            db.execute("DELETE FROM wallets WHERE wallet_id = 5").unwrap();
            before = rows(db.execute("SELECT * FROM wallets").unwrap());
        }

        let mut db = open_db(dir.path());
        let after = rows(db.execute("SELECT * FROM wallets").unwrap());

        assert_eq!(
            after, before,
            "the active row set SHOULD be identical after reopen"
        );
        assert_eq!(after.len(), 4);
    }

    #[test]
    fn stale_index_admits_duplicates_after_restart() {
        let dir = tempdir().unwrap();
        {
            let mut db = wallet_db(dir.path());
            db.execute("INSERT INTO wallets VALUES (1, 100.0)").unwrap();
        }

        // buckets are never rebuilt from persisted rows, so the duplicate
        // insert succeeds and joins the existing version lineage
        let mut db = open_db(dir.path());
        db.execute("INSERT INTO wallets VALUES (1, 200.0)")
            .expect("duplicate insert after reopen SHOULD succeed");

        let history = rows(db.execute("SELECT * FROM wallets HISTORY").unwrap());
        assert_eq!(history.len(), 2);
        assert_eq!(history[1].version(), Some(2));
    }
}

mod seed_tests {
    use super::*;
    use ledgerdb::cli::seed;

    #[test]
    fn seeded_wallet_history_depth_reflects_update_chains() {
        let dir = tempdir().unwrap();
        let mut db = open_db(dir.path());
        seed(&mut db).expect("Failed to seed");

        // every wallet is seeded once and updated three times
        for wallet_id in 1..=5 {
            let sql = format!("SELECT * FROM wallets HISTORY WHERE wallet_id = {}", wallet_id);
            let history = rows(db.execute(&sql).unwrap());
            assert_eq!(
                history.len(),
                4,
                "wallet {} SHOULD have 4 versions",
                wallet_id
            );
            assert_eq!(history.iter().filter(|r| r.is_active()).count(), 1);
        }

        let transactions = rows(db.execute("SELECT * FROM transactions").unwrap());
        assert_eq!(transactions.len(), 20);
    }

    #[test]
    fn seeded_join_links_users_to_wallets() {
        let dir = tempdir().unwrap();
        let mut db = open_db(dir.path());
        seed(&mut db).expect("Failed to seed");

        let result = rows(
            db.execute(
                "SELECT users.name, wallets.balance FROM users JOIN wallets ON users.id = wallets.user_id",
            )
            .unwrap(),
        );

        assert_eq!(result.len(), 5, "each user SHOULD join to one active wallet");
        assert_eq!(result[0].get("users.name"), Some(&Value::from("Alice Johnson")));
        assert_eq!(result[0].get("wallets.balance"), Some(&Value::Float(1350.0)));
    }
}
