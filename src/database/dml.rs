//! # DML Execution
//!
//! INSERT, UPDATE, and DELETE. Each statement resolves its schema, reads
//! the whole table, transforms the sequence through the versioning engine,
//! and rewrites the file as one unit.
//!
//! INSERT is the only path that touches the secondary index: a non-empty
//! lookup on any primary-key/unique column fails the statement before
//! anything is persisted, and on success the new key values are recorded.
//! UPDATE and DELETE never revise index entries, so recorded positions go
//! stale by design.
//!
//! UPDATE without a predicate is refused outright rather than rewriting
//! the whole table; DELETE without a predicate is allowed and matches
//! every row.

use crate::database::{Database, ExecuteResult};
use crate::error::{LedgerError, Result};
use crate::ledger::Versioner;
use crate::sql::{Delete, Insert, Predicate, Update};
use crate::types::Row;
use tracing::debug;

impl Database {
    pub(crate) fn execute_insert(&mut self, stmt: Insert) -> Result<ExecuteResult> {
        let schema = self.catalog.get(&stmt.table)?;

        if stmt.values.len() != schema.columns().len() {
            return Err(LedgerError::ExecutionFailed(format!(
                "table {} has {} columns but {} values were supplied",
                stmt.table,
                schema.columns().len(),
                stmt.values.len()
            )));
        }

        let mut row = Row::new();
        for (column, value) in schema.columns().iter().zip(stmt.values) {
            row.set(column.name(), value);
        }

        for column in schema.key_columns() {
            if let Some(value) = row.get(column.name()) {
                if !self.index.lookup(&stmt.table, column.name(), value).is_empty() {
                    return Err(LedgerError::ConstraintViolation(column.name().to_string()));
                }
            }
        }

        let mut rows = self.store.read_all(&stmt.table)?;
        let row_id = rows.len();
        Versioner::new(schema).insert(&mut rows, row.clone());
        self.store.write_all(&stmt.table, &rows)?;

        let key_columns: Vec<String> = schema
            .key_columns()
            .map(|column| column.name().to_string())
            .collect();
        for column in key_columns {
            if let Some(value) = row.get(&column) {
                let value = value.clone();
                self.index.insert_entry(&stmt.table, &column, &value, row_id)?;
            }
        }

        Ok(ExecuteResult::Message("Row inserted".to_string()))
    }

    pub(crate) fn execute_update(&mut self, stmt: Update) -> Result<ExecuteResult> {
        let filter = stmt.filter.ok_or(LedgerError::MissingWhereClause)?;
        let schema = self.catalog.get(&stmt.table)?;

        let rows = self.store.read_all(&stmt.table)?;
        let (rows, matched) = Versioner::new(schema).update(
            rows,
            &stmt.assignments,
            (filter.column.as_str(), &filter.value),
        );
        self.store.write_all(&stmt.table, &rows)?;

        debug!(table = %stmt.table, matched, "update applied");
        Ok(ExecuteResult::Message("Rows updated".to_string()))
    }

    pub(crate) fn execute_delete(&mut self, stmt: Delete) -> Result<ExecuteResult> {
        let schema = self.catalog.get(&stmt.table)?;

        let rows = self.store.read_all(&stmt.table)?;
        let (rows, matched) =
            Versioner::new(schema).delete(rows, as_filter(stmt.filter.as_ref()));
        self.store.write_all(&stmt.table, &rows)?;

        debug!(table = %stmt.table, matched, "delete applied");
        Ok(ExecuteResult::Message("Rows deleted".to_string()))
    }
}

pub(crate) fn as_filter(predicate: Option<&Predicate>) -> Option<(&str, &crate::types::Value)> {
    predicate.map(|p| (p.column.as_str(), &p.value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Value;
    use tempfile::tempdir;

    fn wallet_db(dir: &std::path::Path, ledger: bool) -> Database {
        let mut db = Database::open(dir).expect("Failed to open database");
        let ddl = format!(
            "CREATE TABLE wallets (wallet_id INT PRIMARY KEY, balance FLOAT){}",
            if ledger { " LEDGER" } else { "" }
        );
        db.execute(&ddl).expect("Failed to create table");
        db
    }

    #[test]
    fn insert_reports_row_inserted() {
        let dir = tempdir().expect("Failed to create temp dir");
        let mut db = wallet_db(dir.path(), true);

        let result = db
            .execute("INSERT INTO wallets VALUES (1, 100.0)")
            .expect("Failed to insert");

        assert_eq!(result, ExecuteResult::Message("Row inserted".to_string()));
    }

    #[test]
    fn insert_arity_mismatch_fails_before_persisting() {
        let dir = tempdir().expect("Failed to create temp dir");
        let mut db = wallet_db(dir.path(), true);

        let err = db.execute("INSERT INTO wallets VALUES (1)").unwrap_err();

        assert!(matches!(err, LedgerError::ExecutionFailed(_)));
        let rows = db.store.read_all("wallets").expect("Failed to read table");
        assert!(rows.is_empty());
    }

    #[test]
    fn duplicate_primary_key_fails_and_leaves_storage_unchanged() {
        let dir = tempdir().expect("Failed to create temp dir");
        let mut db = wallet_db(dir.path(), true);
        db.execute("INSERT INTO wallets VALUES (1, 100.0)")
            .expect("Failed to insert");

        let err = db.execute("INSERT INTO wallets VALUES (1, 999.0)").unwrap_err();

        assert!(matches!(err, LedgerError::ConstraintViolation(col) if col == "wallet_id"));
        let rows = db.store.read_all("wallets").expect("Failed to read table");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("balance"), Some(&Value::Float(100.0)));
    }

    #[test]
    fn update_without_where_is_refused() {
        let dir = tempdir().expect("Failed to create temp dir");
        let mut db = wallet_db(dir.path(), true);
        db.execute("INSERT INTO wallets VALUES (1, 100.0)")
            .expect("Failed to insert");

        let err = db.execute("UPDATE wallets SET balance = 0.0").unwrap_err();

        assert!(matches!(err, LedgerError::MissingWhereClause));
        let rows = db.store.read_all("wallets").expect("Failed to read table");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("balance"), Some(&Value::Float(100.0)));
    }

    #[test]
    fn ledger_delete_keeps_rows_non_ledger_delete_removes_them() {
        let dir = tempdir().expect("Failed to create temp dir");

        let mut ledger = wallet_db(&dir.path().join("ledger"), true);
        ledger
            .execute("INSERT INTO wallets VALUES (1, 100.0)")
            .expect("Failed to insert");
        ledger
            .execute("DELETE FROM wallets WHERE wallet_id = 1")
            .expect("Failed to delete");
        assert_eq!(ledger.store.read_all("wallets").unwrap().len(), 1);

        let mut plain = wallet_db(&dir.path().join("plain"), false);
        plain
            .execute("INSERT INTO wallets VALUES (1, 100.0)")
            .expect("Failed to insert");
        plain
            .execute("DELETE FROM wallets WHERE wallet_id = 1")
            .expect("Failed to delete");
        assert!(plain.store.read_all("wallets").unwrap().is_empty());
    }

    #[test]
    fn stale_index_allows_duplicate_after_reopen() {
        let dir = tempdir().expect("Failed to create temp dir");
        {
            let mut db = wallet_db(dir.path(), true);
            db.execute("INSERT INTO wallets VALUES (1, 100.0)")
                .expect("Failed to insert");
        }

        // fresh process: no buckets are rebuilt, so the duplicate slips in
        // and extends the version chain
        let mut db = Database::open(dir.path()).expect("Failed to reopen database");
        db.execute("INSERT INTO wallets VALUES (1, 200.0)")
            .expect("duplicate after reopen must succeed");

        let rows = db.store.read_all("wallets").expect("Failed to read table");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].version(), Some(2));
    }
}
