//! # Versioning Engine
//!
//! Translates logical INSERT/UPDATE/DELETE/SELECT into transformations of a
//! table's row sequence, honoring ledger semantics where the schema asks
//! for them:
//!
//! - **INSERT** stamps a new ledger row with `_version` = 1 + the number of
//!   existing rows (active or not) sharing its primary-key value, a fresh
//!   creation timestamp, and `_is_active = true`.
//! - **UPDATE** never touches a ledger row in place. Each active match is
//!   flipped inactive and immediately followed by a new row carrying the
//!   overlaid assignments at `_version + 1`.
//! - **DELETE** only flips active flags on a ledger table. A deletion ends
//!   a version lineage; it never removes rows.
//! - **SELECT** sees active rows unless the history flag asks for every
//!   version, in original storage order.
//!
//! Non-ledger tables take the plain paths: in-place update, hard delete,
//! no version metadata ever attached.
//!
//! The engine is pure over row sequences; reading and rewriting table files
//! belongs to the caller.

use crate::schema::{ColumnDef, TableSchema};
use crate::types::{Row, Value, ACTIVE_FIELD, CREATED_AT_FIELD, VERSION_FIELD};
use chrono::Local;

pub struct Versioner<'a> {
    schema: &'a TableSchema,
}

impl<'a> Versioner<'a> {
    pub fn new(schema: &'a TableSchema) -> Self {
        Self { schema }
    }

    /// Appends a row, stamping ledger metadata when the table asks for it.
    pub fn insert(&self, rows: &mut Vec<Row>, mut row: Row) {
        if self.schema.is_ledger() {
            let version = self.next_version(rows, &row);
            row.set(VERSION_FIELD, Value::Int(version));
            row.set(CREATED_AT_FIELD, Value::Text(timestamp()));
            row.set(ACTIVE_FIELD, Value::Bool(true));
        }
        rows.push(row);
    }

    /// Applies SET assignments to every active row matching the predicate.
    /// Returns the transformed sequence and the number of rows that matched.
    pub fn update(
        &self,
        rows: Vec<Row>,
        assignments: &[(String, Value)],
        filter: (&str, &Value),
    ) -> (Vec<Row>, usize) {
        let mut result = Vec::with_capacity(rows.len());
        let mut matched = 0;

        for mut row in rows {
            let (column, literal) = filter;
            if !(row.matches(column, literal) && row.is_active()) {
                result.push(row);
                continue;
            }
            matched += 1;

            if self.schema.is_ledger() {
                let previous_version = row.version().unwrap_or(1);
                row.set_active(false);

                let mut next = row.clone();
                for (name, value) in assignments {
                    next.set(name.clone(), value.clone());
                }
                next.set(VERSION_FIELD, Value::Int(previous_version + 1));
                next.set(CREATED_AT_FIELD, Value::Text(timestamp()));
                next.set(ACTIVE_FIELD, Value::Bool(true));

                result.push(row);
                result.push(next);
            } else {
                for (name, value) in assignments {
                    row.set(name.clone(), value.clone());
                }
                result.push(row);
            }
        }

        (result, matched)
    }

    /// Deactivates (ledger) or removes (non-ledger) matching rows. With no
    /// predicate every row matches.
    pub fn delete(
        &self,
        mut rows: Vec<Row>,
        filter: Option<(&str, &Value)>,
    ) -> (Vec<Row>, usize) {
        let mut matched = 0;

        if self.schema.is_ledger() {
            for row in rows.iter_mut() {
                if matches_filter(row, filter) && row.is_active() {
                    row.set_active(false);
                    matched += 1;
                }
            }
            (rows, matched)
        } else {
            let before = rows.len();
            rows.retain(|row| !matches_filter(row, filter));
            matched = before - rows.len();
            (rows, matched)
        }
    }

    /// Visibility filter plus the optional equality predicate.
    pub fn select(
        &self,
        mut rows: Vec<Row>,
        filter: Option<(&str, &Value)>,
        history: bool,
    ) -> Vec<Row> {
        if self.schema.is_ledger() && !history {
            rows.retain(Row::is_active);
        }
        if let Some((column, literal)) = filter {
            rows.retain(|row| row.matches(column, literal));
        }
        rows
    }

    fn next_version(&self, rows: &[Row], row: &Row) -> i64 {
        rows.iter()
            .filter(|existing| self.shares_primary_key(existing, row))
            .count() as i64
            + 1
    }

    /// True when both rows carry equal values for every primary-key column.
    /// Tables without a primary key never group, so each insert is version 1.
    fn shares_primary_key(&self, a: &Row, b: &Row) -> bool {
        let pk_columns: Vec<&str> = self
            .schema
            .primary_key_columns()
            .map(ColumnDef::name)
            .collect();
        if pk_columns.is_empty() {
            return false;
        }

        pk_columns
            .iter()
            .all(|column| match (a.get(column), b.get(column)) {
                (Some(left), Some(right)) => left.loosely_equals(right),
                _ => false,
            })
    }
}

fn matches_filter(row: &Row, filter: Option<(&str, &Value)>) -> bool {
    match filter {
        Some((column, literal)) => row.matches(column, literal),
        None => true,
    }
}

fn timestamp() -> String {
    Local::now()
        .naive_local()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}
