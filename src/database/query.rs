//! # SELECT Execution
//!
//! Fetches rows through the versioning engine (honoring the HISTORY flag
//! and the optional equality predicate), optionally performs a nested-loop
//! equality join against a second table, and projects the requested
//! columns.
//!
//! The join side always sees active rows only: HISTORY applies to the left
//! table, never to the joined one. Joined output namespaces every column as
//! `<table>.<column>`, in left-row-major order. Projection silently drops
//! requested columns a row does not carry; `*` keeps everything.
//!
//! Filtering is a linear scan over the fetched rows. The secondary index is
//! never consulted here.

use crate::database::dml::as_filter;
use crate::database::{Database, ExecuteResult};
use crate::error::Result;
use crate::ledger::Versioner;
use crate::sql::{JoinClause, Projection, Select};
use crate::types::Row;
use tracing::debug;

impl Database {
    pub(crate) fn execute_select(&mut self, stmt: Select) -> Result<ExecuteResult> {
        let schema = self.catalog.get(&stmt.table)?;
        let rows = self.store.read_all(&stmt.table)?;
        let mut rows =
            Versioner::new(schema).select(rows, as_filter(stmt.filter.as_ref()), stmt.history);

        if let Some(join) = &stmt.join {
            rows = self.join_rows(&stmt.table, rows, join)?;
        }

        let rows = match &stmt.projection {
            Projection::All => rows,
            Projection::Columns(columns) => {
                rows.iter().map(|row| row.project(columns)).collect()
            }
        };

        debug!(table = %stmt.table, rows = rows.len(), history = stmt.history, "select complete");
        Ok(ExecuteResult::Rows(rows))
    }

    /// Nested-loop equality join, emitting every matching left/right pair
    /// with columns namespaced `<table>.<column>`.
    fn join_rows(&self, left_table: &str, left_rows: Vec<Row>, join: &JoinClause) -> Result<Vec<Row>> {
        let right_schema = self.catalog.get(&join.table)?;
        let right_rows = self.store.read_all(&join.table)?;
        let right_rows = Versioner::new(right_schema).select(right_rows, None, false);

        let mut result = Vec::new();
        for left in &left_rows {
            for right in &right_rows {
                let matched = match (left.get(&join.left_column), right.get(&join.right_column)) {
                    (Some(a), Some(b)) => a.loosely_equals(b),
                    _ => false,
                };
                if !matched {
                    continue;
                }

                let mut merged = left.prefixed(left_table);
                for (column, value) in right.prefixed(&join.table) {
                    merged.set(column, value);
                }
                result.push(merged);
            }
        }

        Ok(result)
    }
}
