//! # DDL Execution
//!
//! CREATE TABLE is the only schema operation: there is no ALTER or DROP,
//! so a registered schema is permanent. Creating a table registers the
//! schema in the catalog (which persists itself), writes an empty table
//! file, and opens an index bucket for every primary-key/unique column.

use crate::database::{Database, ExecuteResult};
use crate::error::Result;
use crate::schema::{ColumnDef, TableSchema};
use crate::sql::CreateTable;
use tracing::info;

impl Database {
    pub(crate) fn execute_create_table(&mut self, stmt: CreateTable) -> Result<ExecuteResult> {
        let columns: Vec<ColumnDef> = stmt
            .columns
            .iter()
            .map(|spec| {
                let mut column = ColumnDef::new(&spec.name, &spec.data_type);
                if spec.primary_key {
                    column = column.with_primary_key();
                }
                if spec.unique {
                    column = column.with_unique();
                }
                column
            })
            .collect();

        let schema = TableSchema::new(columns, stmt.is_ledger);
        self.catalog.create_table(&stmt.table, schema)?;
        self.store.write_all(&stmt.table, &[])?;

        for spec in &stmt.columns {
            if spec.primary_key || spec.unique {
                self.index.create_bucket(&stmt.table, &spec.name, true);
            }
        }

        info!(table = %stmt.table, ledger = stmt.is_ledger, "created table");
        Ok(ExecuteResult::Message(format!(
            "Table {} created",
            stmt.table
        )))
    }
}
