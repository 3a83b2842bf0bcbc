//! # Row Store
//!
//! One JSON file per table, holding the table's full row sequence. Reads
//! and writes are whole-file: every mutating statement loads the complete
//! sequence, transforms it in memory, and rewrites the file as a single
//! unit. That bounds each statement's cost at O(table size) and keeps the
//! durability story to a snapshot per completed write, which is the
//! intended trade at this scale.
//!
//! A table that has never been written reads back as an empty sequence.

use crate::error::{LedgerError, Result};
use crate::types::Row;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug)]
pub struct RowStore {
    dir: PathBuf,
}

impl RowStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn table_path(&self, table: &str) -> PathBuf {
        self.dir.join(format!("{}.json", table))
    }

    /// Full stored sequence in original order. Missing file means no rows.
    pub fn read_all(&self, table: &str) -> Result<Vec<Row>> {
        let path = self.table_path(table);

        let rows = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents)
                .map_err(|source| LedgerError::Corrupt { path, source })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(source) => return Err(LedgerError::Io { path, source }),
        };

        Ok(rows)
    }

    /// Replaces the persisted sequence as a single unit.
    pub fn write_all(&self, table: &str, rows: &[Row]) -> Result<()> {
        let path = self.table_path(table);

        let contents = serde_json::to_string_pretty(rows).map_err(|source| {
            LedgerError::Corrupt {
                path: path.clone(),
                source,
            }
        })?;

        fs::write(&path, contents).map_err(|source| LedgerError::Io {
            path: path.clone(),
            source,
        })?;

        debug!(table, rows = rows.len(), "rewrote table file");
        Ok(())
    }
}
