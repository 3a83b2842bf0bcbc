//! # Secondary Index
//!
//! In-memory exact-match index mapping (table, column, value) to row
//! positions. The executor consults it for one thing only: the pre-insert
//! primary-key/unique probe. SELECT filtering is a linear scan and never
//! touches it.
//!
//! The index has deliberate, faithful limitations:
//!
//! - Buckets are created empty at CREATE TABLE and never backfilled, so
//!   rows persisted before the bucket existed (including everything loaded
//!   from disk on reopen) are invisible to lookups.
//! - UPDATE and DELETE never revise entries, so recorded positions go stale
//!   as soon as a table is mutated.
//! - Inserting into a column without a bucket is a silent no-op.
//!
//! Numeric keys canonicalize together: an indexed `1` collides with an
//! insert of `1.0`, matching the loose equality rule used everywhere else.

use crate::error::{LedgerError, Result};
use crate::types::Value;
use hashbrown::HashMap;

/// Canonical form of a value used as a bucket key. Int and Float unify by
/// numeric value; text and bool keep their exact representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IndexKey {
    Number(u64),
    Text(String),
    Bool(bool),
}

impl IndexKey {
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Int(i) => IndexKey::Number((*i as f64).to_bits()),
            Value::Float(f) => IndexKey::Number(f.to_bits()),
            Value::Text(s) => IndexKey::Text(s.clone()),
            Value::Bool(b) => IndexKey::Bool(*b),
        }
    }
}

#[derive(Debug)]
struct Bucket {
    unique: bool,
    entries: HashMap<IndexKey, Vec<usize>>,
}

#[derive(Debug, Default)]
pub struct SecondaryIndex {
    buckets: HashMap<(String, String), Bucket>,
}

impl SecondaryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an empty bucket for (table, column). Existing rows are not
    /// backfilled.
    pub fn create_bucket(&mut self, table: &str, column: &str, unique: bool) {
        self.buckets.insert(
            (table.to_string(), column.to_string()),
            Bucket {
                unique,
                entries: HashMap::new(),
            },
        );
    }

    pub fn has_bucket(&self, table: &str, column: &str) -> bool {
        self.buckets
            .contains_key(&(table.to_string(), column.to_string()))
    }

    /// Recorded positions for an exact value. Empty when the column is
    /// unindexed or the value was never inserted.
    pub fn lookup(&self, table: &str, column: &str, value: &Value) -> &[usize] {
        self.buckets
            .get(&(table.to_string(), column.to_string()))
            .and_then(|bucket| bucket.entries.get(&IndexKey::from_value(value)))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Appends a position for a value. A unique bucket that already holds
    /// the value rejects the entry; an absent bucket swallows it silently.
    pub fn insert_entry(
        &mut self,
        table: &str,
        column: &str,
        value: &Value,
        row_id: usize,
    ) -> Result<()> {
        let bucket = match self
            .buckets
            .get_mut(&(table.to_string(), column.to_string()))
        {
            Some(bucket) => bucket,
            None => return Ok(()),
        };

        let key = IndexKey::from_value(value);
        if bucket.unique && bucket.entries.contains_key(&key) {
            return Err(LedgerError::UniqueConstraintViolation(column.to_string()));
        }

        bucket.entries.entry(key).or_default().push(row_id);
        Ok(())
    }
}
