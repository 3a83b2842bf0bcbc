//! # Error Types
//!
//! Every failure the engine can surface is a variant of [`LedgerError`].
//! The statement-level kinds carry the table or column that triggered them;
//! the display texts are the exact strings front ends print after `Error: `.
//!
//! I/O and JSON failures are tagged with the file path they occurred on so
//! a corrupt table file can be located without a debugger.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LedgerError>;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Table {0} already exists")]
    DuplicateTable(String),

    #[error("Unknown table {0}")]
    UnknownTable(String),

    /// Primary-key or unique collision caught by the pre-insert index probe.
    #[error("Constraint violation on {0}")]
    ConstraintViolation(String),

    /// Raised by the index itself when a unique bucket already holds the key.
    #[error("Unique constraint violation on {0}")]
    UniqueConstraintViolation(String),

    #[error("UPDATE requires WHERE clause")]
    MissingWhereClause,

    #[error("Malformed statement: {0}")]
    MalformedStatement(String),

    /// Generic execution failure for preconditions outside the named kinds.
    #[error("{0}")]
    ExecutionFailed(String),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Corrupt data in {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
