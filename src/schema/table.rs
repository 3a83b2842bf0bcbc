//! # Table Definitions
//!
//! Schema metadata for a single table: ordered column definitions plus the
//! ledger flag. The declared column type is an advisory tag stored exactly
//! as written; nothing in the engine enforces it.
//!
//! Definitions are immutable once created. There is no ALTER or DROP, so a
//! schema registered in the catalog describes its table for the lifetime of
//! the database.
//!
//! ```rust,ignore
//! use ledgerdb::schema::{ColumnDef, TableSchema};
//!
//! let columns = vec![
//!     ColumnDef::new("id", "INT").with_primary_key(),
//!     ColumnDef::new("email", "TEXT").with_unique(),
//!     ColumnDef::new("name", "TEXT"),
//! ];
//! let schema = TableSchema::new(columns, true);
//! assert!(schema.is_ledger());
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDef {
    name: String,
    #[serde(rename = "type")]
    data_type: String,
    #[serde(default)]
    primary_key: bool,
    #[serde(default)]
    unique: bool,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            primary_key: false,
            unique: false,
        }
    }

    pub fn with_primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    pub fn with_unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data_type(&self) -> &str {
        &self.data_type
    }

    pub fn is_primary_key(&self) -> bool {
        self.primary_key
    }

    pub fn is_unique(&self) -> bool {
        self.unique
    }

    /// Key columns are the ones backed by an index bucket.
    pub fn is_key(&self) -> bool {
        self.primary_key || self.unique
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSchema {
    columns: Vec<ColumnDef>,
    is_ledger: bool,
}

impl TableSchema {
    pub fn new(columns: Vec<ColumnDef>, is_ledger: bool) -> Self {
        Self { columns, is_ledger }
    }

    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    pub fn is_ledger(&self) -> bool {
        self.is_ledger
    }

    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name() == name)
    }

    pub fn key_columns(&self) -> impl Iterator<Item = &ColumnDef> {
        self.columns.iter().filter(|c| c.is_key())
    }

    pub fn primary_key_columns(&self) -> impl Iterator<Item = &ColumnDef> {
        self.columns.iter().filter(|c| c.is_primary_key())
    }
}
