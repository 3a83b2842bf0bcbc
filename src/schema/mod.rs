//! # Schema Module
//!
//! Table definitions and the persisted catalog that holds them.
//!
//! - `table`: column and table definition types
//! - `catalog`: name-to-schema map with whole-file JSON persistence

pub mod catalog;
pub mod table;

pub use catalog::{Catalog, CATALOG_FILE_NAME};
pub use table::{ColumnDef, TableSchema};
