//! # Schema Catalog
//!
//! The catalog maps table names to their definitions and owns the
//! `schemas.json` file they are persisted in. It is loaded once when the
//! database opens; every registration rewrites the whole file, so the
//! on-disk catalog is always a complete snapshot.

use crate::error::{LedgerError, Result};
use crate::schema::TableSchema;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::debug;

pub const CATALOG_FILE_NAME: &str = "schemas.json";

#[derive(Debug)]
pub struct Catalog {
    path: PathBuf,
    tables: BTreeMap<String, TableSchema>,
}

impl Catalog {
    /// Loads the catalog file, treating a missing file as an empty catalog.
    pub fn load(path: PathBuf) -> Result<Self> {
        let tables = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).map_err(|source| {
                LedgerError::Corrupt {
                    path: path.clone(),
                    source,
                }
            })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => {
                return Err(LedgerError::Io {
                    path: path.clone(),
                    source,
                })
            }
        };

        debug!(tables = tables.len(), "loaded catalog");
        Ok(Self { path, tables })
    }

    /// Registers a table and immediately rewrites the catalog file.
    pub fn create_table(&mut self, name: &str, schema: TableSchema) -> Result<()> {
        if self.tables.contains_key(name) {
            return Err(LedgerError::DuplicateTable(name.to_string()));
        }

        self.tables.insert(name.to_string(), schema);
        self.persist()
    }

    pub fn get(&self, name: &str) -> Result<&TableSchema> {
        self.tables
            .get(name)
            .ok_or_else(|| LedgerError::UnknownTable(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    pub fn tables(&self) -> impl Iterator<Item = (&str, &TableSchema)> {
        self.tables.iter().map(|(name, schema)| (name.as_str(), schema))
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    fn persist(&self) -> Result<()> {
        let contents =
            serde_json::to_string_pretty(&self.tables).map_err(|source| LedgerError::Corrupt {
                path: self.path.clone(),
                source,
            })?;

        fs::write(&self.path, contents).map_err(|source| LedgerError::Io {
            path: self.path.clone(),
            source,
        })
    }
}
