//! # Database Facade
//!
//! [`Database`] is the explicit engine instance: it owns the catalog, the
//! row store, and the secondary index, and every statement flows through
//! its `execute` methods. There is no global state; embedders construct one
//! per data directory and keep it for the process lifetime.
//!
//! Opening a database creates the directory on demand and loads the
//! persisted catalog once. The index starts empty on every open: buckets
//! exist only for tables created during the current process, which is the
//! engine's documented stale-index limitation.

use crate::error::{LedgerError, Result};
use crate::index::SecondaryIndex;
use crate::schema::{Catalog, CATALOG_FILE_NAME};
use crate::sql::{Parser, Statement};
use crate::storage::RowStore;
use crate::types::Row;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Outcome of one executed statement: result rows for SELECT, a status
/// message for everything else.
#[derive(Debug, Clone, PartialEq)]
pub enum ExecuteResult {
    Rows(Vec<Row>),
    Message(String),
}

pub struct Database {
    dir: PathBuf,
    pub(crate) catalog: Catalog,
    pub(crate) store: RowStore,
    pub(crate) index: SecondaryIndex,
}

impl Database {
    /// Opens the database at `dir`, creating the directory if needed and
    /// loading the persisted catalog.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|source| LedgerError::Io {
            path: dir.clone(),
            source,
        })?;

        let catalog = Catalog::load(dir.join(CATALOG_FILE_NAME))?;
        let store = RowStore::new(dir.clone());

        info!(dir = %dir.display(), tables = catalog.len(), "opened database");

        Ok(Self {
            dir,
            catalog,
            store,
            index: SecondaryIndex::new(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Parses and executes one SQL statement.
    pub fn execute(&mut self, sql: &str) -> Result<ExecuteResult> {
        let statement = Parser::new(sql).parse_statement()?;
        self.execute_statement(statement)
    }

    /// Executes a pre-built statement, bypassing the parser.
    pub fn execute_statement(&mut self, statement: Statement) -> Result<ExecuteResult> {
        debug!(?statement, "executing statement");

        match statement {
            Statement::CreateTable(create) => self.execute_create_table(create),
            Statement::Insert(insert) => self.execute_insert(insert),
            Statement::Select(select) => self.execute_select(select),
            Statement::Update(update) => self.execute_update(update),
            Statement::Delete(delete) => self.execute_delete(delete),
        }
    }
}
