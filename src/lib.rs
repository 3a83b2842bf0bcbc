//! # LedgerDB - Embedded Relational Store with Ledger Tables
//!
//! LedgerDB is a minimal embedded relational store driven by a reduced SQL
//! dialect. Any table can opt into "ledger" semantics at creation: logical
//! updates then never overwrite history; each UPDATE appends a new
//! immutable version and deactivates the prior one, each DELETE ends a
//! version lineage without erasing it, and `SELECT ... HISTORY` reads the
//! whole version trail back.
//!
//! ## Quick Start
//!
//! ```ignore
//! use ledgerdb::Database;
//!
//! let mut db = Database::open("./mydb")?;
//!
//! db.execute("CREATE TABLE wallets (wallet_id INT PRIMARY KEY, balance FLOAT) LEDGER")?;
//! db.execute("INSERT INTO wallets VALUES (1, 100.0)")?;
//! db.execute("UPDATE wallets SET balance = 150.0 WHERE wallet_id = 1")?;
//!
//! // active rows only
//! let current = db.execute("SELECT * FROM wallets")?;
//! // every version ever written
//! let trail = db.execute("SELECT * FROM wallets HISTORY")?;
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │       Public API (Database)          │
//! ├─────────────────────────────────────┤
//! │   SQL Layer (Lexer/Parser/AST)       │
//! ├─────────────────────────────────────┤
//! │  Schema Catalog │ Secondary Index    │
//! ├─────────────────┼───────────────────┤
//! │        Versioning Engine             │
//! ├─────────────────────────────────────┤
//! │   Row Store (whole-file JSON)        │
//! └─────────────────────────────────────┘
//! ```
//!
//! ## Statement Set
//!
//! CREATE TABLE (with PRIMARY KEY / UNIQUE column flags and an optional
//! LEDGER table flag), INSERT with positional values, SELECT with an
//! optional single-column equality WHERE, an optional two-table equality
//! JOIN, and the HISTORY modifier, UPDATE (WHERE required), DELETE (WHERE
//! optional). Nothing else: no compound predicates, ranges, aggregation,
//! ordering, transactions, or ALTER/DROP.
//!
//! ## File Layout
//!
//! ```text
//! database_dir/
//! ├── schemas.json     # catalog: table name → columns + ledger flag
//! ├── users.json       # one file per table, full row sequence
//! └── wallets.json
//! ```
//!
//! Every mutating statement reads its table whole, transforms it in
//! memory, and rewrites the file as a single unit. That bounds complexity
//! and cost at O(table size) per statement; the engine is single-threaded
//! by construction (`&mut self`), and multiple processes sharing one
//! directory need external coordination.
//!
//! ## Module Overview
//!
//! - [`database`]: engine facade and statement executor
//! - [`sql`]: token, lexer, AST, recursive descent parser
//! - [`schema`]: table definitions and the persisted catalog
//! - [`storage`]: whole-file row persistence
//! - [`ledger`]: the versioning engine
//! - [`index`]: insert-time constraint index
//! - [`types`]: tagged values and rows
//! - [`cli`]: REPL front end and sample-data seeder

pub mod cli;
pub mod database;
pub mod error;
pub mod index;
pub mod ledger;
pub mod schema;
pub mod sql;
pub mod storage;
pub mod types;

pub use database::{Database, ExecuteResult};
pub use error::{LedgerError, Result};
pub use types::{Row, Value};
