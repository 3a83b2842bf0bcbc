//! # Database Module
//!
//! The engine facade and statement executor. A [`Database`] owns the schema
//! catalog, the row store, and the secondary index; statements enter
//! through [`Database::execute`] (SQL text) or
//! [`Database::execute_statement`] (a pre-built
//! [`Statement`](crate::sql::Statement)) and are dispatched to the DDL,
//! DML, or query paths.
//!
//! - `database`: the facade, open/dispatch, [`ExecuteResult`]
//! - `ddl`: CREATE TABLE
//! - `dml`: INSERT, UPDATE, DELETE
//! - `query`: SELECT, join, projection
//!
//! All mutating operations take `&mut self`; ownership is the single-writer
//! discipline for this engine.

mod database;
mod ddl;
mod dml;
mod query;

pub use database::{Database, ExecuteResult};
