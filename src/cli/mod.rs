//! # CLI Module
//!
//! The interactive front end: a rustyline REPL with dot commands,
//! ASCII-table result rendering, persisted history, and the sample-data
//! seeder. Everything here is a thin presentation layer over
//! [`Database::execute`](crate::Database::execute).
//!
//! - `repl`: read-eval-print loop, including history persistence
//! - `commands`: dot command parsing and execution
//! - `table`: ASCII table formatter for result rows
//! - `seed`: canonical demo dataset loader

pub mod commands;
pub mod repl;
pub mod seed;
pub mod table;

pub use repl::Repl;
pub use seed::seed;
