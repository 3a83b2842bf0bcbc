//! # Core Data Types
//!
//! The tagged [`Value`] scalar and the flat [`Row`] map it lives in, shared
//! by the parser, the storage layer, and the executor.

mod row;
mod value;

pub use row::{Row, ACTIVE_FIELD, CREATED_AT_FIELD, VERSION_FIELD};
pub use value::Value;
