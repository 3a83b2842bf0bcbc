//! # SQL Module
//!
//! The statement front end: token definitions, lexer, AST, and the
//! recursive descent parser for the reduced grammar.
//!
//! - `token`: token and keyword definitions
//! - `lexer`: byte-level tokenizer (borrowed slices, phf keyword map)
//! - `ast`: owned statement structures
//! - `parser`: one statement per call, trailing garbage rejected

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod token;

pub use ast::{
    ColumnSpec, CreateTable, Delete, Insert, JoinClause, Predicate, Projection, Select, Statement,
    Update,
};
pub use lexer::Lexer;
pub use parser::Parser;
pub use token::{Keyword, Token};
