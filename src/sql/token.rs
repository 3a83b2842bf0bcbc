//! # Token Definitions
//!
//! Tokens produced by the lexer. Identifier and literal tokens borrow from
//! the input string; nothing is allocated during tokenization.

/// Reserved words of the reduced grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Create,
    Table,
    Insert,
    Into,
    Values,
    Select,
    From,
    Where,
    Join,
    On,
    Update,
    Set,
    Delete,
    Primary,
    Key,
    Unique,
    Ledger,
    History,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token<'a> {
    Keyword(Keyword),
    Ident(&'a str),
    /// Unparsed digits of an integer literal.
    Integer(&'a str),
    /// Unparsed digits of a floating-point literal.
    Float(&'a str),
    /// Contents of a single-quoted string, doubled quotes still embedded.
    String(&'a str),
    LParen,
    RParen,
    Comma,
    Dot,
    Equals,
    Star,
    Minus,
    Semicolon,
    Error(&'static str),
    Eof,
}
