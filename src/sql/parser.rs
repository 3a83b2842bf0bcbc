//! # Statement Parser
//!
//! Recursive descent over the reduced grammar, one statement per call:
//!
//! ```text
//! CREATE TABLE name ( col TYPE [PRIMARY KEY] [UNIQUE], ... ) [LEDGER]
//! INSERT INTO name VALUES ( literal, ... )
//! SELECT * | col, ... FROM name [HISTORY] [JOIN name ON a.b = c.d]
//!     [WHERE col = literal] [HISTORY]
//! UPDATE name SET col = literal, ... [WHERE col = literal]
//! DELETE FROM name [WHERE col = literal]
//! ```
//!
//! The single-equality-predicate limitation is enforced here: anything after
//! a complete statement other than `;` is rejected, which covers compound
//! WHERE clauses, range operators, and stray input alike. HISTORY is
//! accepted directly after the table name or at the end of the statement.
//!
//! Every rejection is [`LedgerError::MalformedStatement`] with the offending
//! token in the message.

use super::ast::*;
use super::lexer::Lexer;
use super::token::{Keyword, Token};
use crate::error::{LedgerError, Result};
use crate::types::Value;


pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token();
        Self { lexer, current }
    }

    /// Parses exactly one statement and requires the input to end after it
    /// (an optional trailing `;` is allowed).
    pub fn parse_statement(&mut self) -> Result<Statement> {
        let statement = match self.current {
            Token::Keyword(Keyword::Create) => self.parse_create()?,
            Token::Keyword(Keyword::Insert) => self.parse_insert()?,
            Token::Keyword(Keyword::Select) => self.parse_select()?,
            Token::Keyword(Keyword::Update) => self.parse_update()?,
            Token::Keyword(Keyword::Delete) => self.parse_delete()?,
            ref other => {
                return Err(malformed(format!("expected a statement, found {:?}", other)))
            }
        };

        self.consume_token(&Token::Semicolon);
        if !matches!(self.current, Token::Eof) {
            return Err(malformed(format!(
                "unexpected input after statement: {:?}",
                self.current
            )));
        }

        Ok(statement)
    }

    fn parse_create(&mut self) -> Result<Statement> {
        self.expect_keyword(Keyword::Create)?;
        self.expect_keyword(Keyword::Table)?;
        let table = self.expect_ident()?;

        self.expect_token(&Token::LParen)?;
        let mut columns = Vec::new();
        loop {
            columns.push(self.parse_column_spec()?);
            if !self.consume_token(&Token::Comma) {
                break;
            }
        }
        self.expect_token(&Token::RParen)?;

        let is_ledger = self.consume_keyword(Keyword::Ledger);

        Ok(Statement::CreateTable(CreateTable {
            table,
            columns,
            is_ledger,
        }))
    }

    fn parse_column_spec(&mut self) -> Result<ColumnSpec> {
        let name = self.expect_ident()?;
        let data_type = self.expect_ident()?;

        let mut primary_key = false;
        let mut unique = false;
        loop {
            if self.consume_keyword(Keyword::Primary) {
                self.expect_keyword(Keyword::Key)?;
                primary_key = true;
            } else if self.consume_keyword(Keyword::Unique) {
                unique = true;
            } else {
                break;
            }
        }

        Ok(ColumnSpec {
            name,
            data_type,
            primary_key,
            unique,
        })
    }

    fn parse_insert(&mut self) -> Result<Statement> {
        self.expect_keyword(Keyword::Insert)?;
        self.expect_keyword(Keyword::Into)?;
        let table = self.expect_ident()?;
        self.expect_keyword(Keyword::Values)?;

        self.expect_token(&Token::LParen)?;
        let mut values = Vec::new();
        loop {
            values.push(self.parse_literal()?);
            if !self.consume_token(&Token::Comma) {
                break;
            }
        }
        self.expect_token(&Token::RParen)?;

        Ok(Statement::Insert(Insert { table, values }))
    }

    fn parse_select(&mut self) -> Result<Statement> {
        self.expect_keyword(Keyword::Select)?;
        let projection = self.parse_projection()?;
        self.expect_keyword(Keyword::From)?;
        let table = self.expect_ident()?;

        let mut history = self.consume_keyword(Keyword::History);

        let join = if self.consume_keyword(Keyword::Join) {
            let join_table = self.expect_ident()?;
            self.expect_keyword(Keyword::On)?;
            let left_column = self.parse_column_reference()?;
            self.expect_token(&Token::Equals)?;
            let right_column = self.parse_column_reference()?;
            Some(JoinClause {
                table: join_table,
                left_column,
                right_column,
            })
        } else {
            None
        };

        let filter = self.parse_optional_where()?;
        history |= self.consume_keyword(Keyword::History);

        Ok(Statement::Select(Select {
            table,
            projection,
            filter,
            history,
            join,
        }))
    }

    fn parse_projection(&mut self) -> Result<Projection> {
        if self.consume_token(&Token::Star) {
            return Ok(Projection::All);
        }

        let mut columns = Vec::new();
        loop {
            columns.push(self.parse_qualified_name()?);
            if !self.consume_token(&Token::Comma) {
                break;
            }
        }
        Ok(Projection::Columns(columns))
    }

    fn parse_update(&mut self) -> Result<Statement> {
        self.expect_keyword(Keyword::Update)?;
        let table = self.expect_ident()?;
        self.expect_keyword(Keyword::Set)?;

        let mut assignments = Vec::new();
        loop {
            let column = self.expect_ident()?;
            self.expect_token(&Token::Equals)?;
            let value = self.parse_literal()?;
            assignments.push((column, value));
            if !self.consume_token(&Token::Comma) {
                break;
            }
        }

        let filter = self.parse_optional_where()?;

        Ok(Statement::Update(Update {
            table,
            assignments,
            filter,
        }))
    }

    fn parse_delete(&mut self) -> Result<Statement> {
        self.expect_keyword(Keyword::Delete)?;
        self.expect_keyword(Keyword::From)?;
        let table = self.expect_ident()?;
        let filter = self.parse_optional_where()?;

        Ok(Statement::Delete(Delete { table, filter }))
    }

    fn parse_optional_where(&mut self) -> Result<Option<Predicate>> {
        if !self.consume_keyword(Keyword::Where) {
            return Ok(None);
        }

        let column = self.expect_ident()?;
        self.expect_token(&Token::Equals)?;
        let value = self.parse_literal()?;

        Ok(Some(Predicate { column, value }))
    }

    /// `table.column` or bare `column`; only the final segment matters for
    /// join matching.
    fn parse_column_reference(&mut self) -> Result<String> {
        let mut name = self.expect_ident()?;
        while self.consume_token(&Token::Dot) {
            name = self.expect_ident()?;
        }
        Ok(name)
    }

    /// Qualified projection name, joined back with dots so join output keys
    /// like `users.name` can be requested verbatim.
    fn parse_qualified_name(&mut self) -> Result<String> {
        let mut name = self.expect_ident()?;
        while self.consume_token(&Token::Dot) {
            name.push('.');
            name.push_str(&self.expect_ident()?);
        }
        Ok(name)
    }

    fn parse_literal(&mut self) -> Result<Value> {
        let negative = self.consume_token(&Token::Minus);

        let value = match self.current {
            Token::Integer(digits) => {
                let i: i64 = digits
                    .parse()
                    .map_err(|_| malformed(format!("integer literal out of range: {}", digits)))?;
                Value::Int(if negative { -i } else { i })
            }
            Token::Float(digits) => {
                let f: f64 = digits
                    .parse()
                    .map_err(|_| malformed(format!("bad float literal: {}", digits)))?;
                Value::Float(if negative { -f } else { f })
            }
            Token::String(raw) => {
                if negative {
                    return Err(malformed("cannot negate a string literal".to_string()));
                }
                Value::Text(raw.replace("''", "'"))
            }
            ref other => {
                return Err(malformed(format!("expected a literal, found {:?}", other)))
            }
        };

        self.advance();
        Ok(value)
    }

    fn advance(&mut self) -> Token<'a> {
        std::mem::replace(&mut self.current, self.lexer.next_token())
    }

    fn check_keyword(&self, keyword: Keyword) -> bool {
        matches!(self.current, Token::Keyword(k) if k == keyword)
    }

    fn consume_keyword(&mut self, keyword: Keyword) -> bool {
        if self.check_keyword(keyword) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect_keyword(&mut self, keyword: Keyword) -> Result<()> {
        if self.check_keyword(keyword) {
            self.advance();
            Ok(())
        } else {
            Err(malformed(format!(
                "expected {:?}, found {:?}",
                keyword, self.current
            )))
        }
    }

    fn check_token(&self, expected: &Token<'_>) -> bool {
        std::mem::discriminant(&self.current) == std::mem::discriminant(expected)
    }

    fn consume_token(&mut self, expected: &Token<'_>) -> bool {
        if self.check_token(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect_token(&mut self, expected: &Token<'_>) -> Result<()> {
        if self.check_token(expected) {
            self.advance();
            Ok(())
        } else {
            Err(malformed(format!(
                "expected {:?}, found {:?}",
                expected, self.current
            )))
        }
    }

    fn expect_ident(&mut self) -> Result<String> {
        match self.current {
            Token::Ident(name) => {
                let name = name.to_string();
                self.advance();
                Ok(name)
            }
            ref other => Err(malformed(format!(
                "expected an identifier, found {:?}",
                other
            ))),
        }
    }
}

fn malformed(detail: String) -> LedgerError {
    LedgerError::MalformedStatement(detail)
}
