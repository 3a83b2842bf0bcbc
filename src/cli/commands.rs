//! # Dot Command Handler
//!
//! SQLite-style dot commands for introspection and CLI control. Commands
//! are case-insensitive and are dispatched immediately rather than
//! accumulated like SQL.
//!
//! | Command           | Description                               |
//! |-------------------|-------------------------------------------|
//! | `.quit` / `.exit` | Exit the CLI                              |
//! | `.tables`         | List all tables                           |
//! | `.schema [table]` | Show CREATE statement for table(s)        |
//! | `.seed`           | Load the sample dataset                   |
//! | `.help`           | Show available commands                   |

use crate::cli::seed::seed;
use crate::database::Database;
use crate::schema::TableSchema;

#[derive(Debug, PartialEq)]
pub enum CommandResult {
    Output(String),
    Exit,
    Continue,
    Error(String),
}

pub struct CommandHandler;

impl CommandHandler {
    pub fn is_command(input: &str) -> bool {
        input.trim().starts_with('.')
    }

    pub fn execute(input: &str, db: &mut Database) -> CommandResult {
        let input = input.trim();
        let parts: Vec<&str> = input.split_whitespace().collect();

        if parts.is_empty() {
            return CommandResult::Continue;
        }

        let cmd = parts[0].to_lowercase();
        let args = &parts[1..];

        match cmd.as_str() {
            ".quit" | ".exit" | ".q" => CommandResult::Exit,
            ".help" | ".h" | ".?" => CommandResult::Output(help_text()),
            ".tables" => list_tables(db),
            ".schema" => show_schema(db, args),
            ".seed" => run_seed(db),
            _ => CommandResult::Error(format!(
                "Unknown command: {}. Type .help for available commands.",
                cmd
            )),
        }
    }
}

fn help_text() -> String {
    r#"LedgerDB CLI Commands:

  .quit, .exit, .q     Exit the CLI
  .help, .h, .?        Show this help message
  .tables              List all tables in the database
  .schema [TABLE]      Show CREATE statement for TABLE (or all tables)
  .seed                Load the sample dataset (users, wallets, transactions)

SQL statements should end with a semicolon (;).
Multi-line statements are supported - press Enter to continue on next line.
Use Ctrl+C to cancel a multi-line statement.
Use Ctrl+D or .quit to exit."#
        .to_string()
}

fn list_tables(db: &Database) -> CommandResult {
    let mut tables: Vec<&str> = db.catalog().table_names().collect();

    if tables.is_empty() {
        CommandResult::Output("No tables found.".to_string())
    } else {
        tables.sort_unstable();
        CommandResult::Output(tables.join("\n"))
    }
}

fn show_schema(db: &Database, args: &[&str]) -> CommandResult {
    if let Some(table_name) = args.first() {
        match db.catalog().get(table_name) {
            Ok(schema) => CommandResult::Output(format_create_table(table_name, schema)),
            Err(_) => CommandResult::Error(format!("Table '{}' not found.", table_name)),
        }
    } else {
        let statements: Vec<String> = db
            .catalog()
            .tables()
            .map(|(name, schema)| format_create_table(name, schema))
            .collect();

        if statements.is_empty() {
            CommandResult::Output("No tables found.".to_string())
        } else {
            CommandResult::Output(statements.join("\n"))
        }
    }
}

fn run_seed(db: &mut Database) -> CommandResult {
    match seed(db) {
        Ok(statements) => CommandResult::Output(format!(
            "Seeded sample data ({} statements executed).",
            statements
        )),
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

fn format_create_table(name: &str, schema: &TableSchema) -> String {
    let columns: Vec<String> = schema
        .columns()
        .iter()
        .map(|column| {
            let mut text = format!("{} {}", column.name(), column.data_type());
            if column.is_primary_key() {
                text.push_str(" PRIMARY KEY");
            }
            if column.is_unique() {
                text.push_str(" UNIQUE");
            }
            text
        })
        .collect();

    let suffix = if schema.is_ledger() { " LEDGER" } else { "" };
    format!("CREATE TABLE {} ({}){};", name, columns.join(", "), suffix)
}
