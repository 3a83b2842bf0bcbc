//! # REPL
//!
//! The interactive loop: reads lines with rustyline, dispatches dot
//! commands immediately, and accumulates SQL until a terminating `;`. The
//! prompt switches from `ledgerdb> ` to `    -> ` while a statement is
//! incomplete; Ctrl+C abandons the buffer, Ctrl+D exits.
//!
//! Statement failures print an `Error: …` line and keep the loop alive.
//!
//! Command history persists to `~/.ledgerdb_history`; the path is resolved
//! once at construction and can be redirected with the `LEDGERDB_HISTORY`
//! environment variable (empty value disables persistence).

use crate::cli::commands::{CommandHandler, CommandResult};
use crate::cli::table::TableFormatter;
use crate::database::{Database, ExecuteResult};
use eyre::{Result, WrapErr};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::env;
use std::path::{Path, PathBuf};
use std::time::Instant;

const PRIMARY_PROMPT: &str = "ledgerdb> ";
const CONTINUATION_PROMPT: &str = "    -> ";
const HISTORY_FILE_NAME: &str = ".ledgerdb_history";
const HISTORY_ENV_VAR: &str = "LEDGERDB_HISTORY";

pub struct Repl {
    db: Database,
    editor: DefaultEditor,
    sql_buffer: String,
    history_file: Option<PathBuf>,
}

impl Repl {
    pub fn new(db: Database) -> Result<Self> {
        let mut editor = DefaultEditor::new().wrap_err("failed to initialize line editor")?;

        let history_file = history_file_for(
            env::var(HISTORY_ENV_VAR).ok().as_deref(),
            env::var("HOME").ok().as_deref(),
        );
        if let Some(path) = &history_file {
            let _ = editor.load_history(path);
        }

        Ok(Self {
            db,
            editor,
            sql_buffer: String::new(),
            history_file,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        self.print_welcome();

        loop {
            let prompt = if self.sql_buffer.is_empty() {
                PRIMARY_PROMPT
            } else {
                CONTINUATION_PROMPT
            };

            match self.editor.readline(prompt) {
                Ok(line) => {
                    if !self.handle_line(&line) {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    self.sql_buffer.clear();
                    println!("^C");
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye");
                    break;
                }
                Err(err) => {
                    eprintln!("Error reading input: {}", err);
                    break;
                }
            }
        }

        self.save_history();
        Ok(())
    }

    fn handle_line(&mut self, line: &str) -> bool {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            return true;
        }

        if self.sql_buffer.is_empty() && CommandHandler::is_command(trimmed) {
            self.editor.add_history_entry(trimmed).ok();
            return self.execute_command(trimmed);
        }

        if !self.sql_buffer.is_empty() {
            self.sql_buffer.push(' ');
        }
        self.sql_buffer.push_str(trimmed);

        if self.sql_buffer.trim_end().ends_with(';') {
            let sql = std::mem::take(&mut self.sql_buffer);
            self.editor.add_history_entry(&sql).ok();
            self.execute_sql(&sql);
        }

        true
    }

    fn execute_command(&mut self, input: &str) -> bool {
        match CommandHandler::execute(input, &mut self.db) {
            CommandResult::Exit => false,
            CommandResult::Output(text) => {
                println!("{}", text);
                true
            }
            CommandResult::Continue => true,
            CommandResult::Error(msg) => {
                eprintln!("Error: {}", msg);
                true
            }
        }
    }

    fn execute_sql(&mut self, sql: &str) {
        let start = Instant::now();

        match self.db.execute(sql) {
            Ok(result) => {
                let elapsed = start.elapsed();
                self.print_result(result, elapsed);
            }
            Err(err) => {
                eprintln!("Error: {}", err);
            }
        }
    }

    fn print_result(&self, result: ExecuteResult, elapsed: std::time::Duration) {
        match result {
            ExecuteResult::Rows(rows) => {
                if rows.is_empty() {
                    println!("Empty set ({:.3} sec)", elapsed.as_secs_f64());
                } else {
                    let formatter = TableFormatter::new(&rows);
                    print!("{}", formatter.render());
                    println!(
                        "{} row{} in set ({:.3} sec)",
                        formatter.row_count(),
                        if formatter.row_count() == 1 { "" } else { "s" },
                        elapsed.as_secs_f64()
                    );
                }
            }
            ExecuteResult::Message(message) => {
                println!("{} ({:.3} sec)", message, elapsed.as_secs_f64());
            }
        }
    }

    fn print_welcome(&self) {
        println!("LedgerDB version {}", env!("CARGO_PKG_VERSION"));
        println!("Enter \".help\" for usage hints.");
        println!("Connected to: {}", self.db.path().display());
        println!();
    }

    fn save_history(&mut self) {
        if let Some(path) = &self.history_file {
            if let Err(e) = self.editor.save_history(path) {
                eprintln!("Warning: could not save history: {}", e);
            }
        }
    }
}

/// Picks the history file: the override wins when set (empty disables
/// persistence), otherwise `$HOME/.ledgerdb_history`.
fn history_file_for(override_path: Option<&str>, home: Option<&str>) -> Option<PathBuf> {
    match override_path {
        Some("") => None,
        Some(path) => Some(PathBuf::from(path)),
        None => home.map(|home| Path::new(home).join(HISTORY_FILE_NAME)),
    }
}
