//! # ASCII Table Formatter
//!
//! Renders result rows as a MySQL-style ASCII table:
//!
//! ```text
//! +----+-------+
//! | id | name  |
//! +----+-------+
//! | 1  | Alice |
//! +----+-------+
//! ```
//!
//! Headers are the union of the columns across all rows, in the rows'
//! deterministic key order; HISTORY result sets can be heterogeneous when
//! an UPDATE introduced a column mid-lineage, and the union keeps every
//! version printable. A cell whose row lacks the column renders empty.
//!
//! Column widths are capped; longer values are truncated with `...`.

use crate::types::Row;
use std::fmt::Write;

const MAX_COLUMN_WIDTH: usize = 50;

pub struct TableFormatter {
    headers: Vec<String>,
    widths: Vec<usize>,
    rows: Vec<Vec<String>>,
}

impl TableFormatter {
    pub fn new(rows: &[Row]) -> Self {
        let headers = column_union(rows);
        let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count().max(1)).collect();

        let formatted_rows: Vec<Vec<String>> = rows
            .iter()
            .map(|row| {
                headers
                    .iter()
                    .enumerate()
                    .map(|(i, header)| {
                        let cell = row
                            .get(header)
                            .map(|value| value.to_string())
                            .unwrap_or_default();
                        widths[i] = widths[i].max(cell.chars().count()).min(MAX_COLUMN_WIDTH);
                        cell
                    })
                    .collect()
            })
            .collect();

        Self {
            headers,
            widths,
            rows: formatted_rows,
        }
    }

    pub fn render(&self) -> String {
        let mut output = String::new();

        self.write_separator(&mut output);
        self.write_row(&mut output, &self.headers);
        self.write_separator(&mut output);

        for row in &self.rows {
            self.write_row(&mut output, row);
        }

        self.write_separator(&mut output);
        output
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn write_separator(&self, output: &mut String) {
        output.push('+');
        for width in &self.widths {
            for _ in 0..(*width + 2) {
                output.push('-');
            }
            output.push('+');
        }
        output.push('\n');
    }

    fn write_row<S: AsRef<str>>(&self, output: &mut String, cells: &[S]) {
        output.push('|');
        for (i, cell) in cells.iter().enumerate() {
            let width = self.widths.get(i).copied().unwrap_or(1);
            let _ = write!(
                output,
                " {:<width$} |",
                truncate(cell.as_ref(), width),
                width = width
            );
        }
        output.push('\n');
    }
}

/// Union of every row's columns, keeping the first-seen (map) order.
fn column_union(rows: &[Row]) -> Vec<String> {
    let mut headers: Vec<String> = Vec::new();
    for row in rows {
        for column in row.columns() {
            if !headers.iter().any(|h| h == column) {
                headers.push(column.to_string());
            }
        }
    }
    headers
}

// widths are measured in chars, so slicing must be too
fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        value.to_string()
    } else if width > 3 {
        let mut truncated: String = value.chars().take(width - 3).collect();
        truncated.push_str("...");
        truncated
    } else {
        value.chars().take(width).collect()
    }
}
