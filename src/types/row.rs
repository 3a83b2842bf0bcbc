//! # Row Representation
//!
//! A [`Row`] is a flat, ordered mapping from column name to [`Value`]. Rows
//! in ledger tables carry three reserved fields alongside the user columns:
//! `_version`, `_created_at`, and `_is_active`. Non-ledger rows never have
//! them, and a missing `_is_active` counts as active, so plain rows read
//! back from disk behave uniformly.
//!
//! The map is a `BTreeMap` so persisted JSON and iteration order are
//! deterministic.

use crate::types::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Version counter of a ledger row, starting at 1 per primary-key group.
pub const VERSION_FIELD: &str = "_version";
/// ISO-8601 creation timestamp of a ledger row version.
pub const CREATED_AT_FIELD: &str = "_created_at";
/// Visibility flag. Flipped to `false` when a version is superseded or deleted.
pub const ACTIVE_FIELD: &str = "_is_active";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    fields: BTreeMap<String, Value>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.fields.get(column)
    }

    pub fn set(&mut self, column: impl Into<String>, value: Value) {
        self.fields.insert(column.into(), value);
    }

    pub fn contains(&self, column: &str) -> bool {
        self.fields.contains_key(column)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn version(&self) -> Option<i64> {
        match self.get(VERSION_FIELD) {
            Some(Value::Int(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn created_at(&self) -> Option<&str> {
        match self.get(CREATED_AT_FIELD) {
            Some(Value::Text(ts)) => Some(ts.as_str()),
            _ => None,
        }
    }

    /// Rows without an `_is_active` field are active by definition.
    pub fn is_active(&self) -> bool {
        !matches!(self.get(ACTIVE_FIELD), Some(Value::Bool(false)))
    }

    pub fn set_active(&mut self, active: bool) {
        self.set(ACTIVE_FIELD, Value::Bool(active));
    }

    /// Single-column equality check. An absent column never matches.
    pub fn matches(&self, column: &str, literal: &Value) -> bool {
        match self.get(column) {
            Some(value) => value.loosely_equals(literal),
            None => false,
        }
    }

    /// Keeps the requested columns, silently skipping any the row lacks.
    pub fn project(&self, columns: &[String]) -> Row {
        columns
            .iter()
            .filter_map(|column| {
                self.get(column)
                    .map(|value| (column.clone(), value.clone()))
            })
            .collect()
    }

    /// Copy of the row with every column renamed to `<table>.<column>`.
    pub fn prefixed(&self, table: &str) -> Row {
        self.iter()
            .map(|(column, value)| (format!("{}.{}", table, column), value.clone()))
            .collect()
    }
}

impl FromIterator<(String, Value)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Row {
    type Item = (String, Value);
    type IntoIter = std::collections::btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> Row {
        let mut row = Row::new();
        row.set("id", Value::Int(1));
        row.set("name", Value::Text("Alice".to_string()));
        row.set("balance", Value::Float(100.0));
        row
    }

    #[test]
    fn missing_active_flag_counts_as_active() {
        let row = sample_row();
        assert!(row.is_active());
    }

    #[test]
    fn deactivated_row_reports_inactive() {
        let mut row = sample_row();
        row.set_active(false);
        assert!(!row.is_active());
    }

    #[test]
    fn matches_uses_loose_equality() {
        let row = sample_row();
        assert!(row.matches("id", &Value::Float(1.0)));
        assert!(row.matches("balance", &Value::Int(100)));
        assert!(!row.matches("name", &Value::Text("Bob".to_string())));
    }

    #[test]
    fn absent_column_never_matches() {
        let row = sample_row();
        assert!(!row.matches("missing", &Value::Int(1)));
    }

    #[test]
    fn project_skips_absent_columns() {
        let row = sample_row();
        let projected = row.project(&["id".to_string(), "missing".to_string()]);

        assert_eq!(projected.len(), 1);
        assert_eq!(projected.get("id"), Some(&Value::Int(1)));
        assert!(!projected.contains("missing"));
    }

    #[test]
    fn prefixed_namespaces_every_column() {
        let row = sample_row();
        let prefixed = row.prefixed("users");

        assert_eq!(prefixed.get("users.id"), Some(&Value::Int(1)));
        assert_eq!(
            prefixed.get("users.name"),
            Some(&Value::Text("Alice".to_string()))
        );
        assert!(!prefixed.contains("id"));
    }

    #[test]
    fn serde_keeps_flat_json_shape() {
        let mut row = sample_row();
        row.set(VERSION_FIELD, Value::Int(1));
        row.set_active(true);

        let json = serde_json::to_string(&row).expect("Failed to serialize row");
        assert!(json.contains(r#""_version":1"#));
        assert!(json.contains(r#""_is_active":true"#));
        assert!(json.contains(r#""id":1"#));

        let back: Row = serde_json::from_str(&json).expect("Failed to deserialize row");
        assert_eq!(back, row);
    }
}
