//! # Tagged Values
//!
//! [`Value`] is the single value representation carried from the parser
//! through storage and comparison. Statement literals only ever produce the
//! `Int`, `Float`, and `Text` variants; `Bool` exists because the ledger
//! active flag is persisted as a JSON boolean inside the same flat row map.
//!
//! ## Comparison Rule
//!
//! Equality is loose by design: when both sides are numeric they compare as
//! floats (so `1` equals `1.0`), otherwise both sides are rendered to text
//! and compared (so the literal `'1'` matches a stored integer `1`). The
//! same rule drives WHERE predicates and join matching.
//!
//! ## Serialization
//!
//! Values serialize untagged, i.e. as plain JSON scalars. A persisted row
//! looks like `{"id": 1, "balance": 99.5, "name": "Alice"}` with no variant
//! wrappers, which keeps the on-disk files readable and diffable.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
}

impl Value {
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Loose equality: numeric when both sides are numeric, textual otherwise.
    pub fn loosely_equals(&self, other: &Value) -> bool {
        match (self.as_f64(), other.as_f64()) {
            (Some(a), Some(b)) => a == b,
            _ => match (self, other) {
                (Value::Text(a), Value::Text(b)) => a == b,
                _ => self.to_string() == other.to_string(),
            },
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Text(s) => write!(f, "{}", s),
            Value::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_and_float_compare_numerically() {
        assert!(Value::Int(1).loosely_equals(&Value::Float(1.0)));
        assert!(Value::Float(2.5).loosely_equals(&Value::Float(2.5)));
        assert!(!Value::Int(1).loosely_equals(&Value::Float(1.5)));
    }

    #[test]
    fn text_literal_matches_stored_number_as_text() {
        assert!(Value::Text("1".to_string()).loosely_equals(&Value::Int(1)));
        assert!(!Value::Text("1.0".to_string()).loosely_equals(&Value::Int(1)));
    }

    #[test]
    fn text_compares_exactly() {
        assert!(Value::Text("alice".to_string()).loosely_equals(&Value::Text("alice".to_string())));
        assert!(!Value::Text("alice".to_string()).loosely_equals(&Value::Text("Alice".to_string())));
    }

    #[test]
    fn untagged_serde_round_trips_scalars() {
        let values = vec![
            Value::Int(42),
            Value::Float(1.5),
            Value::Text("hello".to_string()),
            Value::Bool(true),
        ];
        let json = serde_json::to_string(&values).expect("Failed to serialize values");
        assert_eq!(json, r#"[42,1.5,"hello",true]"#);

        let back: Vec<Value> = serde_json::from_str(&json).expect("Failed to deserialize values");
        assert_eq!(back, values);
    }

    #[test]
    fn integral_json_numbers_stay_ints() {
        let value: Value = serde_json::from_str("7").expect("Failed to parse int");
        assert_eq!(value, Value::Int(7));

        let value: Value = serde_json::from_str("7.0").expect("Failed to parse float");
        assert_eq!(value, Value::Float(7.0));
    }
}
