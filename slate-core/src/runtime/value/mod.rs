//! Runtime values
//!
//! [`Value`] is a closed set of kinds. Every capability (truthiness, text
//! forms, coercion, equality, ordering, arithmetic) is one exhaustive match, so
//! adding a kind is a compile error until each capability handles it.
//!
//! Values are immutable from the program's point of view: operators build new
//! values, and arrays are copied when loaded from a binding, so no value can
//! reach itself.

use serde::{Deserialize, Serialize};
use std::fmt;

mod array;
pub mod boolean;
pub mod number;
mod operators;
pub mod string;

pub use array::ArrayValue;
pub use operators::{BinaryOperator, ComparisonOperator};

/// Kind tag of a [`Value`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    Number,
    String,
    Boolean,
    Array,
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Number => "Number",
            ValueKind::String => "String",
            ValueKind::Boolean => "Boolean",
            ValueKind::Array => "Array",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind-tagged runtime datum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Number(f64),
    String(String),
    Boolean(bool),
    Array(ArrayValue),
}

impl Value {
    // ==================== Construction ====================

    pub fn string(text: impl Into<String>) -> Self {
        Value::String(text.into())
    }

    /// The value of an unbound variable or a missing array index
    pub fn empty() -> Self {
        Value::String(String::new())
    }

    pub fn empty_array() -> Self {
        Value::Array(ArrayValue::new())
    }

    // ==================== Inspection ====================

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Array(_) => ValueKind::Array,
        }
    }

    pub fn as_array(&self) -> Option<&ArrayValue> {
        match self {
            Value::Array(array) => Some(array),
            _ => None,
        }
    }

    /// This value as a mutable array, first replacing it with an empty array
    /// when it is anything else
    pub fn make_array(&mut self) -> &mut ArrayValue {
        if !matches!(self, Value::Array(_)) {
            *self = Value::empty_array();
        }
        match self {
            Value::Array(array) => array,
            _ => unreachable!(),
        }
    }

    /// Numeric reading of this value, if it has one
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::String(s) => string::parse_number(s),
            Value::Boolean(_) | Value::Array(_) => None,
        }
    }

    /// Truthiness: nonzero numbers, non-empty strings and `True` are true.
    /// Arrays are always false.
    pub fn to_boolean(&self) -> bool {
        match self {
            Value::Number(n) => number::is_truthy(*n),
            Value::String(s) => !s.is_empty(),
            Value::Boolean(b) => *b,
            Value::Array(_) => false,
        }
    }

    /// Text shown in a debugger: strings are quoted, arrays list their entries
    pub fn to_debugger_string(&self) -> String {
        match self {
            Value::Number(n) => number::format_number(*n),
            Value::String(s) => string::quote(s),
            Value::Boolean(b) => boolean::to_text(*b).to_string(),
            Value::Array(array) => array.to_debugger_string(),
        }
    }

    /// Text shown to the program's user. Presentation only: parsing it back
    /// does not in general reconstruct the value.
    pub fn to_value_string(&self) -> String {
        match self {
            Value::Number(n) => number::format_number(*n),
            Value::String(s) => s.clone(),
            Value::Boolean(b) => boolean::to_text(*b).to_string(),
            Value::Array(array) => array.to_debugger_string(),
        }
    }

    /// Numeric coercion. Strings holding a number become that number; every
    /// other value comes back unchanged, so callers must check the kind.
    pub fn try_convert_to_number(&self) -> Value {
        match self {
            Value::String(s) => match string::parse_number(s) {
                Some(n) => Value::Number(n),
                None => self.clone(),
            },
            Value::Number(_) | Value::Boolean(_) | Value::Array(_) => self.clone(),
        }
    }

    // ==================== Equality & ordering ====================

    /// Language-level equality.
    ///
    /// Arrays only equal other arrays, compared through their debugger
    /// strings, so the same entries inserted in a different order are not
    /// equal.
    pub fn is_equal_to(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Array(a), Value::Array(b)) => a.to_debugger_string() == b.to_debugger_string(),
            (Value::Array(_), _) | (_, Value::Array(_)) => false,

            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Number(n), Value::String(s)) | (Value::String(s), Value::Number(n)) => {
                string::parse_number(s).is_some_and(|parsed| parsed == *n)
            }
            (Value::Number(_), Value::Boolean(_)) | (Value::Boolean(_), Value::Number(_)) => false,

            (Value::String(a), Value::String(b)) => a == b,
            (Value::String(s), Value::Boolean(b)) | (Value::Boolean(b), Value::String(s)) => {
                boolean::matches_text(*b, s)
            }

            (Value::Boolean(a), Value::Boolean(b)) => a == b,
        }
    }

    pub fn is_less_than(&self, other: &Value) -> bool {
        match Self::ordering_operands(self, other) {
            Some((a, b)) => a < b,
            None => false,
        }
    }

    pub fn is_greater_than(&self, other: &Value) -> bool {
        match Self::ordering_operands(self, other) {
            Some((a, b)) => a > b,
            None => false,
        }
    }

    /// Both sides as numbers; arrays and booleans have no ordering
    fn ordering_operands(lhs: &Value, rhs: &Value) -> Option<(f64, f64)> {
        match (lhs, rhs) {
            (Value::Array(_), _) | (_, Value::Array(_)) => None,
            _ => Some((lhs.as_number()?, rhs.as_number()?)),
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::empty()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_value_string())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<ArrayValue> for Value {
    fn from(array: ArrayValue) -> Self {
        Value::Array(array)
    }
}
