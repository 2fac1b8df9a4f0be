//! Array values: ordered string-keyed maps

use super::Value;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered mapping from string keys to values.
///
/// Iteration follows insertion order. Overwriting an existing key keeps its
/// original position; removing a key shifts later entries down.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArrayValue {
    entries: IndexMap<String, Value>,
}

impl ArrayValue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// The array stored at `key`, created (or replacing a non-array) in place
    pub fn child_array(&mut self, key: &str) -> &mut ArrayValue {
        self.entries
            .entry(key.to_string())
            .or_insert_with(Value::empty_array)
            .make_array()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Set an index, returning the previous value
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.entries.insert(key.into(), value)
    }

    /// Delete an index, returning its value
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// `[k1=v1, k2=v2]`, each value in its debugger form
    pub fn to_debugger_string(&self) -> String {
        let body = self
            .entries
            .iter()
            .map(|(key, value)| format!("{key}={}", value.to_debugger_string()))
            .collect::<Vec<_>>()
            .join(", ");
        format!("[{body}]")
    }
}

// Entry order participates, matching the language-level comparison.
impl PartialEq for ArrayValue {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len() && self.entries.iter().eq(other.entries.iter())
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for ArrayValue {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ArrayValue {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overwrite_keeps_position() {
        let mut array = ArrayValue::new();
        array.insert("a", Value::Number(1.0));
        array.insert("b", Value::Number(2.0));
        let previous = array.insert("a", Value::Number(3.0));

        assert_eq!(previous, Some(Value::Number(1.0)));
        assert_eq!(array.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(array.to_debugger_string(), "[a=3, b=2]");
    }

    #[test]
    fn test_remove_shifts_entries() {
        let mut array: ArrayValue = [
            ("x", Value::Number(1.0)),
            ("y", Value::Number(2.0)),
            ("z", Value::Number(3.0)),
        ]
        .into_iter()
        .collect();

        assert_eq!(array.remove("y"), Some(Value::Number(2.0)));
        assert_eq!(array.remove("missing"), None);
        assert_eq!(array.keys().collect::<Vec<_>>(), vec!["x", "z"]);
    }

    #[test]
    fn test_nested_debugger_string() {
        let inner: ArrayValue = [("k", Value::string("v"))].into_iter().collect();
        let outer: ArrayValue = [
            ("1", Value::Array(inner)),
            ("2", Value::Boolean(true)),
        ]
        .into_iter()
        .collect();
        assert_eq!(outer.to_debugger_string(), "[1=[k=\"v\"], 2=True]");
    }

    #[test]
    fn test_child_array_replaces_scalar_in_place() {
        let mut array: ArrayValue = [("a", Value::Number(1.0)), ("b", Value::Number(2.0))]
            .into_iter()
            .collect();
        array.child_array("a").insert("x", Value::Boolean(true));
        array.child_array("c").insert("y", Value::Number(3.0));
        array.child_array("c").insert("z", Value::Number(4.0));

        assert_eq!(array.to_debugger_string(), "[a=[x=True], b=2, c=[y=3, z=4]]");
    }

    #[test]
    fn test_empty() {
        let array = ArrayValue::new();
        assert!(array.is_empty());
        assert_eq!(array.to_debugger_string(), "[]");
    }

    #[test]
    fn test_rust_equality_is_order_sensitive() {
        let ab: ArrayValue = [("a", Value::Number(1.0)), ("b", Value::Number(2.0))]
            .into_iter()
            .collect();
        let ba: ArrayValue = [("b", Value::Number(2.0)), ("a", Value::Number(1.0))]
            .into_iter()
            .collect();
        assert_ne!(ab, ba);
        assert_eq!(ab, ab.clone());
    }
}
