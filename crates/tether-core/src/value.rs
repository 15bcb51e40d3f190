//! Structured values, presence, and canonicalization.
//!
//! A [`Value`] is the unit of synchronized state: a scalar, an ordered
//! sequence, or a string-keyed insertion-ordered mapping. The serde form is
//! untagged, so a `Value` serializes to exactly the JSON literal it denotes
//! and parses back from it.
//!
//! Presence is the judgment of whether a value should appear in the textual
//! form at all; [`canonicalize`] prunes absent entries from a mapping one
//! level deep before encoding.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// String-keyed, insertion-ordered collection of values.
pub type Map = IndexMap<String, Value>;

/// The top-level state object: parameter name to value.
///
/// Shape-identical to a mapping value; owned by the consumer. The
/// synchronizer reads it and reports decoded states back through a callback,
/// never mutating it in place.
pub type State = Map;

/// A structured value: scalar, sequence, or mapping.
///
/// `Null` is the absent-equivalent scalar. There is no distinct "absent"
/// tag in the wire form; absence is inferred by [`Value::is_present`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Absent-equivalent scalar, the JSON `null`.
    Null,
    /// Boolean scalar. `false` still counts as present.
    Bool(bool),
    /// Numeric scalar. `0` still counts as present.
    Number(serde_json::Number),
    /// String scalar. The empty string counts as absent.
    String(String),
    /// Ordered sequence of values.
    Seq(Vec<Value>),
    /// String-keyed, insertion-ordered mapping.
    Map(Map),
}

impl Value {
    /// Whether this value should appear in the rendered textual form.
    ///
    /// - scalars: present unless `Null` or the empty string
    /// - sequences: present iff non-empty, without looking at the elements
    /// - mappings: present iff at least one entry value is present
    ///   (recursively)
    ///
    /// Total over any value; never fails.
    pub fn is_present(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(_) | Value::Number(_) => true,
            Value::String(text) => !text.is_empty(),
            Value::Seq(items) => !items.is_empty(),
            Value::Map(entries) => entries.values().any(Value::is_present),
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

/// Prune absent entries from a mapping, one level deep.
///
/// Keeps exactly the entries whose value is present per
/// [`Value::is_present`]. The pass is not recursive: mappings nested below
/// the pruned one are kept as-is, and an inner mapping disappears only when
/// the presence predicate judges it absent as a whole. An all-absent input
/// yields an empty map, which the encoder then drops entirely.
///
/// Idempotent: canonicalizing a canonical map returns it unchanged.
pub fn canonicalize(entries: &Map) -> Map {
    entries
        .iter()
        .filter(|(_, value)| value.is_present())
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Value::Bool(flag)
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Value::Number(number.into())
    }
}

impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Value::Number(number.into())
    }
}

impl From<u32> for Value {
    fn from(number: u32) -> Self {
        Value::Number(number.into())
    }
}

impl From<u64> for Value {
    fn from(number: u64) -> Self {
        Value::Number(number.into())
    }
}

impl From<f64> for Value {
    /// Non-finite floats have no JSON literal and map to `Null`.
    fn from(number: f64) -> Self {
        serde_json::Number::from_f64(number).map_or(Value::Null, Value::Number)
    }
}

impl From<serde_json::Number> for Value {
    fn from(number: serde_json::Number) -> Self {
        Value::Number(number)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::String(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::String(text)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Seq(items)
    }
}

impl From<Map> for Value {
    fn from(entries: Map) -> Self {
        Value::Map(entries)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(items: I) -> Self {
        Value::Seq(items.into_iter().collect())
    }
}

impl FromIterator<(String, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(entries: I) -> Self {
        Value::Map(entries.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map_of<const N: usize>(entries: [(&str, Value); N]) -> Map {
        entries
            .into_iter()
            .map(|(key, value)| (key.to_owned(), value))
            .collect()
    }

    #[test]
    fn empty_sequence_is_absent() {
        assert!(!Value::Seq(vec![]).is_present());
    }

    #[test]
    fn non_empty_sequence_is_present_regardless_of_elements() {
        assert!(Value::Seq(vec![Value::Null]).is_present());
        assert!(Value::Seq(vec![Value::String(String::new())]).is_present());
    }

    #[test]
    fn empty_mapping_is_absent() {
        assert!(!Value::Map(Map::new()).is_present());
    }

    #[test]
    fn mapping_with_only_absent_values_is_absent() {
        let entries = map_of([("a", Value::from("")), ("b", Value::Null)]);
        assert!(!Value::Map(entries).is_present());
    }

    #[test]
    fn mapping_with_one_present_value_is_present() {
        let entries = map_of([("a", Value::from("")), ("b", Value::from(1))]);
        assert!(Value::Map(entries).is_present());
    }

    #[test]
    fn scalar_presence() {
        assert!(!Value::from("").is_present());
        assert!(Value::from("x").is_present());
        assert!(Value::from(0).is_present());
        assert!(Value::from(false).is_present());
        assert!(!Value::Null.is_present());
    }

    #[test]
    fn presence_recurses_through_nested_mappings() {
        let inner = map_of([("deep", Value::from(""))]);
        let outer = map_of([("inner", Value::Map(inner))]);
        assert!(!Value::Map(outer).is_present());
    }

    #[test]
    fn canonicalize_keeps_only_present_entries() {
        let entries = map_of([
            ("category", Value::from("electronics")),
            ("sub_category", Value::Seq(vec![])),
        ]);
        let canonical = canonicalize(&entries);
        assert_eq!(canonical.len(), 1);
        assert_eq!(canonical.get("category"), Some(&Value::from("electronics")));
    }

    #[test]
    fn canonicalize_all_absent_yields_empty_map() {
        let entries = map_of([("a", Value::Seq(vec![])), ("b", Value::from(""))]);
        assert!(canonicalize(&entries).is_empty());
    }

    #[test]
    fn canonicalize_does_not_prune_below_one_level() {
        let deep = map_of([("kept", Value::from("")), ("live", Value::from(1))]);
        let entries = map_of([("inner", Value::Map(deep.clone()))]);
        let canonical = canonicalize(&entries);
        assert_eq!(canonical.get("inner"), Some(&Value::Map(deep)));
    }

    #[test]
    fn canonicalize_is_idempotent() {
        let entries = map_of([
            ("a", Value::from(1)),
            ("b", Value::from("")),
            ("c", Value::from(vec![Value::from("x")])),
        ]);
        let once = canonicalize(&entries);
        assert_eq!(canonicalize(&once), once);
    }

    #[test]
    fn untagged_serde_form_is_the_json_literal() {
        let value = Value::from(vec![Value::from("apple"), Value::from(2)]);
        let text = serde_json::to_string(&value).unwrap();
        assert_eq!(text, r#"["apple",2]"#);
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, value);
    }

    #[test]
    fn null_literal_parses_to_null_variant() {
        let parsed: Value = serde_json::from_str("null").unwrap();
        assert_eq!(parsed, Value::Null);
    }
}
