//! Literal builders for states and values.

use tether_core::{Map, State, Value};

/// Build a state object from literal pairs.
pub fn state_of<const N: usize>(entries: [(&str, Value); N]) -> State {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_owned(), value))
        .collect()
}

/// Build a mapping's entries from literal pairs.
pub fn map_of<const N: usize>(entries: [(&str, Value); N]) -> Map {
    state_of(entries)
}

/// Build a sequence value from literal items.
pub fn seq_of<const N: usize>(items: [Value; N]) -> Value {
    Value::Seq(items.into_iter().collect())
}
