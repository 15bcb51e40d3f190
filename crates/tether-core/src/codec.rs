//! The state/snapshot codec.
//!
//! [`decode`] turns each snapshot text into a typed value: a successful
//! JSON-literal parse wins, anything else is kept as a raw string. This is
//! what lets a bare word like `?q=shoes` coexist with typed parameters.
//!
//! [`encode`] walks the state object in its own order, canonicalizes
//! mapping-typed fields one level deep, drops absent values, and serializes
//! everything that remains as a JSON literal. Neither direction can fail.

use crate::snapshot::Snapshot;
use crate::value::{canonicalize, State, Value};

/// Decode a snapshot into a state object.
///
/// Every key in the snapshot yields exactly one key in the output. Parse
/// failure is a normal branch, not an error: the raw text is stored
/// unchanged as a string value.
pub fn decode(snapshot: &Snapshot) -> State {
    let mut state = State::new();
    for (key, text) in snapshot.iter() {
        let value = serde_json::from_str::<Value>(text)
            .unwrap_or_else(|_| Value::String(text.to_owned()));
        state.insert(key.to_owned(), value);
    }
    state
}

/// Encode a state object into a fresh snapshot.
///
/// Keys are processed in the state's iteration order. Mapping-typed values
/// are canonicalized one level deep first; a value that is absent after
/// canonicalization contributes no entry at all.
pub fn encode(state: &State) -> Snapshot {
    let mut snapshot = Snapshot::new();
    for (key, value) in state {
        let value = match value {
            Value::Map(entries) => Value::Map(canonicalize(entries)),
            other => other.clone(),
        };
        if !value.is_present() {
            continue;
        }
        match serde_json::to_string(&value) {
            Ok(text) => snapshot.set(key.clone(), text),
            Err(error) => {
                tracing::warn!(key = %key, error = %error, "value has no JSON literal form; key dropped");
            }
        }
    }
    snapshot
}
