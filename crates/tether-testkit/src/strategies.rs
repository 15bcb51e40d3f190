//! Proptest strategies over structured values.
//!
//! `arb_value` covers the whole value space including absent shapes;
//! `arb_roundtrip_state` is restricted to states the codec round-trips
//! exactly (present values, mappings already canonical, no floats so
//! equality is literal).

pub use proptest;

use proptest::prelude::*;
use tether_core::{Map, State, Value};

/// Any scalar, including the absent-equivalent ones.
pub fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-z0-9 ]{0,8}".prop_map(Value::from),
    ]
}

/// Any value: scalars, sequences, and mappings up to a few levels deep.
pub fn arb_value() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Seq),
            prop::collection::vec(("[a-z]{1,6}", inner), 0..4)
                .prop_map(|entries| entries.into_iter().collect::<Value>()),
        ]
    })
}

/// A one-level mapping with arbitrary (possibly absent) entry values.
pub fn arb_shallow_map() -> impl Strategy<Value = Map> {
    prop::collection::vec(("[a-z]{1,6}", arb_value()), 0..6)
        .prop_map(|entries| entries.into_iter().collect())
}

fn arb_present_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-z0-9 ]{1,8}".prop_map(Value::from),
    ]
}

/// A state object the codec round-trips exactly: every top-level value is
/// present, and mapping values carry only present entries.
pub fn arb_roundtrip_state() -> impl Strategy<Value = State> {
    let present_value = prop_oneof![
        arb_present_scalar(),
        prop::collection::vec(arb_present_scalar(), 1..4).prop_map(Value::Seq),
        prop::collection::vec(("[a-z]{1,6}", arb_present_scalar()), 1..4)
            .prop_map(|entries| entries.into_iter().collect::<Value>()),
    ];
    prop::collection::vec(("[a-z]{1,6}", present_value), 0..5)
        .prop_map(|entries| entries.into_iter().collect())
}
