//! Custom proptest strategies for i18n domain types.

use proptest::prelude::*;
use serde_json::{Map, Value};

/// Two ASCII letters in any case.
pub fn valid_locale() -> impl Strategy<Value = String> {
    "[a-zA-Z]{2}"
}

/// Strings that are not two ASCII letters.
pub fn invalid_locale() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z]{0,1}",
        "[a-zA-Z]{3,8}",
        "[a-z]{2}[-_][A-Z]{2}",
        "[0-9]{2}",
    ]
}

/// A single key segment.
pub fn key_segment() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,11}"
}

/// A dotted key of one to four segments.
pub fn dotted_key() -> impl Strategy<Value = String> {
    prop::collection::vec(key_segment(), 1..5).prop_map(|parts| parts.join("."))
}

/// Translation text without interpolation delimiters.
pub fn plain_text() -> impl Strategy<Value = String> {
    "[^{}]{0,40}"
}

/// A per-locale structure of nested mappings with string leaves.
pub fn translation_structure() -> impl Strategy<Value = Value> {
    let node = plain_text()
        .prop_map(Value::String)
        .prop_recursive(3, 32, 4, |inner| mapping(inner.boxed()));
    mapping(node.boxed())
}

fn mapping(values: BoxedStrategy<Value>) -> impl Strategy<Value = Value> {
    prop::collection::btree_map(key_segment(), values, 1..4)
        .prop_map(|map| Value::Object(map.into_iter().collect::<Map<String, Value>>()))
}
