//! Projection of flat state into the nested JSON document.
//!
//! Folds every flat entry through [`set_deep`], starting from an empty
//! tree. Entries whose value is the empty string are omitted entirely
//! (sparse projection); that is the only filtering rule. Key uniqueness and
//! the no-prefix-collision invariant mean iteration order cannot change the
//! result.

use crate::paths::{DottedPath, set_deep};
use crate::state::FlatState;
use serde_json::{Map, Value};

/// Derive the nested JSON document from a flat state snapshot.
pub fn project(state: &FlatState) -> Value {
    let mut doc = Value::Object(Map::new());
    for (key, value) in state.entries() {
        if value.is_empty_text() {
            continue;
        }
        doc = set_deep(&doc, &DottedPath::parse(key), value.to_json());
    }
    doc
}
