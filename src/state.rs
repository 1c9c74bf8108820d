//! Flat state store: the live value of every schema field.
//!
//! The store maps each field's dotted key to its current [`Value`], seeded
//! from schema defaults. It is never mutated in place: `set` returns a new
//! store with a bumped version, so callers always hold a consistent snapshot
//! and derivations stay pure functions of one state value.
//!
//! Using a `BTreeMap` keeps entry iteration deterministic, which in turn
//! makes projection and export output deterministic.

use crate::error::{PortrayError, Result};
use crate::schema::Schema;
use crate::value::Value;
use std::collections::BTreeMap;

/// An immutable snapshot of every field's current value.
#[derive(Debug, Clone)]
pub struct FlatState {
    values: BTreeMap<String, Value>,
    version: u64,
}

impl FlatState {
    /// A state with every schema field set to its default.
    pub fn seeded(schema: &Schema) -> Self {
        let values = schema
            .fields()
            .map(|f| (f.key.clone(), f.default.clone()))
            .collect();
        Self { values, version: 0 }
    }

    /// An empty state: no field has a value, so only explicit sets appear
    /// in the projected document.
    pub fn empty() -> Self {
        Self {
            values: BTreeMap::new(),
            version: 0,
        }
    }

    /// Snapshot version; bumped by every `set`.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Current value for a key, if any.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Number of populated entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no field has a value.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Entries in key order.
    pub fn entries(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }

    /// Return a new state with `key` set to an already-typed value.
    ///
    /// The key must name a schema field; the value is coerced to the
    /// field's kind. The receiver is left untouched.
    pub fn set(&self, schema: &Schema, key: &str, value: Value) -> Result<Self> {
        let field = schema.field(key).ok_or_else(|| {
            PortrayError::UserError(format!(
                "unknown field key '{}'.\n\n\
                 Use `portray schema` to list available fields.",
                key
            ))
        })?;
        let coerced = field.kind.coerce_value(key, value)?;

        let mut values = self.values.clone();
        values.insert(key.to_string(), coerced);
        Ok(Self {
            values,
            version: self.version + 1,
        })
    }

    /// Return a new state with `key` set from a raw string, coerced to the
    /// field's kind (the `--set key=value` path).
    pub fn set_raw(&self, schema: &Schema, key: &str, raw: &str) -> Result<Self> {
        let field = schema.field(key).ok_or_else(|| {
            PortrayError::UserError(format!(
                "unknown field key '{}'.\n\n\
                 Use `portray schema` to list available fields.",
                key
            ))
        })?;
        let coerced = field.kind.coerce(key, raw)?;

        let mut values = self.values.clone();
        values.insert(key.to_string(), coerced);
        Ok(Self {
            values,
            version: self.version + 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::registry;

    #[test]
    fn seeded_state_has_every_field_default() {
        let schema = registry().unwrap();
        let state = FlatState::seeded(&schema);
        assert_eq!(state.len(), schema.field_count());
        assert_eq!(state.version(), 0);

        for field in schema.fields() {
            assert_eq!(state.get(&field.key), Some(&field.default));
        }
    }

    #[test]
    fn select_defaults_seed_to_declared_default() {
        let schema = registry().unwrap();
        let state = FlatState::seeded(&schema);
        assert_eq!(state.get("skin.tone"), Some(&Value::Text("medium".to_string())));
        assert_eq!(state.get("subject.type"), Some(&Value::Text("human".to_string())));
    }

    #[test]
    fn toggle_defaults_seed_as_declared() {
        let schema = registry().unwrap();
        let state = FlatState::seeded(&schema);
        assert_eq!(
            state.get("realism.avoid_plastic_skin"),
            Some(&Value::Toggle(true))
        );
    }

    #[test]
    fn set_replaces_wholesale_and_bumps_version() {
        let schema = registry().unwrap();
        let state = FlatState::seeded(&schema);
        let next = state.set_raw(&schema, "skin.tone", "olive").unwrap();

        assert_eq!(next.get("skin.tone"), Some(&Value::Text("olive".to_string())));
        assert_eq!(next.version(), 1);
        // Original snapshot untouched.
        assert_eq!(state.get("skin.tone"), Some(&Value::Text("medium".to_string())));
        assert_eq!(state.version(), 0);
    }

    #[test]
    fn set_raw_coerces_to_field_kind() {
        let schema = registry().unwrap();
        let state = FlatState::seeded(&schema);

        let next = state.set_raw(&schema, "subject.age", "42").unwrap();
        assert_eq!(next.get("subject.age"), Some(&Value::Number(42.0)));

        let next = state.set_raw(&schema, "realism.avoid_ai_glow", "off").unwrap();
        assert_eq!(next.get("realism.avoid_ai_glow"), Some(&Value::Toggle(false)));
    }

    #[test]
    fn set_unknown_key_is_rejected() {
        let schema = registry().unwrap();
        let state = FlatState::seeded(&schema);
        let err = state.set_raw(&schema, "skin.glow", "high").unwrap_err();
        assert!(err.to_string().contains("unknown field key 'skin.glow'"));
    }

    #[test]
    fn set_bad_number_is_rejected() {
        let schema = registry().unwrap();
        let state = FlatState::seeded(&schema);
        let err = state.set_raw(&schema, "subject.age", "old").unwrap_err();
        assert!(err.to_string().contains("needs a numeric value"));
    }

    #[test]
    fn empty_state_has_no_entries() {
        let state = FlatState::empty();
        assert!(state.is_empty());
        assert_eq!(state.get("skin.tone"), None);
    }
}
