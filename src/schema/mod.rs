//! Field schema for portray.
//!
//! The schema is a static, ordered list of categories, each holding an
//! ordered list of field definitions. A field is identified by a dotted key
//! (e.g. `skin.tone`) that doubles as its location in the projected JSON
//! document, so the key set is the contract with downstream consumers:
//! renaming a key is a breaking change.
//!
//! Construction validates the key set: duplicate keys and strict-prefix
//! collisions (`a` alongside `a.b`) are rejected, because a prefix collision
//! would make the nested projection ambiguous (one field's leaf would be
//! another field's branch).

use crate::error::{PortrayError, Result};
use crate::value::Value;
use serde::Serialize;
use std::collections::BTreeMap;

mod registry;
#[cfg(test)]
mod tests;

pub use registry::{MICRO_BASELINE, registry};

/// The control kind of a field, with its constraints.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ControlKind {
    /// Single choice from an ordered option list.
    Select { options: Vec<String> },
    /// Free text with an optional placeholder hint.
    Text {
        #[serde(skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
    },
    /// Bounded numeric input.
    Number { min: f64, max: f64, step: f64 },
    /// Bounded continuous slider.
    Slider { min: f64, max: f64, step: f64 },
    /// Boolean toggle.
    Toggle,
}

impl ControlKind {
    /// Short name used in error messages and listings.
    pub fn name(&self) -> &'static str {
        match self {
            ControlKind::Select { .. } => "select",
            ControlKind::Text { .. } => "text",
            ControlKind::Number { .. } => "number",
            ControlKind::Slider { .. } => "slider",
            ControlKind::Toggle => "toggle",
        }
    }

    /// Coerce a raw string (as given on the command line) into a typed
    /// value matching this kind. This is the only validation performed on
    /// user input; option membership and numeric bounds are not checked.
    pub fn coerce(&self, key: &str, raw: &str) -> Result<Value> {
        match self {
            ControlKind::Select { .. } | ControlKind::Text { .. } => {
                Ok(Value::Text(raw.to_string()))
            }
            ControlKind::Number { .. } | ControlKind::Slider { .. } => {
                raw.parse::<f64>().map(Value::Number).map_err(|_| {
                    PortrayError::UserError(format!(
                        "field '{}' is a {} and needs a numeric value, got '{}'",
                        key,
                        self.name(),
                        raw
                    ))
                })
            }
            ControlKind::Toggle => match raw.to_ascii_lowercase().as_str() {
                "true" | "on" | "yes" | "1" => Ok(Value::Toggle(true)),
                "false" | "off" | "no" | "0" => Ok(Value::Toggle(false)),
                _ => Err(PortrayError::UserError(format!(
                    "field '{}' is a toggle and needs true/false, got '{}'",
                    key, raw
                ))),
            },
        }
    }

    /// Coerce an already-typed value (as read from a values file) into this
    /// kind. Matching kinds pass through; text re-coerces through the string
    /// path; anything else is rendered and re-coerced.
    pub fn coerce_value(&self, key: &str, value: Value) -> Result<Value> {
        match (self, &value) {
            (ControlKind::Number { .. } | ControlKind::Slider { .. }, Value::Number(_)) => {
                Ok(value)
            }
            (ControlKind::Toggle, Value::Toggle(_)) => Ok(value),
            (ControlKind::Select { .. } | ControlKind::Text { .. }, Value::Text(_)) => Ok(value),
            _ => self.coerce(key, &value.to_string()),
        }
    }
}

/// One field definition.
#[derive(Debug, Clone, Serialize)]
pub struct FieldDef {
    /// Dotted key; unique across the schema and prefix-collision-free.
    pub key: String,
    /// Display label.
    pub label: String,
    /// Control kind and constraints.
    #[serde(flatten)]
    pub kind: ControlKind,
    /// Default value; its type matches the control kind.
    pub default: Value,
}

/// A named, ordered grouping of fields. UI organization only; categories
/// have no effect on the projected document.
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub fields: Vec<FieldDef>,
}

/// The validated schema: ordered categories plus a key index.
#[derive(Debug, Clone)]
pub struct Schema {
    categories: Vec<Category>,
    index: BTreeMap<String, (usize, usize)>,
}

impl Schema {
    /// Build a schema from categories, validating the key set.
    pub fn new(categories: Vec<Category>) -> Result<Self> {
        let mut index = BTreeMap::new();
        for (ci, category) in categories.iter().enumerate() {
            for (fi, field) in category.fields.iter().enumerate() {
                if index.insert(field.key.clone(), (ci, fi)).is_some() {
                    return Err(PortrayError::SchemaError(format!(
                        "duplicate field key '{}'",
                        field.key
                    )));
                }
            }
        }

        // A key that is a strict path prefix of another would be both a
        // leaf and a branch in the projected document.
        let keys: Vec<&String> = index.keys().collect();
        for a in &keys {
            for b in &keys {
                if a.len() < b.len() && b.starts_with(&format!("{}.", a)) {
                    return Err(PortrayError::SchemaError(format!(
                        "field key '{}' is a path prefix of '{}'",
                        a, b
                    )));
                }
            }
        }

        Ok(Self { categories, index })
    }

    /// Categories in declaration order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.categories.iter().flat_map(|c| c.fields.iter())
    }

    /// Look up a field by its dotted key.
    pub fn field(&self, key: &str) -> Option<&FieldDef> {
        let (ci, fi) = self.index.get(key)?;
        Some(&self.categories[*ci].fields[*fi])
    }

    /// Look up a category by id.
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Total number of fields.
    pub fn field_count(&self) -> usize {
        self.index.len()
    }
}

// ============================================================================
// Factory helpers
// ============================================================================
// The schema literal in registry.rs is long; these keep each field to one
// line. Select defaults fall back to the first option, toggles to false,
// text to empty, matching the documented default-seeding rules.

pub(crate) fn select(key: &str, label: &str, options: &[&str], default: &str) -> FieldDef {
    FieldDef {
        key: key.to_string(),
        label: label.to_string(),
        kind: ControlKind::Select {
            options: options.iter().map(|o| o.to_string()).collect(),
        },
        default: Value::Text(default.to_string()),
    }
}

pub(crate) fn slider(
    key: &str,
    label: &str,
    min: f64,
    max: f64,
    step: f64,
    default: f64,
) -> FieldDef {
    FieldDef {
        key: key.to_string(),
        label: label.to_string(),
        kind: ControlKind::Slider { min, max, step },
        default: Value::Number(default),
    }
}

pub(crate) fn text(key: &str, label: &str, placeholder: &str) -> FieldDef {
    FieldDef {
        key: key.to_string(),
        label: label.to_string(),
        kind: ControlKind::Text {
            placeholder: Some(placeholder.to_string()),
        },
        default: Value::Text(String::new()),
    }
}

pub(crate) fn toggle(key: &str, label: &str, default: bool) -> FieldDef {
    FieldDef {
        key: key.to_string(),
        label: label.to_string(),
        kind: ControlKind::Toggle,
        default: Value::Toggle(default),
    }
}
