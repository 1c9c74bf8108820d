//! Field value union for portray.
//!
//! Every live field value is one of three scalar kinds. Keeping this a
//! closed enum lets the projector and export builders match exhaustively
//! instead of duck-typing on JSON values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A scalar field value.
///
/// Serialized untagged so flat values files read naturally:
/// `skin.tone: medium`, `subject.age: 42`, `realism.avoid_ai_glow: true`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A boolean toggle.
    Toggle(bool),
    /// A numeric value (slider or bounded number).
    Number(f64),
    /// Free text or a select option.
    Text(String),
}

impl Value {
    /// Returns true for an empty text value.
    ///
    /// Empty text is the "unset" state for text fields and is omitted from
    /// the projected document.
    pub fn is_empty_text(&self) -> bool {
        matches!(self, Value::Text(s) if s.is_empty())
    }

    /// Convert to a `serde_json::Value` for the projected document.
    ///
    /// Integral numbers are emitted as JSON integers so an age of 35
    /// serializes as `35`, not `35.0`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Toggle(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => {
                if n.fract() == 0.0 && n.is_finite() && n.abs() < i64::MAX as f64 {
                    serde_json::Value::Number((*n as i64).into())
                } else {
                    serde_json::Number::from_f64(*n)
                        .map(serde_json::Value::Number)
                        .unwrap_or(serde_json::Value::Null)
                }
            }
            Value::Text(s) => serde_json::Value::String(s.clone()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Toggle(b) => write!(f, "{}", b),
            Value::Number(n) => {
                if n.fract() == 0.0 && n.is_finite() {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            Value::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Toggle(b)
    }
}
