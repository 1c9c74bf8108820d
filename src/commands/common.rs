//! Helpers shared by the `build` and `export` commands.
//!
//! Both commands assemble one flat-state snapshot the same way: seed from
//! schema defaults (unless `--bare`), apply the values file, then apply
//! `--set` overrides in flag order so the last flag wins.

use crate::cli::StateArgs;
use crate::error::{PortrayError, Result};
use crate::fs::atomic_write;
use crate::schema::Schema;
use crate::state::FlatState;
use crate::value::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Assemble the flat state for one invocation.
pub fn assemble_state(schema: &Schema, args: &StateArgs) -> Result<FlatState> {
    let mut state = if args.bare {
        FlatState::empty()
    } else {
        FlatState::seeded(schema)
    };

    if let Some(path) = &args.values {
        for (key, value) in load_values_file(path)? {
            state = state.set(schema, &key, value)?;
        }
    }

    for pair in &args.set {
        let (key, raw) = pair.split_once('=').ok_or_else(|| {
            PortrayError::UserError(format!(
                "invalid --set '{}': expected KEY=VALUE (e.g. skin.tone=olive)",
                pair
            ))
        })?;
        state = state.set_raw(schema, key.trim(), raw)?;
    }

    Ok(state)
}

/// Read a flat values file: a single mapping from dotted field key to
/// scalar value, in JSON or YAML (chosen by extension).
fn load_values_file(path: &Path) -> Result<BTreeMap<String, Value>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        PortrayError::IoError(format!(
            "failed to read values file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );

    if is_yaml {
        serde_yaml::from_str(&content).map_err(|e| {
            PortrayError::UserError(format!(
                "failed to parse values file '{}': {}",
                path.display(),
                e
            ))
        })
    } else {
        serde_json::from_str(&content).map_err(|e| {
            PortrayError::UserError(format!(
                "failed to parse values file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}

/// Serialize a document or payload, pretty by default.
pub fn render_json(value: &serde_json::Value, compact: bool) -> Result<String> {
    let text = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    };
    text.map_err(|e| PortrayError::IoError(format!("failed to serialize JSON: {}", e)))
}

/// Print to stdout, or write to a file when a destination was requested.
///
/// `--output` names an explicit path; `--save` uses the fixed default
/// filename in the current directory.
pub fn emit(text: &str, output: Option<&Path>, save: bool, default_name: &str) -> Result<()> {
    let destination = match (output, save) {
        (Some(path), _) => Some(path.to_path_buf()),
        (None, true) => Some(PathBuf::from(default_name)),
        (None, false) => None,
    };

    match destination {
        Some(path) => {
            atomic_write(&path, format!("{}\n", text).as_bytes())?;
            println!("Wrote {}", path.display());
        }
        None => println!("{}", text),
    }
    Ok(())
}
