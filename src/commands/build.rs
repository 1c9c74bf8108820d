//! Implementation of the `portray build` command.
//!
//! Assembles the flat state and emits the nested JSON document.

use super::common::{assemble_state, emit, render_json};
use crate::cli::BuildArgs;
use crate::error::Result;
use crate::project::project;
use crate::schema::registry;

/// Fixed filename used by `build --save`.
pub const DOCUMENT_FILE_NAME: &str = "human-prompt.json";

/// Execute the `portray build` command.
pub fn cmd_build(args: BuildArgs) -> Result<()> {
    let schema = registry()?;
    let state = assemble_state(&schema, &args.state)?;
    let doc = project(&state);

    let text = render_json(&doc, args.compact)?;
    emit(&text, args.output.as_deref(), args.save, DOCUMENT_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::StateArgs;
    use std::path::PathBuf;

    fn build_args(set: Vec<&str>, output: Option<PathBuf>) -> BuildArgs {
        BuildArgs {
            state: StateArgs {
                set: set.into_iter().map(str::to_string).collect(),
                values: None,
                bare: false,
            },
            compact: false,
            output,
            save: false,
        }
    }

    #[test]
    fn build_to_stdout() {
        assert!(cmd_build(build_args(vec![], None)).is_ok());
    }

    #[test]
    fn build_writes_document_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");

        cmd_build(build_args(vec!["skin.tone=olive"], Some(path.clone()))).unwrap();

        let doc: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(doc["skin"]["tone"], "olive");
        assert_eq!(doc["subject"]["age"], 35);
    }

    #[test]
    fn build_rejects_unknown_key() {
        let err = cmd_build(build_args(vec!["skin.glow=high"], None)).unwrap_err();
        assert!(err.to_string().contains("unknown field key"));
    }

    #[test]
    fn build_bare_emits_sparse_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");

        let mut args = build_args(vec!["subject.age=50"], Some(path.clone()));
        args.state.bare = true;
        cmd_build(args).unwrap();

        let doc: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(doc, serde_json::json!({"subject": {"age": 50}}));
    }
}
