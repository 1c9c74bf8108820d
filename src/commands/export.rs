//! Implementation of the `portray export` command.
//!
//! Assembles the flat state, projects the document, and emits one export
//! payload.

use super::common::{assemble_state, emit, render_json};
use crate::cli::ExportArgs;
use crate::error::Result;
use crate::export::build_export;
use crate::project::project;
use crate::schema::registry;

/// Execute the `portray export` command.
pub fn cmd_export(args: ExportArgs) -> Result<()> {
    let schema = registry()?;
    let state = assemble_state(&schema, &args.state)?;
    let doc = project(&state);
    let payload = build_export(&doc, args.mode);

    let text = render_json(&payload, args.compact)?;
    if args.output.is_some() || args.save {
        eprintln!("Format: {}", args.mode.label());
    }
    emit(&text, args.output.as_deref(), args.save, &args.mode.file_name())
}
