//! Command implementations for portray.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, one module per command.

mod build;
mod common;
mod export;
mod schema;
mod show;

use crate::cli::Command;
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Schema(args) => schema::cmd_schema(args),
        Command::Show(args) => show::cmd_show(args),
        Command::Build(args) => build::cmd_build(args),
        Command::Export(args) => export::cmd_export(args),
    }
}
