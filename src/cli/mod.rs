//! CLI argument parsing for portray.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::export::ExportMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Portray: schema-driven prompt composer for photorealistic human subjects.
///
/// Configure 250+ descriptive attributes (body, face, skin, hair, camera,
/// lighting, micro anatomy) through a stable dotted-key schema, then emit
/// the result as a nested JSON document or as a ready-to-paste export for a
/// specific image-generation backend.
#[derive(Parser, Debug)]
#[command(name = "portray")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for portray.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List schema categories and fields.
    ///
    /// Every field is identified by a stable dotted key (e.g. `skin.tone`);
    /// that key set is the contract with downstream consumers of the JSON
    /// document.
    Schema(SchemaArgs),

    /// Show one field's definition in detail.
    Show(ShowArgs),

    /// Build the nested JSON document from defaults plus overrides.
    ///
    /// Fields keep their schema defaults unless overridden; empty text
    /// fields are omitted from the document.
    Build(BuildArgs),

    /// Build an export payload for one target format.
    ///
    /// All formats derive from the same nested document; the mode selects
    /// the payload shape and joining rules.
    Export(ExportArgs),
}

/// Arguments for the `schema` command.
#[derive(Parser, Debug)]
pub struct SchemaArgs {
    /// Limit the listing to one category id (e.g. `skin`).
    #[arg(long)]
    pub category: Option<String>,

    /// Emit the schema as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `show` command.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Dotted field key to show (e.g. `hair.head.color`).
    pub key: String,
}

/// State-assembly flags shared by `build` and `export`.
#[derive(Parser, Debug)]
pub struct StateArgs {
    /// Override a field: KEY=VALUE (repeatable; later flags win).
    #[arg(short = 's', long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    /// Flat values file (JSON or YAML) applied before `--set` overrides.
    #[arg(long, value_name = "FILE")]
    pub values: Option<PathBuf>,

    /// Start from an empty state instead of schema defaults.
    #[arg(long)]
    pub bare: bool,
}

/// Arguments for the `build` command.
#[derive(Parser, Debug)]
pub struct BuildArgs {
    #[command(flatten)]
    pub state: StateArgs,

    /// Emit compact JSON on one line.
    #[arg(long)]
    pub compact: bool,

    /// Write the document to this file instead of stdout.
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Write the document to `human-prompt.json` in the current directory.
    #[arg(long, conflicts_with = "output")]
    pub save: bool,
}

/// Arguments for the `export` command.
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Target format.
    #[arg(short, long, value_enum)]
    pub mode: ExportMode,

    #[command(flatten)]
    pub state: StateArgs,

    /// Emit compact JSON on one line.
    #[arg(long)]
    pub compact: bool,

    /// Write the payload to this file instead of stdout.
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Write the payload to `export-<mode>.json` in the current directory.
    #[arg(long, conflicts_with = "output")]
    pub save: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
