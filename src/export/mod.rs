//! Export builder: four target payload formats derived from the nested
//! JSON document.
//!
//! All formats share one tag-extraction pass ([`tags::extract`]); each mode
//! then assembles its own fixed payload shape. Rebuilding from an unchanged
//! document and mode is byte-identical, so callers can re-derive freely.

use clap::ValueEnum;
use serde_json::Value;

mod formats;
mod tags;

pub use tags::{MICRO_CAP, NEGATIVE_TERMS, TagBundles, extract};

/// The four export targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportMode {
    /// Tag-style positive/negative prompt plus sampler knobs.
    TileDiffusion,
    /// Sentence-style prompt plus a guidance note.
    SentenceDiffusion,
    /// Comma prompt with boosting terms and a fixed parameter suffix.
    ParameterizedPrompt,
    /// Instruction text plus the full JSON document plus an avoid list.
    ChatInstruction,
}

impl ExportMode {
    /// Kebab-case mode name, as accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportMode::TileDiffusion => "tile-diffusion",
            ExportMode::SentenceDiffusion => "sentence-diffusion",
            ExportMode::ParameterizedPrompt => "parameterized-prompt",
            ExportMode::ChatInstruction => "chat-instruction",
        }
    }

    /// Human-readable format label.
    pub fn label(&self) -> &'static str {
        match self {
            ExportMode::TileDiffusion => "Tile diffusion (tag prompt)",
            ExportMode::SentenceDiffusion => "Sentence diffusion",
            ExportMode::ParameterizedPrompt => "Parameterized prompt",
            ExportMode::ChatInstruction => "Chat instruction",
        }
    }

    /// Fixed file name used by `export --save`.
    pub fn file_name(&self) -> String {
        format!("export-{}.json", self.as_str())
    }
}

/// Build the export payload for one mode from the nested document.
pub fn build_export(doc: &Value, mode: ExportMode) -> Value {
    let bundles = tags::extract(doc);
    match mode {
        ExportMode::TileDiffusion => formats::tile_diffusion(&bundles),
        ExportMode::SentenceDiffusion => formats::sentence_diffusion(&bundles),
        ExportMode::ParameterizedPrompt => formats::parameterized_prompt(&bundles),
        ExportMode::ChatInstruction => formats::chat_instruction(doc),
    }
}
