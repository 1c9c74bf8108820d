//! Per-format payload assembly.
//!
//! Each builder takes the extracted tag bundles (and, for the chat format,
//! the full document) and produces the payload object for its target
//! backend. Shapes are fixed; see the command help for where each payload
//! is meant to be pasted.

use super::tags::{NEGATIVE_TERMS, TagBundles};
use serde_json::{Value, json};

/// Guidance note emitted with sentence-style prompts.
const SENTENCE_GUIDANCE: &str =
    "Keep natural imperfections and avoid overly smooth skin. Maintain realistic proportions.";

/// Fixed parameter suffix for the parameterized prompt syntax.
const PARAM_SUFFIX: &str = "--ar 1:1 --style raw --s 150 --chaos 0";

/// Instruction text for chat-style models.
const CHAT_INSTRUCTION: &str = "Use the JSON spec to write a single photorealistic image prompt \
     of one adult human. Keep it realistic, include camera + lighting, avoid explicit content, \
     and avoid plastic/CGI look. Output ONLY the final prompt text.";

fn join_comma(terms: &[String]) -> String {
    terms.join(", ")
}

fn join_sentences(sentences: Vec<String>) -> String {
    let kept: Vec<String> = sentences.into_iter().filter(|s| !s.is_empty()).collect();
    if kept.is_empty() {
        String::new()
    } else {
        format!("{}.", kept.join(". "))
    }
}

/// Tag-style positive/negative prompt with fixed sampler knobs.
pub fn tile_diffusion(t: &TagBundles) -> Value {
    let mut terms = t.core_terms();
    terms.extend(t.realism.iter().cloned());
    if !t.micro.is_empty() {
        terms.push(format!("micro details: {}", t.micro.join(", ")));
    }

    json!({
        "positive_prompt": join_comma(&terms),
        "negative_prompt": NEGATIVE_TERMS.join(", "),
        "suggested": {
            "sampler": "DPM++ 2M Karras",
            "steps": 30,
            "cfg_scale": 5.5,
            "size": "1024x1024",
        },
    })
}

/// Sentence-style prompt: bundles grouped into sentences, each sentence a
/// comma join, empty sentences dropped.
pub fn sentence_diffusion(t: &TagBundles) -> Value {
    let identity: Vec<String> = [&t.subject, &t.body, &t.face]
        .into_iter()
        .flatten()
        .cloned()
        .collect();
    let surface: Vec<String> = [&t.skin, &t.hair].into_iter().flatten().cloned().collect();

    let mut sentences = vec![
        join_comma(&identity),
        join_comma(&surface),
        join_comma(&t.camera),
        join_comma(&t.lighting),
        join_comma(&t.realism),
    ];
    if !t.micro.is_empty() {
        sentences.push(format!(
            "Micro details kept subtle; only deviations: {}",
            t.micro.join(", ")
        ));
    }

    json!({
        "prompt": join_sentences(sentences),
        "guidance": SENTENCE_GUIDANCE,
    })
}

/// Comma prompt with two fixed boosting terms and a parameter suffix; the
/// negative hint is the first 12 negative terms.
pub fn parameterized_prompt(t: &TagBundles) -> Value {
    let mut terms = t.core_terms();
    terms.push("ultra photoreal".to_string());
    terms.push("natural skin texture".to_string());
    let core = join_comma(&terms);

    json!({
        "prompt": format!("{} {}", core, PARAM_SUFFIX).trim(),
        "negative_hint": NEGATIVE_TERMS[..12].join(", "),
    })
}

/// Instruction plus the untouched document plus the full avoid list.
pub fn chat_instruction(doc: &Value) -> Value {
    json!({
        "instruction": CHAT_INSTRUCTION,
        "json_spec": doc,
        "avoid": NEGATIVE_TERMS,
    })
}
