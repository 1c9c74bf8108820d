//! Tag extraction: the shared first pass of every export format.
//!
//! Reads the named dotted paths out of the nested document and groups the
//! present, non-empty values into bundles. Absent paths contribute nothing;
//! no error can arise here.

use crate::paths::pick_str;
use crate::schema::MICRO_BASELINE;
use serde_json::Value;

/// Negative terms shared by every format that carries a negative prompt.
pub const NEGATIVE_TERMS: &[&str] = &[
    "cgi",
    "3d render",
    "cartoon",
    "anime",
    "doll-like skin",
    "plastic skin",
    "oversmoothed skin",
    "airbrushed",
    "uncanny valley",
    "bad anatomy",
    "deformed",
    "extra fingers",
    "missing fingers",
    "bad hands",
    "bad eyes",
    "cross-eye",
    "distorted face",
    "blurry",
    "lowres",
    "jpeg artifacts",
    "watermark",
    "text",
    "logo",
];

/// Micro-anatomy entries included in exports, at most this many.
pub const MICRO_CAP: usize = 20;

/// Extracted prompt terms, grouped by bundle.
#[derive(Debug, Default)]
pub struct TagBundles {
    pub subject: Vec<String>,
    pub body: Vec<String>,
    pub face: Vec<String>,
    pub skin: Vec<String>,
    pub hair: Vec<String>,
    pub camera: Vec<String>,
    pub lighting: Vec<String>,
    pub realism: Vec<String>,
    /// Micro-anatomy deviations, rendered `"part name: value"`.
    pub micro: Vec<String>,
}

impl TagBundles {
    /// All core bundles flattened in order (micro excluded; formats decide
    /// how to phrase the micro note).
    pub fn core_terms(&self) -> Vec<String> {
        [
            &self.subject,
            &self.body,
            &self.face,
            &self.skin,
            &self.hair,
            &self.camera,
            &self.lighting,
        ]
        .into_iter()
        .flatten()
        .cloned()
        .collect()
    }
}

fn str_at<'a>(doc: &'a Value, path: &str) -> Option<&'a str> {
    pick_str(doc, path)?.as_str()
}

fn num_at(doc: &Value, path: &str) -> Option<f64> {
    pick_str(doc, path)?.as_f64()
}

fn bool_at(doc: &Value, path: &str) -> Option<bool> {
    pick_str(doc, path)?.as_bool()
}

/// Render a float that is known to be integral (ages, heights) without a
/// decimal point.
fn fmt_count(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Push a term unless it trims to nothing.
fn push(bundle: &mut Vec<String>, term: String) {
    let trimmed = term.trim();
    if !trimmed.is_empty() {
        bundle.push(trimmed.to_string());
    }
}

/// Extract every bundle from the nested document.
pub fn extract(doc: &Value) -> TagBundles {
    let mut t = TagBundles::default();

    // Subject identity. Subject type falls back to "human"; an
    // "unspecified" ethnicity is omitted entirely.
    push(
        &mut t.subject,
        str_at(doc, "subject.type").unwrap_or("human").to_string(),
    );
    if let Some(gender) = str_at(doc, "subject.gender") {
        push(&mut t.subject, gender.to_string());
    }
    if let Some(age) = num_at(doc, "subject.age") {
        push(&mut t.subject, format!("{}-year-old", fmt_count(age)));
    }
    if let Some(ethnicity) = str_at(doc, "subject.ethnicity")
        && ethnicity != "unspecified"
    {
        push(&mut t.subject, ethnicity.to_string());
    }
    if let Some(vibe) = str_at(doc, "subject.vibe") {
        push(&mut t.subject, vibe.to_string());
    }

    // Body.
    if let Some(height) = num_at(doc, "body.height_cm") {
        push(&mut t.body, format!("{}cm", fmt_count(height)));
    }
    if let Some(build) = str_at(doc, "body.build") {
        push(&mut t.body, format!("{} build", build));
    }
    if let Some(muscle) = str_at(doc, "body.muscle_definition") {
        push(&mut t.body, format!("{} muscle definition", muscle));
    }
    if let Some(fat) = str_at(doc, "body.body_fat") {
        push(&mut t.body, format!("{} body fat", fat));
    }

    // Face: eyes plus facial hair. A facial-hair type of "none" is omitted.
    if let Some(color) = str_at(doc, "eyes.color") {
        push(&mut t.face, format!("{} eyes", color));
    }
    if let Some(shape) = str_at(doc, "eyes.shape") {
        push(&mut t.face, format!("{} eye shape", shape));
    }
    if let Some(spacing) = str_at(doc, "eyes.spacing") {
        push(&mut t.face, format!("{} eye spacing", spacing));
    }
    if let Some(under_eye) = str_at(doc, "eyes.under_eye") {
        push(&mut t.face, under_eye.to_string());
    }
    if let Some(facial_hair) = str_at(doc, "hair.facial.type")
        && facial_hair != "none"
    {
        push(&mut t.face, facial_hair.to_string());
    }

    // Skin. Marks equal to "none" are omitted.
    if let Some(tone) = str_at(doc, "skin.tone") {
        push(&mut t.skin, format!("{} skin", tone));
    }
    if let Some(undertone) = str_at(doc, "skin.undertone") {
        push(&mut t.skin, format!("{} undertone", undertone));
    }
    if let Some(texture) = str_at(doc, "skin.texture") {
        push(&mut t.skin, texture.to_string());
    }
    if let Some(pores) = str_at(doc, "skin.pores") {
        push(&mut t.skin, format!("{} pores", pores));
    }
    for (path, noun) in [
        ("skin.redness", "redness"),
        ("skin.freckles", "freckles"),
        ("skin.moles", "moles"),
        ("skin.scars", "scars"),
    ] {
        if let Some(level) = str_at(doc, path)
            && level != "none"
        {
            push(&mut t.skin, format!("{} {}", level, noun));
        }
    }

    // Hair.
    if let Some(color) = str_at(doc, "hair.head.color") {
        push(&mut t.hair, format!("{} hair", color));
    }
    if let Some(length) = str_at(doc, "hair.head.length") {
        push(&mut t.hair, format!("{} hair", length));
    }
    if let Some(texture) = str_at(doc, "hair.head.texture") {
        push(&mut t.hair, format!("{} texture", texture));
    }
    if let Some(density) = str_at(doc, "hair.head.density") {
        push(&mut t.hair, format!("{} density", density));
    }
    if let Some(hairline) = str_at(doc, "hair.head.hairline") {
        push(&mut t.hair, format!("{} hairline", hairline));
    }

    // Camera.
    if let Some(camera) = str_at(doc, "camera.type") {
        push(&mut t.camera, camera.to_string());
    }
    if let Some(lens) = str_at(doc, "camera.lens") {
        push(&mut t.camera, format!("{} lens", lens));
    }
    if let Some(aperture) = str_at(doc, "camera.aperture") {
        push(&mut t.camera, aperture.to_string());
    }
    if let Some(dof) = str_at(doc, "camera.depth_of_field") {
        push(&mut t.camera, format!("{} depth of field", dof));
    }

    // Lighting.
    if let Some(style) = str_at(doc, "lighting.style") {
        push(&mut t.lighting, style.to_string());
    }
    if let Some(direction) = str_at(doc, "lighting.direction") {
        push(&mut t.lighting, direction.to_string());
    }
    if let Some(hardness) = str_at(doc, "lighting.hardness") {
        push(&mut t.lighting, format!("{} lighting", hardness));
    }
    if let Some(shadows) = str_at(doc, "lighting.shadows") {
        push(&mut t.lighting, shadows.to_string());
    }

    // Realism. The toggles render as fixed phrases only when true; the two
    // trailing anchors are always present.
    if let Some(detail) = str_at(doc, "realism.skin_detail") {
        push(&mut t.realism, format!("{} skin detail", detail));
    }
    if let Some(imperfections) = str_at(doc, "realism.imperfections") {
        push(&mut t.realism, format!("{} natural imperfections", imperfections));
    }
    if bool_at(doc, "realism.avoid_plastic_skin").unwrap_or(false) {
        push(&mut t.realism, "avoid plastic skin".to_string());
    }
    if bool_at(doc, "realism.avoid_ai_glow").unwrap_or(false) {
        push(&mut t.realism, "avoid AI glow".to_string());
    }
    push(&mut t.realism, "imperfect natural symmetry".to_string());
    push(&mut t.realism, "photorealistic".to_string());

    // Micro anatomy: only deviations from the baseline, capped, in
    // document key order.
    if let Some(micro) = pick_str(doc, "anatomy.micro").and_then(|v| v.as_object()) {
        for (key, value) in micro {
            if t.micro.len() >= MICRO_CAP {
                break;
            }
            if let Some(v) = value.as_str()
                && !v.is_empty()
                && v != MICRO_BASELINE
            {
                t.micro.push(format!("{}: {}", key.replace('_', " "), v));
            }
        }
    }

    t
}
