//! The field registry: every category and field definition.
//!
//! This is deliberately plain data. Nothing here has behavior; the factory
//! helpers in the parent module keep each field to one line, and the
//! micro-anatomy block at the bottom generates its 260 fields from a base
//! part table.

use super::{Category, FieldDef, Schema, select, slider, text, toggle};
use crate::error::Result;

fn category(id: &str, title: &str, description: Option<&str>, fields: Vec<FieldDef>) -> Category {
    Category {
        id: id.to_string(),
        title: title.to_string(),
        description: description.map(str::to_string),
        fields,
    }
}

/// Build the validated schema. ~250+ fields across 12 categories.
pub fn registry() -> Result<Schema> {
    let mut categories = vec![
        category(
            "identity",
            "Identity",
            Some("Basic subject identity. Keep it general-purpose."),
            vec![
                select("subject.type", "Subject type", &["human"], "human"),
                select(
                    "subject.gender",
                    "Gender presentation",
                    &["female", "male", "androgynous", "nonbinary"],
                    "male",
                ),
                slider("subject.age", "Age", 18.0, 90.0, 1.0, 35.0),
                select(
                    "subject.ethnicity",
                    "Ethnicity / ancestry (broad)",
                    &[
                        "unspecified",
                        "northern european",
                        "southern european",
                        "east asian",
                        "south asian",
                        "southeast asian",
                        "middle eastern",
                        "north african",
                        "sub-saharan african",
                        "latino / hispanic",
                        "mixed",
                    ],
                    "unspecified",
                ),
                text("subject.vibe", "Overall vibe", "e.g., friendly, tired, confident"),
            ],
        ),
        category(
            "body",
            "Body structure",
            Some("Proportions and physique (realistic)."),
            vec![
                slider("body.height_cm", "Height (cm)", 140.0, 210.0, 1.0, 178.0),
                select(
                    "body.build",
                    "Build",
                    &["slim", "average", "athletic", "curvy", "stocky", "heavyset"],
                    "average",
                ),
                select(
                    "body.muscle_definition",
                    "Muscle definition",
                    &["low", "moderate", "high"],
                    "moderate",
                ),
                select("body.body_fat", "Body fat level", &["low", "medium", "high"], "medium"),
                select("body.shoulders", "Shoulder width", &["narrow", "average", "broad"], "average"),
                select("body.waist", "Waist", &["narrow", "average", "wide"], "average"),
                select("body.hips", "Hip width", &["narrow", "average", "wide"], "average"),
                select(
                    "body.posture_default",
                    "Default posture",
                    &["neutral", "relaxed", "upright", "slouch"],
                    "neutral",
                ),
                select(
                    "body.symmetry",
                    "Symmetry",
                    &["imperfect natural", "fairly symmetrical"],
                    "imperfect natural",
                ),
            ],
        ),
        category(
            "head_face",
            "Head & face",
            Some("Shape language + realistic variation."),
            vec![
                select(
                    "face.head_shape",
                    "Head shape",
                    &["oval", "round", "square", "heart", "diamond", "oblong"],
                    "oval",
                ),
                select("face.jawline", "Jawline", &["soft", "defined", "square", "tapered"], "soft"),
                select("face.chin", "Chin", &["rounded", "pointed", "cleft", "broad"], "rounded"),
                select(
                    "face.cheekbones",
                    "Cheekbones",
                    &["subtle", "moderate", "prominent"],
                    "moderate",
                ),
                select("face.forehead", "Forehead", &["low", "average", "high"], "average"),
                select(
                    "face.facial_asymmetry",
                    "Facial asymmetry",
                    &["none", "subtle natural", "noticeable natural"],
                    "subtle natural",
                ),
                select("nose.bridge", "Nose bridge", &["low", "medium", "high"], "medium"),
                select("nose.length", "Nose length", &["short", "average", "long"], "average"),
                select("nose.width", "Nose width", &["narrow", "average", "wide"], "average"),
                select(
                    "nose.tip",
                    "Nose tip",
                    &["rounded", "pointed", "upturned", "downturned"],
                    "rounded",
                ),
                select("nose.nostrils", "Nostrils", &["narrow", "average", "wide"], "average"),
                select("mouth.lip_fullness", "Lip fullness", &["thin", "average", "full"], "average"),
                select("mouth.upper_lip", "Upper lip", &["thin", "average", "full"], "average"),
                select("mouth.lower_lip", "Lower lip", &["thin", "average", "full"], "average"),
                select(
                    "mouth.smile_lines",
                    "Smile lines",
                    &["none", "subtle", "moderate", "pronounced"],
                    "subtle",
                ),
                select("ears.size", "Ear size", &["small", "average", "large"], "average"),
                select("ears.lobe", "Ear lobe", &["attached", "detached"], "detached"),
                select(
                    "ears.protrusion",
                    "Ear protrusion",
                    &["flat", "average", "slightly prominent"],
                    "average",
                ),
            ],
        ),
        category(
            "eyes_brows",
            "Eyes & brows",
            None,
            vec![
                select(
                    "eyes.color",
                    "Eye color",
                    &["brown", "dark brown", "hazel", "green", "blue", "grey"],
                    "brown",
                ),
                select("eyes.shape", "Eye shape", &["almond", "round", "hooded", "monolid"], "almond"),
                select("eyes.spacing", "Eye spacing", &["close", "average", "wide"], "average"),
                select("eyes.size", "Eye size", &["small", "average", "large"], "average"),
                select(
                    "eyes.under_eye",
                    "Under-eye",
                    &["fresh", "slight tiredness", "visible tiredness"],
                    "slight tiredness",
                ),
                select(
                    "eyes.sclera_tone",
                    "Sclera tone",
                    &["white", "slightly off-white"],
                    "slightly off-white",
                ),
                select("brows.density", "Brow density", &["sparse", "average", "thick"], "average"),
                select("brows.shape", "Brow shape", &["straight", "arched", "soft arch"], "soft arch"),
                select("brows.grooming", "Brow grooming", &["natural", "neat", "messy"], "natural"),
                select("lashes.length", "Lash length", &["short", "average", "long"], "average"),
            ],
        ),
        category(
            "skin",
            "Skin detail",
            Some("Texture, pores, marks, realism."),
            vec![
                select(
                    "skin.tone",
                    "Skin tone",
                    &["very fair", "fair", "light", "medium", "olive", "tan", "deep"],
                    "medium",
                ),
                select("skin.undertone", "Undertone", &["cool", "neutral", "warm"], "neutral"),
                select(
                    "skin.texture",
                    "Texture",
                    &["smooth", "natural texture", "textured"],
                    "natural texture",
                ),
                select("skin.pores", "Pores", &["minimal", "visible", "very visible"], "visible"),
                select("skin.redness", "Redness", &["none", "subtle", "moderate"], "subtle"),
                select("skin.blemishes", "Minor blemishes", &["none", "few", "some"], "few"),
                select("skin.freckles", "Freckles", &["none", "few", "some", "many"], "none"),
                select("skin.moles", "Moles", &["none", "few", "some"], "few"),
                select("skin.scars", "Scars", &["none", "subtle", "visible"], "subtle"),
                select(
                    "skin.wrinkles_forehead",
                    "Forehead lines",
                    &["none", "light", "moderate"],
                    "light",
                ),
                select("skin.wrinkles_eyes", "Crow's feet", &["none", "light", "moderate"], "light"),
                select("skin.wrinkles_mouth", "Mouth lines", &["none", "light", "moderate"], "light"),
            ],
        ),
        category(
            "hair",
            "Hair",
            None,
            vec![
                select(
                    "hair.head.color",
                    "Hair color",
                    &[
                        "black",
                        "dark brown",
                        "brown",
                        "light brown",
                        "blonde",
                        "grey",
                        "white",
                        "red",
                    ],
                    "dark brown",
                ),
                select(
                    "hair.head.length",
                    "Hair length",
                    &["bald", "buzz", "short", "medium", "long"],
                    "short",
                ),
                select(
                    "hair.head.texture",
                    "Texture",
                    &["straight", "wavy", "curly", "coily"],
                    "wavy",
                ),
                select("hair.head.density", "Density", &["thin", "medium", "thick"], "medium"),
                select(
                    "hair.head.hairline",
                    "Hairline",
                    &["youthful", "mature", "receding", "balding"],
                    "mature",
                ),
                select(
                    "hair.facial.type",
                    "Facial hair",
                    &["none", "stubble", "short beard", "full beard", "moustache"],
                    "stubble",
                ),
                select(
                    "hair.facial.density",
                    "Facial hair density",
                    &["light", "medium", "thick"],
                    "light",
                ),
                select(
                    "hair.facial.coverage",
                    "Coverage",
                    &["even", "patchy natural"],
                    "patchy natural",
                ),
                select(
                    "hair.body_hair",
                    "Body hair",
                    &["none", "light", "moderate", "heavy"],
                    "light",
                ),
            ],
        ),
        category(
            "limbs",
            "Limbs, hands & feet",
            None,
            vec![
                select("limbs.arm_length", "Arm length", &["short", "average", "long"], "average"),
                select("limbs.leg_length", "Leg length", &["short", "average", "long"], "average"),
                select("hands.size", "Hand size", &["small", "medium", "large"], "medium"),
                select(
                    "hands.veins",
                    "Hand veins",
                    &["not visible", "slightly visible", "visible"],
                    "slightly visible",
                ),
                select(
                    "hands.nails",
                    "Nails",
                    &["short natural", "medium natural", "neat trimmed"],
                    "short natural",
                ),
                select("feet.size", "Foot size (relative)", &["small", "average", "large"], "average"),
                select(
                    "feet.care",
                    "Foot care",
                    &["neutral", "slightly rough", "well cared for"],
                    "neutral",
                ),
            ],
        ),
        category(
            "pose",
            "Pose & expression",
            None,
            vec![
                select(
                    "pose.stance",
                    "Stance",
                    &["standing", "sitting", "leaning", "walking"],
                    "standing",
                ),
                select(
                    "pose.angle",
                    "Camera angle",
                    &["eye level", "slightly above", "slightly below"],
                    "eye level",
                ),
                select(
                    "expression.face",
                    "Expression",
                    &["neutral", "slight smile", "serious", "tired", "confident"],
                    "neutral",
                ),
                select(
                    "gaze.direction",
                    "Gaze direction",
                    &["into camera", "slightly off-camera", "downward", "upward"],
                    "into camera",
                ),
            ],
        ),
        category(
            "camera",
            "Camera",
            None,
            vec![
                select(
                    "camera.type",
                    "Camera type",
                    &["full-frame DSLR", "mirrorless", "cinema camera"],
                    "full-frame DSLR",
                ),
                select("camera.lens", "Lens", &["35mm", "50mm", "85mm", "24-70mm"], "50mm"),
                select(
                    "camera.aperture",
                    "Aperture",
                    &["f/1.8", "f/2.8", "f/4", "f/5.6"],
                    "f/2.8",
                ),
                select(
                    "camera.depth_of_field",
                    "Depth of field",
                    &["shallow", "medium", "deep"],
                    "shallow",
                ),
                select(
                    "camera.noise",
                    "Photographic noise",
                    &["none", "subtle", "realistic"],
                    "subtle",
                ),
            ],
        ),
        category(
            "lighting",
            "Lighting",
            None,
            vec![
                select(
                    "lighting.style",
                    "Lighting style",
                    &[
                        "natural window light",
                        "softbox",
                        "overcast daylight",
                        "golden hour",
                    ],
                    "natural window light",
                ),
                select(
                    "lighting.direction",
                    "Direction",
                    &["front", "45 degree side", "side", "backlit"],
                    "45 degree side",
                ),
                select("lighting.hardness", "Hardness", &["soft", "medium", "hard"], "soft"),
                select(
                    "lighting.shadows",
                    "Shadows",
                    &["soft realistic", "defined", "minimal"],
                    "soft realistic",
                ),
            ],
        ),
        category(
            "realism",
            "Realism modifiers",
            Some("Push it towards true photo realism."),
            vec![
                select("realism.skin_detail", "Skin detail", &["medium", "high", "ultra"], "high"),
                select(
                    "realism.imperfections",
                    "Imperfections",
                    &["none", "subtle", "present"],
                    "present",
                ),
                select(
                    "realism.symmetry",
                    "AI symmetry control",
                    &["avoid perfect symmetry", "neutral"],
                    "avoid perfect symmetry",
                ),
                select("realism.cgi_artifacts", "CGI artifacts", &["none", "avoid"], "avoid"),
                toggle("realism.avoid_plastic_skin", "Avoid plastic skin", true),
                toggle("realism.avoid_ai_glow", "Avoid AI glow", true),
            ],
        ),
    ];

    categories.push(micro_anatomy());
    Schema::new(categories)
}

/// Base parts for the generated micro-anatomy fields.
const MICRO_PARTS: &[&str] = &[
    "neck_skin_laxity",
    "collarbone_definition",
    "shoulder_slope",
    "upper_arm_tone",
    "elbow_wrinkles",
    "forearm_veins",
    "wrist_size",
    "hand_knuckle_definition",
    "finger_length",
    "finger_taper",
    "nail_ridges",
    "palm_lines",
    "chest_hair_density",
    "sternum_visibility",
    "rib_outline",
    "abdomen_texture",
    "navel_shape",
    "love_handles",
    "lower_back_curvature",
    "hip_dips",
    "thigh_tone",
    "knee_shape",
    "calf_definition",
    "ankle_bones",
    "foot_arch",
    "toe_length",
    "toe_spacing",
    "heel_texture",
    "lip_texture",
    "philtrum_definition",
    "nasolabial_fold",
    "temple_hollows",
    "under_chin_shadow",
    "neck_crease",
    "forehead_pore_density",
    "cheek_pores",
    "nose_pores",
    "chin_pores",
    "ear_fold_detail",
    "ear_helix_shape",
    "eyelid_fold",
    "tear_trough",
    "iris_detail",
    "pupil_size",
    "catchlight_strength",
    "brow_hair_direction",
    "hair_strand_detail",
    "flyaway_hairs",
    "hair_sheen",
    "scalp_visibility",
    "skin_micro_redness",
    "skin_micro_variegation",
    "capillaries_subtle",
    "sun_damage_subtle",
    "freckle_distribution",
    "mole_distribution",
    "scar_location_hint",
    "bruise_none",
];

/// Number of generated micro-anatomy fields.
pub(crate) const MICRO_FIELD_COUNT: usize = 260;

const MICRO_OPTIONS: &[&str] = &["none", "subtle", "moderate", "pronounced"];

/// The neutral baseline for micro-anatomy fields; only deviations from it
/// are included in exports.
pub const MICRO_BASELINE: &str = "subtle";

fn micro_anatomy() -> Category {
    let fields = (0..MICRO_FIELD_COUNT)
        .map(|i| {
            let base = MICRO_PARTS[i % MICRO_PARTS.len()];
            let round = i / MICRO_PARTS.len() + 1;
            select(
                &format!("anatomy.micro.{}_{}", base, round),
                &format!("Micro detail: {} #{}", base.replace('_', " "), round),
                MICRO_OPTIONS,
                MICRO_BASELINE,
            )
        })
        .collect();

    category(
        "micro",
        "Micro anatomy (260 controls)",
        Some("Ultra granular dials. Keep most on 'subtle' for realism."),
        fields,
    )
}
