//! Tests for the schema registry and its construction-time validation.

use super::*;

#[test]
fn registry_builds() {
    let schema = registry().unwrap();
    assert!(schema.field_count() >= 250, "expected 250+ fields");
    assert!(schema.categories().len() >= 10, "expected 10+ categories");
}

#[test]
fn every_select_default_is_an_option() {
    let schema = registry().unwrap();
    for field in schema.fields() {
        if let ControlKind::Select { options } = &field.kind {
            let Value::Text(default) = &field.default else {
                panic!("select '{}' has a non-text default", field.key);
            };
            assert!(
                options.contains(default),
                "select '{}' default '{}' is not among its options",
                field.key,
                default
            );
        }
    }
}

#[test]
fn slider_defaults_are_in_range() {
    let schema = registry().unwrap();
    for field in schema.fields() {
        if let ControlKind::Slider { min, max, .. } = &field.kind {
            let Value::Number(default) = &field.default else {
                panic!("slider '{}' has a non-numeric default", field.key);
            };
            assert!(
                default >= min && default <= max,
                "slider '{}' default {} outside [{}, {}]",
                field.key,
                default,
                min,
                max
            );
        }
    }
}

#[test]
fn toggle_defaults_are_booleans() {
    let schema = registry().unwrap();
    for field in schema.fields() {
        if matches!(field.kind, ControlKind::Toggle) {
            assert!(
                matches!(field.default, Value::Toggle(_)),
                "toggle '{}' has a non-boolean default",
                field.key
            );
        }
    }
}

#[test]
fn field_lookup_by_key() {
    let schema = registry().unwrap();
    let field = schema.field("skin.tone").unwrap();
    assert_eq!(field.label, "Skin tone");
    assert!(schema.field("skin.tones").is_none());
}

#[test]
fn category_lookup_by_id() {
    let schema = registry().unwrap();
    assert_eq!(schema.category("camera").unwrap().title, "Camera");
    assert!(schema.category("nope").is_none());
}

#[test]
fn micro_category_has_260_baseline_fields() {
    let schema = registry().unwrap();
    let micro = schema.category("micro").unwrap();
    assert_eq!(micro.fields.len(), 260);
    for field in &micro.fields {
        assert!(field.key.starts_with("anatomy.micro."));
        assert_eq!(field.default, Value::Text(MICRO_BASELINE.to_string()));
    }
}

#[test]
fn duplicate_key_is_rejected() {
    let cats = vec![Category {
        id: "c".to_string(),
        title: "C".to_string(),
        description: None,
        fields: vec![
            select("a.b", "First", &["x"], "x"),
            select("a.b", "Second", &["y"], "y"),
        ],
    }];
    let err = Schema::new(cats).unwrap_err();
    assert!(err.to_string().contains("duplicate field key 'a.b'"));
}

#[test]
fn prefix_collision_is_rejected() {
    let cats = vec![Category {
        id: "c".to_string(),
        title: "C".to_string(),
        description: None,
        fields: vec![
            select("a", "Leaf", &["x"], "x"),
            select("a.b", "Branch child", &["y"], "y"),
        ],
    }];
    let err = Schema::new(cats).unwrap_err();
    assert!(err.to_string().contains("'a' is a path prefix of 'a.b'"));
}

#[test]
fn sibling_keys_with_shared_text_prefix_are_fine() {
    // "skin.tone" and "skin.tones" share text but neither is a path prefix.
    let cats = vec![Category {
        id: "c".to_string(),
        title: "C".to_string(),
        description: None,
        fields: vec![
            select("skin.tone", "Tone", &["x"], "x"),
            select("skin.tones", "Tones", &["y"], "y"),
        ],
    }];
    assert!(Schema::new(cats).is_ok());
}

#[test]
fn coerce_number_and_toggle() {
    let slider_kind = ControlKind::Slider {
        min: 18.0,
        max: 90.0,
        step: 1.0,
    };
    assert_eq!(slider_kind.coerce("subject.age", "42").unwrap(), Value::Number(42.0));
    assert!(slider_kind.coerce("subject.age", "young").is_err());

    assert_eq!(
        ControlKind::Toggle.coerce("t", "on").unwrap(),
        Value::Toggle(true)
    );
    assert_eq!(
        ControlKind::Toggle.coerce("t", "FALSE").unwrap(),
        Value::Toggle(false)
    );
    assert!(ControlKind::Toggle.coerce("t", "maybe").is_err());
}

#[test]
fn coerce_value_passes_matching_kinds_through() {
    let kind = ControlKind::Number {
        min: 0.0,
        max: 10.0,
        step: 1.0,
    };
    assert_eq!(
        kind.coerce_value("n", Value::Number(3.0)).unwrap(),
        Value::Number(3.0)
    );
    // Text renders through the string path.
    assert_eq!(
        kind.coerce_value("n", Value::Text("7".to_string())).unwrap(),
        Value::Number(7.0)
    );
    assert!(kind.coerce_value("n", Value::Text("x".to_string())).is_err());
}
