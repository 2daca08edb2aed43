use super::*;
use crate::effects::outline::Direction;
use crate::foundation::core::{Rgb8, SurfaceExpand};

#[test]
fn parse_each_builtin_kind() {
    let cases = [
        (r#"{"kind":"fade","alpha_start":0,"alpha_end":1,"duration":60}"#, "fade"),
        (r#"{"kind":"blur","radius":3}"#, "blur"),
        (r#"{"kind":"drop_shadow","offset_x":1,"offset_y":2}"#, "drop_shadow"),
        (r#"{"kind":"spin","angle_start":0,"angle_end":3.14,"duration":10}"#, "spin"),
        (r#"{"kind":"zoom","scale_start":1,"scale_end":2,"duration":10}"#, "zoom"),
        (r#"{"kind":"outline_rotator","start_x":1,"start_y":1}"#, "outline_rotator"),
    ];
    for (json, kind) in cases {
        let spec = parse_effect_json(json).unwrap();
        assert_eq!(spec.kind(), kind);
        assert_eq!(spec.into_effect().name(), kind);
    }
}

#[test]
fn kind_matching_is_lenient() {
    for raw in ["Drop-Shadow", "DROP_SHADOW", " dropshadow "] {
        let v = serde_json::json!({ "kind": raw, "offset_x": -2, "offset_y": 1, "alpha": 90 });
        let spec = parse_effect_value(v).unwrap();
        assert_eq!(
            spec,
            EffectSpec::DropShadow(DropShadow::new(-2, 1).with_alpha(90))
        );
    }
}

#[test]
fn unknown_or_missing_kind_is_wrong_effect_kind() {
    let err = parse_effect_json(r#"{"kind":"sparkle"}"#).unwrap_err();
    assert!(matches!(err, CellfxError::WrongEffectKind(_)));

    let err = parse_effect_json(r#"{"radius":3}"#).unwrap_err();
    assert!(matches!(err, CellfxError::WrongEffectKind(_)));
}

#[test]
fn malformed_json_is_serde() {
    assert!(matches!(
        parse_effect_json("{ not json").unwrap_err(),
        CellfxError::Serde(_)
    ));
    assert!(matches!(
        parse_effect_json(r#"{"kind":"blur","radius":"wide"}"#).unwrap_err(),
        CellfxError::Serde(_)
    ));
    assert!(matches!(
        parse_effect_json("[1, 2]").unwrap_err(),
        CellfxError::Serde(_)
    ));
}

#[test]
fn optional_parameters_take_defaults() {
    let spec = parse_effect_json(r#"{"kind":"outline","start_x":4,"start_y":0}"#).unwrap();
    let EffectSpec::OutlineRotator(fx) = spec else {
        panic!("expected an outline rotator");
    };
    assert_eq!(fx.direction, Direction::Right);
    assert_eq!(fx.threshold, 3);

    let spec = parse_effect_json(r#"{"kind":"fade","alpha_start":1,"alpha_end":0,"duration":5}"#)
        .unwrap();
    assert_eq!(spec, EffectSpec::Fade(Fade::new(1.0, 0.0, 5)));
}

#[test]
fn chain_spec_builds_links_in_order() {
    let chain = ChainSpec::from_json_str(
        r#"{ "effects": [
            { "kind": "blur", "radius": 1 },
            { "kind": "drop-shadow", "offset_x": 2, "offset_y": 0, "color": { "r": 9, "g": 9, "b": 9 } },
            { "kind": "fade", "alpha_start": 0, "alpha_end": 1, "duration": 4 }
        ] }"#,
    )
    .unwrap();
    assert_eq!(chain.effects.len(), 3);
    let EffectSpec::DropShadow(shadow) = &chain.effects[1] else {
        panic!("expected a drop shadow");
    };
    assert_eq!(shadow.color, Rgb8::gray(9));

    let built = chain.build();
    let names: Vec<_> = built.effects().iter().map(|e| e.name()).collect();
    assert_eq!(names, ["blur", "drop_shadow", "fade"]);
    assert_eq!(built.total_expand(), SurfaceExpand::new(2, 0));
}

#[test]
fn chain_spec_accepts_bare_arrays_and_empty_lists() {
    let chain = ChainSpec::from_json_str(r#"[{ "kind": "zoom", "scale_start": 1, "scale_end": 1, "duration": 1 }]"#)
        .unwrap();
    assert_eq!(chain.effects.len(), 1);

    let empty = ChainSpec::from_json_str("{}").unwrap();
    assert!(empty.build().is_empty());

    let err = ChainSpec::from_json_str(r#"{ "effects": 3 }"#).unwrap_err();
    assert!(matches!(err, CellfxError::Serde(_)));
}

#[test]
fn chain_spec_json_reads_back() {
    let spec = ChainSpec {
        effects: vec![
            EffectSpec::Blur(Blur::new(2)),
            EffectSpec::Spin(Spin::new(0.0, 1.5, 30)),
        ],
    };
    let text = spec.to_json_string().unwrap();
    assert!(text.contains("\"kind\": \"spin\""));
    assert_eq!(ChainSpec::from_json_str(&text).unwrap(), spec);
}
