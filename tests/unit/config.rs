use super::*;

#[test]
fn defaults_are_the_canonical_template() {
    let cfg = BadgeConfig::default();
    assert_eq!(cfg.label_text, "quality gate");
    assert_eq!(cfg.label_width, 75);
    assert_eq!(cfg.canvas_height, 20);
    assert_eq!(cfg.x_margin, 4);
    assert_eq!(cfg.corner_diameter, 6);
    assert_eq!(cfg.label_color, Rgba8::opaque(85, 85, 85));
    assert_eq!(cfg.shadow_color, Rgba8::rgba(0, 0, 0, 85));
    assert_eq!(cfg.text_color, Rgba8::WHITE);
    assert_eq!(cfg.status_shadow_baseline, cfg.status_text_baseline + 1);
    assert_eq!(cfg.font.size_px, 11.0);
    cfg.validate().unwrap();
}

#[test]
fn partial_json_keeps_defaults() {
    let cfg: BadgeConfig = serde_json::from_str(
        r##"{ "label_text": "gate", "label_color": "#333333", "font": { "load_system_fonts": false } }"##,
    )
    .unwrap();
    assert_eq!(cfg.label_text, "gate");
    assert_eq!(cfg.label_color, Rgba8::opaque(0x33, 0x33, 0x33));
    assert_eq!(cfg.label_width, 75);
    assert!(!cfg.font.load_system_fonts);
    assert_eq!(cfg.font.families, FontConfig::default().families);
}

#[test]
fn unknown_fields_are_rejected() {
    assert!(serde_json::from_str::<BadgeConfig>(r#"{ "labelWidth": 10 }"#).is_err());
}

#[test]
fn validate_rejects_degenerate_templates() {
    let bad = [
        BadgeConfig {
            label_text: "  ".to_owned(),
            ..BadgeConfig::default()
        },
        BadgeConfig {
            label_width: 0,
            ..BadgeConfig::default()
        },
        BadgeConfig {
            x_margin: 75,
            ..BadgeConfig::default()
        },
        BadgeConfig {
            corner_diameter: 21,
            ..BadgeConfig::default()
        },
        BadgeConfig {
            status_text_baseline: 30,
            ..BadgeConfig::default()
        },
        BadgeConfig {
            generator_comment: "a -- b".to_owned(),
            ..BadgeConfig::default()
        },
        BadgeConfig {
            font: FontConfig {
                size_px: f32::INFINITY,
                ..FontConfig::default()
            },
            ..BadgeConfig::default()
        },
    ];
    for cfg in bad {
        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, BadgeError::Validation(_)), "{err}");
    }
}

#[test]
fn from_path_reads_and_validates_json() {
    let dir = std::env::temp_dir().join(format!("gatebadge_config_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let good = dir.join("good.json");
    std::fs::write(&good, r#"{ "label_text": "gate" }"#).unwrap();
    assert_eq!(BadgeConfig::from_path(&good).unwrap().label_text, "gate");

    let invalid = dir.join("invalid.json");
    std::fs::write(&invalid, r#"{ "label_width": 0 }"#).unwrap();
    assert!(matches!(
        BadgeConfig::from_path(&invalid),
        Err(BadgeError::Validation(_))
    ));

    let missing = dir.join("missing.json");
    assert!(matches!(
        BadgeConfig::from_path(&missing),
        Err(BadgeError::Other(_))
    ));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn validate_rejects_oversized_templates() {
    let bad = [
        BadgeConfig {
            label_width: u32::MAX,
            ..BadgeConfig::default()
        },
        BadgeConfig {
            label_width: MAX_DIMENSION_PX + 1,
            ..BadgeConfig::default()
        },
        BadgeConfig {
            label_width: u32::MAX,
            x_margin: 3_000_000_000,
            ..BadgeConfig::default()
        },
        BadgeConfig {
            canvas_height: u32::MAX,
            ..BadgeConfig::default()
        },
        BadgeConfig {
            font: FontConfig {
                size_px: 1.0e9,
                ..FontConfig::builtin()
            },
            ..BadgeConfig::default()
        },
    ];
    for cfg in bad {
        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, BadgeError::Validation(_)), "{err}");
    }

    let largest = BadgeConfig {
        label_width: MAX_DIMENSION_PX,
        canvas_height: MAX_DIMENSION_PX,
        x_margin: MAX_DIMENSION_PX - 1,
        font: FontConfig {
            size_px: MAX_FONT_SIZE_PX,
            ..FontConfig::builtin()
        },
        ..BadgeConfig::default()
    };
    largest.validate().unwrap();
}

#[test]
fn largest_valid_template_renders_without_overflow() {
    let cfg = BadgeConfig {
        label_width: MAX_DIMENSION_PX,
        canvas_height: MAX_DIMENSION_PX,
        x_margin: MAX_DIMENSION_PX - 1,
        font: FontConfig {
            size_px: MAX_FONT_SIZE_PX,
            ..FontConfig::builtin()
        },
        ..BadgeConfig::default()
    };
    let service = crate::ImageService::new(cfg).unwrap();
    let status = crate::BadgeStatus::NotFound;
    let width = service.catalog().display_width(status);
    assert!(width > 2 * (MAX_DIMENSION_PX - 1));

    let mut svg = String::new();
    std::io::Read::read_to_string(&mut service.image_for(status).unwrap(), &mut svg).unwrap();
    assert!(svg.contains(&format!(r#"width="{}""#, MAX_DIMENSION_PX + width)));
}
