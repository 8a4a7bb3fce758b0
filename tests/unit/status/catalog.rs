use super::*;

fn builtin_catalog() -> StatusCatalog {
    let mut measurer = TextMeasurer::builtin(11.0).unwrap();
    StatusCatalog::new(&mut measurer, 4)
}

#[test]
fn every_status_has_text_and_color() {
    let expected = [
        (BadgeStatus::None, "not set", Rgba8::GRAY),
        (BadgeStatus::Ok, "passing", Rgba8::GREEN),
        (BadgeStatus::Warn, "warning", Rgba8::ORANGE),
        (BadgeStatus::Error, "failing", Rgba8::RED),
        (BadgeStatus::NotFound, "not found", Rgba8::RED),
        (BadgeStatus::Forbidden, "forbidden", Rgba8::RED),
    ];
    for (status, text, color) in expected {
        assert_eq!(status.display_text(), text);
        assert_eq!(status.display_background_color(), color);
    }
    for (i, status) in BadgeStatus::ALL.into_iter().enumerate() {
        assert_eq!(status.index(), i);
    }
}

#[test]
fn names_parse_case_insensitively() {
    for status in BadgeStatus::ALL {
        assert_eq!(status.name().parse::<BadgeStatus>().unwrap(), status);
        assert_eq!(
            status.name().to_lowercase().parse::<BadgeStatus>().unwrap(),
            status
        );
        assert_eq!(status.to_string(), status.name());
    }
    assert_eq!(
        "not-found".parse::<BadgeStatus>().unwrap(),
        BadgeStatus::NotFound
    );
    assert_eq!(" ok ".parse::<BadgeStatus>().unwrap(), BadgeStatus::Ok);
}

#[test]
fn unknown_names_are_validation_errors() {
    for bad in ["", "PASSING", "OK!", "NOT FOUND", "warning"] {
        let err = bad.parse::<BadgeStatus>().unwrap_err();
        assert!(matches!(err, BadgeError::Validation(_)), "{bad}");
    }
}

#[test]
fn serde_uses_canonical_names() {
    assert_eq!(
        serde_json::to_string(&BadgeStatus::NotFound).unwrap(),
        "\"NOT_FOUND\""
    );
    let s: BadgeStatus = serde_json::from_str("\"FORBIDDEN\"").unwrap();
    assert_eq!(s, BadgeStatus::Forbidden);
    assert!(serde_json::from_str::<BadgeStatus>("\"MAYBE\"").is_err());
}

#[test]
fn widths_are_text_advance_plus_both_margins() {
    let catalog = builtin_catalog();
    assert_eq!(catalog.display_width(BadgeStatus::Ok), 50);
    assert_eq!(catalog.display_width(BadgeStatus::None), 47);
    assert_eq!(catalog.display_width(BadgeStatus::Warn), 52);
    assert_eq!(catalog.display_width(BadgeStatus::Error), 42);
    assert_eq!(catalog.display_width(BadgeStatus::NotFound), 61);
    assert_eq!(catalog.display_width(BadgeStatus::Forbidden), 60);
}

#[test]
fn longer_text_never_gets_a_smaller_width() {
    let catalog = builtin_catalog();
    for a in BadgeStatus::ALL {
        for b in BadgeStatus::ALL {
            if a.display_text().chars().count() > b.display_text().chars().count() {
                assert!(
                    catalog.display_width(a) >= catalog.display_width(b),
                    "{a} vs {b}"
                );
            }
        }
    }
}

#[test]
fn catalog_accessors_match_status_table() {
    let catalog = builtin_catalog();
    for status in BadgeStatus::ALL {
        assert_eq!(catalog.display_text(status), status.display_text());
        assert_eq!(
            catalog.display_background_color(status),
            status.display_background_color()
        );
    }
}

#[test]
fn huge_margins_saturate_instead_of_overflowing() {
    let mut measurer = TextMeasurer::builtin(11.0).unwrap();
    let catalog = StatusCatalog::new(&mut measurer, 3_000_000_000);
    for status in BadgeStatus::ALL {
        assert_eq!(catalog.display_width(status), u32::MAX);
    }
}
