use super::*;

#[test]
fn parse_hex_accepts_rgb_and_rgba() {
    assert_eq!(Rgba8::parse_hex("#44cc11").unwrap(), Rgba8::GREEN);
    assert_eq!(Rgba8::parse_hex("E05D44").unwrap(), Rgba8::RED);
    assert_eq!(
        Rgba8::parse_hex("#00000055").unwrap(),
        Rgba8::rgba(0, 0, 0, 85)
    );
    assert!(Rgba8::parse_hex("#fff").is_err());
    assert!(Rgba8::parse_hex("#gg0000").is_err());
    assert!(Rgba8::parse_hex("#ééé").is_err());
}

#[test]
fn css_and_hex_notation() {
    assert_eq!(Rgba8::LABEL_GRAY.css_rgb(), "rgb(85,85,85)");
    assert_eq!(Rgba8::ORANGE.to_hex(), "#fe7d37");
    assert_eq!(Rgba8::SHADOW.to_hex(), "#00000055");
    assert!(!Rgba8::SHADOW.is_opaque());
    assert!((Rgba8::SHADOW.alpha_f32() - 1.0 / 3.0).abs() < 1e-6);
}

#[test]
fn deserialize_from_hex_object_and_array() {
    let c: Rgba8 = serde_json::from_str(r##""#9f9f9f""##).unwrap();
    assert_eq!(c, Rgba8::GRAY);

    let c: Rgba8 = serde_json::from_str(r#"{"r":1,"g":2,"b":3}"#).unwrap();
    assert_eq!(c, Rgba8::opaque(1, 2, 3));

    let c: Rgba8 = serde_json::from_str("[1,2,3,4]").unwrap();
    assert_eq!(c, Rgba8::rgba(1, 2, 3, 4));

    assert!(serde_json::from_str::<Rgba8>("[1,2]").is_err());
}

#[test]
fn serialized_form_reads_back() {
    let json = serde_json::to_string(&Rgba8::SHADOW).unwrap();
    let back: Rgba8 = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Rgba8::SHADOW);
}
