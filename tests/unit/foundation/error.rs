use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        BadgeError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(BadgeError::font("x").to_string().contains("font error:"));
    assert!(
        BadgeError::serialization(std::io::Error::other("x"))
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn serialization_keeps_io_source() {
    let err = BadgeError::serialization(std::io::Error::new(
        std::io::ErrorKind::WriteZero,
        "disk full",
    ));
    let source = std::error::Error::source(&err).expect("io source");
    assert!(source.to_string().contains("disk full"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = BadgeError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
