use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        DrawShapeError::invalid_color("teal")
            .to_string()
            .contains("invalid color name:")
    );
    assert!(
        DrawShapeError::unknown_shape("hexagon")
            .to_string()
            .contains("unknown shape:")
    );
    assert!(
        DrawShapeError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        DrawShapeError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        DrawShapeError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn names_are_quoted_in_messages() {
    let err = DrawShapeError::invalid_color("");
    assert_eq!(err.to_string(), "invalid color name: \"\"");
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = DrawShapeError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn serde_json_errors_map_to_serde_variant() {
    let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = DrawShapeError::from(parse);
    assert!(matches!(err, DrawShapeError::Serde(_)));
}
