use super::*;

#[test]
fn lookup_is_case_insensitive() {
    for name in ["circle", "Circle", "CIRCLE"] {
        assert_eq!(shape_for_name(name).unwrap().name(), "circle");
    }
}

#[test]
fn unknown_shape_is_reported_with_its_name() {
    let err = shape_for_name("invalid_shape").err().unwrap();
    assert!(matches!(err, DrawShapeError::UnknownShape(ref n) if n == "invalid_shape"));
    assert!(shape_for_name("").is_err());
}

#[test]
fn names_list_registered_shapes() {
    assert_eq!(shape_names(), vec!["circle"]);
}

#[test]
fn params_resolve_color_names() {
    let p = ShapeParams::from_names(Canvas::default(), "red", "black", Placement::default())
        .unwrap();
    assert_eq!(p.shape_color, NamedColor::Red);
    assert_eq!(p.back_color, NamedColor::Black);

    let err = ShapeParams::from_names(Canvas::default(), "white", "", Placement::default())
        .unwrap_err();
    assert!(matches!(err, DrawShapeError::InvalidColorName(_)));
}
