use super::*;

#[test]
fn canvas_bounds_are_checked() {
    assert!(Canvas::new(512, 512).is_ok());
    assert!(Canvas::new(1, MAX_CANVAS_DIM).is_ok());

    let err = Canvas::new(0, 10).unwrap_err();
    assert!(err.to_string().contains("canvas width"));

    let err = Canvas::new(10, MAX_CANVAS_DIM + 1).unwrap_err();
    assert!(err.to_string().contains("canvas height"));
}

#[test]
fn canvas_center_floors_odd_dims() {
    let c = Canvas {
        width: 7,
        height: 10,
    };
    assert_eq!(c.center(), (3, 5));
    assert_eq!(c.pixel_count(), 70);
}

#[test]
fn placement_scale_and_zoom_override() {
    let p = Placement {
        zoom_multiplier: 2.0,
        ..Placement::default()
    };
    assert_eq!(p.scale(), 2.0);

    let p = p.with_zoom(0.25);
    assert_eq!(p.zoom, 0.25);
    assert_eq!(p.scale(), 0.5);
    assert_eq!(p.offset(), Vec2::ZERO);
}
