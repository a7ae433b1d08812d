use super::*;

#[test]
fn sequence_zoom_indexes_then_falls_back_to_zero() {
    let zoom = ZoomSource::PerFrame(vec![0.5, 1.5]);
    for mode in [ScalarZoomMode::Broadcast, ScalarZoomMode::ZeroFallback] {
        assert_eq!(resolve_zoom(&zoom, 0, mode), 0.5);
        assert_eq!(resolve_zoom(&zoom, 1, mode), 1.5);
        assert_eq!(resolve_zoom(&zoom, 2, mode), 0.0);
    }
    assert_eq!(
        resolve_zoom(&ZoomSource::PerFrame(Vec::new()), 0, ScalarZoomMode::Broadcast),
        0.0
    );
}

#[test]
fn scalar_zoom_depends_on_mode() {
    let zoom = ZoomSource::Scalar(0.75);
    for i in 0..3 {
        assert_eq!(resolve_zoom(&zoom, i, ScalarZoomMode::Broadcast), 0.75);
        assert_eq!(resolve_zoom(&zoom, i, ScalarZoomMode::ZeroFallback), 0.0);
    }
}

#[test]
fn unknown_shape_wins_over_other_errors() {
    let req = BatchRequest::new(0, 0, 1, "invalid_shape", "nope", "");
    let err = render_batch(&req, &BatchOpts::default()).unwrap_err();
    assert!(matches!(err, DrawShapeError::UnknownShape(_)));
}

#[test]
fn bad_colors_fail_before_rendering() {
    let req = BatchRequest::new(64, 64, 3, "circle", "teal", "black");
    let err = render_batch(&req, &BatchOpts::default()).unwrap_err();
    assert!(matches!(err, DrawShapeError::InvalidColorName(ref n) if n == "teal"));
}

#[test]
fn zero_threads_is_rejected_for_parallel_batches() {
    let req = BatchRequest::new(64, 64, 2, "circle", "white", "black");
    let opts = BatchOpts::default().with_parallel(true).with_threads(Some(0));
    let err = render_batch(&req, &opts).unwrap_err();
    assert!(err.to_string().contains("threads"));
}

#[test]
fn render_frame_encodes_the_drawn_shape() {
    let req = BatchRequest::new(64, 64, 1, "circle", "red", "green");
    let params = ShapeParams::from_names(
        req.canvas().unwrap(),
        &req.shape_color,
        &req.back_color,
        req.base_placement().with_zoom(1.0),
    )
    .unwrap();
    let shape = shape_for_name("circle").unwrap();
    let t = render_frame(shape, &params).unwrap();
    assert_eq!(t.shape(), [64, 64, 3]);
    assert_eq!(t.pixel(32, 32), Some([1.0, 0.0, 0.0]));
    assert_eq!(t.pixel(0, 0), Some([0.0, 1.0, 0.0]));
}
