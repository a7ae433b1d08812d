use super::*;
use crate::color::named::NamedColor;
use crate::foundation::core::{Canvas, Placement};

fn params(w: u32, h: u32, placement: Placement) -> ShapeParams {
    ShapeParams {
        canvas: Canvas::new(w, h).unwrap(),
        shape_color: NamedColor::White,
        back_color: NamedColor::Black,
        placement,
    }
}

#[test]
fn geometry_for_default_placement() {
    let g = CircleGeometry::for_params(&params(512, 512, Placement::default()));
    assert_eq!(g.center, Point::new(256.0, 256.0));
    assert_eq!(g.radius, 256.0);
    assert_eq!(g.bounds(), Rect::new(0.0, 0.0, 513.0, 513.0));
}

#[test]
fn geometry_uses_floor_center_and_offset_span() {
    let p = Placement {
        x_offset: 10,
        y_offset: -4,
        zoom: 0.5,
        zoom_multiplier: 2.0,
    };
    let g = CircleGeometry::for_params(&params(101, 80, p));
    assert_eq!(g.center, Point::new(60.0, 36.0));
    // min(101 - 10, 80 + 4) * 1.0 / 2
    assert_eq!(g.radius, 42.0);
}

#[test]
fn zero_and_negative_sizes_are_degenerate() {
    let zero = CircleGeometry::for_params(&params(64, 64, Placement::default().with_zoom(0.0)));
    assert!(zero.is_degenerate());

    let negative = CircleGeometry::for_params(&params(
        64,
        64,
        Placement {
            x_offset: 100,
            ..Placement::default()
        },
    ));
    assert!(negative.radius < 0.0);
    assert!(negative.is_degenerate());

    let nan = CircleGeometry::for_params(&params(64, 64, Placement::default().with_zoom(f64::NAN)));
    assert!(nan.is_degenerate());
}

#[test]
fn draws_white_circle_on_black() {
    let img = Circle.draw(&params(512, 512, Placement::default())).unwrap();
    assert_eq!(img.dimensions(), (512, 512));
    assert_eq!(img.get_pixel(256, 256).0, [255, 255, 255]);
    for (x, y) in [(0, 0), (511, 0), (0, 511), (511, 511)] {
        assert_eq!(img.get_pixel(x, y).0, [0, 0, 0], "corner ({x}, {y})");
    }
}

#[test]
fn offset_moves_the_circle() {
    let p = Placement {
        x_offset: 20,
        y_offset: 20,
        zoom: 0.25,
        ..Placement::default()
    };
    let img = Circle.draw(&params(128, 128, p)).unwrap();
    // center (84, 84), radius (108 * 0.25) / 2 = 13.5
    assert_eq!(img.get_pixel(84, 84).0, [255, 255, 255]);
    assert_eq!(img.get_pixel(64, 64).0, [0, 0, 0]);
}

#[test]
fn degenerate_circle_leaves_background() {
    let mut p = params(64, 64, Placement::default().with_zoom(0.0));
    p.back_color = NamedColor::Blue;
    let img = Circle.draw(&p).unwrap();
    assert!(img.pixels().all(|px| px.0 == [0, 0, 255]));
}

#[test]
fn circle_partly_off_canvas_is_clipped() {
    let p = Placement {
        x_offset: -60,
        y_offset: 0,
        zoom: 1.0,
        zoom_multiplier: 0.5,
    };
    // center (4, 64), radius min(188, 128) * 0.5 / 2 = 32
    let img = Circle.draw(&params(128, 128, p)).unwrap();
    assert_eq!(img.get_pixel(0, 64).0, [255, 255, 255]);
    assert_eq!(img.get_pixel(127, 64).0, [0, 0, 0]);
}
