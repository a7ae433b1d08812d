use image::RgbImage;
use kurbo::Shape as _;

use crate::foundation::core::{Point, Rect};
use crate::foundation::error::DrawShapeResult;
use crate::render::raster::{PATH_TOLERANCE, RasterCanvas};
use crate::shape::registry::{DrawShape, ShapeParams};

/// A filled circle centered on the canvas (plus offset).
#[derive(Clone, Copy, Debug, Default)]
pub struct Circle;

/// Resolved circle geometry in pixel-index space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleGeometry {
    pub center: Point,
    pub radius: f64,
}

impl CircleGeometry {
    /// Center is the floored canvas midpoint shifted by the offset; the diameter is the
    /// shorter remaining edge scaled by `zoom * zoom_multiplier`.
    pub fn for_params(params: &ShapeParams) -> Self {
        let (mid_x, mid_y) = params.canvas.center();
        let p = params.placement;
        let cx = mid_x + i64::from(p.x_offset);
        let cy = mid_y + i64::from(p.y_offset);

        let span_x = i64::from(params.canvas.width) - i64::from(p.x_offset);
        let span_y = i64::from(params.canvas.height) - i64::from(p.y_offset);
        let size = span_x.min(span_y) as f64 * p.scale();

        Self {
            center: Point::new(cx as f64, cy as f64),
            radius: size / 2.0,
        }
    }

    /// Zero, negative and non-finite radii draw nothing.
    pub fn is_degenerate(&self) -> bool {
        !(self.radius.is_finite() && self.radius > 0.0)
    }

    /// Fill region: the inclusive pixel box `[c - r, c + r]` on both axes.
    pub fn bounds(&self) -> Rect {
        let Point { x, y } = self.center;
        let r = self.radius;
        Rect::new(x - r, y - r, x + r + 1.0, y + r + 1.0)
    }
}

impl DrawShape for Circle {
    fn name(&self) -> &'static str {
        "circle"
    }

    fn draw(&self, params: &ShapeParams) -> DrawShapeResult<RgbImage> {
        let mut canvas = RasterCanvas::new(params.canvas, params.back_color.rgb())?;

        let geom = CircleGeometry::for_params(params);
        if !geom.is_degenerate() {
            let path = kurbo::Ellipse::from_rect(geom.bounds()).to_path(PATH_TOLERANCE);
            canvas.fill_path(&path, params.shape_color.rgb());
        }

        canvas.finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shape/circle.rs"]
mod tests;
