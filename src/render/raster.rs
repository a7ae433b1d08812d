use image::RgbImage;

use crate::foundation::core::{Canvas, Rgb8};
use crate::foundation::error::{DrawShapeError, DrawShapeResult};

/// Path flattening tolerance (in pixels) used when handing curves to the rasterizer.
pub(crate) const PATH_TOLERANCE: f64 = 0.1;

/// A fresh, opaque canvas that shapes are filled onto.
///
/// Fills are recorded into a `vello_cpu` scene; [`RasterCanvas::finish`] rasterizes
/// them and reads the result back as straight RGB8.
pub struct RasterCanvas {
    canvas: Canvas,
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
}

impl RasterCanvas {
    /// Allocate a canvas fully covered by `background`.
    pub fn new(canvas: Canvas, background: Rgb8) -> DrawShapeResult<Self> {
        let (width, height) = canvas.raster_dims()?;
        let mut ctx = vello_cpu::RenderContext::new(width, height);
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(paint_for(background));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(width),
            f64::from(height),
        ));
        Ok(Self {
            canvas,
            width,
            height,
            ctx,
        })
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Fill a closed path; anything outside the canvas is clipped.
    pub fn fill_path(&mut self, path: &kurbo::BezPath, color: Rgb8) {
        if path.elements().is_empty() {
            return;
        }
        self.ctx.set_paint(paint_for(color));
        self.ctx.fill_path(&bezpath_to_cpu(path));
    }

    /// Rasterize everything recorded so far into an RGB image.
    pub fn finish(mut self) -> DrawShapeResult<RgbImage> {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);

        let rgba = pixmap.data_as_u8_slice();
        let expected = self.canvas.pixel_count() * 4;
        if rgba.len() != expected {
            return Err(DrawShapeError::render(format!(
                "pixmap byte length mismatch: expected {expected}, got {}",
                rgba.len()
            )));
        }

        // Every fill is opaque, so premultiplied and straight channels coincide.
        let rgb: Vec<u8> = rgba
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect();
        RgbImage::from_raw(self.canvas.width, self.canvas.height, rgb)
            .ok_or_else(|| DrawShapeError::render("rgb buffer does not match canvas size"))
    }
}

fn paint_for(c: Rgb8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, 255)
}

fn point_to_cpu(p: kurbo::Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &kurbo::BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
