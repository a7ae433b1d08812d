use crate::foundation::error::{DrawShapeError, DrawShapeResult};

pub use kurbo::{Point, Rect, Vec2};

/// Largest canvas edge accepted by the renderer (and published by the node schema).
pub const MAX_CANVAS_DIM: u32 = 4096;
/// Smallest canvas edge published by the node schema.
pub const MIN_SCHEMA_CANVAS_DIM: u32 = 64;
/// Default canvas edge for both width and height.
pub const DEFAULT_CANVAS_DIM: u32 = 512;
/// Absolute bound on horizontal/vertical shape offsets.
pub const OFFSET_LIMIT: i32 = 2048;
/// Absolute bound on the batch count.
pub const BATCH_LIMIT: i64 = 2048;
/// Lower bound for zoom and zoom multiplier.
pub const ZOOM_MIN: f64 = 0.0;
/// Upper bound for zoom and zoom multiplier.
pub const ZOOM_MAX: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> DrawShapeResult<Self> {
        let canvas = Self { width, height };
        canvas.raster_dims()?;
        Ok(canvas)
    }

    /// Dimensions as the rasterizer wants them, checked against [`MAX_CANVAS_DIM`].
    pub fn raster_dims(self) -> DrawShapeResult<(u16, u16)> {
        fn dim(v: u32, axis: &str) -> DrawShapeResult<u16> {
            if v == 0 || v > MAX_CANVAS_DIM {
                return Err(DrawShapeError::validation(format!(
                    "canvas {axis} must be in 1..={MAX_CANVAS_DIM}, got {v}"
                )));
            }
            u16::try_from(v)
                .map_err(|_| DrawShapeError::validation(format!("canvas {axis} exceeds u16")))
        }
        Ok((dim(self.width, "width")?, dim(self.height, "height")?))
    }

    /// Canvas center using floor division, as pixel indices.
    pub fn center(self) -> (i64, i64) {
        (i64::from(self.width / 2), i64::from(self.height / 2))
    }

    pub fn pixel_count(self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_DIM,
            height: DEFAULT_CANVAS_DIM,
        }
    }
}

/// Straight (opaque) RGB8 triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Where and how large a shape is drawn on its canvas.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Placement {
    pub x_offset: i32,
    pub y_offset: i32,
    pub zoom: f64,
    pub zoom_multiplier: f64,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            x_offset: 0,
            y_offset: 0,
            zoom: 1.0,
            zoom_multiplier: 1.0,
        }
    }
}

impl Placement {
    pub fn with_zoom(self, zoom: f64) -> Self {
        Self { zoom, ..self }
    }

    /// Combined scale factor applied to the shape's base size.
    pub fn scale(self) -> f64 {
        self.zoom * self.zoom_multiplier
    }

    pub fn offset(self) -> Vec2 {
        Vec2::new(f64::from(self.x_offset), f64::from(self.y_offset))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
