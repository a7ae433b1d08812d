use image::RgbImage;

use crate::color::named::NamedColor;
use crate::foundation::core::{Canvas, Placement};
use crate::foundation::error::{DrawShapeError, DrawShapeResult};
use crate::shape::circle::Circle;

/// Everything a shape needs to draw one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeParams {
    pub canvas: Canvas,
    pub shape_color: NamedColor,
    pub back_color: NamedColor,
    pub placement: Placement,
}

impl ShapeParams {
    /// Resolve color names and bundle them with the canvas and placement.
    pub fn from_names(
        canvas: Canvas,
        shape_color: &str,
        back_color: &str,
        placement: Placement,
    ) -> DrawShapeResult<Self> {
        Ok(Self {
            canvas,
            back_color: NamedColor::from_name(back_color)?,
            shape_color: NamedColor::from_name(shape_color)?,
            placement,
        })
    }
}

/// A shape kind that can rasterize itself onto a fresh canvas.
pub trait DrawShape: Send + Sync {
    /// Registered (lowercase) name.
    fn name(&self) -> &'static str;

    fn draw(&self, params: &ShapeParams) -> DrawShapeResult<RgbImage>;
}

static SHAPES: &[&dyn DrawShape] = &[&Circle];

/// Find a registered shape, ignoring ASCII case.
pub fn shape_for_name(name: &str) -> DrawShapeResult<&'static dyn DrawShape> {
    SHAPES
        .iter()
        .copied()
        .find(|s| s.name().eq_ignore_ascii_case(name))
        .ok_or_else(|| DrawShapeError::unknown_shape(name))
}

/// Registered shape names in registration order.
pub fn shape_names() -> Vec<&'static str> {
    SHAPES.iter().map(|s| s.name()).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/shape/registry.rs"]
mod tests;
