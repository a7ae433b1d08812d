use image::RgbImage;
use serde::Serialize;

use crate::foundation::error::{DrawShapeError, DrawShapeResult};

/// Number of color channels in every tensor this crate produces.
pub const CHANNELS: usize = 3;

/// One rendered frame as normalized `f32` samples, laid out `(height, width, 3)`.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageTensor {
    height: usize,
    width: usize,
    data: Vec<f32>,
}

impl ImageTensor {
    pub fn shape(&self) -> [usize; 3] {
        [self.height, self.width, CHANNELS]
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Sample at row `y`, column `x`, channel `c`.
    pub fn get(&self, y: usize, x: usize, c: usize) -> Option<f32> {
        if y >= self.height || x >= self.width || c >= CHANNELS {
            return None;
        }
        self.data.get((y * self.width + x) * CHANNELS + c).copied()
    }

    /// RGB triple at row `y`, column `x`.
    pub fn pixel(&self, y: usize, x: usize) -> Option<[f32; 3]> {
        Some([self.get(y, x, 0)?, self.get(y, x, 1)?, self.get(y, x, 2)?])
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    /// Quantize back to 8-bit RGB, e.g. for PNG export.
    pub fn to_rgb_image(&self) -> DrawShapeResult<RgbImage> {
        let bytes: Vec<u8> = self
            .data
            .iter()
            .map(|&v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
            .collect();
        let (w, h) = (
            u32::try_from(self.width).map_err(|_| DrawShapeError::render("width exceeds u32"))?,
            u32::try_from(self.height).map_err(|_| DrawShapeError::render("height exceeds u32"))?,
        );
        RgbImage::from_raw(w, h, bytes)
            .ok_or_else(|| DrawShapeError::render("tensor length does not match its shape"))
    }
}

/// Convert an 8-bit RGB raster into a tensor with every byte divided by 255.
pub fn encode(image: &RgbImage) -> ImageTensor {
    let (w, h) = image.dimensions();
    ImageTensor {
        height: h as usize,
        width: w as usize,
        data: image
            .as_raw()
            .iter()
            .map(|&b| f32::from(b) / 255.0)
            .collect(),
    }
}

/// An ordered stack of equally sized frames, laid out `(frames, height, width, 3)`.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageBatch {
    height: usize,
    width: usize,
    frames: Vec<ImageTensor>,
}

/// Serializable description of a batch, without the samples.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub shape: [usize; 4],
    pub frames: usize,
}

impl ImageBatch {
    /// Stack frames along a new leading axis, preserving their order.
    ///
    /// `height`/`width` fix the frame shape even when `frames` is empty.
    pub fn stack(
        frames: Vec<ImageTensor>,
        height: usize,
        width: usize,
    ) -> DrawShapeResult<Self> {
        if let Some((i, f)) = frames
            .iter()
            .enumerate()
            .find(|(_, f)| f.height != height || f.width != width)
        {
            return Err(DrawShapeError::render(format!(
                "frame {i} is {}x{}, expected {width}x{height}",
                f.width, f.height
            )));
        }
        Ok(Self {
            height,
            width,
            frames,
        })
    }

    pub fn shape(&self) -> [usize; 4] {
        [self.frames.len(), self.height, self.width, CHANNELS]
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frame(&self, index: usize) -> Option<&ImageTensor> {
        self.frames.get(index)
    }

    pub fn frames(&self) -> &[ImageTensor] {
        &self.frames
    }

    /// Flattened samples in `(frames, height, width, 3)` order.
    pub fn to_vec(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.frames.len() * self.height * self.width * CHANNELS);
        for f in &self.frames {
            out.extend_from_slice(&f.data);
        }
        out
    }

    pub fn summary(&self) -> BatchSummary {
        BatchSummary {
            shape: self.shape(),
            frames: self.len(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/encode.rs"]
mod tests;
