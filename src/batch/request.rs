use serde::{Deserialize, Serialize};

use crate::color::named::NamedColor;
use crate::foundation::core::{
    BATCH_LIMIT, Canvas, DEFAULT_CANVAS_DIM, MAX_CANVAS_DIM, MIN_SCHEMA_CANVAS_DIM, OFFSET_LIMIT,
    Placement, ZOOM_MAX, ZOOM_MIN,
};
use crate::foundation::error::{DrawShapeError, DrawShapeResult};

/// Zoom input: one value for the whole batch, or one value per frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ZoomSource {
    Scalar(f64),
    PerFrame(Vec<f64>),
}

impl Default for ZoomSource {
    fn default() -> Self {
        Self::Scalar(1.0)
    }
}

impl From<f64> for ZoomSource {
    fn from(v: f64) -> Self {
        Self::Scalar(v)
    }
}

impl From<Vec<f64>> for ZoomSource {
    fn from(v: Vec<f64>) -> Self {
        Self::PerFrame(v)
    }
}

/// How a [`ZoomSource::Scalar`] is applied across a batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarZoomMode {
    /// Every frame uses the scalar value.
    #[default]
    Broadcast,
    /// Legacy node behavior: a scalar has no per-frame entries, so every frame gets zoom 0.
    ZeroFallback,
}

/// Frame-level threading for a batch render.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchThreading {
    pub parallel: bool,
    /// Worker count; `None` defers to `ZC_DRAWSHAPE_THREADS`, then rayon's default.
    pub threads: Option<usize>,
}

/// Render options that are not part of the host-facing request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BatchOpts {
    pub scalar_zoom: ScalarZoomMode,
    pub threading: BatchThreading,
}

impl BatchOpts {
    pub fn with_scalar_zoom(mut self, mode: ScalarZoomMode) -> Self {
        self.scalar_zoom = mode;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.threading.parallel = parallel;
        self
    }

    pub fn with_threads(mut self, threads: Option<usize>) -> Self {
        self.threading.threads = threads;
        self
    }
}

/// One invocation of the draw-shape node.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchRequest {
    pub width: u32,
    pub height: u32,
    /// Frames to render; zero or negative yields an empty batch.
    pub batch: i64,
    pub shape_name: String,
    pub shape_color: String,
    pub back_color: String,
    pub x_offset: i32,
    pub y_offset: i32,
    pub zoom: ZoomSource,
    pub zoom_multiplier: f64,
}

impl Default for BatchRequest {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_DIM,
            height: DEFAULT_CANVAS_DIM,
            batch: 1,
            shape_name: "circle".to_owned(),
            shape_color: NamedColor::White.name().to_owned(),
            back_color: NamedColor::Black.name().to_owned(),
            x_offset: 0,
            y_offset: 0,
            zoom: ZoomSource::default(),
            zoom_multiplier: 1.0,
        }
    }
}

impl BatchRequest {
    pub fn new(
        width: u32,
        height: u32,
        batch: i64,
        shape_name: impl Into<String>,
        shape_color: impl Into<String>,
        back_color: impl Into<String>,
    ) -> Self {
        Self {
            width,
            height,
            batch,
            shape_name: shape_name.into(),
            shape_color: shape_color.into(),
            back_color: back_color.into(),
            ..Self::default()
        }
    }

    pub fn with_offsets(mut self, x_offset: i32, y_offset: i32) -> Self {
        self.x_offset = x_offset;
        self.y_offset = y_offset;
        self
    }

    pub fn with_zoom(mut self, zoom: impl Into<ZoomSource>) -> Self {
        self.zoom = zoom.into();
        self
    }

    pub fn with_zoom_multiplier(mut self, zoom_multiplier: f64) -> Self {
        self.zoom_multiplier = zoom_multiplier;
        self
    }

    pub fn canvas(&self) -> DrawShapeResult<Canvas> {
        Canvas::new(self.width, self.height)
    }

    /// Frames to render after clamping non-positive counts to zero.
    pub fn frame_count(&self) -> usize {
        usize::try_from(self.batch.max(0)).unwrap_or(0)
    }

    /// Placement shared by every frame; the zoom is filled in per frame.
    pub fn base_placement(&self) -> Placement {
        Placement {
            x_offset: self.x_offset,
            y_offset: self.y_offset,
            zoom: 0.0,
            zoom_multiplier: self.zoom_multiplier,
        }
    }

    /// Check the request against the ranges the node schema advertises to hosts.
    pub fn check_schema_ranges(&self) -> DrawShapeResult<()> {
        for (name, v) in [("width", self.width), ("height", self.height)] {
            if !(MIN_SCHEMA_CANVAS_DIM..=MAX_CANVAS_DIM).contains(&v) {
                return Err(DrawShapeError::validation(format!(
                    "{name} must be in {MIN_SCHEMA_CANVAS_DIM}..={MAX_CANVAS_DIM}, got {v}"
                )));
            }
        }
        for (name, v) in [("x_offset", self.x_offset), ("y_offset", self.y_offset)] {
            if !(-OFFSET_LIMIT..=OFFSET_LIMIT).contains(&v) {
                return Err(DrawShapeError::validation(format!(
                    "{name} must be in -{OFFSET_LIMIT}..={OFFSET_LIMIT}, got {v}"
                )));
            }
        }
        if !(-BATCH_LIMIT..=BATCH_LIMIT).contains(&self.batch) {
            return Err(DrawShapeError::validation(format!(
                "batch must be in -{BATCH_LIMIT}..={BATCH_LIMIT}, got {}",
                self.batch
            )));
        }
        check_zoom_range("zoom_multiplier", self.zoom_multiplier)?;
        match &self.zoom {
            ZoomSource::Scalar(z) => check_zoom_range("zoom", *z)?,
            ZoomSource::PerFrame(zs) => {
                for (i, z) in zs.iter().enumerate() {
                    check_zoom_range(&format!("zoom[{i}]"), *z)?;
                }
            }
        }
        Ok(())
    }
}

fn check_zoom_range(name: &str, v: f64) -> DrawShapeResult<()> {
    if (ZOOM_MIN..=ZOOM_MAX).contains(&v) {
        Ok(())
    } else {
        Err(DrawShapeError::validation(format!(
            "{name} must be in {ZOOM_MIN}..={ZOOM_MAX}, got {v}"
        )))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/batch/request.rs"]
mod tests;
