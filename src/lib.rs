//! Parametrized shape batches rendered as normalized image tensors.
//!
//! A [`BatchRequest`] describes one invocation of the draw-shape node: a canvas, two
//! named colors, a shape, an offset, and a zoom that is either one value or one value
//! per frame. [`render_batch`] expands it into an [`ImageBatch`] of `(frames, height,
//! width, 3)` samples in `[0, 1]`.
//!
//! # Pipeline
//!
//! 1. **Select** the shape by name ([`shape_for_name`], case-insensitive)
//! 2. **Resolve** colors and canvas once per batch
//! 3. **Draw** each frame with its resolved zoom ([`DrawShape::draw`], CPU rasterized)
//! 4. **Encode** each raster into an [`ImageTensor`] and stack them in index order
//!
//! Host editors integrate through [`node_registrations`], [`input_types`] and [`invoke`].
#![forbid(unsafe_code)]

mod batch;
mod color;
mod foundation;
mod node;
mod render;
mod shape;

pub use batch::orchestrator::{THREADS_ENV, render_batch, render_frame, resolve_zoom};
pub use batch::request::{BatchOpts, BatchRequest, BatchThreading, ScalarZoomMode, ZoomSource};
pub use color::named::{NamedColor, list_names, parse_hex, resolve, to_hex};
pub use foundation::core::{
    BATCH_LIMIT, Canvas, DEFAULT_CANVAS_DIM, MAX_CANVAS_DIM, MIN_SCHEMA_CANVAS_DIM, OFFSET_LIMIT,
    Placement, Point, Rect, Rgb8, Vec2, ZOOM_MAX, ZOOM_MIN,
};
pub use foundation::error::{DrawShapeError, DrawShapeResult};
pub use foundation::lookup::{get_index, has_index};
pub use node::schema::{
    DRAW_SHAPE_NODE, InputField, InputKind, InputSchema, NodeDescriptor, display_names,
    find_node, input_types, invoke, node_registrations,
};
pub use render::encode::{BatchSummary, CHANNELS, ImageBatch, ImageTensor, encode};
pub use render::raster::RasterCanvas;
pub use shape::circle::{Circle, CircleGeometry};
pub use shape::registry::{DrawShape, ShapeParams, shape_for_name, shape_names};
