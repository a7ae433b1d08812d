use rayon::prelude::*;

use crate::batch::request::{BatchOpts, BatchRequest, ScalarZoomMode, ZoomSource};
use crate::foundation::error::{DrawShapeError, DrawShapeResult};
use crate::foundation::lookup::get_index;
use crate::render::encode::{ImageBatch, ImageTensor, encode};
use crate::shape::registry::{DrawShape, ShapeParams, shape_for_name};

/// Environment override for the parallel worker count.
pub const THREADS_ENV: &str = "ZC_DRAWSHAPE_THREADS";

/// Zoom used for frame `index`.
///
/// Sequences fall back to `0.0` past their end. Scalars either broadcast or, in
/// [`ScalarZoomMode::ZeroFallback`], resolve to `0.0` for every frame.
pub fn resolve_zoom(zoom: &ZoomSource, index: usize, mode: ScalarZoomMode) -> f64 {
    match zoom {
        ZoomSource::PerFrame(values) => i64::try_from(index)
            .ok()
            .and_then(|i| get_index(values, i))
            .copied()
            .unwrap_or(0.0),
        ZoomSource::Scalar(z) => match mode {
            ScalarZoomMode::Broadcast => *z,
            ScalarZoomMode::ZeroFallback => 0.0,
        },
    }
}

/// Render `request.batch` frames of the requested shape and stack them into one batch.
///
/// Shape, canvas and colors are validated before any frame is drawn; a failure on
/// any frame discards the whole batch.
#[tracing::instrument(
    skip(request, opts),
    fields(shape = %request.shape_name, batch = request.batch, width = request.width, height = request.height)
)]
pub fn render_batch(request: &BatchRequest, opts: &BatchOpts) -> DrawShapeResult<ImageBatch> {
    let shape = shape_for_name(&request.shape_name)?;
    let canvas = request.canvas()?;
    let base = ShapeParams::from_names(
        canvas,
        &request.shape_color,
        &request.back_color,
        request.base_placement(),
    )?;

    let n = request.frame_count();
    if matches!(request.zoom, ZoomSource::Scalar(_))
        && opts.scalar_zoom == ScalarZoomMode::ZeroFallback
        && n > 0
    {
        tracing::debug!("scalar zoom with zero fallback: every frame resolves zoom to 0");
    }

    let render_one = |index: usize| -> DrawShapeResult<ImageTensor> {
        let zoom = resolve_zoom(&request.zoom, index, opts.scalar_zoom);
        tracing::debug!(index, zoom, "render frame");
        let params = ShapeParams {
            placement: base.placement.with_zoom(zoom),
            ..base
        };
        render_frame(shape, &params)
    };

    let frames = if opts.threading.parallel && n > 1 {
        let pool = build_thread_pool(opts.threading.threads)?;
        pool.install(|| {
            (0..n)
                .into_par_iter()
                .map(render_one)
                .collect::<DrawShapeResult<Vec<_>>>()
        })?
    } else {
        (0..n).map(render_one).collect::<DrawShapeResult<Vec<_>>>()?
    };

    ImageBatch::stack(frames, canvas.height as usize, canvas.width as usize)
}

/// Draw one frame with `shape` and encode it.
pub fn render_frame(shape: &dyn DrawShape, params: &ShapeParams) -> DrawShapeResult<ImageTensor> {
    let raster = shape.draw(params)?;
    Ok(encode(&raster))
}

fn threads_from_env() -> Option<usize> {
    std::env::var(THREADS_ENV)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|&n| n > 0)
}

fn build_thread_pool(threads: Option<usize>) -> DrawShapeResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(DrawShapeError::validation(
            "batch threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads.or_else(threads_from_env) {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| DrawShapeError::render(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/batch/orchestrator.rs"]
mod tests;
