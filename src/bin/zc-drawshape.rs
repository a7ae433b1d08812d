use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use serde::Serialize;
use zc_drawshape::{
    BatchOpts, BatchRequest, BatchSummary, ImageBatch, ScalarZoomMode, ZoomSource,
};

#[derive(Parser, Debug)]
#[command(name = "zc-drawshape", version)]
struct Cli {
    /// Log per-frame debug events to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the node registrations and input schema as JSON.
    Schema,
    /// Render a batch from flags and write each frame as a PNG.
    Render(RenderArgs),
    /// Render a batch from a host-style JSON parameter object.
    Invoke(InvokeArgs),
}

#[derive(Parser, Debug)]
struct BatchFlags {
    /// Output directory for `frame_NNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,

    /// Give a scalar zoom the legacy behavior (every frame resolves to zoom 0).
    #[arg(long)]
    legacy_zoom: bool,

    /// Render frames on a rayon thread pool.
    #[arg(long)]
    parallel: bool,

    /// Worker threads for `--parallel`.
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[arg(long, default_value_t = 512)]
    width: u32,

    #[arg(long, default_value_t = 512)]
    height: u32,

    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    batch: i64,

    #[arg(long, default_value = "circle")]
    shape: String,

    #[arg(long, default_value = "white")]
    shape_color: String,

    #[arg(long, default_value = "black")]
    back_color: String,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    x_offset: i32,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    y_offset: i32,

    /// Zoom; repeat the flag to give one value per frame.
    #[arg(long)]
    zoom: Vec<f64>,

    #[arg(long, default_value_t = 1.0)]
    zoom_multiplier: f64,

    #[command(flatten)]
    batch_flags: BatchFlags,
}

#[derive(Parser, Debug)]
struct InvokeArgs {
    /// Input parameter JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Node id to invoke.
    #[arg(long, default_value = zc_drawshape::DRAW_SHAPE_NODE.id)]
    node: String,

    #[command(flatten)]
    batch_flags: BatchFlags,
}

#[derive(Serialize)]
struct RenderSummary {
    #[serde(flatten)]
    batch: BatchSummary,
    paths: Vec<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Schema => cmd_schema(),
        Command::Render(args) => cmd_render(args),
        Command::Invoke(args) => cmd_invoke(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init();
}

fn cmd_schema() -> anyhow::Result<()> {
    let doc = serde_json::json!({
        "nodes": zc_drawshape::node_registrations(),
        "input_types": zc_drawshape::input_types().to_json(),
    });
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn batch_opts(flags: &BatchFlags) -> BatchOpts {
    let mode = if flags.legacy_zoom {
        ScalarZoomMode::ZeroFallback
    } else {
        ScalarZoomMode::Broadcast
    };
    BatchOpts::default()
        .with_scalar_zoom(mode)
        .with_parallel(flags.parallel)
        .with_threads(flags.threads)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let zoom = match args.zoom.as_slice() {
        [] => ZoomSource::default(),
        [z] => ZoomSource::Scalar(*z),
        many => ZoomSource::PerFrame(many.to_vec()),
    };
    let request = BatchRequest::new(
        args.width,
        args.height,
        args.batch,
        args.shape,
        args.shape_color,
        args.back_color,
    )
    .with_offsets(args.x_offset, args.y_offset)
    .with_zoom(zoom)
    .with_zoom_multiplier(args.zoom_multiplier);

    let batch = zc_drawshape::render_batch(&request, &batch_opts(&args.batch_flags))
        .context("render batch")?;
    write_and_report(&batch, &args.batch_flags.out_dir)
}

fn cmd_invoke(args: InvokeArgs) -> anyhow::Result<()> {
    let f = File::open(&args.in_path)
        .with_context(|| format!("open parameters '{}'", args.in_path.display()))?;
    let params: serde_json::Value =
        serde_json::from_reader(BufReader::new(f)).with_context(|| "parse parameters JSON")?;

    let batch = zc_drawshape::invoke(&args.node, params, &batch_opts(&args.batch_flags))
        .with_context(|| format!("invoke node '{}'", args.node))?;
    write_and_report(&batch, &args.batch_flags.out_dir)
}

fn write_and_report(batch: &ImageBatch, out_dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("create output dir '{}'", out_dir.display()))?;

    let mut paths = Vec::with_capacity(batch.len());
    for (i, frame) in batch.frames().iter().enumerate() {
        let path = out_dir.join(format!("frame_{i:04}.png"));
        frame
            .to_rgb_image()?
            .save(&path)
            .with_context(|| format!("write PNG '{}'", path.display()))?;
        paths.push(path);
    }

    let summary = RenderSummary {
        batch: batch.summary(),
        paths,
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
