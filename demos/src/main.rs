// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fits an image into a headless canvas and replays a drag over it.
//!
//! ```text
//! RUST_LOG=debug cargo run -p understory_demos --bin fit_image -- photo.tiff --container 1024x768 --zoom 2
//! ```

use std::process::ExitCode;

use clap::Parser;
use kurbo::{Point, Size};
use understory_image_source::{
    ImageCrateDecoder, PreparedImage, SourceError, prepare, prepare_data_uri,
};
use understory_image_view::{
    FitMode, HeadlessSurface, ImageCanvasView, ImageLayer, Surface, ViewConfig, ZoomLimits,
};

#[derive(Debug, Parser)]
#[command(about = "Fit an image into a headless canvas and replay a drag")]
struct Args {
    /// Image file path or `data:` URI.
    source: String,
    /// Container size as WIDTHxHEIGHT.
    #[arg(long, default_value = "800x600", value_parser = parse_size)]
    container: Size,
    /// Fill the container width instead of keeping the whole image visible.
    #[arg(long)]
    fill: bool,
    /// Zoom factor applied at the container center before dragging.
    #[arg(long, default_value_t = 1.0)]
    zoom: f64,
    /// Largest zoom factor allowed.
    #[arg(long, default_value_t = 10.0)]
    max_zoom: f64,
    /// Horizontal movement per drag sample.
    #[arg(long, default_value_t = -25.0, allow_hyphen_values = true)]
    drag_x: f64,
    /// Vertical movement per drag sample.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    drag_y: f64,
    /// Number of drag samples.
    #[arg(long, default_value_t = 20)]
    steps: u32,
}

fn parse_size(s: &str) -> Result<Size, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got `{s}`"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| *v > 0.0 && v.is_finite())
            .ok_or_else(|| format!("`{v}` is not a positive number"))
    };
    Ok(Size::new(parse(w)?, parse(h)?))
}

fn load(source: &str) -> Result<PreparedImage, SourceError> {
    if source.starts_with("data:") {
        prepare_data_uri(source, &ImageCrateDecoder)
    } else {
        let bytes = std::fs::read(source)?;
        prepare(bytes, None, &ImageCrateDecoder)
    }
}

fn run(args: &Args) -> Result<(), SourceError> {
    let prepared = load(&args.source)?;
    println!(
        "loaded {}x{} {}{}",
        prepared.width,
        prepared.height,
        prepared.mime,
        prepared
            .converted_from
            .map(|from| format!(" (converted from {from:?})"))
            .unwrap_or_default()
    );

    let mut view = ImageCanvasView::new(ViewConfig {
        fit_mode: FitMode::from_full_width(args.fill),
        zoom_limits: ZoomLimits::new(1.0, args.max_zoom),
    });
    let mut surface = HeadlessSurface::default();
    let mut image = ImageLayer::new(prepared.native_size(), Size::ZERO);

    let Some(placement) = view.resize(Some(&mut surface), Some(&args.container), &mut image) else {
        return Ok(());
    };
    println!(
        "placement x={} y={} width={} height={} scale={}",
        placement.x, placement.y, placement.width, placement.height, placement.scale
    );

    if args.zoom != 1.0 {
        let center = Point::new(args.container.width / 2.0, args.container.height / 2.0);
        let zoom = view.zoom_at(&mut surface, center, args.zoom);
        println!("zoom {zoom} -> position {:?}", surface.position());
    }

    let mut rejected = 0_u32;
    for _ in 0..args.steps {
        let here = surface.position();
        let candidate = Point::new(here.x + args.drag_x, here.y + args.drag_y);
        if let Some(accepted) = view.pan_to(&mut surface, candidate)
            && accepted != candidate
        {
            rejected += 1;
        }
    }
    println!(
        "after {} drag samples: position {:?} ({rejected} partially or fully rejected)",
        args.steps,
        surface.position()
    );
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, source = %args.source, "failed to fit image");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
