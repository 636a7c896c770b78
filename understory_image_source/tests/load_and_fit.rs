// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_image_source` crate.
//!
//! These follow an image from encoded bytes to a fitted canvas: the bytes
//! are prepared, and the reported native size drives the viewport geometry.

use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};
use kurbo::{Point, Size};
use understory_image_source::{
    Fallback, ImageCrateDecoder, RasterImage, SourceFormat, prepare, prepare_data_uri,
};
use understory_image_view::{FitMode, HeadlessSurface, ImageCanvasView, ImageLayer, Surface};

fn encode(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
    let image = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, 0, 255])
    });
    let mut out = Vec::new();
    image.write_to(&mut Cursor::new(&mut out), format).unwrap();
    out
}

#[test]
fn converted_tiff_fits_its_container() {
    let tiff = encode(160, 40, ImageFormat::Tiff);
    let prepared = prepare(tiff, Some("image/tiff"), &ImageCrateDecoder).unwrap();
    assert_eq!(prepared.format(), SourceFormat::Png);

    let mut view = ImageCanvasView::default();
    let mut surface = HeadlessSurface::default();
    let container = Size::new(800.0, 600.0);
    let mut image = ImageLayer::new(prepared.native_size(), Size::ZERO);

    let placement = view
        .resize(Some(&mut surface), Some(&container), &mut image)
        .unwrap();
    assert_eq!(placement.width, 800.0);
    assert_eq!(placement.height, 200.0);
    assert_eq!(placement.y, 200.0);
    assert_eq!(placement.scale, 5.0);
    assert_eq!(image.node, Size::new(160.0, 40.0));
    assert_eq!(surface.position(), Point::new(0.0, 200.0));
}

#[test]
fn fill_mode_uses_prepared_width() {
    let png = encode(30, 60, ImageFormat::Png);
    let prepared = prepare(png, None, &ImageCrateDecoder).unwrap();

    let mut view = ImageCanvasView::default();
    view.set_fit_mode(FitMode::Fill);
    let mut surface = HeadlessSurface::default();
    let container = Size::new(300.0, 200.0);
    let mut image = ImageLayer::new(prepared.native_size(), Size::ZERO);

    let placement = view
        .resize(Some(&mut surface), Some(&container), &mut image)
        .unwrap();
    assert_eq!((placement.x, placement.y), (0.0, 0.0));
    assert_eq!(placement.height, 600.0);
    assert_eq!(placement.scale, 10.0);
}

#[test]
fn heic_data_uri_with_host_decoder() {
    let host_heic = |_: SourceFormat, bytes: &[u8]| {
        // Pretend the payload length encodes the side of a square image.
        let side = u32::try_from(bytes.len()).unwrap();
        RasterImage::new(side, side, vec![128; (side * side * 4) as usize])
    };
    let decoder = Fallback::new(ImageCrateDecoder, host_heic);

    let prepared = prepare_data_uri("data:image/heic,abcdefgh", &decoder).unwrap();
    assert_eq!(prepared.converted_from, Some(SourceFormat::Heic));
    assert_eq!(prepared.native_size(), Size::new(8.0, 8.0));
}
