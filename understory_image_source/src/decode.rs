// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::io::Cursor;

use image::{ImageFormat, RgbaImage};
use kurbo::Size;

use crate::error::{Result, SourceError};
use crate::format::SourceFormat;

/// A decoded image as 8-bit RGBA pixels, rows top to bottom.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl RasterImage {
    /// Wraps an RGBA buffer, checking it matches `width × height`.
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(SourceError::PixelBufferMismatch {
                expected,
                actual: rgba.len(),
            });
        }
        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Native size, as consumed by the viewport geometry.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }

    /// The RGBA pixel buffer.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.rgba
    }

    /// Encodes the raster as PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        // `new` guarantees the buffer length, so this never yields `None`.
        let Some(buffer) = RgbaImage::from_raw(self.width, self.height, self.rgba.clone()) else {
            return Err(SourceError::PixelBufferMismatch {
                expected: self.width as usize * self.height as usize * 4,
                actual: self.rgba.len(),
            });
        };
        buffer.write_to(&mut Cursor::new(&mut out), ImageFormat::Png)?;
        Ok(out)
    }
}

impl From<RgbaImage> for RasterImage {
    fn from(image: RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            rgba: image.into_raw(),
        }
    }
}

/// Capability for turning encoded bytes into a raster.
///
/// [`ImageCrateDecoder`] covers what the `image` crate can read. Hosts that
/// need more (HEIC, camera RAW) implement this trait or pass a closure.
pub trait Decoder {
    /// Decodes `bytes`, which are known to be in `format`.
    fn decode(&self, format: SourceFormat, bytes: &[u8]) -> Result<RasterImage>;
}

impl<F> Decoder for F
where
    F: Fn(SourceFormat, &[u8]) -> Result<RasterImage>,
{
    fn decode(&self, format: SourceFormat, bytes: &[u8]) -> Result<RasterImage> {
        self(format, bytes)
    }
}

/// [`Decoder`] backed by the `image` crate.
///
/// Multi-page TIFFs decode to their first page. HEIC is reported as
/// [`SourceError::UnsupportedFormat`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ImageCrateDecoder;

impl Decoder for ImageCrateDecoder {
    fn decode(&self, format: SourceFormat, bytes: &[u8]) -> Result<RasterImage> {
        let Some(image_format) = format.image_format() else {
            return Err(SourceError::UnsupportedFormat(format));
        };
        let decoded = image::load_from_memory_with_format(bytes, image_format)?;
        tracing::debug!(
            ?format,
            width = decoded.width(),
            height = decoded.height(),
            "decoded image"
        );
        Ok(decoded.to_rgba8().into())
    }
}

/// Pairs a decoder with a fallback used when the first one has no support
/// for a format.
#[derive(Clone, Copy, Debug, Default)]
pub struct Fallback<A, B> {
    primary: A,
    secondary: B,
}

impl<A: Decoder, B: Decoder> Fallback<A, B> {
    /// Tries `primary` first and `secondary` on
    /// [`SourceError::UnsupportedFormat`].
    pub fn new(primary: A, secondary: B) -> Self {
        Self { primary, secondary }
    }
}

impl<A: Decoder, B: Decoder> Decoder for Fallback<A, B> {
    fn decode(&self, format: SourceFormat, bytes: &[u8]) -> Result<RasterImage> {
        match self.primary.decode(format, bytes) {
            Err(SourceError::UnsupportedFormat(_)) => self.secondary.decode(format, bytes),
            other => other,
        }
    }
}
