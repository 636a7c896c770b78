// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::io::Cursor;

use image::ImageReader;
use kurbo::Size;

use crate::data_uri::DataUri;
use crate::decode::Decoder;
use crate::error::{Result, SourceError};
use crate::format::SourceFormat;

const FALLBACK_MIME: &str = "application/octet-stream";

/// An image ready to hand to a display surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedImage {
    /// MIME type of [`PreparedImage::bytes`].
    pub mime: String,
    /// Displayable encoded bytes.
    pub bytes: Vec<u8>,
    /// Native width in pixels. Never zero.
    pub width: u32,
    /// Native height in pixels. Never zero.
    pub height: u32,
    /// Original format when the bytes were converted, `None` on pass-through.
    pub converted_from: Option<SourceFormat>,
}

impl PreparedImage {
    /// Native size, as consumed by the viewport geometry.
    #[must_use]
    pub fn native_size(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }

    /// Format of the prepared bytes.
    #[must_use]
    pub fn format(&self) -> SourceFormat {
        SourceFormat::detect(Some(self.mime.as_str()), &self.bytes)
    }
}

/// Makes `bytes` displayable.
///
/// The format is taken from the leading magic bytes; `declared_mime` is only
/// consulted when the bytes are not recognized.
///
/// Formats a browser-style surface cannot show (TIFF, HEIC) are decoded with
/// `decoder` and re-encoded as PNG. Everything else passes through unchanged;
/// only its header is read to learn the native size.
///
/// The viewport geometry needs a native size, so pass-through images whose
/// size cannot be read are rejected: [`SourceError::UnsupportedFormat`] when
/// no header reader recognizes the bytes (SVG, for instance), or
/// [`SourceError::Decode`] when the recognized format has no reader built in
/// (AVIF). Images with a zero dimension are rejected with
/// [`SourceError::EmptyImage`], so the viewport geometry never sees them.
pub fn prepare<D: Decoder + ?Sized>(
    bytes: Vec<u8>,
    declared_mime: Option<&str>,
    decoder: &D,
) -> Result<PreparedImage> {
    let format = match SourceFormat::sniff(&bytes) {
        SourceFormat::Unknown => SourceFormat::detect(declared_mime, &bytes),
        sniffed => sniffed,
    };

    let prepared = if format.needs_conversion() {
        let raster = decoder.decode(format, &bytes)?;
        if raster.width() == 0 || raster.height() == 0 {
            return Err(SourceError::EmptyImage);
        }
        let png = raster.encode_png()?;
        tracing::debug!(
            ?format,
            width = raster.width(),
            height = raster.height(),
            "converted image to PNG"
        );
        PreparedImage {
            mime: String::from("image/png"),
            bytes: png,
            width: raster.width(),
            height: raster.height(),
            converted_from: Some(format),
        }
    } else {
        let (width, height) = read_dimensions(format, &bytes)?;
        let mime = format
            .mime()
            .or(declared_mime)
            .unwrap_or(FALLBACK_MIME)
            .to_owned();
        tracing::trace!(?format, width, height, "image passes through");
        PreparedImage {
            mime,
            bytes,
            width,
            height,
            converted_from: None,
        }
    };

    if prepared.width == 0 || prepared.height == 0 {
        return Err(SourceError::EmptyImage);
    }
    Ok(prepared)
}

/// Parses a `data:` URI and prepares its payload; see [`prepare`].
pub fn prepare_data_uri<D: Decoder + ?Sized>(uri: &str, decoder: &D) -> Result<PreparedImage> {
    let (mime, data) = DataUri::parse(uri)?.into_parts();
    prepare(data, Some(mime.as_str()), decoder)
}

fn read_dimensions(format: SourceFormat, bytes: &[u8]) -> Result<(u32, u32)> {
    let reader = match format.image_format() {
        Some(image_format) => ImageReader::with_format(Cursor::new(bytes), image_format),
        None => {
            let reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
            if reader.format().is_none() {
                return Err(SourceError::UnsupportedFormat(format));
            }
            reader
        }
    };
    Ok(reader.into_dimensions()?)
}
