// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::format::SourceFormat;

/// Errors raised while turning image bytes into something displayable.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The input does not start with `data:`.
    #[error("not a data URI: missing `data:` scheme")]
    MissingScheme,
    /// The data URI has no `,` separating header and payload.
    #[error("malformed data URI: missing `,` before the payload")]
    MissingComma,
    /// The base64 payload of a data URI could not be decoded.
    #[error("invalid base64 payload")]
    InvalidBase64(#[from] base64::DecodeError),
    /// A `%` escape in a data URI payload is not followed by two hex digits.
    #[error("invalid percent-encoding at byte {0}")]
    InvalidPercentEncoding(usize),
    /// No decoder is available for this format.
    #[error("no decoder available for {0:?} images")]
    UnsupportedFormat(SourceFormat),
    /// A raster's pixel buffer does not match its dimensions.
    #[error("pixel buffer holds {actual} bytes, expected {expected}")]
    PixelBufferMismatch {
        /// Length implied by width × height × 4.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },
    /// The image has zero width or height and cannot be placed.
    #[error("image has zero width or height")]
    EmptyImage,
    /// The underlying codec failed.
    #[error("failed to decode image")]
    Decode(#[from] image::ImageError),
    /// Reading image bytes or headers failed.
    #[error("failed to read image data")]
    Io(#[from] std::io::Error),
}

/// Result alias for image source operations.
pub type Result<T, E = SourceError> = core::result::Result<T, E>;
