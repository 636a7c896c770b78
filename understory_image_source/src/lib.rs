// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_image_source --heading-base-level=0

//! Understory Image Source: getting image bytes into a displayable shape.
//!
//! An image canvas receives images as URLs, `data:` URIs or raw bytes, and
//! some of them (TIFF, HEIC) cannot be shown by a browser-style surface.
//! This crate:
//! - Parses `data:` URIs ([`DataUri`]).
//! - Detects the container format from the declared MIME type or from the
//!   leading magic bytes ([`SourceFormat`]).
//! - Converts formats that need it into PNG via a pluggable [`Decoder`]
//!   ([`prepare`]), and reports the native pixel size the viewport geometry
//!   in `understory_image_view` needs.
//!
//! Codecs are not implemented here. [`ImageCrateDecoder`] delegates to the
//! `image` crate; HEIC needs a host-supplied decoder, combined with
//! [`Fallback`] or passed directly as a closure.
//!
//! ## Example
//!
//! ```rust
//! use understory_image_source::{ImageCrateDecoder, SourceFormat, prepare_data_uri};
//!
//! // A 1×1 transparent PNG.
//! let uri = "data:image/png;base64,\
//!     iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";
//! let prepared = prepare_data_uri(uri, &ImageCrateDecoder).unwrap();
//! assert_eq!(prepared.format(), SourceFormat::Png);
//! assert_eq!((prepared.width, prepared.height), (1, 1));
//! assert!(prepared.converted_from.is_none());
//! ```

mod data_uri;
mod decode;
mod error;
mod format;
mod prepare;

pub use data_uri::DataUri;
pub use decode::{Decoder, Fallback, ImageCrateDecoder, RasterImage};
pub use error::{Result, SourceError};
pub use format::SourceFormat;
pub use prepare::{PreparedImage, prepare, prepare_data_uri};
