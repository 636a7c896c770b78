// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Container formats an image source may arrive in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    /// JPEG / JFIF.
    Jpeg,
    /// PNG.
    Png,
    /// GIF (first frame is displayed).
    Gif,
    /// WebP.
    WebP,
    /// Windows bitmap.
    Bmp,
    /// TIFF. Browsers do not display it; it is converted on load.
    Tiff,
    /// HEIC/HEIF. Browsers do not display it; it is converted on load.
    Heic,
    /// Anything else.
    Unknown,
}

/// ISO-BMFF brands that identify HEIF-family files.
const HEIF_BRANDS: &[&[u8; 4]] = &[
    b"heic", b"heix", b"hevc", b"hevx", b"heim", b"heis", b"hevm", b"hevs", b"mif1", b"msf1",
];

impl SourceFormat {
    /// Maps a MIME type (parameters allowed, case-insensitive) to a format.
    #[must_use]
    pub fn from_mime(mime: &str) -> Self {
        let essence = mime.split(';').next().unwrap_or_default().trim();
        let is = |name: &str| essence.eq_ignore_ascii_case(name);
        if is("image/jpeg") || is("image/jpg") || is("image/pjpeg") {
            Self::Jpeg
        } else if is("image/png") || is("image/apng") {
            Self::Png
        } else if is("image/gif") {
            Self::Gif
        } else if is("image/webp") {
            Self::WebP
        } else if is("image/bmp") || is("image/x-ms-bmp") {
            Self::Bmp
        } else if is("image/tiff") || is("image/tif") {
            Self::Tiff
        } else if is("image/heic")
            || is("image/heif")
            || is("image/heic-sequence")
            || is("image/heif-sequence")
        {
            Self::Heic
        } else {
            Self::Unknown
        }
    }

    /// Identifies a format from its leading magic bytes.
    #[must_use]
    pub fn sniff(bytes: &[u8]) -> Self {
        if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            Self::Jpeg
        } else if bytes.starts_with(b"\x89PNG\r\n\x1a\n") {
            Self::Png
        } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
            Self::Gif
        } else if bytes.len() >= 12 && &bytes[..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
            Self::WebP
        } else if bytes.starts_with(b"II*\0") || bytes.starts_with(b"MM\0*") {
            Self::Tiff
        } else if bytes.len() >= 12
            && &bytes[4..8] == b"ftyp"
            && HEIF_BRANDS.iter().any(|brand| &bytes[8..12] == *brand)
        {
            Self::Heic
        } else if bytes.starts_with(b"BM") {
            Self::Bmp
        } else {
            Self::Unknown
        }
    }

    /// Uses the declared MIME type when it names a known format, otherwise
    /// sniffs the bytes.
    #[must_use]
    pub fn detect(declared_mime: Option<&str>, bytes: &[u8]) -> Self {
        match declared_mime.map(Self::from_mime) {
            Some(format) if format != Self::Unknown => format,
            _ => Self::sniff(bytes),
        }
    }

    /// Canonical MIME type, if the format is known.
    #[must_use]
    pub fn mime(self) -> Option<&'static str> {
        Some(match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Gif => "image/gif",
            Self::WebP => "image/webp",
            Self::Bmp => "image/bmp",
            Self::Tiff => "image/tiff",
            Self::Heic => "image/heic",
            Self::Unknown => return None,
        })
    }

    /// Whether the format has to be converted before a browser-style
    /// surface can display it.
    #[must_use]
    pub fn needs_conversion(self) -> bool {
        matches!(self, Self::Tiff | Self::Heic)
    }

    /// The matching `image` crate format, when that crate can decode it.
    #[must_use]
    pub fn image_format(self) -> Option<image::ImageFormat> {
        match self {
            Self::Jpeg => Some(image::ImageFormat::Jpeg),
            Self::Png => Some(image::ImageFormat::Png),
            Self::Gif => Some(image::ImageFormat::Gif),
            Self::WebP => Some(image::ImageFormat::WebP),
            Self::Bmp => Some(image::ImageFormat::Bmp),
            Self::Tiff => Some(image::ImageFormat::Tiff),
            Self::Heic | Self::Unknown => None,
        }
    }
}
