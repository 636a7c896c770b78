// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::str::FromStr;

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

use crate::error::{Result, SourceError};

/// Standard alphabet, padding optional, as browsers accept it.
const PAYLOAD_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

const DEFAULT_MIME: &str = "text/plain";

/// A decoded `data:` URI.
///
/// ```rust
/// use understory_image_source::DataUri;
///
/// let uri: DataUri = "data:image/png;base64,iVBORw0KGgo=".parse().unwrap();
/// assert_eq!(uri.mime(), "image/png");
/// assert_eq!(uri.data(), b"\x89PNG\r\n\x1a\n");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataUri {
    mime: String,
    base64: bool,
    data: Vec<u8>,
}

impl DataUri {
    /// Parses `data:[<mime>][;param]*[;base64],<payload>`.
    ///
    /// Base64 payloads may omit padding and contain ASCII whitespace; other
    /// payloads are percent-decoded. An empty MIME type reads as
    /// `text/plain`.
    pub fn parse(uri: &str) -> Result<Self> {
        let rest = uri
            .get(..5)
            .filter(|scheme| scheme.eq_ignore_ascii_case("data:"))
            .map(|_| &uri[5..])
            .ok_or(SourceError::MissingScheme)?;
        let (header, payload) = rest.split_once(',').ok_or(SourceError::MissingComma)?;

        let mut params = header.split(';');
        let mime = params.next().unwrap_or_default().trim();
        let base64 = params.any(|param| param.trim().eq_ignore_ascii_case("base64"));

        let data = if base64 {
            let compact: String = payload
                .chars()
                .filter(|c| !c.is_ascii_whitespace())
                .collect();
            PAYLOAD_BASE64.decode(compact)?
        } else {
            percent_decode(payload)?
        };

        Ok(Self {
            mime: if mime.is_empty() {
                DEFAULT_MIME.to_owned()
            } else {
                mime.to_ascii_lowercase()
            },
            base64,
            data,
        })
    }

    /// MIME type from the header, lowercased.
    #[must_use]
    pub fn mime(&self) -> &str {
        &self.mime
    }

    /// Whether the payload was base64 encoded.
    #[must_use]
    pub fn is_base64(&self) -> bool {
        self.base64
    }

    /// Decoded payload bytes.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the URI and returns its MIME type and payload.
    #[must_use]
    pub fn into_parts(self) -> (String, Vec<u8>) {
        (self.mime, self.data)
    }
}

impl FromStr for DataUri {
    type Err = SourceError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn percent_decode(input: &str) -> Result<Vec<u8>> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hi = bytes.get(i + 1).copied().and_then(hex_value);
            let lo = bytes.get(i + 2).copied().and_then(hex_value);
            let (Some(hi), Some(lo)) = (hi, lo) else {
                return Err(SourceError::InvalidPercentEncoding(i));
            };
            out.push((hi << 4) | lo);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    Ok(out)
}

fn hex_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}
