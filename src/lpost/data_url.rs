//! Data URL encoding for stored images.
//!
//! Posts keep their image inline as `data:<mime>;base64,<payload>` so a
//! record is self-contained and can be handed straight to anything that
//! accepts an image source.

use crate::error::{GalleryError, Result};
use crate::model::ImageFormat;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

const PREFIX: &str = "data:";
const BASE64_MARKER: &str = ";base64";

pub fn encode(bytes: &[u8], format: ImageFormat) -> String {
    format!(
        "{}{}{},{}",
        PREFIX,
        format.mime(),
        BASE64_MARKER,
        STANDARD.encode(bytes)
    )
}

/// The MIME type from the header, without decoding the payload.
pub fn mime_of(data_url: &str) -> Option<&str> {
    let (header, _) = split(data_url)?;
    Some(header.strip_suffix(BASE64_MARKER).unwrap_or(header))
}

/// Decode a data URL back into its MIME type and raw bytes.
pub fn decode(data_url: &str) -> Result<(String, Vec<u8>)> {
    let (header, payload) = split(data_url)
        .ok_or_else(|| GalleryError::InvalidDataUrl("missing data: header".to_string()))?;

    let mime = header.strip_suffix(BASE64_MARKER).ok_or_else(|| {
        GalleryError::InvalidDataUrl("only base64 payloads are supported".to_string())
    })?;

    let bytes = STANDARD
        .decode(payload.trim())
        .map_err(|e| GalleryError::InvalidDataUrl(e.to_string()))?;

    Ok((mime.to_string(), bytes))
}

/// Size of the decoded payload, computed from the base64 length.
pub fn decoded_len(data_url: &str) -> Option<usize> {
    let (header, payload) = split(data_url)?;
    header.strip_suffix(BASE64_MARKER)?;
    let payload = payload.trim();
    if payload.len() % 4 != 0 {
        return None;
    }
    let padding = payload.bytes().rev().take_while(|b| *b == b'=').count();
    (payload.len() / 4 * 3).checked_sub(padding)
}

fn split(data_url: &str) -> Option<(&str, &str)> {
    data_url.strip_prefix(PREFIX)?.split_once(',')
}
