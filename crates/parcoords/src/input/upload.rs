//! Decoding of browser file-upload payloads.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::{ParcoordsError, Result};

/// Decode a `data:<mime>;base64,<payload>` string into raw bytes.
pub fn decode_upload(contents: &str) -> Result<Vec<u8>> {
    let (header, payload) = contents
        .split_once(',')
        .ok_or_else(|| ParcoordsError::Upload("missing ',' separator in data URL".to_string()))?;

    if !header.ends_with(";base64") {
        return Err(ParcoordsError::Upload(format!(
            "expected a base64 data URL, got header '{}'",
            header
        )));
    }

    STANDARD
        .decode(payload.trim())
        .map_err(|e| ParcoordsError::Upload(format!("invalid base64 payload: {}", e)))
}
