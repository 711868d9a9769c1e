//! Image decoders
//!
//! 8-bit PNG is the only supported source format.

mod png;


use std::path::Path;

use crate::error::{Error, Result};
use crate::models::PixelBuffer;

/// Decode an image from a file path
pub fn decode_image<P: AsRef<Path>>(path: P) -> Result<PixelBuffer> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .ok_or_else(|| Error::Decode(format!("No file extension found: {}", path.display())))?;

    match extension.as_str() {
        "png" => png::decode_png(path),
        _ => Err(Error::Decode(format!(
            "Unsupported file format: {}",
            extension
        ))),
    }
}
