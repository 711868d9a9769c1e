//! PNG image decoder

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};
use crate::models::{ColorLayout, PixelBuffer};

/// Decode a PNG file into an 8-bit buffer, keeping its channel layout.
///
/// Palette and sub-byte grayscale images are expanded to 8 bits per sample.
/// 16-bit images are rejected.
pub(crate) fn decode_png(path: &Path) -> Result<PixelBuffer> {
    let file = File::open(path).map_err(|e| {
        Error::Decode(format!(
            "Input image contains no data: {} ({})",
            path.display(),
            e
        ))
    })?;

    let mut decoder = png::Decoder::new(BufReader::new(file));
    decoder.set_transformations(png::Transformations::EXPAND);
    let mut reader = decoder
        .read_info()
        .map_err(|e| Error::Decode(format!("Failed to read PNG info: {}", e)))?;

    let buffer_size = reader
        .output_buffer_size()
        .ok_or_else(|| Error::Decode("Failed to determine PNG buffer size".to_string()))?;
    let mut buf = vec![0u8; buffer_size];
    let frame_info = reader
        .next_frame(&mut buf)
        .map_err(|e| Error::Decode(format!("Failed to read PNG frame: {}", e)))?;

    if frame_info.bit_depth != png::BitDepth::Eight {
        return Err(Error::Decode(format!(
            "Unsupported PNG bit depth {:?}: only 8-bit images are supported",
            frame_info.bit_depth
        )));
    }

    let layout = match frame_info.color_type {
        png::ColorType::Grayscale => ColorLayout::Gray,
        png::ColorType::GrayscaleAlpha => ColorLayout::GrayAlpha,
        png::ColorType::Rgb => ColorLayout::Rgb,
        png::ColorType::Rgba => ColorLayout::Rgba,
        png::ColorType::Indexed => {
            return Err(Error::Decode(
                "Indexed PNG was not expanded to RGB".to_string(),
            ));
        }
    };

    let (width, height) = (frame_info.width, frame_info.height);
    if width == 0 || height == 0 {
        return Err(Error::Decode(format!(
            "Input image contains no data: {}",
            path.display()
        )));
    }

    buf.truncate(frame_info.buffer_size());
    debug!(
        "Decoded {}: {}x{}, {} channels",
        path.display(),
        width,
        height,
        layout.channels()
    );

    PixelBuffer::new(width, height, layout, buf)
}
