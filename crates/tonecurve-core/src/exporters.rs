//! Image exporters
//!
//! Writes a pixel buffer back to disk as an 8-bit PNG with the channel layout
//! it was decoded with.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use log::error;

use crate::error::{Error, Result};
use crate::models::{ColorLayout, PixelBuffer};

/// Export a buffer to an 8-bit PNG.
///
/// Empty buffers are refused. Every failure is logged before it is returned.
pub fn export_png<P: AsRef<Path>>(image: &PixelBuffer, path: P) -> Result<()> {
    let path = path.as_ref();

    if image.is_empty() {
        return Err(encode_failure("The output image is empty.".to_string()));
    }

    let file = File::create(path).map_err(|e| {
        encode_failure(format!(
            "Saving the output image failed: {} ({})",
            path.display(),
            e
        ))
    })?;

    let mut encoder = png::Encoder::new(BufWriter::new(file), image.width(), image.height());
    encoder.set_color(png_color_type(image.layout()));
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| encode_failure(format!("Failed to write PNG header: {}", e)))?;
    writer
        .write_image_data(image.as_bytes())
        .map_err(|e| encode_failure(format!("Failed to write PNG image: {}", e)))?;
    writer
        .finish()
        .map_err(|e| encode_failure(format!("Failed to finish PNG stream: {}", e)))?;

    Ok(())
}

fn png_color_type(layout: ColorLayout) -> png::ColorType {
    match layout {
        ColorLayout::Gray => png::ColorType::Grayscale,
        ColorLayout::GrayAlpha => png::ColorType::GrayscaleAlpha,
        ColorLayout::Rgb => png::ColorType::Rgb,
        ColorLayout::Rgba => png::ColorType::Rgba,
    }
}

fn encode_failure(message: String) -> Error {
    error!("{}", message);
    Error::Encode(message)
}
