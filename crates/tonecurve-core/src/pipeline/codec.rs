//! Decode/encode boundary of the pipeline.

use std::path::Path;

use crate::decoders::decode_image;
use crate::error::Result;
use crate::exporters::export_png;
use crate::models::PixelBuffer;

/// Reads and writes pixel buffers.
pub trait ImageCodec {
    /// Load `path`; fails with a decode error when it cannot be read or has no pixels.
    fn decode(&self, path: &Path) -> Result<PixelBuffer>;

    /// Write `image` to `path`; fails with an encode error for empty buffers
    /// or write failures.
    fn encode(&self, path: &Path, image: &PixelBuffer) -> Result<()>;
}

/// Codec backed by the `png` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct PngCodec;

impl ImageCodec for PngCodec {
    fn decode(&self, path: &Path) -> Result<PixelBuffer> {
        decode_image(path)
    }

    fn encode(&self, path: &Path, image: &PixelBuffer) -> Result<()> {
        export_png(image, path)
    }
}

impl<C: ImageCodec + ?Sized> ImageCodec for &C {
    fn decode(&self, path: &Path) -> Result<PixelBuffer> {
        (**self).decode(path)
    }

    fn encode(&self, path: &Path, image: &PixelBuffer) -> Result<()> {
        (**self).encode(path, image)
    }
}
