//! In-memory 8-bit pixel storage.

use crate::error::{Error, Result};

/// Channel arrangement of a decoded image.
///
/// The layout travels with the buffer so the encoder can write the image back
/// with the channel count it was read with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorLayout {
    Gray,
    GrayAlpha,
    Rgb,
    Rgba,
}

impl ColorLayout {
    /// Number of samples per pixel
    pub fn channels(self) -> usize {
        match self {
            ColorLayout::Gray => 1,
            ColorLayout::GrayAlpha => 2,
            ColorLayout::Rgb => 3,
            ColorLayout::Rgba => 4,
        }
    }
}

/// A rows x (columns x channels) grid of 8-bit samples, stored row-major
/// with interleaved channels and no padding between rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    layout: ColorLayout,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap raw interleaved samples. Fails if `data` does not hold exactly
    /// `width * height * channels` bytes.
    pub fn new(width: u32, height: u32, layout: ColorLayout, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * layout.channels();
        if data.len() != expected {
            return Err(Error::Decode(format!(
                "Pixel buffer size mismatch: expected {}, got {}",
                expected,
                data.len()
            )));
        }

        Ok(Self {
            width,
            height,
            layout,
            data,
        })
    }

    /// Buffer with every sample set to `value`.
    pub fn filled(width: u32, height: u32, layout: ColorLayout, value: u8) -> Self {
        let len = width as usize * height as usize * layout.channels();
        Self {
            width,
            height,
            layout,
            data: vec![value; len],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn layout(&self) -> ColorLayout {
        self.layout
    }

    pub fn channels(&self) -> usize {
        self.layout.channels()
    }

    /// Samples per row (columns x channels)
    pub fn row_len(&self) -> usize {
        self.width as usize * self.channels()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Mutable access to all samples. Dimensions cannot change through it.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Samples of row `y`, or `None` when `y` is past the last row.
    pub fn row(&self, y: usize) -> Option<&[u8]> {
        let len = self.row_len();
        let start = y.checked_mul(len)?;
        self.data.get(start..start.checked_add(len)?)
    }
}
