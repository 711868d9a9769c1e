//! Data types shared across the pipeline.

mod params;
mod pixel_buffer;

pub use params::{TransformOptions, TransformParameters};
pub use pixel_buffer::{ColorLayout, PixelBuffer};
