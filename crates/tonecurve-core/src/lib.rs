//! Tonecurve Core Library
//!
//! Lookup-table tone curves for 8-bit images: build a 256-entry curve from a
//! threshold and a gamma, optionally normalize it, and apply it to every
//! sample of a decoded image in parallel across rows.

pub mod config;
pub mod decoders;
pub mod error;
pub mod exporters;
pub mod models;
pub mod pipeline;

// Re-export commonly used types
pub use error::{Error, ErrorKind, Result};
pub use models::{ColorLayout, PixelBuffer, TransformOptions, TransformParameters};
pub use pipeline::{
    apply, apply_sequential, build, normalize, run_transform, ImageCodec, PngCodec, Stage,
    ToneCurve, ToneCurveTable, TransformPipeline, TransformReport, LUT_SIZE,
};
