//! Image processing pipeline
//!
//! This module is organized into submodules:
//! - `tone_mapping`: tone curve construction, normalization and application
//! - `codec`: the decode/encode boundary used by the pipeline
//! - `transform`: validation and stage sequencing for one invocation

mod codec;
mod tone_mapping;
mod transform;


// Re-export public items from submodules
pub use codec::{ImageCodec, PngCodec};
pub use tone_mapping::{
    apply, apply_sequential, apply_with_min_rows, build, normalize, ToneCurve, ToneCurveTable,
    LUT_SIZE, MAX_INTENSITY, PARALLEL_MIN_ROWS,
};
pub use transform::{
    run_transform, Stage, TransformPipeline, TransformReport, REQUIRED_EXTENSION,
};
