//! Transform orchestration
//!
//! One invocation walks `Uninitialized -> Validated -> Loaded -> Transformed
//! -> Saved`. The first error moves it to `Failed` and nothing after it runs.

use std::fmt;
use std::path::Path;
use std::time::{Duration, Instant};

use log::debug;

use crate::error::{Error, Result};
use crate::models::{PixelBuffer, TransformOptions, TransformParameters};

use super::codec::{ImageCodec, PngCodec};
use super::tone_mapping::{apply_with_min_rows, normalize, ToneCurve};

/// Extension both the input and the output path must carry. It matches the
/// only format the codec reads and writes.
pub const REQUIRED_EXTENSION: &str = "png";

/// Progress of a single transform invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Uninitialized,
    Validated,
    Loaded,
    Transformed,
    Saved,
    Failed,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Uninitialized => "uninitialized",
            Stage::Validated => "validated",
            Stage::Loaded => "loaded",
            Stage::Transformed => "transformed",
            Stage::Saved => "saved",
            Stage::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Summary of a successful transform.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformReport {
    /// Wall-clock time spent building, normalizing and applying the table
    pub elapsed: Duration,
    pub width: u32,
    pub height: u32,
    pub channels: usize,
    /// Stage the pipeline finished in
    pub stage: Stage,
    /// Whether the normalizer stage ran
    pub normalized: bool,
}

impl TransformReport {
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Runs load -> build table -> apply -> save for one set of parameters.
pub struct TransformPipeline<'a, C: ImageCodec> {
    params: &'a TransformParameters,
    options: &'a TransformOptions,
    codec: C,
    curve: ToneCurve,
    stage: Stage,
}

impl<'a> TransformPipeline<'a, PngCodec> {
    /// Pipeline reading and writing PNG files.
    pub fn new(params: &'a TransformParameters, options: &'a TransformOptions) -> Self {
        Self::with_codec(params, options, PngCodec)
    }
}

impl<'a, C: ImageCodec> TransformPipeline<'a, C> {
    pub fn with_codec(
        params: &'a TransformParameters,
        options: &'a TransformOptions,
        codec: C,
    ) -> Self {
        Self {
            params,
            options,
            codec,
            curve: ToneCurve::piecewise(params.threshold(), params.gamma()),
            stage: Stage::Uninitialized,
        }
    }

    /// Replace the threshold/gamma curve with another shape. Validation of
    /// `t` and `g` still applies.
    pub fn with_curve(mut self, curve: ToneCurve) -> Self {
        self.curve = curve;
        self
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Execute every stage in order. Can only run once.
    pub fn run(&mut self) -> Result<TransformReport> {
        if self.stage != Stage::Uninitialized {
            return Err(Error::Validation(format!(
                "Transform already ran (stage: {})",
                self.stage
            )));
        }

        let result = self.run_stages();
        if let Err(err) = &result {
            debug!("Transform failed at stage {}: {}", self.stage, err);
            self.stage = Stage::Failed;
        }
        result
    }

    fn run_stages(&mut self) -> Result<TransformReport> {
        self.validate()?;
        self.advance(Stage::Validated);

        let mut image = self.codec.decode(self.params.input())?;
        self.advance(Stage::Loaded);

        let elapsed = self.transform(&mut image)?;
        self.advance(Stage::Transformed);
        debug!("Processing time: {:.3}ms", elapsed.as_secs_f64() * 1000.0);

        self.codec.encode(self.params.output(), &image)?;
        self.advance(Stage::Saved);

        Ok(TransformReport {
            elapsed,
            width: image.width(),
            height: image.height(),
            channels: image.channels(),
            stage: self.stage,
            normalized: self.options.normalize,
        })
    }

    fn advance(&mut self, next: Stage) {
        debug!("Transform stage: {} -> {}", self.stage, next);
        self.stage = next;
    }

    fn validate(&self) -> Result<()> {
        let input = self.params.input();
        let output = self.params.output();

        if input.as_os_str().is_empty() {
            return Err(Error::Validation("Input image path is empty.".to_string()));
        }
        if !input.exists() {
            return Err(Error::Validation(format!(
                "Input file path does not exist: {}",
                input.display()
            )));
        }
        if !has_extension(input, REQUIRED_EXTENSION) {
            return Err(Error::Validation(format!(
                "A {} image is expected as input.",
                REQUIRED_EXTENSION
            )));
        }

        let (t, g) = (self.params.threshold(), self.params.gamma());
        if !is_non_negative(t) || !is_non_negative(g) {
            return Err(Error::Validation(format!(
                "g and t must be non-negative (t = {}, g = {}).",
                t, g
            )));
        }

        if !has_extension(output, REQUIRED_EXTENSION) {
            return Err(Error::Validation(format!(
                "Output image file path must have a .{} extension.",
                REQUIRED_EXTENSION
            )));
        }

        Ok(())
    }

    /// Build the table, optionally normalize it, and apply it in place.
    fn transform(&self, image: &mut PixelBuffer) -> Result<Duration> {
        let start = Instant::now();

        let mut table = self.curve.to_table();
        if self.options.normalize {
            normalize(&mut table)?;
        }

        let (min, max) = table.min_max();
        debug!("Tone curve {:?} spans [{}, {}]", self.curve, min, max);

        if let Some((index, value)) = table.out_of_range_entry() {
            return Err(Error::TableOutOfRange { index, value });
        }

        apply_with_min_rows(&table, image, self.options.parallel_min_rows);

        Ok(start.elapsed())
    }
}

/// Validate, load, transform and save with the PNG codec.
pub fn run_transform(
    params: &TransformParameters,
    options: &TransformOptions,
) -> Result<TransformReport> {
    TransformPipeline::new(params, options).run()
}

fn has_extension(path: &Path, expected: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(expected))
}

fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
