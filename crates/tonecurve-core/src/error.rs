//! Error taxonomy for the transform pipeline.
//!
//! Every stage either succeeds or aborts the whole invocation with one of
//! these variants; nothing is retried.

use std::fmt;

use thiserror::Error;

/// Errors raised by the tone curve pipeline.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Parameters are malformed or semantically invalid. Raised before any I/O.
    #[error("{0}")]
    Validation(String),

    /// The input file could not be read or holds no usable pixel data.
    #[error("{0}")]
    Decode(String),

    /// Normalization was attempted on a constant (or non-numeric) table.
    #[error("degenerate curve, cannot normalize (min {min}, max {max})")]
    DegenerateCurve {
        /// Smallest entry found in the table.
        min: f64,
        /// Largest entry found in the table.
        max: f64,
    },

    /// A table with entries outside [0, 255] reached the applicator.
    #[error(
        "tone curve maps {index} to {value}, outside the 8-bit range; enable normalization"
    )]
    TableOutOfRange {
        /// Input intensity whose mapped value is out of range.
        index: usize,
        /// The offending table entry.
        value: f64,
    },

    /// The output could not be written, or the buffer to write was empty.
    #[error("{0}")]
    Encode(String),

    /// An explicitly requested configuration file was unusable.
    #[error("{0}")]
    Config(String),
}

/// Coarse category of an [`Error`], for callers that branch on failure type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Decode,
    DegenerateCurve,
    Encode,
    Config,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Validation(_) | Error::TableOutOfRange { .. } => ErrorKind::Validation,
            Error::Decode(_) => ErrorKind::Decode,
            Error::DegenerateCurve { .. } => ErrorKind::DegenerateCurve,
            Error::Encode(_) => ErrorKind::Encode,
            Error::Config(_) => ErrorKind::Config,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Validation => "validation",
            ErrorKind::Decode => "decode",
            ErrorKind::DegenerateCurve => "degenerate curve",
            ErrorKind::Encode => "encode",
            ErrorKind::Config => "config",
        };
        f.write_str(name)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
