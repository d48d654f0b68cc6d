//! Error types for plotnet operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in plotnet operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Variable range is empty or reversed (bottom must lie below top).
    #[error("invalid variable range: bottom {bottom} must be below top {top}")]
    InvalidRange {
        /// Lower bound of the range.
        bottom: f64,
        /// Upper bound of the range.
        top: f64,
    },

    /// Step does not fit inside the variable range.
    #[error("step {step} must be lower than the range span {span}")]
    InvalidStep {
        /// Requested step.
        step: f64,
        /// Range span (top - bottom).
        span: f64,
    },

    /// Range/step combination would exceed the sample or net-line capacity.
    #[error("range/step would produce {required:.0} steps, exceeding capacity {capacity}")]
    CapacityExceeded {
        /// Steps the range/step combination would produce.
        required: f64,
        /// Configured capacity.
        capacity: u32,
    },

    /// A variable name has no binding in the evaluation context.
    #[error("no binding for variable {0:?} in the evaluation context")]
    UnknownVariable(String),

    /// Requested operation is not implemented (e.g. multi-variable plots).
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),

    /// Empty data provided where non-empty is required.
    #[error("empty data provided")]
    EmptyData,

    /// Invalid dimensions for a framebuffer or surface.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Color parsing error.
    #[error("invalid color: {0}")]
    InvalidColor(String),
}
