//! Error types for the heartfield core.

use thiserror::Error;

/// Errors produced by heartfield operations.
///
/// Every numeric precondition of the pipeline (non-degenerate interpolation
/// bounds, non-zero period, in-bounds sampling) is reported through this type
/// instead of letting a NaN or a stray byte leak into the picture.
#[derive(Debug, Error)]
pub enum HeartfieldError {
    /// Width or height was zero when creating a surface, buffer, or field.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// An interpolation domain collapsed to a single point (`x1 == x2`).
    #[error("degenerate interpolation interval: x1 and x2 are both {bound}")]
    DegenerateInterval { bound: f64 },

    /// A sinusoid was evaluated with a zero period.
    #[error("sinusoid period must be non-zero")]
    ZeroPeriod,

    /// A color ramp was asked to divide by a zero element count.
    #[error("color ramp total must be non-zero")]
    ZeroTotal,

    /// A curve was requested with too few vertices to be drawable.
    #[error("invalid point count: got {got}, need at least {min}")]
    InvalidPointCount { got: usize, min: usize },

    /// An (x, y) pixel coordinate was outside the buffer.
    #[error("pixel ({x}, {y}) out of bounds for buffer of size ({width}, {height})")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// A raw byte buffer did not have `width * height * 4` bytes.
    #[error("buffer size mismatch: expected {expected} bytes, got {got}")]
    BufferSizeMismatch { expected: usize, got: usize },

    /// A frame carried a different number of scales than the field has circles.
    #[error("frame mismatch: field has {cells} circles, frame has {scales} scales")]
    FrameMismatch { cells: usize, scales: usize },

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A configuration value was present but unusable.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// An I/O failure (PNG export, config file read).
    #[error("i/o error: {0}")]
    Io(String),
}
