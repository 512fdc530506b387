//! Error types for the rendering pipeline.
//!
//! Decoding failures live in [`crate::decode::DecodeError`]; this module holds
//! the configuration errors detected before sampling and the umbrella
//! [`RenderError`] returned by the sequencer.

use crate::decode::DecodeError;

/// Invalid inputs detected before any sampling begins.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("invalid source dimensions {width}x{height}: width and height must be positive")]
    InvalidSourceDimensions { width: u32, height: u32 },

    #[error("a {width}x{height} source produces an output grid with no rows")]
    EmptyGrid { width: u32, height: u32 },

    #[error("output grid would have {rows} rows, more than the limit of {max}")]
    GridTooTall { rows: u64, max: u32 },

    #[error("character ramp needs at least 2 glyphs, got {len}")]
    RampTooShort { len: usize },

    #[error("target width must be greater than 0")]
    InvalidTargetWidth,

    #[error("font aspect must be a positive finite number, got {0}")]
    InvalidFontAspect(f64),

    #[error("pixel buffer holds {actual} bytes, expected at least {expected}")]
    BufferTooSmall { expected: usize, actual: usize },
}

/// Errors that abort a single render attempt.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("decode failed: {0}")]
    Decode(#[from] DecodeError),

    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// A newer request superseded this render while it was in flight.
    #[error("render cancelled")]
    Cancelled,
}
