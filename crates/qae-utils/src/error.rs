// File: crates/qae-utils/src/error.rs
// Summary: Error type for conversions, smoothing, normalisation and plotting.

use qae_chart::ChartError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UtilsError {
    #[error("value {value} does not fit in {width} bits")]
    InvalidWidth { value: u64, width: u32 },

    #[error("bit at position {index} is {value}, expected 0 or 1")]
    InvalidBit { index: usize, value: u8 },

    #[error("{significant} significant bits exceed the {max}-bit limit")]
    TooManyBits { significant: usize, max: u32 },

    #[error("{0} cannot be empty")]
    EmptyInput(&'static str),

    #[error("smoothing weight {0} is outside [0, 1]")]
    InvalidWeight(f64),

    #[error("no automatic color for series {index}: palette holds {capacity} colors")]
    PaletteExhausted { index: usize, capacity: usize },

    #[error("{what}: expected {expected} entries, got {got}")]
    LengthMismatch { what: &'static str, expected: usize, got: usize },

    #[error("series {index} starting at {offset} with {len} points runs past the end of the x axis")]
    OffsetOverflow { index: usize, offset: i64, len: usize },

    #[error("log interval must be at least 1")]
    ZeroInterval,

    #[error("unknown {kind} '{value}'")]
    UnknownName { kind: &'static str, value: String },

    #[error(transparent)]
    Chart(#[from] ChartError),
}

pub type Result<T> = std::result::Result<T, UtilsError>;
