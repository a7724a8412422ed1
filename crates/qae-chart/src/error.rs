// File: crates/qae-chart/src/error.rs
// Summary: Error type shared by chart construction, style parsing and export.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to create {width}x{height} raster surface")]
    SurfaceCreation { width: i32, height: i32 },

    #[error("failed to encode image as {0}")]
    Encode(&'static str),

    #[error("unsupported output format '{0}' (expected png, jpg, jpeg, webp or svg)")]
    UnsupportedFormat(String),

    #[error("invalid {kind} '{value}'")]
    InvalidStyle { kind: &'static str, value: String },

    #[error("invalid color '{0}'")]
    InvalidColor(String),

    #[error("failed to read back rendered pixels")]
    ReadPixels,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
