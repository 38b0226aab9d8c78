use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading the demo configuration and checking the base level.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid level count: {0} (must be in 1..=3)")]
    InvalidLevels(u32),

    #[error("invalid operand {name}: {value}")]
    InvalidOperand { name: &'static str, value: f64 },

    #[error("split literal {literal} for {bits}-bit mantissa does not match derived {derived}")]
    SplitMismatch { bits: u32, derived: f64, literal: f64 },

    #[error(transparent)]
    Core(#[from] doubled_core::CoreError),
}
