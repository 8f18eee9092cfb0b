use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PolyformError>;

#[derive(Debug, Error)]
pub enum PolyformError {
    #[error("File IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed camera record at {path}: {source}")]
    InvalidCamera {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Keyframe file name is not an integer timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    #[error("Format {0} is not currently supported")]
    UnsupportedFormat(String),
}
