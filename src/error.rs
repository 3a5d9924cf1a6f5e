use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while editing or exporting a drawing
#[derive(Debug, Error)]
pub enum PaintError {
    #[error("Failed to encode image: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid canvas size {width}x{height} (allowed: 1..={max})")]
    InvalidCanvasSize { width: u32, height: u32, max: u32 },

    #[error("No usable font found (set SKETCHPAD_FONT to a .ttf/.otf file)")]
    FontUnavailable,

    #[error("Failed to parse font {path}")]
    InvalidFont { path: PathBuf },
}

/// Result type for paint operations
pub type PaintResult<T> = Result<T, PaintError>;
