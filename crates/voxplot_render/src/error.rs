//! # Render Error Types

use thiserror::Error;

/// Errors that can occur while rasterizing or exporting a figure.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Figure dimensions are unusable (zero or overflowing).
    #[error("invalid figure: {0}")]
    InvalidFigure(String),

    /// Output file could not be created or written.
    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),

    /// PNG encoding failed.
    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
