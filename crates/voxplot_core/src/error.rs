//! # Pipeline Error Types
//!
//! All errors that can occur before a single pixel is drawn.

use thiserror::Error;

/// Errors that can occur while validating input or building a point cloud.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VoxplotError {
    /// A precondition on the volume or a parameter failed.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Colormap name is not in the registry.
    #[error("unknown colormap '{name}', supported: {supported}")]
    UnknownColormap {
        /// The requested name.
        name: String,
        /// Comma separated list of registered names.
        supported: String,
    },

    /// Invalid configuration file.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl VoxplotError {
    /// Shorthand for [`VoxplotError::InvalidInput`].
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

/// Result type for pipeline operations.
pub type VoxplotResult<T> = Result<T, VoxplotError>;
