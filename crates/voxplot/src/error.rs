//! # Plot Error Types

use thiserror::Error;
use voxplot_core::VoxplotError;
use voxplot_render::RenderError;

/// Errors from a plot call.
#[derive(Error, Debug)]
pub enum PlotError {
    /// Bad input, unknown colormap or bad configuration.
    #[error(transparent)]
    Pipeline(#[from] VoxplotError),

    /// Rasterizing or saving failed.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// The presenter could not show the figures.
    ///
    /// Raised by [`crate::Presenter`] implementations such as windowing
    /// backends. The built-in presenters never fail.
    #[error("presenter failed: {0}")]
    Present(String),
}

impl PlotError {
    /// True for validation failures of the volume or numeric parameters.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::Pipeline(VoxplotError::InvalidInput(_)))
    }
}

/// Result type for plot operations.
pub type PlotResult<T> = Result<T, PlotError>;
