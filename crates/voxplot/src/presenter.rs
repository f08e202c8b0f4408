//! Figure sinks.
//!
//! A plot call hands its finished figures to a [`Presenter`]. The headless
//! one only logs; a windowing backend implements the same trait.

use tracing::info;
use voxplot_render::Figure;

use crate::error::PlotResult;

/// Displays finished figures.
pub trait Presenter {
    /// Shows `figures` in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PlotError::Present`] if the backend fails.
    fn present(&mut self, figures: &[Figure]) -> PlotResult<()>;
}

/// Logs a one-line summary per figure.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessPresenter;

impl Presenter for HeadlessPresenter {
    fn present(&mut self, figures: &[Figure]) -> PlotResult<()> {
        for figure in figures {
            let (width, height) = figure.pixel_size();
            info!(
                figure = %figure.kind,
                width,
                height,
                panels = figure.panels.len(),
                points = figure.points_drawn(),
                "figure ready"
            );
        }
        Ok(())
    }
}

/// Keeps every presented figure.
#[derive(Debug, Clone, Default)]
pub struct CollectingPresenter {
    /// Figures received so far, in order.
    pub figures: Vec<Figure>,
    /// Number of `present` calls.
    pub calls: usize,
}

impl Presenter for CollectingPresenter {
    fn present(&mut self, figures: &[Figure]) -> PlotResult<()> {
        self.calls += 1;
        self.figures.extend_from_slice(figures);
        Ok(())
    }
}
