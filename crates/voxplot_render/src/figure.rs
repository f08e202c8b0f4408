//! Figures: sized canvases holding one or more panels.
//!
//! - Main figure: `main_width × (num_slices · main_height_per_slice)` inches,
//!   one panel in the centre column of a 1:3:1 grid, axes fitted to the data.
//! - Multi-view figure: `ViewConfig::figsize` inches, one panel per preset in
//!   a row-major grid, axes fixed to the volume extent.

use std::fmt;

use tracing::debug;
use voxplot_core::PointCloud;

use crate::camera::{AxisLimits, Camera};
use crate::canvas::{Canvas, Pixel, Rect};
use crate::error::{RenderError, RenderResult};
use crate::panel::{draw_panel, PanelSpec, PanelSummary};
use crate::view::{RenderStyle, ViewConfig};

/// Fraction of the shorter figure side left as outer margin.
const TIGHT_MARGIN: f32 = 0.02;
/// Main panel column as a fraction of the figure width (1:3:1).
const MAIN_COLUMN: (f32, f32) = (0.2, 0.6);

/// Which figure this is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FigureKind {
    /// The single large scatter.
    Main,
    /// The fixed-camera grid.
    MultiView,
}

impl fmt::Display for FigureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Main => f.write_str("main"),
            Self::MultiView => f.write_str("multi-view"),
        }
    }
}

/// A rendered figure.
#[derive(Debug, Clone)]
pub struct Figure {
    /// Role of the figure.
    pub kind: FigureKind,
    /// Size in inches `(width, height)`.
    pub size_inches: (f32, f32),
    /// Dots per inch the canvas was rasterized at.
    pub dpi: u32,
    /// Pixels.
    pub canvas: Canvas,
    /// Panels in drawing order.
    pub panels: Vec<PanelSummary>,
}

impl Figure {
    /// Creates a white figure of `size_inches × dpi` pixels.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidFigure`] for non-positive sizes or DPI.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    pub fn blank(kind: FigureKind, size_inches: (f32, f32), dpi: u32) -> RenderResult<Self> {
        let (w_in, h_in) = size_inches;
        if !(w_in.is_finite() && h_in.is_finite() && w_in > 0.0 && h_in > 0.0 && dpi > 0) {
            return Err(RenderError::InvalidFigure(format!(
                "figure size {w_in}x{h_in} in at {dpi} dpi"
            )));
        }
        let width = (w_in * dpi as f32).round().max(1.0) as u32;
        let height = (h_in * dpi as f32).round().max(1.0) as u32;

        Ok(Self {
            kind,
            size_inches,
            dpi,
            canvas: Canvas::new(width, height, Pixel::WHITE)?,
            panels: Vec::new(),
        })
    }

    /// Pixel dimensions `(width, height)`.
    #[must_use]
    pub const fn pixel_size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    /// Total markers drawn across panels.
    #[must_use]
    pub fn points_drawn(&self) -> usize {
        self.panels.iter().map(|p| p.points_drawn).sum()
    }

    #[allow(clippy::cast_precision_loss)]
    fn margin(&self) -> f32 {
        let (w, h) = self.pixel_size();
        (w.min(h) as f32 * TIGHT_MARGIN).round()
    }
}

/// Renders the main scatter figure.
///
/// # Errors
///
/// Returns [`RenderError::InvalidFigure`] if the style yields an unusable
/// figure size.
#[allow(clippy::cast_precision_loss)]
pub fn render_main_figure(cloud: &PointCloud, style: &RenderStyle, dpi: u32) -> RenderResult<Figure> {
    // A volume with no z extent still gets a one inch tall figure
    let height = (cloud.num_slices() as f32 * style.main_height_per_slice).max(1.0);
    let mut figure = Figure::blank(FigureKind::Main, (style.main_width, height), dpi)?;

    let (w, h) = figure.pixel_size();
    let column = Rect::new(
        w as f32 * MAIN_COLUMN.0,
        0.0,
        w as f32 * MAIN_COLUMN.1,
        h as f32,
    )
    .inset(figure.margin());

    let spec = PanelSpec {
        title: None,
        camera: Camera::default(),
        limits: AxisLimits::fit(cloud.points.iter().map(|p| &p.coord)),
        axis_labels: false,
    };
    let summary = draw_panel(&mut figure.canvas, column, &spec, &cloud.points, style, dpi);
    figure.panels.push(summary);

    debug!(
        width = w,
        height = h,
        points = figure.points_drawn(),
        "rendered main figure"
    );
    Ok(figure)
}

/// Renders one panel per view preset in a grid.
///
/// # Errors
///
/// Returns [`RenderError::InvalidFigure`] if the configured figure size is
/// unusable.
#[allow(clippy::cast_precision_loss)]
pub fn render_multi_view(
    cloud: &PointCloud,
    views: &ViewConfig,
    style: &RenderStyle,
    dpi: u32,
) -> RenderResult<Figure> {
    let mut figure = Figure::blank(FigureKind::MultiView, views.figsize, dpi)?;
    let rows = views.rows();
    if rows == 0 {
        return Ok(figure);
    }

    let columns = views.columns.max(1);
    let (w, h) = figure.pixel_size();
    let outer = Rect::new(0.0, 0.0, w as f32, h as f32).inset(figure.margin());
    let cell_w = outer.w / columns as f32;
    let cell_h = outer.h / rows as f32;
    let limits = AxisLimits::from_dims(cloud.spatial_dims);

    for (i, preset) in views.views.iter().enumerate() {
        let (row, col) = (i / columns, i % columns);
        let cell = Rect::new(
            outer.x + col as f32 * cell_w,
            outer.y + row as f32 * cell_h,
            cell_w,
            cell_h,
        );
        let spec = PanelSpec {
            title: Some(preset.title.clone()),
            camera: Camera::from_preset(preset),
            limits,
            axis_labels: true,
        };
        let summary = draw_panel(&mut figure.canvas, cell, &spec, &cloud.points, style, dpi);
        figure.panels.push(summary);
    }

    debug!(
        panels = figure.panels.len(),
        width = w,
        height = h,
        "rendered multi-view figure"
    );
    Ok(figure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxplot_core::{ColoredPoint, Rgba};

    fn cloud(dims: [usize; 3], n: usize) -> PointCloud {
        let points = (0..n)
            .map(|i| ColoredPoint {
                coord: [i % dims[0], (i / dims[0]) % dims[1], i % dims[2]],
                value: 1.0,
                skewed: 1.0,
                color: Rgba::opaque(0.9, 0.3, 0.1),
            })
            .collect();
        PointCloud {
            points,
            spatial_dims: dims,
            non_zero_count: n,
        }
    }

    #[test]
    fn test_main_figure_size_follows_slices() {
        let fig = render_main_figure(&cloud([8, 8, 6], 20), &RenderStyle::default(), 75).unwrap();
        // 10 in x (6 slices * 2 in) at 75 dpi
        assert_eq!(fig.pixel_size(), (750, 900));
        assert_eq!(fig.kind, FigureKind::Main);
        assert_eq!(fig.panels.len(), 1);
        assert!(fig.panels[0].title.is_none());
    }

    #[test]
    fn test_multi_view_grid() {
        let fig = render_multi_view(&cloud([4, 4, 4], 10), &ViewConfig::default(), &RenderStyle::default(), 75)
            .unwrap();
        assert_eq!(fig.pixel_size(), (900, 900));
        assert_eq!(fig.panels.len(), 6);
        let titles: Vec<&str> = fig.panels.iter().filter_map(|p| p.title.as_deref()).collect();
        assert_eq!(titles[0], "Perspective View");
        assert_eq!(titles[5], "Left View");
        // Second row starts below the first
        assert!(fig.panels[3].rect.y > fig.panels[0].rect.y);
        assert_eq!(fig.panels[3].rect.x, fig.panels[0].rect.x);
        for p in &fig.panels {
            assert_eq!(p.points_drawn, 10);
        }
    }

    #[test]
    fn test_empty_cloud_renders() {
        let empty = cloud([4, 4, 4], 0);
        let main = render_main_figure(&empty, &RenderStyle::default(), 75).unwrap();
        assert_eq!(main.points_drawn(), 0);
        let multi = render_multi_view(&empty, &ViewConfig::default(), &RenderStyle::default(), 75).unwrap();
        assert_eq!(multi.points_drawn(), 0);
    }

    #[test]
    fn test_flat_volume_gets_minimum_height() {
        let fig = render_main_figure(&cloud([4, 4, 1], 0), &RenderStyle::default(), 10).unwrap();
        assert_eq!(fig.pixel_size(), (100, 20));
        let flat = PointCloud { points: vec![], spatial_dims: [4, 4, 0], non_zero_count: 0 };
        let fig = render_main_figure(&flat, &RenderStyle::default(), 10).unwrap();
        assert_eq!(fig.pixel_size(), (100, 10));
    }

    #[test]
    fn test_invalid_sizes() {
        assert!(Figure::blank(FigureKind::Main, (0.0, 1.0), 75).is_err());
        assert!(Figure::blank(FigureKind::Main, (1.0, 1.0), 0).is_err());
        assert!(Figure::blank(FigureKind::Main, (f32::NAN, 1.0), 75).is_err());
    }

    #[test]
    fn test_empty_view_list() {
        let views = ViewConfig { views: vec![], ..ViewConfig::default() };
        let fig = render_multi_view(&cloud([2, 2, 2], 3), &views, &RenderStyle::default(), 20).unwrap();
        assert!(fig.panels.is_empty());
    }
}
