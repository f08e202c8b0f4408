//! The plot call: validate, build the point cloud, render, save, present.

use rand::Rng;
use std::path::PathBuf;
use tracing::{debug, warn};
use voxplot_core::{build_point_cloud, PointCloud, Volume};
use voxplot_render::{render_main_figure, render_multi_view, write_png, Figure, FigureKind};

use crate::config::PlotConfig;
use crate::error::PlotResult;
use crate::presenter::{HeadlessPresenter, Presenter};

/// What a plot call produced.
#[derive(Debug, Clone)]
pub struct PlotOutput {
    /// Figures in creation order: main, then multi-view if enabled.
    pub figures: Vec<Figure>,
    /// The sampled, colored points shared by every figure.
    pub cloud: PointCloud,
    /// Where the last figure was written, if saving was requested.
    pub saved_path: Option<PathBuf>,
}

impl PlotOutput {
    /// First figure of the given kind.
    #[must_use]
    pub fn figure(&self, kind: FigureKind) -> Option<&Figure> {
        self.figures.iter().find(|f| f.kind == kind)
    }
}

/// Plots a voxel volume as 3D scatter figures.
///
/// Parameters are validated before any work. The main figure is always
/// rendered, the six-view figure when `multi_view` is set. With `save_img`
/// the last figure is written to the configured output path, replacing any
/// existing file. Figures are then handed to `presenter`.
///
/// # Errors
///
/// - [`voxplot_core::VoxplotError::InvalidInput`] for a non-finite parameter,
///   a sampling ratio outside `[0, 1]` or a volume that does not fit the layout
/// - [`voxplot_core::VoxplotError::UnknownColormap`] for an unregistered name
/// - [`voxplot_render::RenderError`] if a figure cannot be sized or saved
/// - whatever the presenter returns
pub fn plot_3d_voxels<R, P>(
    volume: &Volume,
    config: &PlotConfig,
    rng: &mut R,
    presenter: &mut P,
) -> PlotResult<PlotOutput>
where
    R: Rng + ?Sized,
    P: Presenter + ?Sized,
{
    let options = &config.options;
    let cloud = build_point_cloud(volume, options.layout, &options.params, rng)?;
    if cloud.non_zero_count == 0 {
        warn!(shape = ?volume.shape(), "volume has no positive voxels, plotting empty axes");
    }

    let dpi = config.output.dpi;
    let mut figures = vec![render_main_figure(&cloud, &config.style, dpi)?];
    if options.multi_view {
        figures.push(render_multi_view(&cloud, &config.views, &config.style, dpi)?);
    }

    let mut saved_path = None;
    if options.save_img {
        if let Some(last) = figures.last() {
            write_png(&config.output.path, last)?;
            saved_path = Some(config.output.path.clone());
        }
    }

    debug!(
        figures = figures.len(),
        points = cloud.len(),
        saved = saved_path.is_some(),
        "plot complete"
    );
    presenter.present(&figures)?;

    Ok(PlotOutput {
        figures,
        cloud,
        saved_path,
    })
}

/// [`plot_3d_voxels`] with default options, a thread-local entropy-seeded
/// RNG and the [`HeadlessPresenter`].
///
/// # Errors
///
/// See [`plot_3d_voxels`].
pub fn plot_3d_voxels_default(volume: &Volume) -> PlotResult<PlotOutput> {
    plot_3d_voxels(
        volume,
        &PlotConfig::default(),
        &mut rand::thread_rng(),
        &mut HeadlessPresenter,
    )
}
