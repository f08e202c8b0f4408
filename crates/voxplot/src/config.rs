//! Plot options and the TOML configuration file.
//!
//! ```toml
//! [options]
//! sampling_ratio = 0.5
//! colormap = "viridis"
//! multi_view = true
//! save_img = true
//! layout = "channel_first"
//!
//! [output]
//! path = "shell.png"
//! dpi = 100
//!
//! [[views.views]]
//! title = "Oblique"
//! elevation = 20.0
//! azimuth = 30.0
//! ```
//!
//! Every table and field is optional.

use serde::{Deserialize, Serialize};
use std::path::Path;
use voxplot_core::{PipelineParams, VolumeLayout, VoxplotError};
use voxplot_render::{OutputConfig, RenderStyle, ViewConfig};

use crate::error::PlotResult;

/// The per-call options of a plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotOptions {
    /// Threshold, skew, sampling ratio and colormap.
    #[serde(flatten)]
    pub params: PipelineParams,
    /// Render the six-view figure as well.
    pub multi_view: bool,
    /// Save the last rendered figure to [`OutputConfig::path`].
    pub save_img: bool,
    /// Axis order of the input volume.
    pub layout: VolumeLayout,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            params: PipelineParams::default(),
            multi_view: true,
            save_img: false,
            layout: VolumeLayout::default(),
        }
    }
}

/// Everything a plot call needs besides the volume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Pipeline and figure selection.
    pub options: PlotOptions,
    /// Multi-view layout.
    pub views: ViewConfig,
    /// Where the saved figure goes.
    pub output: OutputConfig,
    /// Marker and axis style.
    pub style: RenderStyle,
}

impl PlotConfig {
    /// Wraps options with default views, output and style.
    #[must_use]
    pub fn with_options(options: PlotOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`VoxplotError::Config`] if the document is malformed.
    pub fn from_toml_str(text: &str) -> PlotResult<Self> {
        toml::from_str(text).map_err(|e| VoxplotError::Config(e.to_string()).into())
    }

    /// Reads and parses a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`VoxplotError::Config`] if the file is unreadable or malformed.
    pub fn from_toml_file(path: &Path) -> PlotResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| VoxplotError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }
}
