//! Camera presets and output settings.
//!
//! The six standard views are data, not code: a config file can replace or
//! extend them.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A named camera orientation in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewPreset {
    /// Panel title.
    pub title: String,
    /// Elevation above the xy plane.
    pub elevation: f32,
    /// Azimuth around the z axis.
    pub azimuth: f32,
}

impl ViewPreset {
    /// Creates a preset.
    #[must_use]
    pub fn new(title: impl Into<String>, elevation: f32, azimuth: f32) -> Self {
        Self {
            title: title.into(),
            elevation,
            azimuth,
        }
    }
}

/// The multi-view layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Views in grid order (row-major).
    pub views: Vec<ViewPreset>,
    /// Grid columns.
    pub columns: usize,
    /// Figure size in inches `(width, height)`.
    pub figsize: (f32, f32),
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            views: vec![
                ViewPreset::new("Perspective View", 30.0, -45.0),
                ViewPreset::new("Top View", 90.0, -95.0),
                ViewPreset::new("Bottom View", -90.0, -95.0),
                ViewPreset::new("Front View", 5.0, -85.0),
                ViewPreset::new("Right View", 5.0, -20.0),
                ViewPreset::new("Left View", 5.0, -160.0),
            ],
            columns: 3,
            figsize: (12.0, 12.0),
        }
    }
}

impl ViewConfig {
    /// Number of grid rows needed for all views.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.views.len().div_ceil(self.columns.max(1))
    }
}

/// Where and how large the saved raster is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output file, relative paths resolve against the working directory.
    pub path: PathBuf,
    /// Dots per inch used to size the raster.
    pub dpi: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("Voxel.png"),
            dpi: 75,
        }
    }
}

/// Visual style shared by every panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    /// Marker area in points squared.
    pub marker_size: f32,
    /// Fade far points to 30% alpha.
    pub depth_shade: bool,
    /// Axis box edge width in pixels.
    pub edge_width: u32,
    /// Relative box extents `(x, y, z)`.
    pub box_aspect: [f32; 3],
    /// Main figure width in inches.
    pub main_width: f32,
    /// Main figure height per z slice in inches.
    pub main_height_per_slice: f32,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            marker_size: 20.0,
            depth_shade: true,
            edge_width: 2,
            box_aspect: [1.0, 1.0, 0.75],
            main_width: 10.0,
            main_height_per_slice: 2.0,
        }
    }
}
