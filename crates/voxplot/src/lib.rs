//! # VOXPLOT
//!
//! 3D scatter plots of 4D voxel intensity volumes.
//!
//! ## Flow
//!
//! ```text
//! ┌──────────┐   ┌──────────────────┐   ┌──────────────┐   ┌───────────┐
//! │  Volume  │──>│ voxplot_core     │──>│ voxplot_     │──>│ Presenter │
//! │ (4D f32) │   │ validate, sample │   │ render       │   │           │
//! └──────────┘   │ skew, colormap   │   │ main + 6-view│   └───────────┘
//!                └──────────────────┘   └──────┬───────┘
//!                                              │ save_img
//!                                              ▼
//!                                          Voxel.png
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use rand::SeedableRng;
//! use voxplot::{plot_3d_voxels, CollectingPresenter, PlotConfig, Volume};
//!
//! let volume = Volume::filled([32, 32, 16, 1], 1.0)?;
//! let config = PlotConfig::from_toml_str("[options]\nsave_img = true")?;
//! let mut rng = rand::rngs::StdRng::seed_from_u64(0);
//! let out = plot_3d_voxels(&volume, &config, &mut rng, &mut CollectingPresenter::default())?;
//! assert_eq!(out.saved_path.as_deref(), Some(std::path::Path::new("Voxel.png")));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod plot;
pub mod presenter;

// Re-export the stages
pub use voxplot_core as pipeline;
pub use voxplot_render as render;

pub use config::{PlotConfig, PlotOptions};
pub use error::{PlotError, PlotResult};
pub use plot::{plot_3d_voxels, plot_3d_voxels_default, PlotOutput};
pub use presenter::{CollectingPresenter, HeadlessPresenter, Presenter};
pub use voxplot_core::{PipelineParams, Volume, VolumeLayout, VoxplotError};
pub use voxplot_render::{Figure, FigureKind, OutputConfig, RenderStyle, ViewConfig, ViewPreset};
