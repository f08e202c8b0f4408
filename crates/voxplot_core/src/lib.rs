//! # VOXPLOT Core
//!
//! Turns a 4D voxel intensity volume into a colored, sampled point cloud
//! ready for scatter rendering.
//!
//! ## Pipeline
//!
//! ```text
//! Volume ──► validate ──► non-zero voxels ──► normalize (÷ max)
//!                                                   │
//!   PointCloud ◄── alpha rule ◄── colormap ◄── skew ◄── sample (ratio)
//! ```
//!
//! ## Design Principles
//!
//! 1. **Validate first**: every parameter is checked before any work happens
//! 2. **Typed layout**: `VolumeLayout` instead of a boolean with a hidden reshape
//! 3. **Injected randomness**: callers own the RNG, tests seed it
//!
//! ## Example
//!
//! ```rust,ignore
//! use rand::SeedableRng;
//! use voxplot_core::{build_point_cloud, PipelineParams, Volume, VolumeLayout};
//!
//! let volume = Volume::new(vec![4, 4, 4, 4], vec![1.0; 256])?;
//! let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(7);
//! let cloud = build_point_cloud(&volume, VolumeLayout::ChannelFirst, &PipelineParams::default(), &mut rng)?;
//! assert_eq!(cloud.len(), 19);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod colormap;
pub mod error;
pub mod params;
pub mod pipeline;
pub mod sampling;
pub mod volume;

pub use colormap::{Colormap, Rgba, SUPPORTED_COLORMAPS};
pub use error::{VoxplotError, VoxplotResult};
pub use params::{validate_parameters, PipelineParams};
pub use pipeline::{apply_transparency, build_point_cloud, normalize, skew, ColoredPoint, PointCloud};
pub use sampling::{sample_count, sample_voxels};
pub use volume::{Voxel, Volume, VolumeLayout};
