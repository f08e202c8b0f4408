//! # VOXPLOT Render
//!
//! CPU rasterizer for colored point clouds.
//!
//! ## Figures
//!
//! ```text
//! ┌──────────────── main ────────────────┐   ┌──────── multi-view ────────┐
//! │        │                   │         │   │ Perspective │ Top │ Bottom │
//! │  1/5   │   3D scatter 3/5  │   1/5   │   ├─────────────┼─────┼────────┤
//! │        │                   │         │   │ Front       │Right│ Left   │
//! └──────────────────────────────────────┘   └────────────────────────────┘
//! ```
//!
//! Figures are plain values. Showing them is the caller's business; saving
//! them goes through [`write_png`].

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod camera;
pub mod canvas;
pub mod error;
pub mod export;
pub mod figure;
pub mod font;
pub mod panel;
pub mod view;

pub use camera::{AxisLimits, Camera, Projected};
pub use canvas::{Canvas, Pixel, Rect};
pub use error::{RenderError, RenderResult};
pub use export::{encode_png, write_png};
pub use figure::{render_main_figure, render_multi_view, Figure, FigureKind};
pub use panel::{draw_panel, PanelSpec, PanelSummary};
pub use view::{OutputConfig, RenderStyle, ViewConfig, ViewPreset};
