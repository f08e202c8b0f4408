//! One 3D scatter panel: back panes, depth-sorted square markers, labels.

use voxplot_core::{ColoredPoint, Rgba};

use crate::camera::{AxisLimits, Camera};
use crate::canvas::{Canvas, Rect};
use crate::font::{self, GLYPH_HEIGHT};
use crate::view::RenderStyle;

/// Projected box half-diagonal is below 0.85 for the default aspect.
const FIT_DIVISOR: f32 = 1.75;
/// Alpha multiplier of the farthest point when depth shading.
const DEPTH_SHADE_FLOOR: f32 = 0.3;
const EDGE_COLOR: Rgba = Rgba::opaque(0.0, 0.0, 0.0);
const TEXT_COLOR: Rgba = Rgba::opaque(0.0, 0.0, 0.0);

/// What to draw in a panel.
#[derive(Debug, Clone)]
pub struct PanelSpec {
    /// Title above the panel.
    pub title: Option<String>,
    /// View orientation.
    pub camera: Camera,
    /// Axis ranges framing the data.
    pub limits: AxisLimits,
    /// Draw "X", "Y", "Z" axis labels.
    pub axis_labels: bool,
}

/// Summary of a drawn panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelSummary {
    /// Title, if any.
    pub title: Option<String>,
    /// Pixel rectangle the panel occupies.
    pub rect: Rect,
    /// Orientation used.
    pub camera: Camera,
    /// Markers actually blended (alpha above zero).
    pub points_drawn: usize,
}

/// Text scale for a DPI (font pixels → canvas pixels).
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn label_scale(dpi: u32) -> u32 {
    ((dpi as f32 / 40.0).round() as u32).max(1)
}

/// Draws one panel into `rect`.
#[allow(clippy::cast_precision_loss)]
pub fn draw_panel(
    canvas: &mut Canvas,
    rect: Rect,
    spec: &PanelSpec,
    points: &[ColoredPoint],
    style: &RenderStyle,
    dpi: u32,
) -> PanelSummary {
    let text_scale = label_scale(dpi);

    let mut plot = rect;
    if let Some(title) = &spec.title {
        let title_h = (GLYPH_HEIGHT * (text_scale + 1)) as f32 * 2.0;
        font::draw_text_centered(
            canvas,
            title,
            rect.center().0,
            rect.y + title_h * 0.5,
            text_scale + 1,
            TEXT_COLOR,
        );
        plot = Rect::new(rect.x, rect.y + title_h, rect.w, (rect.h - title_h).max(0.0));
    }

    let (cx, cy) = plot.center();
    let scale = plot.w.min(plot.h) / FIT_DIVISOR;
    let to_screen = |p: [f32; 3]| {
        let q = spec.camera.project(p);
        (cx + q.x * scale, cy - q.y * scale)
    };

    let half = style.box_aspect.map(|a| a * 0.5);
    let eye = spec.camera.eye();

    // Panes on the far side of each axis, edges only
    for axis in 0..3 {
        let far = if eye[axis] > 0.0 { -half[axis] } else { half[axis] };
        let (u, v) = ((axis + 1) % 3, (axis + 2) % 3);
        let corner = |su: f32, sv: f32| {
            let mut p = [0.0; 3];
            p[axis] = far;
            p[u] = su * half[u];
            p[v] = sv * half[v];
            to_screen(p)
        };
        let quad = [corner(-1.0, -1.0), corner(1.0, -1.0), corner(1.0, 1.0), corner(-1.0, 1.0)];
        for i in 0..4 {
            canvas.draw_line(quad[i], quad[(i + 1) % 4], style.edge_width as f32, EDGE_COLOR);
        }
    }

    let points_drawn = scatter(canvas, spec, points, style, dpi, &to_screen);

    if spec.axis_labels {
        let sx = eye[0].signum();
        let sy = eye[1].signum();
        let zb = if eye[2] >= 0.0 { -half[2] } else { half[2] };
        let labels = [
            ("X", [0.0, sy * half[1] * 1.35, zb]),
            ("Y", [sx * half[0] * 1.35, 0.0, zb]),
            ("Z", [sx * half[0] * 1.25, -sy * half[1] * 1.25, 0.0]),
        ];
        for (text, pos) in labels {
            let (x, y) = to_screen(pos);
            font::draw_text_centered(canvas, text, x, y, text_scale, TEXT_COLOR);
        }
    }

    PanelSummary {
        title: spec.title.clone(),
        rect,
        camera: spec.camera,
        points_drawn,
    }
}

/// Painter's-order square markers. Returns how many were visible.
#[allow(clippy::cast_precision_loss)]
fn scatter(
    canvas: &mut Canvas,
    spec: &PanelSpec,
    points: &[ColoredPoint],
    style: &RenderStyle,
    dpi: u32,
    to_screen: &dyn Fn([f32; 3]) -> (f32, f32),
) -> usize {
    let marker_px = style.marker_size.max(0.0).sqrt() * dpi as f32 / 72.0;

    let mut projected: Vec<(f32, [f32; 3], Rgba)> = points
        .iter()
        .filter(|p| p.color.a > 0.0)
        .map(|p| {
            let data = p.coord.map(|c| c as f32);
            let boxed = spec.limits.to_box(data, style.box_aspect);
            (spec.camera.project(boxed).depth, boxed, p.color)
        })
        .collect();

    // Farthest first
    projected.sort_by(|a, b| a.0.total_cmp(&b.0));

    let (dmin, dmax) = match (projected.first(), projected.last()) {
        (Some(near), Some(far)) => (near.0, far.0),
        _ => return 0,
    };
    let span = dmax - dmin;

    for (depth, boxed, color) in &projected {
        let shade = if style.depth_shade && span > f32::EPSILON {
            DEPTH_SHADE_FLOOR + (1.0 - DEPTH_SHADE_FLOOR) * (depth - dmin) / span
        } else {
            1.0
        };
        let (x, y) = to_screen(*boxed);
        canvas.fill_square(x, y, marker_px, color.with_alpha(color.a * shade));
    }

    projected.len()
}
