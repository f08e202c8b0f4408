//! Elevation/azimuth camera and axis limits.
//!
//! Data coordinates are first mapped into a box centred on the origin whose
//! extents follow the box aspect, then projected orthographically:
//!
//! ```text
//! eye   = (cos e·cos a, cos e·sin a, sin e)
//! right = (-sin a, cos a, 0)
//! up    = (-sin e·cos a, -sin e·sin a, cos e)
//! ```
//!
//! Larger depth means closer to the viewer.

use crate::view::ViewPreset;

/// Inclusive data range for each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisLimits {
    /// `(min, max)` per axis.
    pub ranges: [(f32, f32); 3],
}

impl AxisLimits {
    /// Limits `[0, dim]` on every axis.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_dims(dims: [usize; 3]) -> Self {
        Self {
            ranges: dims.map(|d| (0.0, d as f32)),
        }
    }

    /// Tight bounds around `coords`, unit range around any flat axis.
    ///
    /// Empty input falls back to `[0, 1]` on every axis.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn fit<'a>(coords: impl IntoIterator<Item = &'a [usize; 3]>) -> Self {
        let mut ranges = [(f32::INFINITY, f32::NEG_INFINITY); 3];
        for c in coords {
            for (axis, range) in ranges.iter_mut().enumerate() {
                let v = c[axis] as f32;
                range.0 = range.0.min(v);
                range.1 = range.1.max(v);
            }
        }

        for range in &mut ranges {
            if range.0 > range.1 {
                *range = (0.0, 1.0);
            } else if range.0 == range.1 {
                *range = (range.0 - 0.5, range.1 + 0.5);
            }
        }

        Self { ranges }
    }

    /// Maps a data point to `[-0.5, 0.5] * aspect` box coordinates.
    #[must_use]
    pub fn to_box(&self, p: [f32; 3], aspect: [f32; 3]) -> [f32; 3] {
        let mut out = [0.0; 3];
        for axis in 0..3 {
            let (lo, hi) = self.ranges[axis];
            let span = (hi - lo).max(f32::EPSILON);
            out[axis] = ((p[axis] - lo) / span - 0.5) * aspect[axis];
        }
        out
    }
}

/// A point after projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    /// Horizontal screen offset (right positive).
    pub x: f32,
    /// Vertical screen offset (up positive).
    pub y: f32,
    /// Distance toward the viewer.
    pub depth: f32,
}

/// Orthographic camera looking at the box centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Elevation in degrees.
    pub elevation: f32,
    /// Azimuth in degrees.
    pub azimuth: f32,
    eye: [f32; 3],
    right: [f32; 3],
    up: [f32; 3],
}

impl Camera {
    /// Default interactive orientation (30° up, −60° around).
    pub const DEFAULT_ELEVATION: f32 = 30.0;
    /// See [`Camera::DEFAULT_ELEVATION`].
    pub const DEFAULT_AZIMUTH: f32 = -60.0;

    /// Creates a camera from angles in degrees.
    #[must_use]
    pub fn new(elevation: f32, azimuth: f32) -> Self {
        let (se, ce) = elevation.to_radians().sin_cos();
        let (sa, ca) = azimuth.to_radians().sin_cos();
        Self {
            elevation,
            azimuth,
            eye: [ce * ca, ce * sa, se],
            right: [-sa, ca, 0.0],
            up: [-se * ca, -se * sa, ce],
        }
    }

    /// Camera for a preset.
    #[must_use]
    pub fn from_preset(preset: &ViewPreset) -> Self {
        Self::new(preset.elevation, preset.azimuth)
    }

    /// Unit vector from the box centre toward the viewer.
    #[must_use]
    pub const fn eye(&self) -> [f32; 3] {
        self.eye
    }

    /// Projects a box-space point.
    #[inline]
    #[must_use]
    pub fn project(&self, p: [f32; 3]) -> Projected {
        Projected {
            x: dot(p, self.right),
            y: dot(p, self.up),
            depth: dot(p, self.eye),
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ELEVATION, Self::DEFAULT_AZIMUTH)
    }
}

#[inline]
fn dot(a: [f32; 3], b: [f32; 3]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}
