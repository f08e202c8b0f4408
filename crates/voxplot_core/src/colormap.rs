//! Perceptual colormap registry.
//!
//! Each map is a 256-entry LUT filled from the `colorous` gradients, which
//! carry the published 8-bit tables for magma, inferno, plasma and viridis.
//! Cividis comes from its polynomial fit. Lookup follows the usual
//! listed-colormap rule: index `floor(x * 256)` clamped to the table, NaN
//! maps to transparent black.
//!
//! Reversed variants are addressed with an `_r` suffix.

use std::fmt;

use crate::error::{VoxplotError, VoxplotResult};

/// Entries in every lookup table.
pub const LUT_SIZE: usize = 256;

/// Built-in colormap names (case-sensitive). Append `_r` for the reversed map.
pub static SUPPORTED_COLORMAPS: [&str; 5] = ["magma", "inferno", "plasma", "viridis", "cividis"];

/// Straight-alpha RGBA color with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rgba {
    /// Red.
    pub r: f32,
    /// Green.
    pub g: f32,
    /// Blue.
    pub b: f32,
    /// Alpha (opacity).
    pub a: f32,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a color.
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color.
    #[must_use]
    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Returns this color with a different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Converts to 8-bit channels.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0 + 0.5) as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }
}

fn gradient(base: &str) -> Option<colorous::Gradient> {
    match base {
        "magma" => Some(colorous::MAGMA),
        "inferno" => Some(colorous::INFERNO),
        "plasma" => Some(colorous::PLASMA),
        "viridis" => Some(colorous::VIRIDIS),
        "cividis" => Some(colorous::CIVIDIS),
        _ => None,
    }
}

/// A resolved colormap with its lookup table.
#[derive(Clone)]
pub struct Colormap {
    name: String,
    lut: Box<[[f32; 3]; LUT_SIZE]>,
}

impl fmt::Debug for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Colormap").field("name", &self.name).finish_non_exhaustive()
    }
}

impl Colormap {
    /// Resolves a registered colormap by name.
    ///
    /// # Errors
    ///
    /// Returns [`VoxplotError::UnknownColormap`] for unregistered names.
    pub fn by_name(name: &str) -> VoxplotResult<Self> {
        let (base, reversed) = match name.strip_suffix("_r") {
            Some(base) => (base, true),
            None => (name, false),
        };

        let gradient = gradient(base).ok_or_else(|| VoxplotError::UnknownColormap {
            name: name.to_string(),
            supported: SUPPORTED_COLORMAPS.join(", "),
        })?;

        let mut lut = Box::new(build_lut(gradient));
        if reversed {
            lut.reverse();
        }

        Ok(Self {
            name: name.to_string(),
            lut,
        })
    }

    /// Registered name (including any `_r` suffix).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Maps a scalar to an opaque color.
    ///
    /// Values below 0 clamp to the first entry, values at or above 1 to the
    /// last entry; NaN yields [`Rgba::TRANSPARENT`].
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    pub fn lookup(&self, x: f32) -> Rgba {
        if x.is_nan() {
            return Rgba::TRANSPARENT;
        }
        let scaled = (x * LUT_SIZE as f32).floor();
        let idx = scaled.clamp(0.0, (LUT_SIZE - 1) as f32) as usize;
        let [r, g, b] = self.lut[idx];
        Rgba::opaque(r, g, b)
    }
}

/// Reads the gradient's 256 table entries, one per LUT slot.
fn build_lut(gradient: colorous::Gradient) -> [[f32; 3]; LUT_SIZE] {
    let mut lut = [[0.0; 3]; LUT_SIZE];
    for (i, entry) in lut.iter_mut().enumerate() {
        let c = gradient.eval_rational(i, LUT_SIZE);
        *entry = [c.r, c.g, c.b].map(|v| f32::from(v) / 255.0);
    }
    lut
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_supported_resolve() {
        for name in SUPPORTED_COLORMAPS {
            assert!(Colormap::by_name(name).is_ok(), "{name}");
            assert!(Colormap::by_name(&format!("{name}_r")).is_ok(), "{name}_r");
        }
    }

    #[test]
    fn test_unknown_name() {
        let err = Colormap::by_name("jet").unwrap_err();
        assert!(matches!(err, VoxplotError::UnknownColormap { .. }));
        assert!(err.to_string().contains("magma"));
    }

    #[test]
    fn test_table_entries_match_published_values() {
        let rgb = |name: &str, x: f32| {
            let [r, g, b, _] = Colormap::by_name(name).unwrap().lookup(x).to_rgba8();
            [r, g, b]
        };
        assert_eq!(rgb("viridis", 0.0), [68, 1, 84]);
        assert_eq!(rgb("viridis", 0.25), [59, 82, 139]);
        assert_eq!(rgb("viridis", 0.5), [33, 145, 140]);
        assert_eq!(rgb("viridis", 0.75), [94, 201, 98]);
        assert_eq!(rgb("viridis", 1.0), [253, 231, 37]);
        assert_eq!(rgb("magma", 0.0), [0, 0, 4]);
        assert_eq!(rgb("magma", 0.25), [81, 18, 124]);
        assert_eq!(rgb("magma", 0.5), [183, 55, 121]);
        assert_eq!(rgb("magma", 1.0), [252, 253, 191]);
        assert_eq!(rgb("inferno", 0.0), [0, 0, 4]);
        assert_eq!(rgb("inferno", 0.5), [188, 55, 84]);
        assert_eq!(rgb("inferno", 1.0), [252, 255, 164]);
        assert_eq!(rgb("plasma", 0.0), [13, 8, 135]);
        assert_eq!(rgb("plasma", 0.5), [204, 71, 120]);
        assert_eq!(rgb("plasma", 1.0), [240, 249, 33]);
    }

    #[test]
    fn test_neighbouring_indices_are_distinct_entries() {
        // 127/256 and 128/256 land on adjacent table rows
        let cmap = Colormap::by_name("viridis").unwrap();
        assert_eq!(cmap.lookup(128.0 / 256.0).to_rgba8()[..3], [33, 145, 140]);
        assert_ne!(cmap.lookup(127.0 / 256.0), cmap.lookup(128.0 / 256.0));
        assert_eq!(cmap.lookup(128.0 / 256.0), cmap.lookup(128.9 / 256.0));
    }

    #[test]
    fn test_cividis_runs_blue_to_yellow() {
        let cmap = Colormap::by_name("cividis").unwrap();
        let lo = cmap.lookup(0.0);
        let hi = cmap.lookup(1.0);
        assert!(lo.b > lo.r && lo.r < 0.05);
        assert!(hi.r > 0.95 && hi.b < 0.3);
        assert_eq!(hi.a, 1.0);
    }

    #[test]
    fn test_out_of_range_clamps() {
        let cmap = Colormap::by_name("viridis").unwrap();
        assert_eq!(cmap.lookup(-3.0), cmap.lookup(0.0));
        assert_eq!(cmap.lookup(42.0), cmap.lookup(1.0));
        assert_eq!(cmap.lookup(f32::INFINITY), cmap.lookup(1.0));
        assert_eq!(cmap.lookup(f32::NAN), Rgba::TRANSPARENT);
    }

    #[test]
    fn test_reversed_map() {
        let fwd = Colormap::by_name("plasma").unwrap();
        let rev = Colormap::by_name("plasma_r").unwrap();
        assert_eq!(fwd.lookup(0.0), rev.lookup(1.0));
        assert_eq!(fwd.lookup(1.0), rev.lookup(0.0));
    }

    #[test]
    fn test_magma_brightens_monotonically() {
        let cmap = Colormap::by_name("magma").unwrap();
        let luma = |c: Rgba| 0.2126 * c.r + 0.7152 * c.g + 0.0722 * c.b;
        let mut prev = -1.0;
        for i in 0..=16 {
            let l = luma(cmap.lookup(i as f32 / 16.0));
            assert!(l > prev, "step {i}");
            prev = l;
        }
    }

    #[test]
    fn test_to_rgba8() {
        assert_eq!(Rgba::new(1.0, 0.0, 0.5, 1.0).to_rgba8(), [255, 0, 128, 255]);
        assert_eq!(Rgba::new(2.0, -1.0, 0.0, 0.0).to_rgba8(), [255, 0, 0, 0]);
    }
}
