//! Volume → colored point cloud.
//!
//! The steps run in a fixed order and every parameter is validated before
//! the first one starts:
//!
//! 1. Non-zero voxel extraction (layout aware)
//! 2. Normalization by the volume maximum
//! 3. Random sampling without replacement
//! 4. Skew (`value ^ skew_factor`) and colormap lookup
//! 5. Alpha rule: `alpha = value` above the threshold, else 0

use rand::Rng;
use tracing::debug;

use crate::colormap::{Colormap, Rgba};
use crate::error::VoxplotResult;
use crate::params::PipelineParams;
use crate::sampling::sample_voxels;
use crate::volume::{Voxel, Volume, VolumeLayout};

/// A sampled, colored voxel ready for scattering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColoredPoint {
    /// Spatial coordinate `(x, y, z)`.
    pub coord: [usize; 3],
    /// Normalized intensity in `(0, 1]`.
    pub value: f32,
    /// Intensity after the skew exponent.
    pub skewed: f32,
    /// Final color, alpha already resolved.
    pub color: Rgba,
}

/// The sampled point set plus the volume facts the renderer needs.
#[derive(Debug, Clone, PartialEq)]
pub struct PointCloud {
    /// Sampled points.
    pub points: Vec<ColoredPoint>,
    /// Spatial extent `(nx, ny, nz)`.
    pub spatial_dims: [usize; 3],
    /// Count of strictly positive voxels before sampling.
    pub non_zero_count: usize,
}

impl PointCloud {
    /// Number of sampled points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when nothing survived extraction or sampling.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of z slices.
    #[must_use]
    pub const fn num_slices(&self) -> usize {
        self.spatial_dims[2]
    }
}

/// Divides every voxel value by `max`.
#[must_use]
pub fn normalize(voxels: Vec<Voxel>, max: f32) -> Vec<Voxel> {
    voxels
        .into_iter()
        .map(|v| Voxel { value: v.value / max, ..v })
        .collect()
}

/// Power-law skew. Factors above 1 suppress low values, below 1 boost them.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn skew(value: f32, factor: f64) -> f32 {
    f64::from(value).powf(factor) as f32
}

/// Resolves the final alpha: the unskewed value above `threshold`, else 0.
///
/// The comparison runs in the value's own `f32` precision, so a value that
/// equals the threshold after rounding stays transparent.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn apply_transparency(color: Rgba, value: f32, threshold: f64) -> Rgba {
    if value > threshold as f32 {
        color.with_alpha(value)
    } else {
        color.with_alpha(0.0)
    }
}

/// Runs the full pipeline.
///
/// # Errors
///
/// Returns [`crate::VoxplotError::InvalidInput`] for bad parameters or a
/// volume that does not fit `layout`, and
/// [`crate::VoxplotError::UnknownColormap`] for an unregistered colormap.
pub fn build_point_cloud<R: Rng + ?Sized>(
    volume: &Volume,
    layout: VolumeLayout,
    params: &PipelineParams,
    rng: &mut R,
) -> VoxplotResult<PointCloud> {
    params.validate()?;
    let spatial_dims = volume.spatial_dims(layout)?;

    let voxels = volume.non_zero_voxels(layout)?;
    let non_zero_count = voxels.len();
    let voxels = match volume.max_value() {
        Some(max) if non_zero_count > 0 => normalize(voxels, max),
        _ => voxels,
    };

    let sampled = sample_voxels(&voxels, params.sampling_ratio, rng);
    let cmap = Colormap::by_name(&params.colormap)?;

    let points: Vec<ColoredPoint> = sampled
        .iter()
        .map(|v| {
            let skewed = skew(v.value, params.skew_factor);
            let color = apply_transparency(cmap.lookup(skewed), v.value, params.transparency_threshold);
            ColoredPoint {
                coord: v.coord,
                value: v.value,
                skewed,
                color,
            }
        })
        .collect();

    debug!(
        non_zero = non_zero_count,
        sampled = points.len(),
        colormap = cmap.name(),
        "built point cloud"
    );

    Ok(PointCloud {
        points,
        spatial_dims,
        non_zero_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VoxplotError;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(2024)
    }

    #[test]
    fn test_all_ones_channel_first() {
        let vol = Volume::filled([4, 4, 4, 4], 1.0).unwrap();
        let cloud =
            build_point_cloud(&vol, VolumeLayout::ChannelFirst, &PipelineParams::default(), &mut rng())
                .unwrap();

        assert_eq!(cloud.non_zero_count, 64);
        assert_eq!(cloud.len(), 19);
        assert_eq!(cloud.spatial_dims, [4, 4, 4]);
        for p in &cloud.points {
            assert_eq!(p.value, 1.0);
            assert_eq!(p.skewed, 1.0);
            assert_eq!(p.color.a, 1.0);
        }
    }

    #[test]
    fn test_all_zero_volume_yields_no_points() {
        let vol = Volume::from_spatial([5, 5, 5], vec![0.0; 125]).unwrap();
        let cloud =
            build_point_cloud(&vol, VolumeLayout::ChannelLast, &PipelineParams::default(), &mut rng())
                .unwrap();
        assert!(cloud.is_empty());
        assert_eq!(cloud.non_zero_count, 0);
        assert_eq!(cloud.num_slices(), 5);
    }

    #[test]
    fn test_normalizes_by_max() {
        let vol = Volume::from_spatial([1, 1, 4], vec![1.0, 2.0, 4.0, 0.0]).unwrap();
        let params = PipelineParams { sampling_ratio: 1.0, ..Default::default() };
        let cloud = build_point_cloud(&vol, VolumeLayout::ChannelLast, &params, &mut rng()).unwrap();

        let mut values: Vec<f32> = cloud.points.iter().map(|p| p.value).collect();
        values.sort_by(f32::total_cmp);
        assert_eq!(values, vec![0.25, 0.5, 1.0]);
    }

    #[test]
    fn test_skew_is_decreasing_in_factor() {
        for x in [0.1f32, 0.4, 0.9] {
            assert!(skew(x, 2.0) < skew(x, 1.0));
            assert!(skew(x, 1.0) < skew(x, 0.5));
            assert!(skew(x, 3.5) < skew(x, 3.0));
        }
        assert_eq!(skew(1.0, 7.0), 1.0);
    }

    #[test]
    fn test_threshold_rule() {
        let base = Rgba::opaque(0.2, 0.3, 0.4);
        assert_eq!(apply_transparency(base, 0.5, 0.5).a, 0.0);
        assert_eq!(apply_transparency(base, 0.4, 0.5).a, 0.0);
        assert_eq!(apply_transparency(base, 0.6, 0.5).a, 0.6);
        assert_eq!(apply_transparency(base, 0.6, 0.5).r, 0.2);
    }

    #[test]
    fn test_value_equal_to_decimal_threshold_is_transparent() {
        let base = Rgba::opaque(0.2, 0.3, 0.4);
        assert_eq!(apply_transparency(base, 3.0 / 5.0, 0.6).a, 0.0);
        assert_eq!(apply_transparency(base, 0.1 + 0.2, 0.3).a, 0.0);
        assert_eq!(apply_transparency(base, 0.7, 0.6).a, 0.7);

        // 3 / 5 normalizes to the f32 nearest 0.6
        let vol = Volume::from_spatial([1, 1, 2], vec![3.0, 5.0]).unwrap();
        let params = PipelineParams {
            sampling_ratio: 1.0,
            transparency_threshold: 0.6,
            ..Default::default()
        };
        let cloud = build_point_cloud(&vol, VolumeLayout::ChannelLast, &params, &mut rng()).unwrap();
        assert_eq!(cloud.len(), 2);
        for p in &cloud.points {
            if p.coord == [0, 0, 0] {
                assert_eq!(p.value, 0.6);
                assert_eq!(p.color.a, 0.0);
            } else {
                assert_eq!(p.color.a, 1.0);
            }
        }
    }

    #[test]
    fn test_alpha_uses_unskewed_value() {
        let vol = Volume::from_spatial([1, 1, 2], vec![0.5, 1.0]).unwrap();
        let params = PipelineParams {
            sampling_ratio: 1.0,
            skew_factor: 3.0,
            transparency_threshold: 0.6,
            ..Default::default()
        };
        let cloud = build_point_cloud(&vol, VolumeLayout::ChannelLast, &params, &mut rng()).unwrap();
        for p in &cloud.points {
            if p.value <= 0.6 {
                assert_eq!(p.color.a, 0.0);
                assert_eq!(p.skewed, 0.125);
            } else {
                assert_eq!(p.color.a, p.value);
            }
        }
    }

    #[test]
    fn test_validation_runs_before_colormap() {
        let vol = Volume::filled([1, 2, 2, 2], 1.0).unwrap();
        let params = PipelineParams {
            sampling_ratio: 2.0,
            colormap: "nope".to_string(),
            ..Default::default()
        };
        let err = build_point_cloud(&vol, VolumeLayout::ChannelFirst, &params, &mut rng()).unwrap_err();
        assert!(matches!(err, VoxplotError::InvalidInput(_)));
    }

    #[test]
    fn test_unknown_colormap_surfaces() {
        let vol = Volume::filled([1, 2, 2, 2], 1.0).unwrap();
        let params = PipelineParams { colormap: "nope".to_string(), ..Default::default() };
        let err = build_point_cloud(&vol, VolumeLayout::ChannelFirst, &params, &mut rng()).unwrap_err();
        assert!(matches!(err, VoxplotError::UnknownColormap { .. }));
    }
}
