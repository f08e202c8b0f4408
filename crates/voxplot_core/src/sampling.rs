//! Uniform sampling of non-zero voxels without replacement.
//!
//! Dense volumes are too costly to scatter in full, so only
//! `floor(ratio * n)` voxels are kept. The count is exact; which voxels
//! survive depends on the caller's RNG.

use rand::Rng;

use crate::volume::Voxel;

/// Number of voxels kept out of `n` for `ratio`.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn sample_count(n: usize, ratio: f64) -> usize {
    let kept = (n as f64 * ratio).floor();
    (kept.max(0.0) as usize).min(n)
}

/// Draws `sample_count(voxels.len(), ratio)` voxels without replacement.
///
/// An empty input yields an empty output for any ratio.
#[must_use]
pub fn sample_voxels<R: Rng + ?Sized>(voxels: &[Voxel], ratio: f64, rng: &mut R) -> Vec<Voxel> {
    let amount = sample_count(voxels.len(), ratio);
    if amount == 0 {
        return Vec::new();
    }

    rand::seq::index::sample(rng, voxels.len(), amount)
        .into_iter()
        .map(|i| voxels[i])
        .collect()
}
