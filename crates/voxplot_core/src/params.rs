//! Numeric pipeline parameters and their validation.

use serde::{Deserialize, Serialize};

use crate::error::{VoxplotError, VoxplotResult};

/// Parameters that shape the sampled point cloud.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineParams {
    /// Points whose normalized value is at or below this are fully transparent.
    pub transparency_threshold: f64,
    /// Exponent applied to normalized values before color lookup.
    pub skew_factor: f64,
    /// Fraction of non-zero voxels kept, in `[0, 1]`.
    pub sampling_ratio: f64,
    /// Registered colormap name.
    pub colormap: String,
}

impl Default for PipelineParams {
    fn default() -> Self {
        Self {
            transparency_threshold: 0.0,
            skew_factor: 1.0,
            sampling_ratio: 0.3,
            colormap: "magma".to_string(),
        }
    }
}

impl PipelineParams {
    /// Checks every numeric parameter.
    ///
    /// # Errors
    ///
    /// Returns [`VoxplotError::InvalidInput`] on the first failing check.
    pub fn validate(&self) -> VoxplotResult<()> {
        validate_parameters(self.transparency_threshold, self.skew_factor, self.sampling_ratio)
    }
}

/// Checks the numeric pipeline inputs in argument order.
///
/// # Errors
///
/// Returns [`VoxplotError::InvalidInput`] for a non-finite value or a
/// sampling ratio outside `[0, 1]`.
pub fn validate_parameters(threshold: f64, skew_factor: f64, sampling_ratio: f64) -> VoxplotResult<()> {
    if !threshold.is_finite() {
        return Err(VoxplotError::invalid("transparency threshold must be a number"));
    }
    if !skew_factor.is_finite() {
        return Err(VoxplotError::invalid("skew factor must be a number"));
    }
    if !sampling_ratio.is_finite() || !(0.0..=1.0).contains(&sampling_ratio) {
        return Err(VoxplotError::invalid(
            "sampling ratio must be a number between 0 and 1",
        ));
    }
    Ok(())
}
