//! 4D voxel volume and its axis layout.
//!
//! Data is stored flat in C order. A volume is always rank 4; the layout
//! decides whether the leading axis or a trailing singleton is the channel.

use serde::{Deserialize, Serialize};

use crate::error::{VoxplotError, VoxplotResult};

/// Required rank of every volume.
pub const VOLUME_RANK: usize = 4;

/// How the four axes of a volume are arranged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeLayout {
    /// Axes are `(channel, x, y, z)` and used as-is.
    ChannelFirst,
    /// Axes are `(x, y, z, 1)`; the singleton is treated as a leading channel.
    #[default]
    ChannelLast,
}

/// A single non-empty spatial cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Voxel {
    /// Spatial coordinate `(x, y, z)`.
    pub coord: [usize; 3],
    /// Intensity (raw, or normalized after [`crate::normalize`]).
    pub value: f32,
}

/// A rank-4 intensity array.
#[derive(Debug, Clone, PartialEq)]
pub struct Volume {
    shape: [usize; VOLUME_RANK],
    data: Vec<f32>,
}

impl Volume {
    /// Creates a volume from an arbitrary shape and C-ordered data.
    ///
    /// # Errors
    ///
    /// Returns [`VoxplotError::InvalidInput`] if the shape is not rank 4 or
    /// the data length does not match the shape.
    pub fn new(shape: Vec<usize>, data: Vec<f32>) -> VoxplotResult<Self> {
        let shape: [usize; VOLUME_RANK] = shape.as_slice().try_into().map_err(|_| {
            VoxplotError::invalid(format!(
                "input data must be a 4D array, got {} dimensions",
                shape.len()
            ))
        })?;

        let expected = element_count(shape)?;
        if data.len() != expected {
            return Err(VoxplotError::invalid(format!(
                "data length mismatch: shape {shape:?} needs {expected} elements, got {}",
                data.len()
            )));
        }

        Ok(Self { shape, data })
    }

    /// Creates an `(x, y, z, 1)` volume from a plain 3D grid.
    ///
    /// # Errors
    ///
    /// Returns [`VoxplotError::InvalidInput`] on a data length mismatch.
    pub fn from_spatial(dims: [usize; 3], data: Vec<f32>) -> VoxplotResult<Self> {
        Self::new(vec![dims[0], dims[1], dims[2], 1], data)
    }

    /// Creates a volume filled with a single value.
    ///
    /// # Errors
    ///
    /// Returns [`VoxplotError::InvalidInput`] if the element count overflows.
    pub fn filled(shape: [usize; VOLUME_RANK], value: f32) -> VoxplotResult<Self> {
        let len = element_count(shape)?;
        Ok(Self {
            shape,
            data: vec![value; len],
        })
    }

    /// Returns the raw shape.
    #[must_use]
    pub const fn shape(&self) -> [usize; VOLUME_RANK] {
        self.shape
    }

    /// Returns the flat C-ordered data.
    #[must_use]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Mutable access to the flat data.
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Shape seen through `layout` as `(channel, x, y, z)`.
    ///
    /// # Errors
    ///
    /// Returns [`VoxplotError::InvalidInput`] if a channel-last volume has a
    /// trailing axis other than 1.
    pub fn canonical_shape(&self, layout: VolumeLayout) -> VoxplotResult<[usize; VOLUME_RANK]> {
        match layout {
            VolumeLayout::ChannelFirst => Ok(self.shape),
            VolumeLayout::ChannelLast => {
                let [x, y, z, c] = self.shape;
                if c != 1 {
                    return Err(VoxplotError::invalid(format!(
                        "channel-last volume must end in a singleton axis, got shape {:?}",
                        self.shape
                    )));
                }
                Ok([1, x, y, z])
            }
        }
    }

    /// Spatial extent `(nx, ny, nz)` under `layout`.
    ///
    /// # Errors
    ///
    /// See [`Volume::canonical_shape`].
    pub fn spatial_dims(&self, layout: VolumeLayout) -> VoxplotResult<[usize; 3]> {
        let [_, x, y, z] = self.canonical_shape(layout)?;
        Ok([x, y, z])
    }

    /// Number of z slices (last spatial axis).
    ///
    /// # Errors
    ///
    /// See [`Volume::canonical_shape`].
    pub fn num_slices(&self, layout: VolumeLayout) -> VoxplotResult<usize> {
        Ok(self.spatial_dims(layout)?[2])
    }

    /// Largest value in the volume, `None` when empty.
    #[must_use]
    pub fn max_value(&self) -> Option<f32> {
        self.data.iter().copied().reduce(f32::max)
    }

    /// All spatial cells with a value strictly greater than zero, in C order.
    ///
    /// Channels are folded per cell by taking the maximum, so each `(x, y, z)`
    /// appears at most once.
    ///
    /// # Errors
    ///
    /// See [`Volume::canonical_shape`].
    pub fn non_zero_voxels(&self, layout: VolumeLayout) -> VoxplotResult<Vec<Voxel>> {
        let [channels, nx, ny, nz] = self.canonical_shape(layout)?;
        let per_channel = nx * ny * nz;
        let per_x = ny * nz;

        let voxels = (0..per_channel)
            .filter_map(|cell| {
                let value = (0..channels)
                    .map(|c| self.data[c * per_channel + cell])
                    .fold(f32::NEG_INFINITY, f32::max);
                (value > 0.0).then(|| Voxel {
                    coord: [cell / per_x, (cell % per_x) / nz, cell % nz],
                    value,
                })
            })
            .collect();

        Ok(voxels)
    }
}

fn element_count(shape: [usize; VOLUME_RANK]) -> VoxplotResult<usize> {
    shape
        .iter()
        .try_fold(1usize, |acc, &d| acc.checked_mul(d))
        .ok_or_else(|| VoxplotError::invalid(format!("shape {shape:?} overflows")))
}
