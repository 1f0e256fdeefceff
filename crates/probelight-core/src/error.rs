use glam::{UVec3, Vec3};
use thiserror::Error;

/// Errors raised while building or reading probe data.
#[derive(Debug, Error, PartialEq)]
pub enum ProbeError {
    #[error("grid bounds are empty or inverted: min {min}, max {max}")]
    InvalidBounds { min: Vec3, max: Vec3 },

    #[error("grid step must be positive and finite, got {0}")]
    InvalidStep(Vec3),

    #[error("grid stride {0} needs at least 2 probes per axis")]
    InvalidStride(UVec3),

    #[error("index buffer length {0} is not a multiple of 8 corners")]
    IndexBufferLength(usize),

    #[error("data buffer length {0} is not a multiple of 27 floats")]
    DataBufferLength(usize),

    #[error("index buffer covers {actual} voxels, grid has {expected}")]
    VoxelCountMismatch { expected: u32, actual: u32 },

    #[error("data index {index} out of range ({len} records)")]
    OutOfRange { index: u32, len: usize },

    #[error("voxel {voxel} corner {corner} references missing record {index}")]
    DanglingDataIndex { voxel: u32, corner: usize, index: u32 },
}
