//! Shared constants for the probe data layout.
//! The sentinel values are part of the baked data format and must not change.

/// SH coefficients per color channel (degree 2 = 9 bands).
pub const SH_COEFFICIENTS: usize = 9;

/// Color channels per coefficient (RGB).
pub const SH_CHANNELS: usize = 3;

/// Floats per SH record: 9 coefficients x 3 channels, row-major by coefficient.
pub const SH_RECORD_LEN: usize = SH_COEFFICIENTS * SH_CHANNELS;

/// Corners per voxel.
pub const CORNERS_PER_VOXEL: usize = 8;

/// Raw index value: the voxel corner was never baked.
pub const EMPTY_INDEX: u32 = 0xFFFF_FFFD;

/// Raw index value: the voxel corner was baked as a lighting blocker.
pub const INVISIBLE_INDEX: u32 = 0xFFFF_FFFE;

/// Minimum probes per grid axis. One voxel needs two corner planes.
pub const MIN_STRIDE: u32 = 2;
