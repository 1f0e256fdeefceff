use probelight_core::constants::CORNERS_PER_VOXEL;
use probelight_core::{IndexBuffer, ProbeVolume};

/// Data validity of one voxel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoxelState {
    /// All 8 corners hold data.
    Valid,
    /// At least one corner was never baked. The search moves on.
    Empty,
    /// The voxel was baked as a lighting blocker. The search stops.
    Invisible,
}

/// Classify a voxel by scanning its corners in order.
///
/// The scan order is load-bearing: an Empty corner seen before any
/// Invisible corner makes the voxel Empty, while an Invisible corner ends
/// the scan at once, so an Empty corner after it is never seen.
pub fn classify(volume: &ProbeVolume, voxel_index: u32) -> VoxelState {
    let index = volume.index_buffer();
    for corner in 0..CORNERS_PER_VOXEL {
        let slot = index.data_index(voxel_index, corner);
        if IndexBuffer::is_empty(slot) {
            return VoxelState::Empty;
        }
        if IndexBuffer::is_invisible(slot) {
            break;
        }
        if corner == CORNERS_PER_VOXEL - 1 {
            return VoxelState::Valid;
        }
    }
    VoxelState::Invisible
}
