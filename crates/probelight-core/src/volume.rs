use crate::constants::CORNERS_PER_VOXEL;
use crate::data_buffer::DataBuffer;
use crate::error::ProbeError;
use crate::grid::ProbeGrid;
use crate::index_buffer::IndexBuffer;
use crate::math::{corner_offset, delinearize, linearize};
use crate::types::DataSlot;
use glam::{UVec3, Vec3};

/// One local lighting volume: a lattice plus its baked index and SH data.
#[derive(Debug, Clone)]
pub struct ProbeVolume {
    grid: ProbeGrid,
    index: IndexBuffer,
    data: DataBuffer,
}

/// A lattice probe as seen by debug tooling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbePoint {
    pub coords: UVec3,
    pub position: Vec3,
    /// Slot from the first voxel (in linear order) that uses this corner.
    /// None for probes no voxel references.
    pub slot: Option<DataSlot>,
}

impl ProbeVolume {
    /// Bind a grid to its buffers. The index buffer must hold exactly one
    /// entry per grid voxel.
    pub fn new(grid: ProbeGrid, index: IndexBuffer, data: DataBuffer) -> Result<Self, ProbeError> {
        if index.voxel_count() != grid.total_voxels() {
            return Err(ProbeError::VoxelCountMismatch {
                expected: grid.total_voxels(),
                actual: index.voxel_count(),
            });
        }
        Ok(Self { grid, index, data })
    }

    /// Check that every offset in the index buffer addresses a record.
    ///
    /// Loaders should call this once after import; queries treat a dangling
    /// offset as corruption and panic.
    pub fn validate(&self) -> Result<(), ProbeError> {
        for (voxel, corner, offset) in self.index.offsets() {
            if offset as usize >= self.data.len() {
                return Err(ProbeError::DanglingDataIndex {
                    voxel,
                    corner,
                    index: offset,
                });
            }
        }
        Ok(())
    }

    pub fn grid(&self) -> &ProbeGrid {
        &self.grid
    }

    pub fn index_buffer(&self) -> &IndexBuffer {
        &self.index
    }

    pub fn data_buffer(&self) -> &DataBuffer {
        &self.data
    }

    /// Enumerate every lattice probe with its position and data slot.
    pub fn probes(&self) -> Vec<ProbePoint> {
        let stride = self.grid.probe_count();
        let total = self.grid.probe_total() as usize;
        let mut slots: Vec<Option<DataSlot>> = vec![None; total];

        for voxel in 0..self.index.voxel_count() {
            let Some(coords) = self.grid.voxel_coords(voxel) else {
                break;
            };
            for corner in 0..CORNERS_PER_VOXEL {
                let probe = linearize(coords + corner_offset(corner), stride) as usize;
                if slots[probe].is_none() {
                    slots[probe] = Some(self.index.data_index(voxel, corner));
                }
            }
        }

        slots
            .into_iter()
            .enumerate()
            .filter_map(|(i, slot)| {
                let coords = delinearize(i as u32, stride)?;
                Some(ProbePoint {
                    coords,
                    position: self.grid.corner_position(coords.x, coords.y, coords.z),
                    slot,
                })
            })
            .collect()
    }
}
