use crate::constants::CORNERS_PER_VOXEL;
use crate::error::ProbeError;
use crate::types::DataSlot;

/// Per-voxel table of 8 corner data slots.
///
/// Corner `c` of a voxel is the lattice point offset by
/// `(c & 1, (c >> 2) & 1, (c >> 1) & 1)` from the voxel origin.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexBuffer {
    voxels: Vec<[DataSlot; CORNERS_PER_VOXEL]>,
}

impl IndexBuffer {
    pub fn new(voxels: Vec<[DataSlot; CORNERS_PER_VOXEL]>) -> Self {
        Self { voxels }
    }

    /// Decode baked raw indices (8 per voxel, voxel-major).
    pub fn from_raw(raw: &[u32]) -> Result<Self, ProbeError> {
        if raw.len() % CORNERS_PER_VOXEL != 0 {
            return Err(ProbeError::IndexBufferLength(raw.len()));
        }
        let voxels = raw
            .chunks_exact(CORNERS_PER_VOXEL)
            .map(|corners| std::array::from_fn(|c| DataSlot::from_raw(corners[c])))
            .collect();
        Ok(Self { voxels })
    }

    /// Decode a little-endian u32 byte stream.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ProbeError> {
        if bytes.len() % std::mem::size_of::<u32>() != 0 {
            return Err(ProbeError::IndexBufferLength(bytes.len()));
        }
        // Byte streams carry no alignment guarantee, so read element-wise.
        let raw: Vec<u32> = bytes
            .chunks_exact(4)
            .map(|b| u32::from_le(bytemuck::pod_read_unaligned(b)))
            .collect();
        Self::from_raw(&raw)
    }

    /// Encode back to the raw baked layout.
    pub fn to_raw(&self) -> Vec<u32> {
        self.voxels
            .iter()
            .flat_map(|corners| corners.iter().map(|slot| slot.to_raw()))
            .collect()
    }

    pub fn voxel_count(&self) -> u32 {
        self.voxels.len() as u32
    }

    /// Raw slot lookup. Panics if `voxel_index` is past the end of the table.
    pub fn data_index(&self, voxel_index: u32, corner: usize) -> DataSlot {
        self.voxels[voxel_index as usize][corner]
    }

    /// All 8 slots of a voxel, or None past the end of the table.
    pub fn corners(&self, voxel_index: u32) -> Option<&[DataSlot; CORNERS_PER_VOXEL]> {
        self.voxels.get(voxel_index as usize)
    }

    pub fn is_empty(slot: DataSlot) -> bool {
        slot.is_empty()
    }

    pub fn is_invisible(slot: DataSlot) -> bool {
        slot.is_invisible()
    }

    pub fn is_valid(slot: DataSlot) -> bool {
        slot.is_valid()
    }

    /// Every `(voxel, corner, offset)` that points into the data buffer.
    pub fn offsets(&self) -> impl Iterator<Item = (u32, usize, u32)> + '_ {
        self.voxels.iter().enumerate().flat_map(|(voxel, corners)| {
            corners
                .iter()
                .enumerate()
                .filter_map(move |(corner, slot)| slot.offset().map(|o| (voxel as u32, corner, o)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{EMPTY_INDEX, INVISIBLE_INDEX};

    #[test]
    fn test_from_raw_decodes_sentinels() {
        let raw = [0, 1, EMPTY_INDEX, 3, INVISIBLE_INDEX, 5, 6, 7];
        let buffer = IndexBuffer::from_raw(&raw).expect("8 corners");
        assert_eq!(buffer.voxel_count(), 1);
        assert_eq!(buffer.data_index(0, 0), DataSlot::Offset(0));
        assert_eq!(buffer.data_index(0, 2), DataSlot::Empty);
        assert_eq!(buffer.data_index(0, 4), DataSlot::Invisible);
        assert!(IndexBuffer::is_empty(buffer.data_index(0, 2)));
        assert!(IndexBuffer::is_invisible(buffer.data_index(0, 4)));
        assert!(IndexBuffer::is_valid(buffer.data_index(0, 7)));
        assert_eq!(buffer.to_raw(), raw.to_vec());
    }

    #[test]
    fn test_from_raw_rejects_partial_voxel() {
        let result = IndexBuffer::from_raw(&[0; 12]);
        assert!(matches!(result, Err(ProbeError::IndexBufferLength(12))));
    }

    #[test]
    fn test_from_bytes_little_endian() {
        let mut bytes = Vec::new();
        for raw in [9u32, 1, 2, 3, 4, 5, 6, EMPTY_INDEX] {
            bytes.extend_from_slice(&raw.to_le_bytes());
        }
        let buffer = IndexBuffer::from_bytes(&bytes).expect("valid stream");
        assert_eq!(buffer.data_index(0, 0), DataSlot::Offset(9));
        assert_eq!(buffer.data_index(0, 7), DataSlot::Empty);

        assert!(matches!(
            IndexBuffer::from_bytes(&bytes[..31]),
            Err(ProbeError::IndexBufferLength(31))
        ));
    }

    #[test]
    fn test_offsets_skip_sentinels() {
        let raw = [0, EMPTY_INDEX, 2, INVISIBLE_INDEX, 4, 5, 6, 7];
        let buffer = IndexBuffer::from_raw(&raw).expect("8 corners");
        let offsets: Vec<_> = buffer.offsets().collect();
        assert_eq!(offsets.len(), 6);
        assert_eq!(offsets[1], (0, 2, 2));
        assert!(buffer.corners(1).is_none());
    }
}
