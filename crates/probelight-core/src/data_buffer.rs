use crate::constants::SH_RECORD_LEN;
use crate::error::ProbeError;
use crate::types::ShRecord;

/// Flat store of SH records addressed by data index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataBuffer {
    records: Vec<ShRecord>,
}

impl DataBuffer {
    pub fn from_records(records: Vec<ShRecord>) -> Self {
        Self { records }
    }

    /// Build from a packed float stream, 27 floats per record.
    pub fn from_raw(raw: &[f32]) -> Result<Self, ProbeError> {
        if raw.len() % SH_RECORD_LEN != 0 {
            return Err(ProbeError::DataBufferLength(raw.len()));
        }
        let records = raw
            .chunks_exact(SH_RECORD_LEN)
            .map(|chunk| std::array::from_fn(|i| chunk[i]))
            .collect();
        Ok(Self { records })
    }

    /// Build from a little-endian f32 byte stream.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ProbeError> {
        let float_size = std::mem::size_of::<f32>();
        if bytes.len() % float_size != 0 {
            return Err(ProbeError::DataBufferLength(bytes.len() / float_size));
        }
        let raw: Vec<f32> = bytes
            .chunks_exact(float_size)
            .map(|b| f32::from_bits(u32::from_le(bytemuck::pod_read_unaligned(b))))
            .collect();
        Self::from_raw(&raw)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Fetch the record at `data_index`.
    pub fn get(&self, data_index: u32) -> Result<&ShRecord, ProbeError> {
        self.records
            .get(data_index as usize)
            .ok_or(ProbeError::OutOfRange {
                index: data_index,
                len: self.records.len(),
            })
    }

    /// Records as one contiguous float slice (e.g. for GPU upload).
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.records)
    }
}
