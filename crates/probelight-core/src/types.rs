use crate::constants::{EMPTY_INDEX, INVISIBLE_INDEX, SH_RECORD_LEN};

/// One probe's lighting: 9 SH coefficients x RGB, row-major by coefficient.
pub type ShRecord = [f32; SH_RECORD_LEN];

/// Decoded corner entry of an index buffer.
///
/// The baked format packs "no data" and "blocked" into the top of the u32
/// range (see `EMPTY_INDEX` / `INVISIBLE_INDEX`). Everything else is an
/// offset into the volume's data buffer, including values that turn out to
/// address nothing; those are caught when the record is fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataSlot {
    Offset(u32),
    Empty,
    Invisible,
}

impl DataSlot {
    /// Decode a raw index value, preserving the sentinel bit patterns.
    pub const fn from_raw(raw: u32) -> Self {
        match raw {
            EMPTY_INDEX => DataSlot::Empty,
            INVISIBLE_INDEX => DataSlot::Invisible,
            offset => DataSlot::Offset(offset),
        }
    }

    /// Encode back to the raw baked representation.
    pub const fn to_raw(self) -> u32 {
        match self {
            DataSlot::Offset(offset) => offset,
            DataSlot::Empty => EMPTY_INDEX,
            DataSlot::Invisible => INVISIBLE_INDEX,
        }
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, DataSlot::Empty)
    }

    pub const fn is_invisible(self) -> bool {
        matches!(self, DataSlot::Invisible)
    }

    /// True for a genuine data offset (neither sentinel).
    pub const fn is_valid(self) -> bool {
        matches!(self, DataSlot::Offset(_))
    }

    pub const fn offset(self) -> Option<u32> {
        match self {
            DataSlot::Offset(offset) => Some(offset),
            _ => None,
        }
    }
}

impl From<u32> for DataSlot {
    fn from(raw: u32) -> Self {
        DataSlot::from_raw(raw)
    }
}

impl From<DataSlot> for u32 {
    fn from(slot: DataSlot) -> Self {
        slot.to_raw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels_decode() {
        assert!(DataSlot::from_raw(EMPTY_INDEX).is_empty());
        assert!(DataSlot::from_raw(INVISIBLE_INDEX).is_invisible());
        assert!(!DataSlot::from_raw(EMPTY_INDEX).is_valid());
        assert!(!DataSlot::from_raw(INVISIBLE_INDEX).is_valid());
    }

    #[test]
    fn test_non_sentinels_are_valid() {
        for raw in [0u32, 1, 26, 0xFFFF, 0xFFFF_FFFC, 0xFFFF_FFFF] {
            let slot = DataSlot::from_raw(raw);
            assert!(slot.is_valid(), "raw {raw:#x} should be an offset");
            assert!(!slot.is_empty());
            assert!(!slot.is_invisible());
            assert_eq!(slot.offset(), Some(raw));
        }
    }

    #[test]
    fn test_raw_bit_patterns_preserved() {
        assert_eq!(DataSlot::Empty.to_raw(), 0xFFFF_FFFD);
        assert_eq!(DataSlot::Invisible.to_raw(), 0xFFFF_FFFE);
        for raw in [0u32, 7, EMPTY_INDEX, INVISIBLE_INDEX, u32::MAX] {
            assert_eq!(u32::from(DataSlot::from(raw)), raw);
        }
    }

    #[test]
    fn test_sh_record_size() {
        assert_eq!(std::mem::size_of::<ShRecord>(), 27 * 4);
    }
}
