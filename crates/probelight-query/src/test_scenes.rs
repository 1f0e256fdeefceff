//! Scene builders shared by the unit tests.

use glam::{UVec3, Vec3};
use probelight_core::constants::SH_RECORD_LEN;
use probelight_core::{
    DataBuffer, DataSlot, IndexBuffer, ProbeGrid, ProbeLighting, ProbeVolume, ShRecord,
};

/// Record filled with a single value.
pub fn record(value: f32) -> ShRecord {
    [value; SH_RECORD_LEN]
}

/// Eight distinct records: record `i`, component `k` = `i * 100 + k`.
pub fn unit_records() -> Vec<ShRecord> {
    (0..8)
        .map(|i| std::array::from_fn(|k| (i * 100 + k) as f32))
        .collect()
}

/// Corner `c` points at record `c`.
pub fn filled_slots() -> [DataSlot; 8] {
    std::array::from_fn(|c| DataSlot::Offset(c as u32))
}

/// One voxel spanning `[min, max]` (2x2x2 probes).
pub fn single_voxel_volume(
    min: Vec3,
    max: Vec3,
    slots: [DataSlot; 8],
    records: Vec<ShRecord>,
) -> ProbeVolume {
    let grid = ProbeGrid::new(min, max, UVec3::splat(2)).expect("valid grid");
    ProbeVolume::new(
        grid,
        IndexBuffer::new(vec![slots]),
        DataBuffer::from_records(records),
    )
    .expect("one voxel")
}

/// Volumes under a root grid spanning `[min, max]`.
pub fn lighting(min: Vec3, max: Vec3, volumes: Vec<ProbeVolume>) -> ProbeLighting {
    let root = ProbeGrid::new(min, max, UVec3::splat(2)).expect("valid root grid");
    ProbeLighting::new(root, volumes)
}
