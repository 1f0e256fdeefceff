use glam::{UVec3, Vec3};
use probelight_core::math::{corner_offset, linearize};
use probelight_core::{
    DataBuffer, DataSlot, IndexBuffer, ProbeError, ProbeGrid, ProbeLighting, ProbeVolume,
    ShRecord,
};

/// Side length of the root grid every bench scene sits in.
pub const WORLD_EXTENT: f32 = 64.0;

/// Inset between successive nested volumes.
const VOLUME_INSET: f32 = 4.0;

/// Configuration for a single benchmark scene.
pub struct SceneConfig {
    pub name: &'static str,
    /// Nested volumes, innermost first.
    pub volume_count: u32,
    pub probes_per_axis: u32,
    /// Percentage of voxels with an Invisible corner.
    pub invisible_pct: u32,
    /// Percentage of voxels with an Empty corner.
    pub empty_pct: u32,
}

/// Return the standard suite of benchmark scenes.
pub fn standard_scenes() -> Vec<SceneConfig> {
    vec![
        SceneConfig {
            name: "single",
            volume_count: 1,
            probes_per_axis: 16,
            invisible_pct: 0,
            empty_pct: 0,
        },
        SceneConfig {
            name: "nested-3",
            volume_count: 3,
            probes_per_axis: 16,
            invisible_pct: 2,
            empty_pct: 20,
        },
        SceneConfig {
            name: "sparse-6",
            volume_count: 6,
            probes_per_axis: 12,
            invisible_pct: 1,
            empty_pct: 60,
        },
        SceneConfig {
            name: "dense-4",
            volume_count: 4,
            probes_per_axis: 48,
            invisible_pct: 5,
            empty_pct: 10,
        },
    ]
}

/// Deterministic hash for scene content.
fn scene_hash(a: u32, b: u32) -> u32 {
    let mut h = a.wrapping_mul(0x9E37_79B1) ^ b.wrapping_mul(0x85EB_CA77);
    h ^= h >> 15;
    h = h.wrapping_mul(0xC2B2_AE3D);
    h ^ (h >> 13)
}

/// Build one volume. Every probe gets its own record; voxels are knocked
/// out with Empty or Invisible corners at the configured rates.
fn build_volume(
    config: &SceneConfig,
    volume: u32,
    min: Vec3,
    max: Vec3,
) -> Result<ProbeVolume, ProbeError> {
    let grid = ProbeGrid::new(min, max, UVec3::splat(config.probes_per_axis))?;
    let stride = grid.probe_count();
    let probe_total = grid.probe_total();

    let records: Vec<ShRecord> = (0..probe_total)
        .map(|p| {
            let h = scene_hash(volume, p);
            std::array::from_fn(|k| ((h >> (k % 24)) & 0xFF) as f32 / 255.0)
        })
        .collect();

    let mut voxels = Vec::with_capacity(grid.total_voxels() as usize);
    for v in 0..grid.total_voxels() {
        let Some(coords) = grid.voxel_coords(v) else {
            break;
        };
        let mut slots: [DataSlot; 8] =
            std::array::from_fn(|c| DataSlot::Offset(linearize(coords + corner_offset(c), stride)));
        let h = scene_hash(volume ^ 0xB10C, v);
        let roll = h % 100;
        let corner = ((h >> 8) % 8) as usize;
        if roll < config.invisible_pct {
            slots[corner] = DataSlot::Invisible;
        } else if roll < config.invisible_pct + config.empty_pct {
            slots[corner] = DataSlot::Empty;
        }
        voxels.push(slots);
    }

    ProbeVolume::new(grid, IndexBuffer::new(voxels), DataBuffer::from_records(records))
}

/// Build the probe lighting for a scene config.
pub fn build_scene(config: &SceneConfig) -> Result<ProbeLighting, ProbeError> {
    let root = ProbeGrid::new(Vec3::ZERO, Vec3::splat(WORLD_EXTENT), UVec3::splat(2))?;
    let mut volumes = Vec::with_capacity(config.volume_count as usize);
    for i in (0..config.volume_count).rev() {
        let inset = i as f32 * VOLUME_INSET;
        let volume = build_volume(
            config,
            i,
            Vec3::splat(inset),
            Vec3::splat(WORLD_EXTENT - inset),
        )?;
        volume.validate()?;
        volumes.push(volume);
    }
    Ok(ProbeLighting::new(root, volumes))
}

/// Deterministic query positions. A small share falls outside the root grid.
pub fn query_points(count: u32, seed: u32) -> Vec<Vec3> {
    let span = WORLD_EXTENT * 1.1;
    let offset = WORLD_EXTENT * 0.05;
    (0..count)
        .map(|i| {
            let axis = |a: u32| {
                let h = scene_hash(seed.wrapping_add(a), i);
                (h as f32 / u32::MAX as f32) * span - offset
            };
            Vec3::new(axis(0), axis(1), axis(2))
        })
        .collect()
}
