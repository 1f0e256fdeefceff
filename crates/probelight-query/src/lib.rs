//! Runtime light probe queries: voxel classification, trilinear and
//! nearest sampling, and the ordered multi-volume search.

pub mod classify;
pub mod config;
pub mod manager;
pub mod sample;

#[cfg(test)]
mod test_scenes;

pub use classify::{classify, VoxelState};
pub use config::{load_query_config_from_str, ConfigError, QueryConfig, TrilinearMode};
pub use manager::{LightProbeMgr, MissReason, QueryOutcome};
pub use sample::Sample;

use glam::Vec3;
use probelight_core::{ProbeLighting, ShRecord};

/// SH lighting at `world_position`, using legacy trilinear or nearest sampling.
///
/// Returns None when no volume has data there or the position is blocked.
pub fn get_interpolated_sh(
    probe_lighting: &ProbeLighting,
    world_position: Vec3,
    use_trilinear: bool,
) -> Option<ShRecord> {
    let config = QueryConfig {
        use_trilinear,
        ..QueryConfig::default()
    };
    LightProbeMgr::new(config).get_interpolated_sh(probe_lighting, world_position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_scenes::{filled_slots, lighting, single_voxel_volume, unit_records};
    use glam::UVec3;
    use probelight_core::{DataBuffer, DataSlot, IndexBuffer, ProbeGrid, ProbeVolume};

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_probe_data_is_shareable() {
        assert_send_sync::<ProbeLighting>();
        assert_send_sync::<LightProbeMgr>();
    }

    #[test]
    fn test_free_function_modes() {
        let records = unit_records();
        let scene = lighting(
            Vec3::splat(-1.0),
            Vec3::splat(2.0),
            vec![single_voxel_volume(
                Vec3::ZERO,
                Vec3::ONE,
                filled_slots(),
                records.clone(),
            )],
        );
        let p = Vec3::new(0.9, 0.8, 0.7);
        assert_eq!(get_interpolated_sh(&scene, p, true), Some(records[0]));
        assert_eq!(get_interpolated_sh(&scene, p, false), Some(records[7]));
        assert_eq!(get_interpolated_sh(&scene, Vec3::splat(3.0), true), None);
    }

    #[test]
    fn test_queries_from_raw_baked_buffers() {
        // 2x1x1 voxels; the second voxel's far corners are blocked.
        let grid = ProbeGrid::new(Vec3::ZERO, Vec3::new(2.0, 1.0, 1.0), UVec3::new(3, 2, 2))
            .expect("valid grid");
        let raw_index: Vec<u32> = vec![
            0, 1, 6, 7, 3, 4, 9, 10, //
            1, 2, 7, 8, 4, 5, 10, 0xFFFF_FFFE,
        ];
        let raw_data: Vec<f32> = (0..11)
            .flat_map(|probe| std::iter::repeat(probe as f32).take(27))
            .collect();
        let volume = ProbeVolume::new(
            grid,
            IndexBuffer::from_raw(&raw_index).expect("two voxels"),
            DataBuffer::from_raw(&raw_data).expect("eleven records"),
        )
        .expect("matching sizes");
        volume.validate().expect("no dangling offsets");
        assert_eq!(
            volume.index_buffer().data_index(1, 7),
            DataSlot::Invisible
        );

        let scene = lighting(Vec3::splat(-1.0), Vec3::splat(3.0), vec![volume]);
        // Nearest corner (1, 0, 1) is corner 3, baked at lattice point 7.
        let sh = get_interpolated_sh(&scene, Vec3::new(0.9, 0.1, 0.9), false).expect("valid");
        assert_eq!(sh[0], 7.0);
        assert_eq!(get_interpolated_sh(&scene, Vec3::new(1.5, 0.5, 0.5), false), None);
    }

    #[test]
    fn test_concurrent_queries() {
        let records = unit_records();
        let scene = lighting(
            Vec3::splat(-1.0),
            Vec3::splat(2.0),
            vec![single_voxel_volume(
                Vec3::ZERO,
                Vec3::ONE,
                filled_slots(),
                records.clone(),
            )],
        );
        let mgr = LightProbeMgr::new(QueryConfig::trilinear(TrilinearMode::Blend));
        std::thread::scope(|s| {
            for t in 0..4 {
                let (scene, mgr) = (&scene, &mgr);
                s.spawn(move || {
                    let p = Vec3::splat(t as f32 / 4.0);
                    assert!(mgr.get_interpolated_sh(scene, p).is_some());
                });
            }
        });
    }
}
