use glam::Vec3;
use probelight_core::constants::{CORNERS_PER_VOXEL, SH_RECORD_LEN};
use probelight_core::math::lerp_sh;
use probelight_core::{ProbeVolume, ShRecord};

use crate::classify::{classify, VoxelState};
use crate::config::TrilinearMode;

/// Outcome of sampling one volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sample {
    Valid(ShRecord),
    Empty,
    Invisible,
}

/// Fetch a record for an offset the index buffer handed out.
///
/// A miss here means the loader produced an index buffer that points past
/// its data buffer. That is corruption, not a lookup miss, so it panics.
fn fetch(volume: &ProbeVolume, offset: u32) -> ShRecord {
    match volume.data_buffer().get(offset) {
        Ok(record) => *record,
        Err(err) => panic!("corrupt probe data: {err}"),
    }
}

/// Sample a volume by blending the 8 corners of the voxel around `point`.
pub fn sample_trilinear(volume: &ProbeVolume, point: Vec3, mode: TrilinearMode) -> Sample {
    let grid = volume.grid();
    let Some(voxel) = grid.voxel_index(point) else {
        return Sample::Empty;
    };
    match classify(volume, voxel) {
        VoxelState::Valid => {}
        VoxelState::Empty => return Sample::Empty,
        VoxelState::Invisible => return Sample::Invisible,
    }

    let index = volume.index_buffer();
    let mut corners = [[0.0f32; SH_RECORD_LEN]; CORNERS_PER_VOXEL];
    for (corner, record) in corners.iter_mut().enumerate() {
        let Some(offset) = index.data_index(voxel, corner).offset() else {
            return Sample::Empty;
        };
        *record = fetch(volume, offset);
    }

    match mode {
        TrilinearMode::LegacyCorner0 => Sample::Valid(corners[0]),
        TrilinearMode::Blend => {
            let Some([wx, wy, wz]) = grid.trilinear_weights(point, voxel) else {
                return Sample::Empty;
            };
            // Pairs (0,1) (2,3) (4,5) (6,7) differ in x, (01,45) (23,67) in y,
            // and the two y blends in z.
            let lerp01 = lerp_sh(&corners[0], &corners[1], wx);
            let lerp23 = lerp_sh(&corners[2], &corners[3], wx);
            let lerp45 = lerp_sh(&corners[4], &corners[5], wx);
            let lerp67 = lerp_sh(&corners[6], &corners[7], wx);
            let near = lerp_sh(&lerp01, &lerp45, wy);
            let far = lerp_sh(&lerp23, &lerp67, wy);
            Sample::Valid(lerp_sh(&near, &far, wz))
        }
    }
}

/// Sample a volume using the voxel corner closest to `point`.
pub fn sample_nearest(volume: &ProbeVolume, point: Vec3) -> Sample {
    let grid = volume.grid();
    let Some(voxel) = grid.voxel_index(point) else {
        return Sample::Empty;
    };
    match classify(volume, voxel) {
        VoxelState::Valid => {}
        VoxelState::Empty => return Sample::Empty,
        VoxelState::Invisible => return Sample::Invisible,
    }
    let Some(corner) = grid.nearest_corner_index(point, voxel) else {
        return Sample::Empty;
    };
    let Some(offset) = volume.index_buffer().data_index(voxel, corner).offset() else {
        return Sample::Empty;
    };
    Sample::Valid(fetch(volume, offset))
}
