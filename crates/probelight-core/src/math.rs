use crate::constants::SH_RECORD_LEN;
use crate::types::ShRecord;
use glam::UVec3;

/// Component-wise linear blend: `a * (1 - w) + b * w`.
pub fn lerp_sh(a: &ShRecord, b: &ShRecord, w: f32) -> ShRecord {
    let mut out = [0.0f32; SH_RECORD_LEN];
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = a[i] * (1.0 - w) + b[i] * w;
    }
    out
}

/// Lattice offset of voxel corner `corner`.
///
/// Baked corner order: bit 0 = x, bit 1 = z, bit 2 = y. Corners `c` and
/// `c ^ 4` differ along y, corners `c` and `c ^ 2` along z.
pub fn corner_offset(corner: usize) -> UVec3 {
    UVec3::new(
        (corner & 1) as u32,
        ((corner >> 2) & 1) as u32,
        ((corner >> 1) & 1) as u32,
    )
}

/// Linearize 3D cell coordinates, x fastest.
pub fn linearize(coords: UVec3, dims: UVec3) -> u32 {
    coords.x + coords.y * dims.x + coords.z * dims.x * dims.y
}

/// Inverse of [`linearize`]. Returns None past the end of the lattice.
pub fn delinearize(index: u32, dims: UVec3) -> Option<UVec3> {
    let plane = dims.x.checked_mul(dims.y)?;
    if plane == 0 || index / plane >= dims.z {
        return None;
    }
    Some(UVec3::new(
        index % dims.x,
        (index / dims.x) % dims.y,
        index / plane,
    ))
}
