use crate::constants::{CORNERS_PER_VOXEL, MIN_STRIDE};
use crate::error::ProbeError;
use crate::math::{corner_offset, delinearize, linearize};
use glam::{UVec3, Vec3};

/// Slack allowed when quantizing points that sit on the far boundary.
const BOUNDARY_EPSILON: f32 = 1e-4;

/// Regular 3D probe lattice.
///
/// `stride` counts probes (lattice corners) per axis, so a grid has
/// `stride - 1` voxels along each axis. Voxels are linearized x fastest,
/// then y, then z; index buffers are populated in the same order.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeGrid {
    /// Bounds as authored.
    authored_min: Vec3,
    authored_max: Vec3,
    /// Bounds snapped to the lattice. All queries use these.
    min: Vec3,
    max: Vec3,
    step: Vec3,
    stride: UVec3,
}

impl ProbeGrid {
    /// Build a grid with `stride` probes per axis spread evenly over `[min, max]`.
    pub fn new(min: Vec3, max: Vec3, stride: UVec3) -> Result<Self, ProbeError> {
        check_bounds(min, max)?;
        check_stride(stride)?;
        let step = (max - min) / (stride - UVec3::ONE).as_vec3();
        Ok(Self {
            authored_min: min,
            authored_max: max,
            min,
            max,
            step,
            stride,
        })
    }

    /// Build a grid from a fixed probe spacing.
    ///
    /// As many whole steps as fit in `[min, max]` are used; the adjusted max
    /// is pulled back onto the last probe plane.
    pub fn with_step(min: Vec3, max: Vec3, step: Vec3) -> Result<Self, ProbeError> {
        check_bounds(min, max)?;
        if !step.is_finite() || step.cmple(Vec3::ZERO).any() {
            return Err(ProbeError::InvalidStep(step));
        }
        let cells = ((max - min) / step + Vec3::splat(BOUNDARY_EPSILON)).floor();
        let c = cells.as_uvec3();
        let stride = UVec3::new(
            c.x.saturating_add(1),
            c.y.saturating_add(1),
            c.z.saturating_add(1),
        );
        check_stride(stride)?;
        let adjusted_max = min + step * cells;
        if adjusted_max != max {
            log::debug!("probe grid max snapped from {max} to {adjusted_max} (step {step})");
        }
        Ok(Self {
            authored_min: min,
            authored_max: max,
            min,
            max: adjusted_max,
            step,
            stride,
        })
    }

    pub fn min(&self) -> Vec3 {
        self.min
    }

    pub fn max(&self) -> Vec3 {
        self.max
    }

    pub fn authored_bounds(&self) -> (Vec3, Vec3) {
        (self.authored_min, self.authored_max)
    }

    pub fn step(&self) -> Vec3 {
        self.step
    }

    /// Probes per axis.
    pub fn probe_count(&self) -> UVec3 {
        self.stride
    }

    /// Voxels per axis.
    pub fn voxel_count(&self) -> UVec3 {
        self.stride - UVec3::ONE
    }

    /// Total probes. Construction guarantees this fits in a u32.
    pub fn probe_total(&self) -> u32 {
        let s = self.stride;
        s.x * s.y * s.z
    }

    /// Total voxels. Never exceeds `probe_total`.
    pub fn total_voxels(&self) -> u32 {
        let v = self.voxel_count();
        v.x * v.y * v.z
    }

    /// Inclusive containment test against the adjusted bounds.
    pub fn is_inside(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Linear index of the voxel containing `point`.
    ///
    /// Points on a far boundary belong to the last voxel of that axis.
    pub fn voxel_index(&self, point: Vec3) -> Option<u32> {
        let voxels = self.voxel_count();
        let rel = (point - self.min) / self.step;
        let mut cell = UVec3::ZERO;
        for axis in 0..3 {
            let r = rel[axis];
            let limit = voxels[axis] as f32 + BOUNDARY_EPSILON;
            // NaN fails both comparisons
            if !(r >= 0.0 && r <= limit) {
                return None;
            }
            cell[axis] = (r.floor() as u32).min(voxels[axis] - 1);
        }
        Some(linearize(cell, voxels))
    }

    /// Voxel coordinates for a linear voxel index.
    pub fn voxel_coords(&self, voxel_index: u32) -> Option<UVec3> {
        delinearize(voxel_index, self.voxel_count())
    }

    /// Fractional position of `point` inside its voxel, per axis, clamped to [0, 1].
    /// None when the voxel index is outside the lattice.
    pub fn trilinear_weights(&self, point: Vec3, voxel_index: u32) -> Option<[f32; 3]> {
        let coords = self.voxel_coords(voxel_index)?;
        let origin = self.corner_position(coords.x, coords.y, coords.z);
        let w = ((point - origin) / self.step).clamp(Vec3::ZERO, Vec3::ONE);
        Some(w.to_array())
    }

    /// Corner (0..8) of the voxel whose probe lies closest to `point`.
    ///
    /// Ties go to the lower corner index. None when the voxel index is
    /// outside the lattice.
    pub fn nearest_corner_index(&self, point: Vec3, voxel_index: u32) -> Option<usize> {
        let coords = self.voxel_coords(voxel_index)?;
        let mut best: Option<(usize, f32)> = None;
        for corner in 0..CORNERS_PER_VOXEL {
            let c = coords + corner_offset(corner);
            let dist = self.corner_position(c.x, c.y, c.z).distance_squared(point);
            match best {
                Some((_, best_dist)) if dist >= best_dist => {}
                _ => best = Some((corner, dist)),
            }
        }
        best.map(|(corner, _)| corner)
    }

    /// World position of the probe at lattice coordinate `(x, y, z)`.
    pub fn corner_position(&self, x: u32, y: u32, z: u32) -> Vec3 {
        self.min + self.step * UVec3::new(x, y, z).as_vec3()
    }
}

/// At least two probes per axis, and a probe count addressable by u32 indices.
fn check_stride(stride: UVec3) -> Result<(), ProbeError> {
    let total = stride
        .x
        .checked_mul(stride.y)
        .and_then(|xy| xy.checked_mul(stride.z));
    if stride.cmplt(UVec3::splat(MIN_STRIDE)).any() || total.is_none() {
        return Err(ProbeError::InvalidStride(stride));
    }
    Ok(())
}

fn check_bounds(min: Vec3, max: Vec3) -> Result<(), ProbeError> {
    if !min.is_finite() || !max.is_finite() || max.cmple(min).any() {
        return Err(ProbeError::InvalidBounds { min, max });
    }
    Ok(())
}
