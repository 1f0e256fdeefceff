use glam::Vec3;
use probelight_core::{ProbeLighting, ShRecord};

use crate::config::QueryConfig;
use crate::sample::{sample_nearest, sample_trilinear, Sample};

/// Why a query produced no lighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissReason {
    /// The position is outside the root grid; no volume was consulted.
    OutsideRoot,
    /// No volume grid contains the position.
    NoVolume,
    /// Every containing volume sampled Empty at the position.
    AllEmpty,
}

/// Result of a probe query, with enough detail for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QueryOutcome {
    /// Volume `volume` produced a valid sample.
    Hit { volume: usize, sh: ShRecord },
    /// Volume `volume` classified the position as a lighting blocker.
    Blocked { volume: usize },
    Miss(MissReason),
}

impl QueryOutcome {
    pub fn sh(&self) -> Option<ShRecord> {
        match self {
            QueryOutcome::Hit { sh, .. } => Some(*sh),
            QueryOutcome::Blocked { .. } | QueryOutcome::Miss(_) => None,
        }
    }
}

/// Entry point for light probe queries.
#[derive(Debug, Clone, Default)]
pub struct LightProbeMgr {
    config: QueryConfig,
}

impl LightProbeMgr {
    pub fn new(config: QueryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    /// Locate lighting for `position`.
    ///
    /// Volumes are consulted in stored order and the scan stops at the first
    /// decisive volume:
    ///   - Valid: that volume's sample is the answer; later volumes are ignored.
    ///   - Invisible: the position is blocked; the scan ends with no lighting
    ///     even if a later volume has data there.
    ///   - Empty: the volume has no data here; try the next one.
    ///
    /// Volumes whose grid does not contain `position` are skipped. The root
    /// grid is checked first so positions outside the scene never touch a
    /// volume.
    pub fn query(&self, lighting: &ProbeLighting, position: Vec3) -> QueryOutcome {
        if !lighting.root_grid().is_inside(position) {
            log::trace!("probe query at {position}: outside root grid");
            return QueryOutcome::Miss(MissReason::OutsideRoot);
        }

        let mut sampled_any = false;
        for (i, volume) in lighting.volumes().iter().enumerate() {
            if !volume.grid().is_inside(position) {
                continue;
            }
            sampled_any = true;

            let sample = if self.config.use_trilinear {
                sample_trilinear(volume, position, self.config.trilinear_mode)
            } else {
                sample_nearest(volume, position)
            };

            match sample {
                Sample::Valid(sh) => return QueryOutcome::Hit { volume: i, sh },
                Sample::Invisible => {
                    log::debug!("probe query at {position}: blocked by volume {i}");
                    return QueryOutcome::Blocked { volume: i };
                }
                Sample::Empty => {
                    log::trace!("probe query at {position}: volume {i} empty, continuing");
                }
            }
        }

        let reason = if sampled_any {
            MissReason::AllEmpty
        } else {
            MissReason::NoVolume
        };
        log::debug!("probe query at {position}: no lighting ({reason:?})");
        QueryOutcome::Miss(reason)
    }

    /// SH lighting at `position`, or None on a miss or a blocked voxel.
    pub fn get_interpolated_sh(&self, lighting: &ProbeLighting, position: Vec3) -> Option<ShRecord> {
        self.query(lighting, position).sh()
    }
}
