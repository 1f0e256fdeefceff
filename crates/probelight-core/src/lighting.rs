use crate::grid::ProbeGrid;
use crate::volume::ProbeVolume;

/// All probe volumes of a scene plus the root grid that bounds them.
///
/// Volume order is a priority order: queries consult volumes front to back
/// and the first decisive volume wins.
#[derive(Debug, Clone)]
pub struct ProbeLighting {
    root_grid: ProbeGrid,
    volumes: Vec<ProbeVolume>,
}

impl ProbeLighting {
    pub fn new(root_grid: ProbeGrid, volumes: Vec<ProbeVolume>) -> Self {
        for (i, volume) in volumes.iter().enumerate() {
            let grid = volume.grid();
            if !root_grid.is_inside(grid.min()) || !root_grid.is_inside(grid.max()) {
                log::warn!(
                    "probe volume {i} [{} .. {}] extends past the root grid; \
                     the overhang is unreachable",
                    grid.min(),
                    grid.max()
                );
            }
        }
        Self { root_grid, volumes }
    }

    pub fn root_grid(&self) -> &ProbeGrid {
        &self.root_grid
    }

    pub fn volumes(&self) -> &[ProbeVolume] {
        &self.volumes
    }

    pub fn volume_count(&self) -> usize {
        self.volumes.len()
    }
}
