use std::time::Instant;

use probelight_core::ProbeError;
use probelight_query::{LightProbeMgr, QueryConfig, QueryOutcome};

use crate::scenes::{self, SceneConfig};

/// Queries per timed batch.
const BATCH_SIZE: usize = 256;

/// Seed for query positions, fixed so runs are comparable.
const QUERY_SEED: u32 = 42;

/// Timing data for a single benchmark run (per-batch wall time).
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TimingSeries {
    pub mean_ms: f64,
    pub median_ms: f64,
    pub p95_ms: f64,
    pub p99_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
}

/// Query outcome counts for a scene.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OutcomeCounts {
    pub hits: u32,
    pub blocked: u32,
    pub misses: u32,
}

/// Result of a single scene benchmark.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct BenchmarkResult {
    pub scene_name: String,
    pub volume_count: u32,
    pub voxel_count: u64,
    pub query_count: u32,
    pub outcomes: OutcomeCounts,
    pub timings: TimingSeries,
}

/// Runs query benchmarks against synthetic probe scenes.
pub struct BenchmarkRunner {
    manager: LightProbeMgr,
    query_count: u32,
}

impl BenchmarkRunner {
    pub fn new(config: QueryConfig, query_count: u32) -> Self {
        Self {
            manager: LightProbeMgr::new(config),
            query_count,
        }
    }

    /// Run a single benchmark scene and return timing results.
    pub fn run_scene(&self, config: &SceneConfig) -> Result<BenchmarkResult, ProbeError> {
        log::info!(
            "Running scene '{}' ({} volumes, {}^3 probes)...",
            config.name,
            config.volume_count,
            config.probes_per_axis
        );

        let lighting = scenes::build_scene(config)?;
        let voxel_count = lighting
            .volumes()
            .iter()
            .map(|v| u64::from(v.grid().total_voxels()))
            .sum();
        let points = scenes::query_points(self.query_count, QUERY_SEED);

        let mut outcomes = OutcomeCounts::default();
        let mut batch_times = Vec::with_capacity(points.len().div_ceil(BATCH_SIZE));
        for batch in points.chunks(BATCH_SIZE) {
            let start = Instant::now();
            for &p in batch {
                match self.manager.query(&lighting, p) {
                    QueryOutcome::Hit { .. } => outcomes.hits += 1,
                    QueryOutcome::Blocked { .. } => outcomes.blocked += 1,
                    QueryOutcome::Miss(_) => outcomes.misses += 1,
                }
            }
            batch_times.push(start.elapsed().as_secs_f64() * 1000.0);
        }

        let timings = compute_timings(&batch_times);
        log::info!(
            "  Done: {} hits, {} blocked, {} misses; mean={:.3}ms/batch, p95={:.3}ms",
            outcomes.hits,
            outcomes.blocked,
            outcomes.misses,
            timings.mean_ms,
            timings.p95_ms
        );

        Ok(BenchmarkResult {
            scene_name: config.name.to_string(),
            volume_count: config.volume_count,
            voxel_count,
            query_count: self.query_count,
            outcomes,
            timings,
        })
    }
}

/// Compute timing statistics from a list of batch times in milliseconds.
fn compute_timings(times: &[f64]) -> TimingSeries {
    if times.is_empty() {
        return TimingSeries {
            mean_ms: 0.0,
            median_ms: 0.0,
            p95_ms: 0.0,
            p99_ms: 0.0,
            min_ms: 0.0,
            max_ms: 0.0,
        };
    }

    let mut sorted = times.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = sorted.len();
    let mean = sorted.iter().sum::<f64>() / n as f64;
    let median = if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    };
    let p95_idx = ((n as f64) * 0.95).ceil() as usize;
    let p99_idx = ((n as f64) * 0.99).ceil() as usize;

    TimingSeries {
        mean_ms: mean,
        median_ms: median,
        p95_ms: sorted[p95_idx.min(n - 1)],
        p99_ms: sorted[p99_idx.min(n - 1)],
        min_ms: sorted[0],
        max_ms: sorted[n - 1],
    }
}
