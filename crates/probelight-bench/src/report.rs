use std::path::Path;

use crate::runner::BenchmarkResult;

/// A complete baseline containing results from all scenes.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Baseline {
    pub timestamp: String,
    pub results: Vec<BenchmarkResult>,
}

/// Load a baseline from a JSON file. Returns None if the file doesn't exist.
pub fn load_baseline(path: &Path) -> Option<Baseline> {
    let contents = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&contents).ok()
}

/// Save a baseline to a JSON file.
pub fn save_baseline(path: &Path, baseline: &Baseline) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(baseline).map_err(std::io::Error::other)?;
    std::fs::write(path, json)
}

/// A difference from the baseline worth failing a run over.
#[derive(Debug, Clone, PartialEq)]
pub enum Regression {
    /// Mean batch time grew by more than the threshold (percent).
    Slower { scene: String, pct_change: f64 },
    /// Hit/blocked/miss counts differ, so query results changed.
    OutcomesChanged { scene: String },
}

/// Compare current results against a baseline. Scenes missing from the
/// baseline are ignored.
pub fn compare(
    current: &[BenchmarkResult],
    baseline: &Baseline,
    threshold_pct: f64,
) -> Vec<Regression> {
    let mut regressions = Vec::new();

    for result in current {
        let Some(base) = baseline
            .results
            .iter()
            .find(|b| b.scene_name == result.scene_name)
        else {
            continue;
        };
        if base.query_count == result.query_count && base.outcomes != result.outcomes {
            regressions.push(Regression::OutcomesChanged {
                scene: result.scene_name.clone(),
            });
        }
        let pct_change =
            (result.timings.mean_ms - base.timings.mean_ms) / base.timings.mean_ms * 100.0;
        if pct_change > threshold_pct {
            regressions.push(Regression::Slower {
                scene: result.scene_name.clone(),
                pct_change,
            });
        }
    }

    regressions
}

/// Format results as a markdown summary table.
pub fn format_markdown(results: &[BenchmarkResult]) -> String {
    let mut out = String::new();
    out.push_str("| Scene | Volumes | Voxels | Queries | Hits | Blocked | Misses | Mean (ms) | Median (ms) | P95 (ms) | P99 (ms) |\n");
    out.push_str("|-------|---------|--------|---------|------|---------|--------|-----------|-------------|----------|----------|\n");

    for r in results {
        out.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} | {} | {:.3} | {:.3} | {:.3} | {:.3} |\n",
            r.scene_name,
            r.volume_count,
            r.voxel_count,
            r.query_count,
            r.outcomes.hits,
            r.outcomes.blocked,
            r.outcomes.misses,
            r.timings.mean_ms,
            r.timings.median_ms,
            r.timings.p95_ms,
            r.timings.p99_ms,
        ));
    }

    out
}

/// Format a comparison report showing regressions.
pub fn format_comparison(regressions: &[Regression], threshold_pct: f64) -> String {
    if regressions.is_empty() {
        return format!(
            "All scenes within {:.0}% threshold with unchanged outcomes. No regressions detected.\n",
            threshold_pct
        );
    }

    let mut out = String::from("REGRESSIONS DETECTED:\n");
    for regression in regressions {
        match regression {
            Regression::Slower { scene, pct_change } => out.push_str(&format!(
                "  - {}: +{:.1}% (threshold {:.0}%)\n",
                scene, pct_change, threshold_pct
            )),
            Regression::OutcomesChanged { scene } => {
                out.push_str(&format!("  - {}: query outcomes changed\n", scene))
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::{OutcomeCounts, TimingSeries};

    fn result(name: &str, mean_ms: f64) -> BenchmarkResult {
        BenchmarkResult {
            scene_name: name.to_string(),
            volume_count: 1,
            voxel_count: 27,
            query_count: 100,
            outcomes: OutcomeCounts {
                hits: 90,
                blocked: 2,
                misses: 8,
            },
            timings: TimingSeries {
                mean_ms: mean_ms,
                median_ms: mean_ms,
                p95_ms: mean_ms,
                p99_ms: mean_ms,
                min_ms: mean_ms,
                max_ms: mean_ms,
            },
        }
    }

    #[test]
    fn test_compare_flags_regressions() {
        let baseline = Baseline {
            timestamp: "bench-0".to_string(),
            results: vec![result("single", 1.0), result("nested-3", 2.0)],
        };
        let current = vec![result("single", 1.05), result("nested-3", 3.0), result("new", 9.0)];
        let regressions = compare(&current, &baseline, 10.0);
        assert_eq!(regressions.len(), 1);
        match &regressions[0] {
            Regression::Slower { scene, pct_change } => {
                assert_eq!(scene, "nested-3");
                assert!((pct_change - 50.0).abs() < 1e-9);
            }
            other => panic!("unexpected regression {other:?}"),
        }
    }

    #[test]
    fn test_compare_flags_changed_outcomes() {
        let baseline = Baseline {
            timestamp: "bench-0".to_string(),
            results: vec![result("single", 1.0)],
        };
        let mut current = result("single", 1.0);
        current.outcomes.blocked += 1;
        current.outcomes.hits -= 1;
        let regressions = compare(&[current], &baseline, 10.0);
        assert_eq!(
            regressions,
            vec![Regression::OutcomesChanged {
                scene: "single".to_string()
            }]
        );
        assert!(format_comparison(&regressions, 10.0).contains("query outcomes changed"));
    }

    #[test]
    fn test_baseline_json_roundtrip() {
        let dir = std::env::temp_dir().join(format!("probelight-bench-{}", std::process::id()));
        let path = dir.join("baseline.json");
        let baseline = Baseline {
            timestamp: "bench-1".to_string(),
            results: vec![result("single", 1.5)],
        };
        save_baseline(&path, &baseline).expect("write baseline");
        let loaded = load_baseline(&path).expect("read baseline");
        assert_eq!(loaded.results.len(), 1);
        assert_eq!(loaded.results[0].outcomes.hits, 90);
        assert!(load_baseline(&dir.join("missing.json")).is_none());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_markdown_has_row_per_scene() {
        let table = format_markdown(&[result("single", 1.0), result("dense-4", 2.0)]);
        assert_eq!(table.lines().count(), 4);
        assert!(table.contains("| dense-4 | 1 | 27 | 100 | 90 | 2 | 8 |"));
        assert!(format_comparison(&[], 10.0).contains("No regressions"));
    }
}
