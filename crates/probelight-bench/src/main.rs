use std::path::PathBuf;
use std::process;

use probelight_bench::report;
use probelight_bench::runner::BenchmarkRunner;
use probelight_bench::scenes;
use probelight_query::{load_query_config_from_str, QueryConfig, TrilinearMode};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();

    let mut baseline_path: Option<PathBuf> = None;
    let mut output_path: Option<PathBuf> = None;
    let mut config_path: Option<PathBuf> = None;
    let mut regression_threshold = 10.0f64;
    let mut query_count = 100_000u32;
    let mut mode_override: Option<QueryConfig> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--baseline" => {
                i += 1;
                baseline_path = Some(PathBuf::from(arg_value(&args, i)));
            }
            "--output" => {
                i += 1;
                output_path = Some(PathBuf::from(arg_value(&args, i)));
            }
            "--config" => {
                i += 1;
                config_path = Some(PathBuf::from(arg_value(&args, i)));
            }
            "--regression-threshold" => {
                i += 1;
                regression_threshold = parse_or_exit(arg_value(&args, i), "--regression-threshold");
            }
            "--queries" => {
                i += 1;
                query_count = parse_or_exit(arg_value(&args, i), "--queries");
            }
            "--nearest" => mode_override = Some(QueryConfig::nearest()),
            "--blend" => mode_override = Some(QueryConfig::trilinear(TrilinearMode::Blend)),
            "--help" | "-h" => {
                eprintln!("Usage: bench-runner [OPTIONS]");
                eprintln!("  --baseline <path>              Load baseline JSON for comparison");
                eprintln!("  --output <path>                Save current results as JSON baseline");
                eprintln!("  --config <path>                Query config RON file");
                eprintln!(
                    "  --regression-threshold <pct>   Regression threshold percentage (default: 10)"
                );
                eprintln!("  --queries <n>                  Queries per scene (default: 100000)");
                eprintln!("  --nearest                      Nearest-corner sampling");
                eprintln!("  --blend                        Full trilinear blend");
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                process::exit(1);
            }
        }
        i += 1;
    }

    let config = match (mode_override, config_path) {
        (Some(config), _) => config,
        (None, Some(path)) => load_config(&path),
        (None, None) => QueryConfig::trilinear(TrilinearMode::LegacyCorner0),
    };
    log::info!("Query config: {config:?}");

    let runner = BenchmarkRunner::new(config, query_count);
    let mut results = Vec::new();
    for scene in &scenes::standard_scenes() {
        match runner.run_scene(scene) {
            Ok(result) => results.push(result),
            Err(e) => {
                log::error!("Scene '{}' failed to build: {e}", scene.name);
                process::exit(1);
            }
        }
    }

    println!("\n## Probe Query Benchmark\n");
    println!("{}", report::format_markdown(&results));

    if let Some(ref path) = output_path {
        let baseline = report::Baseline {
            timestamp: format!("bench-{}", process::id()),
            results: results.clone(),
        };
        if let Err(e) = report::save_baseline(path, &baseline) {
            log::error!("Failed to save baseline to {}: {e}", path.display());
            process::exit(1);
        }
        log::info!("Saved baseline to {}", path.display());
    }

    if let Some(ref path) = baseline_path {
        if let Some(baseline) = report::load_baseline(path) {
            let regressions = report::compare(&results, &baseline, regression_threshold);
            println!(
                "{}",
                report::format_comparison(&regressions, regression_threshold)
            );
            if !regressions.is_empty() {
                eprintln!(
                    "ERROR: {} regressions detected, exiting with code 1",
                    regressions.len()
                );
                process::exit(1);
            }
        } else {
            log::warn!("Baseline file not found: {}", path.display());
        }
    }

    log::info!("Benchmark complete.");
}

fn arg_value(args: &[String], i: usize) -> &str {
    match args.get(i) {
        Some(value) => value.as_str(),
        None => {
            eprintln!("Missing value for {}", args[i - 1]);
            process::exit(1);
        }
    }
}

fn parse_or_exit<T: std::str::FromStr>(value: &str, flag: &str) -> T {
    value.parse().unwrap_or_else(|_| {
        eprintln!("invalid {flag} value: {value}");
        process::exit(1);
    })
}

fn load_config(path: &std::path::Path) -> QueryConfig {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Failed to read {}: {e}", path.display());
            process::exit(1);
        }
    };
    match load_query_config_from_str(&text) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}
