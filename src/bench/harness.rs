//! Performance harness
//!
//! Runs the intersection oracle over generated graphs of increasing size and records how
//! long loading and querying took. Each scenario:
//!
//! 1. Generate a DAG and render it to TOML (not timed)
//! 2. Parse + validate the TOML and build the engine (timed as `load`)
//! 3. Answer one intersection query over generated path lists (timed as `query`)

use super::dag;
use crate::core::config::ImpactGraphConfig;
use crate::core::error::{ImpactResult, ResultExt};
use crate::graph::ImpactGraph;
use crate::ui::progress::ScenarioProgress;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Instant;

/// One point of the benchmark matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
  pub node_count: usize,
  pub edge_count: usize,
  pub path_count_a: usize,
  pub path_count_b: usize,
}

impl Scenario {
  pub const fn new(node_count: usize, edge_count: usize, path_count_a: usize, path_count_b: usize) -> Self {
    Self {
      node_count,
      edge_count,
      path_count_a,
      path_count_b,
    }
  }
}

/// Full matrix: three graph sizes, four changeset sizes each
pub fn default_matrix() -> Vec<Scenario> {
  let graphs = [(1000, 5000), (2000, 10000), (3000, 100_000)];
  let paths = [1, 10, 100, 1000];

  graphs
    .iter()
    .flat_map(|(nodes, edges)| paths.iter().map(move |p| Scenario::new(*nodes, *edges, *p, *p)))
    .collect()
}

/// Small matrix for smoke runs
pub fn quick_matrix() -> Vec<Scenario> {
  vec![
    Scenario::new(50, 200, 1, 1),
    Scenario::new(50, 200, 10, 10),
    Scenario::new(200, 1000, 50, 50),
  ]
}

/// Measurements for one scenario
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioResult {
  #[serde(flatten)]
  pub scenario: Scenario,
  pub has_impact_intersection: bool,
  pub load_time_ms: f64,
  pub query_time_ms: f64,
  pub execute_time: String,
}

/// Benchmark report written by `impact-graph bench`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchReport {
  pub generated_at: DateTime<Utc>,
  pub seed: u64,
  pub results: Vec<ScenarioResult>,
}

/// Run every scenario in order.
///
/// Scenario `i` uses seed `seed + i` so reports are reproducible.
pub fn run(scenarios: &[Scenario], seed: u64, show_progress: bool) -> ImpactResult<BenchReport> {
  let mut progress = show_progress.then(|| ScenarioProgress::new(scenarios.len(), "Benchmark scenarios"));
  let mut results = Vec::with_capacity(scenarios.len());

  for (i, scenario) in scenarios.iter().enumerate() {
    let result = run_scenario(scenario, seed.wrapping_add(i as u64))
      .with_context(|| format!("Benchmark scenario {} failed: {:?}", i + 1, scenario))?;

    tracing::info!(
      nodes = scenario.node_count,
      edges = scenario.edge_count,
      paths = scenario.path_count_a,
      load_ms = result.load_time_ms,
      query_ms = result.query_time_ms,
      "benchmark scenario finished"
    );

    results.push(result);
    if let Some(progress) = progress.as_mut() {
      progress.inc();
    }
  }

  Ok(BenchReport {
    generated_at: Utc::now(),
    seed,
    results,
  })
}

fn run_scenario(scenario: &Scenario, seed: u64) -> ImpactResult<ScenarioResult> {
  let config = dag::generate_config(scenario.node_count, scenario.edge_count, seed)?;
  let rendered = toml_edit::ser::to_string_pretty(&config)?;
  let paths_a = dag::generate_paths(scenario.path_count_a.min(scenario.node_count));
  let paths_b = dag::generate_paths(scenario.path_count_b.min(scenario.node_count));

  let start = Instant::now();
  let graph = ImpactGraph::new(ImpactGraphConfig::from_toml_str(&rendered)?);
  let loaded = Instant::now();
  let intersects = graph.has_impact_intersection(&paths_a, &paths_b)?;
  let done = Instant::now();

  let load = loaded.duration_since(start);
  let query = done.duration_since(loaded);

  Ok(ScenarioResult {
    scenario: *scenario,
    has_impact_intersection: intersects,
    load_time_ms: load.as_secs_f64() * 1000.0,
    query_time_ms: query.as_secs_f64() * 1000.0,
    execute_time: format!("{:.3}s", (load + query).as_secs_f64()),
  })
}

/// Write the report as pretty JSON
pub fn write_report(report: &BenchReport, path: &Path) -> ImpactResult<()> {
  let content = serde_json::to_string_pretty(report)?;
  fs::write(path, content).with_context(|| format!("Failed to write benchmark report to {}", path.display()))?;
  Ok(())
}
