//! Integration tests for `impact-graph generate` and `bench`

use crate::helpers::{TestWorkspace, run_impact_graph, stdout};
use anyhow::Result;
use impact_graph::ImpactGraphConfig;

#[test]
fn test_generate_writes_loadable_config() -> Result<()> {
  let ws = TestWorkspace::new()?;
  run_impact_graph(
    &ws.path,
    &["generate", "--nodes", "30", "--edges", "60", "--seed", "7", "-o", "impact-graph.toml"],
  )?;

  let config = ImpactGraphConfig::load(&ws.path)?;
  assert_eq!(config.projects.len(), 30);

  // The generated file drives the query commands directly
  run_impact_graph(&ws.path, &["check"])?;
  let output = run_impact_graph(
    &ws.path,
    &["lookup", "projects/folder_29/index.ts", "--format", "names"],
  )?;
  assert_eq!(stdout(&output).trim(), "project_29");
  Ok(())
}

#[test]
fn test_generate_is_deterministic() -> Result<()> {
  let ws = TestWorkspace::new()?;
  let first = run_impact_graph(&ws.path, &["generate", "--nodes", "20", "--edges", "40", "--seed", "3"])?;
  let second = run_impact_graph(&ws.path, &["generate", "--nodes", "20", "--edges", "40", "--seed", "3"])?;

  assert_eq!(stdout(&first), stdout(&second));
  Ok(())
}

#[test]
fn test_generate_rejects_too_many_edges() -> Result<()> {
  let ws = TestWorkspace::new()?;
  let output = crate::helpers::run_impact_graph_raw(&ws.path, &["generate", "--nodes", "4", "--edges", "7"])?;
  assert!(!output.status.success());
  Ok(())
}

#[test]
fn test_bench_quick_report() -> Result<()> {
  let ws = TestWorkspace::new()?;
  run_impact_graph(&ws.path, &["bench", "--quick", "--quiet", "-o", "report.json"])?;

  let report: serde_json::Value = serde_json::from_str(&ws.read_file("report.json")?)?;
  let results = report["results"].as_array().map(Vec::len);
  assert_eq!(results, Some(3));
  assert!(report["results"][0]["queryTimeMs"].is_number());
  Ok(())
}
