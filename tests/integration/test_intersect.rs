//! Integration tests for `impact-graph intersect`

use crate::helpers::{TestWorkspace, run_impact_graph, run_impact_graph_raw, stdout};
use anyhow::Result;

#[test]
fn test_intersect_shared_dependent() -> Result<()> {
  let ws = TestWorkspace::with_fixture()?;
  let output = run_impact_graph(
    &ws.path,
    &["intersect", "-a", "projects/folder_A/index.ts", "-b", "projects/folder_C/index.ts"],
  )?;

  let out = stdout(&output);
  assert!(out.contains("Changesets intersect"), "{out}");
  assert!(out.contains("E"), "{out}");
  Ok(())
}

#[test]
fn test_intersect_disjoint() -> Result<()> {
  let ws = TestWorkspace::with_fixture()?;
  let output = run_impact_graph(
    &ws.path,
    &["intersect", "-a", "projects/folder_E/index.ts", "-b", "projects/folder_K/index.ts"],
  )?;

  assert!(stdout(&output).contains("No impact intersection"));
  Ok(())
}

#[test]
fn test_intersect_json_unmatched() -> Result<()> {
  let ws = TestWorkspace::with_fixture()?;
  let output = run_impact_graph(
    &ws.path,
    &["intersect", "-a", "projects/folder_A/index.ts", "-b", "rush.json", "--format", "json"],
  )?;

  let report: serde_json::Value = serde_json::from_str(&stdout(&output))?;
  assert_eq!(report["verdict"]["kind"], "unmatched");
  assert_eq!(report["verdict"]["b"][0], "rush.json");
  Ok(())
}

#[test]
fn test_intersect_exit_code() -> Result<()> {
  let ws = TestWorkspace::with_fixture()?;

  let overlap = run_impact_graph_raw(
    &ws.path,
    &["intersect", "-a", "projects/folder_A/x", "-b", "projects/folder_C/y", "--exit-code"],
  )?;
  assert_eq!(overlap.status.code(), Some(1));

  let disjoint = run_impact_graph_raw(
    &ws.path,
    &["intersect", "-a", "projects/folder_E/x", "-b", "projects/folder_K/y", "--exit-code"],
  )?;
  assert_eq!(disjoint.status.code(), Some(0));
  Ok(())
}

#[test]
fn test_intersect_explicit_json_config() -> Result<()> {
  let ws = TestWorkspace::new()?;
  let config = ws.write_config(
    "graph.json",
    r#"{
  "projects": {
    "api": { "includedGlobs": ["services/api/"], "dependentProjects": ["api", "web"] },
    "web": { "includedGlobs": ["apps/web/"], "dependentProjects": ["web"] }
  }
}"#,
  )?;
  let config = config.to_string_lossy().into_owned();

  let output = run_impact_graph(
    &ws.path,
    &[
      "--config",
      &config,
      "intersect",
      "-a",
      "services/api/main.go",
      "-b",
      "apps/web/index.tsx",
      "--format",
      "names",
    ],
  )?;
  assert_eq!(stdout(&output).trim(), "web");
  Ok(())
}

#[test]
fn test_missing_config_is_user_error() -> Result<()> {
  let ws = TestWorkspace::new()?;
  let output = run_impact_graph_raw(&ws.path, &["intersect", "-a", "x", "-b", "y"])?;

  assert_eq!(output.status.code(), Some(1));
  assert!(String::from_utf8_lossy(&output.stderr).contains("impact-graph.toml"));
  Ok(())
}
