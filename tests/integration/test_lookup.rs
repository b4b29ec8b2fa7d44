//! Integration tests for `impact-graph lookup`, `impact` and `project`

use crate::helpers::{TestWorkspace, run_impact_graph, run_impact_graph_raw, stdout};
use anyhow::Result;

#[test]
fn test_lookup_names_only() -> Result<()> {
  let ws = TestWorkspace::with_fixture()?;
  let output = run_impact_graph(
    &ws.path,
    &["lookup", "projects/folder_A/index.ts", "OWNERS", "--format", "names-only"],
  )?;

  let out = stdout(&output);
  let names: Vec<&str> = out.lines().map(str::trim).collect();
  assert_eq!(names, vec!["A", "E", "F", "G", "M"]);
  Ok(())
}

#[test]
fn test_lookup_text_reports_unmatched() -> Result<()> {
  let ws = TestWorkspace::with_fixture()?;
  let output = run_impact_graph(&ws.path, &["lookup", "rush.json", "projects/folder_K/a.ts"])?;

  let out = stdout(&output);
  assert!(out.contains("Unmatched files: 1"), "{out}");
  assert!(out.contains("rush.json"), "{out}");
  assert!(out.contains("K"), "{out}");
  Ok(())
}

#[test]
fn test_impact_json_closure_order() -> Result<()> {
  let ws = TestWorkspace::with_fixture()?;
  let output = run_impact_graph(&ws.path, &["impact", "A", "B", "--format", "json"])?;

  let impact: serde_json::Value = serde_json::from_str(&stdout(&output))?;
  let closure: Vec<&str> = impact["closure"]
    .as_array()
    .map(|items| items.iter().filter_map(|v| v.as_str()).collect())
    .unwrap_or_default();
  assert_eq!(closure, vec!["A", "B", "E", "G", "H", "F", "M"]);
  Ok(())
}

#[test]
fn test_impact_unknown_project_fails() -> Result<()> {
  let ws = TestWorkspace::with_fixture()?;
  let output = run_impact_graph_raw(&ws.path, &["impact", "Nope"])?;

  assert!(!output.status.success());
  assert!(String::from_utf8_lossy(&output.stderr).contains("Nope"));
  Ok(())
}

#[test]
fn test_project_json() -> Result<()> {
  let ws = TestWorkspace::with_fixture()?;
  let output = run_impact_graph(&ws.path, &["project", "B_subProject", "--json"])?;

  let project: serde_json::Value = serde_json::from_str(&stdout(&output))?;
  assert_eq!(project["name"], "B_subProject");
  assert_eq!(project["includedGlobs"][0], "projects/folder_B/sub_module");
  assert_eq!(project["dependentProjects"][1], "B");
  assert_eq!(project["impacts"], serde_json::json!(["B"]));
  assert_eq!(project["impactedBy"], serde_json::json!([]));
  Ok(())
}

#[test]
fn test_project_shows_direct_edges() -> Result<()> {
  let ws = TestWorkspace::with_fixture()?;
  let output = run_impact_graph(&ws.path, &["project", "B"])?;

  let out = stdout(&output);
  assert!(out.contains("Directly impacts: 1\n  H"), "{out}");
  assert!(out.contains("Directly impacted by: 1\n  B_subProject"), "{out}");
  Ok(())
}
