//! Integration tests for `impact-graph check` and `graph`

use crate::helpers::{TestWorkspace, run_impact_graph, run_impact_graph_raw, stdout};
use anyhow::Result;

#[test]
fn test_check_fixture_passes() -> Result<()> {
  let ws = TestWorkspace::with_fixture()?;
  let output = run_impact_graph(&ws.path, &["check"])?;

  let out = stdout(&output);
  assert!(out.contains("Summary: 4/4 checks passed"), "{out}");
  assert!(
    out.contains("• integrity: Every project has a name and every dependent project is defined"),
    "{out}"
  );
  assert!(out.contains("• graph-cycles: Report impact cycles between projects"), "{out}");
  Ok(())
}

#[test]
fn test_check_lists_every_dangling_reference() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_config(
    "impact-graph.toml",
    r#"
[projects.A]
includedGlobs = ["a/"]
dependentProjects = ["A", "ghost"]

[projects.B]
includedGlobs = ["b/"]
dependentProjects = ["B", "phantom"]
"#,
  )?;

  let output = run_impact_graph_raw(&ws.path, &["check", "--json"])?;
  assert_eq!(output.status.code(), Some(3));

  let results: serde_json::Value = serde_json::from_str(&stdout(&output))?;
  let integrity = &results[0];
  assert_eq!(integrity["check_name"], "integrity");
  assert_eq!(integrity["passed"], false);
  assert_eq!(integrity["details"].as_array().map(Vec::len), Some(2));
  Ok(())
}

#[test]
fn test_query_rejects_invalid_config() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_config(
    "impact-graph.toml",
    "[projects.A]\nincludedGlobs = [\"a/\"]\ndependentProjects = [\"ghost\"]\n",
  )?;

  let output = run_impact_graph_raw(&ws.path, &["lookup", "a/x"])?;
  assert!(!output.status.success());
  assert!(String::from_utf8_lossy(&output.stderr).contains("ghost"));
  Ok(())
}

#[test]
fn test_graph_topological_order() -> Result<()> {
  let ws = TestWorkspace::with_fixture()?;
  let output = run_impact_graph(&ws.path, &["graph"])?;

  let order: Vec<String> = stdout(&output)
    .lines()
    .filter_map(|line| line.split_once(". ").map(|(_, name)| name.to_string()))
    .collect();
  let pos = |name: &str| order.iter().position(|n| n == name);

  assert_eq!(order.len(), 10);
  assert!(pos("A") < pos("E"));
  assert!(pos("E") < pos("F"));
  assert!(pos("B_subProject") < pos("B"));
  assert!(pos("B") < pos("H"));
  Ok(())
}

#[test]
fn test_graph_dot() -> Result<()> {
  let ws = TestWorkspace::with_fixture()?;
  let output = run_impact_graph(&ws.path, &["graph", "--dot"])?;

  let out = stdout(&output);
  assert!(out.starts_with("digraph"), "{out}");
  assert!(out.contains("B_subProject"));
  Ok(())
}
