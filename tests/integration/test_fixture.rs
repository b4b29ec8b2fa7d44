//! Library behaviour against the shared fixture

use crate::helpers::fixture_graph;
use anyhow::Result;

const MIXED_PATHS: [&str; 7] = [
  "OWNERS",
  "build.sh",
  "bootstrap.sh",
  "common/autoinstallers/temp",
  "projects/folder_A/index.ts",
  "projects/folder_A/README.md",
  "projects/folder_B/sub_module/package.json",
];

#[test]
fn test_project_lookup() -> Result<()> {
  let graph = fixture_graph()?;
  let project = graph.project("A")?;

  assert!(project.dependent_projects.contains(&"A".to_string()));
  assert_eq!(project.included_globs, vec!["projects/folder_A"]);
  assert_eq!(project.excluded_globs, vec!["projects/folder_A/README.md"]);
  assert!(graph.project("Z").is_err());
  Ok(())
}

#[test]
fn test_classify_mixed_paths() -> Result<()> {
  let graph = fixture_graph()?;
  let classification = graph.classify(&MIXED_PATHS);

  let names: Vec<&str> = classification.projects.iter().map(String::as_str).collect();
  assert_eq!(names, vec!["A", "B_subProject"]);
  assert!(classification.unmatched.is_empty());
  assert_eq!(classification.excluded.len(), 5);
  Ok(())
}

#[test]
fn test_impact_order() -> Result<()> {
  let graph = fixture_graph()?;
  let impact = graph.expand_ordered(["A", "B"])?;
  assert_eq!(impact, vec!["A", "B", "E", "G", "H", "F", "M"]);
  Ok(())
}

#[test]
fn test_unowned_paths_force_intersection() -> Result<()> {
  let graph = fixture_graph()?;
  assert!(graph.has_impact_intersection(&MIXED_PATHS[..], &["rush.json", "pnpm-lock.yaml"])?);
  Ok(())
}

#[test]
fn test_shared_dependent_intersects() -> Result<()> {
  let graph = fixture_graph()?;
  assert!(graph.has_impact_intersection(&["projects/folder_A/index.ts"], &["projects/folder_C/index.ts"])?);
  Ok(())
}

#[test]
fn test_disjoint_closures() -> Result<()> {
  let graph = fixture_graph()?;
  assert!(!graph.has_impact_intersection(&["projects/folder_E/index.ts"], &["projects/folder_K/index.ts"])?);
  Ok(())
}

#[test]
fn test_nested_project_wins() -> Result<()> {
  let graph = fixture_graph()?;
  let classification = graph.classify(&["projects/folder_B/sub_module/x.ts", "projects/folder_B/other.ts"]);
  let names: Vec<&str> = classification.projects.iter().map(String::as_str).collect();
  assert_eq!(names, vec!["B", "B_subProject"]);
  Ok(())
}
