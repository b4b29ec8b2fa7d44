//! Affected project analysis
//!
//! Given a set of changed files, determine:
//! - Which projects directly own those files
//! - Which projects transitively depend on them
//! - Which files no project owns (unknown impact)

use super::classify::Classification;
use super::impact_graph::ImpactGraph;
use crate::core::error::ImpactResult;
use serde::Serialize;
use std::collections::BTreeSet;

/// Set of affected projects from file changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AffectedSet {
  /// Projects directly owning changed files
  pub direct: BTreeSet<String>,

  /// Projects reached through `dependentProjects`, excluding the direct ones
  pub dependents: BTreeSet<String>,

  /// Full impact closure in BFS discovery order (direct + dependents)
  pub closure: Vec<String>,
}

impl AffectedSet {
  pub fn is_empty(&self) -> bool {
    self.closure.is_empty()
  }

  pub fn total_affected(&self) -> usize {
    self.closure.len()
  }
}

/// Complete affected analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AffectedAnalysis {
  /// Files that changed
  pub changed_files: Vec<String>,

  /// Files no project owns; when non-empty the impact is unknown
  pub unmatched: Vec<String>,

  /// Files dropped by exclusion globs
  pub excluded: Vec<String>,

  /// Impact set
  pub impact: AffectedSet,
}

impl AffectedAnalysis {
  /// False when some changed file belongs to no project
  pub fn is_complete(&self) -> bool {
    self.unmatched.is_empty()
  }
}

/// Analyze which projects are affected by file changes.
///
/// Algorithm:
/// 1. Map files → owning projects (exclusions first, deepest glob wins)
/// 2. Expand the owning projects to their impact closure
/// 3. Split the closure into direct and dependent projects
///
/// Unmatched files are reported, not treated as errors.
pub fn analyze<S: AsRef<str>>(graph: &ImpactGraph, changed_files: &[S]) -> ImpactResult<AffectedAnalysis> {
  let Classification {
    projects,
    unmatched,
    excluded,
  } = graph.classify(changed_files);

  let impact = impact_of(graph, &projects)?;

  Ok(AffectedAnalysis {
    changed_files: changed_files.iter().map(|p| p.as_ref().to_string()).collect(),
    unmatched,
    excluded,
    impact,
  })
}

/// Impact of an explicit list of project names (no path classification).
pub fn analyze_projects<S: AsRef<str>>(graph: &ImpactGraph, projects: &[S]) -> ImpactResult<AffectedSet> {
  let closure = graph.expand_ordered(projects.iter().map(|p| p.as_ref()))?;
  let direct: BTreeSet<String> = projects.iter().map(|p| p.as_ref().to_string()).collect();
  Ok(split_closure(direct, closure))
}

fn impact_of(graph: &ImpactGraph, direct: &BTreeSet<String>) -> ImpactResult<AffectedSet> {
  if direct.is_empty() {
    return Ok(AffectedSet::default());
  }

  let closure = graph.expand_ordered(direct)?;
  Ok(split_closure(direct.clone(), closure))
}

fn split_closure(direct: BTreeSet<String>, closure: Vec<String>) -> AffectedSet {
  let dependents = closure.iter().filter(|p| !direct.contains(*p)).cloned().collect();
  AffectedSet {
    direct,
    dependents,
    closure,
  }
}

/// Sorted closure, convenient for CI job lists.
pub fn affected_projects<S: AsRef<str>>(graph: &ImpactGraph, changed_files: &[S]) -> ImpactResult<Vec<String>> {
  let analysis = analyze(graph, changed_files)?;
  let mut targets = analysis.impact.closure;
  targets.sort();
  Ok(targets)
}
