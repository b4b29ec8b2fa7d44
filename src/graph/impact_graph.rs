//! Impact graph engine
//!
//! # Model
//!
//! - **Projects**: keyed by name, each owning a set of path prefixes
//! - **Edges**: `dependentProjects`, pointing from a project to the projects it impacts
//! - **Closure**: everything reachable from a seed set along those edges, seeds included
//!
//! The engine owns its configuration and never mutates it. The merged exclusion list is
//! computed once in [`ImpactGraph::new`], so a shared `&ImpactGraph` can be queried from
//! several threads with no locking.

use super::classify::{self, Classification, PathClass};
use super::intersection::{self, IntersectionReport};
use crate::core::config::{ImpactGraphConfig, ProjectConfig};
use crate::core::error::{ConfigError, ImpactResult};
use std::collections::{BTreeSet, HashSet, VecDeque};

/// Read-only query engine over an [`ImpactGraphConfig`].
#[derive(Debug, Clone)]
pub struct ImpactGraph {
  config: ImpactGraphConfig,

  /// Global exclusions followed by every project's exclusions, deduplicated
  excluded_globs: Vec<String>,
}

impl ImpactGraph {
  /// Build the engine from an already validated configuration.
  ///
  /// No validation happens here; a dangling reference surfaces as an error from
  /// [`ImpactGraph::expand`] when traversal reaches it.
  pub fn new(config: ImpactGraphConfig) -> Self {
    let excluded_globs = classify::merge_excluded_globs(&config);
    Self { config, excluded_globs }
  }

  pub fn config(&self) -> &ImpactGraphConfig {
    &self.config
  }

  /// Effective exclusion globs, in first-seen order
  pub fn excluded_globs(&self) -> &[String] {
    &self.excluded_globs
  }

  /// Sorted project names
  pub fn project_names(&self) -> Vec<String> {
    self.config.project_names()
  }

  /// Look up a project's configuration by name.
  ///
  /// A missing name is a caller or configuration bug, reported as `ProjectNotFound`.
  pub fn project(&self, name: &str) -> ImpactResult<&ProjectConfig> {
    self.config.projects.get(name).ok_or_else(|| {
      ConfigError::ProjectNotFound {
        name: name.to_string(),
        available: self.project_names(),
      }
      .into()
    })
  }

  /// Classify a single path
  pub fn classify_path(&self, path: &str) -> PathClass<'_> {
    classify::classify_path(&self.config, &self.excluded_globs, path)
  }

  /// Map changed paths to owning projects, collecting unmatched paths.
  pub fn classify<S: AsRef<str>>(&self, paths: &[S]) -> Classification {
    classify::classify(&self.config, &self.excluded_globs, paths)
  }

  /// Impact closure of `seeds` in BFS discovery order (seeds first, as given, minus duplicates).
  ///
  /// Each project is visited once, so cycles and self-loops terminate.
  ///
  /// # Errors
  /// Fails fast with `UnknownProject` when a seed, or any id reached through
  /// `dependentProjects`, has no configuration entry.
  pub fn expand_ordered<I, S>(&self, seeds: I) -> ImpactResult<Vec<String>>
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let mut order = Vec::new();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<(&str, &ProjectConfig)> = VecDeque::new();

    for seed in seeds {
      let seed = seed.as_ref();
      let (name, project) = self
        .config
        .projects
        .get_key_value(seed)
        .ok_or_else(|| ConfigError::UnknownProject {
          name: seed.to_string(),
          referenced_by: None,
        })?;

      if visited.insert(name.as_str()) {
        order.push(name.clone());
        queue.push_back((name.as_str(), project));
      }
    }

    let seed_count = order.len();

    while let Some((current, project)) = queue.pop_front() {
      for dependent in &project.dependent_projects {
        if visited.contains(dependent.as_str()) {
          continue;
        }

        let (name, dependent_project) =
          self
            .config
            .projects
            .get_key_value(dependent)
            .ok_or_else(|| ConfigError::UnknownProject {
              name: dependent.clone(),
              referenced_by: Some(current.to_string()),
            })?;

        visited.insert(name.as_str());
        order.push(name.clone());
        queue.push_back((name.as_str(), dependent_project));
      }
    }

    tracing::debug!(seeds = seed_count, closure = order.len(), "expanded impact closure");

    Ok(order)
  }

  /// Impact closure of `seeds` as a set.
  pub fn expand<I, S>(&self, seeds: I) -> ImpactResult<BTreeSet<String>>
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    Ok(self.expand_ordered(seeds)?.into_iter().collect())
  }

  /// Full intersection verdict for two changesets
  pub fn intersect<S: AsRef<str>>(&self, paths_a: &[S], paths_b: &[S]) -> ImpactResult<IntersectionReport> {
    intersection::intersect(self, paths_a, paths_b)
  }

  /// True when the two changesets might impact a common project.
  ///
  /// Any unmatched path on either side makes this `true` without expanding anything.
  pub fn has_impact_intersection<S: AsRef<str>>(&self, paths_a: &[S], paths_b: &[S]) -> ImpactResult<bool> {
    Ok(self.intersect(paths_a, paths_b)?.verdict.intersects())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::core::error::ImpactError;

  fn project(included: &[&str], dependents: &[&str]) -> ProjectConfig {
    ProjectConfig {
      included_globs: included.iter().map(|s| s.to_string()).collect(),
      excluded_globs: vec![],
      dependent_projects: dependents.iter().map(|s| s.to_string()).collect(),
    }
  }

  fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
  }

  /// A → C, B → C → D, plus an E ↔ F cycle
  fn graph() -> ImpactGraph {
    let mut config = ImpactGraphConfig::default();
    config.projects.insert("A".into(), project(&["projects/a"], &["A", "C"]));
    config.projects.insert("B".into(), project(&["projects/b"], &["B", "C"]));
    config.projects.insert("C".into(), project(&["projects/c"], &["C", "D"]));
    config.projects.insert("D".into(), project(&["projects/d"], &["D"]));
    config.projects.insert("E".into(), project(&["projects/e"], &["E", "F"]));
    config.projects.insert("F".into(), project(&["projects/f"], &["F", "E"]));
    ImpactGraph::new(config)
  }

  #[test]
  fn test_expand_follows_dependents() {
    let mut config = ImpactGraphConfig::default();
    config.projects.insert("A".into(), project(&["a"], &["A", "C"]));
    config.projects.insert("C".into(), project(&["c"], &["C"]));
    let graph = ImpactGraph::new(config);

    assert_eq!(graph.expand(["A"]).unwrap(), set(&["A", "C"]));
  }

  #[test]
  fn test_expand_is_transitive() {
    assert_eq!(graph().expand(["A"]).unwrap(), set(&["A", "C", "D"]));
  }

  #[test]
  fn test_expand_ordered_is_bfs() {
    assert_eq!(graph().expand_ordered(["B", "A"]).unwrap(), vec!["B", "A", "C", "D"]);
  }

  #[test]
  fn test_expand_dedups_seeds() {
    assert_eq!(graph().expand_ordered(["D", "D"]).unwrap(), vec!["D"]);
  }

  #[test]
  fn test_expand_terminates_on_cycle() {
    assert_eq!(graph().expand(["E"]).unwrap(), set(&["E", "F"]));
  }

  #[test]
  fn test_expand_includes_seed_without_self_loop() {
    let mut config = ImpactGraphConfig::default();
    config.projects.insert("A".into(), project(&["a"], &[]));
    assert_eq!(ImpactGraph::new(config).expand(["A"]).unwrap(), set(&["A"]));
  }

  #[test]
  fn test_expand_empty_seeds() {
    let seeds: Vec<String> = vec![];
    assert!(graph().expand(seeds).unwrap().is_empty());
  }

  #[test]
  fn test_expand_self_inclusion_for_every_project() {
    let graph = graph();
    for name in graph.project_names() {
      assert!(graph.expand([name.as_str()]).unwrap().contains(&name));
    }
  }

  #[test]
  fn test_expand_is_idempotent() {
    let graph = graph();
    let once = graph.expand(["A"]).unwrap();
    let twice = graph.expand(&once).unwrap();
    assert_eq!(once, twice);
  }

  #[test]
  fn test_expand_is_monotone() {
    let graph = graph();
    let left = graph.expand(["A"]).unwrap();
    let right = graph.expand(["E"]).unwrap();
    let union = graph.expand(["A", "E"]).unwrap();
    assert!(union.is_superset(&left));
    assert!(union.is_superset(&right));
  }

  #[test]
  fn test_expand_unknown_seed_fails_fast() {
    let err = graph().expand(["Z"]).unwrap_err();
    assert!(matches!(
      err,
      ImpactError::Config(ConfigError::UnknownProject { ref name, referenced_by: None }) if name == "Z"
    ));
  }

  #[test]
  fn test_expand_dangling_dependent_fails_fast() {
    let mut config = ImpactGraphConfig::default();
    config.projects.insert("A".into(), project(&["a"], &["A", "ghost"]));
    let graph = ImpactGraph::new(config);

    let err = graph.expand(["A"]).unwrap_err();
    assert_eq!(
      err.config_error(),
      Some(&ConfigError::UnknownProject {
        name: "ghost".into(),
        referenced_by: Some("A".into()),
      })
    );
  }

  #[test]
  fn test_expand_leaves_config_untouched() {
    let graph = graph();
    let before = graph.config().clone();
    graph.expand(["A", "B", "E"]).unwrap();
    assert_eq!(graph.config(), &before);
  }

  #[test]
  fn test_project_lookup() {
    let graph = graph();
    let a = graph.project("A").unwrap();
    assert_eq!(a.included_globs, vec!["projects/a"]);
    assert!(a.dependent_projects.contains(&"A".to_string()));
  }

  #[test]
  fn test_project_lookup_not_found() {
    let err = graph().project("Z").unwrap_err();
    match err.config_error() {
      Some(ConfigError::ProjectNotFound { name, available }) => {
        assert_eq!(name, "Z");
        assert_eq!(available.len(), 6);
      }
      other => panic!("expected ProjectNotFound, got {other:?}"),
    }
  }

  #[test]
  fn test_graph_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ImpactGraph>();
  }

  #[test]
  fn test_parallel_queries_agree() {
    use rayon::prelude::*;

    let graph = graph();
    let seeds = ["A", "B", "C", "D", "E", "F"];
    let sequential: Vec<BTreeSet<String>> = seeds.iter().map(|s| graph.expand([*s]).unwrap()).collect();
    let parallel: Vec<BTreeSet<String>> = seeds.par_iter().map(|s| graph.expand([*s]).unwrap()).collect();

    assert_eq!(sequential, parallel);
  }
}
