//! Changed path → owning project
//!
//! Globs are plain string prefixes. A path is first checked against the merged exclusion
//! list (global globs plus every project's excluded globs); an excluded path is dropped and
//! never reported as unmatched. Surviving paths go to the project whose matching glob has
//! the most `/`-separated segments, so a nested project beats its ancestor.

use crate::core::config::ImpactGraphConfig;
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};

/// Outcome of classifying a single path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathClass<'a> {
  /// Matched an exclusion glob; inert
  Excluded { glob: &'a str },

  /// Owned by `project` through `glob`
  Owned { project: &'a str, glob: &'a str },

  /// Neither excluded nor owned
  Unmatched,
}

/// Outcome of classifying a list of paths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Classification {
  /// Owning projects, deduplicated
  pub projects: BTreeSet<String>,

  /// Paths owned by no project and not excluded
  pub unmatched: Vec<String>,

  /// Paths dropped by an exclusion glob
  pub excluded: Vec<String>,
}

impl Classification {
  /// True when every surviving path resolved to a project
  pub fn is_complete(&self) -> bool {
    self.unmatched.is_empty()
  }
}

/// Merge global and per-project exclusions, keeping first occurrence order.
pub fn merge_excluded_globs(config: &ImpactGraphConfig) -> Vec<String> {
  let mut seen = HashSet::new();
  config
    .global_excluded_globs
    .iter()
    .chain(config.projects.values().flat_map(|p| p.excluded_globs.iter()))
    .filter(|glob| seen.insert(glob.as_str()))
    .cloned()
    .collect()
}

/// Number of `/`-separated segments in a glob (`"a/b/"` → 3)
fn glob_depth(glob: &str) -> usize {
  glob.split('/').count()
}

/// Classify one path.
///
/// Exclusions win over inclusions. Among matching inclusion globs the deepest wins, then the
/// longest (`a/b` beats `a/`); on a full tie the first one seen (projects in name order, globs
/// in list order) is kept.
pub fn classify_path<'a>(config: &'a ImpactGraphConfig, excluded_globs: &'a [String], path: &str) -> PathClass<'a> {
  if let Some(glob) = excluded_globs.iter().find(|glob| path.starts_with(glob.as_str())) {
    return PathClass::Excluded { glob };
  }

  let mut best: Option<(&'a str, &'a str, (usize, usize))> = None;

  for (name, project) in &config.projects {
    for glob in &project.included_globs {
      if !path.starts_with(glob.as_str()) {
        continue;
      }
      let rank = (glob_depth(glob), glob.len());
      if best.is_none_or(|(_, _, best_rank)| rank > best_rank) {
        best = Some((name.as_str(), glob.as_str(), rank));
      }
    }
  }

  match best {
    Some((project, glob, _)) => PathClass::Owned { project, glob },
    None => PathClass::Unmatched,
  }
}

/// Classify every path in `paths`.
pub fn classify<S: AsRef<str>>(config: &ImpactGraphConfig, excluded_globs: &[String], paths: &[S]) -> Classification {
  let mut result = Classification::default();

  for path in paths {
    let path = path.as_ref();
    match classify_path(config, excluded_globs, path) {
      PathClass::Excluded { .. } => result.excluded.push(path.to_string()),
      PathClass::Owned { project, .. } => {
        result.projects.insert(project.to_string());
      }
      PathClass::Unmatched => result.unmatched.push(path.to_string()),
    }
  }

  tracing::debug!(
    paths = paths.len(),
    projects = result.projects.len(),
    unmatched = result.unmatched.len(),
    excluded = result.excluded.len(),
    "classified changed paths"
  );

  result
}
