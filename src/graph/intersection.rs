//! Do two changesets impact overlapping projects?
//!
//! Algorithm:
//! 1. Classify both path lists
//! 2. Any unmatched path on either side → assume intersection, stop
//! 3. Expand both project sets to their impact closures
//! 4. Intersect the closures
//!
//! Step 2 is the conservative fallback: a path no project owns has unknown blast radius,
//! so the two changesets can not be proven independent.

use super::classify::Classification;
use super::impact_graph::ImpactGraph;
use crate::core::error::ImpactResult;
use serde::Serialize;
use std::collections::BTreeSet;

/// Why two changesets do or do not intersect
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Verdict {
  /// At least one side has paths no project owns
  Unmatched { a: Vec<String>, b: Vec<String> },

  /// Both closures contain these projects
  Overlap { shared: BTreeSet<String> },

  /// Closures are disjoint; safe to run independently
  Disjoint,
}

impl Verdict {
  /// True unless the changesets were proven independent
  pub fn intersects(&self) -> bool {
    !matches!(self, Verdict::Disjoint)
  }
}

/// Everything computed while answering an intersection query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntersectionReport {
  pub a: Classification,
  pub b: Classification,

  /// `None` when the unmatched fallback short-circuited before expansion
  pub closure_a: Option<BTreeSet<String>>,
  pub closure_b: Option<BTreeSet<String>>,

  pub verdict: Verdict,
}

/// Answer an intersection query against `graph`.
///
/// # Errors
/// Only expansion can fail (dangling `dependentProjects` entry). When the fallback fires,
/// nothing is expanded and the call always succeeds.
pub fn intersect<S: AsRef<str>>(
  graph: &ImpactGraph,
  paths_a: &[S],
  paths_b: &[S],
) -> ImpactResult<IntersectionReport> {
  let a = graph.classify(paths_a);
  let b = graph.classify(paths_b);

  if !a.is_complete() || !b.is_complete() {
    tracing::warn!(
      unmatched_a = a.unmatched.len(),
      unmatched_b = b.unmatched.len(),
      "unmatched paths present, assuming impact intersection"
    );
    let verdict = Verdict::Unmatched {
      a: a.unmatched.clone(),
      b: b.unmatched.clone(),
    };
    return Ok(IntersectionReport {
      a,
      b,
      closure_a: None,
      closure_b: None,
      verdict,
    });
  }

  let closure_a = graph.expand(&a.projects)?;
  let closure_b = graph.expand(&b.projects)?;

  let shared: BTreeSet<String> = closure_a.intersection(&closure_b).cloned().collect();
  let verdict = if shared.is_empty() {
    Verdict::Disjoint
  } else {
    Verdict::Overlap { shared }
  };

  tracing::debug!(
    closure_a = closure_a.len(),
    closure_b = closure_b.len(),
    intersects = verdict.intersects(),
    "computed impact intersection"
  );

  Ok(IntersectionReport {
    a,
    b,
    closure_a: Some(closure_a),
    closure_b: Some(closure_b),
    verdict,
  })
}
