//! Synthetic monorepo generator
//!
//! Builds a random DAG of `node_count` projects with exactly `edge_count` impact edges
//! (self-loops not counted), then renders it as an [`ImpactGraphConfig`].
//!
//! Edges always run from a lower id to a higher id (node `j` depends on node `i` with
//! `i < j`), which keeps the graph acyclic. A chain `0 ← 1 ← … ← n-1` is laid down first
//! so every project is connected.

use crate::core::config::{ImpactGraphConfig, ProjectConfig};
use crate::core::error::{ImpactError, ImpactResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Global exclusions used in every generated configuration
pub const GENERATED_GLOBAL_EXCLUDES: [&str; 4] = ["OWNERS", "build.sh", "bootstrap.sh", "common/autoinstallers"];

/// One generated project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DagNode {
  pub id: usize,

  /// Lower-id nodes this node depends on
  pub dependencies: Vec<usize>,

  /// Nodes impacted by this one, starting with the node itself
  pub dependents: Vec<usize>,
}

/// Name of the generated project with the given id
pub fn project_name(id: usize) -> String {
  format!("project_{}", id)
}

/// Root folder of the generated project with the given id
pub fn project_folder(id: usize) -> String {
  format!("projects/folder_{}/", id)
}

/// Largest edge count an `n`-node DAG can hold
pub fn max_edges(node_count: usize) -> usize {
  node_count.saturating_mul(node_count.saturating_sub(1)) / 2
}

/// Generate a random DAG.
///
/// # Errors
/// - `node_count` is zero
/// - `edge_count < node_count - 1` (not enough edges to connect all nodes)
/// - `edge_count > node_count * (node_count - 1) / 2` (too many edges)
pub fn generate_dag<R: Rng + ?Sized>(node_count: usize, edge_count: usize, rng: &mut R) -> ImpactResult<Vec<DagNode>> {
  if node_count == 0 {
    return Err(ImpactError::message("Node count must be at least 1"));
  }
  if edge_count < node_count - 1 {
    return Err(ImpactError::with_help(
      format!(
        "Edges are not enough to connect all nodes ({} edges for {} nodes)",
        edge_count, node_count
      ),
      format!("Use at least {} edges", node_count - 1),
    ));
  }
  if edge_count > max_edges(node_count) {
    return Err(ImpactError::with_help(
      format!("Too many edges ({} edges for {} nodes)", edge_count, node_count),
      format!("Use at most {} edges", max_edges(node_count)),
    ));
  }

  let mut nodes: Vec<DagNode> = (0..node_count)
    .map(|id| DagNode {
      id,
      dependencies: Vec::new(),
      dependents: vec![id],
    })
    .collect();

  for i in 0..node_count - 1 {
    add_edge(&mut nodes, i + 1, i);
  }

  let mut remaining = edge_count - (node_count - 1);
  let miss_budget = node_count.saturating_mul(16).max(64);
  let mut misses = 0;

  while remaining > 0 {
    let from = rng.random_range(1..node_count);
    let to = rng.random_range(0..from);

    if nodes[from].dependencies.contains(&to) {
      misses += 1;
      if misses > miss_budget {
        // Dense graph: stop sampling and draw from the missing pairs directly
        fill_missing(&mut nodes, remaining, rng);
        break;
      }
      continue;
    }

    add_edge(&mut nodes, from, to);
    remaining -= 1;
    misses = 0;
  }

  Ok(nodes)
}

fn add_edge(nodes: &mut [DagNode], from: usize, to: usize) {
  nodes[from].dependencies.push(to);
  nodes[to].dependents.push(from);
}

fn fill_missing<R: Rng + ?Sized>(nodes: &mut [DagNode], count: usize, rng: &mut R) {
  let mut missing: Vec<(usize, usize)> = (1..nodes.len())
    .flat_map(|from| (0..from).map(move |to| (from, to)))
    .filter(|(from, to)| !nodes[*from].dependencies.contains(to))
    .collect();
  missing.shuffle(rng);

  for (from, to) in missing.into_iter().take(count) {
    add_edge(nodes, from, to);
  }
}

/// Render generated nodes as a configuration.
pub fn synthetic_config(nodes: &[DagNode]) -> ImpactGraphConfig {
  let mut config = ImpactGraphConfig {
    global_excluded_globs: GENERATED_GLOBAL_EXCLUDES.iter().map(|s| s.to_string()).collect(),
    ..Default::default()
  };

  for node in nodes {
    let folder = project_folder(node.id);
    config.projects.insert(
      project_name(node.id),
      ProjectConfig {
        excluded_globs: vec![format!("{}README.md", folder)],
        included_globs: vec![folder],
        dependent_projects: node.dependents.iter().map(|id| project_name(*id)).collect(),
      },
    );
  }

  config
}

/// Generate a reproducible synthetic configuration from a seed.
pub fn generate_config(node_count: usize, edge_count: usize, seed: u64) -> ImpactResult<ImpactGraphConfig> {
  let mut rng = StdRng::seed_from_u64(seed);
  let nodes = generate_dag(node_count, edge_count, &mut rng)?;
  tracing::debug!(node_count, edge_count, seed, "generated synthetic impact graph");
  Ok(synthetic_config(&nodes))
}

/// Changed-path list touching the first `count` generated projects, highest id first.
pub fn generate_paths(count: usize) -> Vec<String> {
  (0..count)
    .rev()
    .map(|id| format!("{}index.ts", project_folder(id)))
    .collect()
}
