//! `impact-graph graph` - print the impact relation
//!
//! Default output is a topological order (every project before the projects it impacts).
//! `--dot` emits Graphviz instead, which also works for cyclic graphs.

use impact_graph::core::config::ImpactGraphConfig;
use impact_graph::core::context::ImpactContext;
use impact_graph::core::error::ImpactResult;
use impact_graph::graph::DependencyGraph;
use std::path::Path;

/// Run the graph command
pub fn run_graph(root: &Path, explicit: Option<&Path>, dot: bool) -> ImpactResult<()> {
  let config_path = ImpactContext::resolve_config_path(root, explicit)?;
  let config = ImpactGraphConfig::read_from(&config_path)?;
  let graph = DependencyGraph::from_config(&config);

  tracing::debug!(
    nodes = graph.node_count(),
    edges = graph.edge_count(),
    "built dependency graph"
  );

  if dot {
    print!("{}", graph.to_dot());
    return Ok(());
  }

  for (i, name) in graph.topological_order()?.iter().enumerate() {
    println!("{:>4}. {}", i + 1, name);
  }

  Ok(())
}
