//! Structural view of the impact relation, built with petgraph
//!
//! ## Graph Structure
//!
//! - **Directed Graph**: `A → B` means "a change in A impacts B" (B is in A's `dependentProjects`)
//! - **Nodes**: projects
//! - **Edges**: `dependentProjects` entries, self-loops dropped
//! - **Algorithms**: SCC (cycle report), toposort (impact order), DOT export
//!
//! The engine in [`super::impact_graph`] does not need any of this; the `check` and `graph`
//! commands do.

use crate::core::config::ImpactGraphConfig;
use crate::core::error::{ImpactError, ImpactResult};
use petgraph::Direction;
use petgraph::algo;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

/// Project impact graph as a petgraph `DiGraph`.
pub struct DependencyGraph {
  /// Node weight: project name
  graph: DiGraph<String, ()>,

  /// Index: project name → node index
  name_to_node: HashMap<String, NodeIndex>,
}

impl DependencyGraph {
  /// Build from a configuration.
  ///
  /// Self-loops are conventional and carry no information, so they are skipped.
  /// Entries naming undefined projects are skipped as well; use
  /// [`ImpactGraphConfig::dangling_dependencies`] to report those.
  pub fn from_config(config: &ImpactGraphConfig) -> Self {
    let mut graph = DiGraph::new();
    let mut name_to_node = HashMap::new();

    for name in config.projects.keys() {
      let idx = graph.add_node(name.clone());
      name_to_node.insert(name.clone(), idx);
    }

    for (name, project) in &config.projects {
      let from_idx = name_to_node[name];
      for dependent in &project.dependent_projects {
        if dependent == name {
          continue;
        }
        if let Some(to_idx) = name_to_node.get(dependent) {
          graph.update_edge(from_idx, *to_idx, ());
        }
      }
    }

    Self { graph, name_to_node }
  }

  pub fn node_count(&self) -> usize {
    self.graph.node_count()
  }

  /// Number of distinct non-self edges
  pub fn edge_count(&self) -> usize {
    self.graph.edge_count()
  }

  /// Projects directly impacted by `name` (excluding itself)
  pub fn direct_dependents(&self, name: &str) -> ImpactResult<Vec<String>> {
    let node_idx = self.find_node(name)?;

    let mut dependents: Vec<String> = self
      .graph
      .neighbors_directed(node_idx, Direction::Outgoing)
      .map(|idx| self.graph[idx].clone())
      .collect();

    dependents.sort();
    Ok(dependents)
  }

  /// Projects whose changes directly impact `name`
  pub fn direct_dependencies(&self, name: &str) -> ImpactResult<Vec<String>> {
    let node_idx = self.find_node(name)?;

    let mut deps: Vec<String> = self
      .graph
      .neighbors_directed(node_idx, Direction::Incoming)
      .map(|idx| self.graph[idx].clone())
      .collect();

    deps.sort();
    Ok(deps)
  }

  /// Detect cycles using Tarjan's SCC algorithm.
  ///
  /// Returns strongly connected components with more than one project, each sorted.
  pub fn find_cycles(&self) -> Vec<Vec<String>> {
    let mut cycles: Vec<Vec<String>> = algo::tarjan_scc(&self.graph)
      .into_iter()
      .filter(|component| component.len() > 1)
      .map(|component| {
        let mut names: Vec<String> = component.into_iter().map(|idx| self.graph[idx].clone()).collect();
        names.sort();
        names
      })
      .collect();

    cycles.sort();
    cycles
  }

  /// Projects ordered so that every project precedes the projects it impacts.
  ///
  /// # Errors
  /// Returns error if the impact relation contains a cycle.
  pub fn topological_order(&self) -> ImpactResult<Vec<String>> {
    let topo = algo::toposort(&self.graph, None).map_err(|cycle| {
      let name = &self.graph[cycle.node_id()];
      ImpactError::with_help(
        format!("Impact cycle detected involving project '{}'", name),
        "Run `impact-graph check` to list every cycle.",
      )
    })?;

    Ok(topo.into_iter().map(|idx| self.graph[idx].clone()).collect())
  }

  /// Export graph to DOT format (Graphviz).
  ///
  /// # Example
  /// ```bash
  /// impact-graph graph --dot > impact.dot
  /// dot -Tpng impact.dot -o impact.png
  /// ```
  pub fn to_dot(&self) -> String {
    use petgraph::dot::{Config, Dot};

    let dot = Dot::with_attr_getters(
      &self.graph,
      &[Config::EdgeNoLabel, Config::NodeNoLabel],
      &|_, _| String::new(),
      &|_, (_idx, name)| format!("label=\"{}\" shape=box", name),
    );

    format!("{:?}", dot)
  }

  fn find_node(&self, name: &str) -> ImpactResult<NodeIndex> {
    self.name_to_node.get(name).copied().ok_or_else(|| {
      let mut available: Vec<_> = self.name_to_node.keys().cloned().collect();
      available.sort();
      ImpactError::message(format!(
        "Project '{}' not found. Available projects: {}",
        name,
        available.join(", ")
      ))
    })
  }
}
