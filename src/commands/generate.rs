//! `impact-graph generate` - write a synthetic configuration
//!
//! Projects are named `project_{id}` and own `projects/folder_{id}/`. Edges always point from
//! a lower id to a higher one, so the result is acyclic.

use impact_graph::bench::dag;
use impact_graph::core::error::ImpactResult;
use std::path::PathBuf;

/// Run the generate command
///
/// Without `--output` the configuration is printed to stdout as TOML.
pub fn run_generate(nodes: usize, edges: usize, seed: u64, output: Option<PathBuf>) -> ImpactResult<()> {
  let config = dag::generate_config(nodes, edges, seed)?;

  match output {
    Some(path) => {
      config.save(&path)?;
      eprintln!(
        "✅ Wrote {} projects and {} edges to {}",
        nodes,
        edges,
        path.display()
      );
    }
    None => print!("{}", toml_edit::ser::to_string_pretty(&config)?),
  }

  Ok(())
}
