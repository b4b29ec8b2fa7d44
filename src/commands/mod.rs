//! CLI commands for impact-graph
//!
//! ## Queries
//! - **intersect**: Can two changesets run independently?
//! - **lookup**: Which projects do changed paths touch, directly and transitively?
//! - **impact**: Impact closure of explicit project names
//! - **project**: Show one project's configuration
//!
//! ## Configuration
//! - **check**: Report every problem in the configuration
//! - **graph**: Print the impact relation in topological or DOT form
//!
//! ## Performance
//! - **generate**: Write a synthetic configuration
//! - **bench**: Time the intersection oracle over generated graphs
//!
//! Query commands accept `&ImpactContext` so the configuration is loaded once.

pub mod bench;
pub mod check;
pub mod generate;
pub mod graph;
pub mod intersect;
pub mod lookup;
pub mod project;

pub use bench::run_bench;
pub use check::run_check;
pub use generate::run_generate;
pub use graph::run_graph;
pub use intersect::run_intersect;
pub use lookup::{run_impact, run_lookup};
pub use project::run_project;

use impact_graph::core::error::{ImpactError, ImpactResult};

/// Output format shared by the query commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
  Text,
  Json,
  NamesOnly,
}

impl OutputFormat {
  pub fn parse(s: &str) -> ImpactResult<Self> {
    match s.to_lowercase().as_str() {
      "text" => Ok(Self::Text),
      "json" => Ok(Self::Json),
      "names" | "names-only" => Ok(Self::NamesOnly),
      _ => Err(ImpactError::message(format!(
        "Unknown format '{}'. Valid formats: text, json, names-only",
        s
      ))),
    }
  }
}
