//! Impact cycle detection check
//!
//! Cycles are legal: the expander tracks visited projects and terminates. They are still
//! worth knowing about since every project in a cycle impacts all the others.

use super::trait_def::{Check, CheckResult};
use crate::core::config::ImpactGraphConfig;
use crate::core::error::ImpactResult;
use crate::graph::DependencyGraph;

/// Report impact cycles between projects
pub struct GraphCyclesCheck;

impl Check for GraphCyclesCheck {
  fn name(&self) -> &'static str {
    "graph-cycles"
  }

  fn description(&self) -> &'static str {
    "Report impact cycles between projects"
  }

  fn run(&self, config: &ImpactGraphConfig) -> ImpactResult<CheckResult> {
    let cycles = DependencyGraph::from_config(config).find_cycles();

    if cycles.is_empty() {
      return Ok(CheckResult::pass(self.name(), "No impact cycles detected"));
    }

    let details = cycles
      .iter()
      .enumerate()
      .map(|(i, cycle)| format!("Cycle {}: {}", i + 1, cycle.join(" → ")))
      .collect();

    Ok(
      CheckResult::pass(
        self.name(),
        format!("Found {} impact cycle(s); each member impacts the whole cycle", cycles.len()),
      )
      .with_details(details),
    )
  }
}
