//! Projects should list themselves as dependents

use super::trait_def::{Check, CheckResult};
use crate::core::config::ImpactGraphConfig;
use crate::core::error::ImpactResult;

pub struct SelfLoopCheck;

impl Check for SelfLoopCheck {
  fn name(&self) -> &'static str {
    "self-loops"
  }

  fn description(&self) -> &'static str {
    "Every project lists itself in dependentProjects"
  }

  fn run(&self, config: &ImpactGraphConfig) -> ImpactResult<CheckResult> {
    let missing = config.missing_self_loops();

    if missing.is_empty() {
      return Ok(CheckResult::pass(self.name(), "All projects list themselves"));
    }

    Ok(
      CheckResult::warning(
        self.name(),
        format!("{} project(s) do not list themselves as dependents", missing.len()),
        Some("Add each project's own name to its dependentProjects"),
      )
      .with_details(missing),
    )
  }
}
