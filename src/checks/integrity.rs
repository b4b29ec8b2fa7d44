//! Referential integrity check
//!
//! Same rules as [`ImpactGraphConfig::validate`], but lists every violation.

use super::trait_def::{Check, CheckResult};
use crate::core::config::ImpactGraphConfig;
use crate::core::error::ImpactResult;

/// Empty project names and `dependentProjects` entries naming undefined projects
pub struct IntegrityCheck;

impl Check for IntegrityCheck {
  fn name(&self) -> &'static str {
    "integrity"
  }

  fn description(&self) -> &'static str {
    "Every project has a name and every dependent project is defined"
  }

  fn run(&self, config: &ImpactGraphConfig) -> ImpactResult<CheckResult> {
    let mut details: Vec<String> = config
      .dangling_dependencies()
      .into_iter()
      .map(|(project, dependency)| format!("'{}' lists undefined dependent project '{}'", project, dependency))
      .collect();

    if config.projects.contains_key("") {
      details.insert(0, "a project has an empty name".to_string());
    }

    if details.is_empty() {
      return Ok(CheckResult::pass(
        self.name(),
        format!("{} project(s), all references resolve", config.projects.len()),
      ));
    }

    Ok(
      CheckResult::error(
        self.name(),
        format!("Found {} integrity problem(s)", details.len()),
        Some("Define the missing projects or remove them from dependentProjects"),
      )
      .with_details(details),
    )
  }
}
