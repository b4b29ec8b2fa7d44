//! Path ownership check
//!
//! Flags projects that own no paths and included globs claimed by more than one project.
//! With equal prefix depth the first project in name order wins, which is rarely intended.

use super::trait_def::{Check, CheckResult};
use crate::core::config::ImpactGraphConfig;
use crate::core::error::ImpactResult;
use std::collections::BTreeMap;

pub struct GlobOwnershipCheck;

impl Check for GlobOwnershipCheck {
  fn name(&self) -> &'static str {
    "glob-ownership"
  }

  fn description(&self) -> &'static str {
    "Every project owns paths and no included glob is shared"
  }

  fn run(&self, config: &ImpactGraphConfig) -> ImpactResult<CheckResult> {
    let mut details = Vec::new();

    for (name, project) in &config.projects {
      if project.included_globs.is_empty() {
        details.push(format!("'{}' has no includedGlobs and can only be reached as a dependent", name));
      }
    }

    let mut owners: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for (name, project) in &config.projects {
      for glob in &project.included_globs {
        let entry = owners.entry(glob.as_str()).or_default();
        if !entry.contains(&name.as_str()) {
          entry.push(name.as_str());
        }
      }
    }

    for (glob, projects) in owners.iter().filter(|(_, projects)| projects.len() > 1) {
      details.push(format!(
        "'{}' is included by {} (paths go to '{}')",
        glob,
        projects.join(", "),
        projects[0]
      ));
    }

    if details.is_empty() {
      return Ok(CheckResult::pass(self.name(), "Every project owns a distinct set of globs"));
    }

    Ok(
      CheckResult::warning(
        self.name(),
        format!("Found {} ownership issue(s)", details.len()),
        Some("Give every project its own includedGlobs"),
      )
      .with_details(details),
    )
  }
}
