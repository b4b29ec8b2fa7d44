//! Check runner for executing configuration checks

use super::trait_def::{Check, CheckResult};
use crate::core::config::ImpactGraphConfig;
use std::sync::Arc;

/// Check runner that executes multiple checks
pub struct CheckRunner {
  checks: Vec<Arc<dyn Check>>,
}

impl CheckRunner {
  /// Create a new check runner
  pub fn new() -> Self {
    Self { checks: Vec::new() }
  }

  /// Add a check to the runner
  pub fn add_check(&mut self, check: Arc<dyn Check>) {
    self.checks.push(check);
  }

  /// Run all checks and collect results
  pub fn run_all(&self, config: &ImpactGraphConfig) -> Vec<CheckResult> {
    self
      .checks
      .iter()
      .map(|check| match check.run(config) {
        Ok(result) => result,
        Err(err) => CheckResult::error(
          check.name(),
          format!("Check failed to run: {}", err),
          Some("Re-run with --verbose for more details"),
        ),
      })
      .collect()
  }

  /// Get all registered checks
  pub fn checks(&self) -> &[Arc<dyn Check>] {
    &self.checks
  }
}

impl Default for CheckRunner {
  fn default() -> Self {
    Self::new()
  }
}

/// Create a runner with all built-in checks
pub fn create_default_runner() -> CheckRunner {
  let mut runner = CheckRunner::new();

  runner.add_check(Arc::new(super::integrity::IntegrityCheck));
  runner.add_check(Arc::new(super::self_loops::SelfLoopCheck));
  runner.add_check(Arc::new(super::globs::GlobOwnershipCheck));
  runner.add_check(Arc::new(super::graph_cycles::GraphCyclesCheck));

  runner
}
