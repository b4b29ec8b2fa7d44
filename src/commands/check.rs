//! `impact-graph check` - report every problem in a configuration
//!
//! Unlike the query commands this reads the file without validating it, so a broken
//! configuration lists all of its problems instead of failing on the first.

use impact_graph::checks::{Severity, create_default_runner};
use impact_graph::core::config::ImpactGraphConfig;
use impact_graph::core::context::ImpactContext;
use impact_graph::core::error::{ImpactError, ImpactResult};
use std::path::Path;

/// Run the check command
///
/// Errors (exit code 3) when any check fails with error severity.
pub fn run_check(root: &Path, explicit: Option<&Path>, json: bool) -> ImpactResult<()> {
  let config_path = ImpactContext::resolve_config_path(root, explicit)?;
  let config = ImpactGraphConfig::read_from(&config_path)?;

  let runner = create_default_runner();
  let results = runner.run_all(&config);
  let error_count = results.iter().filter(|r| r.is_error()).count();

  if json {
    println!("{}", serde_json::to_string_pretty(&results)?);
  } else {
    println!("🔍 Checking {}\n", config_path.display());

    println!("📋 Registered checks:");
    for check in runner.checks() {
      println!("   • {}: {}", check.name(), check.description());
    }
    println!();

    for result in &results {
      let icon = match (result.passed, result.severity) {
        (true, _) => "✅",
        (false, Severity::Error) => "❌",
        (false, _) => "⚠️ ",
      };
      println!("{} {}: {}", icon, result.check_name, result.message);

      for detail in &result.details {
        println!("   • {}", detail);
      }
      if !result.passed
        && let Some(ref suggestion) = result.suggestion
      {
        println!("   💡 Fix: {}", suggestion);
      }
      println!();
    }

    let passed_count = results.iter().filter(|r| r.passed).count();
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Summary: {}/{} checks passed", passed_count, results.len());
  }

  if error_count > 0 {
    return Err(ImpactError::Validation(format!(
      "{} check(s) failed in {}",
      error_count,
      config_path.display()
    )));
  }

  Ok(())
}
