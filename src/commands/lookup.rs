//! `impact-graph lookup` / `impact-graph impact` - show which projects changes affect
//!
//! `lookup` classifies changed paths and expands the owning projects:
//! - Which projects directly own the changed files
//! - Which projects transitively depend on those projects
//! - Which files no project owns (unknown impact)
//!
//! `impact` skips classification and expands an explicit list of project names.

use super::OutputFormat;
use impact_graph::core::context::ImpactContext;
use impact_graph::core::error::ImpactResult;
use impact_graph::graph::{AffectedAnalysis, AffectedSet, affected};

/// Run the lookup command
pub fn run_lookup(ctx: &ImpactContext, paths: Vec<String>, format: String) -> ImpactResult<()> {
  let output_format = OutputFormat::parse(&format)?;

  if output_format == OutputFormat::NamesOnly {
    for name in affected::affected_projects(&ctx.graph, &paths)? {
      println!("{}", name);
    }
    return Ok(());
  }

  let analysis = affected::analyze(&ctx.graph, &paths)?;
  match output_format {
    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&analysis)?),
    _ => display_analysis_text(&analysis),
  }

  Ok(())
}

/// Run the impact command
pub fn run_impact(ctx: &ImpactContext, projects: Vec<String>, format: String) -> ImpactResult<()> {
  let output_format = OutputFormat::parse(&format)?;
  let impact = affected::analyze_projects(&ctx.graph, &projects)?;

  match output_format {
    OutputFormat::Text => display_impact_text(&impact),
    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&impact)?),
    OutputFormat::NamesOnly => display_names_only(&impact),
  }

  Ok(())
}

/// Display results in human-readable text format
fn display_analysis_text(analysis: &AffectedAnalysis) {
  println!("Impact Analysis");
  println!("===============");
  println!();

  println!("Changed files: {}", analysis.changed_files.len());
  if !analysis.changed_files.is_empty() && analysis.changed_files.len() <= 20 {
    for file in &analysis.changed_files {
      println!("  {}", file);
    }
    println!();
  }

  if !analysis.excluded.is_empty() {
    println!("Excluded files: {}", analysis.excluded.len());
    for file in &analysis.excluded {
      println!("  ∅  {}", file);
    }
    println!();
  }

  if !analysis.unmatched.is_empty() {
    println!("Unmatched files: {} (impact unknown)", analysis.unmatched.len());
    for file in &analysis.unmatched {
      println!("  ❓ {}", file);
    }
    println!();
  }

  display_impact_text(&analysis.impact);
}

fn display_impact_text(impact: &AffectedSet) {
  println!("Direct impact: {} projects", impact.direct.len());
  for name in &impact.direct {
    println!("  📦 {}", name);
  }
  println!();

  println!("Transitive dependents: {} projects", impact.dependents.len());
  for name in &impact.dependents {
    println!("  ⬆  {}", name);
  }
  println!();

  println!("Impact closure: {} projects", impact.total_affected());
  for name in &impact.closure {
    println!("  🎯 {}", name);
  }
}

/// Display only project names (closure, sorted)
fn display_names_only(impact: &AffectedSet) {
  let mut names = impact.closure.clone();
  names.sort();

  for name in names {
    println!("{}", name);
  }
}
