//! `impact-graph intersect` - can two changesets run independently?
//!
//! Prints the verdict for two path lists. Intersection is the conservative answer: any path
//! owned by no project (and not excluded) forces it.

use super::OutputFormat;
use impact_graph::core::context::ImpactContext;
use impact_graph::core::error::ImpactResult;
use impact_graph::graph::{IntersectionReport, Verdict};
use std::collections::BTreeSet;

/// Run the intersect command.
///
/// Returns whether the changesets intersect so `main` can map it to an exit code.
pub fn run_intersect(
  ctx: &ImpactContext,
  paths_a: Vec<String>,
  paths_b: Vec<String>,
  format: String,
) -> ImpactResult<bool> {
  let output_format = OutputFormat::parse(&format)?;
  let report = ctx.graph.intersect(&paths_a, &paths_b)?;

  match output_format {
    OutputFormat::Text => display_text(&report),
    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    OutputFormat::NamesOnly => {
      if let Verdict::Overlap { shared } = &report.verdict {
        for name in shared {
          println!("{}", name);
        }
      }
    }
  }

  Ok(report.verdict.intersects())
}

fn display_text(report: &IntersectionReport) {
  match &report.verdict {
    Verdict::Unmatched { a, b } => {
      println!("⚠️  Impact intersection assumed: some changed files belong to no project");
      for path in a {
        println!("  A ❓ {}", path);
      }
      for path in b {
        println!("  B ❓ {}", path);
      }
    }
    Verdict::Overlap { shared } => {
      println!("🔗 Changesets intersect on {} project(s)", shared.len());
      for name in shared {
        println!("  🎯 {}", name);
      }
    }
    Verdict::Disjoint => {
      println!("✅ No impact intersection: changesets can run independently");
    }
  }

  println!();
  println!("A: {} direct project(s), {}", report.a.projects.len(), closure_summary(report.closure_a.as_ref()));
  println!("B: {} direct project(s), {}", report.b.projects.len(), closure_summary(report.closure_b.as_ref()));
}

fn closure_summary(closure: Option<&BTreeSet<String>>) -> String {
  match closure {
    Some(set) => format!("{} in closure", set.len()),
    None => "closure not computed".to_string(),
  }
}
