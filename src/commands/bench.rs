//! `impact-graph bench` - time the intersection oracle over generated graphs

use impact_graph::bench::{self, BenchReport};
use impact_graph::core::error::ImpactResult;
use std::path::PathBuf;

/// Run the bench command
pub fn run_bench(output: Option<PathBuf>, seed: u64, quick: bool, quiet: bool) -> ImpactResult<()> {
  let scenarios = if quick {
    bench::harness::quick_matrix()
  } else {
    bench::harness::default_matrix()
  };

  let report = bench::harness::run(&scenarios, seed, !quiet)?;

  match output {
    Some(path) => {
      bench::harness::write_report(&report, &path)?;
      if !quiet {
        display_table(&report);
      }
      eprintln!("📄 Report written to {}", path.display());
    }
    None => println!("{}", serde_json::to_string_pretty(&report)?),
  }

  Ok(())
}

fn display_table(report: &BenchReport) {
  println!(
    "{:>6} {:>7} {:>6} {:>6} {:>10} {:>10} {:>9}",
    "nodes", "edges", "A", "B", "load ms", "query ms", "overlap"
  );
  for result in &report.results {
    let s = &result.scenario;
    println!(
      "{:>6} {:>7} {:>6} {:>6} {:>10.3} {:>10.3} {:>9}",
      s.node_count,
      s.edge_count,
      s.path_count_a,
      s.path_count_b,
      result.load_time_ms,
      result.query_time_ms,
      result.has_impact_intersection
    );
  }
}
