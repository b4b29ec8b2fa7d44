//! Test helpers for integration tests

use anyhow::{Context, Result};
use impact_graph::{ImpactGraph, ImpactGraphConfig};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the shared fixture configuration
pub fn fixture_path() -> PathBuf {
  Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/project-impact-graph.toml")
}

/// Engine built from the shared fixture
pub fn fixture_graph() -> Result<ImpactGraph> {
  let config = ImpactGraphConfig::load_from(&fixture_path())?;
  Ok(ImpactGraph::new(config))
}

/// A temporary directory to run the binary in
pub struct TestWorkspace {
  _root: TempDir,
  pub path: PathBuf,
}

impl TestWorkspace {
  /// Create an empty workspace (no configuration)
  pub fn new() -> Result<Self> {
    let root = TempDir::new()?;
    let path = root.path().to_path_buf();
    Ok(Self { _root: root, path })
  }

  /// Create a workspace with the fixture copied to `impact-graph.toml`
  pub fn with_fixture() -> Result<Self> {
    let ws = Self::new()?;
    std::fs::copy(fixture_path(), ws.path.join("impact-graph.toml")).context("Failed to copy fixture")?;
    Ok(ws)
  }

  /// Write a configuration file into the workspace
  pub fn write_config(&self, name: &str, content: &str) -> Result<PathBuf> {
    let path = self.path.join(name);
    std::fs::write(&path, content)?;
    Ok(path)
  }

  pub fn read_file(&self, name: &str) -> Result<String> {
    std::fs::read_to_string(self.path.join(name)).with_context(|| format!("Failed to read {}", name))
  }
}

/// Run impact-graph and require success
pub fn run_impact_graph(cwd: &Path, args: &[&str]) -> Result<Output> {
  let output = run_impact_graph_raw(cwd, args)?;

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    anyhow::bail!(
      "impact-graph command failed: impact-graph {}\nstdout: {}\nstderr: {}",
      args.join(" "),
      stdout,
      stderr
    );
  }

  Ok(output)
}

/// Run impact-graph without checking the exit status
pub fn run_impact_graph_raw(cwd: &Path, args: &[&str]) -> Result<Output> {
  let bin = env!("CARGO_BIN_EXE_impact-graph");

  Command::new(bin)
    .current_dir(cwd)
    .args(args)
    .env_remove("RUST_LOG")
    .output()
    .context("Failed to run impact-graph")
}

pub fn stdout(output: &Output) -> String {
  String::from_utf8_lossy(&output.stdout).into_owned()
}
