mod commands;

use clap::{Parser, Subcommand};
use impact_graph::core::context::ImpactContext;
use impact_graph::core::error::{ImpactError, ImpactResult, print_error};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Decide whether two monorepo changesets can impact overlapping projects
#[derive(Parser)]
#[command(name = "impact-graph")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(styles = get_styles())]
struct Cli {
  /// Configuration file (default: search the current directory)
  #[arg(short, long, global = true)]
  config: Option<PathBuf>,

  /// Enable debug logging on stderr (RUST_LOG overrides)
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  // ============================================================================
  // Queries
  // ============================================================================
  /// Check whether two changesets impact overlapping projects
  Intersect {
    /// Changed paths of the first changeset (omitted means none)
    #[arg(short = 'a', long, num_args = 0..)]
    paths_a: Vec<String>,
    /// Changed paths of the second changeset (omitted means none)
    #[arg(short = 'b', long, num_args = 0..)]
    paths_b: Vec<String>,
    /// Output format: text, json, names-only
    #[arg(long, default_value = "text")]
    format: String,
    /// Exit with code 1 when the changesets intersect
    #[arg(long)]
    exit_code: bool,
  },

  /// Show which projects changed paths affect
  Lookup {
    /// Changed paths, relative to the repository root
    #[arg(required = true)]
    paths: Vec<String>,
    /// Output format: text, json, names-only
    #[arg(long, default_value = "text")]
    format: String,
  },

  /// Expand project names to their impact closure
  Impact {
    /// Project names to expand
    #[arg(required = true)]
    projects: Vec<String>,
    /// Output format: text, json, names-only
    #[arg(long, default_value = "text")]
    format: String,
  },

  /// Show one project's configuration
  Project {
    /// Project name
    name: String,
    /// Output in JSON format
    #[arg(long)]
    json: bool,
  },

  // ============================================================================
  // Configuration
  // ============================================================================
  /// Report every problem in the configuration
  Check {
    /// Output results in JSON format
    #[arg(long)]
    json: bool,
  },

  /// Print the impact relation in topological order
  Graph {
    /// Emit Graphviz DOT instead
    #[arg(long)]
    dot: bool,
  },

  // ============================================================================
  // Performance
  // ============================================================================
  /// Generate a synthetic acyclic configuration
  Generate {
    /// Number of projects
    #[arg(long, default_value_t = 1000)]
    nodes: usize,
    /// Number of impact edges (between nodes - 1 and nodes * (nodes - 1) / 2)
    #[arg(long, default_value_t = 5000)]
    edges: usize,
    /// Random seed
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Output file (.toml or .json); prints TOML to stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
  },

  /// Time the intersection oracle over generated graphs
  Bench {
    /// Write the JSON report here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Base random seed
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Run the small smoke matrix
    #[arg(long)]
    quick: bool,
    /// No progress bar or summary table
    #[arg(short, long)]
    quiet: bool,
  },
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .valid(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() {
  let cli = Cli::parse();

  let default_level = if cli.verbose { "debug" } else { "warn" };
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
    .with_writer(std::io::stderr)
    .with_target(false)
    .init();

  let root = match std::env::current_dir() {
    Ok(dir) => dir,
    Err(e) => handle_error(ImpactError::Io(e)),
  };

  if let Err(err) = dispatch(cli.command, &root, cli.config.as_deref()) {
    handle_error(err);
  }
}

fn dispatch(command: Commands, root: &Path, config: Option<&Path>) -> ImpactResult<()> {
  match command {
    Commands::Intersect {
      paths_a,
      paths_b,
      format,
      exit_code,
    } => {
      let ctx = ImpactContext::build(root, config)?;
      let intersects = commands::run_intersect(&ctx, paths_a, paths_b, format)?;
      if exit_code && intersects {
        std::process::exit(1);
      }
      Ok(())
    }
    Commands::Lookup { paths, format } => {
      let ctx = ImpactContext::build(root, config)?;
      commands::run_lookup(&ctx, paths, format)
    }
    Commands::Impact { projects, format } => {
      let ctx = ImpactContext::build(root, config)?;
      commands::run_impact(&ctx, projects, format)
    }
    Commands::Project { name, json } => {
      let ctx = ImpactContext::build(root, config)?;
      commands::run_project(&ctx, name, json)
    }
    Commands::Check { json } => commands::run_check(root, config, json),
    Commands::Graph { dot } => commands::run_graph(root, config, dot),
    Commands::Generate {
      nodes,
      edges,
      seed,
      output,
    } => commands::run_generate(nodes, edges, seed, output),
    Commands::Bench {
      output,
      seed,
      quick,
      quiet,
    } => commands::run_bench(output, seed, quick, quiet),
  }
}

/// Print the error and exit with its code
fn handle_error(err: ImpactError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
