//! Decide whether two monorepo changesets can impact overlapping projects.
//!
//! ```rust,ignore
//! use impact_graph::{ImpactGraph, ImpactGraphConfig};
//!
//! let config = ImpactGraphConfig::load_from(Path::new("impact-graph.toml"))?;
//! let graph = ImpactGraph::new(config);
//!
//! // false only when both changesets are fully owned and their closures are disjoint
//! let overlap = graph.has_impact_intersection(&["projects/a/index.ts"], &["projects/b/index.ts"])?;
//! ```

pub mod bench;
pub mod checks;
pub mod core;
pub mod graph;
pub mod ui;

pub use crate::core::config::{ImpactGraphConfig, ProjectConfig};
pub use crate::core::error::{ConfigError, ImpactError, ImpactResult};
pub use crate::graph::{Classification, ImpactGraph, IntersectionReport, Verdict};
