//! Impact graph engine
//!
//! Path classification, impact closure and the intersection oracle, all pure functions over
//! an in-memory [`ImpactGraphConfig`](crate::core::config::ImpactGraphConfig).
//! No I/O happens below this module.

pub mod affected;
pub mod classify;
pub mod dependency_graph;
pub mod impact_graph;
pub mod intersection;

pub use affected::{AffectedAnalysis, AffectedSet};
pub use classify::{Classification, PathClass};
pub use dependency_graph::DependencyGraph;
pub use impact_graph::ImpactGraph;
pub use intersection::{IntersectionReport, Verdict};
