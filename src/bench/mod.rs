//! Synthetic graphs and the performance harness
//!
//! - **dag**: random DAG generation and synthetic configurations
//! - **harness**: scenario matrix runner and JSON report

pub mod dag;
pub mod harness;

pub use harness::{BenchReport, Scenario};
