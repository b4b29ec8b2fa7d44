//! Configuration health checks for `impact-graph check`
//!
//! All checks implement the `Check` trait and run against a parsed configuration that has
//! NOT been validated yet, so every problem is reported at once.
//!
//! # Built-in Checks
//!
//! - **integrity**: empty project names and dangling `dependentProjects` entries (error)
//! - **self-loops**: projects missing themselves in `dependentProjects` (warning)
//! - **glob-ownership**: projects owning no paths, globs shared between projects (warning)
//! - **graph-cycles**: impact cycles (info; the engine handles them)

mod globs;
mod graph_cycles;
mod integrity;
mod runner;
mod self_loops;
mod trait_def;

pub use runner::{CheckRunner, create_default_runner};
pub use trait_def::{Check, CheckResult, Severity};
