//! Configuration model, loading context and error handling
//!
//! - **config**: `ImpactGraphConfig` / `ProjectConfig` plus the file loader
//! - **context**: resolve + load the config once and build the engine
//! - **error**: error types with contextual help messages and exit codes

pub mod config;
pub mod context;
pub mod error;
