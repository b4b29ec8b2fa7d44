//! Loaded engine context - build once, pass to every command
//!
//! ```text
//! main.rs:
//!   ImpactContext::build(root, --config) -> &ImpactContext
//!   |
//!   v
//! commands/intersect.rs, lookup.rs, etc:
//!   fn run_*(ctx: &ImpactContext, ...)
//! ```

use crate::core::config::ImpactGraphConfig;
use crate::core::error::{ConfigError, ImpactResult};
use crate::graph::ImpactGraph;
use std::path::{Path, PathBuf};

/// Config location plus the engine built from it.
pub struct ImpactContext {
  /// File the configuration was read from
  pub config_path: PathBuf,

  /// Query engine (owns the validated configuration)
  pub graph: ImpactGraph,
}

impl ImpactContext {
  /// Resolve, load and validate the configuration, then build the engine.
  pub fn build(root: &Path, explicit: Option<&Path>) -> ImpactResult<Self> {
    let config_path = Self::resolve_config_path(root, explicit)?;
    let config = ImpactGraphConfig::load_from(&config_path)?;

    Ok(Self {
      config_path,
      graph: ImpactGraph::new(config),
    })
  }

  /// An explicit `--config` wins; otherwise search `root`.
  pub fn resolve_config_path(root: &Path, explicit: Option<&Path>) -> ImpactResult<PathBuf> {
    match explicit {
      Some(path) => Ok(path.to_path_buf()),
      None => ImpactGraphConfig::find_config_path(root).ok_or_else(|| {
        ConfigError::NotFound {
          root: root.to_path_buf(),
        }
        .into()
      }),
    }
  }
}
