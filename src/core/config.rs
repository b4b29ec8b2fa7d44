//! Impact graph configuration
//!
//! The model types (`ImpactGraphConfig`, `ProjectConfig`) are plain data consumed by the
//! engine in [`crate::graph`]. Everything else in this file is the loader: finding a file,
//! parsing it and rejecting configurations the engine must never see.
//!
//! Searched in order: impact-graph.toml, .impact-graph.toml, impact-graph.json
//!
//! ```toml
//! globalExcludedGlobs = ["OWNERS", "build.sh"]
//!
//! [projects.A]
//! includedGlobs = ["projects/folder_A"]
//! excludedGlobs = ["projects/folder_A/README.md"]
//! dependentProjects = ["A", "E"]
//! ```

use crate::core::error::{ConfigError, ImpactError, ImpactResult, ResultExt};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// File names searched by [`ImpactGraphConfig::find_config_path`], in priority order
pub const CONFIG_FILE_NAMES: [&str; 3] = ["impact-graph.toml", ".impact-graph.toml", "impact-graph.json"];

/// Per-project membership and impact edges
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
  /// Path prefixes owned by this project
  #[serde(default)]
  pub included_globs: Vec<String>,

  /// Path prefixes ignored by every project
  #[serde(default)]
  pub excluded_globs: Vec<String>,

  /// Projects impacted when this one changes (includes itself by convention)
  #[serde(default)]
  pub dependent_projects: Vec<String>,
}

/// Whole impact graph: global exclusions plus every project keyed by name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactGraphConfig {
  #[serde(default)]
  pub global_excluded_globs: Vec<String>,

  #[serde(default)]
  pub projects: BTreeMap<String, ProjectConfig>,
}

/// On-disk format, picked from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
  Toml,
  Json,
}

impl ConfigFormat {
  /// `.json` is JSON; everything else is read as TOML
  pub fn from_path(path: &Path) -> Self {
    match path.extension().and_then(|e| e.to_str()) {
      Some(ext) if ext.eq_ignore_ascii_case("json") => ConfigFormat::Json,
      _ => ConfigFormat::Toml,
    }
  }
}

impl ImpactGraphConfig {
  /// Find config file in search order: impact-graph.toml, .impact-graph.toml, impact-graph.json
  pub fn find_config_path(root: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
      .iter()
      .map(|name| root.join(name))
      .find(|p| p.exists())
  }

  /// Load and validate the config found under `root`
  pub fn load(root: &Path) -> ImpactResult<Self> {
    let config_path = Self::find_config_path(root).ok_or_else(|| {
      ImpactError::Config(ConfigError::NotFound {
        root: root.to_path_buf(),
      })
    })?;

    Self::load_from(&config_path)
  }

  /// Parse a config file without validating it.
  ///
  /// `check` uses this to report every integrity problem instead of stopping at the first.
  pub fn read_from(path: &Path) -> ImpactResult<Self> {
    let content = fs::read_to_string(path).with_context(|| format!("Failed to read config from {}", path.display()))?;

    let parsed = match ConfigFormat::from_path(path) {
      ConfigFormat::Json => serde_json::from_str::<Self>(&content).map_err(|e| e.to_string()),
      ConfigFormat::Toml => toml_edit::de::from_str::<Self>(&content).map_err(|e| e.to_string()),
    };

    parsed.map_err(|message| {
      ImpactError::Config(ConfigError::Parse {
        path: path.to_path_buf(),
        message,
      })
    })
  }

  /// Load and validate a config from an explicit file
  pub fn load_from(path: &Path) -> ImpactResult<Self> {
    let config = Self::read_from(path)?;

    config
      .validate()
      .with_context(|| format!("Invalid impact graph configuration in {}", path.display()))?;

    tracing::debug!(
      path = %path.display(),
      projects = config.projects.len(),
      "loaded impact graph configuration"
    );

    Ok(config)
  }

  /// Parse TOML text without touching the filesystem (validation included)
  pub fn from_toml_str(content: &str) -> ImpactResult<Self> {
    let config: Self = toml_edit::de::from_str(content)?;
    config.validate()?;
    Ok(config)
  }

  /// Parse JSON text without touching the filesystem (validation included)
  pub fn from_json_str(content: &str) -> ImpactResult<Self> {
    let config: Self = serde_json::from_str(content)?;
    config.validate()?;
    Ok(config)
  }

  /// Write the config, format chosen from the extension
  pub fn save(&self, path: &Path) -> ImpactResult<()> {
    let content = match ConfigFormat::from_path(path) {
      ConfigFormat::Json => serde_json::to_string_pretty(self).context("Failed to serialize config to JSON")?,
      ConfigFormat::Toml => toml_edit::ser::to_string_pretty(self).context("Failed to serialize config to TOML")?,
    };
    fs::write(path, content).with_context(|| format!("Failed to write config to {}", path.display()))?;
    Ok(())
  }

  /// Check referential integrity.
  ///
  /// Rejects empty project names and `dependentProjects` entries that point at
  /// undefined projects. The engine assumes both hold.
  pub fn validate(&self) -> ImpactResult<()> {
    for (name, project) in &self.projects {
      if name.is_empty() {
        return Err(ConfigError::EmptyProjectName.into());
      }

      if let Some(missing) = project
        .dependent_projects
        .iter()
        .find(|dep| !self.projects.contains_key(dep.as_str()))
      {
        return Err(
          ConfigError::DanglingDependency {
            project: name.clone(),
            dependency: missing.clone(),
          }
          .into(),
        );
      }
    }
    Ok(())
  }

  /// Every dangling `dependentProjects` reference, as `(project, dependency)` pairs
  pub fn dangling_dependencies(&self) -> Vec<(String, String)> {
    let mut dangling = Vec::new();
    for (name, project) in &self.projects {
      for dep in &project.dependent_projects {
        if !self.projects.contains_key(dep) {
          dangling.push((name.clone(), dep.clone()));
        }
      }
    }
    dangling
  }

  /// Projects whose `dependentProjects` omits their own name.
  ///
  /// Not an error: the expander seeds the closure with the project itself anyway.
  pub fn missing_self_loops(&self) -> Vec<String> {
    self
      .projects
      .iter()
      .filter(|(name, project)| !project.dependent_projects.contains(*name))
      .map(|(name, _)| name.clone())
      .collect()
  }

  /// Project names in sorted order
  pub fn project_names(&self) -> Vec<String> {
    self.projects.keys().cloned().collect()
  }
}
