//! Error types for impact-graph with contextual messages and exit codes
//!
//! One error type covers the engine and its collaborators. Configuration problems
//! (dangling dependencies, unknown projects, unreadable files) are categorized so the
//! CLI can pick an exit code and print a suggestion next to the message.
//!
//! An unmatched path is NOT an error. It is a regular classification outcome.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit codes for impact-graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (config, invalid args, missing files)
  User = 1,
  /// System error (I/O)
  System = 2,
  /// Validation failure (`check` found problems)
  Validation = 3,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for impact-graph
#[derive(Debug)]
pub enum ImpactError {
  /// Configuration errors
  Config(ConfigError),

  /// Validation failures reported by `check`
  Validation(String),

  /// I/O errors
  Io(io::Error),

  /// Generic error with message and optional context
  Message {
    message: String,
    context: Option<String>,
    help: Option<String>,
  },
}

impl ImpactError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    ImpactError::Message {
      message: msg.into(),
      context: None,
      help: None,
    }
  }

  /// Create an error with help text
  pub fn with_help(msg: impl Into<String>, help: impl Into<String>) -> Self {
    ImpactError::Message {
      message: msg.into(),
      context: None,
      help: Some(help.into()),
    }
  }

  /// Add context to an existing error.
  ///
  /// Categorized errors are turned into a `Message` so the context line is not lost;
  /// their help text is kept.
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      ImpactError::Message { message, context, help } => ImpactError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
        help,
      },
      other => {
        let help = other.help_message();
        ImpactError::Message {
          message: ctx_str,
          context: Some(other.to_string()),
          help,
        }
      }
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      ImpactError::Config(_) => ExitCode::User,
      ImpactError::Validation(_) => ExitCode::Validation,
      ImpactError::Io(_) => ExitCode::System,
      ImpactError::Message { .. } => ExitCode::User,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      ImpactError::Config(e) => e.help_message(),
      ImpactError::Validation(_) => Some("Fix the reported projects and re-run `impact-graph check`.".to_string()),
      ImpactError::Message { help, .. } => help.clone(),
      ImpactError::Io(_) => None,
    }
  }

  /// Borrow the configuration error, if this is one
  pub fn config_error(&self) -> Option<&ConfigError> {
    match self {
      ImpactError::Config(e) => Some(e),
      _ => None,
    }
  }
}

impl fmt::Display for ImpactError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ImpactError::Config(e) => write!(f, "{}", e),
      ImpactError::Validation(reason) => write!(f, "Validation failed: {}", reason),
      ImpactError::Io(e) => write!(f, "I/O error: {}", e),
      ImpactError::Message { message, context, .. } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for ImpactError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      ImpactError::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<ConfigError> for ImpactError {
  fn from(err: ConfigError) -> Self {
    ImpactError::Config(err)
  }
}

impl From<io::Error> for ImpactError {
  fn from(err: io::Error) -> Self {
    ImpactError::Io(err)
  }
}

impl From<String> for ImpactError {
  fn from(msg: String) -> Self {
    ImpactError::message(msg)
  }
}

impl From<&str> for ImpactError {
  fn from(msg: &str) -> Self {
    ImpactError::message(msg)
  }
}

impl From<toml_edit::de::Error> for ImpactError {
  fn from(err: toml_edit::de::Error) -> Self {
    ImpactError::message(format!("TOML deserialization error: {}", err))
  }
}

impl From<toml_edit::ser::Error> for ImpactError {
  fn from(err: toml_edit::ser::Error) -> Self {
    ImpactError::message(format!("TOML serialization error: {}", err))
  }
}

impl From<serde_json::Error> for ImpactError {
  fn from(err: serde_json::Error) -> Self {
    ImpactError::message(format!("JSON error: {}", err))
  }
}

/// Configuration-related errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
  /// No config file in the searched locations
  NotFound { root: PathBuf },

  /// Config file could not be parsed
  Parse { path: PathBuf, message: String },

  /// Direct lookup of a project that is not configured
  ProjectNotFound { name: String, available: Vec<String> },

  /// Traversal reached a project id with no configuration entry
  UnknownProject {
    name: String,
    referenced_by: Option<String>,
  },

  /// A `dependentProjects` entry names a project that does not exist
  DanglingDependency { project: String, dependency: String },

  /// A project key is the empty string
  EmptyProjectName,
}

impl ConfigError {
  fn help_message(&self) -> Option<String> {
    match self {
      ConfigError::NotFound { .. } => Some(
        "Create impact-graph.toml in the repository root or pass --config <file>. \
         `impact-graph generate` writes an example."
          .to_string(),
      ),
      ConfigError::ProjectNotFound { available, .. } => {
        if available.is_empty() {
          Some("The configuration defines no projects.".to_string())
        } else {
          Some(format!("Available projects: {}", available.join(", ")))
        }
      }
      ConfigError::UnknownProject { .. } | ConfigError::DanglingDependency { .. } => {
        Some("Every dependentProjects entry must name a project defined under [projects].".to_string())
      }
      ConfigError::EmptyProjectName => Some("Give every project a non-empty name.".to_string()),
      ConfigError::Parse { .. } => None,
    }
  }
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigError::NotFound { root } => {
        write!(
          f,
          "No impact-graph configuration found.\nSearched in: {} (impact-graph.toml, .impact-graph.toml, impact-graph.json)",
          root.display()
        )
      }
      ConfigError::Parse { path, message } => {
        write!(f, "Failed to parse config {}: {}", path.display(), message)
      }
      ConfigError::ProjectNotFound { name, .. } => {
        write!(f, "Project '{}' not found in configuration", name)
      }
      ConfigError::UnknownProject { name, referenced_by } => match referenced_by {
        Some(from) => write!(
          f,
          "Project '{}' (a dependent of '{}') is not defined in the configuration",
          name, from
        ),
        None => write!(f, "Project '{}' is not defined in the configuration", name),
      },
      ConfigError::DanglingDependency { project, dependency } => {
        write!(
          f,
          "Project '{}' lists dependent project '{}', which is not defined",
          project, dependency
        )
      }
      ConfigError::EmptyProjectName => write!(f, "Project names must not be empty"),
    }
  }
}

/// Result type alias for impact-graph
pub type ImpactResult<T> = Result<T, ImpactError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context to an error result
  fn context(self, ctx: impl Into<String>) -> ImpactResult<T>;

  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> ImpactResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<ImpactError>,
{
  fn context(self, ctx: impl Into<String>) -> ImpactResult<T> {
    self.map_err(|e| e.into().context(ctx))
  }

  fn with_context<F>(self, f: F) -> ImpactResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &ImpactError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}
