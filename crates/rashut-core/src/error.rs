//! Error types for the dashboard shell

use rashut_query::QueryError;
use std::path::PathBuf;

/// Configuration could not be loaded or is inconsistent
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// Config file path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// File is not valid TOML for the config schema
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Values parse but contradict each other
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Renderer rejected a view
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// Drawing backend failed
    #[error("chart backend failed: {0}")]
    Backend(String),

    /// View could not be laid out
    #[error("cannot lay out view: {0}")]
    Layout(String),
}

/// Shell-level failure
#[derive(Debug, thiserror::Error)]
pub enum DashError {
    /// Bad configuration
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Record query failed
    #[error("query failed: {0}")]
    Query(#[from] QueryError),
}
