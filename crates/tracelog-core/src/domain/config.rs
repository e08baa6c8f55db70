//! Logger configuration - sink selection resolved once at construction

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Which backend receives encoded lines.
///
/// Resolved into a single sink instance when the logger is built; there is no
/// runtime branching on the variant after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SinkConfig {
    /// Write lines to stdout
    Console,
    /// Append lines to a file
    File { path: PathBuf },
}

impl SinkConfig {
    /// Resolve a string-valued backend selection (e.g. from a config file).
    ///
    /// `path` is required for the `file` backend and ignored otherwise.
    pub fn parse(kind: &str, path: Option<PathBuf>) -> Result<Self, ConfigError> {
        match kind.to_lowercase().as_str() {
            "console" => Ok(Self::Console),
            "file" => match path {
                Some(path) => Ok(Self::File { path }),
                None => Err(ConfigError::UnsupportedSink(
                    "file sink selected without a path".to_string(),
                )),
            },
            other => Err(ConfigError::UnsupportedSink(other.to_string())),
        }
    }
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self::Console
    }
}

/// Configuration for a logger facade
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Logical component name stamped on every line
    pub component: String,

    /// Backend selection
    #[serde(default)]
    pub sink: SinkConfig,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            component: "app".to_string(),
            sink: SinkConfig::default(),
        }
    }
}

impl LoggerConfig {
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            sink: SinkConfig::default(),
        }
    }

    pub fn with_sink(mut self, sink: SinkConfig) -> Self {
        self.sink = sink;
        self
    }
}
