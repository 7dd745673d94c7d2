//! Hard failures of the config read/modify/write path.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that prevent the host configuration from being persisted.
///
/// These are the only failures that escape the install operations; every
/// other condition is reported as a status message.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No config file location could be derived for this host.
    #[error("Could not find Claude Desktop config file")]
    Unlocatable,

    /// The config file exists but could not be read.
    #[error("Failed to read config file: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A document or descriptor could not be rendered as JSON.
    #[error("Failed to serialize JSON config")]
    Serialize(#[from] serde_json::Error),

    /// The directory holding the config file could not be created.
    #[error("Failed to create config directory: {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file could not be written or replaced.
    #[error("Failed to write config file: {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
