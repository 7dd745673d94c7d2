//! Host configuration management
//!
//! The host application (Claude Desktop) keeps its launchable MCP servers in
//! a single JSON document. This module locates that document, reads it
//! tolerantly, and rewrites it with a read-merge-write cycle.

pub mod document;
pub mod error;
pub mod paths;
pub mod store;

pub use document::{ConfigDocument, DocumentSource, LoadedDocument, MCP_SERVERS_KEY, ServerEntry};
pub use error::ConfigError;
pub use paths::{CONFIG_FILE_NAME, HostConfigLocation, PlatformFamily};
pub use store::{ConfigStore, UpsertOutcome};
