//! MCP Builder Core Library
//!
//! Resolves how to launch a packaged MCP server (published on npm/PyPI or
//! checked out locally) and records it in the Claude Desktop configuration.

pub mod commands;
pub mod config;
pub mod mcp;
pub mod probe;
pub mod runtime;

/// Re-exports of commonly used types
pub mod prelude {
    // Configuration
    pub use crate::config::{
        ConfigDocument, ConfigError, ConfigStore, DocumentSource, HostConfigLocation,
        LoadedDocument, PlatformFamily, ServerEntry,
    };

    // MCP
    pub use crate::mcp::{InstallReport, LaunchDescriptor, McpInstaller, sanitize_server_name};

    // Probing
    pub use crate::probe::{PathProbe, ToolProbe, Toolchain};

    // Runtime resolution
    pub use crate::runtime::{Ecosystem, Resolution, ResolveError};

    // Commands
    pub use crate::commands::{InstallContext, install_local, install_remote};
}
