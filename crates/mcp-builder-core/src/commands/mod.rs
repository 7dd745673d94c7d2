//! High-level commands for mcp-builder operations.
//!
//! This module provides the public API consumed by frontends (the CLI, or a
//! tool-dispatch layer). Install operations return a status message meant
//! for direct display; only config I/O failures are returned as errors.

pub mod context;
pub mod install;
pub mod list;

pub use context::InstallContext;
pub use install::{install_local, install_remote};
pub use list::{doctor, list_servers};
