//! MCP server installation into the host configuration.

use std::path::PathBuf;

use crate::config::{ConfigError, ConfigStore};

use super::name::sanitize_server_name;
use super::spec::LaunchDescriptor;

/// Report from MCP installation.
#[derive(Debug, Clone)]
pub struct InstallReport {
    /// Sanitized key the entry was stored under.
    pub name: String,
    /// Whether the stored entry differed from the previous one.
    pub changed: bool,
    pub config_path: PathBuf,
}

/// MCP server installer.
pub struct McpInstaller<'a> {
    store: &'a ConfigStore,
}

impl<'a> McpInstaller<'a> {
    pub fn new(store: &'a ConfigStore) -> Self {
        Self { store }
    }

    /// Store `descriptor` under the sanitized form of `identifier`, replacing
    /// any entry of the same name.
    pub fn install(
        &self,
        identifier: &str,
        descriptor: &LaunchDescriptor,
    ) -> Result<InstallReport, ConfigError> {
        let name = sanitize_server_name(identifier);
        let outcome = self.store.upsert_server(&name, descriptor)?;

        tracing::info!(
            server = %name,
            command = %descriptor.command,
            changed = outcome.changed,
            path = %outcome.config_path.display(),
            "Installed MCP server"
        );

        Ok(InstallReport {
            name,
            changed: outcome.changed,
            config_path: outcome.config_path,
        })
    }
}
