//! Install context providing dependency injection for install operations.

use std::path::PathBuf;

use crate::config::ConfigStore;
use crate::probe::{PathProbe, ToolProbe};

/// Dependency injection container for install operations.
///
/// Holds the config store and the tool probe so tests can substitute a fake
/// config location and a fixed set of installed tools.
pub struct InstallContext {
    store: ConfigStore,
    probe: Box<dyn ToolProbe>,
}

impl InstallContext {
    pub fn new(store: ConfigStore, probe: Box<dyn ToolProbe>) -> Self {
        Self { store, probe }
    }

    /// Context for the detected host config and the process `PATH`.
    pub fn with_defaults() -> Self {
        Self::new(ConfigStore::with_defaults(), Box::new(PathProbe::new()))
    }

    /// Context writing to an explicit config file.
    pub fn for_config_file(config_path: impl Into<PathBuf>) -> Self {
        Self::new(
            ConfigStore::from_path(config_path),
            Box::new(PathProbe::new()),
        )
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    pub fn probe(&self) -> &dyn ToolProbe {
        self.probe.as_ref()
    }
}
