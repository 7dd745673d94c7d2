//! Package registry lookups through the ecosystems' own tools.

use super::process::run_command;
use super::{NPM, PIP, PathProbe};

/// Runs `npm`/`pip` queries, locating both on a search path first.
#[derive(Debug, Clone, Default)]
pub struct RegistryClient {
    tools: PathProbe,
}

impl RegistryClient {
    /// Client using the process `PATH`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tools(tools: PathProbe) -> Self {
        Self { tools }
    }

    /// Whether `npm view <name>` knows the package.
    pub fn npm_package_exists(&self, name: &str) -> bool {
        self.succeeds(NPM, &["view", name])
    }

    /// Whether `pip search <name>` finds the package.
    ///
    /// PyPI disabled the search API, so this is false on most current pip
    /// versions even for published packages.
    pub fn pypi_package_exists(&self, name: &str) -> bool {
        self.succeeds(PIP, &["search", name])
    }

    pub fn lookup(&self, name: &str) -> RegistryLookup {
        RegistryLookup {
            npm: self.npm_package_exists(name),
            pypi: self.pypi_package_exists(name),
        }
    }

    fn succeeds(&self, tool: &str, args: &[&str]) -> bool {
        match self.tools.resolve(tool) {
            Some(program) => run_command(program, args, None, None).success,
            None => {
                tracing::debug!(tool, "Registry tool not found");
                false
            }
        }
    }
}

/// Result of looking a name up in both registries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryLookup {
    pub npm: bool,
    pub pypi: bool,
}

impl RegistryLookup {
    /// Look `name` up with the tools on the process `PATH`.
    pub fn run(name: &str) -> Self {
        RegistryClient::new().lookup(name)
    }
}
