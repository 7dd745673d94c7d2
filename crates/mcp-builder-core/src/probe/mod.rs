//! Host environment probing.
//!
//! Detects which package managers and interpreters are reachable on `PATH`.
//! Probing is read-only and uncached; a `Toolchain` snapshot is taken once
//! per operation and handed to the resolvers.

pub mod process;
pub mod registry;

use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

pub use process::{CommandOutcome, run_command};

pub const NODE: &str = "node";
pub const NPM: &str = "npm";
pub const NPX: &str = "npx";
pub const PYTHON: &str = "python";
pub const PIP: &str = "pip";

/// Answers whether an executable is resolvable on the host.
pub trait ToolProbe {
    /// True iff `tool` resolves to an executable. Absence is a normal
    /// outcome, never an error.
    fn exists(&self, tool: &str) -> bool;
}

/// Probe backed by an executable search path (the process `PATH` unless
/// overridden).
#[derive(Debug, Clone, Default)]
pub struct PathProbe {
    search_path: Option<OsString>,
}

impl PathProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Probe against an explicit search path instead of `PATH`.
    pub fn with_search_path(search_path: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(search_path.into()),
        }
    }

    /// Absolute path of `tool` on the search path, if it is executable.
    pub fn resolve(&self, tool: &str) -> Option<PathBuf> {
        let resolved = match &self.search_path {
            Some(paths) => {
                let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
                which::which_in(tool, Some(paths), cwd)
            }
            None => which::which(tool),
        };
        resolved.ok()
    }
}

impl ToolProbe for PathProbe {
    fn exists(&self, tool: &str) -> bool {
        let found = self.resolve(tool).is_some();
        tracing::debug!(tool, found, "Probed tool");
        found
    }
}

/// Presence of every tool the resolvers care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Toolchain {
    pub node: bool,
    pub npm: bool,
    pub npx: bool,
    pub python: bool,
    pub pip: bool,
}

impl Toolchain {
    pub fn detect(probe: &dyn ToolProbe) -> Self {
        Self {
            node: probe.exists(NODE),
            npm: probe.exists(NPM),
            npx: probe.exists(NPX),
            python: probe.exists(PYTHON),
            pip: probe.exists(PIP),
        }
    }

    /// At least one runtime family is usable.
    pub fn has_any_runtime(&self) -> bool {
        self.node || self.python
    }

    /// Published npm packages can be launched through `npx`.
    pub fn can_run_npm_packages(&self) -> bool {
        self.npm && self.npx
    }

    /// Published PyPI packages can be launched as `python -m`.
    pub fn can_run_pypi_packages(&self) -> bool {
        self.pip && self.python
    }

    /// A local Node.js project can be launched with `node`.
    pub fn can_run_node_projects(&self) -> bool {
        self.node && self.npm
    }

    /// A local Python project can be launched with `python`.
    pub fn can_run_python_projects(&self) -> bool {
        self.python
    }
}

impl fmt::Display for Toolchain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tools = [
            (NODE, self.node),
            (NPM, self.npm),
            (NPX, self.npx),
            (PYTHON, self.python),
            (PIP, self.pip),
        ];
        for (idx, (tool, present)) in tools.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            let mark = if *present { "found" } else { "missing" };
            write!(f, "{tool:<8}{mark}")?;
        }
        Ok(())
    }
}
