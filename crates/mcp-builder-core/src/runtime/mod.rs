//! Runtime resolution for MCP servers.
//!
//! Decides how a server should be launched and produces a
//! `LaunchDescriptor` for it.
//!
//! ## Design
//!
//! - `Ecosystem` is the closed set of runtime families a server can belong to
//! - `classify_package` and `ProjectMarkers::ecosystem` classify a request once
//! - `remote` resolves published packages, `local` resolves checked-out projects
//! - Both return a `Resolution` or a `ResolveError` whose text is shown to the user
//!
//! | Request                 | Ecosystem | Command                         |
//! |-------------------------|-----------|---------------------------------|
//! | npm package             | Node      | `npx <name> [args...]`          |
//! | PyPI module             | Python    | `python -m <name> [args...]`    |
//! | project with manifest   | Node      | `node <dir>/<main> [args...]`   |
//! | project with module dir | Python    | `python -m <module>` in `<dir>` |
//! | project with scripts    | Python    | `python <dir>/<file>.py`        |

pub mod local;
pub mod remote;

use std::path::Path;

use thiserror::Error;

use crate::mcp::LaunchDescriptor;
use crate::probe::Toolchain;

pub use local::resolve_local;
pub use remote::resolve_remote;

/// Namespace marker of scoped npm packages.
pub const SCOPE_MARKER: char = '@';

pub const NODE_MANIFEST: &str = "package.json";
pub const PYTHON_MANIFEST: &str = "pyproject.toml";
pub const PYTHON_SETUP: &str = "setup.py";

/// Runtime family of an MCP server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ecosystem {
    /// npm packages and Node.js projects
    Node,
    /// PyPI packages and Python projects
    Python,
    Unknown,
}

/// Where the server being installed comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallSource {
    /// A package published on a registry.
    Registry,
    /// A project directory on this machine.
    Local,
}

/// Guess the ecosystem of a published package from its name.
///
/// Scoped names and names without a `.` look like npm packages; dotted
/// names look like Python module paths.
pub fn classify_package(name: &str) -> Ecosystem {
    if name.is_empty() {
        Ecosystem::Unknown
    } else if name.starts_with(SCOPE_MARKER) || !name.contains('.') {
        Ecosystem::Node
    } else {
        Ecosystem::Python
    }
}

/// Project manifests present at the root of a local directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProjectMarkers {
    pub package_json: bool,
    pub pyproject_toml: bool,
    pub setup_py: bool,
}

impl ProjectMarkers {
    pub fn scan(dir: &Path) -> Self {
        Self {
            package_json: dir.join(NODE_MANIFEST).exists(),
            pyproject_toml: dir.join(PYTHON_MANIFEST).exists(),
            setup_py: dir.join(PYTHON_SETUP).exists(),
        }
    }

    pub fn has_python_marker(&self) -> bool {
        self.pyproject_toml || self.setup_py
    }

    /// Ecosystem to launch the project with, given the available tools.
    ///
    /// A Node.js manifest wins when Node.js is usable; a Python marker is
    /// only considered otherwise.
    pub fn ecosystem(&self, toolchain: &Toolchain) -> Ecosystem {
        if self.package_json && toolchain.can_run_node_projects() {
            Ecosystem::Node
        } else if self.has_python_marker() && toolchain.can_run_python_projects() {
            Ecosystem::Python
        } else {
            Ecosystem::Unknown
        }
    }
}

/// A decided launch strategy, ready to be installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub ecosystem: Ecosystem,
    pub source: InstallSource,
    /// Name the server is reported under; sanitized on install.
    pub identifier: String,
    pub descriptor: LaunchDescriptor,
}

impl Resolution {
    /// Status line reported after the entry has been written.
    pub fn success_message(&self) -> String {
        let id = &self.identifier;
        let installed = match (self.source, self.ecosystem) {
            (InstallSource::Registry, Ecosystem::Node) => {
                format!("Successfully installed MCP server '{id}' via npx!")
            }
            (InstallSource::Registry, Ecosystem::Python) => {
                format!("Successfully installed MCP server '{id}' via Python!")
            }
            (InstallSource::Local, Ecosystem::Node) => {
                format!("Successfully installed local Node.js MCP server '{id}'!")
            }
            (InstallSource::Local, Ecosystem::Python) => {
                format!("Successfully installed local Python MCP server '{id}'!")
            }
            (_, Ecosystem::Unknown) => format!("Successfully installed MCP server '{id}'!"),
        };
        format!("{installed} Please tell the user to restart the application.")
    }
}

/// Recoverable reasons an install could not be resolved.
///
/// The `Display` text is the status message returned to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("Neither Node.js nor Python is installed. Please install one of them.")]
    EnvironmentUnavailable,

    #[error("Could not determine how to install '{name}'")]
    UnresolvablePackage { name: String },

    #[error("Path '{path}' does not exist.")]
    PathNotFound { path: String },

    #[error("Error installing Node.js MCP server: {cause}")]
    ManifestParse { cause: String },

    #[error(
        "Could not determine how to install MCP server from '{path}'. Make sure it's a valid Node.js or Python project."
    )]
    UnresolvableProject { path: String },
}
