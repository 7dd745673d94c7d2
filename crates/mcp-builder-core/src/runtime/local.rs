//! Resolution of MCP servers checked out in a local directory.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::mcp::LaunchDescriptor;
use crate::probe::{NODE, PYTHON, ToolProbe, Toolchain};

use super::{
    Ecosystem, InstallSource, NODE_MANIFEST, PYTHON_SETUP, ProjectMarkers, Resolution,
    ResolveError,
};

/// Entry point assumed when `package.json` declares no `main`.
pub const DEFAULT_NODE_ENTRY: &str = "index.js";

/// Request to resolve a local project directory.
#[derive(Debug, Clone, Default)]
pub struct LocalRequest {
    /// Project directory, as given by the caller.
    pub path: String,
    pub extra_args: Vec<String>,
    /// `KEY=VALUE` pairs.
    pub env: Vec<String>,
}

/// Decide how to launch the project at `request.path`.
///
/// A missing path fails before any tool is probed.
pub fn resolve_local(
    request: &LocalRequest,
    probe: &dyn ToolProbe,
) -> Result<Resolution, ResolveError> {
    let root = Path::new(&request.path);
    if !root.exists() {
        return Err(ResolveError::PathNotFound {
            path: request.path.clone(),
        });
    }

    let markers = ProjectMarkers::scan(root);
    let toolchain = Toolchain::detect(probe);
    let ecosystem = markers.ecosystem(&toolchain);
    tracing::debug!(path = %root.display(), ?markers, ?ecosystem, "Classified project");

    let identifier = project_name(root);
    let resolved = match ecosystem {
        Ecosystem::Node => Some(resolve_node_project(request, root, &identifier)?),
        Ecosystem::Python => resolve_python_project(request, root, &identifier),
        Ecosystem::Unknown => None,
    };

    resolved.ok_or_else(|| ResolveError::UnresolvableProject {
        path: request.path.clone(),
    })
}

/// Base name of the project directory.
fn project_name(root: &Path) -> String {
    root.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .or_else(|| {
            std::fs::canonicalize(root)
                .ok()
                .and_then(|path| path.file_name().map(|n| n.to_string_lossy().into_owned()))
        })
        .unwrap_or_else(|| root.to_string_lossy().into_owned())
}

fn resolve_node_project(
    request: &LocalRequest,
    root: &Path,
    identifier: &str,
) -> Result<Resolution, ResolveError> {
    let entry = node_entry_point(&root.join(NODE_MANIFEST))?;

    let mut args = vec![path_arg(&root.join(entry))];
    args.extend(request.extra_args.iter().cloned());

    Ok(Resolution {
        ecosystem: Ecosystem::Node,
        source: InstallSource::Local,
        identifier: identifier.to_string(),
        descriptor: LaunchDescriptor::build(NODE, args, &request.env, None),
    })
}

/// Read `main` from a Node.js manifest.
fn node_entry_point(manifest_path: &Path) -> Result<String, ResolveError> {
    let content =
        std::fs::read_to_string(manifest_path).map_err(|err| ResolveError::ManifestParse {
            cause: format!("Failed to read {}: {err}", manifest_path.display()),
        })?;
    let manifest: Value =
        serde_json::from_str(&content).map_err(|err| ResolveError::ManifestParse {
            cause: err.to_string(),
        })?;

    Ok(manifest
        .get("main")
        .and_then(Value::as_str)
        .filter(|main| !main.is_empty())
        .unwrap_or(DEFAULT_NODE_ENTRY)
        .to_string())
}

fn resolve_python_project(
    request: &LocalRequest,
    root: &Path,
    identifier: &str,
) -> Option<Resolution> {
    let module_name = identifier.replace('-', "_");

    let (args, cwd) = if root.join(&module_name).is_dir() {
        let mut args = vec!["-m".to_string(), module_name];
        args.extend(request.extra_args.iter().cloned());
        (args, Some(request.path.as_str()))
    } else {
        let script = first_python_script(root)?;
        let mut args = vec![path_arg(&script)];
        args.extend(request.extra_args.iter().cloned());
        (args, None)
    };

    Some(Resolution {
        ecosystem: Ecosystem::Python,
        source: InstallSource::Local,
        identifier: identifier.to_string(),
        descriptor: LaunchDescriptor::build(PYTHON, args, &request.env, cwd),
    })
}

/// First `.py` file at the project root in lexicographic order, ignoring
/// `setup.py`.
fn first_python_script(root: &Path) -> Option<PathBuf> {
    let entries = match std::fs::read_dir(root) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::debug!(path = %root.display(), error = %err, "Could not list project");
            return None;
        }
    };

    let mut scripts: Vec<String> = entries
        .filter_map(Result::ok)
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name.ends_with(".py") && name != PYTHON_SETUP)
        .collect();
    scripts.sort();

    scripts.into_iter().next().map(|name| root.join(name))
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
