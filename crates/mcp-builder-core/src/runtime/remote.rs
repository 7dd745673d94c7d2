//! Resolution of published packages (npm or PyPI).

use crate::mcp::LaunchDescriptor;
use crate::probe::{NPX, PYTHON, ToolProbe, Toolchain};

use super::{Ecosystem, InstallSource, Resolution, ResolveError, SCOPE_MARKER, classify_package};

/// Request to resolve a published package.
#[derive(Debug, Clone, Default)]
pub struct RemoteRequest {
    /// Package name as published, possibly scoped (`@scope/name`).
    pub name: String,
    pub extra_args: Vec<String>,
    /// `KEY=VALUE` pairs.
    pub env: Vec<String>,
}

/// Decide how to launch a published package.
///
/// Rules, first match wins:
/// 1. no Node.js and no Python at all: fail
/// 2. npm-looking name with `npm` + `npx`: `npx <name>`
/// 3. dotted name with `pip` + `python`: `python -m <name>`
/// 4. otherwise `npx` if usable, then `python -m` if usable
pub fn resolve_remote(
    request: &RemoteRequest,
    probe: &dyn ToolProbe,
) -> Result<Resolution, ResolveError> {
    let toolchain = Toolchain::detect(probe);
    resolve_with_toolchain(request, &toolchain)
}

pub fn resolve_with_toolchain(
    request: &RemoteRequest,
    toolchain: &Toolchain,
) -> Result<Resolution, ResolveError> {
    let name = request.name.as_str();
    if !toolchain.has_any_runtime() {
        return Err(ResolveError::EnvironmentUnavailable);
    }

    let ecosystem = classify_package(name);
    tracing::debug!(name, ?ecosystem, "Classified package");
    if ecosystem == Ecosystem::Unknown {
        return Err(ResolveError::UnresolvablePackage {
            name: name.to_string(),
        });
    }

    if ecosystem == Ecosystem::Node && toolchain.can_run_npm_packages() {
        return Ok(npx_resolution(request, unscoped_name(name)));
    }

    if name.contains('.') && toolchain.can_run_pypi_packages() {
        return Ok(python_resolution(request, name));
    }

    if toolchain.can_run_npm_packages() {
        let identifier = last_segment(name, '/');
        return Ok(npx_resolution(request, identifier));
    }
    if toolchain.can_run_pypi_packages() {
        let identifier = last_segment(name, '.');
        return Ok(python_resolution(request, identifier));
    }

    Err(ResolveError::UnresolvablePackage {
        name: name.to_string(),
    })
}

/// `@scope/package` becomes `package`; anything else, including a scope
/// with an empty package segment, is kept.
fn unscoped_name(name: &str) -> &str {
    name.strip_prefix(SCOPE_MARKER)
        .and_then(|scoped| scoped.split('/').nth(1))
        .filter(|package| !package.is_empty())
        .unwrap_or(name)
}

/// Text after the last `separator`, or the whole name when that is empty.
fn last_segment(name: &str, separator: char) -> &str {
    name.rsplit(separator)
        .next()
        .filter(|segment| !segment.is_empty())
        .unwrap_or(name)
}

fn npx_resolution(request: &RemoteRequest, identifier: &str) -> Resolution {
    let mut args = vec![request.name.clone()];
    args.extend(request.extra_args.iter().cloned());

    Resolution {
        ecosystem: Ecosystem::Node,
        source: InstallSource::Registry,
        identifier: identifier.to_string(),
        descriptor: LaunchDescriptor::build(NPX, args, &request.env, None),
    }
}

fn python_resolution(request: &RemoteRequest, identifier: &str) -> Resolution {
    let mut args = vec!["-m".to_string(), request.name.clone()];
    args.extend(request.extra_args.iter().cloned());

    Resolution {
        ecosystem: Ecosystem::Python,
        source: InstallSource::Registry,
        identifier: identifier.to_string(),
        descriptor: LaunchDescriptor::build(PYTHON, args, &request.env, None),
    }
}
