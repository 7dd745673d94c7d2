//! The two install operations.

use crate::config::ConfigError;
use crate::mcp::McpInstaller;
use crate::runtime::local::{LocalRequest, resolve_local};
use crate::runtime::remote::{RemoteRequest, resolve_remote};
use crate::runtime::{Resolution, ResolveError};

use super::context::InstallContext;

/// Install a package published on npm or PyPI.
///
/// Returns the status message (success or the reason nothing was installed).
pub fn install_remote(
    ctx: &InstallContext,
    name: &str,
    args: &[String],
    env: &[String],
) -> Result<String, ConfigError> {
    let request = RemoteRequest {
        name: name.to_string(),
        extra_args: args.to_vec(),
        env: env.to_vec(),
    };
    apply(ctx, resolve_remote(&request, ctx.probe()))
}

/// Install a server from a local project directory.
///
/// Returns the status message (success or the reason nothing was installed).
pub fn install_local(
    ctx: &InstallContext,
    path: &str,
    args: &[String],
    env: &[String],
) -> Result<String, ConfigError> {
    let request = LocalRequest {
        path: path.to_string(),
        extra_args: args.to_vec(),
        env: env.to_vec(),
    };
    apply(ctx, resolve_local(&request, ctx.probe()))
}

fn apply(
    ctx: &InstallContext,
    resolved: Result<Resolution, ResolveError>,
) -> Result<String, ConfigError> {
    let resolution = match resolved {
        Ok(resolution) => resolution,
        Err(err) => {
            tracing::info!(reason = %err, "Nothing installed");
            return Ok(err.to_string());
        }
    };

    McpInstaller::new(ctx.store()).install(&resolution.identifier, &resolution.descriptor)?;
    Ok(resolution.success_message())
}
