//! Read-only views over the host config and the toolchain.

use crate::config::{ConfigError, ServerEntry};
use crate::probe::Toolchain;

use super::context::InstallContext;

/// Entries currently stored in the host config, in document order.
pub fn list_servers(ctx: &InstallContext) -> Result<Vec<ServerEntry>, ConfigError> {
    Ok(ctx.store().read()?.document.server_entries())
}

/// Snapshot of the tools the resolvers would see right now.
pub fn doctor(ctx: &InstallContext) -> Toolchain {
    Toolchain::detect(ctx.probe())
}
