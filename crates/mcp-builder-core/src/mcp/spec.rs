//! Launch descriptor as stored in the host configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Everything the host needs to start an MCP server as a subprocess.
///
/// Serializes to the `mcpServers` entry shape: `command` and `args` are
/// always written, `env` and `cwd` only when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchDescriptor {
    pub command: String,
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cwd: Option<String>,
}
