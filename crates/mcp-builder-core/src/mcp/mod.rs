//! MCP server launch descriptors and their installation

pub mod builder;
pub mod installer;
pub mod name;
pub mod spec;

pub use builder::parse_env_pairs;
pub use installer::{InstallReport, McpInstaller};
pub use name::sanitize_server_name;
pub use spec::LaunchDescriptor;
