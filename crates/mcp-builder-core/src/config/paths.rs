//! Host config path resolution helpers.

use std::path::{Path, PathBuf};

/// File name of the Claude Desktop configuration document.
pub const CONFIG_FILE_NAME: &str = "claude_desktop_config.json";

/// Operating system family, as far as config file placement is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformFamily {
    Windows,
    MacOs,
    /// Linux and every other Unix-like system.
    Other,
}

impl PlatformFamily {
    /// Family of the platform this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            PlatformFamily::Windows
        } else if cfg!(target_os = "macos") {
            PlatformFamily::MacOs
        } else {
            PlatformFamily::Other
        }
    }
}

/// Explicit description of where the host config lives.
///
/// `base_dir` is `%APPDATA%` on Windows and the user's home directory
/// everywhere else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfigLocation {
    pub platform: PlatformFamily,
    pub base_dir: PathBuf,
}

impl HostConfigLocation {
    pub fn new(platform: PlatformFamily, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            platform,
            base_dir: base_dir.into(),
        }
    }

    /// Detect the location for the current host.
    ///
    /// Returns `None` only when no base directory can be determined at all.
    pub fn detect() -> Option<Self> {
        let platform = PlatformFamily::current();
        let base_dir = match platform {
            PlatformFamily::Windows => std::env::var_os("APPDATA")
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
                .or_else(dirs::config_dir)?,
            PlatformFamily::MacOs | PlatformFamily::Other => dirs::home_dir()?,
        };
        Some(Self { platform, base_dir })
    }

    /// Full path of the config file under this location.
    pub fn config_path(&self) -> PathBuf {
        config_path_for_platform(self.platform, &self.base_dir)
    }
}

pub fn config_path_for_platform(platform: PlatformFamily, base_dir: &Path) -> PathBuf {
    match platform {
        PlatformFamily::Windows => base_dir.join("Claude").join(CONFIG_FILE_NAME),
        PlatformFamily::MacOs => base_dir
            .join("Library")
            .join("Application Support")
            .join("Claude")
            .join(CONFIG_FILE_NAME),
        PlatformFamily::Other => base_dir.join(".config").join("Claude").join(CONFIG_FILE_NAME),
    }
}
