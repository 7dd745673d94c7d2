//! Config store for loading and saving the host configuration.

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::{ConfigDocument, ConfigError, DocumentSource, HostConfigLocation, LoadedDocument};
use crate::mcp::LaunchDescriptor;

/// Outcome of a single `upsert_server` call.
#[derive(Debug, Clone)]
pub struct UpsertOutcome {
    /// Whether the stored entry differs from what was there before.
    pub changed: bool,
    /// How the document was found before the write.
    pub source: DocumentSource,
    pub config_path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct ConfigStore {
    config_path: Option<PathBuf>,
}

impl ConfigStore {
    /// Store for the detected host location.
    pub fn with_defaults() -> Self {
        Self {
            config_path: HostConfigLocation::detect().map(|location| location.config_path()),
        }
    }

    pub fn from_location(location: &HostConfigLocation) -> Self {
        Self {
            config_path: Some(location.config_path()),
        }
    }

    pub fn from_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: Some(config_path.into()),
        }
    }

    pub fn locate(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    fn require_path(&self) -> Result<&Path, ConfigError> {
        self.locate().ok_or(ConfigError::Unlocatable)
    }

    /// Read the document, falling back to an empty one when the file is
    /// missing or does not hold a JSON object.
    pub fn read(&self) -> Result<LoadedDocument, ConfigError> {
        let Some(path) = self.locate() else {
            tracing::debug!("No config location; starting from an empty document");
            return Ok(LoadedDocument {
                document: ConfigDocument::new(),
                source: DocumentSource::Missing,
            });
        };

        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "Config file not found");
                return Ok(LoadedDocument {
                    document: ConfigDocument::new(),
                    source: DocumentSource::Missing,
                });
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        match ConfigDocument::from_slice(&bytes) {
            Ok(document) => Ok(LoadedDocument {
                document,
                source: DocumentSource::Existing,
            }),
            Err(reason) => {
                tracing::warn!(
                    path = %path.display(),
                    %reason,
                    "Config file is not valid JSON; treating it as empty"
                );
                Ok(LoadedDocument {
                    document: ConfigDocument::new(),
                    source: DocumentSource::Corrupt(reason),
                })
            }
        }
    }

    /// Write the full document as indented JSON.
    ///
    /// The document is serialized before the file is touched, then written
    /// to a sibling temporary file that replaces the config file.
    pub fn write(&self, document: &ConfigDocument) -> Result<(), ConfigError> {
        let path = self.require_path()?;
        let mut bytes = serde_json::to_vec_pretty(document.as_map())?;
        bytes.push(b'\n');

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let target = link_target(path);
        let staging = staging_path(&target);
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        let written =
            std::fs::write(&staging, &bytes).and_then(|()| std::fs::rename(&staging, &target));
        if let Err(source) = written {
            if staging.is_file() {
                let _ = std::fs::remove_file(&staging);
            }
            return Err(write_err(source));
        }
        tracing::debug!(
            path = %path.display(),
            target = %target.display(),
            "Wrote config file"
        );
        Ok(())
    }

    /// Set `mcpServers[name]` to the descriptor and persist the document.
    ///
    /// Any previous entry under the same name is replaced as a whole.
    pub fn upsert_server(
        &self,
        name: &str,
        descriptor: &LaunchDescriptor,
    ) -> Result<UpsertOutcome, ConfigError> {
        let config_path = self.require_path()?.to_path_buf();
        let LoadedDocument {
            mut document,
            source,
        } = self.read()?;

        let value: Value = serde_json::to_value(descriptor)?;
        let changed = document.set_server(name, value);
        self.write(&document)?;

        Ok(UpsertOutcome {
            changed,
            source,
            config_path,
        })
    }
}

/// File the config path ultimately refers to, so that a symlinked config
/// is updated in place instead of being replaced by a regular file.
fn link_target(path: &Path) -> PathBuf {
    if let Ok(target) = std::fs::canonicalize(path) {
        return target;
    }
    // Dangling link: write where it points.
    match std::fs::read_link(path) {
        Ok(link) => match path.parent() {
            Some(parent) => parent.join(link),
            None => link,
        },
        Err(_) => path.to_path_buf(),
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let mut file_name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("config"));
    file_name.push(".tmp");
    path.with_file_name(file_name)
}
