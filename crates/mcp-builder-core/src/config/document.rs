//! In-memory form of the host configuration document.

use serde_json::{Map, Value};

use crate::mcp::LaunchDescriptor;

/// Top-level key holding the launchable server entries.
pub const MCP_SERVERS_KEY: &str = "mcpServers";

/// Root JSON object of the host configuration.
///
/// Only `mcpServers` is interpreted; every other top-level key is carried
/// through rewrites untouched and in its original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigDocument {
    root: Map<String, Value>,
}

impl ConfigDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(root: Map<String, Value>) -> Self {
        Self { root }
    }

    /// Parse a document from raw bytes. Anything other than a JSON object
    /// at the root is rejected.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, String> {
        match serde_json::from_slice::<Value>(bytes) {
            Ok(Value::Object(root)) => Ok(Self { root }),
            Ok(other) => Err(format!("expected a JSON object at root, found {}", kind(&other))),
            Err(err) => Err(err.to_string()),
        }
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// The `mcpServers` mapping, if present and well-formed.
    pub fn servers(&self) -> Option<&Map<String, Value>> {
        self.root.get(MCP_SERVERS_KEY).and_then(Value::as_object)
    }

    pub fn server(&self, name: &str) -> Option<&Value> {
        self.servers().and_then(|servers| servers.get(name))
    }

    /// Stored entries in document order.
    pub fn server_entries(&self) -> Vec<ServerEntry> {
        self.servers()
            .map(|servers| {
                servers
                    .iter()
                    .map(|(name, value)| ServerEntry::from_value(name, value))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Insert or replace `mcpServers[name]`, creating the mapping when
    /// needed. Returns whether the stored value changed.
    pub fn set_server(&mut self, name: &str, value: Value) -> bool {
        let slot = self
            .root
            .entry(MCP_SERVERS_KEY)
            .or_insert_with(|| Value::Object(Map::new()));
        if !slot.is_object() {
            tracing::warn!(
                found = kind(slot),
                "Replacing non-object '{MCP_SERVERS_KEY}' value with an empty mapping"
            );
            *slot = Value::Object(Map::new());
        }
        let Value::Object(servers) = slot else {
            return false;
        };

        if servers.get(name) == Some(&value) {
            return false;
        }
        servers.insert(name.to_string(), value);
        true
    }
}

/// A named entry of the `mcpServers` mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerEntry {
    pub name: String,
    /// `None` when the stored value is not a command-style entry (for
    /// example a hand-written remote server).
    pub descriptor: Option<LaunchDescriptor>,
}

impl ServerEntry {
    fn from_value(name: &str, value: &Value) -> Self {
        Self {
            name: name.to_string(),
            descriptor: serde_json::from_value(value.clone()).ok(),
        }
    }
}

/// How the on-disk document was found when it was read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    /// Parsed from an existing, well-formed file.
    Existing,
    /// No file (or no location); started from an empty document.
    Missing,
    /// The file exists but is not a JSON object; started from an empty
    /// document. Carries the parse error text.
    Corrupt(String),
}

/// Result of reading the config file.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    pub document: ConfigDocument,
    pub source: DocumentSource,
}

impl LoadedDocument {
    pub fn is_fallback(&self) -> bool {
        !matches!(self.source, DocumentSource::Existing)
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_slice_rejects_non_object_root() {
        let err = ConfigDocument::from_slice(b"[1, 2]").unwrap_err();
        assert!(err.contains("array"));
    }

    #[test]
    fn test_from_slice_rejects_invalid_json() {
        assert!(ConfigDocument::from_slice(b"{ not json").is_err());
    }

    #[test]
    fn test_set_server_creates_mapping() {
        let mut doc = ConfigDocument::new();
        let changed = doc.set_server("demo", json!({"command": "npx", "args": []}));

        assert!(changed);
        assert_eq!(doc.server("demo"), Some(&json!({"command": "npx", "args": []})));
    }

    #[test]
    fn test_set_server_reports_unchanged_value() {
        let mut doc = ConfigDocument::new();
        doc.set_server("demo", json!({"command": "npx", "args": []}));
        let changed = doc.set_server("demo", json!({"command": "npx", "args": []}));

        assert!(!changed);
    }

    #[test]
    fn test_set_server_replaces_malformed_mapping() {
        let root = json!({"mcpServers": ["broken"], "theme": "dark"});
        let Value::Object(map) = root else {
            unreachable!()
        };
        let mut doc = ConfigDocument::from_map(map);

        doc.set_server("demo", json!({"command": "node", "args": []}));

        assert_eq!(
            doc.servers().and_then(|servers| servers.get("demo")),
            Some(&json!({"command": "node", "args": []}))
        );
        assert_eq!(doc.as_map().get("theme"), Some(&json!("dark")));
    }

    #[test]
    fn test_set_server_replaces_null_mapping() {
        let root = json!({"mcpServers": null});
        let Value::Object(map) = root else {
            unreachable!()
        };
        let mut doc = ConfigDocument::from_map(map);

        let changed = doc.set_server("demo", json!({"command": "npx", "args": []}));

        assert!(changed);
        assert_eq!(doc.server("demo"), Some(&json!({"command": "npx", "args": []})));
    }

    #[test]
    fn test_server_entries_keep_foreign_entries() {
        let root = json!({
            "mcpServers": {
                "local": {"command": "node", "args": ["index.js"]},
                "remote": {"url": "https://example.com/mcp"}
            }
        });
        let Value::Object(map) = root else {
            unreachable!()
        };
        let doc = ConfigDocument::from_map(map);

        let entries = doc.server_entries();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "local");
        assert!(entries[0].descriptor.is_some());
        assert_eq!(entries[1].name, "remote");
        assert!(entries[1].descriptor.is_none());
    }
}
