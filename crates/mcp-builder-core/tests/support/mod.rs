//! Shared fixtures for integration tests.
#![allow(dead_code)]

use std::cell::Cell;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use mcp_builder_core::commands::InstallContext;
use mcp_builder_core::config::ConfigStore;
use mcp_builder_core::probe::ToolProbe;

pub const NODE_TOOLS: &[&str] = &["node", "npm", "npx"];
pub const PYTHON_TOOLS: &[&str] = &["python", "pip"];
pub const ALL_TOOLS: &[&str] = &["node", "npm", "npx", "python", "pip"];

/// Probe reporting a fixed set of installed tools and counting queries.
#[derive(Clone)]
pub struct FixedProbe {
    tools: HashSet<String>,
    queries: Rc<Cell<usize>>,
}

impl FixedProbe {
    pub fn new(tools: &[&str]) -> Self {
        Self {
            tools: tools.iter().map(|t| t.to_string()).collect(),
            queries: Rc::new(Cell::new(0)),
        }
    }

    pub fn queries(&self) -> usize {
        self.queries.get()
    }
}

impl ToolProbe for FixedProbe {
    fn exists(&self, tool: &str) -> bool {
        self.queries.set(self.queries.get() + 1);
        self.tools.contains(tool)
    }
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join("Claude").join("claude_desktop_config.json")
}

pub fn context(root: &Path, probe: &FixedProbe) -> InstallContext {
    InstallContext::new(
        ConfigStore::from_path(config_path(root)),
        Box::new(probe.clone()),
    )
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn read_json(path: &Path) -> serde_json::Value {
    let bytes = std::fs::read(path).unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Write an executable `sh` script named `name` that exits 0.
#[cfg(unix)]
pub fn install_fake_tool(dir: &Path, name: &str) {
    install_fake_script(dir, name, "exit 0");
}

/// Write an executable `sh` script named `name` running `body`.
#[cfg(unix)]
pub fn install_fake_script(dir: &Path, name: &str, body: &str) {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();
}
