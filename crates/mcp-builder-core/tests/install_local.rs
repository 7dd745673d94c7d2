//! Integration tests for installing servers from local directories.

use std::path::Path;

use serde_json::json;
use tempfile::TempDir;

use mcp_builder_core::commands::{install_local, list_servers};

mod support;

use support::{ALL_TOOLS, FixedProbe, NODE_TOOLS, PYTHON_TOOLS, strings};

fn project(root: &Path, name: &str, files: &[(&str, &str)]) -> String {
    let dir = root.join(name);
    std::fs::create_dir_all(&dir).unwrap();
    for (file, content) in files {
        let path = dir.join(file);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }
    dir.to_string_lossy().into_owned()
}

#[test]
fn node_project_runs_declared_main() {
    let temp = TempDir::new().unwrap();
    let path = project(
        temp.path(),
        "weather-server",
        &[("package.json", r#"{"name": "weather", "main": "dist/server.js"}"#)],
    );
    let probe = FixedProbe::new(NODE_TOOLS);
    let ctx = support::context(temp.path(), &probe);

    let message = install_local(&ctx, &path, &strings(&["--port", "0"]), &[]).unwrap();

    assert_eq!(
        message,
        "Successfully installed local Node.js MCP server 'weather-server'! Please tell the user to restart the application."
    );
    let entry_file = Path::new(&path).join("dist/server.js");
    let config = support::read_json(&support::config_path(temp.path()));
    assert_eq!(
        config["mcpServers"]["weather-server"],
        json!({"command": "node", "args": [entry_file.to_string_lossy(), "--port", "0"]})
    );
}

#[test]
fn node_project_without_main_uses_index() {
    let temp = TempDir::new().unwrap();
    let path = project(temp.path(), "plain", &[("package.json", "{}")]);
    let probe = FixedProbe::new(NODE_TOOLS);
    let ctx = support::context(temp.path(), &probe);

    install_local(&ctx, &path, &[], &[]).unwrap();

    let entries = list_servers(&ctx).unwrap();
    let descriptor = entries[0].descriptor.as_ref().unwrap();
    assert_eq!(
        descriptor.args,
        vec![Path::new(&path).join("index.js").to_string_lossy().into_owned()]
    );
}

#[test]
fn unparseable_manifest_fails_without_writing() {
    let temp = TempDir::new().unwrap();
    let path = project(temp.path(), "broken", &[("package.json", "{ \"main\": ")]);
    let probe = FixedProbe::new(NODE_TOOLS);
    let ctx = support::context(temp.path(), &probe);

    let message = install_local(&ctx, &path, &[], &[]).unwrap();

    assert!(message.starts_with("Error installing Node.js MCP server: "));
    assert!(!support::config_path(temp.path()).exists());
}

#[test]
fn python_project_with_package_dir_runs_module_in_project() {
    let temp = TempDir::new().unwrap();
    let path = project(
        temp.path(),
        "mcp-weather",
        &[
            ("pyproject.toml", "[project]\nname = \"mcp-weather\"\n"),
            ("mcp_weather/__init__.py", ""),
        ],
    );
    let probe = FixedProbe::new(PYTHON_TOOLS);
    let ctx = support::context(temp.path(), &probe);

    let message =
        install_local(&ctx, &path, &strings(&["--debug"]), &strings(&["KEY=v"])).unwrap();

    assert!(message.contains("local Python MCP server 'mcp-weather'"));
    let config = support::read_json(&support::config_path(temp.path()));
    assert_eq!(
        config["mcpServers"]["mcp-weather"],
        json!({
            "command": "python",
            "args": ["-m", "mcp_weather", "--debug"],
            "env": {"KEY": "v"},
            "cwd": path
        })
    );
}

#[test]
fn python_project_without_package_dir_runs_first_script() {
    let temp = TempDir::new().unwrap();
    let path = project(
        temp.path(),
        "scripts",
        &[
            ("setup.py", "from setuptools import setup\n"),
            ("server.py", ""),
            ("app.py", ""),
        ],
    );
    let probe = FixedProbe::new(&["python"]);
    let ctx = support::context(temp.path(), &probe);

    install_local(&ctx, &path, &[], &[]).unwrap();

    let config = support::read_json(&support::config_path(temp.path()));
    let script = Path::new(&path).join("app.py");
    assert_eq!(
        config["mcpServers"]["scripts"],
        json!({"command": "python", "args": [script.to_string_lossy()]})
    );
}

#[test]
fn node_manifest_without_npm_falls_back_to_python() {
    let temp = TempDir::new().unwrap();
    let path = project(
        temp.path(),
        "hybrid",
        &[("package.json", "{}"), ("pyproject.toml", ""), ("main.py", "")],
    );
    let probe = FixedProbe::new(&["node", "python"]);
    let ctx = support::context(temp.path(), &probe);

    let message = install_local(&ctx, &path, &[], &[]).unwrap();

    assert!(message.contains("local Python MCP server 'hybrid'"));
}

#[test]
fn python_marker_without_sources_is_unresolvable() {
    let temp = TempDir::new().unwrap();
    let path = project(temp.path(), "empty", &[("setup.py", "")]);
    let probe = FixedProbe::new(ALL_TOOLS);
    let ctx = support::context(temp.path(), &probe);

    let message = install_local(&ctx, &path, &[], &[]).unwrap();

    assert!(message.starts_with("Could not determine how to install MCP server from"));
}

#[test]
fn unrecognized_project_leaves_config_byte_identical() {
    let temp = TempDir::new().unwrap();
    let config_path = support::config_path(temp.path());
    std::fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    let original = b"{\n  \"mcpServers\": {\n    \"keep\": {\"command\": \"x\", \"args\": []}\n  }\n}";
    std::fs::write(&config_path, original).unwrap();
    let path = project(temp.path(), "notes", &[("README.md", "# notes")]);
    let probe = FixedProbe::new(&[]);
    let ctx = support::context(temp.path(), &probe);

    let message = install_local(&ctx, &path, &[], &[]).unwrap();

    assert_eq!(
        message,
        format!(
            "Could not determine how to install MCP server from '{path}'. Make sure it's a valid Node.js or Python project."
        )
    );
    assert_eq!(std::fs::read(&config_path).unwrap(), original);
}

#[test]
fn missing_path_fails_before_probing() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nowhere").to_string_lossy().into_owned();
    let probe = FixedProbe::new(ALL_TOOLS);
    let ctx = support::context(temp.path(), &probe);

    let message = install_local(&ctx, &missing, &[], &[]).unwrap();

    assert_eq!(message, format!("Path '{missing}' does not exist."));
    assert_eq!(probe.queries(), 0);
    assert!(!support::config_path(temp.path()).exists());
}
