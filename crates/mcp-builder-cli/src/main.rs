//! mcp-builder - install MCP servers into Claude Desktop
//!
//! Usage:
//!   mcp-builder remote <NAME> [-- ARGS...]   # npm or PyPI package
//!   mcp-builder local <PATH> [-- ARGS...]    # checked-out project
//!   mcp-builder list                         # show configured servers
//!   mcp-builder doctor                       # show detected tools

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mcp_builder_core::commands::{
    InstallContext, doctor, install_local, install_remote, list_servers,
};
use mcp_builder_core::config::ServerEntry;
use mcp_builder_core::probe::registry::RegistryLookup;

#[derive(Parser)]
#[command(name = "mcp-builder")]
#[command(about = "Install MCP servers into Claude Desktop", long_about = None)]
struct Cli {
    /// Use this config file instead of the Claude Desktop default
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Install an MCP server published on npm or PyPI
    Remote(InstallArgs),

    /// Install an MCP server from a local project directory
    Local(InstallArgs),

    /// List configured MCP servers
    #[command(alias = "ls")]
    List {
        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Show which runtimes and package managers are available
    Doctor,

    /// Look a package name up on npm and PyPI
    Check {
        /// Package name
        name: String,
    },
}

#[derive(Args)]
struct InstallArgs {
    /// Package name (remote) or project directory (local)
    target: String,
    /// Environment variable for the server (KEY=VALUE)
    #[arg(long, short, value_name = "KEY=VALUE")]
    env: Vec<String>,
    /// Extra arguments passed to the server (after --)
    #[arg(last = true)]
    args: Vec<String>,
}

#[derive(Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// Machine-readable JSON
    Json,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mcp_builder=info,mcp_builder_core=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let ctx = match &cli.config {
        Some(path) => InstallContext::for_config_file(path),
        None => InstallContext::with_defaults(),
    };
    tracing::debug!(config = ?ctx.store().locate(), "Using host config");

    run_cli(&ctx, cli.command)
}

fn run_cli(ctx: &InstallContext, command: Commands) -> Result<()> {
    match command {
        Commands::Remote(args) => {
            let message = install_remote(ctx, &args.target, &args.args, &args.env)
                .with_context(|| format!("Failed to install '{}'", args.target))?;
            println!("{message}");
        }
        Commands::Local(args) => {
            let message = install_local(ctx, &args.target, &args.args, &args.env)
                .with_context(|| format!("Failed to install '{}'", args.target))?;
            println!("{message}");
        }
        Commands::List { format } => {
            let entries = list_servers(ctx).context("Failed to read config")?;
            match format {
                OutputFormat::Table => print_servers_table(&entries),
                OutputFormat::Json => print_servers_json(&entries)?,
            }
        }
        Commands::Doctor => {
            println!("{}", doctor(ctx));
            if let Some(path) = ctx.store().locate() {
                println!("config  {}", path.display());
            }
        }
        Commands::Check { name } => {
            let lookup = RegistryLookup::run(&name);
            println!("npm     {}", found(lookup.npm));
            println!("pypi    {}", found(lookup.pypi));
        }
    }
    Ok(())
}

fn found(present: bool) -> &'static str {
    if present { "found" } else { "not found" }
}

fn print_servers_table(entries: &[ServerEntry]) {
    if entries.is_empty() {
        println!("No MCP servers configured.");
        return;
    }

    let width = entries.iter().map(|e| e.name.len()).max().unwrap_or(0);
    for entry in entries {
        let launch = match &entry.descriptor {
            Some(descriptor) => {
                let mut line = descriptor.command.clone();
                for arg in &descriptor.args {
                    line.push(' ');
                    line.push_str(arg);
                }
                line
            }
            None => "(not a command entry)".to_string(),
        };
        println!("{:<width$}  {}", entry.name, launch);
    }
}

fn print_servers_json(entries: &[ServerEntry]) -> Result<()> {
    let output: Vec<serde_json::Value> = entries
        .iter()
        .map(|entry| {
            serde_json::json!({
                "name": entry.name,
                "command": entry.descriptor.as_ref().map(|d| d.command.clone()),
                "args": entry.descriptor.as_ref().map(|d| d.args.clone()),
            })
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
