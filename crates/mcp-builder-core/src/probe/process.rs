//! Blocking execution of opaque external commands.

use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::path::Path;
use std::process::Command;

/// Combined result of running an external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    /// The command started and exited with status 0.
    pub success: bool,
    /// Captured stdout followed by stderr, or the spawn error text.
    pub output: String,
}

/// Run `program` to completion, capturing both output streams.
///
/// `env` entries are layered over the inherited environment. Failing to
/// start the program is reported through the outcome, never as an error.
pub fn run_command(
    program: impl AsRef<OsStr>,
    args: &[&str],
    cwd: Option<&Path>,
    env: Option<&BTreeMap<String, String>>,
) -> CommandOutcome {
    let program = program.as_ref();
    let mut cmd = Command::new(program);
    cmd.args(args);
    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }
    if let Some(vars) = env {
        cmd.envs(vars);
    }

    match cmd.output() {
        Ok(output) => {
            let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
            text.push_str(&String::from_utf8_lossy(&output.stderr));
            tracing::debug!(?program, ?args, status = %output.status, "Command finished");
            CommandOutcome {
                success: output.status.success(),
                output: text,
            }
        }
        Err(err) => {
            tracing::debug!(?program, ?args, error = %err, "Command failed to start");
            CommandOutcome {
                success: false,
                output: err.to_string(),
            }
        }
    }
}
