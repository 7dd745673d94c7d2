//! Construction of normalized launch descriptors.

use std::collections::BTreeMap;

use super::spec::LaunchDescriptor;

/// Parse `KEY=VALUE` pairs into an environment mapping.
///
/// Splits on the first `=` only, drops entries without one, and returns
/// `None` when nothing usable was supplied so callers can tell "no
/// environment requested" apart from an empty one.
pub fn parse_env_pairs(pairs: &[String]) -> Option<BTreeMap<String, String>> {
    let env: BTreeMap<String, String> = pairs
        .iter()
        .filter_map(|pair| pair.split_once('='))
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();

    if env.is_empty() { None } else { Some(env) }
}

impl LaunchDescriptor {
    /// Build a descriptor from resolver output and caller-supplied extras.
    ///
    /// `cwd` is attached as given (no existence check); an empty string
    /// counts as absent.
    pub fn build(
        command: impl Into<String>,
        args: Vec<String>,
        env_pairs: &[String],
        cwd: Option<&str>,
    ) -> Self {
        Self {
            command: command.into(),
            args,
            env: parse_env_pairs(env_pairs),
            cwd: cwd.filter(|dir| !dir.is_empty()).map(str::to_string),
        }
    }
}
