//! Config key derivation for installed servers.

/// Turn a raw package or directory name into a config-safe identifier.
///
/// A scoped name (`@scope/package`) is reduced to its package segment, then
/// every character outside `[A-Za-z0-9_-]` becomes `-`.
pub fn sanitize_server_name(raw: &str) -> String {
    let unscoped = raw
        .strip_prefix('@')
        .and_then(|scoped| scoped.split('/').nth(1))
        .filter(|package| !package.is_empty())
        .unwrap_or(raw);

    unscoped
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || matches!(ch, '_' | '-') {
                ch
            } else {
                '-'
            }
        })
        .collect()
}
