//! CLI commands

use envkube_core::Entry;
use std::fs;
use std::path::Path;

use crate::error::CliError;

pub mod convert;
pub mod inspect;

/// Read the .env file, mapping failures to the IO exit code
pub(crate) fn read_env_file(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|err| CliError::io(path, err))
}

/// Apply --secret/--plain overrides on top of the parse-time heuristic.
///
/// Keys that match no entry are ignored, matching the permissive parser.
/// Naming the same key in both lists is the one input we refuse.
pub(crate) fn apply_overrides(
    entries: &mut [Entry],
    secret_keys: &[String],
    plain_keys: &[String],
) -> Result<(), CliError> {
    if let Some(key) = secret_keys.iter().find(|k| plain_keys.contains(k)) {
        return Err(CliError::usage(
            format!("key '{key}' passed to both --secret and --plain"),
            "drop one of the two flags for this key",
        ));
    }

    for entry in entries.iter_mut() {
        if secret_keys.iter().any(|k| k == &entry.key) {
            entry.is_secret = true;
        }
        if plain_keys.iter().any(|k| k == &entry.key) {
            entry.is_secret = false;
        }
    }

    Ok(())
}
