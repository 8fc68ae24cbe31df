//! Flat JSON export for the secret-management backend

use indexmap::IndexMap;

use crate::entry::Entry;

/// Serialize every secret entry as an indented JSON object.
///
/// Key order follows first insertion; a duplicate key keeps its original
/// position but takes the last value seen (ordinary map overwrite). With
/// no secret entries the output is `{}`.
pub fn render_vault_json(entries: &[Entry]) -> String {
    let secrets: IndexMap<&str, &str> = entries
        .iter()
        .filter(|e| e.is_secret)
        .map(|e| (e.key.as_str(), e.value.as_str()))
        .collect();

    serde_json::to_string_pretty(&secrets).expect("string map serializes")
}
