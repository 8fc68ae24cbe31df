//! .env text parsing
//!
//! Best-effort by design: blank lines, comments and malformed lines are
//! skipped silently, never reported. Parsing cannot fail.

use crate::entry::Entry;

/// Parse `.env`-style text into an ordered list of classified entries.
///
/// One entry per usable line, in line order. Duplicate keys are kept as
/// separate entries. A line produces no entry when it is blank, a `#`
/// comment, has no key before the first `=`, or no value after it -
/// which also covers lines with no `=` at all. Each entry's `is_secret`
/// flag is initialized from [`crate::is_sensitive_key`].
pub fn parse(content: &str) -> Vec<Entry> {
    let entries: Vec<Entry> = content.lines().filter_map(parse_line).collect();
    tracing::debug!(count = entries.len(), "parsed env content");
    entries
}

fn parse_line(line: &str) -> Option<Entry> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    // Only the first '=' delimits; later ones belong to the value.
    let (key, value) = line.split_once('=')?;
    let (key, value) = (key.trim(), unquote(value.trim()));

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some(Entry::new(key, value))
}

/// Strip exactly one matching pair of surrounding quotes
fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}
