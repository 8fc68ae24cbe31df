//! The classified key/value entry produced by parsing

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Key substrings that mark a variable as sensitive.
///
/// Substring match, not whole-word: `API_KEY_ID` matches on `key` and so
/// does `MONKEY`. Over-flagging is the safer default and the caller can
/// always flip the flag back.
static SENSITIVE_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)password|key|secret|token|username").expect("valid regex"));

/// One key/value pair derived from one input line
///
/// The parser guarantees `key` and `value` are trimmed and non-empty.
/// `is_secret` starts from the classification heuristic and may be
/// toggled by the caller before rendering; renderers only read it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub key: String,
    pub value: String,
    pub is_secret: bool,
}

impl Entry {
    /// Create an entry, classifying the key with [`is_sensitive_key`]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let is_secret = is_sensitive_key(&key);
        Self {
            key,
            value: value.into(),
            is_secret,
        }
    }
}

/// Default secret-classification heuristic
///
/// True when the key contains, case-insensitively, any of `password`,
/// `key`, `secret`, `token` or `username`.
pub fn is_sensitive_key(key: &str) -> bool {
    SENSITIVE_KEY.is_match(key)
}
