//! Dotted key path syntax.
//!
//! A key path is one or more segments of `[A-Za-z0-9_-]` joined by
//! dots, e.g. `server.http.port`. Keys containing dots, spaces or
//! other punctuation cannot be addressed.

use regex::Regex;
use std::sync::LazyLock;

static KEY_PATH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]+(\.[A-Za-z0-9_-]+)*$").expect("invalid key path regex")
});

/// Check that a string is a well-formed dotted key path.
pub fn is_valid_key_path(path: &str) -> bool {
    KEY_PATH_RE.is_match(path)
}

/// Strip surrounding whitespace, as pasted text usually carries some.
pub fn normalize_key_path(path: &str) -> &str {
    path.trim()
}

pub fn split_key_path(path: &str) -> Vec<String> {
    path.split('.').map(str::to_string).collect()
}

pub fn join_key_path(segments: &[String]) -> String {
    segments.join(".")
}
