//! Auto-naming for angles created without explicit text.
//!
//! The Greek alphabet is tried in order; once every letter is taken the
//! indexed fallback `&alpha;_{0}`, `&alpha;_{1}`, ... is used. Only texts of
//! other angles count as taken.

#[cfg(test)]
#[path = "namer_test.rs"]
mod namer_test;

use std::collections::HashSet;

use crate::consts::{FALLBACK_LABEL_PREFIX, FALLBACK_LABEL_SUFFIX, GREEK_LETTERS};

/// First label not contained in `used`.
#[must_use]
pub fn next_label<'a>(used: impl IntoIterator<Item = &'a str>) -> String {
    let used: HashSet<&str> = used.into_iter().collect();

    if let Some(letter) = GREEK_LETTERS.iter().find(|l| !used.contains(*l)) {
        return (*letter).to_string();
    }

    let mut index: u64 = 0;
    loop {
        let candidate = format!("{FALLBACK_LABEL_PREFIX}{index}{FALLBACK_LABEL_SUFFIX}");
        if !used.contains(candidate.as_str()) {
            return candidate;
        }
        index += 1;
    }
}

/// `requested` verbatim when non-empty, otherwise [`next_label`].
#[must_use]
pub fn resolve_text<'a>(requested: &str, used: impl IntoIterator<Item = &'a str>) -> String {
    if requested.is_empty() { next_label(used) } else { requested.to_string() }
}
