//! Version ordering used during selection.
//!
//! Versions are compared as raw byte strings, not as semantic versions. This
//! means `"2.0"` orders after `"10.0"` and wins a selection between the two.
//! Switching to a semver-aware comparison would change which version is
//! selected for real registry data, so callers must not assume numeric
//! ordering here.

use std::cmp::Ordering;

/// Compare two version strings byte-wise lexicographically.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    a.as_bytes().cmp(b.as_bytes())
}

/// `candidate` orders strictly after `current`.
pub fn is_newer(candidate: &str, current: &str) -> bool {
    compare_versions(candidate, current) == Ordering::Greater
}
