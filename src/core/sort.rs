//! Name ordering for directory entries.
//!
//! Names are compared case-insensitively over their raw bytes (ASCII folding only, no
//! locale collation). Names that fold to the same bytes fall back to a plain byte
//! comparison, so the order is total and the same on every run.

use crate::core::fm::DirectoryEntry;

use std::cmp::Ordering;
use std::ffi::OsStr;

/// Compares two entry names case-insensitively, breaking ties byte-wise.
pub fn compare_names(a: &OsStr, b: &OsStr) -> Ordering {
    let (a, b) = (a.as_encoded_bytes(), b.as_encoded_bytes());
    let folded = a
        .iter()
        .map(u8::to_ascii_lowercase)
        .cmp(b.iter().map(u8::to_ascii_lowercase));
    folded.then_with(|| a.cmp(b))
}

/// Sorts the given entries in place by name. Stable, O(n log n).
pub fn sort_entries(entries: &mut [DirectoryEntry]) {
    entries.sort_by(|a, b| compare_names(a.name(), b.name()));
}
