//! The total order over entries of a tree level.
//!
//! Names sort first, as raw bytes. Two entries with the same name fall back
//! to their [`EntryType`](crate::EntryType) ordinals, so the order stays
//! deterministic even for the degenerate case of an object and a sub-tree
//! sharing a name.

use std::cmp::Ordering;

use crate::entry::Entry;

/// Compare two entries by name, then by entry type ordinal.
///
/// Usable directly with `slice::sort_by`.
pub fn compare_entries(a: &Entry, b: &Entry) -> Ordering {
    a.name
        .as_bytes()
        .cmp(b.name.as_bytes())
        .then_with(|| a.entry_type.ordinal().cmp(&b.entry_type.ordinal()))
}

/// Whether two entries refer to the same child of a tree level.
///
/// Name is the only identity key when deciding overrides; a type change under
/// the same name is still an override.
pub fn same_name(a: &Entry, b: &Entry) -> bool {
    a.name == b.name
}
