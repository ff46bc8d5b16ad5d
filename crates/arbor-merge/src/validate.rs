//! Ordering checks for merge inputs.
//!
//! The merge itself trusts its inputs. These checks back
//! [`InputPolicy::Validated`](crate::InputPolicy::Validated) and are public so
//! staging layers can verify what they produce.

use std::cmp::Ordering;

use arbor_tree::{compare_entries, same_name, Entry, WorkspaceEntry};

use crate::error::{MergeError, MergeResult};

/// Check that `entries` is strictly ordered with no repeated names.
pub fn validate_entries(entries: &[Entry]) -> MergeResult<()> {
    match first_out_of_order(entries.iter()) {
        Some((index, previous, next)) => Err(MergeError::UnsortedEntries {
            index,
            previous: previous.name.clone(),
            next: next.name.clone(),
        }),
        None => Ok(()),
    }
}

/// Check that `changes` is strictly ordered with no repeated names.
pub fn validate_changes(changes: &[WorkspaceEntry]) -> MergeResult<()> {
    match first_out_of_order(changes.iter().map(WorkspaceEntry::entry)) {
        Some((index, previous, next)) => Err(MergeError::UnsortedChanges {
            index,
            previous: previous.name.clone(),
            next: next.name.clone(),
        }),
        None => Ok(()),
    }
}

/// Index of the first entry not strictly after its predecessor.
///
/// Two entries sharing a name are out of order even if their types differ.
fn first_out_of_order<'a>(
    mut entries: impl Iterator<Item = &'a Entry>,
) -> Option<(usize, &'a Entry, &'a Entry)> {
    let mut previous = entries.next()?;
    for (offset, next) in entries.enumerate() {
        if compare_entries(previous, next) != Ordering::Less || same_name(previous, next) {
            return Some((offset + 1, previous, next));
        }
        previous = next;
    }
    None
}
