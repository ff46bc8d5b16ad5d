//! The two-cursor merge of a committed tree level with its pending changes.
//!
//! Walks `current` and `changes` in lockstep. Every step emits at most one
//! entry, taken from whichever side sorts first, so the output inherits the
//! order of its inputs and never needs sorting. Runs in O(n + m); the name
//! snapshot attached to anomaly reports is taken at most once per merge.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use arbor_tree::{compare_entries, same_name, Entry, WorkspaceEntry};

use crate::anomaly::{AnomalySink, CollectingSink, NameSnapshot, TombstoneAnomaly};

/// What a merge did, counted per entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeStats {
    /// Current entries carried over untouched.
    pub kept: usize,
    /// Changes that added a new name.
    pub inserted: usize,
    /// Changes that replaced a current entry.
    pub replaced: usize,
    /// Tombstones that removed a current entry.
    pub removed: usize,
    /// Tombstones whose name did not exist.
    pub anomalies: usize,
}

/// Merged entries together with the anomalies and counts of the merge.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    /// The next tree level, sorted.
    pub entries: Vec<Entry>,
    /// Tombstones that targeted missing names, in the order they were met.
    pub anomalies: Vec<TombstoneAnomaly>,
    pub stats: MergeStats,
}

impl MergeOutcome {
    pub fn has_anomalies(&self) -> bool {
        !self.anomalies.is_empty()
    }
}

/// Apply `changes` to `current` and return the next tree level.
///
/// Both slices must be strictly ordered by [`compare_entries`] with no
/// repeated names; this is not checked (see
/// [`InputPolicy::Validated`](crate::InputPolicy::Validated) for a checked
/// variant). A tombstone for a name that `current` does not hold is reported
/// to `sink` and contributes nothing to the result.
///
/// A change replaces the current entry with the same name even when the entry
/// types differ.
pub fn merge_changes(
    current: &[Entry],
    changes: &[WorkspaceEntry],
    sink: &mut dyn AnomalySink,
) -> Vec<Entry> {
    merge_with_stats(current, changes, sink).0
}

/// [`merge_changes`], collecting anomalies into the returned outcome.
pub fn merge_changes_collecting(current: &[Entry], changes: &[WorkspaceEntry]) -> MergeOutcome {
    let mut sink = CollectingSink::new();
    let (entries, stats) = merge_with_stats(current, changes, &mut sink);
    MergeOutcome {
        entries,
        anomalies: sink.into_anomalies(),
        stats,
    }
}

pub(crate) fn merge_with_stats(
    current: &[Entry],
    changes: &[WorkspaceEntry],
    sink: &mut dyn AnomalySink,
) -> (Vec<Entry>, MergeStats) {
    let mut merged = Vec::with_capacity(current.len() + changes.len());
    let mut stats = MergeStats::default();
    let mut next_current = 0;
    let mut next_change = 0;
    let mut snapshot: Option<NameSnapshot> = None;

    loop {
        match (current.get(next_current), changes.get(next_change)) {
            (None, None) => break,

            // Only current entries left: carry them over.
            (Some(entry), None) => {
                merged.push(entry.clone());
                stats.kept += 1;
                next_current += 1;
            }

            // Only changes left: insert, or report deletes of missing names.
            (None, Some(change)) => {
                if change.is_tombstone() {
                    let snapshot =
                        snapshot.get_or_insert_with(|| NameSnapshot::capture(current, changes));
                    sink.record_anomaly(TombstoneAnomaly::after_entries(change, snapshot));
                    stats.anomalies += 1;
                } else {
                    merged.push(change.entry().clone());
                    stats.inserted += 1;
                }
                next_change += 1;
            }

            (Some(entry), Some(change)) => {
                let ordering = if same_name(entry, change.entry()) {
                    Ordering::Equal
                } else {
                    compare_entries(entry, change.entry())
                };

                match ordering {
                    // Override or removal of an existing name.
                    Ordering::Equal => {
                        if change.is_tombstone() {
                            stats.removed += 1;
                        } else {
                            merged.push(change.entry().clone());
                            stats.replaced += 1;
                        }
                        next_current += 1;
                        next_change += 1;
                    }
                    Ordering::Less => {
                        merged.push(entry.clone());
                        stats.kept += 1;
                        next_current += 1;
                    }
                    // The change sorts before the cursor, so its name is absent.
                    Ordering::Greater => {
                        if change.is_tombstone() {
                            let snapshot = snapshot
                                .get_or_insert_with(|| NameSnapshot::capture(current, changes));
                            sink.record_anomaly(TombstoneAnomaly::before_entry(
                                change, entry, snapshot,
                            ));
                            stats.anomalies += 1;
                        } else {
                            merged.push(change.entry().clone());
                            stats.inserted += 1;
                        }
                        next_change += 1;
                    }
                }
            }
        }
    }

    debug!(
        current = current.len(),
        changes = changes.len(),
        merged = merged.len(),
        kept = stats.kept,
        inserted = stats.inserted,
        replaced = stats.replaced,
        removed = stats.removed,
        anomalies = stats.anomalies,
        "merged tree level"
    );

    (merged, stats)
}
