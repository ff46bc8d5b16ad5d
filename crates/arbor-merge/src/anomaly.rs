//! Reports of tombstones that target names missing from the tree level.
//!
//! A tombstone for a name the current tree level does not hold means the
//! staging layer asked for something impossible. The merge does not fail on
//! it; it hands a [`TombstoneAnomaly`] to the caller's [`AnomalySink`] with
//! enough context to reconstruct what both inputs looked like.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use arbor_tree::{entry_names, pretty_names, workspace_names, Entry, EntryType, WorkspaceEntry};

const MISSING_ENTRY: &str = "trying to remove an entry that does not exist";
const MISSING_ENTRY_EXHAUSTED: &str =
    "trying to remove an entry that does not exist, no entries are left";

/// Names of both merge inputs, captured once per merge.
///
/// Every anomaly of one merge shares the same snapshot, so reporting k
/// anomalies costs one copy of the names rather than k.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameSnapshot {
    /// Names of all current entries.
    pub entries: Arc<[String]>,
    /// Names of all pending changes.
    pub changes: Arc<[String]>,
}

impl NameSnapshot {
    /// Copy the names out of both inputs.
    pub fn capture(current: &[Entry], changes: &[WorkspaceEntry]) -> Self {
        Self {
            entries: entry_names(current).into(),
            changes: workspace_names(changes).into(),
        }
    }
}

/// A tombstone whose target name is absent from the current tree level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TombstoneAnomaly {
    /// Name the tombstone tried to remove.
    pub name: String,
    /// Entry type recorded on the tombstone.
    pub entry_type: EntryType,
    /// Name of the current entry the merge was positioned at, or `None` if
    /// every current entry had already been consumed.
    pub next_entry: Option<String>,
    /// Names of all current entries, shared with the other anomalies of the merge.
    pub entries: Arc<[String]>,
    /// Names of all pending changes, shared likewise.
    pub changes: Arc<[String]>,
}

impl TombstoneAnomaly {
    /// Tombstone that sorts before `next`, the current entry under the cursor.
    pub fn before_entry(change: &WorkspaceEntry, next: &Entry, snapshot: &NameSnapshot) -> Self {
        Self::build(change, Some(next.name.clone()), snapshot)
    }

    /// Tombstone left over after every current entry was consumed.
    pub fn after_entries(change: &WorkspaceEntry, snapshot: &NameSnapshot) -> Self {
        Self::build(change, None, snapshot)
    }

    fn build(change: &WorkspaceEntry, next_entry: Option<String>, snapshot: &NameSnapshot) -> Self {
        Self {
            name: change.name().to_string(),
            entry_type: change.entry().entry_type,
            next_entry,
            entries: Arc::clone(&snapshot.entries),
            changes: Arc::clone(&snapshot.changes),
        }
    }

    /// One-line summary without the snapshots.
    pub fn message(&self) -> &'static str {
        if self.next_entry.is_some() {
            MISSING_ENTRY
        } else {
            MISSING_ENTRY_EXHAUSTED
        }
    }
}

impl fmt::Display for TombstoneAnomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:?} ({})", self.message(), self.name, self.entry_type)?;
        if let Some(next) = &self.next_entry {
            write!(f, ", next entry {next:?}")?;
        }
        write!(
            f,
            "; entries={} changes={}",
            pretty_names(&self.entries),
            pretty_names(&self.changes)
        )
    }
}

/// Receives anomaly reports from a merge.
///
/// Implementations must not panic: the merge keeps going after every report.
pub trait AnomalySink {
    fn record_anomaly(&mut self, anomaly: TombstoneAnomaly);
}

impl<S: AnomalySink + ?Sized> AnomalySink for &mut S {
    fn record_anomaly(&mut self, anomaly: TombstoneAnomaly) {
        (**self).record_anomaly(anomaly);
    }
}

impl AnomalySink for Vec<TombstoneAnomaly> {
    fn record_anomaly(&mut self, anomaly: TombstoneAnomaly) {
        self.push(anomaly);
    }
}

/// Emits each anomaly as a `tracing` error event.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl AnomalySink for TracingSink {
    fn record_anomaly(&mut self, anomaly: TombstoneAnomaly) {
        tracing::error!(
            change_name = %anomaly.name,
            entry_type = %anomaly.entry_type,
            next_entry = anomaly.next_entry.as_deref(),
            changes = %pretty_names(&anomaly.changes),
            entries = %pretty_names(&anomaly.entries),
            "{}",
            anomaly.message()
        );
    }
}

/// Keeps every anomaly for later inspection.
#[derive(Clone, Debug, Default)]
pub struct CollectingSink {
    anomalies: Vec<TombstoneAnomaly>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn anomalies(&self) -> &[TombstoneAnomaly] {
        &self.anomalies
    }

    pub fn len(&self) -> usize {
        self.anomalies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anomalies.is_empty()
    }

    pub fn into_anomalies(self) -> Vec<TombstoneAnomaly> {
        self.anomalies
    }
}

impl AnomalySink for CollectingSink {
    fn record_anomaly(&mut self, anomaly: TombstoneAnomaly) {
        self.anomalies.push(anomaly);
    }
}

/// Drops every report.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl AnomalySink for NullSink {
    fn record_anomaly(&mut self, _anomaly: TombstoneAnomaly) {}
}
