//! Configured merge entry point.

use tracing::warn;

use arbor_tree::{Entry, WorkspaceEntry};

use crate::anomaly::{AnomalySink, TombstoneAnomaly};
use crate::config::{AnomalyPolicy, InputPolicy, MergeConfig};
use crate::engine::{merge_with_stats, MergeOutcome};
use crate::error::{MergeError, MergeResult};
use crate::validate::{validate_changes, validate_entries};

/// Runs merges under a [`MergeConfig`].
///
/// With the default configuration this behaves exactly like
/// [`merge_changes`](crate::merge_changes) and never fails.
#[derive(Clone, Debug, Default)]
pub struct Merger {
    config: MergeConfig,
}

impl Merger {
    /// Create a merger that applies `config` to every merge.
    pub fn new(config: MergeConfig) -> Self {
        Self { config }
    }

    /// Merge `changes` into `current`.
    ///
    /// Every anomaly reaches `sink` before any [`AnomalyPolicy::Reject`]
    /// error is returned.
    pub fn merge(
        &self,
        current: &[Entry],
        changes: &[WorkspaceEntry],
        sink: &mut dyn AnomalySink,
    ) -> MergeResult<MergeOutcome> {
        if self.config.input_policy == InputPolicy::Validated {
            if let Err(e) = validate_entries(current).and_then(|()| validate_changes(changes)) {
                warn!(error = %e, "rejecting merge input");
                return Err(e);
            }
        }

        let mut tee = Tee {
            sink,
            seen: Vec::new(),
        };
        let (entries, stats) = merge_with_stats(current, changes, &mut tee);
        let anomalies = tee.seen;

        if self.config.anomaly_policy == AnomalyPolicy::Reject && !anomalies.is_empty() {
            let names: Vec<String> = anomalies.iter().map(|a| a.name.clone()).collect();
            warn!(count = names.len(), "rejecting merge with anomalous tombstones");
            return Err(MergeError::AnomalousTombstones { names });
        }

        Ok(MergeOutcome {
            entries,
            anomalies,
            stats,
        })
    }
}

/// Forwards reports to the caller's sink and keeps a copy for the outcome.
struct Tee<'a> {
    sink: &'a mut dyn AnomalySink,
    seen: Vec<TombstoneAnomaly>,
}

impl AnomalySink for Tee<'_> {
    fn record_anomaly(&mut self, anomaly: TombstoneAnomaly) {
        self.seen.push(anomaly.clone());
        self.sink.record_anomaly(anomaly);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anomaly::tests::CapturedLogs;
    use crate::anomaly::{CollectingSink, NullSink};
    use crate::engine::merge_changes;
    use arbor_types::ObjectId;

    fn file(name: &str, b: u8) -> Entry {
        Entry::object(name, ObjectId::from_hash([b; 32]))
    }

    #[test]
    fn default_merger_matches_plain_merge() {
        let current = vec![file("a", 1), file("c", 3)];
        let changes = vec![
            WorkspaceEntry::tombstone(file("b", 0)),
            WorkspaceEntry::upsert(file("c", 9)),
        ];
        let mut sink = CollectingSink::new();
        let outcome = Merger::default().merge(&current, &changes, &mut sink).unwrap();

        assert_eq!(outcome.entries, merge_changes(&current, &changes, &mut NullSink));
        assert_eq!(outcome.anomalies, sink.anomalies());
        assert_eq!(outcome.stats.replaced, 1);
    }

    #[test]
    fn trusted_policy_does_not_validate() {
        // Unsorted input is undefined but must not be rejected.
        let current = vec![file("b", 2), file("a", 1)];
        let outcome = Merger::default().merge(&current, &[], &mut NullSink).unwrap();
        assert_eq!(outcome.entries, current);
    }

    #[test]
    fn validated_policy_rejects_unsorted_entries() {
        let merger = Merger::new(MergeConfig {
            input_policy: InputPolicy::Validated,
            ..Default::default()
        });
        let current = vec![file("b", 2), file("a", 1)];
        let err = merger.merge(&current, &[], &mut NullSink).unwrap_err();
        assert!(matches!(err, MergeError::UnsortedEntries { index: 1, .. }));
    }

    #[test]
    fn validated_policy_rejects_duplicate_changes() {
        let merger = Merger::new(MergeConfig {
            input_policy: InputPolicy::Validated,
            ..Default::default()
        });
        let changes = vec![
            WorkspaceEntry::upsert(file("a", 1)),
            WorkspaceEntry::tombstone(file("a", 1)),
        ];
        let logs = CapturedLogs::default();
        let err = logs
            .capture(|| merger.merge(&[], &changes, &mut NullSink))
            .unwrap_err();
        assert!(matches!(err, MergeError::UnsortedChanges { index: 1, .. }));
        assert!(logs.contents().contains("rejecting merge input"));
    }

    #[test]
    fn reject_policy_fails_after_reporting() {
        let merger = Merger::new(MergeConfig::strict());
        let current = vec![file("a", 1), file("c", 3)];
        let changes = vec![WorkspaceEntry::tombstone(file("b", 0))];
        let mut sink = CollectingSink::new();

        let err = merger.merge(&current, &changes, &mut sink).unwrap_err();
        assert_eq!(
            err,
            MergeError::AnomalousTombstones {
                names: vec!["b".into()]
            }
        );
        assert_eq!(sink.len(), 1);
        assert_eq!(sink.anomalies()[0].name, "b");
    }

    #[test]
    fn strict_merger_accepts_clean_input() {
        let merger = Merger::new(MergeConfig::strict());
        let current = vec![file("a", 1), Entry::tree("d", ObjectId::null())];
        let changes = vec![
            WorkspaceEntry::upsert(file("b", 2)),
            WorkspaceEntry::tombstone(Entry::tree("d", ObjectId::null())),
        ];
        let outcome = merger.merge(&current, &changes, &mut NullSink).unwrap();
        assert_eq!(outcome.entries, vec![file("a", 1), file("b", 2)]);
        assert!(!outcome.has_anomalies());
    }
}
