//! Error types for the merge crate.

/// Errors returned by a configured [`Merger`](crate::Merger).
///
/// The plain [`merge_changes`](crate::merge_changes) function never fails;
/// these only surface when a [`MergeConfig`](crate::MergeConfig) asks for
/// stricter checking.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MergeError {
    /// The committed entries are not strictly ordered.
    #[error("current entries out of order at index {index}: {previous:?} then {next:?}")]
    UnsortedEntries {
        index: usize,
        previous: String,
        next: String,
    },

    /// The workspace changes are not strictly ordered.
    #[error("workspace changes out of order at index {index}: {previous:?} then {next:?}")]
    UnsortedChanges {
        index: usize,
        previous: String,
        next: String,
    },

    /// Tombstones targeted names that do not exist at this tree level.
    #[error("tombstones target missing entries: {}", .names.join(", "))]
    AnomalousTombstones { names: Vec<String> },
}

/// Convenience alias for merge results.
pub type MergeResult<T> = Result<T, MergeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offenders() {
        let err = MergeError::UnsortedEntries {
            index: 2,
            previous: "c".into(),
            next: "b".into(),
        };
        assert_eq!(
            err.to_string(),
            r#"current entries out of order at index 2: "c" then "b""#
        );

        let err = MergeError::AnomalousTombstones {
            names: vec!["b".into(), "x".into()],
        };
        assert_eq!(err.to_string(), "tombstones target missing entries: b, x");
    }
}
