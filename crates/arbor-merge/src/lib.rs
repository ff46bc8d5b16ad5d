//! Tree-level merge for Arbor.
//!
//! Folds the pending workspace changes of one directory node into its
//! committed entries, producing the sorted entry list the tree builder hashes
//! into the next node. Both inputs must already be sorted by
//! [`compare_entries`](arbor_tree::compare_entries); the merge walks them in
//! lockstep and never re-sorts.
//!
//! # Key Types
//!
//! - [`merge_changes`] -- The pure two-cursor merge; cannot fail
//! - [`Merger`] / [`MergeConfig`] -- Configured merge with optional input
//!   validation and strict anomaly handling
//! - [`TombstoneAnomaly`] / [`AnomalySink`] -- Reports of tombstones that
//!   target a name missing from the tree level
//! - [`MergeOutcome`] / [`MergeStats`] -- Merged entries plus what happened
//!
//! # Rules
//!
//! 1. Name is the only identity key: a change whose name matches a current
//!    entry replaces or removes it, even if the entry type differs.
//! 2. A tombstone for a missing name is reported and otherwise ignored.
//! 3. Reporting never changes the merged entries.

pub mod anomaly;
pub mod config;
pub mod engine;
pub mod error;
pub mod merger;
pub mod validate;

pub use anomaly::{
    AnomalySink, CollectingSink, NameSnapshot, NullSink, TombstoneAnomaly, TracingSink,
};
pub use config::{AnomalyPolicy, InputPolicy, MergeConfig};
pub use engine::{merge_changes, merge_changes_collecting, MergeOutcome, MergeStats};
pub use error::{MergeError, MergeResult};
pub use merger::Merger;
pub use validate::{validate_changes, validate_entries};
