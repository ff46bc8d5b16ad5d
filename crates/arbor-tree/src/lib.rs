//! Tree-level data model for Arbor.
//!
//! A tree level is the sorted list of named children of one directory node.
//! This crate defines those children, the pending workspace changes recorded
//! against them, and the single total order both are sorted by.
//!
//! # Key Types
//!
//! - [`Entry`] -- One child of a directory node (object or sub-tree)
//! - [`EntryType`] -- Regular object vs. sub-tree, with fixed ordinals
//! - [`WorkspaceEntry`] -- A pending upsert or tombstone against a name
//! - [`compare_entries`] -- Name-then-type ordering used for sorting and merging

pub mod compare;
pub mod entry;
pub mod names;

pub use compare::{compare_entries, same_name};
pub use entry::{Entry, EntryType, WorkspaceEntry};
pub use names::{entry_names, pretty_names, workspace_names};
