//! Entries of a tree level and the workspace changes recorded against them.

use serde::{Deserialize, Serialize};

use arbor_types::ObjectId;

/// The kind of child an [`Entry`] refers to.
///
/// Each variant carries a fixed ordinal. The ordinal is the secondary sort
/// key of [`compare_entries`](crate::compare_entries) and must never be
/// renumbered, because persisted tree levels are ordered by it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// A regular object (file contents).
    Object,
    /// A sub-tree (directory).
    Tree,
}

impl EntryType {
    /// Fixed ordinal used as the secondary sort key.
    pub const fn ordinal(&self) -> u8 {
        match self {
            Self::Object => 0,
            Self::Tree => 1,
        }
    }
}

impl std::fmt::Display for EntryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Object => write!(f, "object"),
            Self::Tree => write!(f, "tree"),
        }
    }
}

/// One child of a directory node.
///
/// `name` is unique within its parent. `address` points at the object or
/// sub-tree content, which is owned by the store and never read here.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub entry_type: EntryType,
    pub address: ObjectId,
}

impl Entry {
    /// Create an entry of any type.
    pub fn new(name: impl Into<String>, entry_type: EntryType, address: ObjectId) -> Self {
        Self {
            name: name.into(),
            entry_type,
            address,
        }
    }

    /// A regular object entry.
    pub fn object(name: impl Into<String>, address: ObjectId) -> Self {
        Self::new(name, EntryType::Object, address)
    }

    /// A sub-tree entry.
    pub fn tree(name: impl Into<String>, address: ObjectId) -> Self {
        Self::new(name, EntryType::Tree, address)
    }

    /// Name of this child within its parent.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A pending, uncommitted change recorded against one name of a tree level.
///
/// The wrapped entry is the desired new child. When `tombstone` is set the
/// name is removed from the next tree level whatever the entry holds; only
/// the entry's name (and type, for ordering) is meaningful then.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceEntry {
    entry: Entry,
    tombstone: bool,
}

impl WorkspaceEntry {
    /// Create a change; `tombstone` marks the name for removal.
    pub fn new(entry: Entry, tombstone: bool) -> Self {
        Self { entry, tombstone }
    }

    /// Insert `entry`, or replace the current child with the same name.
    pub fn upsert(entry: Entry) -> Self {
        Self::new(entry, false)
    }

    /// Remove the child named by `entry`.
    pub fn tombstone(entry: Entry) -> Self {
        Self::new(entry, true)
    }

    /// The desired child; only its name and type matter for a tombstone.
    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    /// Name this change targets.
    pub fn name(&self) -> &str {
        &self.entry.name
    }

    /// Whether this change removes its name.
    pub fn is_tombstone(&self) -> bool {
        self.tombstone
    }
}
