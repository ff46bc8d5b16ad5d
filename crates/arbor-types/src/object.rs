use std::fmt;

use serde::{Deserialize, Serialize};

/// Content address of an object or sub-tree referenced from a tree level.
///
/// Arbor never dereferences an `ObjectId` while merging; it is carried from
/// the input entries to the output entries unchanged.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectId([u8; 32]);

impl ObjectId {
    /// Wrap a hash computed by the store.
    pub fn from_hash(hash: [u8; 32]) -> Self {
        Self(hash)
    }

    /// The all-zero address, used where no object is referenced.
    pub const fn null() -> Self {
        Self([0u8; 32])
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({})", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}
