//! Foundation types for Arbor.
//!
//! Every tree level in Arbor refers to its children by content address. The
//! tree and merge crates treat an [`ObjectId`] as an opaque value: it is
//! compared and copied, never interpreted. Computing addresses belongs to the
//! store that owns the content.
//!
//! # Key Types
//!
//! - [`ObjectId`] -- Content address of an object or sub-tree

pub mod object;

pub use object::ObjectId;
