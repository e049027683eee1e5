//! Custom containers backing every lookup in the crate.
//!
//! These are deliberately fixed-shape structures: the store never rehashes
//! and the sequence is an index arena rather than a pointer chain. Nothing
//! here locks; sharing across threads needs external synchronization.

/// Fixed-capacity chained hash table with insertion-order key enumeration.
pub mod indexed;

/// FIFO queue over the sequence arena.
pub mod queue;

/// Singly-linked ordered sequence backed by an index arena.
pub mod sequence;

pub use indexed::{BucketKey, IndexedStore};
pub use queue::Queue;
pub use sequence::Sequence;
