//! Array-indexed tree, heap, and prefix structures.
//!
//! Every structure in this crate is a flat `Vec` addressed with implicit
//! binary-tree index arithmetic: the root lives at slot 0, the children of
//! slot `i` live at `2i + 1` and `2i + 2`, and its parent at `(i - 1) / 2`.
//! Vacant positions are `None` rather than an in-band sentinel value, so any
//! value of the element type is storable.
//!
//! The structures are independent of each other; they share only the index
//! arithmetic in [`index`]:
//!
//! - [`IndexedBinaryTree`]: level-order binary tree with iterative traversals
//! - [`OrderedTreeIndex`]: binary search tree over the same slot layout
//! - [`PrefixIndex`]: flat trie keyed by prefix strings
//! - [`RangeAggregateTree`]: segment tree for range-sum queries
//! - [`PrefixSumIndex`]: Fenwick (binary-indexed) tree for prefix sums
//! - [`BoundedHeap`]: array min-heap / priority queue
//! - [`codec`]: compact comma-separated tree serialization
//!
//! All operations are sequential and synchronous; nothing blocks, suspends,
//! or touches ambient state. Callers that need concurrent access must wrap a
//! structure in their own lock.

pub mod binary_tree;
pub mod codec;
pub mod fenwick;
pub mod heap;
pub mod index;
pub mod ordered;
pub mod segment_tree;
pub mod trie;

#[cfg(test)]
mod proptests;

pub use binary_tree::IndexedBinaryTree;
pub use codec::DecodeError;
pub use fenwick::PrefixSumIndex;
pub use heap::{run_queue_ops, BoundedHeap, QueueOp};
pub use ordered::OrderedTreeIndex;
pub use segment_tree::RangeAggregateTree;
pub use trie::PrefixIndex;
