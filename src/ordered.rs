//! Binary search tree over the implicit slot layout.
//!
//! [`OrderedTreeIndex`] reuses the [`IndexedBinaryTree`] storage but inserts
//! and searches by comparison instead of level order. Descending past the
//! current end of the vector grows it with vacant fill. A node at depth `d`
//! occupies a slot index near `2^d`, so storage is exponential in tree depth:
//! fine for shallow, mostly-complete trees, ruinous for long sorted runs.

use std::cmp::Ordering;

use crate::binary_tree::IndexedBinaryTree;
use crate::index::{left, right};

/// A binary search tree stored breadth-first in a flat vector.
///
/// For every occupied slot, everything reachable through its left child is
/// strictly less than its value and everything through its right child is
/// strictly greater. Duplicate inserts are silent no-ops.
///
/// # Examples
///
/// ```rust
/// use flattree::OrderedTreeIndex;
///
/// let mut bst = OrderedTreeIndex::new();
/// for v in [50, 30, 70, 20, 40] {
///     bst.insert(v);
/// }
///
/// assert!(bst.contains(&40));
/// assert!(!bst.contains(&99));
/// assert!(bst.is_valid_ordering());
/// assert_eq!(bst.lowest_common_ancestor(&20, &40), Some(&30));
/// ```
#[derive(Debug, Clone)]
pub struct OrderedTreeIndex<V> {
    tree: IndexedBinaryTree<V>,
}

impl<V> Default for OrderedTreeIndex<V> {
    fn default() -> Self {
        Self {
            tree: IndexedBinaryTree::default(),
        }
    }
}

impl<V: Ord> OrderedTreeIndex<V> {
    /// Create an empty index.
    pub fn new() -> Self {
        Self {
            tree: IndexedBinaryTree::new(),
        }
    }

    /// The underlying slot tree.
    pub fn as_tree(&self) -> &IndexedBinaryTree<V> {
        &self.tree
    }

    /// Consume the index, yielding the underlying slot tree.
    pub fn into_tree(self) -> IndexedBinaryTree<V> {
        self.tree
    }

    /// Number of slots, vacant ones included.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// True when no value has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Insert a value, descending left on less and right on greater. The
    /// vector is extended with vacant slots whenever the descent walks past
    /// its current end. Inserting a value already present does nothing.
    pub fn insert(&mut self, value: V) {
        let slots = &mut self.tree.slots;
        if slots.is_empty() {
            slots.push(Some(value));
            return;
        }
        let mut idx = 0;
        loop {
            match &slots[idx] {
                None => {
                    slots[idx] = Some(value);
                    return;
                }
                Some(current) => {
                    let next = match value.cmp(current) {
                        Ordering::Less => left(idx),
                        Ordering::Greater => right(idx),
                        Ordering::Equal => return,
                    };
                    if next >= slots.len() {
                        slots.resize_with(next + 1, || None);
                    }
                    idx = next;
                }
            }
        }
    }

    /// Comparison-guided membership test. Fails closed the moment the
    /// descent reaches a vacant slot or runs off the end of the vector.
    pub fn contains(&self, target: &V) -> bool {
        let slots = self.tree.slots();
        let mut idx = 0;
        while idx < slots.len() {
            match &slots[idx] {
                None => return false,
                Some(current) => match target.cmp(current) {
                    Ordering::Equal => return true,
                    Ordering::Less => idx = left(idx),
                    Ordering::Greater => idx = right(idx),
                },
            }
        }
        false
    }

    /// Verify the ordering invariant by iterative in-order traversal,
    /// requiring strictly increasing values.
    pub fn is_valid_ordering(&self) -> bool {
        let slots = self.tree.slots();
        let mut stack = Vec::new();
        let mut idx = 0usize;
        let mut previous: Option<&V> = None;
        loop {
            while idx < slots.len() && slots[idx].is_some() {
                stack.push(idx);
                idx = left(idx);
            }
            let Some(node) = stack.pop() else {
                break;
            };
            if let Some(value) = &slots[node] {
                if let Some(prev) = previous {
                    if value <= prev {
                        return false;
                    }
                }
                previous = Some(value);
            }
            idx = right(node);
        }
        true
    }

    /// Lowest common ancestor of `a` and `b`. Both values must be present;
    /// otherwise `None`. Walks from the root, descending while both values
    /// lie on the same side of the current node.
    pub fn lowest_common_ancestor(&self, a: &V, b: &V) -> Option<&V> {
        if !self.contains(a) || !self.contains(b) {
            return None;
        }
        let mut idx = 0;
        while let Some(current) = self.tree.get(idx) {
            if a < current && b < current {
                idx = left(idx);
            } else if a > current && b > current {
                idx = right(idx);
            } else {
                return Some(current);
            }
        }
        None
    }
}
