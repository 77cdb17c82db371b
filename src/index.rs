//! Index arithmetic for implicit (array-backed) binary trees.
//!
//! Slot 0 is the root; the tree is stored breadth-first with no pointers.

/// Index of the left child of the node at `i`.
#[inline]
pub fn left(i: usize) -> usize {
    2 * i + 1
}

/// Index of the right child of the node at `i`.
#[inline]
pub fn right(i: usize) -> usize {
    2 * i + 2
}

/// Index of the parent of the node at `i`, or `None` for the root.
#[inline]
pub fn parent(i: usize) -> Option<usize> {
    if i == 0 {
        None
    } else {
        Some((i - 1) / 2)
    }
}
