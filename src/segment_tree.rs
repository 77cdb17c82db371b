//! Segment tree for range-sum queries over a fixed-size sequence.

use num_traits::Num;

/// A flat segment tree in the iterative size-`2n` layout.
///
/// Leaves for the `n` source positions sit at indices `n..2n`; every internal
/// index `k` in `1..n` holds `tree[2k] + tree[2k + 1]`. Range sums and point
/// updates both run in `O(log n)`.
///
/// Aggregation is plain addition with no overflow handling; callers pick an
/// element type wide enough for their sums.
///
/// # Examples
///
/// ```rust
/// use flattree::RangeAggregateTree;
///
/// let mut tree = RangeAggregateTree::new(&[1, 3, 5, 7, 9, 11]);
/// assert_eq!(tree.query(0, 3), 9);
/// assert_eq!(tree.query(1, 4), 15);
///
/// tree.update(2, 10);
/// assert_eq!(tree.query(0, 3), 14);
/// ```
#[derive(Debug, Clone)]
pub struct RangeAggregateTree<T> {
    tree: Vec<T>,
    len: usize,
}

impl<T: Num + Copy> RangeAggregateTree<T> {
    /// Build the tree from a source sequence: leaves are copied into the
    /// upper half, then parents are folded bottom-up.
    pub fn new(source: &[T]) -> Self {
        let n = source.len();
        if n == 0 {
            return Self {
                tree: Vec::new(),
                len: 0,
            };
        }
        let mut tree = vec![T::zero(); 2 * n];
        tree[n..].copy_from_slice(source);
        for k in (1..n).rev() {
            tree[k] = tree[2 * k] + tree[2 * k + 1];
        }
        Self { tree, len: n }
    }

    /// Number of source positions.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when built from an empty sequence.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current value of the leaf at `pos`, or `None` past the end.
    pub fn leaf(&self, pos: usize) -> Option<T> {
        if pos < self.len {
            Some(self.tree[pos + self.len])
        } else {
            None
        }
    }

    /// Sum over the half-open range `[left, right)`. An inverted or empty
    /// range yields zero; `right` is clamped to the sequence length.
    ///
    /// Two cursors walk inward from the bounding leaves, accumulating a
    /// node's value whenever it sits just inside its parent pair.
    pub fn query(&self, left: usize, right: usize) -> T {
        let right = right.min(self.len);
        if left >= right {
            return T::zero();
        }
        let mut acc = T::zero();
        let mut l = left + self.len;
        let mut r = right + self.len;
        while l < r {
            if l % 2 == 1 {
                acc = acc + self.tree[l];
                l += 1;
            }
            if r % 2 == 1 {
                r -= 1;
                acc = acc + self.tree[r];
            }
            l /= 2;
            r /= 2;
        }
        acc
    }

    /// Overwrite the leaf at `pos` and recompute every ancestor up to the
    /// root. Returns `false` and leaves the tree untouched when `pos` is past
    /// the end.
    pub fn update(&mut self, pos: usize, value: T) -> bool {
        if pos >= self.len {
            return false;
        }
        let mut idx = pos + self.len;
        self.tree[idx] = value;
        idx /= 2;
        while idx >= 1 {
            self.tree[idx] = self.tree[2 * idx] + self.tree[2 * idx + 1];
            idx /= 2;
        }
        true
    }
}
