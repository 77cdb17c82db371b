//! Fenwick (binary-indexed) tree for prefix sums.

use num_traits::Num;

/// The value of the lowest set bit of `i`, or 0 when `i` is 0.
///
/// Fenwick trees use this to step between slots: subtracting walks toward
/// shorter prefixes, adding walks toward covering parents.
#[inline]
pub fn lowbit(i: usize) -> usize {
    i & i.wrapping_neg()
}

/// A 1-indexed prefix-sum structure over a fixed-size numeric sequence.
///
/// Slot `i` of the internal array covers the half-open source range
/// `(i - lowbit(i), i]` of the 1-indexed sequence. Prefix queries and point
/// updates both run in `O(log n)`.
///
/// # Examples
///
/// ```rust
/// use flattree::PrefixSumIndex;
///
/// let mut bit = PrefixSumIndex::new(&[3, 2, -1, 6, 5, 4, -3, 3, 7, 2, 3]);
/// assert_eq!(bit.query_then_update(4, 2, 5), 15);
/// assert_eq!(bit.query_then_update(4, 0, 0), 20);
/// ```
#[derive(Debug, Clone)]
pub struct PrefixSumIndex<T> {
    bit: Vec<T>,
    len: usize,
}

impl<T: Num + Copy> PrefixSumIndex<T> {
    /// Build from a source sequence in a single pass: each slot receives its
    /// own element, then carries its partial sum into its covering parent.
    pub fn new(source: &[T]) -> Self {
        let n = source.len();
        let mut bit = vec![T::zero(); n + 1];
        for (j, &value) in source.iter().enumerate() {
            let idx = j + 1;
            bit[idx] = bit[idx] + value;
            let parent = idx + lowbit(idx);
            if parent <= n {
                bit[parent] = bit[parent] + bit[idx];
            }
        }
        Self { bit, len: n }
    }

    /// Number of source positions.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when built from an empty sequence.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inclusive prefix sum over `[0, idx]` of the 0-indexed source. Indices
    /// at or past the end are clamped to the last element, so an oversized
    /// `idx` yields the total sum.
    pub fn prefix_sum(&self, idx: usize) -> T {
        let mut acc = T::zero();
        let mut i = idx.saturating_add(1).min(self.len);
        while i > 0 {
            acc = acc + self.bit[i];
            i -= lowbit(i);
        }
        acc
    }

    /// Add `delta` to the element at 0-indexed `idx`, propagating through
    /// every covering slot. Returns `false` and changes nothing when `idx`
    /// is past the end.
    pub fn add(&mut self, idx: usize, delta: T) -> bool {
        if idx >= self.len {
            return false;
        }
        let mut i = idx + 1;
        while i <= self.len {
            self.bit[i] = self.bit[i] + delta;
            i += lowbit(i);
        }
        true
    }

    /// Combined operation: the prefix sum over `[0, query_idx]` computed
    /// against the state before the update, then `delta` applied at
    /// `update_idx`. Returns the pre-update prefix sum.
    pub fn query_then_update(&mut self, query_idx: usize, update_idx: usize, delta: T) -> T {
        let sum = self.prefix_sum(query_idx);
        self.add(update_idx, delta);
        sum
    }
}
