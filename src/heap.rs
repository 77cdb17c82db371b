//! Array-backed binary min-heap and priority-queue replay.

use crate::index::{left, parent, right};

/// A binary min-heap in a flat vector.
///
/// For every non-root index `i`, `heap[(i - 1) / 2] <= heap[i]`. Push and
/// pop restore the invariant fully before returning; the heap is never
/// observable in a partially-sifted state.
///
/// # Examples
///
/// ```rust
/// use flattree::BoundedHeap;
///
/// let mut heap = BoundedHeap::from_unordered(vec![9, 5, 6, 2, 3]);
/// assert_eq!(heap.peek(), Some(&2));
/// assert_eq!(heap.pop_min(), Some(2));
/// assert_eq!(heap.pop_min(), Some(3));
/// ```
#[derive(Debug, Clone)]
pub struct BoundedHeap<T> {
    data: Vec<T>,
}

impl<T> Default for BoundedHeap<T> {
    fn default() -> Self {
        Self { data: Vec::new() }
    }
}

impl<T: Ord> BoundedHeap<T> {
    /// Create an empty heap.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Heapify an arbitrary vector bottom-up, sifting down from the last
    /// internal node to the root.
    pub fn from_unordered(values: Vec<T>) -> Self {
        let mut heap = Self { data: values };
        let n = heap.data.len();
        for start in (0..n / 2).rev() {
            heap.sift_down(start);
        }
        heap
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when the heap holds nothing.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The minimum element, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// The raw heap array.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Append a value and sift it up until its parent is no greater.
    pub fn push(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    /// Remove and return the minimum, or `None` on an empty heap. The last
    /// element moves into the root slot and sifts down.
    pub fn pop_min(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        let last = self.data.len() - 1;
        self.data.swap(0, last);
        let min = self.data.pop();
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        min
    }

    /// Drain the heap into an ascending vector.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.data.len());
        while let Some(value) = self.pop_min() {
            out.push(value);
        }
        out
    }

    fn sift_up(&mut self, mut idx: usize) {
        while let Some(p) = parent(idx) {
            if self.data[idx] < self.data[p] {
                self.data.swap(idx, p);
                idx = p;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let n = self.data.len();
        loop {
            let mut smallest = idx;
            let l = left(idx);
            let r = right(idx);
            if l < n && self.data[l] < self.data[smallest] {
                smallest = l;
            }
            if r < n && self.data[r] < self.data[smallest] {
                smallest = r;
            }
            if smallest == idx {
                break;
            }
            self.data.swap(idx, smallest);
            idx = smallest;
        }
    }
}

/// One step of a replayed priority-queue workload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueOp<T> {
    Push(T),
    PopMin,
}

/// Replay a sequence of push/pop operations against one heap, returning the
/// popped values in order. A pop against an empty heap is skipped.
pub fn run_queue_ops<T, I>(ops: I) -> Vec<T>
where
    T: Ord,
    I: IntoIterator<Item = QueueOp<T>>,
{
    let mut heap = BoundedHeap::new();
    let mut popped = Vec::new();
    for op in ops {
        match op {
            QueueOp::Push(value) => heap.push(value),
            QueueOp::PopMin => {
                if let Some(value) = heap.pop_min() {
                    popped.push(value);
                }
            }
        }
    }
    popped
}
