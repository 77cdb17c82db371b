//! Implicit array-backed binary tree.
//!
//! This module contains [`IndexedBinaryTree`], the level-order binary tree
//! that the rest of the crate's tree types build on. The tree is a flat
//! vector of `Option` slots; `None` marks a vacant position. All traversals
//! are iterative, driven by explicit stacks and queues, so deep trees never
//! risk call-stack overflow.

use std::collections::{HashMap, VecDeque};

use num_traits::Num;

use crate::index::{left, right};

/// A binary tree stored breadth-first in a flat vector.
///
/// The root occupies slot 0 and the children of slot `i` occupy `2i + 1` and
/// `2i + 2`. Vacant slots are `None`; a vacant slot's children are never
/// visited, so anything stored past a gap is unreachable by the traversals.
///
/// Insertion is level-order only. There is no deletion; the tree is meant to
/// be built up and then queried.
///
/// # Examples
///
/// ```rust
/// use flattree::IndexedBinaryTree;
///
/// let mut tree = IndexedBinaryTree::new();
/// for v in [10, 5, 15, 3, 7, 20] {
///     tree.insert_level_order(v);
/// }
///
/// assert!(tree.contains(&7));
/// assert!(!tree.contains(&99));
/// assert_eq!(tree.preorder(), vec![10, 5, 3, 7, 15, 20]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedBinaryTree<V> {
    pub(crate) slots: Vec<Option<V>>,
}

impl<V> Default for IndexedBinaryTree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> IndexedBinaryTree<V> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Create a tree from raw slots, `None` marking vacant positions.
    pub fn from_slots(slots: Vec<Option<V>>) -> Self {
        Self { slots }
    }

    /// Create a fully-occupied tree from values in level order.
    pub fn from_values<I: IntoIterator<Item = V>>(values: I) -> Self {
        Self {
            slots: values.into_iter().map(Some).collect(),
        }
    }

    /// Number of slots, vacant ones included.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when the tree holds no slots at all.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The raw slot array.
    pub fn slots(&self) -> &[Option<V>] {
        &self.slots
    }

    /// The value at `idx`, or `None` for vacant or out-of-range slots.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<&V> {
        self.slots.get(idx).and_then(Option::as_ref)
    }

    /// Number of occupied slots.
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Insert a value into the first vacant slot in index order, appending a
    /// new slot when the tree has no gaps. No rebalancing takes place.
    pub fn insert_level_order(&mut self, value: V) {
        for slot in self.slots.iter_mut() {
            if slot.is_none() {
                *slot = Some(value);
                return;
            }
        }
        self.slots.push(Some(value));
    }

    /// Height of the subtree rooted at `root_idx`, counted in nodes along the
    /// longest downward path. Zero for a vacant or out-of-range root.
    pub fn height(&self, root_idx: usize) -> usize {
        if self.get(root_idx).is_none() {
            return 0;
        }
        let mut max_h = 0;
        let mut queue = VecDeque::from([(root_idx, 1usize)]);
        while let Some((idx, depth)) = queue.pop_front() {
            if self.get(idx).is_none() {
                continue;
            }
            max_h = max_h.max(depth);
            queue.push_back((left(idx), depth + 1));
            queue.push_back((right(idx), depth + 1));
        }
        max_h
    }

    /// `height(left child) - height(right child)` of the node at `idx`, or 0
    /// when `idx` is vacant or out of range.
    pub fn balance_factor(&self, idx: usize) -> isize {
        if self.get(idx).is_none() {
            return 0;
        }
        self.height(left(idx)) as isize - self.height(right(idx)) as isize
    }

    /// Longest distance in edges from the root to any reachable node. Zero
    /// for trees with at most one occupied slot.
    pub fn diameter(&self) -> usize {
        if self.occupied() <= 1 {
            return 0;
        }
        let mut max_dist = 0;
        let mut queue = VecDeque::from([(0usize, 0usize)]);
        while let Some((idx, dist)) = queue.pop_front() {
            if self.get(idx).is_none() {
                continue;
            }
            max_dist = max_dist.max(dist);
            queue.push_back((left(idx), dist + 1));
            queue.push_back((right(idx), dist + 1));
        }
        max_dist
    }

    /// Values grouped by depth, root level first.
    pub fn level_order(&self) -> Vec<Vec<V>>
    where
        V: Clone,
    {
        let mut levels: Vec<Vec<V>> = Vec::new();
        let mut queue = VecDeque::from([(0usize, 0usize)]);
        while let Some((idx, level)) = queue.pop_front() {
            let Some(value) = self.get(idx) else {
                continue;
            };
            while levels.len() <= level {
                levels.push(Vec::new());
            }
            levels[level].push(value.clone());
            queue.push_back((left(idx), level + 1));
            queue.push_back((right(idx), level + 1));
        }
        levels
    }

    /// Count of occupied nodes at each depth, keyed by depth.
    pub fn count_per_depth(&self) -> HashMap<usize, usize> {
        let mut counts = HashMap::new();
        let mut queue = VecDeque::from([(0usize, 0usize)]);
        while let Some((idx, depth)) = queue.pop_front() {
            if self.get(idx).is_none() {
                continue;
            }
            *counts.entry(depth).or_insert(0) += 1;
            queue.push_back((left(idx), depth + 1));
            queue.push_back((right(idx), depth + 1));
        }
        counts
    }
}

impl<V: PartialEq> IndexedBinaryTree<V> {
    /// Linear-scan membership test over occupied slots.
    pub fn contains(&self, target: &V) -> bool {
        self.slots
            .iter()
            .any(|slot| slot.as_ref() == Some(target))
    }

    /// Depth of the first node holding `target`, found breadth-first from
    /// the root. `None` when the value is absent.
    pub fn depth_of(&self, target: &V) -> Option<usize> {
        let mut queue = VecDeque::from([(0usize, 0usize)]);
        while let Some((idx, depth)) = queue.pop_front() {
            let Some(value) = self.get(idx) else {
                continue;
            };
            if value == target {
                return Some(depth);
            }
            queue.push_back((left(idx), depth + 1));
            queue.push_back((right(idx), depth + 1));
        }
        None
    }

    /// True when the tree reads the same mirrored around its root. The empty
    /// tree and a lone root are symmetric.
    pub fn is_mirror(&self) -> bool {
        if self.get(0).is_none() {
            return true;
        }
        let mut queue = VecDeque::from([(1usize, 2usize)]);
        while let Some((l, r)) = queue.pop_front() {
            match (self.get(l), self.get(r)) {
                (None, None) => continue,
                (Some(a), Some(b)) if a == b => {
                    queue.push_back((left(l), right(r)));
                    queue.push_back((right(l), left(r)));
                }
                _ => return false,
            }
        }
        true
    }
}

impl<V: Clone> IndexedBinaryTree<V> {
    /// Preorder traversal (root, left, right) with an explicit stack.
    pub fn preorder(&self) -> Vec<V> {
        let mut out = Vec::new();
        let mut stack = vec![0usize];
        while let Some(idx) = stack.pop() {
            let Some(value) = self.get(idx) else {
                continue;
            };
            out.push(value.clone());
            // Right pushed first so the left subtree pops first.
            stack.push(right(idx));
            stack.push(left(idx));
        }
        out
    }

    /// Postorder traversal (left, right, root) using the two-stack scheme:
    /// the first stack visits root-right-left, the second reverses it.
    pub fn postorder(&self) -> Vec<V> {
        let mut first = vec![0usize];
        let mut second = Vec::new();
        while let Some(idx) = first.pop() {
            if self.get(idx).is_none() {
                continue;
            }
            second.push(idx);
            first.push(left(idx));
            first.push(right(idx));
        }
        let mut out = Vec::with_capacity(second.len());
        while let Some(idx) = second.pop() {
            if let Some(value) = self.get(idx) {
                out.push(value.clone());
            }
        }
        out
    }
}

impl<V: Num + Copy> IndexedBinaryTree<V> {
    /// True when some root-to-leaf path sums exactly to `target`. Sums are
    /// checked at leaves only; internal prefix sums never match. Uses
    /// iterative depth-first search carrying the running sum per frame.
    pub fn path_sum_exists(&self, target: V) -> bool {
        let Some(root) = self.get(0) else {
            return false;
        };
        let mut stack = vec![(0usize, *root)];
        while let Some((idx, sum)) = stack.pop() {
            let (l, r) = (left(idx), right(idx));
            let left_val = self.get(l).copied();
            let right_val = self.get(r).copied();
            if left_val.is_none() && right_val.is_none() && sum == target {
                return true;
            }
            if let Some(v) = left_val {
                stack.push((l, sum + v));
            }
            if let Some(v) = right_val {
                stack.push((r, sum + v));
            }
        }
        false
    }
}
