//! Property tests checking each structure against a brute-force oracle.

use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap};

use proptest::prelude::*;

use crate::binary_tree::IndexedBinaryTree;
use crate::codec;
use crate::fenwick::PrefixSumIndex;
use crate::heap::BoundedHeap;
use crate::ordered::OrderedTreeIndex;
use crate::segment_tree::RangeAggregateTree;
use crate::trie::PrefixIndex;

fn trim_trailing_vacant<V>(mut slots: Vec<Option<V>>) -> Vec<Option<V>> {
    while matches!(slots.last(), Some(None)) {
        slots.pop();
    }
    slots
}

proptest! {
    #[test]
    fn codec_round_trip(slots in proptest::collection::vec(any::<Option<i64>>(), 0..64)) {
        let tree = IndexedBinaryTree::from_slots(slots.clone());
        let decoded: IndexedBinaryTree<i64> =
            codec::decode(&codec::encode(&tree)).expect("own output must decode");
        let trimmed = trim_trailing_vacant(slots);
        prop_assert_eq!(decoded.slots(), trimmed.as_slice());
    }

    #[test]
    fn heap_pops_ascending(values in proptest::collection::vec(any::<i64>(), 0..128)) {
        let mut oracle: BinaryHeap<Reverse<i64>> =
            values.iter().map(|&v| Reverse(v)).collect();
        let mut heap = BoundedHeap::from_unordered(values);
        while let Some(v) = heap.pop_min() {
            prop_assert_eq!(Some(Reverse(v)), oracle.pop());
        }
        prop_assert!(oracle.is_empty());
    }

    // Values drawn from a small domain: a fully skewed run of n distinct
    // values materializes 2^n slots, so depth has to stay bounded.
    #[test]
    fn bst_membership_matches_inserted_set(
        values in proptest::collection::vec(-8i64..8, 0..64),
        probes in proptest::collection::vec(-12i64..12, 0..32),
    ) {
        let mut bst = OrderedTreeIndex::new();
        let mut oracle = BTreeSet::new();
        for v in values {
            bst.insert(v);
            oracle.insert(v);
        }
        prop_assert!(bst.is_valid_ordering());
        for p in probes {
            prop_assert_eq!(bst.contains(&p), oracle.contains(&p));
        }
        for v in &oracle {
            prop_assert!(bst.contains(v));
        }
    }

    #[test]
    fn segment_tree_matches_brute_force(
        source in proptest::collection::vec(-1000i64..1000, 1..48),
        updates in proptest::collection::vec((0usize..48, -1000i64..1000), 0..16),
    ) {
        let mut model = source.clone();
        let mut tree = RangeAggregateTree::new(&source);
        for (pos, value) in updates {
            let applied = tree.update(pos, value);
            prop_assert_eq!(applied, pos < model.len());
            if applied {
                model[pos] = value;
            }
        }
        let n = model.len();
        for l in 0..=n {
            for r in l..=n {
                let expected: i64 = model[l..r].iter().sum();
                prop_assert_eq!(tree.query(l, r), expected);
            }
        }
    }

    #[test]
    fn fenwick_matches_brute_force(
        source in proptest::collection::vec(-1000i64..1000, 1..48),
        updates in proptest::collection::vec((0usize..48, -1000i64..1000), 0..16),
    ) {
        let mut model = source.clone();
        let mut bit = PrefixSumIndex::new(&source);
        for (idx, delta) in updates {
            let applied = bit.add(idx, delta);
            prop_assert_eq!(applied, idx < model.len());
            if applied {
                model[idx] += delta;
            }
        }
        for q in 0..model.len() {
            let expected: i64 = model[..=q].iter().sum();
            prop_assert_eq!(bit.prefix_sum(q), expected);
        }
    }

    #[test]
    fn trie_is_sound(
        words in proptest::collection::vec("[a-d]{0,6}", 0..24),
        probes in proptest::collection::vec("[a-d]{0,6}", 0..12),
    ) {
        let mut trie = PrefixIndex::new();
        let inserted: BTreeSet<String> = words.iter().cloned().collect();
        for w in &words {
            trie.insert(w);
        }
        prop_assert_eq!(trie.len(), inserted.len());
        for p in words.iter().chain(probes.iter()) {
            prop_assert_eq!(trie.contains(p), inserted.contains(p));
            let mut found = trie.prefix_search(p);
            found.sort();
            let expected: Vec<String> = inserted
                .iter()
                .filter(|w| w.starts_with(p.as_str()))
                .cloned()
                .collect();
            prop_assert_eq!(found, expected);
        }
    }
}
