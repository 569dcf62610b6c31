use std::collections::BTreeSet;

use avl_tree::AvlTree;
use proptest::prelude::*;

proptest! {
    /// In-order traversal of any distinct-key insertion order equals the
    /// keys sorted ascending.
    #[test]
    fn in_order_round_trips_sorted(keys in proptest::collection::hash_set(any::<i32>(), 0..200)) {
        let mut tree = AvlTree::new();
        for &k in &keys {
            tree.insert(k);
        }

        let mut expected: Vec<i32> = keys.into_iter().collect();
        expected.sort_unstable();
        let got: Vec<i32> = tree.to_vec().into_iter().copied().collect();
        prop_assert_eq!(got, expected);
        prop_assert_eq!(tree.assert_valid(), Ok(()));
    }

    /// Inserting a key twice leaves the sequence and the size unchanged.
    #[test]
    fn double_insert_changes_nothing(keys in proptest::collection::vec(any::<i16>(), 1..100)) {
        let mut tree = AvlTree::new();
        for &k in &keys {
            tree.insert(k);
        }
        let size = tree.size();
        let before: Vec<i16> = tree.to_vec().into_iter().copied().collect();

        tree.insert(keys[0]);
        tree.insert(*keys.last().unwrap());

        prop_assert_eq!(tree.size(), size);
        let after: Vec<i16> = tree.to_vec().into_iter().copied().collect();
        prop_assert_eq!(after, before);
    }

    /// Every operation of a mixed insert/remove sequence preserves the
    /// structural invariants, and the tree tracks a model set exactly.
    #[test]
    fn mixed_ops_preserve_invariants(
        ops in proptest::collection::vec((any::<bool>(), 0i32..64), 0..300),
    ) {
        let mut tree = AvlTree::new();
        let mut model = BTreeSet::new();

        for (is_insert, k) in ops {
            if is_insert {
                tree.insert(k);
                model.insert(k);
            } else {
                let was_present = model.remove(&k);
                let size_before = tree.size();
                tree.remove(&k);
                let expected = if was_present { size_before - 1 } else { size_before };
                prop_assert_eq!(tree.size(), expected);
            }
            prop_assert_eq!(tree.assert_valid(), Ok(()));
        }

        let got: Vec<i32> = tree.to_vec().into_iter().copied().collect();
        let expected: Vec<i32> = model.into_iter().collect();
        prop_assert_eq!(got, expected);
    }

    /// Worst-case AVL height bound: `height <= ceil(1.44 * log2(n + 2))`.
    #[test]
    fn height_stays_within_avl_bound(keys in proptest::collection::hash_set(any::<u32>(), 0..400)) {
        let mut tree = AvlTree::new();
        for &k in &keys {
            tree.insert(k);
        }

        let n = tree.size();
        let bound = (1.44 * ((n + 2) as f64).log2()).ceil() as u32;
        prop_assert!(
            tree.height() <= bound,
            "height {} exceeds bound {} for n = {}",
            tree.height(),
            bound,
            n
        );
    }

    /// A custom comparator drives the order end to end.
    #[test]
    fn reverse_comparator_reverses_order(keys in proptest::collection::hash_set(any::<i32>(), 0..100)) {
        let mut tree = AvlTree::with_comparator(|a: &i32, b: &i32| {
            if a == b { 0 } else if a > b { -1 } else { 1 }
        });
        for &k in &keys {
            tree.insert(k);
        }

        let mut expected: Vec<i32> = keys.into_iter().collect();
        expected.sort_unstable_by(|a, b| b.cmp(a));
        let got: Vec<i32> = tree.to_vec().into_iter().copied().collect();
        prop_assert_eq!(got, expected);
        prop_assert_eq!(tree.assert_valid(), Ok(()));
    }
}
