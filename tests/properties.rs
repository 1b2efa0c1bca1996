/// Property-based tests for the sequence helpers.
use std::collections::HashMap;

use itertools::Itertools;
use proptest::prelude::*;
use seqkit::{
    contains_duplicates, flatten_recursive, get_random, get_random_from_iter, remove_duplicates,
    remove_duplicates_by_key, remove_nulls,
};

// Small value range so that duplicates are common.
fn values() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..16, 0..64)
}

// A forest over nodes 0..n: each node is either a root or the child of an
// earlier node.
fn forest() -> impl Strategy<Value = Vec<Option<usize>>> {
    prop::collection::vec(prop::option::of(any::<prop::sample::Index>()), 0..48).prop_map(
        |parents| {
            parents
                .into_iter()
                .enumerate()
                .map(|(node, parent)| match parent {
                    Some(index) if node > 0 => Some(index.index(node)),
                    _ => None,
                })
                .collect()
        },
    )
}

proptest! {
    #[test]
    fn dedup_keeps_each_distinct_value_once(values in values()) {
        let deduped: Vec<_> = remove_duplicates(&values).copied().collect();

        prop_assert!(deduped.iter().all_unique());
        prop_assert!(deduped.iter().all(|v| values.contains(v)));
        prop_assert!(values.iter().all(|v| deduped.contains(v)));
        // First occurrences keep their relative order.
        let expected: Vec<_> = values.iter().copied().unique().collect();
        prop_assert_eq!(deduped, expected);
    }

    #[test]
    fn dedup_by_key_keeps_first_per_key(values in values()) {
        let key = |v: &&u8| **v % 5;
        let kept: Vec<_> = remove_duplicates_by_key(values.iter(), key).collect();

        let mut first_per_key = HashMap::new();
        for v in &values {
            first_per_key.entry(key(&v)).or_insert(v);
        }
        prop_assert_eq!(kept.len(), first_per_key.len());
        for v in kept {
            prop_assert!(std::ptr::eq(v, first_per_key[&key(&v)]));
        }
    }

    #[test]
    fn contains_duplicates_iff_dedup_shrinks(values in values()) {
        let shrinks = remove_duplicates(&values).count() < values.len();
        prop_assert_eq!(contains_duplicates(Some(&values)), shrinks);
    }

    #[test]
    fn random_pick_is_a_member(values in values()) {
        match get_random(Some(&values)) {
            Some(v) => prop_assert!(values.contains(v)),
            None => prop_assert!(values.is_empty()),
        }
        match get_random_from_iter(Some(values.iter().filter(|_| true))) {
            Some(v) => prop_assert!(values.contains(v)),
            None => prop_assert!(values.is_empty()),
        }
    }

    #[test]
    fn remove_nulls_keeps_present_in_order(values in prop::collection::vec(prop::option::of(0u8..8), 0..64)) {
        let present: Vec<_> = remove_nulls(Some(values.iter().copied())).unwrap().collect();
        let expected: Vec<_> = values.iter().flatten().copied().collect();
        prop_assert_eq!(present, expected);
    }

    #[test]
    fn flatten_places_every_node_after_its_parent(parents in forest()) {
        let mut children = vec![Vec::new(); parents.len()];
        for (node, parent) in parents.iter().enumerate() {
            if let Some(parent) = parent {
                children[*parent].push(node);
            }
        }
        let roots = parents.iter().positions(Option::is_none);

        let flat = flatten_recursive(Some(roots), |&node| Some(children[node].clone())).unwrap();

        prop_assert_eq!(flat.iter().copied().sorted().collect_vec(), (0..parents.len()).collect_vec());
        let position: HashMap<_, _> = flat.iter().enumerate().map(|(pos, node)| (*node, pos)).collect();
        for (node, parent) in parents.iter().enumerate() {
            if let Some(parent) = parent {
                prop_assert!(position[parent] < position[&node]);
            }
        }
    }
}
