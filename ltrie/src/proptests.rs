use proptest::prelude::*;
use std::collections::{BTreeMap, HashSet};

use crate::keys::slot_to_letter;
use crate::tree::TrieStore;

fn validate_tree<V>(t: &TrieStore<V>) {
    let root = t.root();
    assert_eq!(t.node(root).letter, None, "root must not carry a letter");

    let mut seen = HashSet::new();
    let mut stack = vec![root];
    let mut values = 0usize;
    while let Some(id) = stack.pop() {
        assert!(seen.insert(id), "node {id:?} reachable twice");
        let node = t.node(id);
        if node.has_value() {
            values += 1;
        }
        if id != root {
            assert!(!node.is_dead(), "node {id:?} has neither value nor children");
        }
        for (slot, child) in node.children.iter() {
            assert_eq!(
                t.node(child).letter,
                Some(slot_to_letter(slot)),
                "child letter must match its slot"
            );
            stack.push(child);
        }
    }

    assert_eq!(values, t.len(), "value count must track live key count");
    assert_eq!(
        seen.len(),
        t.node_count(),
        "every live node must be reachable from the root"
    );
}

#[derive(Debug, Clone)]
enum Op {
    Insert(String, i32),
    Remove(String),
    Get(String),
}

// Few letters and short keys so operations keep landing on shared paths.
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-d]{1,6}"
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (key_strategy(), any::<i32>()).prop_map(|(k, v)| Op::Insert(k, v)),
        2 => key_strategy().prop_map(Op::Remove),
        1 => key_strategy().prop_map(Op::Get),
    ]
}

proptest! {
    #[test]
    fn matches_btreemap(ops in proptest::collection::vec(op_strategy(), 0..200)) {
        let mut t = TrieStore::new();
        let mut model = BTreeMap::new();

        for op in ops {
            match op {
                Op::Insert(k, v) => {
                    prop_assert_eq!(t.insert(&k, v).unwrap(), model.insert(k.clone(), v));
                }
                Op::Remove(k) => {
                    prop_assert_eq!(t.remove(&k).ok(), model.remove(&k));
                }
                Op::Get(k) => {
                    prop_assert_eq!(t.get(&k), model.get(&k));
                }
            }
            validate_tree(&t);
        }

        for (k, v) in &model {
            prop_assert_eq!(t.get(k), Some(v));
        }
    }

    #[test]
    fn remove_everything_leaves_only_root(
        entries in proptest::collection::btree_map(key_strategy(), any::<i32>(), 0..64)
    ) {
        let mut t = TrieStore::new();
        for (k, v) in &entries {
            t.insert(k, *v).unwrap();
        }
        validate_tree(&t);
        for (k, v) in &entries {
            prop_assert_eq!(t.remove(k), Ok(*v));
            validate_tree(&t);
        }
        prop_assert!(t.is_empty());
        prop_assert_eq!(t.node_count(), 1);
    }

    #[test]
    fn prefix_removal_keeps_extension(prefix in key_strategy(), suffix in key_strategy()) {
        let longer = format!("{prefix}{suffix}");
        let mut t = TrieStore::new();
        t.insert(&prefix, 1).unwrap();
        t.insert(&longer, 2).unwrap();
        let nodes = t.node_count();

        prop_assert_eq!(t.remove(&prefix), Ok(1));
        prop_assert_eq!(t.node_count(), nodes);
        prop_assert_eq!(t.get(&longer), Some(&2));
        prop_assert_eq!(t.get(&prefix), None);
        validate_tree(&t);
    }

    #[test]
    fn invalid_keys_never_mutate(key in "([a-z]{0,3}[^a-z][a-z]{0,3})?") {
        let mut t = TrieStore::new();
        t.insert("abc", 1).unwrap();
        let nodes = t.node_count();

        prop_assert!(t.insert(&key, 9).unwrap_err().is_invalid_key());
        prop_assert!(t.remove(&key).unwrap_err().is_invalid_key());
        prop_assert!(t.lookup(&key).unwrap_err().is_invalid_key());
        prop_assert_eq!(t.node_count(), nodes);
        prop_assert_eq!(t.len(), 1);
    }
}
