#![no_main]

use std::collections::BTreeMap;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use ltrie::TrieStore;

#[derive(Arbitrary, Debug)]
enum MapMethod {
    Get { key: Vec<u8> },
    Insert { key: Vec<u8>, val: i32 },
    Update { key: Vec<u8>, val: i32 },
    Delete { key: Vec<u8> },
}

// Fold most bytes onto a few letters so keys collide and share paths, and keep some bytes as
// they are so invalid keys get exercised too.
fn to_key(bytes: &[u8]) -> String {
    bytes
        .iter()
        .take(12)
        .map(|b| match b % 8 {
            7 => *b as char,
            n => (b'a' + n) as char,
        })
        .collect()
}

fn is_valid(key: &str) -> bool {
    !key.is_empty() && key.bytes().all(|b| b.is_ascii_lowercase())
}

fuzz_target!(|methods: Vec<MapMethod>| {
    let mut trie = TrieStore::<i32>::new();
    let mut bt_map = BTreeMap::<String, i32>::new();

    for m in &methods {
        match m {
            MapMethod::Get { key } => {
                let key = to_key(key);
                assert_eq!(trie.get(&key), bt_map.get(&key));
            }
            MapMethod::Insert { key, val } => {
                let key = to_key(key);
                let t_insert = trie.insert(&key, *val);
                if is_valid(&key) {
                    assert_eq!(t_insert, Ok(bt_map.insert(key, *val)));
                } else {
                    assert!(t_insert.unwrap_err().is_invalid_key());
                }
            }
            MapMethod::Update { key, val } => {
                let key = to_key(key);
                let old_bt = bt_map.get_mut(&key);
                let old_t = trie.get_mut(&key);
                assert_eq!(old_t, old_bt);

                if let (Some(old_bt), Some(old_t)) = (old_bt, old_t) {
                    *old_bt = *val;
                    *old_t = *val;
                }
                assert_eq!(trie.get(&key), bt_map.get(&key));
            }
            MapMethod::Delete { key } => {
                let key = to_key(key);
                let t_remove = trie.remove(&key);
                let bt_remove = bt_map.remove(&key);
                assert_eq!(t_remove.ok(), bt_remove);
            }
        }
        assert_eq!(trie.len(), bt_map.len());
    }

    for (k, expected_value) in bt_map.iter() {
        assert_eq!(trie.get(k), Some(expected_value), "Expected value for key {k}");
    }

    for k in bt_map.keys() {
        trie.remove(k).unwrap();
    }
    assert_eq!(trie.node_count(), 1);
});
