use std::collections::HashMap;

use proptest::prelude::*;
use tagtree_collections::HashIndex;

#[derive(Debug, Clone)]
enum Op {
    Set(String, u32),
    Remove(String),
}

fn key() -> impl Strategy<Value = String> {
    "[a-f]{1,3}"
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (key(), any::<u32>()).prop_map(|(k, v)| Op::Set(k, v)),
        1 => key().prop_map(Op::Remove),
    ]
}

fn check<H: tagtree_collections::KeyHasher>(
    index: &mut HashIndex<u32, H>,
    ops: Vec<Op>,
) -> Result<(), TestCaseError> {
    let mut model: HashMap<String, u32> = HashMap::new();
    for op in ops {
        match op {
            Op::Set(k, v) => {
                prop_assert_eq!(index.set(&k, v), model.insert(k.clone(), v));
                prop_assert_eq!(index.get(&k), Some(&v));
            }
            Op::Remove(k) => {
                prop_assert_eq!(index.remove(&k), model.remove(&k));
                prop_assert!(!index.contains(&k));
                prop_assert_eq!(index.get(&k), None);
            }
        }
        prop_assert_eq!(index.len(), model.len());
    }
    for (k, v) in &model {
        prop_assert_eq!(index.get(k), Some(v));
    }
    prop_assert_eq!(index.iter().count(), model.len());
    Ok(())
}

proptest! {
    #[test]
    fn hash_index_matches_hashmap(ops in prop::collection::vec(op(), 0..200)) {
        let mut index = HashIndex::new();
        check(&mut index, ops)?;
    }

    #[test]
    fn colliding_hasher_matches_hashmap(ops in prop::collection::vec(op(), 0..200)) {
        // Two buckets at most: every key collides with half the others.
        let mut index = HashIndex::with_hasher(|key: &[u8]| (key.len() % 2) as u64);
        check(&mut index, ops)?;
    }
}
