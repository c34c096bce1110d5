use forest::avl_tree::AvlTree;
use rand::Rng;
use std::collections::BTreeMap;

const NUM_OF_OPERATIONS: usize = 10_000;
const KEY_RANGE: u32 = 1_000;

macro_rules! bst_map_tests {
    ($($module_name:ident: $type_name:ident$(,)*)*) => {
        $(
            mod $module_name {
                use forest::$module_name::$type_name;
                use rand::Rng;
                use std::collections::BTreeMap;
                use super::{KEY_RANGE, NUM_OF_OPERATIONS};

                #[test]
                fn int_test_map() {
                    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                    let mut map = $type_name::new();
                    let mut expected = BTreeMap::new();

                    for _ in 0..NUM_OF_OPERATIONS {
                        let key = rng.gen_range(0, KEY_RANGE);
                        match rng.gen_range(0, 5) {
                            0 | 1 => {
                                let val = rng.gen::<u32>();
                                assert_eq!(map.insert(key, val), expected.insert(key, val));
                            },
                            2 => assert_eq!(map.remove(&key), expected.remove(&key).map(|val| (key, val))),
                            3 => assert_eq!(
                                map.search(&key).map(|entry| entry.value),
                                expected.get(&key).cloned(),
                            ),
                            _ => {
                                assert_eq!(map.floor(&key), expected.range(..=key).next_back().map(|(key, _)| key));
                                assert_eq!(map.ceil(&key), expected.range(key..).next().map(|(key, _)| key));
                                assert_eq!(map.contains_key(&key), expected.contains_key(&key));
                            },
                        }

                        assert_eq!(map.validate(), Ok(()));
                        assert_eq!(map.size(), map.len());
                    }

                    assert_eq!(map.validate(), Ok(()));
                    assert_eq!(map.len(), expected.len());
                    assert_eq!(map.size(), expected.len());
                    assert_eq!(map.minimum().map(|entry| entry.key), expected.keys().next().cloned());
                    assert_eq!(map.maximum().map(|entry| entry.key), expected.keys().next_back().cloned());
                    assert_eq!(
                        map.iter().collect::<Vec<(&u32, &u32)>>(),
                        expected.iter().collect::<Vec<(&u32, &u32)>>(),
                    );
                    assert_eq!(
                        map.into_iter().collect::<Vec<(u32, u32)>>(),
                        expected.into_iter().collect::<Vec<(u32, u32)>>(),
                    );
                }

                #[test]
                fn int_test_map_drain() {
                    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([2, 2, 2, 2]);
                    let mut map = $type_name::new();
                    let mut keys = Vec::new();

                    for _ in 0..NUM_OF_OPERATIONS / 10 {
                        let key = rng.gen::<u32>();
                        if map.insert(key, key).is_none() {
                            keys.push(key);
                        }
                    }
                    assert_eq!(map.len(), keys.len());

                    rng.shuffle(&mut keys);
                    for key in &keys {
                        assert_eq!(map.remove(key), Some((*key, *key)));
                    }

                    assert!(map.is_empty());
                    assert_eq!(map.height(), 0);
                    assert_eq!(map.size(), 0);
                    assert_eq!(map.validate(), Ok(()));
                }

                #[test]
                fn int_test_traversals_agree() {
                    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([3, 3, 3, 3]);
                    let map: $type_name<u32, u32> = (0..1_000)
                        .map(|_| (rng.gen_range(0, KEY_RANGE), 0))
                        .collect();

                    let mut in_order = Vec::new();
                    map.in_order_traversal(|key, _| in_order.push(*key));
                    let mut sorted = in_order.clone();
                    sorted.sort();
                    sorted.dedup();
                    assert_eq!(in_order, sorted);

                    for keys in &mut [
                        map.pre_order().map(|(key, _)| *key).collect::<Vec<u32>>(),
                        map.post_order().map(|(key, _)| *key).collect::<Vec<u32>>(),
                        map.breadth_first().map(|(key, _)| *key).collect::<Vec<u32>>(),
                    ] {
                        keys.sort();
                        assert_eq!(*keys, sorted);
                    }

                    assert_eq!(map.pre_order().next().map(|(key, _)| *key), map.root().map(|entry| entry.key));
                    assert_eq!(map.breadth_first().next().map(|(key, _)| *key), map.root().map(|entry| entry.key));
                    assert_eq!(map.post_order().last().map(|(key, _)| *key), map.root().map(|entry| entry.key));
                }
            }
        )*
    }
}

bst_map_tests!(
    avl_tree: AvlTree,
    binary_search_tree: BinarySearchTree,
    splay_tree: SplayTree,
);

#[test]
fn int_test_avl_height_bound() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([4, 4, 4, 4]);
    let mut map = AvlTree::new();
    let mut expected = BTreeMap::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(0, KEY_RANGE * 10);
        if rng.gen::<bool>() || expected.len() < 100 {
            map.insert(key, ());
            expected.insert(key, ());
        } else {
            map.remove(&key);
            expected.remove(&key);
        }

        let bound = 1.45 * ((map.len() + 2) as f64).log2();
        assert!((map.height() as f64) <= bound);
    }
    assert_eq!(map.validate(), Ok(()));
    assert_eq!(map.len(), expected.len());
}

#[test]
fn int_test_splay_root_after_access() {
    use forest::splay_tree::SplayTree;

    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([5, 5, 5, 5]);
    let mut map = SplayTree::new();

    for _ in 0..NUM_OF_OPERATIONS / 10 {
        let key = rng.gen_range(0, KEY_RANGE);
        map.insert(key, key);
        assert_eq!(map.root().map(|entry| entry.key), Some(key));

        let probe = rng.gen_range(0, KEY_RANGE);
        if map.search(&probe).is_some() {
            assert_eq!(map.root().map(|entry| entry.key), Some(probe));
        }
    }
    assert_eq!(map.validate(), Ok(()));
}
