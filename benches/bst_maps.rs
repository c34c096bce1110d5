use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use std::collections::BTreeMap;

const NUM_OF_OPERATIONS: usize = 1_000;

fn bench_btreemap_insert(c: &mut Criterion) {
    c.bench_function("bench btreemap insert", |b| {
        b.iter(|| {
            let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
            let mut map = BTreeMap::new();
            for _ in 0..NUM_OF_OPERATIONS {
                let key = rng.next_u32();
                let val = rng.next_u32();

                map.insert(key, val);
            }
        })
    });
}

fn bench_btreemap_search(c: &mut Criterion) {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut map = BTreeMap::new();
    let mut keys = Vec::new();
    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.next_u32();
        let val = rng.next_u32();

        map.insert(key, val);
        keys.push(key);
    }

    c.bench_function("bench btreemap search", move |b| {
        b.iter(|| {
            for key in &keys {
                black_box(map.get(key));
            }
        })
    });
}

macro_rules! bst_map_benches {
    ($($module_name:ident: $type_name:ident,)*) => {
        $(
            mod $module_name {
                use forest::$module_name::$type_name;
                use rand::Rng;
                use super::NUM_OF_OPERATIONS;
                use criterion::{Criterion, black_box};

                fn build() -> ($type_name<u32, u32>, Vec<u32>) {
                    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                    let mut map = $type_name::new();
                    let mut keys = Vec::new();

                    for _ in 0..NUM_OF_OPERATIONS {
                        let key = rng.next_u32();
                        let val = rng.next_u32();

                        map.insert(key, val);
                        keys.push(key);
                    }
                    (map, keys)
                }

                pub fn bench_insert(c: &mut Criterion) {
                    c.bench_function(&format!("bench {} insert", stringify!($module_name)), |b| b.iter(|| {
                        let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                        let mut map = $type_name::new();
                        for _ in 0..NUM_OF_OPERATIONS {
                            let key = rng.next_u32();
                            let val = rng.next_u32();

                            map.insert(key, val);
                        }
                    }));
                }

                pub fn bench_search(c: &mut Criterion) {
                    let (mut map, keys) = build();
                    c.bench_function(&format!("bench {} search", stringify!($module_name)), move |b| b.iter(|| {
                        for key in &keys {
                            black_box(map.search(key).map(|entry| entry.value));
                        }
                    }));
                }

                pub fn bench_minimum(c: &mut Criterion) {
                    let (map, _) = build();
                    c.bench_function(&format!("bench {} minimum", stringify!($module_name)), move |b| b.iter(|| {
                        black_box(map.minimum().map(|entry| entry.key));
                    }));
                }

                pub fn bench_maximum(c: &mut Criterion) {
                    let (map, _) = build();
                    c.bench_function(&format!("bench {} maximum", stringify!($module_name)), move |b| b.iter(|| {
                        black_box(map.maximum().map(|entry| entry.key));
                    }));
                }
            }
        )*

        criterion_group!(
            benches,
            bench_btreemap_insert,
            bench_btreemap_search,
            $(
                $module_name::bench_insert,
                $module_name::bench_search,
                $module_name::bench_minimum,
                $module_name::bench_maximum,
            )*
        );
    }
}

bst_map_benches!(
    avl_tree: AvlTree,
    binary_search_tree: BinarySearchTree,
    splay_tree: SplayTree,
);

criterion_main!(benches);
