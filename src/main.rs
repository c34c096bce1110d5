use forest::avl_tree::AvlTree;
use forest::binary_search_tree::BinarySearchTree;
use forest::splay_tree::SplayTree;
use log::{info, warn, LevelFilter};
use simplelog::{Config, SimpleLogger};
use std::env;

const DEFAULT_COUNT: u32 = 1024;

fn level_filter() -> LevelFilter {
    match env::var("FOREST_LOG") {
        Ok(level) => level.parse().unwrap_or(LevelFilter::Info),
        Err(_) => LevelFilter::Info,
    }
}

fn main() {
    if SimpleLogger::init(level_filter(), Config::default()).is_err() {
        eprintln!("Error: a logger has already been installed.");
    }

    let count = match env::args().nth(1) {
        Some(arg) => arg.parse().unwrap_or_else(|_| {
            warn!("ignoring invalid count {:?}, using {}", arg, DEFAULT_COUNT);
            DEFAULT_COUNT
        }),
        None => DEFAULT_COUNT,
    };

    let mut bst = BinarySearchTree::with_capacity(count as usize);
    let mut avl = AvlTree::with_capacity(count as usize);
    let mut splay = SplayTree::with_capacity(count as usize);
    for key in 0..count {
        bst.insert(key, key);
        avl.insert(key, key);
        splay.insert(key, key);
    }

    info!("bst: height {}, size {}", bst.height(), bst.size());
    info!("avl: height {}, size {}", avl.height(), avl.size());
    info!("splay: height {}, size {}", splay.height(), splay.size());

    if let Some(first) = splay.search(&0).map(|entry| entry.key) {
        info!(
            "splay: searched {}, root is now {:?}, height {}",
            first,
            splay.root().map(|entry| entry.key),
            splay.height(),
        );
    }

    for (name, result) in &[
        ("bst", bst.validate()),
        ("avl", avl.validate()),
        ("splay", splay.validate()),
    ] {
        match result {
            Ok(()) => info!("{}: invariants hold", name),
            Err(error) => warn!("{}: {}", name, error),
        }
    }
}
