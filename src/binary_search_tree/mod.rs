//! Binary search tree without any rebalancing, so its shape is determined entirely by the order of
//! insertions and removals.

mod map;
mod node;
mod tree;

pub use self::map::BinarySearchTree;
