//! Ordered in-memory maps built on binary search trees.
//!
//! Three variants share one arena-backed node graph and differ only in how they restructure the
//! tree after a mutation:
//!
//! - [`BinarySearchTree`](binary_search_tree::BinarySearchTree) never rebalances.
//! - [`AvlTree`](avl_tree::AvlTree) keeps the heights of sibling subtrees within one of each other.
//! - [`SplayTree`](splay_tree::SplayTree) moves every inserted or searched key to the root.
//!
//! # Examples
//!
//! ```
//! use forest::avl_tree::AvlTree;
//! use forest::binary_search_tree::BinarySearchTree;
//!
//! let bst: BinarySearchTree<u32, ()> = (0..100).map(|key| (key, ())).collect();
//! let avl: AvlTree<u32, ()> = (0..100).map(|key| (key, ())).collect();
//!
//! assert_eq!(bst.height(), 100);
//! assert_eq!(avl.height(), 7);
//! ```

mod arena;
mod entry;
mod error;
mod node;
mod traversal;
mod tree;

pub mod avl_tree;
pub mod binary_search_tree;
pub mod splay_tree;

pub use crate::entry::Entry;
pub use crate::error::{Error, Result};
