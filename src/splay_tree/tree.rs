use crate::arena::Handle;
use crate::node::{Link, Side};
use crate::splay_tree::node::Node;
use crate::tree::{self, Search};
use log::trace;
use std::borrow::Borrow;
use std::mem;

pub type Tree<T, U> = tree::Tree<Node<T, U>>;

/// Moves `handle` to the root of the tree with a sequence of zig, zig-zig and zig-zag steps.
pub fn splay<T, U>(tree: &mut Tree<T, U>, handle: Handle) {
    while let (Some(parent), Some(side)) = (tree.parent(handle), tree.side_of(handle)) {
        match (tree.parent(parent), tree.side_of(parent)) {
            (Some(grandparent), Some(parent_side)) if parent_side == side => {
                trace!("zig-zig {:?} over {:?} and {:?}", handle, parent, grandparent);
                tree.rotate(grandparent, side);
                tree.rotate(parent, side);
            },
            (Some(grandparent), Some(parent_side)) => {
                trace!("zig-zag {:?} over {:?} and {:?}", handle, parent, grandparent);
                tree.rotate(parent, side);
                tree.rotate(grandparent, parent_side);
            },
            _ => {
                trace!("zig {:?} over {:?}", handle, parent);
                tree.rotate(parent, side);
            },
        }
    }
}

/// Looks up `key` and splays the node holding it to the root. On a miss the last node visited is
/// splayed instead and `None` is returned.
pub fn access<T, U, V>(tree: &mut Tree<T, U>, key: &V) -> Link
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    match tree.search(key) {
        Search::Found(handle) => {
            splay(tree, handle);
            Some(handle)
        },
        Search::Vacant(Some((last, _))) => {
            splay(tree, last);
            None
        },
        Search::Vacant(None) => None,
    }
}

pub fn insert<T, U>(tree: &mut Tree<T, U>, key: T, value: U) -> Option<U>
where
    T: Ord,
{
    match tree.search(&key) {
        Search::Found(handle) => {
            let old_value = mem::replace(&mut tree.entry_mut(handle).value, value);
            splay(tree, handle);
            Some(old_value)
        },
        Search::Vacant(position) => {
            let handle = tree.attach(Node::new(key, value), position);
            splay(tree, handle);
            None
        },
    }
}

/// Splays `key` to the root and unlinks it. The maximum of its left subtree is then splayed to the
/// top of that subtree, which leaves it without a right child to adopt the old right subtree.
pub fn remove<T, U, V>(tree: &mut Tree<T, U>, key: &V) -> Option<(T, U)>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let handle = access(tree, key)?;
    let left = tree.left(handle);
    let right = tree.right(handle);
    match left {
        None => tree.set_root(right),
        Some(left) => {
            tree.set_root(Some(left));
            let maximum = tree.maximum(left);
            splay(tree, maximum);
            tree.set_child(maximum, Side::Right, right);
        },
    }
    Some(tree.free(handle).entry.into_pair())
}
