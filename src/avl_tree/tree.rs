use crate::arena::Handle;
use crate::avl_tree::node::Node;
use crate::error::{Error, Result};
use crate::node::{Link, Side};
use crate::traversal::InOrder;
use crate::tree::{self, Search};
use log::trace;
use std::borrow::Borrow;
use std::cmp;
use std::mem;

pub type Tree<T, U> = tree::Tree<Node<T, U>>;

pub fn height<T, U>(tree: &Tree<T, U>, link: Link) -> usize {
    match link {
        None => 0,
        Some(handle) => tree.node(handle).height,
    }
}

fn update<T, U>(tree: &mut Tree<T, U>, handle: Handle) {
    let left = height(tree, tree.left(handle));
    let right = height(tree, tree.right(handle));
    tree.node_mut(handle).height = cmp::max(left, right) + 1;
}

fn balance<T, U>(tree: &Tree<T, U>, handle: Handle) -> i64 {
    (height(tree, tree.left(handle)) as i64) - (height(tree, tree.right(handle)) as i64)
}

// Rotates and returns the node that took the place of `handle`.
fn rotate<T, U>(tree: &mut Tree<T, U>, handle: Handle, side: Side) -> Handle {
    tree.rotate(handle, side);
    update(tree, handle);
    match tree.parent(handle) {
        Some(child) => {
            update(tree, child);
            child
        },
        None => unreachable!(),
    }
}

// Restores the balance of the subtree rooted at `handle`, assuming both of its child subtrees are
// balanced, and returns the new root of the subtree.
fn rebalance<T, U>(tree: &mut Tree<T, U>, handle: Handle) -> Handle {
    update(tree, handle);

    let node_balance = balance(tree, handle);
    let heavy_side = if node_balance > 1 {
        Side::Left
    } else if node_balance < -1 {
        Side::Right
    } else {
        return handle;
    };

    let child = match tree.child(handle, heavy_side) {
        Some(child) => child,
        None => unreachable!(),
    };
    let child_balance = balance(tree, child);
    let is_inner_heavy = match heavy_side {
        Side::Left => child_balance < 0,
        Side::Right => child_balance > 0,
    };

    if is_inner_heavy {
        trace!(
            "double rotation at {:?}, heavy on {:?} then {:?}",
            handle,
            heavy_side,
            heavy_side.opposite(),
        );
        rotate(tree, child, heavy_side.opposite());
    } else {
        trace!("single rotation at {:?}, heavy on {:?}", handle, heavy_side);
    }
    rotate(tree, handle, heavy_side)
}

// Walks from `link` up to the root, rebalancing every node on the way. Removal can unbalance
// several ancestors, so the walk never stops early.
fn retrace<T, U>(tree: &mut Tree<T, U>, mut link: Link) {
    while let Some(handle) = link {
        let subtree_root = rebalance(tree, handle);
        link = tree.parent(subtree_root);
    }
}

pub fn insert<T, U>(tree: &mut Tree<T, U>, key: T, value: U) -> Option<U>
where
    T: Ord,
{
    match tree.search(&key) {
        Search::Found(handle) => Some(mem::replace(&mut tree.entry_mut(handle).value, value)),
        Search::Vacant(position) => {
            let handle = tree.attach(Node::new(key, value), position);
            let parent = tree.parent(handle);
            retrace(tree, parent);
            None
        },
    }
}

pub fn remove<T, U, V>(tree: &mut Tree<T, U>, key: &V) -> Option<(T, U)>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let handle = tree.find(key)?;
    let (entry, retrace_from) = tree.remove_node(handle);
    retrace(tree, retrace_from);
    Some(entry.into_pair())
}

pub fn validate<T, U>(tree: &Tree<T, U>) -> Result<()>
where
    T: Ord,
{
    tree.validate()?;

    let mut nodes = InOrder::new(tree);
    let mut position = 0;
    while let Some(handle) = nodes.next_handle() {
        let left = height(tree, tree.left(handle));
        let right = height(tree, tree.right(handle));
        let cached = tree.node(handle).height;
        let actual = cmp::max(left, right) + 1;
        if cached != actual {
            return Err(Error::StaleHeight {
                position,
                cached,
                actual,
            });
        }

        let balance = (left as i64) - (right as i64);
        if balance.abs() > 1 {
            return Err(Error::Unbalanced { position, balance });
        }
        position += 1;
    }
    Ok(())
}
