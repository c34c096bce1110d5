use crate::binary_search_tree::node::Node;
use crate::tree::{self, Search};
use std::borrow::Borrow;
use std::mem;

pub type Tree<T, U> = tree::Tree<Node<T, U>>;

pub fn insert<T, U>(tree: &mut Tree<T, U>, key: T, value: U) -> Option<U>
where
    T: Ord,
{
    match tree.search(&key) {
        Search::Found(handle) => Some(mem::replace(&mut tree.entry_mut(handle).value, value)),
        Search::Vacant(position) => {
            tree.attach(Node::new(key, value), position);
            None
        },
    }
}

pub fn remove<T, U, V>(tree: &mut Tree<T, U>, key: &V) -> Option<(T, U)>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    tree.find(key).map(|handle| {
        let (entry, _) = tree.remove_node(handle);
        entry.into_pair()
    })
}
