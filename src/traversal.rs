//! Iterators over the entries of a tree.
//!
//! Every traversal is lazy and read-only: it keeps an explicit stack or queue of node handles on
//! the heap instead of recursing, so its auxiliary memory is bounded by the height (depth-first
//! orders) or the widest level (breadth-first order) of the tree. A traversal can be restarted any
//! number of times by asking the tree for a new iterator.

use crate::arena::Handle;
use crate::node::{Link, Node};
use crate::tree::Tree;
use std::collections::VecDeque;

fn pair<N>(tree: &Tree<N>, handle: Handle) -> (&N::Key, &N::Value)
where
    N: Node,
{
    let entry = tree.entry(handle);
    (&entry.key, &entry.value)
}

/// An iterator that visits a node before its left subtree and then its right subtree.
pub struct PreOrder<'a, N> {
    tree: &'a Tree<N>,
    stack: Vec<Handle>,
}

impl<'a, N> PreOrder<'a, N>
where
    N: Node,
{
    pub(crate) fn new(tree: &'a Tree<N>) -> Self {
        PreOrder {
            tree,
            stack: tree.root().into_iter().collect(),
        }
    }
}

impl<'a, N> Iterator for PreOrder<'a, N>
where
    N: Node + 'a,
{
    type Item = (&'a N::Key, &'a N::Value);

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        let handle = self.stack.pop()?;
        // right is pushed first so that the left subtree is popped first
        self.stack.extend(tree.right(handle));
        self.stack.extend(tree.left(handle));
        Some(pair(tree, handle))
    }
}

/// An iterator that visits the left subtree, then the node, then the right subtree, yielding
/// entries in ascending key order.
pub struct InOrder<'a, N> {
    tree: &'a Tree<N>,
    current: Link,
    stack: Vec<Handle>,
}

impl<'a, N> InOrder<'a, N>
where
    N: Node,
{
    pub(crate) fn new(tree: &'a Tree<N>) -> Self {
        InOrder {
            tree,
            current: tree.root(),
            stack: Vec::new(),
        }
    }

    pub(crate) fn next_handle(&mut self) -> Option<Handle> {
        while let Some(handle) = self.current {
            self.stack.push(handle);
            self.current = self.tree.left(handle);
        }
        self.stack.pop().map(|handle| {
            self.current = self.tree.right(handle);
            handle
        })
    }
}

impl<'a, N> Iterator for InOrder<'a, N>
where
    N: Node + 'a,
{
    type Item = (&'a N::Key, &'a N::Value);

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        self.next_handle().map(|handle| pair(tree, handle))
    }
}

/// An iterator that visits both subtrees of a node before the node itself.
pub struct PostOrder<'a, N> {
    tree: &'a Tree<N>,
    // the flag is set once the children of the node have been pushed
    stack: Vec<(Handle, bool)>,
}

impl<'a, N> PostOrder<'a, N>
where
    N: Node,
{
    pub(crate) fn new(tree: &'a Tree<N>) -> Self {
        PostOrder {
            tree,
            stack: tree.root().into_iter().map(|root| (root, false)).collect(),
        }
    }
}

impl<'a, N> Iterator for PostOrder<'a, N>
where
    N: Node + 'a,
{
    type Item = (&'a N::Key, &'a N::Value);

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        while let Some((handle, expanded)) = self.stack.pop() {
            if expanded {
                return Some(pair(tree, handle));
            }
            self.stack.push((handle, true));
            self.stack.extend(tree.right(handle).map(|right| (right, false)));
            self.stack.extend(tree.left(handle).map(|left| (left, false)));
        }
        None
    }
}

/// An iterator that visits nodes level by level from the root, left to right within a level.
pub struct BreadthFirst<'a, N> {
    tree: &'a Tree<N>,
    queue: VecDeque<Handle>,
}

impl<'a, N> BreadthFirst<'a, N>
where
    N: Node,
{
    pub(crate) fn new(tree: &'a Tree<N>) -> Self {
        BreadthFirst {
            tree,
            queue: tree.root().into_iter().collect(),
        }
    }
}

impl<'a, N> Iterator for BreadthFirst<'a, N>
where
    N: Node + 'a,
{
    type Item = (&'a N::Key, &'a N::Value);

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        let handle = self.queue.pop_front()?;
        self.queue.extend(tree.left(handle));
        self.queue.extend(tree.right(handle));
        Some(pair(tree, handle))
    }
}

/// An owning iterator that yields key-value pairs in ascending key order, releasing each node as
/// it is yielded.
pub struct IntoIter<N> {
    tree: Tree<N>,
    current: Link,
    stack: Vec<Handle>,
}

impl<N> IntoIter<N>
where
    N: Node,
{
    pub(crate) fn new(tree: Tree<N>) -> Self {
        IntoIter {
            current: tree.root(),
            tree,
            stack: Vec::new(),
        }
    }
}

impl<N> Iterator for IntoIter<N>
where
    N: Node,
{
    type Item = (N::Key, N::Value);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(handle) = self.current {
            self.stack.push(handle);
            self.current = self.tree.left(handle);
        }
        let handle = self.stack.pop()?;
        self.current = self.tree.right(handle);
        Some(self.tree.free(handle).into_entry().into_pair())
    }
}

#[cfg(test)]
mod tests {
    use super::{BreadthFirst, InOrder, IntoIter, PostOrder, PreOrder};
    use crate::tree::tests::build;

    //        4
    //      /   \
    //     2     90
    //    / \   /
    //   0   3 14
    //          \
    //           45
    const KEYS: [u32; 7] = [4, 2, 90, 3, 0, 14, 45];

    #[test]
    fn test_pre_order() {
        let tree = build(&KEYS);
        assert_eq!(
            PreOrder::new(&tree).map(|(key, _)| *key).collect::<Vec<u32>>(),
            vec![4, 2, 0, 3, 90, 14, 45],
        );
    }

    #[test]
    fn test_in_order() {
        let tree = build(&KEYS);
        assert_eq!(
            InOrder::new(&tree).collect::<Vec<(&u32, &u32)>>(),
            vec![
                (&0, &0),
                (&2, &20),
                (&3, &30),
                (&4, &40),
                (&14, &140),
                (&45, &450),
                (&90, &900),
            ],
        );
    }

    #[test]
    fn test_post_order() {
        let tree = build(&KEYS);
        assert_eq!(
            PostOrder::new(&tree).map(|(key, _)| *key).collect::<Vec<u32>>(),
            vec![0, 3, 2, 45, 14, 90, 4],
        );
    }

    #[test]
    fn test_breadth_first() {
        let tree = build(&KEYS);
        assert_eq!(
            BreadthFirst::new(&tree).map(|(key, _)| *key).collect::<Vec<u32>>(),
            vec![4, 2, 90, 0, 3, 14, 45],
        );
    }

    #[test]
    fn test_empty() {
        let tree = build(&[]);
        assert_eq!(PreOrder::new(&tree).next(), None);
        assert_eq!(InOrder::new(&tree).next(), None);
        assert_eq!(PostOrder::new(&tree).next(), None);
        assert_eq!(BreadthFirst::new(&tree).next(), None);
        assert_eq!(IntoIter::new(tree).next(), None);
    }

    #[test]
    fn test_restartable() {
        let tree = build(&KEYS);
        let first = PostOrder::new(&tree).collect::<Vec<(&u32, &u32)>>();
        let second = PostOrder::new(&tree).collect::<Vec<(&u32, &u32)>>();
        assert_eq!(first, second);
    }

    #[test]
    fn test_into_iter() {
        let tree = build(&KEYS);
        assert_eq!(
            IntoIter::new(tree).map(|(key, _)| key).collect::<Vec<u32>>(),
            vec![0, 2, 3, 4, 14, 45, 90],
        );
    }

    #[test]
    fn test_deep_chain() {
        let keys = (0..10_000).collect::<Vec<u32>>();
        let tree = build(&keys);
        assert_eq!(tree.height(), 10_000);
        assert_eq!(PostOrder::new(&tree).count(), 10_000);
        assert_eq!(InOrder::new(&tree).last(), Some((&9_999, &99_990)));
    }
}
