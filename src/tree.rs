//! Node graph shared by every tree variant.
//!
//! A `Tree<N>` owns its nodes through an `Arena<N>` and links them with handles. The operations
//! here are the building blocks the variants specialize: descent, leaf attachment, rotation,
//! successor splicing and the whole-tree walks. None of them recurse, so degenerate trees cannot
//! exhaust the call stack.

use crate::arena::{Arena, Handle};
use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::node::{Link, Links, Node, Side};
use crate::traversal::InOrder;
use log::{debug, trace};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::mem;

/// The outcome of descending a tree in search of a key.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Search {
    /// The node holding the key.
    Found(Handle),
    /// The key is absent. Holds the last node visited together with the side of it where a node
    /// holding the key belongs, or `None` if the tree is empty.
    Vacant(Option<(Handle, Side)>),
}

pub struct Tree<N> {
    arena: Arena<N>,
    root: Link,
}

impl<N> Tree<N>
where
    N: Node,
{
    pub fn new() -> Self {
        Tree {
            arena: Arena::new(),
            root: None,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Tree {
            arena: Arena::with_chunk_size(capacity),
            root: None,
        }
    }

    pub fn root(&self) -> Link {
        self.root
    }

    /// Returns the number of allocated nodes.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn node(&self, handle: Handle) -> &N {
        &self.arena[handle]
    }

    pub fn node_mut(&mut self, handle: Handle) -> &mut N {
        &mut self.arena[handle]
    }

    pub fn entry(&self, handle: Handle) -> &Entry<N::Key, N::Value> {
        self.node(handle).entry()
    }

    pub fn entry_mut(&mut self, handle: Handle) -> &mut Entry<N::Key, N::Value> {
        self.node_mut(handle).entry_mut()
    }

    fn links(&self, handle: Handle) -> &Links {
        self.node(handle).links()
    }

    fn links_mut(&mut self, handle: Handle) -> &mut Links {
        self.node_mut(handle).links_mut()
    }

    pub fn parent(&self, handle: Handle) -> Link {
        self.links(handle).parent
    }

    pub fn left(&self, handle: Handle) -> Link {
        self.links(handle).left
    }

    pub fn right(&self, handle: Handle) -> Link {
        self.links(handle).right
    }

    pub fn child(&self, handle: Handle, side: Side) -> Link {
        self.links(handle).child(side)
    }

    /// Returns which child of its parent the node is, or `None` for a node without a parent.
    pub fn side_of(&self, handle: Handle) -> Option<Side> {
        self.parent(handle).map(|parent| {
            if self.left(parent) == Some(handle) {
                Side::Left
            } else {
                Side::Right
            }
        })
    }

    pub fn search<V>(&self, key: &V) -> Search
    where
        N::Key: Borrow<V>,
        V: Ord + ?Sized,
    {
        let mut position = None;
        let mut current = self.root;
        while let Some(handle) = current {
            let side = match key.cmp(self.entry(handle).key.borrow()) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => return Search::Found(handle),
            };
            position = Some((handle, side));
            current = self.child(handle, side);
        }
        Search::Vacant(position)
    }

    pub fn find<V>(&self, key: &V) -> Link
    where
        N::Key: Borrow<V>,
        V: Ord + ?Sized,
    {
        match self.search(key) {
            Search::Found(handle) => Some(handle),
            Search::Vacant(_) => None,
        }
    }

    /// Allocates `node` and links it as a leaf at `position`, where `position` comes from a
    /// `Search::Vacant` of the node's key.
    pub fn attach(&mut self, mut node: N, position: Option<(Handle, Side)>) -> Handle {
        *node.links_mut() = Links {
            parent: position.map(|(parent, _)| parent),
            left: None,
            right: None,
        };
        let handle = self.arena.allocate(node);
        match position {
            Some((parent, side)) => self.links_mut(parent).set_child(side, Some(handle)),
            None => self.root = Some(handle),
        }
        handle
    }

    // Repoints whichever link owns `old` at `new`. The parent link of `new` is not touched.
    fn replace_child(&mut self, parent: Link, old: Handle, new: Link) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                let links = self.links_mut(parent);
                if links.left == Some(old) {
                    links.left = new;
                } else {
                    links.right = new;
                }
            },
        }
    }

    /// Makes `link` the root of the tree, clearing its parent link. Whatever was previously the
    /// root is no longer reachable from the tree and must be relinked or freed by the caller.
    pub fn set_root(&mut self, link: Link) {
        self.root = link;
        if let Some(handle) = link {
            self.links_mut(handle).parent = None;
        }
    }

    /// Points the `side` slot of `parent` at `child`. A node previously held in that slot is cut
    /// loose and must be relinked or freed by the caller.
    pub fn set_child(&mut self, parent: Handle, side: Side, child: Link) {
        self.links_mut(parent).set_child(side, child);
        if let Some(child) = child {
            self.links_mut(child).parent = Some(parent);
        }
    }

    /// Frees a node that has already been unlinked from the tree.
    pub fn free(&mut self, handle: Handle) -> N {
        self.arena.free(handle)
    }

    /// Promotes the child of `handle` on `side` into its place. The child's inner subtree is
    /// reparented into the vacated slot of `handle`.
    ///
    /// # Panics
    ///
    /// Panics if `handle` has no child on `side`.
    pub fn rotate(&mut self, handle: Handle, side: Side) {
        let child = self
            .child(handle, side)
            .expect("Expected child node on the promoted side to be `Some`.");
        trace!("rotating {:?} up over {:?}", child, handle);

        let orphan = self.child(child, side.opposite());
        self.links_mut(handle).set_child(side, orphan);
        if let Some(orphan) = orphan {
            self.links_mut(orphan).parent = Some(handle);
        }

        let parent = self.parent(handle);
        self.replace_child(parent, handle, Some(child));
        self.links_mut(child).parent = parent;

        self.links_mut(child).set_child(side.opposite(), Some(handle));
        self.links_mut(handle).parent = Some(child);
    }

    pub fn minimum(&self, mut handle: Handle) -> Handle {
        while let Some(left) = self.left(handle) {
            handle = left;
        }
        handle
    }

    pub fn maximum(&self, mut handle: Handle) -> Handle {
        while let Some(right) = self.right(handle) {
            handle = right;
        }
        handle
    }

    pub fn floor<V>(&self, key: &V) -> Link
    where
        N::Key: Borrow<V>,
        V: Ord + ?Sized,
    {
        let mut ret = None;
        let mut current = self.root;
        while let Some(handle) = current {
            match key.cmp(self.entry(handle).key.borrow()) {
                Ordering::Less => current = self.left(handle),
                Ordering::Greater => {
                    ret = Some(handle);
                    current = self.right(handle);
                },
                Ordering::Equal => return Some(handle),
            }
        }
        ret
    }

    pub fn ceil<V>(&self, key: &V) -> Link
    where
        N::Key: Borrow<V>,
        V: Ord + ?Sized,
    {
        let mut ret = None;
        let mut current = self.root;
        while let Some(handle) = current {
            match key.cmp(self.entry(handle).key.borrow()) {
                Ordering::Greater => current = self.right(handle),
                Ordering::Less => {
                    ret = Some(handle);
                    current = self.left(handle);
                },
                Ordering::Equal => return Some(handle),
            }
        }
        ret
    }

    /// Removes the entry held by `handle`.
    ///
    /// A node with two children takes over the entry of its in-order successor, which is spliced
    /// out in its place. Returns the removed entry along with the parent of the node that was
    /// physically unlinked, which is where any retracing has to start.
    pub fn remove_node(&mut self, handle: Handle) -> (Entry<N::Key, N::Value>, Link) {
        let Links { left, right, .. } = *self.links(handle);
        match (left, right) {
            (Some(_), Some(right)) => {
                let successor = self.minimum(right);
                let (successor_entry, retrace_from) = self.splice(successor);
                let entry = mem::replace(self.entry_mut(handle), successor_entry);
                (entry, retrace_from)
            },
            _ => self.splice(handle),
        }
    }

    // precondition: the node has at most one child
    fn splice(&mut self, handle: Handle) -> (Entry<N::Key, N::Value>, Link) {
        let Links {
            parent,
            left,
            right,
        } = *self.links(handle);
        let child = left.or(right);
        self.replace_child(parent, handle, child);
        if let Some(child) = child {
            self.links_mut(child).parent = parent;
        }
        (self.arena.free(handle).into_entry(), parent)
    }

    /// Returns the number of node levels: zero for an empty tree and one for a lone root.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<Handle> = self.root.into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .iter()
                .flat_map(|&handle| {
                    let Links { left, right, .. } = *self.links(handle);
                    left.into_iter().chain(right)
                })
                .collect();
        }
        height
    }

    /// Counts the nodes reachable from the root.
    pub fn size(&self) -> usize {
        let mut size = 0;
        let mut stack: Vec<Handle> = self.root.into_iter().collect();
        while let Some(handle) = stack.pop() {
            size += 1;
            let Links { left, right, .. } = *self.links(handle);
            stack.extend(left.into_iter().chain(right));
        }
        size
    }

    pub fn clear(&mut self) {
        let released = self.arena.len();
        self.arena.clear();
        self.root = None;
        debug!("cleared tree, released {} nodes", released);
    }

    /// Checks the order, parent and reachability invariants shared by every variant.
    pub fn validate(&self) -> Result<()>
    where
        N::Key: Ord,
    {
        if let Some(root) = self.root {
            if self.parent(root).is_some() {
                return Err(Error::RootHasParent);
            }
        }

        let allocated = self.len();
        let mut reachable = 0;
        let mut previous: Option<&N::Key> = None;
        let mut nodes = InOrder::new(self);
        while let Some(handle) = nodes.next_handle() {
            let position = reachable;
            reachable += 1;
            if reachable > allocated {
                // a cycle or a shared subtree
                return Err(Error::UnreachableNodes {
                    reachable,
                    allocated,
                });
            }

            let is_linked = match self.parent(handle) {
                Some(parent) => {
                    self.left(parent) == Some(handle) || self.right(parent) == Some(handle)
                },
                None => self.root == Some(handle),
            };
            if !is_linked {
                return Err(Error::ParentMismatch { position });
            }

            let key = &self.entry(handle).key;
            if let Some(previous) = previous {
                if previous >= key {
                    return Err(Error::OrderViolation { position });
                }
            }
            previous = Some(key);
        }

        if reachable != allocated {
            return Err(Error::UnreachableNodes {
                reachable,
                allocated,
            });
        }
        Ok(())
    }
}
