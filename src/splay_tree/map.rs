use crate::entry::Entry;
use crate::error::Result;
use crate::splay_tree::node::Node;
use crate::splay_tree::tree;
use crate::traversal::{BreadthFirst, InOrder, IntoIter, PostOrder, PreOrder};
use std::borrow::Borrow;
use std::iter::FromIterator;
use std::ops::Index;

/// An ordered map implemented using a splay tree.
///
/// A splay tree is a self-adjusting binary tree with an additional property that recently accessed
/// items are quick to access again. After each insertion or search, the item that was accessed is
/// "splayed" to the root of the tree. No balance information is kept in the nodes, so individual
/// operations can take linear time, but any sequence of operations is logarithmic in amortized
/// cost.
///
/// Lookups through `get`, `contains_key`, `floor`, `ceil`, `minimum` and `maximum` take `&self`
/// and leave the shape of the tree untouched. Use `search` or `get_mut` to splay the accessed key.
///
/// # Examples
///
/// ```
/// use forest::splay_tree::SplayTree;
///
/// let mut tree = SplayTree::new();
/// tree.insert(10, 1);
/// tree.insert(20, 2);
/// tree.insert(30, 3);
/// assert_eq!(tree.root().map(|entry| entry.key), Some(30));
///
/// assert_eq!(tree.search(&10).map(|entry| entry.value), Some(1));
/// assert_eq!(tree.root().map(|entry| entry.key), Some(10));
///
/// assert_eq!(tree[&20], 2);
/// assert_eq!(tree.floor(&25), Some(&20));
///
/// assert_eq!(tree.remove(&20), Some((20, 2)));
/// assert_eq!(tree.remove(&20), None);
/// ```
pub struct SplayTree<T, U> {
    tree: tree::Tree<T, U>,
}

impl<T, U> SplayTree<T, U> {
    /// Constructs a new, empty `SplayTree<T, U>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use forest::splay_tree::SplayTree;
    ///
    /// let tree: SplayTree<u32, u32> = SplayTree::new();
    /// ```
    pub fn new() -> Self {
        SplayTree {
            tree: tree::Tree::new(),
        }
    }

    /// Constructs a new, empty `SplayTree<T, U>` that allocates nodes in chunks of `capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        SplayTree {
            tree: tree::Tree::with_capacity(capacity),
        }
    }

    /// Inserts a key-value pair into the tree and splays its node to the root. If the key already
    /// exists in the tree, its value is replaced and the old value is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use forest::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// assert_eq!(tree.insert(1, 1), None);
    /// assert_eq!(tree.insert(2, 2), None);
    /// assert_eq!(tree.insert(1, 3), Some(1));
    /// assert_eq!(tree.root().map(|entry| entry.key), Some(1));
    /// ```
    pub fn insert(&mut self, key: T, value: U) -> Option<U>
    where
        T: Ord,
    {
        tree::insert(&mut self.tree, key, value)
    }

    /// Removes a key-value pair from the tree. If the key exists in the tree, it will return the
    /// associated key-value pair. Otherwise it will return `None`, after splaying the last node
    /// visited while looking for the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use forest::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1, 1);
    /// assert_eq!(tree.remove(&1), Some((1, 1)));
    /// assert_eq!(tree.remove(&1), None);
    /// ```
    pub fn remove<V>(&mut self, key: &V) -> Option<(T, U)>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::remove(&mut self.tree, key)
    }

    /// Searches for a key, splaying its node to the root. If the key is absent, the last node
    /// visited is splayed instead and `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use forest::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1, 1);
    /// tree.insert(2, 2);
    /// assert_eq!(tree.search(&1).map(|entry| entry.value), Some(1));
    /// assert_eq!(tree.root().map(|entry| entry.key), Some(1));
    /// assert!(tree.search(&3).is_none());
    /// assert_eq!(tree.root().map(|entry| entry.key), Some(2));
    /// ```
    pub fn search<V>(&mut self, key: &V) -> Option<&Entry<T, U>>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let handle = tree::access(&mut self.tree, key)?;
        Some(self.tree.entry(handle))
    }

    /// Checks if a key exists in the tree without splaying.
    pub fn contains_key<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree.find(key).is_some()
    }

    /// Returns an immutable reference to the value associated with a particular key without
    /// splaying. It will return `None` if the key does not exist in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use forest::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1, 1);
    /// tree.insert(2, 2);
    /// assert_eq!(tree.get(&1), Some(&1));
    /// assert_eq!(tree.root().map(|entry| entry.key), Some(2));
    /// ```
    pub fn get<V>(&self, key: &V) -> Option<&U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree
            .find(key)
            .map(|handle| &self.tree.entry(handle).value)
    }

    /// Returns a mutable reference to the value associated with a particular key, splaying the
    /// accessed node to the root. Returns `None` if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use forest::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1, 1);
    /// tree.insert(2, 2);
    /// *tree.get_mut(&1).unwrap() = 3;
    /// assert_eq!(tree.get(&1), Some(&3));
    /// assert_eq!(tree.root().map(|entry| entry.key), Some(1));
    /// ```
    pub fn get_mut<V>(&mut self, key: &V) -> Option<&mut U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let handle = tree::access(&mut self.tree, key)?;
        Some(&mut self.tree.entry_mut(handle).value)
    }

    /// Returns the entry with the minimum key, or `None` if the tree is empty.
    pub fn minimum(&self) -> Option<&Entry<T, U>> {
        self.tree
            .root()
            .map(|root| self.tree.entry(self.tree.minimum(root)))
    }

    /// Returns the entry with the maximum key, or `None` if the tree is empty.
    pub fn maximum(&self) -> Option<&Entry<T, U>> {
        self.tree
            .root()
            .map(|root| self.tree.entry(self.tree.maximum(root)))
    }

    /// Returns a key in the tree that is less than or equal to a particular key. Returns `None` if
    /// such a key does not exist.
    pub fn floor<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree
            .floor(key)
            .map(|handle| &self.tree.entry(handle).key)
    }

    /// Returns a key in the tree that is greater than or equal to a particular key. Returns `None`
    /// if such a key does not exist.
    pub fn ceil<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree
            .ceil(key)
            .map(|handle| &self.tree.entry(handle).key)
    }

    /// Returns the entry stored at the root of the tree, which is the most recently splayed entry.
    pub fn root(&self) -> Option<&Entry<T, U>> {
        self.tree.root().map(|root| self.tree.entry(root))
    }

    /// Returns the number of elements in the tree.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of nodes reachable from the root, counted by walking the tree.
    pub fn size(&self) -> usize {
        self.tree.size()
    }

    /// Returns the number of node levels in the tree. An empty tree has height zero and a tree
    /// with a single node has height one.
    pub fn height(&self) -> usize {
        self.tree.height()
    }

    /// Clears the tree, removing all values.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Checks the binary search tree invariants of the tree.
    pub fn validate(&self) -> Result<()>
    where
        T: Ord,
    {
        self.tree.validate()
    }

    /// Returns an iterator over the tree that visits every node before its subtrees.
    pub fn pre_order(&self) -> impl Iterator<Item = (&T, &U)> {
        PreOrder::new(&self.tree)
    }

    /// Returns an iterator over the tree that yields key-value pairs in ascending key order.
    pub fn in_order(&self) -> impl Iterator<Item = (&T, &U)> {
        InOrder::new(&self.tree)
    }

    /// Returns an iterator over the tree that visits every node after its subtrees.
    pub fn post_order(&self) -> impl Iterator<Item = (&T, &U)> {
        PostOrder::new(&self.tree)
    }

    /// Returns an iterator over the tree that visits nodes level by level, starting at the root.
    pub fn breadth_first(&self) -> impl Iterator<Item = (&T, &U)> {
        BreadthFirst::new(&self.tree)
    }

    /// Returns an iterator over the tree. The iterator will yield key-value pairs using in-order
    /// traversal.
    pub fn iter(&self) -> impl Iterator<Item = (&T, &U)> {
        self.in_order()
    }

    pub fn pre_order_traversal<F>(&self, mut visitor: F)
    where
        F: FnMut(&T, &U),
    {
        self.pre_order().for_each(|(key, value)| visitor(key, value));
    }

    pub fn in_order_traversal<F>(&self, mut visitor: F)
    where
        F: FnMut(&T, &U),
    {
        self.in_order().for_each(|(key, value)| visitor(key, value));
    }

    pub fn post_order_traversal<F>(&self, mut visitor: F)
    where
        F: FnMut(&T, &U),
    {
        self.post_order().for_each(|(key, value)| visitor(key, value));
    }

    pub fn breadth_first_traversal<F>(&self, mut visitor: F)
    where
        F: FnMut(&T, &U),
    {
        self.breadth_first().for_each(|(key, value)| visitor(key, value));
    }
}

impl<T, U> IntoIterator for SplayTree<T, U> {
    type IntoIter = IntoIter<Node<T, U>>;
    type Item = (T, U);

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.tree)
    }
}

impl<'a, T, U> IntoIterator for &'a SplayTree<T, U>
where
    T: 'a,
    U: 'a,
{
    type IntoIter = InOrder<'a, Node<T, U>>;
    type Item = (&'a T, &'a U);

    fn into_iter(self) -> Self::IntoIter {
        InOrder::new(&self.tree)
    }
}

impl<T, U> Default for SplayTree<T, U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, U> Extend<(T, U)> for SplayTree<T, U>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (T, U)>,
    {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<T, U> FromIterator<(T, U)> for SplayTree<T, U>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (T, U)>,
    {
        let mut tree = SplayTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T, U> From<Vec<(T, U)>> for SplayTree<T, U>
where
    T: Ord,
{
    fn from(pairs: Vec<(T, U)>) -> Self {
        pairs.into_iter().collect()
    }
}

impl<'a, T, U, V> Index<&'a V> for SplayTree<T, U>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    type Output = U;

    fn index(&self, key: &V) -> &Self::Output {
        self.get(key).expect("Error: key does not exist.")
    }
}
