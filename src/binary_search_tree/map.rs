use crate::binary_search_tree::node::Node;
use crate::binary_search_tree::tree;
use crate::entry::Entry;
use crate::error::Result;
use crate::traversal::{BreadthFirst, InOrder, IntoIter, PostOrder, PreOrder};
use std::borrow::Borrow;
use std::iter::FromIterator;
use std::ops::Index;

/// An ordered map implemented using an unbalanced binary search tree.
///
/// Keys are kept in binary search tree order and nothing else: the tree is never restructured, so
/// its height depends on the order in which keys arrive. Sorted input degenerates into a chain with
/// linear-time operations.
///
/// # Examples
///
/// ```
/// use forest::binary_search_tree::BinarySearchTree;
///
/// let mut tree = BinarySearchTree::new();
/// tree.insert(4, "four");
/// tree.insert(2, "two");
/// tree.insert(90, "ninety");
///
/// assert_eq!(tree.search(&2).map(|entry| entry.value), Some("two"));
/// assert_eq!(tree.minimum().map(|entry| entry.key), Some(2));
/// assert_eq!(tree.height(), 2);
///
/// assert_eq!(tree.remove(&4), Some((4, "four")));
/// assert_eq!(tree.remove(&4), None);
/// assert_eq!(tree.size(), 2);
/// ```
pub struct BinarySearchTree<T, U> {
    tree: tree::Tree<T, U>,
}

impl<T, U> BinarySearchTree<T, U> {
    /// Constructs a new, empty `BinarySearchTree<T, U>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use forest::binary_search_tree::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<u32, u32> = BinarySearchTree::new();
    /// ```
    pub fn new() -> Self {
        BinarySearchTree {
            tree: tree::Tree::new(),
        }
    }

    /// Constructs a new, empty `BinarySearchTree<T, U>` that allocates nodes in chunks of
    /// `capacity`.
    ///
    /// # Examples
    ///
    /// ```
    /// use forest::binary_search_tree::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<u32, u32> = BinarySearchTree::with_capacity(1024);
    /// assert!(tree.is_empty());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        BinarySearchTree {
            tree: tree::Tree::with_capacity(capacity),
        }
    }

    /// Inserts a key-value pair into the tree. If the key already exists in the tree, its value is
    /// replaced and the old value is returned. The shape of the tree does not change in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use forest::binary_search_tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// assert_eq!(tree.insert(1, 1), None);
    /// assert_eq!(tree.get(&1), Some(&1));
    /// assert_eq!(tree.insert(1, 2), Some(1));
    /// assert_eq!(tree.get(&1), Some(&2));
    /// ```
    pub fn insert(&mut self, key: T, value: U) -> Option<U>
    where
        T: Ord,
    {
        tree::insert(&mut self.tree, key, value)
    }

    /// Removes a key-value pair from the tree. If the key exists in the tree, it will return the
    /// associated key-value pair. Otherwise it will return `None`.
    ///
    /// A node with two children is replaced by its in-order successor.
    ///
    /// # Examples
    ///
    /// ```
    /// use forest::binary_search_tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
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

    /// Returns the entry of the node holding a particular key, or `None` if the key does not exist
    /// in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use forest::binary_search_tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(3, 30);
    ///
    /// let entry = tree.search(&3).unwrap();
    /// assert_eq!((entry.key, entry.value), (3, 30));
    /// assert!(tree.search(&1337).is_none());
    /// ```
    pub fn search<V>(&self, key: &V) -> Option<&Entry<T, U>>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree.find(key).map(|handle| self.tree.entry(handle))
    }

    /// Checks if a key exists in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use forest::binary_search_tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(1, 1);
    /// assert!(!tree.contains_key(&0));
    /// assert!(tree.contains_key(&1));
    /// ```
    pub fn contains_key<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree.find(key).is_some()
    }

    /// Returns an immutable reference to the value associated with a particular key. It will
    /// return `None` if the key does not exist in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use forest::binary_search_tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(1, 1);
    /// assert_eq!(tree.get(&0), None);
    /// assert_eq!(tree.get(&1), Some(&1));
    /// ```
    pub fn get<V>(&self, key: &V) -> Option<&U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.search(key).map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value associated with a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use forest::binary_search_tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(1, 1);
    /// *tree.get_mut(&1).unwrap() = 2;
    /// assert_eq!(tree.get(&1), Some(&2));
    /// ```
    pub fn get_mut<V>(&mut self, key: &V) -> Option<&mut U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let handle = self.tree.find(key)?;
        Some(&mut self.tree.entry_mut(handle).value)
    }

    /// Returns the entry with the minimum key, or `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use forest::binary_search_tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// assert!(tree.minimum().is_none());
    /// tree.insert(3, 3);
    /// tree.insert(1, 1);
    /// assert_eq!(tree.minimum().map(|entry| entry.key), Some(1));
    /// ```
    pub fn minimum(&self) -> Option<&Entry<T, U>> {
        self.tree
            .root()
            .map(|root| self.tree.entry(self.tree.minimum(root)))
    }

    /// Returns the entry with the maximum key, or `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use forest::binary_search_tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// assert!(tree.maximum().is_none());
    /// tree.insert(1, 1);
    /// tree.insert(3, 3);
    /// assert_eq!(tree.maximum().map(|entry| entry.key), Some(3));
    /// ```
    pub fn maximum(&self) -> Option<&Entry<T, U>> {
        self.tree
            .root()
            .map(|root| self.tree.entry(self.tree.maximum(root)))
    }

    /// Returns a key in the tree that is less than or equal to a particular key. Returns `None` if
    /// such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use forest::binary_search_tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(1, 1);
    /// assert_eq!(tree.floor(&0), None);
    /// assert_eq!(tree.floor(&2), Some(&1));
    /// ```
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
    ///
    /// # Examples
    ///
    /// ```
    /// use forest::binary_search_tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(1, 1);
    /// assert_eq!(tree.ceil(&0), Some(&1));
    /// assert_eq!(tree.ceil(&2), None);
    /// ```
    pub fn ceil<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree
            .ceil(key)
            .map(|handle| &self.tree.entry(handle).key)
    }

    /// Returns the entry stored at the root of the tree, or `None` if the tree is empty.
    pub fn root(&self) -> Option<&Entry<T, U>> {
        self.tree.root().map(|root| self.tree.entry(root))
    }

    /// Returns the number of elements in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use forest::binary_search_tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(1, 1);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use forest::binary_search_tree::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<u32, u32> = BinarySearchTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of nodes reachable from the root, counted by walking the tree. This
    /// always agrees with `len`, but takes linear time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forest::binary_search_tree::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<u32, u32> = (0..10).map(|key| (key, 0)).collect();
    /// assert_eq!(tree.size(), 10);
    /// ```
    pub fn size(&self) -> usize {
        self.tree.size()
    }

    /// Returns the number of node levels in the tree. An empty tree has height zero and a tree
    /// with a single node has height one.
    ///
    /// # Examples
    ///
    /// ```
    /// use forest::binary_search_tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// assert_eq!(tree.height(), 0);
    /// tree.insert(1, 1);
    /// assert_eq!(tree.height(), 1);
    /// tree.insert(2, 2);
    /// tree.insert(3, 3);
    /// assert_eq!(tree.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        self.tree.height()
    }

    /// Clears the tree, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use forest::binary_search_tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(1, 1);
    /// tree.insert(2, 2);
    /// tree.clear();
    /// assert_eq!(tree.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Checks that the tree satisfies the binary search tree order, that every parent link
    /// matches its child link, and that every allocated node is reachable from the root.
    pub fn validate(&self) -> Result<()>
    where
        T: Ord,
    {
        self.tree.validate()
    }

    /// Returns an iterator over the tree that visits every node before its subtrees.
    ///
    /// # Examples
    ///
    /// ```
    /// use forest::binary_search_tree::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<u32, ()> = vec![(2, ()), (1, ()), (3, ())].into();
    /// let keys: Vec<&u32> = tree.pre_order().map(|(key, _)| key).collect();
    /// assert_eq!(keys, vec![&2, &1, &3]);
    /// ```
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
    ///
    /// # Examples
    ///
    /// ```
    /// use forest::binary_search_tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(2, 2);
    /// tree.insert(1, 1);
    ///
    /// let mut iterator = tree.iter();
    /// assert_eq!(iterator.next(), Some((&1, &1)));
    /// assert_eq!(iterator.next(), Some((&2, &2)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = (&T, &U)> {
        self.in_order()
    }

    /// Calls `visitor` on every key-value pair, visiting each node before its subtrees.
    ///
    /// # Examples
    ///
    /// ```
    /// use forest::binary_search_tree::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<u32, u32> = vec![(2, 20), (1, 10), (3, 30)].into();
    /// let mut visited = Vec::new();
    /// tree.pre_order_traversal(|key, value| visited.push((*key, *value)));
    /// assert_eq!(visited, vec![(2, 20), (1, 10), (3, 30)]);
    /// ```
    pub fn pre_order_traversal<F>(&self, mut visitor: F)
    where
        F: FnMut(&T, &U),
    {
        self.pre_order().for_each(|(key, value)| visitor(key, value));
    }

    /// Calls `visitor` on every key-value pair in ascending key order.
    pub fn in_order_traversal<F>(&self, mut visitor: F)
    where
        F: FnMut(&T, &U),
    {
        self.in_order().for_each(|(key, value)| visitor(key, value));
    }

    /// Calls `visitor` on every key-value pair, visiting each node after its subtrees.
    pub fn post_order_traversal<F>(&self, mut visitor: F)
    where
        F: FnMut(&T, &U),
    {
        self.post_order().for_each(|(key, value)| visitor(key, value));
    }

    /// Calls `visitor` on every key-value pair, level by level from the root.
    pub fn breadth_first_traversal<F>(&self, mut visitor: F)
    where
        F: FnMut(&T, &U),
    {
        self.breadth_first().for_each(|(key, value)| visitor(key, value));
    }
}

impl<T, U> IntoIterator for BinarySearchTree<T, U> {
    type IntoIter = IntoIter<Node<T, U>>;
    type Item = (T, U);

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.tree)
    }
}

impl<'a, T, U> IntoIterator for &'a BinarySearchTree<T, U>
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

impl<T, U> Default for BinarySearchTree<T, U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, U> Extend<(T, U)> for BinarySearchTree<T, U>
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

impl<T, U> FromIterator<(T, U)> for BinarySearchTree<T, U>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (T, U)>,
    {
        let mut tree = BinarySearchTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T, U> From<Vec<(T, U)>> for BinarySearchTree<T, U>
where
    T: Ord,
{
    fn from(pairs: Vec<(T, U)>) -> Self {
        pairs.into_iter().collect()
    }
}

impl<'a, T, U, V> Index<&'a V> for BinarySearchTree<T, U>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    type Output = U;

    fn index(&self, key: &V) -> &Self::Output {
        self.get(key).expect("Error: key does not exist.")
    }
}
