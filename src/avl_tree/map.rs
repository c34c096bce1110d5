use crate::avl_tree::node::Node;
use crate::avl_tree::tree;
use crate::entry::Entry;
use crate::error::Result;
use crate::traversal::{BreadthFirst, InOrder, IntoIter, PostOrder, PreOrder};
use std::borrow::Borrow;
use std::iter::FromIterator;
use std::ops::Index;

/// An ordered map implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one. Every insertion and removal
/// retraces the path back to the root, rotating wherever the invariant was broken, so the height
/// of the tree stays logarithmic in its size.
///
/// # Examples
///
/// ```
/// use forest::avl_tree::AvlTree;
///
/// let mut tree = AvlTree::new();
/// for key in 0..10 {
///     tree.insert(key, key * 2);
/// }
///
/// assert_eq!(tree.height(), 4);
/// assert_eq!(tree[&3], 6);
/// assert_eq!(tree.get(&10), None);
///
/// assert_eq!(tree.minimum().map(|entry| entry.key), Some(0));
/// assert_eq!(tree.ceil(&10), None);
///
/// assert_eq!(tree.remove(&0), Some((0, 0)));
/// assert_eq!(tree.remove(&0), None);
/// ```
pub struct AvlTree<T, U> {
    tree: tree::Tree<T, U>,
}

impl<T, U> AvlTree<T, U> {
    /// Constructs a new, empty `AvlTree<T, U>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use forest::avl_tree::AvlTree;
    ///
    /// let tree: AvlTree<u32, u32> = AvlTree::new();
    /// ```
    pub fn new() -> Self {
        AvlTree {
            tree: tree::Tree::new(),
        }
    }

    /// Constructs a new, empty `AvlTree<T, U>` that allocates nodes in chunks of `capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        AvlTree {
            tree: tree::Tree::with_capacity(capacity),
        }
    }

    /// Inserts a key-value pair into the tree. If the key already exists in the tree, its value is
    /// replaced and the old value is returned without restructuring the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use forest::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// assert_eq!(tree.insert(1, 1), None);
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
    /// # Examples
    ///
    /// ```
    /// use forest::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
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
    pub fn search<V>(&self, key: &V) -> Option<&Entry<T, U>>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree.find(key).map(|handle| self.tree.entry(handle))
    }

    /// Checks if a key exists in the tree.
    pub fn contains_key<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree.find(key).is_some()
    }

    /// Returns an immutable reference to the value associated with a particular key. It will
    /// return `None` if the key does not exist in the tree.
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
    /// use forest::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
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

    /// Returns the entry stored at the root of the tree, or `None` if the tree is empty.
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
    /// with a single node has height one. The height of every node is cached, so this takes
    /// constant time.
    pub fn height(&self) -> usize {
        tree::height(&self.tree, self.tree.root())
    }

    /// Clears the tree, removing all values.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Checks the binary search tree invariants along with the balance of every node and the
    /// consistency of the cached heights.
    ///
    /// # Examples
    ///
    /// ```
    /// use forest::avl_tree::AvlTree;
    ///
    /// let tree: AvlTree<u32, ()> = (0..1000).map(|key| (key, ())).collect();
    /// assert!(tree.validate().is_ok());
    /// ```
    pub fn validate(&self) -> Result<()>
    where
        T: Ord,
    {
        tree::validate(&self.tree)
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

impl<T, U> IntoIterator for AvlTree<T, U> {
    type IntoIter = IntoIter<Node<T, U>>;
    type Item = (T, U);

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.tree)
    }
}

impl<'a, T, U> IntoIterator for &'a AvlTree<T, U>
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

impl<T, U> Default for AvlTree<T, U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, U> Extend<(T, U)> for AvlTree<T, U>
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

impl<T, U> FromIterator<(T, U)> for AvlTree<T, U>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (T, U)>,
    {
        let mut tree = AvlTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T, U> From<Vec<(T, U)>> for AvlTree<T, U>
where
    T: Ord,
{
    fn from(pairs: Vec<(T, U)>) -> Self {
        pairs.into_iter().collect()
    }
}

impl<'a, T, U, V> Index<&'a V> for AvlTree<T, U>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    type Output = U;

    fn index(&self, key: &V) -> &Self::Output {
        self.get(key).expect("Error: key does not exist.")
    }
}

#[cfg(test)]
mod tests {
    use super::AvlTree;

    #[test]
    fn test_len_empty() {
        let tree: AvlTree<u32, u32> = AvlTree::new();
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.size(), 0);
    }

    #[test]
    fn test_min_max_empty() {
        let tree: AvlTree<u32, u32> = AvlTree::new();
        assert!(tree.minimum().is_none());
        assert!(tree.maximum().is_none());
        assert!(tree.search(&555).is_none());
    }

    #[test]
    fn test_single_node_height() {
        let mut tree = AvlTree::new();
        tree.insert(1, 1);
        assert_eq!(tree.height(), 1);
        assert_eq!(tree.size(), 1);
    }

    #[test]
    fn test_ascending_stays_balanced() {
        let tree: AvlTree<i32, i32> = (0..10).map(|key| (key, 0)).collect();
        assert_eq!(tree.height(), 4);
        assert_eq!(tree.size(), 10);
        assert_eq!(tree.root().map(|entry| entry.key), Some(3));
        assert_eq!(tree.validate(), Ok(()));
    }

    #[test]
    fn test_descending_stays_balanced() {
        let tree: AvlTree<i32, i32> = (0..10).rev().map(|key| (key, 0)).collect();
        assert_eq!(tree.height(), 4);
        assert_eq!(tree.validate(), Ok(()));
    }

    #[test]
    fn test_scattered() {
        let mut tree: AvlTree<i32, i32> =
            vec![(4, 0), (2, 0), (90, 0), (3, 0), (0, 0), (14, 0), (45, 0)].into();
        assert_eq!(tree.height(), 3);
        assert_eq!(tree.size(), 7);
        assert_eq!(tree.maximum().map(|entry| entry.key), Some(90));
        assert_eq!(tree.minimum().map(|entry| entry.key), Some(0));
        assert_eq!(
            tree.breadth_first().map(|(key, _)| *key).collect::<Vec<i32>>(),
            vec![4, 2, 45, 0, 3, 14, 90],
        );

        assert_eq!(tree.remove(&45), Some((45, 0)));
        assert!(tree.search(&45).is_none());
        assert_eq!(tree.height(), 3);
        assert_eq!(tree.size(), 6);
        assert_eq!(tree.validate(), Ok(()));
    }

    #[test]
    fn test_insert_replace() {
        let mut tree = AvlTree::new();
        assert_eq!(tree.insert(1, 1), None);
        assert_eq!(tree.insert(1, 3), Some(1));
        assert_eq!(tree.get(&1), Some(&3));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_remove_all() {
        let mut tree: AvlTree<u32, u32> = (0..64).map(|key| (key, key)).collect();
        for key in (0..64).filter(|key| key % 3 != 0) {
            assert_eq!(tree.remove(&key), Some((key, key)));
            assert_eq!(tree.validate(), Ok(()));
        }
        for key in (0..64).filter(|key| key % 3 == 0) {
            assert_eq!(tree.remove(&key), Some((key, key)));
            assert_eq!(tree.validate(), Ok(()));
        }
        assert!(tree.is_empty());
        assert_eq!(tree.height(), 0);
    }

    #[test]
    fn test_clear() {
        let mut tree: AvlTree<u32, u32> = (0..10).map(|key| (key, key)).collect();
        tree.clear();
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.size(), 0);
        tree.clear();
        assert!(tree.is_empty());
        tree.insert(1, 1);
        assert_eq!(tree.height(), 1);
    }

    #[test]
    fn test_floor_ceil() {
        let tree: AvlTree<u32, u32> = vec![(1, 1), (3, 3), (5, 5)].into();
        assert_eq!(tree.floor(&0), None);
        assert_eq!(tree.floor(&2), Some(&1));
        assert_eq!(tree.floor(&4), Some(&3));
        assert_eq!(tree.floor(&6), Some(&5));

        assert_eq!(tree.ceil(&0), Some(&1));
        assert_eq!(tree.ceil(&2), Some(&3));
        assert_eq!(tree.ceil(&4), Some(&5));
        assert_eq!(tree.ceil(&6), None);
    }

    #[test]
    fn test_traversals() {
        let tree: AvlTree<u32, ()> = (1..8).map(|key| (key, ())).collect();
        let mut pre = Vec::new();
        let mut post = Vec::new();
        tree.pre_order_traversal(|key, _| pre.push(*key));
        tree.post_order_traversal(|key, _| post.push(*key));
        assert_eq!(pre, vec![4, 2, 1, 3, 6, 5, 7]);
        assert_eq!(post, vec![1, 3, 2, 5, 7, 6, 4]);

        let mut sorted = Vec::new();
        tree.in_order_traversal(|key, _| sorted.push(*key));
        assert_eq!(sorted, (1..8).collect::<Vec<u32>>());

        let mut level = Vec::new();
        tree.breadth_first_traversal(|key, _| level.push(*key));
        assert_eq!(level, vec![4, 2, 6, 1, 3, 5, 7]);
    }

    #[test]
    fn test_into_iter() {
        let tree: AvlTree<u32, u32> = vec![(1, 2), (5, 6), (3, 4)].into();
        assert_eq!(
            tree.into_iter().collect::<Vec<(u32, u32)>>(),
            vec![(1, 2), (3, 4), (5, 6)],
        );
    }

    #[test]
    fn test_iter() {
        let tree: AvlTree<u32, u32> = vec![(1, 2), (5, 6), (3, 4)].into();
        assert_eq!(
            tree.iter().collect::<Vec<(&u32, &u32)>>(),
            vec![(&1, &2), (&3, &4), (&5, &6)],
        );
        assert_eq!(
            (&tree).into_iter().count(),
            3,
        );
    }
}
