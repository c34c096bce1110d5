/// A key-value pair stored in a node of a tree.
///
/// Lookups such as `search`, `minimum` and `maximum` return a reference to the entry of the node
/// they land on.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Entry<T, U> {
    pub key: T,
    pub value: U,
}

impl<T, U> Entry<T, U> {
    pub fn new(key: T, value: U) -> Self {
        Entry { key, value }
    }

    /// Consumes the entry, returning the key-value pair.
    pub fn into_pair(self) -> (T, U) {
        let Entry { key, value } = self;
        (key, value)
    }
}
