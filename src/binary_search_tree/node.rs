use crate::entry::Entry;
use crate::node::{self, Links};

/// A struct representing an internal node of a binary search tree.
pub struct Node<T, U> {
    pub entry: Entry<T, U>,
    pub links: Links,
}

impl<T, U> Node<T, U> {
    pub fn new(key: T, value: U) -> Self {
        Node {
            entry: Entry::new(key, value),
            links: Links::default(),
        }
    }
}

impl<T, U> node::Node for Node<T, U> {
    type Key = T;
    type Value = U;

    fn entry(&self) -> &Entry<T, U> {
        &self.entry
    }

    fn entry_mut(&mut self) -> &mut Entry<T, U> {
        &mut self.entry
    }

    fn into_entry(self) -> Entry<T, U> {
        self.entry
    }

    fn links(&self) -> &Links {
        &self.links
    }

    fn links_mut(&mut self) -> &mut Links {
        &mut self.links
    }
}
