use crate::arena::Handle;
use crate::entry::Entry;

pub type Link = Option<Handle>;

/// Identifies one of the two child slots of a node.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// The structural links of a node.
///
/// `left` and `right` own their subtrees. `parent` is a back-reference and is never followed to
/// free a node.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Links {
    pub parent: Link,
    pub left: Link,
    pub right: Link,
}

impl Links {
    pub fn child(&self, side: Side) -> Link {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn set_child(&mut self, side: Side, link: Link) {
        match side {
            Side::Left => self.left = link,
            Side::Right => self.right = link,
        }
    }
}

/// A node that can be linked into a `Tree`.
pub trait Node {
    type Key;
    type Value;

    fn entry(&self) -> &Entry<Self::Key, Self::Value>;

    fn entry_mut(&mut self) -> &mut Entry<Self::Key, Self::Value>;

    fn into_entry(self) -> Entry<Self::Key, Self::Value>;

    fn links(&self) -> &Links;

    fn links_mut(&mut self) -> &mut Links;
}
