//! Errors reported when a tree fails its structural invariants.

use std::error;
use std::fmt;
use std::result;

/// A broken structural invariant found by `validate`.
///
/// Positions are in-order indices, so `position == 0` refers to the node holding the minimum key.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The root node has a parent link.
    RootHasParent,
    /// A node's parent link does not point back to the node that owns it.
    ParentMismatch { position: usize },
    /// A node's key is not strictly greater than the key of its in-order predecessor.
    OrderViolation { position: usize },
    /// Some allocated nodes cannot be reached from the root.
    UnreachableNodes { reachable: usize, allocated: usize },
    /// The heights of a node's subtrees differ by more than one.
    Unbalanced { position: usize, balance: i64 },
    /// A node's cached height disagrees with the heights of its subtrees.
    StaleHeight {
        position: usize,
        cached: usize,
        actual: usize,
    },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::RootHasParent => write!(f, "root node has a parent link"),
            Error::ParentMismatch { position } => {
                write!(f, "node {} is not a child of its parent", position)
            },
            Error::OrderViolation { position } => {
                write!(f, "node {} is not greater than its in-order predecessor", position)
            },
            Error::UnreachableNodes {
                reachable,
                allocated,
            } => write!(
                f,
                "{} nodes are allocated but only {} are reachable from the root",
                allocated, reachable,
            ),
            Error::Unbalanced { position, balance } => {
                write!(f, "node {} has balance factor {}", position, balance)
            },
            Error::StaleHeight {
                position,
                cached,
                actual,
            } => write!(
                f,
                "node {} caches height {} but its subtrees imply {}",
                position, cached, actual,
            ),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
