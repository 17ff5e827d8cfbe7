//! Error types returned by [`RbTree`](crate::RbTree).

use thiserror::Error;

/// Returned by [`RbTree::insert()`](crate::RbTree::insert) when the tree
/// already holds an equal key.
///
/// The tree is left unmodified and ownership of the rejected key and value
/// returns to the caller.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("key already present in tree")]
pub struct DuplicateKey<K, V> {
    /// The key passed to the rejected insert.
    pub key: K,
    /// The value passed to the rejected insert.
    pub value: V,
}

impl<K, V> DuplicateKey<K, V> {
    /// Take back ownership of the rejected key and value.
    pub fn into_inner(self) -> (K, V) {
        (self.key, self.value)
    }
}

/// A red-black or binary-search-tree property that does not hold, as
/// reported by [`RbTree::validate()`](crate::RbTree::validate).
///
/// Node positions are given as the depth of the offending node, with the
/// root at depth 0.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("root node is red")]
    RedRoot,

    #[error("root node has a parent link")]
    RootHasParent,

    #[error("red node at depth {depth} has a red child")]
    RedRed { depth: usize },

    #[error("black-height mismatch at depth {depth}: left={left}, right={right}")]
    BlackHeight {
        depth: usize,
        left: usize,
        right: usize,
    },

    #[error("child of node at depth {depth} does not link back to it")]
    ParentLink { depth: usize },

    #[error("in-order key at position {position} is not greater than its predecessor")]
    OutOfOrder { position: usize },

    #[error("{reachable} nodes reachable from root, but {allocated} allocated")]
    Leaked { reachable: usize, allocated: usize },
}
