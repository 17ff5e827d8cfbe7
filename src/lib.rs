//! An ordered map backed by a [red-black tree], guaranteeing O(log n) search,
//! insertion and removal regardless of insertion order.
//!
//! Nodes are stored in a per-tree arena and linked by index, with a reserved
//! index standing in for the sentinel "nil" leaf. No node is ever shared
//! between trees, and nothing is `unsafe`.
//!
//! ```
//! use redblack::RbTree;
//!
//! let mut t = RbTree::new();
//! for k in 1..=16 {
//!     t.insert(k, k * 100).unwrap();
//! }
//!
//! assert_eq!(t.get(&4), Some(&400));
//! assert_eq!(t.remove(&4), Some((4, 400)));
//! assert_eq!(t.get(&4), None);
//!
//! assert_eq!(t.minimum(), &100);
//! assert_eq!(t.maximum(), &1600);
//!
//! // Visit every entry in ascending key order.
//! let mut keys = Vec::new();
//! t.visit(|k, _v| keys.push(*k));
//! assert_eq!(keys.len(), 15);
//! assert!(keys.windows(2).all(|w| w[0] < w[1]));
//! ```
//!
//! Key ordering is pluggable through the [`compare::Compare`] trait (any
//! `Fn(&K, &K) -> Ordering` closure will do), and keys removed through
//! [`RbTree::delete()`] are handed to a [`Dispose`] hook.
//!
//! [red-black tree]: https://en.wikipedia.org/wiki/Red%E2%80%93black_tree

#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]

mod balance;
mod dispose;
mod dot;
mod error;
mod iter;
mod node;
mod tree;
mod validate;

#[cfg(test)]
mod test_utils;

pub use compare;
pub use dispose::*;
pub use dot::Dot;
pub use error::*;
pub use tree::*;
