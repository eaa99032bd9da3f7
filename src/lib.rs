//! This crate exposes a handful of classic data structures, mostly for
//! educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree stores keys in `Node`s, each of which may have a
//! left and a right child. The invariant that makes it useful is:
//!
//! 1. For every `Node`, all the keys in its left subtree are less than
//!    its own key.
//! 2. For every `Node`, all the keys in its right subtree are greater
//!    than or equal to its own key.
//!
//! Searching therefore takes `O(height)` and visiting the left subtree,
//! then the node, then the right subtree yields the keys in sorted order.
//! [`tree::Tree`] does no rebalancing, so inserting sorted keys gives it a
//! height equal to its length.
//!
//! ## Graph
//!
//! [`graph::Graph`] is an undirected graph stored as adjacency lists: each
//! vertex maps to the vertices it shares an edge with. A breadth-first
//! traversal visits the vertices reachable from a start vertex in order of
//! their distance from it.
//!
//! ## Linear collections
//!
//! [`stack::Stack`], [`queue::Queue`] and [`linked_list::LinkedList`] are
//! the usual single-ended containers. Taking an element out of an empty one
//! is an [`Error::Empty`]. All three implement [`collection::Collection`].

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod collection;
pub mod error;
pub mod graph;
pub mod key;
pub mod linked_list;
pub mod queue;
pub mod stack;
pub mod tree;

#[cfg(test)]
mod test;

pub use error::{Error, Result};
