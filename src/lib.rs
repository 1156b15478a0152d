//! This crate exposes a Binary Search Tree (BST) that remembers the order
//! in which its elements were inserted.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored records. BSTs are typically defined recursively
//! using the notion of a `Node`. A `Node` stores some sort of value (the
//! value that was inserted, for example) and will sometimes have child
//! `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value that orders before its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value that orders at or after its own value.
//!
//! This tree departs from the textbook structure in two ways:
//!
//! - "Orders before" is decided by a caller-supplied ordering relation, and
//!   membership is decided by a *separate* caller-supplied equality
//!   relation. The ordering places elements; the equality deduplicates
//!   them. The two must agree with each other (elements the equality calls
//!   equal must not order strictly before or after one another), a
//!   contract the tree cannot check on its own.
//! - Alongside the left/right structure, every node carries a link to the
//!   node inserted immediately after it. Iteration follows that chain, so
//!   elements come back in the order they were first inserted rather than
//!   in sorted order. Sorted output is still available through the inorder
//!   traversal writer.
//!
//! The tree never rebalances and supports no per-element deletion, so a
//! sorted insertion sequence degenerates into a chain and the documented
//! costs are in terms of element count, not height.

#![deny(missing_docs)]

pub mod arena;
pub mod error;

#[cfg(test)]
mod test;
