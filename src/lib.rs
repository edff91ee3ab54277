//! This crate exposes an owned Binary Search Tree (BST) over integer keys,
//! together with the structural diagnostics you usually want while studying
//! one: depth, height, leaf counts, a balance check, ancestor checks, and
//! the three classic traversal orders.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! keys in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). BSTs also naturally support
//! sorted iteration by visiting the left subtree, then the subtree root, then
//! the right subtree.
//!
//! The tree in this crate does **not** rebalance itself. Inserting keys in
//! ascending or descending order degrades the height, and with it every
//! `O(height)` operation, to `O(n)`. That makes it a good tree to poke at
//! with the diagnostics on [`recursive::Tree`]: watch
//! [`height`](recursive::Tree::height) grow past `lg N` and
//! [`is_balanced`](recursive::Tree::is_balanced) flip to `false`.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod recursive;
pub mod traverse;

#[cfg(test)]
mod test;
