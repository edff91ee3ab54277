//! Traversal orders over a [`Tree`], the iterator that walks them, and a
//! formatting adapter for printing the visited keys.
//!
//! Traversal is a pure sequence of keys ([`Tree::iter`]); printing is
//! layered on top of it ([`Tree::display`]). The iterator keeps its own
//! stack of pending work instead of recursing, so walking a badly skewed
//! tree cannot overflow the call stack no matter how deep the tree gets.

use std::fmt;

use crate::recursive::{Key, Node, Tree};

/// The order in which [`Tree::iter`] visits keys.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Order {
    /// Left subtree, node, right subtree. On a search tree this yields the
    /// keys in ascending order.
    InOrder,
    /// Node, left subtree, right subtree.
    PreOrder,
    /// Left subtree, right subtree, node.
    PostOrder,
}

/// A pending piece of traversal work: either a subtree still to be
/// expanded, or a key ready to be handed out.
enum Frame<'a> {
    Descend(&'a Node),
    Emit(Key),
}

/// An iterator over the keys of a [`Tree`] in a chosen [`Order`].
///
/// Created by [`Tree::iter`].
pub struct Iter<'a> {
    order: Order,
    stack: Vec<Frame<'a>>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(root: Option<&'a Node>, order: Order) -> Self {
        let stack = root.map(Frame::Descend).into_iter().collect();
        Self { order, stack }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = Key;

    fn next(&mut self) -> Option<Key> {
        loop {
            match self.stack.pop()? {
                Frame::Emit(key) => return Some(key),
                // Expand the node into its pieces, pushed in reverse visit
                // order so the stack pops them in the right one.
                Frame::Descend(node) => match self.order {
                    Order::InOrder => {
                        if let Some(right) = node.right() {
                            self.stack.push(Frame::Descend(right));
                        }
                        self.stack.push(Frame::Emit(node.key()));
                        if let Some(left) = node.left() {
                            self.stack.push(Frame::Descend(left));
                        }
                    }
                    Order::PreOrder => {
                        if let Some(right) = node.right() {
                            self.stack.push(Frame::Descend(right));
                        }
                        if let Some(left) = node.left() {
                            self.stack.push(Frame::Descend(left));
                        }
                        self.stack.push(Frame::Emit(node.key()));
                    }
                    Order::PostOrder => {
                        self.stack.push(Frame::Emit(node.key()));
                        if let Some(right) = node.right() {
                            self.stack.push(Frame::Descend(right));
                        }
                        if let Some(left) = node.left() {
                            self.stack.push(Frame::Descend(left));
                        }
                    }
                },
            }
        }
    }
}

/// Formats a tree's keys in a chosen [`Order`], separated by single spaces.
/// The empty tree formats as the empty string; `println!` supplies the
/// trailing newline.
///
/// Created by [`Tree::display`].
pub struct Display<'a> {
    tree: &'a Tree,
    order: Order,
}

impl<'a> Display<'a> {
    pub(crate) fn new(tree: &'a Tree, order: Order) -> Self {
        Self { tree, order }
    }
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys = self.tree.iter(self.order);
        if let Some(first) = keys.next() {
            write!(f, "{}", first)?;
            for key in keys {
                write!(f, " {}", key)?;
            }
        }
        Ok(())
    }
}
