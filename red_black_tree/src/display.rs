/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Tree export for external rendering.
//!
//! [`RedBlackTree::to_display_tree`] snapshots the tree structure into a
//! plain recursive value. This is the only interface a rendering collaborator
//! consumes: it carries keys, colors (so red and black nodes can be drawn
//! distinctly), and a fixed marker for the sentinel leaves, and nothing about
//! the arena representation leaks through it.

use std::fmt;

use crate::RedBlackTree;
use crate::arena::NodeIndex;
use crate::node::Color;

/// A node of the exported display tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayNode<K> {
    /// The fixed marker for a sentinel ("NIL") leaf. An empty tree exports as
    /// a single `Nil`.
    Nil,
    /// A real tree node.
    Node {
        /// The node's key.
        key: K,
        /// The node's color.
        color: Color,
        /// Exactly two entries: the left child, then the right child.
        children: Vec<DisplayNode<K>>,
    },
}

impl<K> DisplayNode<K> {
    /// Whether this is the sentinel marker.
    pub fn is_nil(&self) -> bool {
        matches!(self, DisplayNode::Nil)
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result
    where
        K: fmt::Display,
    {
        for _ in 0..depth {
            f.write_str("  ")?;
        }
        match self {
            DisplayNode::Nil => writeln!(f, "NIL"),
            DisplayNode::Node {
                key,
                color,
                children,
            } => {
                let color = match color {
                    Color::Red => "red",
                    Color::Black => "black",
                };
                writeln!(f, "{key} ({color})")?;
                for child in children {
                    child.fmt_indented(f, depth + 1)?;
                }
                Ok(())
            }
        }
    }
}

/// Indented textual rendering, one node per line, children below their
/// parent. A debugging aid; structured consumers should walk the value.
impl<K: fmt::Display> fmt::Display for DisplayNode<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}

impl<K: Clone, V> RedBlackTree<K, V> {
    /// Export the tree as a recursive `{key, color, children}` structure for
    /// an external rendering collaborator. Sentinel leaves appear as
    /// [`DisplayNode::Nil`]; an empty tree is a single `Nil`.
    pub fn to_display_tree(&self) -> DisplayNode<K> {
        self.export(self.root_index())
    }

    fn export(&self, idx: NodeIndex) -> DisplayNode<K> {
        if idx.is_nil() {
            return DisplayNode::Nil;
        }
        let node = self.node(idx);
        DisplayNode::Node {
            key: node.key.clone(),
            color: node.color,
            children: vec![self.export(node.left), self.export(node.right)],
        }
    }
}
