/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Red-black tree implementation.
//!
//! This module contains the core tree structure and its query surface. The
//! algorithms are split into sub-modules by concern:
//! - [`find`]: navigation primitives (key lookup, insertion point, sibling,
//!   successor)
//! - [`rotate`]: the two rotation primitives, the only code that restructures
//!   parent/child links
//! - [`insert`]: write path (attach a red leaf, color fixup)
//! - [`delete`]: write path (successor swap, splice, double-black repair)
//! - [`invariants`]: full-tree structural checks

mod delete;
mod find;
mod insert;
pub(crate) mod invariants;
mod rotate;

use std::fmt;

use crate::arena::{NodeArena, NodeIndex};
use crate::node::{Color, Node};

/// A sorted associative container backed by a red-black tree.
///
/// Guarantees O(log n) `search`/`insert`/`delete` by keeping the tree height
/// bounded through the red-black invariants:
///
/// 1. The root, if present, is black.
/// 2. No red node has a red child.
/// 3. Every path from a node to a descendant sentinel leaf crosses the same
///    number of black nodes.
/// 4. The in-order key sequence is sorted.
/// 5. Sentinel leaves are black and carry no payload.
///
/// The fixup procedures in [`insert`](RedBlackTree::insert) and
/// [`delete`](RedBlackTree::delete) restore these invariants after every
/// mutation; nothing else ever violates them.
pub struct RedBlackTree<K, V> {
    /// The root node, or the sentinel index when the tree is empty.
    root: NodeIndex,
    /// Arena holding all tree nodes.
    nodes: NodeArena<K, V>,
    /// Number of live entries.
    len: usize,
}

impl<K, V> RedBlackTree<K, V> {
    /// Create a new empty tree.
    pub fn new() -> Self {
        Self {
            root: NodeIndex::NIL,
            nodes: NodeArena::new(),
            len: 0,
        }
    }

    /// Create an empty tree with room for `capacity` entries before the
    /// arena reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            root: NodeIndex::NIL,
            nodes: NodeArena::with_capacity(capacity),
            len: 0,
        }
    }

    /// Number of entries in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no entries.
    pub fn is_empty(&self) -> bool {
        self.root.is_nil()
    }

    /// Remove every entry, keeping the arena allocation.
    pub fn clear(&mut self) {
        self.root = NodeIndex::NIL;
        self.nodes.clear();
        self.len = 0;
    }

    /// The entry with the smallest key, or `None` on an empty tree.
    pub fn min(&self) -> Option<(&K, &V)> {
        let idx = self.extreme(self.root, |node| node.left);
        if idx.is_nil() {
            return None;
        }
        let node = &self.nodes[idx];
        Some((&node.key, &node.value))
    }

    /// The entry with the largest key, or `None` on an empty tree.
    pub fn max(&self) -> Option<(&K, &V)> {
        let idx = self.extreme(self.root, |node| node.right);
        if idx.is_nil() {
            return None;
        }
        let node = &self.nodes[idx];
        Some((&node.key, &node.value))
    }

    /// Walk from `start` along `step` until a sentinel, returning the last
    /// real node (or the sentinel if `start` already was one).
    fn extreme(&self, start: NodeIndex, step: impl Fn(&Node<K, V>) -> NodeIndex) -> NodeIndex {
        let mut current = start;
        let mut previous = NodeIndex::NIL;
        while !current.is_nil() {
            previous = current;
            current = step(&self.nodes[current]);
        }
        previous
    }

    /// The color of the node at `idx`, with the sentinel reading as black.
    pub(crate) fn color(&self, idx: NodeIndex) -> Color {
        if idx.is_nil() {
            Color::Black
        } else {
            self.nodes[idx].color
        }
    }

    /// Resolve a [`NodeIndex`] to a shared reference to the node.
    pub(crate) fn node(&self, idx: NodeIndex) -> &Node<K, V> {
        &self.nodes[idx]
    }

    /// The root node index; the sentinel when the tree is empty.
    pub(crate) fn root_index(&self) -> NodeIndex {
        self.root
    }
}

impl<K: Ord, V> RedBlackTree<K, V> {
    /// Look up the value stored under `key`, or `None` if the key is absent.
    ///
    /// When duplicates of `key` exist, this returns the most recently
    /// inserted one (the leftmost equal entry in in-order position).
    pub fn search(&self, key: &K) -> Option<&V> {
        let idx = self.find_by_key(key);
        if idx.is_nil() {
            return None;
        }
        Some(&self.nodes[idx].value)
    }

    /// Whether `key` is present in the tree.
    pub fn contains_key(&self, key: &K) -> bool {
        !self.find_by_key(key).is_nil()
    }
}

impl<K, V> Default for RedBlackTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for RedBlackTree<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(key, value, _)| (key, value)))
            .finish()
    }
}
