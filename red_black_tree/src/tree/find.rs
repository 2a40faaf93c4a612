/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Navigation primitives.
//!
//! Read-only descent and relationship queries used by the write paths and the
//! query surface: key lookup, insertion-point lookup, parent/sibling
//! relationships, and in-order successor. All are O(height) or O(1).

use std::cmp::Ordering;

use super::RedBlackTree;
use crate::arena::NodeIndex;
use crate::node::Side;

impl<K: Ord, V> RedBlackTree<K, V> {
    /// Binary-search descent for `key`. Returns the sentinel if absent.
    ///
    /// Equal keys keep descending left, so the returned node is the leftmost
    /// equal entry: the most recently inserted duplicate under the
    /// insert-left duplicate policy.
    pub(crate) fn find_by_key(&self, key: &K) -> NodeIndex {
        let mut current = self.root;
        let mut found = NodeIndex::NIL;
        while !current.is_nil() {
            let node = &self.nodes[current];
            match key.cmp(&node.key) {
                Ordering::Less => current = node.left,
                Ordering::Greater => current = node.right,
                Ordering::Equal => {
                    found = current;
                    current = node.left;
                }
            }
        }
        found
    }

    /// Descend to the node a new entry for `key` attaches under.
    ///
    /// Returns the last real node reached and the (sentinel) child slot the
    /// new node belongs in. Equal keys descend left: a duplicate lands
    /// immediately left of the existing entry in the in-order sequence.
    ///
    /// The caller must not invoke this on an empty tree.
    pub(crate) fn find_insertion_point(&self, key: &K) -> (NodeIndex, Side) {
        let mut current = self.root;
        loop {
            let node = &self.nodes[current];
            let side = if *key > node.key {
                Side::Right
            } else {
                Side::Left
            };
            let child = node.child(side);
            if child.is_nil() {
                return (current, side);
            }
            current = child;
        }
    }
}

impl<K, V> RedBlackTree<K, V> {
    /// Which child slot of `parent` holds `node`, if any.
    pub(crate) fn position_in_parent(&self, parent: NodeIndex, node: NodeIndex) -> Option<Side> {
        let p = &self.nodes[parent];
        if p.left == node {
            Some(Side::Left)
        } else if p.right == node {
            Some(Side::Right)
        } else {
            None
        }
    }

    /// The other child of `node`'s parent and the slot it occupies.
    ///
    /// `None` if `node` is the root. The sibling index itself may be the
    /// sentinel.
    pub(crate) fn sibling(&self, node: NodeIndex) -> Option<(NodeIndex, Side)> {
        let parent = self.nodes[node].parent;
        if parent.is_nil() {
            return None;
        }
        let side = self
            .position_in_parent(parent, node)
            .expect("parent link must mirror a child link")
            .opposite();
        Some((self.nodes[parent].child(side), side))
    }

    /// The in-order successor of `node`: the leftmost node of its right
    /// subtree. Returns the sentinel if the right child is a sentinel.
    pub(crate) fn successor(&self, node: NodeIndex) -> NodeIndex {
        let mut current = self.nodes[node].right;
        let mut previous = NodeIndex::NIL;
        while !current.is_nil() {
            previous = current;
            current = self.nodes[current].left;
        }
        previous
    }
}
