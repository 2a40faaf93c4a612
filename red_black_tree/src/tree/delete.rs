/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Write path: deletion and the double-black repair.
//!
//! Every deletion reduces to removing a node with at most one real child: a
//! node with two real children first swaps payload with its in-order
//! successor (colors and positions stay put, only key/value move) and the
//! deletion recurses on the successor. Removing a red node, or a black node
//! with a red child, cannot create a black-height deficit. The remaining case,
//! a black node with sentinel children, leaves its path one black node short
//! ("double black"), which the fixup repairs *before* the node is spliced
//! out.

use tracing::trace;

use super::RedBlackTree;
use crate::arena::NodeIndex;
use crate::node::{Color, Side};

impl<K: Ord, V> RedBlackTree<K, V> {
    /// Remove the entry stored under `key`.
    ///
    /// Returns `true` if an entry was removed, `false` if the key was absent
    /// (in which case the tree is untouched). When duplicates of `key` exist,
    /// the most recently inserted one is removed.
    pub fn delete(&mut self, key: &K) -> bool {
        let node = self.find_by_key(key);
        if node.is_nil() {
            return false;
        }

        self.delete_node(node);
        self.len -= 1;

        #[cfg(all(feature = "unittest", not(miri)))]
        self.assert_invariants();
        true
    }

    /// Remove `node` from the tree.
    fn delete_node(&mut self, node: NodeIndex) {
        let (left, right) = {
            let n = &self.nodes[node];
            (n.left, n.right)
        };

        // Two real children: move the successor's payload onto this node and
        // delete the successor instead. The successor is the leftmost node of
        // the right subtree, so it has no left child and the recursion ends
        // in the at-most-one-child case below.
        if !left.is_nil() && !right.is_nil() {
            let successor = self.successor(node);
            self.nodes.swap_payload(node, successor);
            return self.delete_node(successor);
        }

        let child = if left.is_nil() { right } else { left };

        if node == self.root {
            // A lone root vanishes; a root with one child hands the position
            // to that child, which must be red and is recolored black to keep
            // every path's black count intact.
            self.root = child;
            if !child.is_nil() {
                self.nodes[child].parent = NodeIndex::NIL;
                self.nodes[child].color = Color::Black;
            }
            self.nodes.remove(node);
            return;
        }

        if self.nodes[node].color == Color::Red {
            // Removing a red node changes no path's black count.
            self.splice(node, child);
            return;
        }

        if !child.is_nil() && self.nodes[child].color == Color::Red {
            // Black node, red child: the child absorbs the removed black.
            self.nodes[child].color = Color::Black;
            self.splice(node, child);
            return;
        }

        // Black node with sentinel children: its removal leaves the path one
        // black short. Repair the deficit first, then splice.
        self.delete_fixup(node);
        self.splice(node, child);
    }

    /// Replace `node` with `child` (possibly the sentinel) in its parent's
    /// slot and free its arena slot. `node` must not be the root.
    fn splice(&mut self, node: NodeIndex, child: NodeIndex) {
        let parent = self.nodes[node].parent;
        let side = self
            .position_in_parent(parent, node)
            .expect("parent link must mirror a child link");
        self.nodes[parent].set_child(side, child);
        if !child.is_nil() {
            self.nodes[child].parent = parent;
        }
        self.nodes.remove(node);
    }

    /// Repair the black-height deficit at `node`, a black node about to be
    /// removed.
    ///
    /// Cases, keyed by the sibling and its children (the nephews; "near"
    /// sits on `node`'s side, "far" on the opposite):
    ///
    /// - **Root**: nothing to repair; the whole tree just got one level
    ///   shorter.
    /// - **Red sibling**: rotate the sibling up over the parent and swap
    ///   their colors. The deficit is unchanged but `node` now has a black
    ///   sibling, so the loop re-enters exactly once.
    /// - **Both nephews black**: recolor the sibling red, evening out both
    ///   subtrees one black short. A red parent absorbs the deficit by
    ///   turning black; a black parent propagates it and the loop moves up.
    /// - **Far nephew red**: rotate the sibling up over the parent, give it
    ///   the parent's old color, and turn the far nephew and the parent
    ///   black. The deficit is resolved.
    /// - **Far nephew black, near nephew red**: rotate the near nephew up
    ///   over the sibling, converting to the far-nephew-red shape, then
    ///   rotate it up over the parent; the near nephew takes the parent's old
    ///   color and the sibling and parent turn black. Resolved.
    fn delete_fixup(&mut self, node: NodeIndex) {
        let mut node = node;
        loop {
            if node == self.root {
                return;
            }
            let parent = self.nodes[node].parent;
            let (sibling, sibling_side) = self
                .sibling(node)
                .expect("a non-root node always has a sibling slot");

            if self.color(sibling) == Color::Red {
                trace!(?node, "delete fixup: red sibling");
                self.rotate_up(parent, sibling, sibling_side);
                self.nodes[sibling].color = Color::Black;
                self.nodes[parent].color = Color::Red;
                // Same deficit, now with a black sibling.
                continue;
            }

            let (near, far) = {
                let s = &self.nodes[sibling];
                match sibling_side {
                    Side::Right => (s.left, s.right),
                    Side::Left => (s.right, s.left),
                }
            };

            if self.color(near) == Color::Black && self.color(far) == Color::Black {
                trace!(?node, "delete fixup: both nephews black");
                self.nodes[sibling].color = Color::Red;
                if self.nodes[parent].color == Color::Red {
                    self.nodes[parent].color = Color::Black;
                    return;
                }
                // Black parent: the deficit moves up a level.
                node = parent;
                continue;
            }

            let parent_color = self.nodes[parent].color;
            if self.color(far) == Color::Red {
                trace!(?node, "delete fixup: red far nephew");
                self.rotate_up(parent, sibling, sibling_side);
                self.nodes[sibling].color = parent_color;
                self.nodes[far].color = Color::Black;
                self.nodes[parent].color = Color::Black;
                return;
            }

            trace!(?node, "delete fixup: red near nephew");
            self.rotate_up(sibling, near, sibling_side.opposite());
            self.rotate_up(parent, near, sibling_side);
            self.nodes[near].color = parent_color;
            self.nodes[sibling].color = Color::Black;
            self.nodes[parent].color = Color::Black;
            return;
        }
    }
}
