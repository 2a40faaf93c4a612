/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Write path: insertion and the color fixup.
//!
//! A new entry always attaches as a red leaf at the insertion point found by
//! the navigation primitives. Attaching under a black parent cannot violate
//! any invariant, so the fixup only runs when the parent is red. The fixup
//! walks upward, recoloring or rotating until the red-red violation is gone;
//! it performs at most one rotation pair.

use tracing::trace;

use super::RedBlackTree;
use crate::arena::NodeIndex;
use crate::node::{Color, Node, Side};

impl<K: Ord, V> RedBlackTree<K, V> {
    /// Insert an entry.
    ///
    /// A key equal to an existing one does not overwrite it: the new entry
    /// lands immediately left of the existing entry in the in-order sequence,
    /// and [`search`](Self::search) observes the most recent insertion.
    pub fn insert(&mut self, key: K, value: V) {
        let node = Node::new(key, value);

        if self.root.is_nil() {
            // Empty tree: the new node becomes the root, forced black.
            let idx = self.nodes.insert(node);
            self.nodes[idx].color = Color::Black;
            self.root = idx;
            self.len += 1;

            #[cfg(all(feature = "unittest", not(miri)))]
            self.assert_invariants();
            return;
        }

        let (parent, side) = self.find_insertion_point(&node.key);
        let idx = self.nodes.insert(node);
        self.attach(parent, side, idx);
        self.len += 1;

        // A red leaf under a black parent breaks nothing. Under a red parent
        // it creates a red-red violation, and the parent cannot be the root
        // (the root is always black), so the fixup has a grandparent to work
        // with.
        if self.nodes[parent].color == Color::Red {
            self.insert_fixup(idx);
        }

        #[cfg(all(feature = "unittest", not(miri)))]
        self.assert_invariants();
    }

    /// Wire `node` into the `side` slot of `parent`.
    fn attach(&mut self, parent: NodeIndex, side: Side, node: NodeIndex) {
        self.nodes[parent].set_child(side, node);
        self.nodes[node].parent = parent;
    }

    /// Restore the red-black invariants after attaching the red `node` under
    /// a red parent.
    ///
    /// On entry `node` and its parent are both red, so the grandparent exists
    /// and is black. The uncle's color picks the strategy:
    ///
    /// - **Red uncle**: recolor parent and uncle black and the grandparent
    ///   red. If the grandparent is the root it is forced back to black and
    ///   the fixup stops; if the violation reappeared at the grandparent it
    ///   moves up two levels and repeats.
    /// - **Black uncle**: one or two rotations rooted at the grandparent. A
    ///   straight-line shape (node and parent on the same side) takes a
    ///   single rotation and a parent/grandparent color swap; a zig-zag shape
    ///   first rotates at the parent to straighten itself, then rotates at
    ///   the grandparent and recolors the node that moved up.
    fn insert_fixup(&mut self, node: NodeIndex) {
        let mut node = node;
        loop {
            let parent = self.nodes[node].parent;
            let grandparent = self.nodes[parent].parent;
            let node_side = self
                .position_in_parent(parent, node)
                .expect("parent link must mirror a child link");
            let parent_side = self
                .position_in_parent(grandparent, parent)
                .expect("a red parent always has a parent");
            let (uncle, _) = self
                .sibling(parent)
                .expect("a red parent always has a parent");

            if self.color(uncle) == Color::Red {
                trace!(?node, "insert fixup: red uncle, recoloring");
                self.nodes[parent].color = Color::Black;
                self.nodes[uncle].color = Color::Black;
                self.nodes[grandparent].color = Color::Red;

                if grandparent == self.root {
                    self.nodes[grandparent].color = Color::Black;
                    return;
                }
                let great = self.nodes[grandparent].parent;
                if !great.is_nil() && self.nodes[great].color == Color::Red {
                    // The violation propagated up; repeat at the grandparent.
                    node = grandparent;
                    continue;
                }
                return;
            }

            trace!(?node, "insert fixup: black uncle, rotating");
            if node_side == parent_side {
                // Straight line: single rotation at the grandparent, then
                // swap the parent's and grandparent's colors.
                self.rotate_up(grandparent, parent, parent_side);
                self.nodes[parent].color = Color::Black;
            } else {
                // Zig-zag: rotate the node above its parent first, turning
                // the shape into the straight-line case with the node in the
                // parent's position, then rotate at the grandparent.
                self.rotate_up(parent, node, node_side);
                self.rotate_up(grandparent, node, parent_side);
                self.nodes[node].color = Color::Black;
            }
            self.nodes[grandparent].color = Color::Red;
            return;
        }
    }
}
