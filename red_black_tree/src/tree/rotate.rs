/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Rotation primitives.
//!
//! A rotation is the only operation that restructures parent/child links. It
//! is O(1), preserves the in-order key sequence by construction, and never
//! touches colors; the fixup callers recolor explicitly afterward.

use tracing::trace;

use super::RedBlackTree;
use crate::arena::NodeIndex;
use crate::node::Side;

impl<K, V> RedBlackTree<K, V> {
    /// Left rotation: `pivot` is `axis`'s right child and takes `axis`'s
    /// position; `axis` becomes `pivot`'s left child, and `pivot`'s former
    /// left subtree is re-parented as `axis`'s right child.
    ///
    /// ```text
    ///   |                |
    ///  axis            pivot
    ///     \      ->    /
    ///    pivot      axis
    /// ```
    pub(crate) fn rotate_left(&mut self, axis: NodeIndex, pivot: NodeIndex) {
        trace!(?axis, ?pivot, "rotate_left");
        debug_assert_eq!(self.nodes[axis].right, pivot);

        self.replace_in_parent(axis, pivot);

        let inner = self.nodes[pivot].left;
        self.nodes[axis].right = inner;
        if !inner.is_nil() {
            self.nodes[inner].parent = axis;
        }

        self.nodes[pivot].left = axis;
        self.nodes[axis].parent = pivot;
    }

    /// Right rotation, the mirror image of [`rotate_left`](Self::rotate_left):
    /// `pivot` is `axis`'s left child and takes `axis`'s position.
    ///
    /// ```text
    ///      |           |
    ///     axis       pivot
    ///     /      ->      \
    ///  pivot            axis
    /// ```
    pub(crate) fn rotate_right(&mut self, axis: NodeIndex, pivot: NodeIndex) {
        trace!(?axis, ?pivot, "rotate_right");
        debug_assert_eq!(self.nodes[axis].left, pivot);

        self.replace_in_parent(axis, pivot);

        let inner = self.nodes[pivot].right;
        self.nodes[axis].left = inner;
        if !inner.is_nil() {
            self.nodes[inner].parent = axis;
        }

        self.nodes[pivot].right = axis;
        self.nodes[axis].parent = pivot;
    }

    /// Rotate at `axis` so that `pivot`, its child on `side`, moves up into
    /// `axis`'s position.
    ///
    /// Convenience for the deletion fixup, whose rotations are all phrased as
    /// "rotate this sibling or nephew up."
    pub(crate) fn rotate_up(&mut self, axis: NodeIndex, pivot: NodeIndex, side: Side) {
        match side {
            Side::Right => self.rotate_left(axis, pivot),
            Side::Left => self.rotate_right(axis, pivot),
        }
    }

    /// Put `replacement` into the tree position `node` occupies, updating the
    /// parent's child slot or the root reference.
    fn replace_in_parent(&mut self, node: NodeIndex, replacement: NodeIndex) {
        let parent = self.nodes[node].parent;
        if parent.is_nil() {
            self.root = replacement;
            self.nodes[replacement].parent = NodeIndex::NIL;
        } else {
            let side = self
                .position_in_parent(parent, node)
                .expect("parent link must mirror a child link");
            self.nodes[parent].set_child(side, replacement);
            self.nodes[replacement].parent = parent;
        }
    }
}
