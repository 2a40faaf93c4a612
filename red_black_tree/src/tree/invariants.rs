/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Structural invariant checks.
//!
//! [`RedBlackTree::check_invariants`] walks the whole tree and verifies every
//! red-black property plus the arena bookkeeping. A violation is a bug in the
//! fixup logic, never a recoverable user error; under the `unittest` feature
//! the checker runs automatically after every mutation and panics on failure.

use thiserror::Error;

use super::RedBlackTree;
use crate::arena::NodeIndex;
use crate::node::Color;

/// A violated structural property, reported by
/// [`RedBlackTree::check_invariants`].
///
/// Any of these indicates a defect in the rebalancing code itself; callers
/// cannot cause or recover from them through the public operation surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvariantError {
    /// The root node is red.
    #[error("root is red")]
    RedRoot,
    /// The root's parent back-reference is not the sentinel.
    #[error("root has a parent link")]
    RootHasParent,
    /// A red node has a red child.
    #[error("red node has a red child")]
    RedRedViolation,
    /// Two subtrees of one node disagree on black-height.
    #[error("black-height mismatch: left {left}, right {right}")]
    BlackHeightMismatch {
        /// Black-height through the left child.
        left: usize,
        /// Black-height through the right child.
        right: usize,
    },
    /// The in-order key sequence is not sorted.
    #[error("in-order key sequence is not sorted")]
    UnorderedKeys,
    /// A child's parent back-reference does not point at the parent.
    #[error("parent link does not mirror a child link")]
    BrokenParentLink,
    /// The arena holds nodes the tree can no longer reach.
    #[error("arena holds {arena} nodes but only {reachable} are reachable from the root")]
    LeakedNodes {
        /// Live arena slots.
        arena: usize,
        /// Nodes reachable from the root.
        reachable: usize,
    },
    /// The cached length disagrees with the node count.
    #[error("tree length {len} does not match node count {nodes}")]
    LengthMismatch {
        /// The cached entry count.
        len: usize,
        /// The actual number of live nodes.
        nodes: usize,
    },
}

impl<K: Ord, V> RedBlackTree<K, V> {
    /// Verify every structural invariant of the tree.
    ///
    /// Checks, over the whole tree:
    ///
    /// 1. the root, if present, is black and has no parent link;
    /// 2. no red node has a red child;
    /// 3. every root-to-sentinel path crosses the same number of black nodes;
    /// 4. the in-order key sequence is sorted (equal neighbors allowed, per
    ///    the duplicate-key policy);
    /// 5. parent back-references mirror child links exactly;
    /// 6. every arena slot is reachable from the root and the cached length
    ///    matches.
    ///
    /// Sentinel blackness (invariant 5 of the data model) holds by
    /// construction: the sentinel has no slot to recolor.
    ///
    /// O(n); intended for tests and debugging.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.root.is_nil() {
            return match self.nodes.len() {
                0 if self.len == 0 => Ok(()),
                0 => Err(InvariantError::LengthMismatch {
                    len: self.len,
                    nodes: 0,
                }),
                arena => Err(InvariantError::LeakedNodes { arena, reachable: 0 }),
            };
        }

        if self.nodes[self.root].color == Color::Red {
            return Err(InvariantError::RedRoot);
        }
        if !self.nodes[self.root].parent.is_nil() {
            return Err(InvariantError::RootHasParent);
        }

        let mut reachable = 0;
        self.check_subtree(self.root, &mut reachable)?;

        if reachable != self.nodes.len() {
            return Err(InvariantError::LeakedNodes {
                arena: self.nodes.len(),
                reachable,
            });
        }
        if reachable != self.len {
            return Err(InvariantError::LengthMismatch {
                len: self.len,
                nodes: reachable,
            });
        }

        self.check_ordering()
    }

    /// Recursively check colors, black-heights, and parent links below `idx`.
    ///
    /// Returns the subtree's black-height: the number of black nodes on any
    /// path from `idx` (exclusive) down to a sentinel (inclusive).
    fn check_subtree(
        &self,
        idx: NodeIndex,
        reachable: &mut usize,
    ) -> Result<usize, InvariantError> {
        if idx.is_nil() {
            // The sentinel is black and terminates the path.
            return Ok(1);
        }
        *reachable += 1;

        let node = &self.nodes[idx];

        if node.color == Color::Red
            && (self.color(node.left) == Color::Red || self.color(node.right) == Color::Red)
        {
            return Err(InvariantError::RedRedViolation);
        }

        for child in [node.left, node.right] {
            if !child.is_nil() && self.nodes[child].parent != idx {
                return Err(InvariantError::BrokenParentLink);
            }
        }

        let left = self.check_subtree(node.left, reachable)?;
        let right = self.check_subtree(node.right, reachable)?;
        if left != right {
            return Err(InvariantError::BlackHeightMismatch { left, right });
        }

        Ok(left + usize::from(node.color == Color::Black))
    }

    /// Check that the in-order key sequence never decreases.
    fn check_ordering(&self) -> Result<(), InvariantError> {
        let mut previous: Option<&K> = None;
        for (key, _, _) in self.iter() {
            if previous.is_some_and(|prev| prev > key) {
                return Err(InvariantError::UnorderedKeys);
            }
            previous = Some(key);
        }
        Ok(())
    }

    /// Panic if any invariant is violated. Runs after every mutation when the
    /// `unittest` feature is enabled.
    #[cfg(all(feature = "unittest", not(miri)))]
    pub(crate) fn assert_invariants(&self) {
        if let Err(err) = self.check_invariants() {
            panic!("red-black invariant violated: {err}");
        }
    }
}
