/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Shared test helpers for the red_black_tree integration tests.

use red_black_tree::{Color, DisplayNode, RedBlackTree};

/// Build a tree by inserting `keys` in order, with value `key * 10`.
pub fn build_tree(keys: &[i32]) -> RedBlackTree<i32, i32> {
    let mut tree = RedBlackTree::new();
    for &key in keys {
        tree.insert(key, key * 10);
    }
    tree
}

/// Assert every structural invariant, including an explicit recursive
/// black-height check over the exported display tree.
pub fn assert_valid<K: Ord + Clone, V>(tree: &RedBlackTree<K, V>) {
    tree.check_invariants().expect("tree invariants must hold");
    black_height(&tree.to_display_tree());
}

/// The black-height of an exported subtree: black nodes from here (exclusive)
/// to any sentinel (inclusive). Panics if two paths disagree.
pub fn black_height<K>(node: &DisplayNode<K>) -> usize {
    match node {
        DisplayNode::Nil => 1,
        DisplayNode::Node {
            color, children, ..
        } => {
            assert_eq!(children.len(), 2, "inner nodes export exactly two children");
            let left = black_height(&children[0]);
            let right = black_height(&children[1]);
            assert_eq!(left, right, "black-height differs between sibling subtrees");
            left + usize::from(*color == Color::Black)
        }
    }
}

/// Node height of an exported subtree (sentinels count as zero).
pub fn height<K>(node: &DisplayNode<K>) -> usize {
    match node {
        DisplayNode::Nil => 0,
        DisplayNode::Node { children, .. } => {
            1 + height(&children[0]).max(height(&children[1]))
        }
    }
}

/// The in-order key sequence of a tree.
pub fn in_order_keys(tree: &RedBlackTree<i32, i32>) -> Vec<i32> {
    tree.iter().map(|(key, _, _)| *key).collect()
}

/// Shorthand for asserting an exported leaf-level node: `key` with `color`
/// and two sentinel children.
pub fn leaf(key: i32, color: Color) -> DisplayNode<i32> {
    DisplayNode::Node {
        key,
        color,
        children: vec![DisplayNode::Nil, DisplayNode::Nil],
    }
}
