/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Tests for the insertion path and its color fixup.

use red_black_tree::{Color, DisplayNode, RedBlackTree};

use crate::helpers::{assert_valid, build_tree, in_order_keys, leaf};

#[test]
fn first_insert_becomes_a_black_root() {
    let tree = build_tree(&[5]);
    assert_eq!(tree.to_display_tree(), leaf(5, Color::Black));
    assert_valid(&tree);
}

#[test]
fn straight_line_insert_rotates_once() {
    // Ascending insertion puts 30 under the red 20: the uncle is a sentinel
    // (black) and node/parent line up on the right, so a single rotation at
    // the grandparent resolves it.
    let tree = build_tree(&[10, 20, 30]);
    assert_eq!(
        tree.to_display_tree(),
        DisplayNode::Node {
            key: 20,
            color: Color::Black,
            children: vec![leaf(10, Color::Red), leaf(30, Color::Red)],
        }
    );
    assert_valid(&tree);
}

#[test]
fn zig_zag_insert_rotates_twice() {
    // 20 lands left of 30, which is right of 10: the double rotation lifts
    // the middle key to the root, same final shape as the straight line.
    let tree = build_tree(&[10, 30, 20]);
    assert_eq!(
        tree.to_display_tree(),
        DisplayNode::Node {
            key: 20,
            color: Color::Black,
            children: vec![leaf(10, Color::Red), leaf(30, Color::Red)],
        }
    );
    assert_valid(&tree);
}

#[test]
fn red_uncle_recolors_without_rotation() {
    // After 1..=3 the tree is 2(B) with red children. Inserting 4 under the
    // red 3 finds a red uncle (1): parent and uncle turn black, and the
    // grandparent, being the root, is forced back to black.
    let tree = build_tree(&[1, 2, 3, 4]);
    assert_eq!(
        tree.to_display_tree(),
        DisplayNode::Node {
            key: 2,
            color: Color::Black,
            children: vec![
                leaf(1, Color::Black),
                DisplayNode::Node {
                    key: 3,
                    color: Color::Black,
                    children: vec![DisplayNode::Nil, leaf(4, Color::Red)],
                },
            ],
        }
    );
    assert_valid(&tree);
}

#[test]
fn ascending_insertions_stay_balanced() {
    let mut tree = RedBlackTree::new();
    for key in 1..=100 {
        tree.insert(key, key);
        assert_valid(&tree);
    }
    assert_eq!(tree.len(), 100);
    assert_eq!(in_order_keys(&tree), (1..=100).collect::<Vec<_>>());
}

#[test]
fn descending_insertions_stay_balanced() {
    let mut tree = RedBlackTree::new();
    for key in (1..=100).rev() {
        tree.insert(key, key);
        assert_valid(&tree);
    }
    assert_eq!(in_order_keys(&tree), (1..=100).collect::<Vec<_>>());
}

#[test]
fn duplicate_key_adds_a_second_entry() {
    let mut tree = RedBlackTree::new();
    tree.insert(5, 1);
    tree.insert(5, 2);

    assert_eq!(tree.len(), 2);
    assert_eq!(in_order_keys(&tree), [5, 5]);
    assert_valid(&tree);
}

#[test]
fn search_observes_the_most_recent_duplicate() {
    let mut tree = RedBlackTree::new();
    tree.insert(10, 100);
    tree.insert(5, 1);
    tree.insert(3, 30);
    tree.insert(5, 2);

    assert_eq!(tree.search(&5), Some(&2));
    assert_eq!(in_order_keys(&tree), [3, 5, 5, 10]);
    assert_valid(&tree);

    tree.insert(5, 3);
    assert_eq!(tree.search(&5), Some(&3));
    assert_eq!(tree.len(), 5);
    assert_valid(&tree);
}
