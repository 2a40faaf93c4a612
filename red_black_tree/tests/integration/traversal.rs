/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Tests for the traversal surface: the three visitor orders and the lazy
//! in-order iterator.

use red_black_tree::{Color, RedBlackTree};

use crate::helpers::{build_tree, in_order_keys};

/// Collect a visitor-style traversal into a vector.
fn collect(
    traverse: impl FnOnce(&mut dyn FnMut(&i32, &i32, Color)),
) -> Vec<(i32, i32, Color)> {
    let mut out = Vec::new();
    traverse(&mut |key, value, color| out.push((*key, *value, color)));
    out
}

#[test]
fn traversals_on_an_empty_tree_visit_nothing() {
    let tree: RedBlackTree<i32, i32> = RedBlackTree::new();
    assert!(collect(|v| tree.pre_order(v)).is_empty());
    assert!(collect(|v| tree.in_order(v)).is_empty());
    assert!(collect(|v| tree.post_order(v)).is_empty());
    assert_eq!(tree.iter().count(), 0);
}

#[test]
fn the_three_orders_match_their_definitions() {
    // 10, 20, 30 settles as 20(B) over red 10 and 30.
    let tree = build_tree(&[10, 20, 30]);

    assert_eq!(
        collect(|v| tree.pre_order(v)),
        [
            (20, 200, Color::Black),
            (10, 100, Color::Red),
            (30, 300, Color::Red),
        ]
    );
    assert_eq!(
        collect(|v| tree.in_order(v)),
        [
            (10, 100, Color::Red),
            (20, 200, Color::Black),
            (30, 300, Color::Red),
        ]
    );
    assert_eq!(
        collect(|v| tree.post_order(v)),
        [
            (10, 100, Color::Red),
            (30, 300, Color::Red),
            (20, 200, Color::Black),
        ]
    );
}

#[test]
fn pre_order_follows_the_tree_shape() {
    // 1..=7 in order settles as 2(B){1, 4{3, 6{5, 7}}}.
    let tree = build_tree(&[1, 2, 3, 4, 5, 6, 7]);
    let keys: Vec<i32> = collect(|v| tree.pre_order(v))
        .into_iter()
        .map(|(key, _, _)| key)
        .collect();
    assert_eq!(keys, [2, 1, 4, 3, 6, 5, 7]);
}

#[test]
fn in_order_is_sorted_for_any_insertion_order() {
    let tree = build_tree(&[8, 3, 10, 1, 6, 14, 4, 7, 13]);
    assert_eq!(in_order_keys(&tree), [1, 3, 4, 6, 7, 8, 10, 13, 14]);
}

#[test]
fn iter_matches_the_in_order_visitor() {
    let tree = build_tree(&[5, 2, 8, 1, 3, 7, 9]);
    let visited = collect(|v| tree.in_order(v));
    let iterated: Vec<(i32, i32, Color)> = tree
        .iter()
        .map(|(key, value, color)| (*key, *value, color))
        .collect();
    assert_eq!(visited, iterated);
}

#[test]
fn iter_can_stop_early() {
    let tree = build_tree(&(1..=64).collect::<Vec<_>>());
    let first_five: Vec<i32> = tree.iter().take(5).map(|(key, _, _)| *key).collect();
    assert_eq!(first_five, [1, 2, 3, 4, 5]);
}

#[test]
fn into_iterator_on_a_reference_is_in_order() {
    let tree = build_tree(&[3, 1, 2]);
    let keys: Vec<i32> = (&tree).into_iter().map(|(key, _, _)| *key).collect();
    assert_eq!(keys, [1, 2, 3]);
}

#[test]
fn traversals_are_restartable() {
    let tree = build_tree(&[2, 1, 3]);
    let first = collect(|v| tree.in_order(v));
    let second = collect(|v| tree.in_order(v));
    assert_eq!(first, second);
}
