/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Benchmarking utilities for the `red_black_tree` crate.
//!
//! Provides deterministic key corpora so benchmark runs are comparable
//! across machines and commits, plus builders for pre-populated trees.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use red_black_tree::RedBlackTree;

/// Fixed seed so every run works on the same shuffled corpus.
const CORPUS_SEED: u64 = 0x5eed_cafe;

/// `0..n` shuffled with a fixed seed.
///
/// Shuffled rather than sequential keys keep the benchmark off the tree's
/// worst-case rebalancing-heavy insertion pattern while staying
/// deterministic.
pub fn shuffled_keys(n: u64) -> Vec<u64> {
    let mut keys: Vec<u64> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(CORPUS_SEED);
    keys.shuffle(&mut rng);
    keys
}

/// A tree pre-populated with `keys`, each mapped to itself.
pub fn populated_tree(keys: &[u64]) -> RedBlackTree<u64, u64> {
    let mut tree = RedBlackTree::with_capacity(keys.len());
    for &key in keys {
        tree.insert(key, key);
    }
    tree
}
