/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! RedBlackTree - An ordered key-value container backed by a red-black tree.
//!
//! This crate provides a sorted associative container with O(log n) search,
//! insertion, and deletion, and a tree height bounded at 2·log₂(n + 1). It is
//! the substrate for anything that needs sorted iteration or predictable
//! worst-case latency: in-memory indexes, ordered maps, timer wheels.
//!
//! # Overview
//!
//! The container maintains the classic red-black invariants:
//!
//! - The root is black.
//! - A red node never has a red child.
//! - Every path from a node to a descendant leaf crosses the same number of
//!   black nodes.
//! - The in-order key sequence is sorted.
//!
//! Rebalancing happens in two fixup procedures: a color fixup after each
//! insertion and a double-black repair after each deletion, both built on the
//! same pair of rotation primitives.
//!
//! # Arena Storage
//!
//! All nodes live in a [`slab`]-backed arena and reference each other through
//! lightweight index handles. Children are owned downward by the tree; the
//! parent link is a non-owning back-reference used only for navigation. The
//! sentinel ("NIL") leaf that terminates every path is the reserved nil
//! index: it is black, carries no payload, and is never written to.
//!
//! # Duplicate Keys
//!
//! Inserting a key that is already present does NOT overwrite the existing
//! entry. The new entry lands immediately left of the existing one in the
//! in-order sequence, and [`RedBlackTree::search`] resolves equal keys to the
//! most recently inserted entry. This is a deliberate contract, not an
//! ordered-map update semantic; callers wanting map behavior should
//! [`RedBlackTree::delete`] before re-inserting.
//!
//! # Example
//!
//! ```
//! use red_black_tree::RedBlackTree;
//!
//! let mut tree = RedBlackTree::new();
//! tree.insert(20, "twenty");
//! tree.insert(10, "ten");
//! tree.insert(30, "thirty");
//!
//! assert_eq!(tree.search(&10), Some(&"ten"));
//! assert_eq!(tree.min(), Some((&10, &"ten")));
//!
//! let keys: Vec<i32> = tree.iter().map(|(k, _, _)| *k).collect();
//! assert_eq!(keys, [10, 20, 30]);
//!
//! assert!(tree.delete(&20));
//! assert_eq!(tree.search(&20), None);
//! ```

mod arena;
mod display;
mod iter;
mod node;
mod tree;

pub use display::DisplayNode;
pub use iter::Iter;
pub use node::Color;
pub use tree::RedBlackTree;
pub use tree::invariants::InvariantError;
