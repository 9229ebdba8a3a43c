//! This crate exposes a Red-Black Tree, an ordered set that keeps itself balanced
//! so that every operation on it stays logarithmic in the number of stored keys.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! has up to two child `Node`s. The most important invariant of a BST is:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key and all the `Node`s in its right subtree have
//!    a key greater than its own key.
//!
//! Searching a BST takes `O(height)` so an unlucky insertion order (e.g. sorted
//! keys) degrades it to a linked list.
//!
//! ## Red-Black Tree
//!
//! A Red-Black Tree paints every `Node` red or black and keeps these extra
//! invariants after every insertion and deletion:
//!
//! 1. The root is black.
//! 2. Every empty child (the "sentinel") is black.
//! 3. A red `Node` only has black children.
//! 4. Every path from a `Node` down to a sentinel passes through the same number
//!    of black `Node`s. That number is the `Node`'s "black height".
//!
//! Together these bound the height of the tree by `2 * lg(N + 1)`. Insertion and
//! deletion restore them with a handful of recolorings and at most three
//! rotations.
//!
//! # Examples
//!
//! ```
//! use rbt::Tree;
//!
//! let mut tree = Tree::new();
//! for key in [9, 5, 1, 0, 6, 3, 2, 4, 7, 8] {
//!     tree.insert(key);
//! }
//!
//! assert_eq!(tree.in_order_walk(), vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
//! assert_eq!(tree.predecessor(&5), Ok(Some(&4)));
//! assert_eq!(tree.successor(&5), Ok(Some(&6)));
//!
//! assert!(tree.delete(&5));
//! assert!(tree.assert_bst_property());
//! assert!(tree.assert_rbt_property());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod red_black;

pub use error::{Error, Violation};
pub use red_black::Tree;
