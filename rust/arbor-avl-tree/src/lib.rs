#![warn(missing_docs)]

//! A height-balanced binary search tree (AVL tree).
//!
//! The tree keeps every node's balance factor (right subtree height minus
//! left subtree height) within `[-1, 1]` by rotating subtrees as keys are
//! inserted. This bounds the height of the tree, and therefore the cost of
//! every lookup and insertion, at `O(log n)` regardless of insertion order.
//!
//! ```rust
//! use arbor_avl_tree::AvlTree;
//!
//! let mut tree = AvlTree::new();
//! for key in [5, 2, 8, 1, 9] {
//!     tree.insert(key);
//! }
//!
//! assert!(tree.contains(&8));
//!
//! let ascending: Vec<i32> = tree.in_order().map(|(key, _)| *key).collect();
//! assert_eq!(ascending, vec![1, 2, 5, 8, 9]);
//! ```
//!
//! Structural mutation follows a return-new-root protocol: the link-level
//! [`insert`] consumes the current subtree root and returns the (possibly
//! different) new root, and every caller must replace its stored link with
//! the returned value. [`AvlTree`] owns a root link and performs that
//! reassignment internally.
//!
//! Diagnostic events (insertions, rebalance decisions, rotations) are routed
//! through a pluggable [`TreeObserver`]. The default [`NoopObserver`]
//! discards them, keeping the core free of I/O; [`TracingObserver`] forwards
//! them to [`tracing`].

mod key;
pub use key::*;

mod node;
pub use node::*;

mod iter;
pub use iter::*;

mod observer;
pub use observer::*;

mod tree;
pub use tree::*;

/// Helpers for testing and development.
#[cfg(any(test, feature = "helpers"))]
mod helpers;
#[cfg(any(test, feature = "helpers"))]
pub use helpers::*;
