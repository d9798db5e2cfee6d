use std::fmt::Debug;

/// A key that may be stored in an [`AvlTree`](crate::AvlTree).
///
/// The total order on keys defines the tree's structure, and keys within a
/// tree are unique: inserting a key that compares equal to one already
/// present is a no-op.
pub trait TreeKey: Debug + Ord {}

impl<T> TreeKey for T where T: Debug + Ord {}
