use std::cmp::Ordering;

use crate::{TreeEvent, TreeKey, TreeObserver};

/// An owned, possibly empty subtree.
///
/// `None` is the empty subtree; it has height `-1` and balance factor `0`.
pub type Link<K> = Option<Box<Node<K>>>;

/// Height of the empty subtree, by convention.
pub(crate) const EMPTY_HEIGHT: i32 = -1;

/// A single node of a balanced tree.
///
/// Every node caches the height of the subtree it roots so that balance
/// factors can be computed without walking the subtree. Children are owned
/// exclusively through [`Link`]s; a node's position in the tree may change
/// when a rotation reassigns its children, but its key never does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<K>
where
    K: TreeKey,
{
    value: K,
    height: i32,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Node<K>
where
    K: TreeKey,
{
    fn leaf(value: K) -> Box<Self> {
        Box::new(Node {
            value,
            height: 0,
            left: None,
            right: None,
        })
    }

    /// The key stored at this node.
    pub fn value(&self) -> &K {
        &self.value
    }

    /// Cached height of the subtree rooted at this node.
    ///
    /// A leaf has height `0`.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The left subtree; every key in it is smaller than [`Node::value`].
    pub fn left(&self) -> Option<&Node<K>> {
        self.left.as_deref()
    }

    /// The right subtree; every key in it is greater than [`Node::value`].
    pub fn right(&self) -> Option<&Node<K>> {
        self.right.as_deref()
    }

    fn update_height(&mut self) {
        self.height = 1 + height_of(&self.left).max(height_of(&self.right));
    }

    fn balance(&self) -> i32 {
        height_of(&self.right) - height_of(&self.left)
    }
}

/// Returns the cached height of a subtree, `-1` when it is empty.
///
/// Heights are maintained incrementally on every mutation; this never
/// recomputes by walking the subtree.
pub fn height_of<K>(link: &Link<K>) -> i32
where
    K: TreeKey,
{
    match link {
        Some(node) => node.height,
        None => EMPTY_HEIGHT,
    }
}

/// Returns the balance factor of a subtree: the height of its right child
/// minus the height of its left child.
///
/// An empty subtree has balance factor `0`. After any completed insertion,
/// every subtree satisfies `balance_of(link) ∈ [-1, 1]`.
pub fn balance_of<K>(link: &Link<K>) -> i32
where
    K: TreeKey,
{
    match link {
        Some(node) => node.balance(),
        None => 0,
    }
}

/// Inserts `value` into the subtree and returns the new subtree root.
///
/// The returned root may be a different node than the one the caller held
/// when a rotation fires at the top of the subtree, so the caller must
/// replace its stored link with the returned value. Inserting a key that is
/// already present returns the subtree unchanged.
///
/// Recursion depth is bounded by the subtree height, which the balance
/// invariant keeps at `O(log n)`.
pub fn insert<K, Observer>(root: Link<K>, value: K, observer: &mut Observer) -> Box<Node<K>>
where
    K: TreeKey,
    Observer: TreeObserver<K>,
{
    let Some(mut node) = root else {
        return Node::leaf(value);
    };

    match value.cmp(&node.value) {
        Ordering::Equal => return node,
        Ordering::Less => node.left = Some(insert(node.left.take(), value, observer)),
        Ordering::Greater => node.right = Some(insert(node.right.take(), value, observer)),
    }

    node.update_height();
    let balance = node.balance();

    if balance > 1 {
        observer.observe(TreeEvent::RebalanceLeft(&node.value));
        if balance_of(&node.right) < 0 {
            // Right-left case: straighten the inner grandchild first.
            if let Some(pivot) = node.right.take() {
                observer.observe(TreeEvent::RotateRight(&pivot.value));
                node.right = Some(rotate_right(pivot));
            }
        }
        observer.observe(TreeEvent::RotateLeft(&node.value));
        node = rotate_left(node);
    } else if balance < -1 {
        observer.observe(TreeEvent::RebalanceRight(&node.value));
        if balance_of(&node.left) > 0 {
            // Left-right case, mirror of the above.
            if let Some(pivot) = node.left.take() {
                observer.observe(TreeEvent::RotateLeft(&pivot.value));
                node.left = Some(rotate_left(pivot));
            }
        }
        observer.observe(TreeEvent::RotateRight(&node.value));
        node = rotate_right(node);
    }

    node.update_height();
    node
}

/// Tests whether `value` is present in the subtree.
///
/// Read-only binary search; never triggers rebalancing.
pub fn contains<K>(link: &Link<K>, value: &K) -> bool
where
    K: TreeKey,
{
    let mut current = link;
    while let Some(node) = current {
        match value.cmp(&node.value) {
            Ordering::Equal => return true,
            Ordering::Less => current = &node.left,
            Ordering::Greater => current = &node.right,
        }
    }
    false
}

/// Rotates the subtree to the left, promoting the right child to subtree
/// root.
///
/// The demoted node's height is recomputed before the promoted node's; the
/// promoted node's height depends on it. A node with no right child is
/// returned unchanged.
fn rotate_left<K>(mut node: Box<Node<K>>) -> Box<Node<K>>
where
    K: TreeKey,
{
    let Some(mut pivot) = node.right.take() else {
        return node;
    };
    node.right = pivot.left.take();
    node.update_height();
    pivot.left = Some(node);
    pivot.update_height();
    pivot
}

/// Rotates the subtree to the right, promoting the left child to subtree
/// root. Mirror image of [`rotate_left`].
fn rotate_right<K>(mut node: Box<Node<K>>) -> Box<Node<K>>
where
    K: TreeKey,
{
    let Some(mut pivot) = node.left.take() else {
        return node;
    };
    node.left = pivot.right.take();
    node.update_height();
    pivot.right = Some(node);
    pivot.update_height();
    pivot
}
