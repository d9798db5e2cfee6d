use std::{collections::VecDeque, iter::FusedIterator};

use crate::{Node, TreeKey};

/// Ascending traversal over `(key, height)` pairs.
///
/// Visits the left subtree, then the node, then the right subtree; by the
/// ordering invariant this yields every key exactly once, in strictly
/// increasing order. The iterator is lazy and the constructor is restartable:
/// each call to [`AvlTree::in_order`](crate::AvlTree::in_order) starts a
/// fresh traversal.
///
/// The internal stack holds at most one node per level, so its depth is
/// bounded by the tree height, `O(log n)`.
pub struct InOrder<'a, K>
where
    K: TreeKey,
{
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> InOrder<'a, K>
where
    K: TreeKey,
{
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        let mut iter = InOrder { stack: Vec::new() };
        iter.descend(root);
        iter
    }

    fn descend(&mut self, mut subtree: Option<&'a Node<K>>) {
        while let Some(node) = subtree {
            self.stack.push(node);
            subtree = node.left();
        }
    }
}

impl<'a, K> Iterator for InOrder<'a, K>
where
    K: TreeKey,
{
    type Item = (&'a K, i32);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.descend(node.right());
        Some((node.value(), node.height()))
    }
}

impl<K> FusedIterator for InOrder<'_, K> where K: TreeKey {}

/// Level-order traversal over `(key, height)` pairs.
///
/// Dequeues nodes from a FIFO queue seeded with the root, enqueueing each
/// visited node's non-empty children left before right. Nodes come out
/// grouped by increasing depth; the key set matches [`InOrder`], the order
/// does not. The queue is bounded by the widest level of the tree, `O(n)`
/// worst case.
pub struct BreadthFirst<'a, K>
where
    K: TreeKey,
{
    queue: VecDeque<&'a Node<K>>,
}

impl<'a, K> BreadthFirst<'a, K>
where
    K: TreeKey,
{
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        BreadthFirst {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, K> Iterator for BreadthFirst<'a, K>
where
    K: TreeKey,
{
    type Item = (&'a K, i32);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        if let Some(left) = node.left() {
            self.queue.push_back(left);
        }
        if let Some(right) = node.right() {
            self.queue.push_back(right);
        }
        Some((node.value(), node.height()))
    }
}

impl<K> FusedIterator for BreadthFirst<'_, K> where K: TreeKey {}
