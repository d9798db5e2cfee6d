//! Testing and development helpers: an observer that records the event
//! stream, and a whole-tree invariant checker.

use crate::{Node, TreeEvent, TreeKey, TreeObserver, node::EMPTY_HEIGHT};

/// An owned copy of a [`TreeEvent`], suitable for inspection after the
/// mutation that produced it has finished.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordedEvent<K> {
    /// Owned counterpart of [`TreeEvent::Insert`].
    Insert(K),
    /// Owned counterpart of [`TreeEvent::RebalanceLeft`].
    RebalanceLeft(K),
    /// Owned counterpart of [`TreeEvent::RebalanceRight`].
    RebalanceRight(K),
    /// Owned counterpart of [`TreeEvent::RotateLeft`].
    RotateLeft(K),
    /// Owned counterpart of [`TreeEvent::RotateRight`].
    RotateRight(K),
}

impl<K> RecordedEvent<K> {
    fn is_insert(&self) -> bool {
        matches!(self, RecordedEvent::Insert(_))
    }
}

/// A [`TreeObserver`] that keeps every event it receives, in order.
///
/// Lets tests assert the exact rebalancing decisions a given insertion
/// sequence produces.
#[derive(Clone, Debug)]
pub struct RecordingObserver<K> {
    events: Vec<RecordedEvent<K>>,
}

impl<K> RecordingObserver<K> {
    /// Creates an observer with an empty event log.
    pub fn new() -> Self {
        RecordingObserver { events: Vec::new() }
    }

    /// All events observed so far, in order.
    pub fn events(&self) -> &[RecordedEvent<K>] {
        &self.events
    }

    /// The rebalance and rotation events, with the per-call insert events
    /// filtered out.
    pub fn rotation_events(&self) -> Vec<RecordedEvent<K>>
    where
        K: Clone,
    {
        self.events
            .iter()
            .filter(|event| !event.is_insert())
            .cloned()
            .collect()
    }
}

impl<K> Default for RecordingObserver<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> TreeObserver<K> for RecordingObserver<K>
where
    K: TreeKey + Clone,
{
    fn observe(&mut self, event: TreeEvent<'_, K>) {
        self.events.push(match event {
            TreeEvent::Insert(key) => RecordedEvent::Insert(key.clone()),
            TreeEvent::RebalanceLeft(key) => RecordedEvent::RebalanceLeft(key.clone()),
            TreeEvent::RebalanceRight(key) => RecordedEvent::RebalanceRight(key.clone()),
            TreeEvent::RotateLeft(key) => RecordedEvent::RotateLeft(key.clone()),
            TreeEvent::RotateRight(key) => RecordedEvent::RotateRight(key.clone()),
        });
    }
}

/// Walks every node of the subtree asserting the three structural
/// invariants, and returns the number of keys found.
///
/// Asserted per node:
///
/// 1. ordering: the key lies strictly between the tightest enclosing
///    ancestor bounds;
/// 2. height cache: `height == 1 + max(height(left), height(right))`;
/// 3. balance: `height(right) - height(left)` is in `[-1, 1]`.
///
/// Panics on the first violation, so it is only suitable for tests.
pub fn check_invariants<K>(root: Option<&Node<K>>) -> usize
where
    K: TreeKey,
{
    fn walk<'a, K>(node: &'a Node<K>, lower: Option<&'a K>, upper: Option<&'a K>) -> usize
    where
        K: TreeKey,
    {
        if let Some(lower) = lower {
            assert!(
                lower < node.value(),
                "key {:?} is not greater than ancestor {lower:?}",
                node.value()
            );
        }
        if let Some(upper) = upper {
            assert!(
                node.value() < upper,
                "key {:?} is not smaller than ancestor {upper:?}",
                node.value()
            );
        }

        let left_height = node.left().map_or(EMPTY_HEIGHT, Node::height);
        let right_height = node.right().map_or(EMPTY_HEIGHT, Node::height);
        assert_eq!(
            node.height(),
            1 + left_height.max(right_height),
            "stale height cache at {:?}",
            node.value()
        );

        let balance = right_height - left_height;
        assert!(
            (-1..=1).contains(&balance),
            "balance factor {balance} out of range at {:?}",
            node.value()
        );

        let mut count = 1;
        if let Some(left) = node.left() {
            count += walk(left, lower, Some(node.value()));
        }
        if let Some(right) = node.right() {
            count += walk(right, Some(node.value()), upper);
        }
        count
    }

    match root {
        Some(node) => walk(node, None, None),
        None => 0,
    }
}
