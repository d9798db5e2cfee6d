use crate::TreeKey;

/// A structured diagnostic event emitted while a tree mutates.
///
/// Each event borrows the key at the node where the decision happened, so it
/// is only valid for the duration of the [`TreeObserver::observe`] call;
/// observers that need to keep events around must copy what they need.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TreeEvent<'a, K>
where
    K: TreeKey,
{
    /// An insertion of the given key began.
    Insert(&'a K),
    /// A right-heavy imbalance was detected at the node holding this key;
    /// it will be resolved by a left rotation.
    RebalanceLeft(&'a K),
    /// A left-heavy imbalance was detected at the node holding this key;
    /// it will be resolved by a right rotation.
    RebalanceRight(&'a K),
    /// The subtree rooted at the node holding this key was rotated left.
    RotateLeft(&'a K),
    /// The subtree rooted at the node holding this key was rotated right.
    RotateRight(&'a K),
}

/// A sink for [`TreeEvent`]s.
///
/// The tree core performs no I/O of its own; whatever should happen to the
/// diagnostic stream is decided by the observer injected into the tree.
pub trait TreeObserver<K>
where
    K: TreeKey,
{
    /// Receives a single event.
    fn observe(&mut self, event: TreeEvent<'_, K>);
}

/// The default observer; discards every event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoopObserver;

impl<K> TreeObserver<K> for NoopObserver
where
    K: TreeKey,
{
    fn observe(&mut self, _event: TreeEvent<'_, K>) {}
}

/// Forwards every event to [`tracing`] at debug level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TracingObserver;

impl<K> TreeObserver<K> for TracingObserver
where
    K: TreeKey,
{
    fn observe(&mut self, event: TreeEvent<'_, K>) {
        match event {
            TreeEvent::Insert(key) => tracing::debug!(?key, "inserting"),
            TreeEvent::RebalanceLeft(key) => tracing::debug!(?key, "rebalancing left"),
            TreeEvent::RebalanceRight(key) => tracing::debug!(?key, "rebalancing right"),
            TreeEvent::RotateLeft(key) => tracing::debug!(?key, "rotating left"),
            TreeEvent::RotateRight(key) => tracing::debug!(?key, "rotating right"),
        }
    }
}
