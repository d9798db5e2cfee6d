use crate::{
    BreadthFirst, InOrder, Link, Node, NoopObserver, TreeEvent, TreeKey, TreeObserver, node,
};

/// A height-balanced binary search tree of unique, ordered keys.
///
/// The tree owns its root [`Link`] and carries out the return-new-root
/// protocol internally: every [`AvlTree::insert`] hands the root to the
/// link-level [`insert`](crate::insert) and stores whatever root comes back,
/// since a rotation may promote a different node to the top.
///
/// Mutation requires `&mut self`, so the single-writer assumption of the
/// data structure is enforced at compile time.
///
/// Diagnostic events are delivered to the injected [`TreeObserver`]; the
/// default [`NoopObserver`] discards them.
#[derive(Clone, Debug)]
pub struct AvlTree<K, Observer = NoopObserver>
where
    K: TreeKey,
    Observer: TreeObserver<K>,
{
    root: Link<K>,
    len: usize,
    observer: Observer,
}

impl<K> AvlTree<K>
where
    K: TreeKey,
{
    /// Creates an empty tree with the no-op observer.
    pub fn new() -> Self {
        Self::with_observer(NoopObserver)
    }
}

impl<K> Default for AvlTree<K>
where
    K: TreeKey,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, Observer> AvlTree<K, Observer>
where
    K: TreeKey,
    Observer: TreeObserver<K>,
{
    /// Creates an empty tree that reports diagnostic events to `observer`.
    pub fn with_observer(observer: Observer) -> Self {
        AvlTree {
            root: None,
            len: 0,
            observer,
        }
    }

    /// Inserts `value`, rebalancing as needed.
    ///
    /// Inserting a key that is already present leaves the tree untouched;
    /// the operation is idempotent, not an error.
    pub fn insert(&mut self, value: K) {
        self.observer.observe(TreeEvent::Insert(&value));
        // The structural insert reports nothing back about duplicates, so
        // the key count is settled by a lookup first.
        let present = node::contains(&self.root, &value);
        self.root = Some(node::insert(self.root.take(), value, &mut self.observer));
        if !present {
            self.len += 1;
        }
    }

    /// Tests whether `value` is present.
    pub fn contains(&self, value: &K) -> bool {
        node::contains(&self.root, value)
    }

    /// Returns an ascending iterator over `(key, height)` pairs.
    pub fn in_order(&self) -> InOrder<'_, K> {
        InOrder::new(self.root.as_deref())
    }

    /// Returns a level-order iterator over `(key, height)` pairs.
    pub fn breadth_first(&self) -> BreadthFirst<'_, K> {
        BreadthFirst::new(self.root.as_deref())
    }

    /// Height of the tree: `-1` when empty, `0` for a single leaf.
    pub fn height(&self) -> i32 {
        node::height_of(&self.root)
    }

    /// Number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the [`Node`] at the root of this tree.
    ///
    /// Returns `None` if the tree is empty.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// The observer receiving this tree's diagnostic events.
    pub fn observer(&self) -> &Observer {
        &self.observer
    }
}

impl<K, Observer> Extend<K> for AvlTree<K, Observer>
where
    K: TreeKey,
    Observer: TreeObserver<K>,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<K> FromIterator<K> for AvlTree<K>
where
    K: TreeKey,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = AvlTree::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, K, Observer> IntoIterator for &'a AvlTree<K, Observer>
where
    K: TreeKey,
    Observer: TreeObserver<K>,
{
    type Item = (&'a K, i32);
    type IntoIter = InOrder<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use proptest::prelude::*;
    use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

    use crate::{AvlTree, check_invariants};

    /// AVL worst-case height for `n` keys.
    fn height_limit(n: usize) -> f64 {
        1.4405 * ((n as f64) + 2.0).log2() - 0.3277
    }

    #[test]
    fn it_starts_empty() {
        let tree = AvlTree::<u64>::new();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), -1);
        assert!(tree.root().is_none());
        assert!(!tree.contains(&42));
    }

    #[test]
    fn it_builds_a_complete_tree_from_an_ascending_run() {
        let tree: AvlTree<i32> = (1..=7).collect();

        assert_eq!(tree.len(), 7);
        assert_eq!(tree.height(), 2);

        let root = tree.root().expect("non-empty tree");
        assert_eq!(*root.value(), 4);

        let left = root.left().expect("left subtree");
        assert_eq!(*left.value(), 2);
        assert_eq!(left.left().map(|node| *node.value()), Some(1));
        assert_eq!(left.right().map(|node| *node.value()), Some(3));

        let right = root.right().expect("right subtree");
        assert_eq!(*right.value(), 6);
        assert_eq!(right.left().map(|node| *node.value()), Some(5));
        assert_eq!(right.right().map(|node| *node.value()), Some(7));

        let ascending: Vec<i32> = tree.in_order().map(|(key, _)| *key).collect();
        assert_eq!(ascending, vec![1, 2, 3, 4, 5, 6, 7]);

        let levels: Vec<i32> = tree.breadth_first().map(|(key, _)| *key).collect();
        assert_eq!(levels, vec![4, 2, 6, 1, 3, 5, 7]);
    }

    #[test]
    fn it_collapses_duplicate_insertions_to_a_single_node() {
        let tree: AvlTree<i32> = [3, 3, 3].into_iter().collect();

        assert_eq!(tree.len(), 1);
        assert_eq!(tree.height(), 0);
        assert!(tree.contains(&3));
        assert!(!tree.contains(&2));
    }

    #[test]
    fn it_leaves_the_tree_shape_unchanged_on_duplicate_insertion() {
        let mut tree: AvlTree<i32> = [5, 2, 8, 1, 3, 9].into_iter().collect();
        let snapshot = tree.root().cloned();

        for key in [5, 2, 8, 1, 3, 9] {
            tree.insert(key);
        }

        assert_eq!(tree.root().cloned(), snapshot);
        assert_eq!(tree.len(), 6);
    }

    #[test]
    fn it_finds_every_inserted_key_and_no_others() -> anyhow::Result<()> {
        let mut rng = StdRng::seed_from_u64(17);
        let mut keys: Vec<u32> = (0..500).map(|n| n * 2).collect();
        keys.shuffle(&mut rng);

        let mut tree = AvlTree::new();
        for &key in &keys {
            tree.insert(key);
        }

        for &key in &keys {
            anyhow::ensure!(tree.contains(&key), "missing key {key}");
            anyhow::ensure!(!tree.contains(&(key + 1)), "phantom key {}", key + 1);
        }
        assert_eq!(check_invariants(tree.root()), keys.len());
        Ok(())
    }

    #[test]
    fn it_keeps_height_within_the_avl_bound() {
        let mut tree = AvlTree::new();
        for n in 1..=1000u32 {
            // Ascending order is the worst case for an unbalanced tree.
            tree.insert(n);
            let limit = height_limit(n as usize);
            assert!(
                (tree.height() as f64) < limit,
                "height {} exceeds {limit:.3} at {n} keys",
                tree.height()
            );
        }
    }

    #[test]
    fn it_collects_and_extends() {
        let mut tree: AvlTree<i32> = [4, 2].into_iter().collect();
        tree.extend([1, 3]);

        assert_eq!(tree.len(), 4);
        let ascending: Vec<i32> = (&tree).into_iter().map(|(key, _)| *key).collect();
        assert_eq!(ascending, vec![1, 2, 3, 4]);
    }

    proptest! {
        #[test]
        fn it_preserves_all_invariants_for_arbitrary_insertions(
            keys in proptest::collection::vec(any::<i32>(), 0..256),
        ) {
            let mut tree = AvlTree::new();
            for &key in &keys {
                tree.insert(key);
            }

            let distinct: BTreeSet<i32> = keys.iter().copied().collect();
            prop_assert_eq!(check_invariants(tree.root()), distinct.len());
            prop_assert_eq!(tree.len(), distinct.len());

            let ascending: Vec<i32> = tree.in_order().map(|(key, _)| *key).collect();
            let expected: Vec<i32> = distinct.iter().copied().collect();
            prop_assert_eq!(ascending, expected);

            for key in &keys {
                prop_assert!(tree.contains(key));
            }

            if !distinct.is_empty() {
                prop_assert!((tree.height() as f64) < height_limit(distinct.len()));
            }
        }
    }
}
