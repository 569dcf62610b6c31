use crate::node::{detach_min, AvlNode, Link};
use crate::tree::AvlTree;

/// Lazy in-order iterator over borrowed keys.
///
/// The tree keeps no parent pointers, so the iterator carries an explicit
/// descent stack of the not-yet-visited ancestors; its depth is bounded by
/// the tree height.
pub struct Iter<'a, K> {
    stack: Vec<&'a AvlNode<K>>,
}

impl<'a, K> Iter<'a, K> {
    pub(crate) fn new(root: Option<&'a AvlNode<K>>) -> Self {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a AvlNode<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.key)
    }
}

/// Owning in-order iterator; repeatedly detaches the minimum node.
pub struct IntoIter<K> {
    root: Link<K>,
}

impl<K> Iterator for IntoIter<K> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        let node = self.root.take()?;
        let (rest, key) = detach_min(node);
        self.root = rest;
        Some(key)
    }
}

impl<K, C> IntoIterator for AvlTree<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    type Item = K;
    type IntoIter = IntoIter<K>;

    fn into_iter(mut self) -> IntoIter<K> {
        IntoIter {
            root: self.root.take(),
        }
    }
}

impl<'a, K, C> IntoIterator for &'a AvlTree<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Iter<'a, K> {
        self.iter()
    }
}

impl<K, C> Extend<K> for AvlTree<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K> FromIterator<K> for AvlTree<K, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = AvlTree::new();
        tree.extend(iter);
        tree
    }
}
