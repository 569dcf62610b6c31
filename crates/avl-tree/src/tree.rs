use crate::iter::Iter;
use crate::node::{self, detach_min, rebalance, AvlNode, Link};
use crate::validate::{self, InvariantError};

fn default_comparator<K: PartialOrd>(a: &K, b: &K) -> i32 {
    if a == b {
        0
    } else if a < b {
        -1
    } else {
        1
    }
}

/// Height-balanced (AVL) binary search tree over unique keys.
///
/// Ordering comes from an injected comparator returning negative, zero or
/// positive, defaulting to the natural ascending order of `PartialOrd` keys.
/// The comparator is assumed to be a consistent total order; the tree does
/// not verify it.
///
/// Duplicate keys are not stored: inserting a key that compares equal to an
/// existing one leaves the tree unchanged. Callers needing multiset
/// semantics must keep an occurrence count externally.
pub struct AvlTree<K, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    pub(crate) root: Link<K>,
    comparator: C,
}

impl<K> AvlTree<K, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K> Default for AvlTree<K, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> AvlTree<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            comparator,
        }
    }

    #[inline]
    fn compare(&self, a: &K, b: &K) -> i32 {
        (self.comparator)(a, b)
    }

    /// Inserts `key` unless an equal key is already present.
    pub fn insert(&mut self, key: K) {
        let root = self.root.take();
        self.root = Some(self.insert_at(root, key));
    }

    /// Removes the node holding `key`; no-op if absent.
    pub fn remove(&mut self, key: &K) {
        let root = self.root.take();
        self.root = self.remove_at(root, key);
    }

    /// Iterative descent from the root; `O(height)`, no allocation.
    pub fn contains(&self, key: &K) -> bool {
        let mut curr = self.root.as_deref();
        while let Some(n) = curr {
            let cmp = self.compare(key, &n.key);
            if cmp == 0 {
                return true;
            }
            curr = if cmp < 0 {
                n.left.as_deref()
            } else {
                n.right.as_deref()
            };
        }
        false
    }

    /// Leftmost key, or `None` on an empty tree.
    pub fn find_min(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.key)
    }

    /// Rightmost key, or `None` on an empty tree.
    pub fn find_max(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.key)
    }

    /// Number of stored keys, computed by a full traversal (`O(n)`, not
    /// cached). Callers that need `O(1)` size must count externally.
    pub fn size(&self) -> usize {
        fn count<K>(link: &Link<K>) -> usize {
            link.as_ref()
                .map_or(0, |n| 1 + count(&n.left) + count(&n.right))
        }
        count(&self.root)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the tree; 0 when empty, 1 for a single node.
    pub fn height(&self) -> u32 {
        node::height(&self.root)
    }

    pub fn clear(&mut self) {
        self.root = None;
    }

    /// In-order keys, ascending under the comparator.
    pub fn to_vec(&self) -> Vec<&K> {
        let mut out = Vec::new();
        in_order(&self.root, &mut out);
        out
    }

    pub fn to_pre_order_vec(&self) -> Vec<&K> {
        let mut out = Vec::new();
        pre_order(&self.root, &mut out);
        out
    }

    pub fn to_post_order_vec(&self) -> Vec<&K> {
        let mut out = Vec::new();
        post_order(&self.root, &mut out);
        out
    }

    /// Lazy in-order iterator over the keys.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self.root.as_deref())
    }

    /// Checks BST order, balance factors and stored heights.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant. A failure here indicates a bug
    /// in the tree or an inconsistent comparator; no public operation can
    /// produce one from a consistent comparator.
    pub fn assert_valid(&self) -> Result<(), InvariantError> {
        validate::validate(self.root.as_deref(), &self.comparator)
    }

    fn insert_at(&self, node: Link<K>, key: K) -> Box<AvlNode<K>> {
        let Some(mut node) = node else {
            return Box::new(AvlNode::new(key));
        };
        let cmp = self.compare(&key, &node.key);
        if cmp < 0 {
            node.left = Some(self.insert_at(node.left.take(), key));
        } else if cmp > 0 {
            node.right = Some(self.insert_at(node.right.take(), key));
        } else {
            // Equal key already present; the tree is left untouched.
            return node;
        }
        rebalance(node)
    }

    fn remove_at(&self, node: Link<K>, key: &K) -> Link<K> {
        let mut node = node?;
        let cmp = self.compare(key, &node.key);
        if cmp < 0 {
            node.left = self.remove_at(node.left.take(), key);
        } else if cmp > 0 {
            node.right = self.remove_at(node.right.take(), key);
        } else {
            node = match (node.left.take(), node.right.take()) {
                (None, None) => return None,
                (Some(child), None) | (None, Some(child)) => child,
                (Some(left), Some(right)) => {
                    // Two children: the in-order successor (minimum of the
                    // right subtree) is unlinked and its key takes this slot.
                    let (rest, successor) = detach_min(right);
                    node.key = successor;
                    node.left = Some(left);
                    node.right = rest;
                    node
                }
            };
        }
        Some(rebalance(node))
    }
}

fn in_order<'a, K>(link: &'a Link<K>, out: &mut Vec<&'a K>) {
    if let Some(n) = link {
        in_order(&n.left, out);
        out.push(&n.key);
        in_order(&n.right, out);
    }
}

fn pre_order<'a, K>(link: &'a Link<K>, out: &mut Vec<&'a K>) {
    if let Some(n) = link {
        out.push(&n.key);
        pre_order(&n.left, out);
        pre_order(&n.right, out);
    }
}

fn post_order<'a, K>(link: &'a Link<K>, out: &mut Vec<&'a K>) {
    if let Some(n) = link {
        post_order(&n.left, out);
        post_order(&n.right, out);
        out.push(&n.key);
    }
}
