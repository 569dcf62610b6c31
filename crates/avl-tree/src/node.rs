use std::cmp::max;

/// Owned link to a subtree; `None` is the empty subtree.
pub(crate) type Link<K> = Option<Box<AvlNode<K>>>;

/// One stored key together with the height of the subtree rooted here.
///
/// Every node is exclusively owned by its parent (or by the tree container,
/// for the root). There are no parent pointers; insert, remove and the
/// rotations return the new subtree root and the caller re-links it.
pub(crate) struct AvlNode<K> {
    pub(crate) key: K,
    /// `1 + max(height(left), height(right))`; a leaf has height 1.
    pub(crate) height: u32,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> AvlNode<K> {
    pub(crate) fn new(key: K) -> Self {
        Self {
            key,
            height: 1,
            left: None,
            right: None,
        }
    }

    pub(crate) fn update_height(&mut self) {
        self.height = 1 + max(height(&self.left), height(&self.right));
    }

    /// `height(left) - height(right)`.
    pub(crate) fn balance_factor(&self) -> i32 {
        height(&self.left) as i32 - height(&self.right) as i32
    }
}

pub(crate) fn height<K>(link: &Link<K>) -> u32 {
    link.as_ref().map_or(0, |n| n.height)
}

fn balance_of<K>(link: &Link<K>) -> i32 {
    link.as_ref().map_or(0, |n| n.balance_factor())
}

/// Right rotation: `y`'s left child `x` becomes the subtree root, `y`
/// becomes `x`'s right child, and `x`'s former right subtree becomes `y`'s
/// left subtree. Only the two touched heights are updated, `y` first.
pub(crate) fn rotate_right<K>(mut y: Box<AvlNode<K>>) -> Box<AvlNode<K>> {
    let mut x = y.left.take().expect("right rotation needs a left child");
    y.left = x.right.take();
    y.update_height();
    x.right = Some(y);
    x.update_height();
    x
}

/// Mirror image of [`rotate_right`].
pub(crate) fn rotate_left<K>(mut x: Box<AvlNode<K>>) -> Box<AvlNode<K>> {
    let mut y = x.right.take().expect("left rotation needs a right child");
    x.right = y.left.take();
    x.update_height();
    y.left = Some(x);
    y.update_height();
    y
}

/// Recomputes `node`'s height and restores its balance factor to -1..=1,
/// assuming both subtrees are themselves balanced with current heights.
///
/// The rotation pattern is picked from the heavier child's balance factor;
/// a child factor of 0 takes the single-rotation path, which is what the
/// deletion unwind requires and is equivalent to the insertion cases (after
/// an insertion the heavier child is never even).
pub(crate) fn rebalance<K>(mut node: Box<AvlNode<K>>) -> Box<AvlNode<K>> {
    node.update_height();
    let bf = node.balance_factor();
    if bf > 1 {
        if balance_of(&node.left) < 0 {
            node.left = node.left.take().map(rotate_left);
        }
        rotate_right(node)
    } else if bf < -1 {
        if balance_of(&node.right) > 0 {
            node.right = node.right.take().map(rotate_right);
        }
        rotate_left(node)
    } else {
        node
    }
}

/// Unlinks the minimum node of the subtree, rebalancing every node on the
/// unwind path. Returns the remaining subtree and the detached key.
pub(crate) fn detach_min<K>(mut node: Box<AvlNode<K>>) -> (Link<K>, K) {
    match node.left.take() {
        None => {
            let AvlNode { key, right, .. } = *node;
            (right, key)
        }
        Some(left) => {
            let (rest, key) = detach_min(left);
            node.left = rest;
            (Some(rebalance(node)), key)
        }
    }
}
