//! Structural invariant checks for [`AvlTree`](crate::AvlTree).

use thiserror::Error;

use crate::iter::Iter;
use crate::node::AvlNode;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// An in-order walk produced keys that are not strictly ascending.
    #[error("BST order violated")]
    OrderViolated,
    /// Some node's balance factor left -1..=1.
    #[error("balance factor {0} outside -1..=1")]
    BalanceViolated(i32),
    /// A stored height disagrees with the height computed from the links.
    #[error("stored height {stored} does not match computed height {computed}")]
    HeightMismatch { stored: u32, computed: u32 },
}

pub(crate) fn validate<K, C>(
    root: Option<&AvlNode<K>>,
    comparator: &C,
) -> Result<(), InvariantError>
where
    C: Fn(&K, &K) -> i32,
{
    let Some(root) = root else {
        return Ok(());
    };

    check_heights_and_balance(root)?;

    let mut prev: Option<&K> = None;
    for key in Iter::new(Some(root)) {
        if let Some(prev) = prev {
            if comparator(prev, key) >= 0 {
                return Err(InvariantError::OrderViolated);
            }
        }
        prev = Some(key);
    }

    Ok(())
}

/// Height recomputed from the links alone, ignoring the stored values.
fn computed_height<K>(node: &AvlNode<K>) -> u32 {
    let lh = node.left.as_deref().map_or(0, computed_height);
    let rh = node.right.as_deref().map_or(0, computed_height);
    1 + lh.max(rh)
}

fn check_heights_and_balance<K>(node: &AvlNode<K>) -> Result<(), InvariantError> {
    if let Some(left) = node.left.as_deref() {
        check_heights_and_balance(left)?;
    }
    if let Some(right) = node.right.as_deref() {
        check_heights_and_balance(right)?;
    }

    let lh = node.left.as_deref().map_or(0, computed_height) as i32;
    let rh = node.right.as_deref().map_or(0, computed_height) as i32;

    let computed = 1 + lh.max(rh) as u32;
    if node.height != computed {
        return Err(InvariantError::HeightMismatch {
            stored: node.height,
            computed,
        });
    }

    let bf = lh - rh;
    if !(-1..=1).contains(&bf) {
        return Err(InvariantError::BalanceViolated(bf));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmp(a: &i32, b: &i32) -> i32 {
        a - b
    }

    fn leaf(key: i32) -> Box<AvlNode<i32>> {
        Box::new(AvlNode::new(key))
    }

    #[test]
    fn empty_tree_is_valid() {
        assert_eq!(validate::<i32, _>(None, &cmp), Ok(()));
    }

    #[test]
    fn balanced_tree_is_valid() {
        let mut root = leaf(2);
        root.left = Some(leaf(1));
        root.right = Some(leaf(3));
        root.update_height();
        assert_eq!(validate(Some(&root), &cmp), Ok(()));
    }

    #[test]
    fn detects_stale_height() {
        let mut root = leaf(2);
        root.left = Some(leaf(1));
        // Height never updated after attaching the child.
        assert_eq!(
            validate(Some(&root), &cmp),
            Err(InvariantError::HeightMismatch {
                stored: 1,
                computed: 2
            })
        );
    }

    #[test]
    fn detects_unbalanced_spine() {
        let mut mid = leaf(2);
        mid.left = Some(leaf(1));
        mid.update_height();
        let mut root = leaf(3);
        root.left = Some(mid);
        root.update_height();
        assert_eq!(
            validate(Some(&root), &cmp),
            Err(InvariantError::BalanceViolated(2))
        );
    }

    #[test]
    fn detects_order_violation() {
        let mut root = leaf(1);
        root.left = Some(leaf(2));
        root.right = Some(leaf(3));
        root.update_height();
        assert_eq!(validate(Some(&root), &cmp), Err(InvariantError::OrderViolated));
    }
}
