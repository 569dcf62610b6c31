//! Height-balanced (AVL) binary search tree over unique, comparator-ordered
//! keys.
//!
//! Search, insertion and deletion run in `O(log n)`; in-order traversal
//! yields the keys in ascending comparator order in `O(n)`. Nodes are owned
//! exclusively by their parent, with no parent pointers: the mutating
//! operations recurse down from the root and re-link the (possibly rotated)
//! subtree root through their return value.
//!
//! # Example
//!
//! ```
//! use avl_tree::AvlTree;
//!
//! let mut tree = AvlTree::new();
//! tree.insert(10);
//! tree.insert(20);
//! tree.insert(5);
//! tree.insert(6);
//!
//! assert_eq!(tree.to_vec(), vec![&5, &6, &10, &20]);
//! assert!(tree.contains(&10));
//! assert_eq!(tree.find_min(), Some(&5));
//!
//! tree.remove(&10);
//! assert_eq!(tree.to_vec(), vec![&5, &6, &20]);
//! ```
//!
//! Or with a custom comparator:
//!
//! ```
//! use avl_tree::AvlTree;
//!
//! let mut tree = AvlTree::with_comparator(|a: &i32, b: &i32| b - a);
//! tree.extend([1, 2, 3]);
//! assert_eq!(tree.to_vec(), vec![&3, &2, &1]);
//! ```

mod iter;
mod node;
mod print;
mod tree;
mod validate;

pub use iter::{IntoIter, Iter};
pub use tree::AvlTree;
pub use validate::InvariantError;
