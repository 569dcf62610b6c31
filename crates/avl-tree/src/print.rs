//! Debug printer for the tree structure.

use std::fmt::{self, Debug};

use crate::node::AvlNode;
use crate::tree::AvlTree;

pub(crate) fn print<K: Debug>(node: Option<&AvlNode<K>>, tab: &str) -> String {
    match node {
        None => "∅".to_string(),
        Some(n) => {
            let left = print(n.left.as_deref(), &format!("{tab}  "));
            let right = print(n.right.as_deref(), &format!("{tab}  "));
            format!(
                "{:?} [h={}]\n{tab}L={left}\n{tab}R={right}",
                n.key, n.height
            )
        }
    }
}

impl<K, C> AvlTree<K, C>
where
    K: Debug,
    C: Fn(&K, &K) -> i32,
{
    /// Renders the tree shape with per-node heights, one node per line.
    pub fn print(&self) -> String {
        print(self.root.as_deref(), "")
    }
}

impl<K, C> Debug for AvlTree<K, C>
where
    K: Debug,
    C: Fn(&K, &K) -> i32,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.print())
    }
}
