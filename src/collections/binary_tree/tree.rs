use std::fmt::{self, Debug, Display, Formatter};

use tracing::debug;

use super::{Branch, Inorder, Order, Postorder, Preorder, TreeNode};
use crate::util::error::KeyNotFound;

/// Trees holding more values than this are never walked recursively.
pub const MAX_RECURSION_DEPTH: usize = 1024;

/// An unbalanced binary search tree.
///
/// Every value in a node's left subtree is smaller than the node's value, and every value in its
/// right subtree is greater or equal. Duplicates are kept, each one routed into the right subtree
/// of the copies before it.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of values in the tree.
/// - `h`: The height of the tree, between `log2(n)` and `n` depending on insertion order.
///
/// | Method | Complexity |
/// |-|-|
/// | `insert/search/remove` | `O(h)` |
/// | `min/max` | `O(h)` |
/// | `height/count` | `O(n)` |
/// | `len` | `O(1)` |
///
/// Only the tree-shaped [`Debug`] output recurses once per level. Everything else works on a
/// degenerate tree built from sorted input, just at the `O(n)` end of each bound.
pub struct BinarySearchTree<T: Ord> {
    pub(crate) root: Branch<T>,
    pub(crate) len: usize,
}

impl<T: Ord> BinarySearchTree<T> {
    /// Creates a new tree with no values.
    pub const fn new() -> BinarySearchTree<T> {
        BinarySearchTree {
            root: Branch(None),
            len: 0,
        }
    }

    /// Returns the number of values in the tree, as tracked by insertions and removals.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts `value` at the first empty branch found by descending from the root.
    pub fn insert(&mut self, value: T) {
        self.root.insert(value);
        self.len += 1;
    }

    /// Returns true if the tree holds a value equal to `value`.
    pub fn search(&self, value: &T) -> bool {
        self.root.contains(value)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.search(value)
    }

    /// Removes one value equal to `value` and returns it.
    ///
    /// A leaf is simply detached and a node with one child is replaced by that child. A node with
    /// two children takes the value of its in-order successor, which is then removed from the
    /// right subtree in its place.
    pub fn remove(&mut self, value: &T) -> Result<T, KeyNotFound> {
        match self.root.remove(value) {
            Some(removed) => {
                self.len -= 1;
                Ok(removed)
            },
            None => {
                debug!(len = self.len, "remove rejected: value not in binary search tree");
                Err(KeyNotFound)
            },
        }
    }

    /// Returns the smallest value, or [`None`] if the tree is empty.
    pub fn min(&self) -> Option<&T> {
        self.root.first()
    }

    /// Returns the largest value, or [`None`] if the tree is empty.
    pub fn max(&self) -> Option<&T> {
        self.root.last()
    }

    /// Returns the number of edges on the longest path from the root to a leaf, so a lone root has
    /// height zero. An empty tree has no height and returns [`None`].
    pub fn height(&self) -> Option<usize> {
        self.root.levels().checked_sub(1)
    }

    /// Counts the nodes by visiting every one of them.
    pub fn count(&self) -> usize {
        self.root.count()
    }

    pub fn inorder(&self) -> Inorder<'_, T> {
        Inorder::new(self.root.as_deref())
    }

    pub fn preorder(&self) -> Preorder<'_, T> {
        Preorder::new(self.root.as_deref())
    }

    pub fn postorder(&self) -> Postorder<'_, T> {
        Postorder::new(self.root.as_deref())
    }

    /// Collects every value in the given order.
    ///
    /// Trees with at most [`MAX_RECURSION_DEPTH`] values cannot be deeper than that, so they are
    /// walked recursively. Larger trees are collected from the matching lazy iterator, which
    /// yields the same sequence.
    pub fn traverse(&self, order: Order) -> Vec<&T> {
        if self.len > MAX_RECURSION_DEPTH {
            return match order {
                Order::Inorder => self.inorder().collect(),
                Order::Preorder => self.preorder().collect(),
                Order::Postorder => self.postorder().collect(),
            };
        }

        let mut out = Vec::with_capacity(self.len);
        self.root.walk(order, &mut out);
        out
    }

    /// Iterates over the values in ascending order.
    pub fn iter(&self) -> Inorder<'_, T> {
        self.inorder()
    }

    /// Removes every value from the tree.
    pub fn clear(&mut self) {
        // Detach children before each node is dropped, so the drop never recurses.
        let mut pending: Vec<Box<TreeNode<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
        self.len = 0;
    }
}

impl<T: Ord> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = BinarySearchTree::new();
        for item in iter {
            tree.insert(item);
        }
        tree
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Ord + Debug> Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinarySearchTree")
            .field("nodes", &self.root)
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Ord + Debug> Display for BinarySearchTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inorder()).finish()
    }
}
