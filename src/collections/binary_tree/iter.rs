use std::iter::FusedIterator;

use super::{BinarySearchTree, TreeNode};

// Each iterator keeps its own stack of pending nodes, none of them recurse.

/// A borrowed iterator over a [`BinarySearchTree`] in ascending order.
pub struct Inorder<'a, T: Ord> {
    pub(crate) stack: Vec<&'a TreeNode<T>>,
}

impl<'a, T: Ord> Inorder<'a, T> {
    pub(crate) fn new(root: Option<&'a TreeNode<T>>) -> Inorder<'a, T> {
        let mut iter = Inorder { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a TreeNode<T>>) {
        while let Some(curr) = node {
            self.stack.push(curr);
            node = curr.left.as_deref();
        }
    }
}

impl<'a, T: Ord> Iterator for Inorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.value)
    }
}

impl<T: Ord> FusedIterator for Inorder<'_, T> {}

/// A borrowed iterator over a [`BinarySearchTree`], each node before its subtrees.
pub struct Preorder<'a, T: Ord> {
    pub(crate) stack: Vec<&'a TreeNode<T>>,
}

impl<'a, T: Ord> Preorder<'a, T> {
    pub(crate) fn new(root: Option<&'a TreeNode<T>>) -> Preorder<'a, T> {
        Preorder { stack: root.into_iter().collect() }
    }
}

impl<'a, T: Ord> Iterator for Preorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on first so that the left subtree is finished before it.
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        Some(&node.value)
    }
}

impl<T: Ord> FusedIterator for Preorder<'_, T> {}

/// A borrowed iterator over a [`BinarySearchTree`], each node after its subtrees.
pub struct Postorder<'a, T: Ord> {
    // The flag records whether a node's children have already been pushed.
    pub(crate) stack: Vec<(&'a TreeNode<T>, bool)>,
}

impl<'a, T: Ord> Postorder<'a, T> {
    pub(crate) fn new(root: Option<&'a TreeNode<T>>) -> Postorder<'a, T> {
        Postorder { stack: root.map(|node| (node, false)).into_iter().collect() }
    }
}

impl<'a, T: Ord> Iterator for Postorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(&node.value);
            }
            self.stack.push((node, true));
            self.stack.extend(node.right.as_deref().map(|right| (right, false)));
            self.stack.extend(node.left.as_deref().map(|left| (left, false)));
        }
    }
}

impl<T: Ord> FusedIterator for Postorder<'_, T> {}

impl<'a, T: Ord> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;

    type IntoIter = Inorder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inorder()
    }
}
