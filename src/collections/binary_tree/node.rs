use std::cmp::{self, Ordering};
use std::fmt::{self, Debug, Formatter};
use std::ops::{Deref, DerefMut};

use derive_more::IsVariant;
use tracing::debug;

/// The three classical depth-first orders a tree can be walked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum Order {
    /// Left subtree, node, right subtree. Yields a search tree's values in ascending order.
    Inorder,
    /// Node, left subtree, right subtree.
    Preorder,
    /// Left subtree, right subtree, node.
    Postorder,
}

/// An optional, exclusively owned subtree. Every operation on a tree recurses through these.
pub(crate) struct Branch<T: Ord>(pub Option<Box<TreeNode<T>>>);

pub(crate) struct TreeNode<T: Ord> {
    pub left: Branch<T>,
    pub right: Branch<T>,
    pub value: T,
}

impl<T: Ord> TreeNode<T> {
    pub const fn leaf(value: T) -> TreeNode<T> {
        TreeNode {
            left: Branch(None),
            right: Branch(None),
            value,
        }
    }
}

impl<T: Ord> Branch<T> {
    /// Descends left for smaller values and right for everything else, then fills the first empty
    /// branch reached. Equal values therefore end up in the right subtree.
    pub fn insert(&mut self, value: T) {
        let mut branch = self;
        while let Branch(Some(node)) = branch {
            branch = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Equal | Ordering::Greater => &mut node.right,
            };
        }
        branch.0 = Some(Box::new(TreeNode::leaf(value)));
    }

    pub fn contains(&self, value: &T) -> bool {
        let mut branch = self;
        while let Some(node) = &branch.0 {
            branch = match value.cmp(&node.value) {
                Ordering::Less => &node.left,
                Ordering::Greater => &node.right,
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Removes the first node holding `value` found on the way down and returns its value.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let mut branch = self;
        loop {
            match value.cmp(&branch.0.as_ref()?.value) {
                Ordering::Equal => break,
                ordering => branch = branch.child_mut(ordering)?,
            }
        }

        let TreeNode { left, mut right, value } = *branch.0.take()?;
        *branch = match (left.is_some(), right.is_some()) {
            (false, _) => right,
            (true, false) => left,
            (true, true) => {
                debug!("removing node with two children, promoting in-order successor");
                match right.take_first() {
                    Some(successor) => Branch(Some(Box::new(TreeNode {
                        left,
                        right,
                        value: successor,
                    }))),
                    None => left,
                }
            },
        };
        Some(value)
    }

    /// Removes the smallest value in this subtree, splicing its right child into its place.
    pub fn take_first(&mut self) -> Option<T> {
        let mut branch = self;
        while branch.0.as_ref()?.left.is_some() {
            branch = &mut branch.0.as_mut()?.left;
        }

        let TreeNode { right, value, .. } = *branch.0.take()?;
        *branch = right;
        Some(value)
    }

    pub fn first(&self) -> Option<&T> {
        let mut node = self.0.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.value)
    }

    pub fn last(&self) -> Option<&T> {
        let mut node = self.0.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.value)
    }

    /// Returns the number of nodes on the longest path down from here, zero for an empty branch.
    pub fn levels(&self) -> usize {
        let mut deepest = 0;
        let mut pending: Vec<(&TreeNode<T>, usize)> =
            self.0.as_deref().map(|node| (node, 1)).into_iter().collect();
        while let Some((node, depth)) = pending.pop() {
            deepest = cmp::max(deepest, depth);
            pending.extend(node.left.as_deref().map(|left| (left, depth + 1)));
            pending.extend(node.right.as_deref().map(|right| (right, depth + 1)));
        }
        deepest
    }

    pub fn count(&self) -> usize {
        let mut count = 0;
        let mut pending: Vec<&TreeNode<T>> = self.0.as_deref().into_iter().collect();
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.left.as_deref());
            pending.extend(node.right.as_deref());
        }
        count
    }

    /// Appends the values of this subtree to `out` in the given order, recursing once per level.
    pub fn walk<'a>(&'a self, order: Order, out: &mut Vec<&'a T>) {
        let Some(node) = &self.0 else { return };

        if order.is_preorder() {
            out.push(&node.value);
        }
        node.left.walk(order, out);
        if order.is_inorder() {
            out.push(&node.value);
        }
        node.right.walk(order, out);
        if order.is_postorder() {
            out.push(&node.value);
        }
    }

    /// Steps into the left child for [`Ordering::Less`] and the right child otherwise.
    fn child_mut(&mut self, ordering: Ordering) -> Option<&mut Branch<T>> {
        let node = self.0.as_mut()?;
        Some(match ordering {
            Ordering::Less => &mut node.left,
            Ordering::Equal | Ordering::Greater => &mut node.right,
        })
    }
}

impl<T: Ord> Deref for Branch<T> {
    type Target = Option<Box<TreeNode<T>>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T: Ord> DerefMut for Branch<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T: Ord + Debug> Debug for Branch<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(node) => write!(
                f,
                "{}\n({:?})\n{}",
                format!("{:?}", node.left)
                    .lines()
                    .map(|l| String::from("┌    ") + l)
                    .collect::<Vec<_>>()
                    .join("\n"),
                node.value,
                format!("{:?}", node.right)
                    .lines()
                    .map(|l| String::from("└    ") + l)
                    .collect::<Vec<_>>()
                    .join("\n")
            ),
            None => write!(f, "-"),
        }
    }
}
