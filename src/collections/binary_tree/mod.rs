//! A module containing [`BinarySearchTree`] and its traversal iterators.
//!
//! The tree owns its root, and each node owns its two children through a [`Box`]. Insertion,
//! search and removal walk down a single path with a cursor, and the aggregate queries and lazy
//! traversals ([`Inorder`], [`Preorder`], [`Postorder`]) keep an explicit stack of pending nodes,
//! so tree depth never turns into call-stack depth.

mod iter;
mod node;
mod tests;
mod tree;

pub use iter::*;
pub(crate) use node::{Branch, TreeNode};
pub use node::Order;
pub use tree::*;
