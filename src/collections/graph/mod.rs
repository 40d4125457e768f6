//! A module containing [`Graph`], an adjacency-matrix graph, and its depth-first and breadth-first
//! traversals.
//!
//! Traversals never store state on the graph. Each call allocates its own visited set and frontier
//! (a [`LinkedStack`](crate::collections::dynamic::LinkedStack) or
//! [`LinkedQueue`](crate::collections::dynamic::LinkedQueue)), so a graph can be traversed through
//! a shared reference. Neighbours are always considered in ascending vertex order, which makes the
//! visiting order of every traversal fully determined.

mod graph;
mod tests;
mod traversal;
mod visited;

pub use graph::*;
pub use traversal::*;
pub(crate) use visited::*;
