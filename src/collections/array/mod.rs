//! Containers backed by a fixed number of slots: [`ArrayStack`], [`LinearQueue`],
//! [`CircularQueue`] and [`PriorityQueue`].
//!
//! The capacity of each is chosen at construction, must be greater than zero and never changes.
//! Inserting into a full container is an error rather than a reallocation; the
//! [`dynamic`](crate::collections::dynamic) containers are the unbounded alternative.

mod circular_queue;
mod iter;
mod linear_queue;
mod priority_queue;
mod slots;
mod stack;

pub use circular_queue::*;
pub use iter::*;
pub use linear_queue::*;
pub use priority_queue::*;
pub(crate) use slots::*;
pub use stack::*;
