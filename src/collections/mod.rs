//! The container types, grouped by how they store their elements.
//!
//! # Purpose
//! The families deliberately overlap: [`array::ArrayStack`] and [`dynamic::LinkedStack`] have the
//! same contract, as do the array and linked queues, so the cost of a fixed capacity can be seen
//! side by side with the cost of allocating per element.
//!
//! # Errors
//! All error types live here and are shared across the families. See [`ContainerError`] for the
//! union of them.

#[cfg(feature = "array")]
pub mod array;
#[cfg(feature = "binary-tree")]
pub mod binary_tree;
#[cfg(feature = "dynamic")]
pub mod dynamic;
#[cfg(feature = "graph")]
pub mod graph;
#[cfg(feature = "linked")]
pub mod linked;

#[doc(inline)]
pub use crate::util::error::{
    CapacityExceeded, ContainerEmpty, ContainerError, IndexOutOfBounds, InvalidArgument,
    InvalidCapacity, KeyNotFound, MalformedMatrix, SelfLoop,
};
