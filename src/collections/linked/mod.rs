//! Linked list types: [`SinglyLinkedList`], [`DoublyLinkedList`] and [`CircularList`].
//!
//! All three keep their nodes in an arena owned by the list, with links stored as slot indices.
//! Removing a node hands it back out of the arena, so a node lives exactly from the call that
//! inserted it to the call that removed it, or until the list is dropped.
//!
//! Each list type is re-exported here; their iterators live in the submodules.

pub(crate) mod arena;
pub(crate) mod node;

pub mod circular;
pub mod doubly;
pub mod singly;

mod tests;

#[doc(inline)]
pub use circular::CircularList;
#[doc(inline)]
pub use doubly::DoublyLinkedList;
#[doc(inline)]
pub use singly::SinglyLinkedList;
