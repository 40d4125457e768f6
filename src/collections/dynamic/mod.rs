//! Unbounded, linked counterparts of the array containers: [`LinkedStack`] and [`LinkedQueue`].
//!
//! Neither has a capacity, so insertion never fails. Removal from an empty container is still an
//! error.

pub mod queue;
pub mod stack;


#[doc(inline)]
pub use queue::LinkedQueue;
#[doc(inline)]
pub use stack::LinkedStack;
