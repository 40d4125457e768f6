use std::fmt::{self, Debug, Formatter};
use std::iter::Rev;

use tracing::debug;

use super::{Iter, Slots};
use crate::util::error::{CapacityExceeded, ContainerEmpty, InvalidCapacity};

/// A last-in-first-out stack backed by a fixed number of slots.
///
/// The top of the stack is an index into the slots, or [`None`] when the stack is empty. Pushing
/// advances the index and then writes, popping reads and then retreats, so "empty" and "one
/// element in the first slot" are never confused.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `push/pop/peek` | `O(1)` |
/// | `is_empty/is_full` | `O(1)` |
/// | `iter` | `O(n)` |
pub struct ArrayStack<T> {
    pub(crate) slots: Slots<T>,
    pub(crate) top: Option<usize>,
}

impl<T> ArrayStack<T> {
    /// Creates an empty stack that can hold up to `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Result<ArrayStack<T>, InvalidCapacity> {
        Ok(ArrayStack {
            slots: Slots::with_capacity(capacity)?,
            top: None,
        })
    }

    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub fn len(&self) -> usize {
        self.top.map_or(0, |top| top + 1)
    }

    pub const fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    pub fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    /// Places `value` on top of the stack, failing if every slot is taken.
    pub fn push(&mut self, value: T) -> Result<(), CapacityExceeded> {
        if self.is_full() {
            debug!(capacity = self.capacity(), "push rejected: array stack is full");
            return Err(CapacityExceeded { capacity: self.capacity() });
        }

        let top = self.top.map_or(0, |top| top + 1);
        self.slots.write(top, value);
        self.top = Some(top);
        Ok(())
    }

    /// Removes the top value and returns it.
    pub fn pop(&mut self) -> Result<T, ContainerEmpty> {
        let top = self.top.ok_or(ContainerEmpty)?;
        let value = self.slots.read(top).ok_or(ContainerEmpty)?;
        self.top = top.checked_sub(1);
        Ok(value)
    }

    /// Returns the top value without removing it.
    pub fn peek(&self) -> Result<&T, ContainerEmpty> {
        self.top
            .and_then(|top| self.slots.get(top))
            .ok_or(ContainerEmpty)
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.top = None;
    }

    /// Iterates from the top of the stack to the bottom, most recent first.
    pub fn iter(&self) -> Rev<Iter<'_, T>> {
        self.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ArrayStack<T> {
    type Item = &'a T;

    type IntoIter = Rev<Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        Iter { slots: &self.slots[..self.len()] }.rev()
    }
}

impl<T: Debug> Debug for ArrayStack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayStack")
            .field("top_down", &self.iter().collect::<Vec<_>>())
            .field("capacity", &self.capacity())
            .finish()
    }
}
