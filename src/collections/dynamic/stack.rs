use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;

use crate::util::error::ContainerEmpty;

type Link<T> = Option<Box<StackNode<T>>>;

struct StackNode<T> {
    value: T,
    next: Link<T>,
}

/// A last-in-first-out stack with no capacity limit. Each element is its own heap node, linked to
/// the one pushed before it, and the stack owns only the most recent.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `push/pop/peek` | `O(1)` |
/// | `iter` | `O(n)` |
pub struct LinkedStack<T> {
    head: Link<T>,
    len: usize,
}

impl<T> LinkedStack<T> {
    /// Creates a new stack with no elements.
    pub const fn new() -> LinkedStack<T> {
        LinkedStack { head: None, len: 0 }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Places `value` on top of the stack as the new head node.
    pub fn push(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(StackNode { value, next }));
        self.len += 1;
    }

    /// Removes the top value and returns it, promoting the node beneath it to the head.
    pub fn pop(&mut self) -> Result<T, ContainerEmpty> {
        let node = self.head.take().ok_or(ContainerEmpty)?;
        let StackNode { value, next } = *node;
        self.head = next;
        self.len -= 1;
        Ok(value)
    }

    /// Returns the top value without removing it.
    pub fn peek(&self) -> Result<&T, ContainerEmpty> {
        self.head.as_ref().map(|node| &node.value).ok_or(ContainerEmpty)
    }

    pub fn clear(&mut self) {
        // Unlinking one node at a time keeps the drop from recursing down the whole chain.
        let mut curr = self.head.take();
        while let Some(mut node) = curr {
            curr = node.next.take();
        }
        self.len = 0;
    }

    /// Iterates from the top of the stack to the bottom.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedStack<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> FromIterator<T> for LinkedStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = LinkedStack::new();
        for item in iter {
            stack.push(item);
        }
        stack
    }
}

impl<T: Debug> Debug for LinkedStack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedStack")
            .field("top_down", &self.iter().collect::<Vec<_>>())
            .field("len", &self.len)
            .finish()
    }
}

impl<'a, T> IntoIterator for &'a LinkedStack<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }
}

/// A borrowed iterator over a [`LinkedStack`], top first.
pub struct Iter<'a, T> {
    next: Option<&'a StackNode<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { ..*self }
    }
}

impl<T> IntoIterator for LinkedStack<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { stack: self }
    }
}

/// An owned iterator that pops a [`LinkedStack`] until it is empty.
pub struct IntoIter<T> {
    stack: LinkedStack<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.stack.pop().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), Some(self.stack.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
