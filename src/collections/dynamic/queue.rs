use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;

use tracing::trace;

use crate::collections::linked::arena::{Arena, Link};
use crate::collections::linked::node::Node;
use crate::util::error::ContainerEmpty;

/// A first-in-first-out queue with no capacity limit.
///
/// Nodes live in an arena owned by the queue. `front` is where values leave and `rear` is where
/// they join; both are only indices, so the queue can point at its last node without owning it
/// twice. Whenever the last value leaves, `rear` is cleared along with `front`, so it never points
/// at a released node.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `enqueue/dequeue/peek` | `O(1)` |
/// | `iter` | `O(n)` |
pub struct LinkedQueue<T> {
    nodes: Arena<Node<T>>,
    front: Link,
    rear: Link,
}

impl<T> LinkedQueue<T> {
    /// Creates a new queue with no elements.
    pub const fn new() -> LinkedQueue<T> {
        LinkedQueue {
            nodes: Arena::new(),
            front: None,
            rear: None,
        }
    }

    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.front.is_none()
    }

    /// Links `value` after the current rear and makes it the new rear.
    pub fn enqueue(&mut self, value: T) {
        let node = self.nodes.alloc(Node::new(value, None));
        match self.rear {
            Some(rear) => self.nodes[rear].next = Some(node),
            None => self.front = Some(node),
        }
        self.rear = Some(node);
    }

    /// Removes the oldest value and returns it.
    pub fn dequeue(&mut self) -> Result<T, ContainerEmpty> {
        let front = self.front.ok_or(ContainerEmpty)?;
        let node = self.nodes.release(front);
        self.front = node.next;
        if self.front.is_none() {
            trace!("linked queue drained, clearing rear");
            self.rear = None;
        }
        Ok(node.value)
    }

    /// Returns the oldest value without removing it.
    pub fn peek(&self) -> Result<&T, ContainerEmpty> {
        self.front.map(|id| &self.nodes[id].value).ok_or(ContainerEmpty)
    }

    /// Returns the newest value without removing it.
    pub fn peek_rear(&self) -> Result<&T, ContainerEmpty> {
        self.rear.map(|id| &self.nodes[id].value).ok_or(ContainerEmpty)
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.front = None;
        self.rear = None;
    }

    /// Iterates from the oldest value to the newest.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for LinkedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = LinkedQueue::new();
        for item in iter {
            queue.enqueue(item);
        }
        queue
    }
}

impl<T: Debug> Debug for LinkedQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedQueue")
            .field("contents", &self.iter().collect::<Vec<_>>())
            .field("len", &self.len())
            .finish()
    }
}

impl<'a, T> IntoIterator for &'a LinkedQueue<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            nodes: &self.nodes,
            next: self.front,
            remaining: self.len(),
        }
    }
}

/// A borrowed iterator over a [`LinkedQueue`], oldest first.
pub struct Iter<'a, T> {
    nodes: &'a Arena<Node<T>>,
    next: Link,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.nodes[self.next?];
        self.next = node.next;
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

impl<T> IntoIterator for LinkedQueue<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { queue: self }
    }
}

/// An owned iterator that dequeues a [`LinkedQueue`] until it is empty.
pub struct IntoIter<T> {
    queue: LinkedQueue<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.dequeue().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
