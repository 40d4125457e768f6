//! A singly linked list whose last node links back to the first, and its iterators.

use std::fmt::{self, Debug, Display, Formatter};
use std::iter::FusedIterator;

use tracing::debug;

use super::arena::{Arena, Link, NodeId};
use super::node::{self, Found, Node};
use crate::util::error::{ContainerEmpty, KeyNotFound};

/// A singly linked list with no end: the last node's successor is the first node.
///
/// Only the last node is held. The first node is always one step after it, which makes both
/// `insert_front` and `insert_back` `O(1)`. The cycle exists only as indices inside the list's own
/// arena, so nothing in it owns anything else.
///
/// Walking the list never looks for an empty link. It starts at the head, always yields that first
/// node, and stops once the next step would arrive back at the head, so a list of one node yields
/// exactly one value.
pub struct CircularList<T> {
    pub(crate) nodes: Arena<Node<T>>,
    pub(crate) tail: Link,
}

impl<T> CircularList<T> {
    /// Creates a new list with no elements.
    pub const fn new() -> CircularList<T> {
        CircularList {
            nodes: Arena::new(),
            tail: None,
        }
    }

    /// Returns the number of elements in the list.
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the list contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.tail.is_none()
    }

    /// Removes every element from the list.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.tail = None;
    }

    /// Returns a reference to the first element, if it exists.
    pub fn front(&self) -> Option<&T> {
        self.head().map(|id| &self.nodes[id].value)
    }

    /// Returns a reference to the last element, if it exists.
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|id| &self.nodes[id].value)
    }

    /// Adds the provided element before the current first element.
    pub fn insert_front(&mut self, value: T) {
        self.link_after_tail(value);
    }

    /// Adds the provided element after the current last element.
    pub fn insert_back(&mut self, value: T) {
        self.tail = Some(self.link_after_tail(value));
    }

    /// Removes the first element and returns it.
    pub fn delete_front(&mut self) -> Result<T, ContainerEmpty> {
        let tail = self.tail.ok_or(ContainerEmpty)?;
        let head = self.successor(tail);
        if head == tail {
            self.tail = None;
        } else {
            self.nodes[tail].next = Some(self.successor(head));
        }
        Ok(self.nodes.release(head).value)
    }

    /// Removes the last element and returns it. The node before it is found by walking from the
    /// head with a trailing pointer, then linked back around to the head.
    pub fn delete_back(&mut self) -> Result<T, ContainerEmpty> {
        let tail = self.tail.ok_or(ContainerEmpty)?;
        let head = self.successor(tail);
        if head == tail {
            self.tail = None;
        } else {
            let mut trail = head;
            while self.successor(trail) != tail {
                trail = self.successor(trail);
            }
            self.nodes[trail].next = Some(head);
            self.tail = Some(trail);
        }
        Ok(self.nodes.release(tail).value)
    }

    /// Moves the head one step forward, so the current first element becomes the last.
    pub fn rotate(&mut self) {
        self.tail = self.head();
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    fn head(&self) -> Link {
        self.tail.map(|tail| self.successor(tail))
    }

    fn successor(&self, id: NodeId) -> NodeId {
        match self.nodes[id].next {
            Some(next) => next,
            None => unreachable!("circular list node without a successor"),
        }
    }

    /// Links a new node between the tail and the head, returning it. With no tail the node becomes
    /// a cycle of one.
    fn link_after_tail(&mut self, value: T) -> NodeId {
        let node = self.nodes.alloc(Node::new(value, None));
        match self.tail {
            Some(tail) => {
                self.nodes[node].next = Some(self.successor(tail));
                self.nodes[tail].next = Some(node);
            },
            None => {
                self.nodes[node].next = Some(node);
                self.tail = Some(node);
            },
        }
        node
    }
}

impl<T: PartialEq> CircularList<T> {
    /// Returns true if any element of the list equals `key`.
    pub fn search(&self, key: &T) -> bool {
        self.find(key).is_some()
    }

    pub fn contains(&self, key: &T) -> bool {
        self.search(key)
    }

    /// Removes the first element (counting from the head) equal to `key` and returns it.
    pub fn delete(&mut self, key: &T) -> Result<T, KeyNotFound> {
        let Found { trail, node } = self.find(key).ok_or_else(|| {
            debug!(len = self.len(), "delete rejected: key not in circular list");
            KeyNotFound
        })?;

        match trail {
            // The head's predecessor is the tail.
            None => self.delete_front().map_err(|_| KeyNotFound),
            Some(trail) => {
                self.nodes[trail].next = Some(self.successor(node));
                if self.tail == Some(node) {
                    self.tail = Some(trail);
                }
                Ok(self.nodes.release(node).value)
            },
        }
    }

    /// Inserts `value` directly after the first element equal to `key`. Inserting after the last
    /// element makes the new node the last.
    pub fn insert_after(&mut self, key: &T, value: T) -> Result<(), KeyNotFound> {
        let Found { node, .. } = self.find(key).ok_or_else(|| {
            debug!(len = self.len(), "insert_after rejected: key not in circular list");
            KeyNotFound
        })?;

        let next = self.successor(node);
        let inserted = self.nodes.alloc(Node::new(value, Some(next)));
        self.nodes[node].next = Some(inserted);
        if self.tail == Some(node) {
            self.tail = Some(inserted);
        }
        Ok(())
    }

    fn find(&self, key: &T) -> Option<Found> {
        node::find(&self.nodes, self.head(), self.len(), key)
    }
}

impl<T: Ord> CircularList<T> {
    /// Sorts the list into ascending order from the head, with a bubble sort over the values.
    pub fn sort(&mut self) {
        let (head, len) = (self.head(), self.len());
        node::bubble_sort(&mut self.nodes, head, len);
    }
}

impl<T> Default for CircularList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for CircularList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = CircularList::new();
        for item in iter {
            list.insert_back(item);
        }
        list
    }
}

impl<T: PartialEq> PartialEq for CircularList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for CircularList<T> {}

impl<T: Debug> Debug for CircularList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircularList")
            .field("contents", &self.iter().collect::<Vec<_>>())
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for CircularList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "()");
        }
        write!(
            f,
            "({}) -> ...",
            self.iter()
                .map(|i| format!("{i:?}"))
                .collect::<Vec<String>>()
                .join(") -> (")
        )
    }
}

impl<'a, T> IntoIterator for &'a CircularList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        let head = self.head();
        Iter {
            nodes: &self.nodes,
            head,
            curr: head,
        }
    }
}

/// A borrowed iterator over one lap of a [`CircularList`], starting at the head.
pub struct Iter<'a, T> {
    pub(crate) nodes: &'a Arena<Node<T>>,
    pub(crate) head: Link,
    pub(crate) curr: Link,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.nodes[self.curr?];
        // Yield first, then check whether the next step closes the lap.
        self.curr = node.next.filter(|next| Some(*next) != self.head);
        Some(&node.value)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { ..*self }
    }
}

impl<T> IntoIterator for CircularList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

/// An owned iterator that drains a [`CircularList`] from the head.
pub struct IntoIter<T> {
    pub(crate) list: CircularList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.delete_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
