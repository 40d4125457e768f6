//! A list with links in both directions, and its iterators.

use std::fmt::{self, Debug, Display, Formatter};
use std::iter::{FusedIterator, Rev};

use tracing::debug;

use super::arena::{Arena, Link, NodeId};
use super::node::{self, DNode, Found};
use crate::util::error::{ContainerEmpty, KeyNotFound};

/// A list with links in both directions.
///
/// Every node's `prev` link mirrors the `next` link of the node before it, so for any two adjacent
/// nodes `a.next == b` exactly when `b.prev == a`. All operations here maintain both sides of that
/// pair together.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert_front/back` | `O(1)` |
/// | `delete_front/back` | `O(1)` |
/// | `search/delete/insert_after` | `O(n)` |
/// | `sort` | `O(n^2)` |
pub struct DoublyLinkedList<T> {
    pub(crate) nodes: Arena<DNode<T>>,
    pub(crate) head: Link,
    pub(crate) tail: Link,
}

impl<T> DoublyLinkedList<T> {
    /// Creates a new list with no elements.
    pub const fn new() -> DoublyLinkedList<T> {
        DoublyLinkedList {
            nodes: Arena::new(),
            head: None,
            tail: None,
        }
    }

    /// Returns the number of elements in the list.
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the list contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Removes every element from the list.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    /// Returns a reference to the first element, if it exists.
    pub fn front(&self) -> Option<&T> {
        self.head.map(|id| &self.nodes[id].value)
    }

    /// Returns a reference to the last element, if it exists.
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|id| &self.nodes[id].value)
    }

    /// Adds the provided element to the front of the list.
    pub fn insert_front(&mut self, value: T) {
        let node = self.nodes.alloc(DNode::new(value, None, self.head));
        match self.head {
            Some(head) => self.nodes[head].prev = Some(node),
            None => self.tail = Some(node),
        }
        self.head = Some(node);
    }

    /// Adds the provided element to the back of the list.
    pub fn insert_back(&mut self, value: T) {
        let node = self.nodes.alloc(DNode::new(value, self.tail, None));
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(node),
            None => self.head = Some(node),
        }
        self.tail = Some(node);
    }

    /// Removes the first element and returns it.
    pub fn delete_front(&mut self) -> Result<T, ContainerEmpty> {
        let head = self.head.ok_or(ContainerEmpty)?;
        Ok(self.unlink(head))
    }

    /// Removes the last element and returns it.
    pub fn delete_back(&mut self) -> Result<T, ContainerEmpty> {
        let tail = self.tail.ok_or(ContainerEmpty)?;
        Ok(self.unlink(tail))
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Walks the list from back to front by following `prev` links.
    pub fn reverse_iter(&self) -> Rev<Iter<'_, T>> {
        self.iter().rev()
    }

    /// Checks that every `next` link is mirrored by a `prev` link, that the head has no
    /// predecessor and that walking forward ends at the tail after exactly `len` nodes.
    pub fn verify_links(&self) -> bool {
        let Some(head) = self.head else {
            return self.tail.is_none() && self.len() == 0;
        };
        if self.nodes[head].prev.is_some() {
            return false;
        }

        let mut curr = head;
        let mut count = 1;
        while let Some(next) = self.nodes[curr].next {
            if self.nodes[next].prev != Some(curr) {
                return false;
            }
            curr = next;
            count += 1;
        }
        self.tail == Some(curr) && count == self.len()
    }

    /// Detaches a node from its neighbours, joining them to each other, and returns its value.
    fn unlink(&mut self, id: NodeId) -> T {
        let DNode { value, prev, next } = self.nodes.release(id);
        match prev {
            Some(prev) => self.nodes[prev].next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.nodes[next].prev = prev,
            None => self.tail = prev,
        }
        value
    }
}

impl<T: PartialEq> DoublyLinkedList<T> {
    /// Returns true if any element of the list equals `key`.
    pub fn search(&self, key: &T) -> bool {
        self.find(key).is_some()
    }

    pub fn contains(&self, key: &T) -> bool {
        self.search(key)
    }

    /// Returns the position of the first element equal to `key`.
    pub fn index_of(&self, key: &T) -> Option<usize> {
        self.iter().position(|value| value == key)
    }

    /// Removes the first element equal to `key` and returns it. The first, middle and last cases
    /// differ only in which side falls back to the head or tail.
    pub fn delete(&mut self, key: &T) -> Result<T, KeyNotFound> {
        let Found { node, .. } = self.find(key).ok_or_else(|| {
            debug!(len = self.len(), "delete rejected: key not in doubly linked list");
            KeyNotFound
        })?;
        Ok(self.unlink(node))
    }

    /// Inserts `value` directly after the first element equal to `key`.
    pub fn insert_after(&mut self, key: &T, value: T) -> Result<(), KeyNotFound> {
        let Found { node, .. } = self.find(key).ok_or_else(|| {
            debug!(len = self.len(), "insert_after rejected: key not in doubly linked list");
            KeyNotFound
        })?;

        let next = self.nodes[node].next;
        let inserted = self.nodes.alloc(DNode::new(value, Some(node), next));
        self.nodes[node].next = Some(inserted);
        match next {
            Some(next) => self.nodes[next].prev = Some(inserted),
            None => self.tail = Some(inserted),
        }
        Ok(())
    }

    fn find(&self, key: &T) -> Option<Found> {
        node::find(&self.nodes, self.head, self.len(), key)
    }
}

impl<T: Ord> DoublyLinkedList<T> {
    /// Sorts the list into ascending order with a bubble sort over the values.
    pub fn sort(&mut self) {
        let (head, len) = (self.head, self.len());
        node::bubble_sort(&mut self.nodes, head, len);
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DoublyLinkedList::new();
        for item in iter {
            list.insert_back(item);
        }
        list
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: Debug> Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DoublyLinkedList")
            .field("contents", &self.iter().collect::<Vec<_>>())
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({})",
            self.iter()
                .map(|i| format!("{i:?}"))
                .collect::<Vec<String>>()
                .join(") <-> (")
        )
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            nodes: &self.nodes,
            front: self.head,
            back: self.tail,
            remaining: self.len(),
        }
    }
}

/// A borrowed, double-ended iterator over a [`DoublyLinkedList`].
pub struct Iter<'a, T> {
    // The remaining count decides when the two ends have met, the links are never compared.
    pub(crate) nodes: &'a Arena<DNode<T>>,
    pub(crate) front: Link,
    pub(crate) back: Link,
    pub(crate) remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.nodes[self.front?];
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.nodes[self.back?];
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { ..*self }
    }
}

impl<T> IntoIterator for DoublyLinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

/// An owned iterator that drains a [`DoublyLinkedList`] from either end.
pub struct IntoIter<T> {
    pub(crate) list: DoublyLinkedList<T>,
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

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.delete_back().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
