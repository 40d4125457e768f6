//! A list with links in one direction, and its iterators.

use std::fmt::{self, Debug, Display, Formatter};
use std::iter::FusedIterator;

use tracing::debug;

use super::arena::{Arena, Link};
use super::node::{self, Found, Node};
use crate::util::error::{ContainerEmpty, KeyNotFound};

/// A list with links in one direction, owning only its head.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the list.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert_front/delete_front` | `O(1)` |
/// | `insert_back/delete_back` | `O(n)` |
/// | `search/delete/insert_after` | `O(n)` |
/// | `sort` | `O(n^2)` |
/// | `reverse` | `O(n)` |
///
/// No tail is cached, so both operations at the back walk the whole chain. Removing the last node
/// keeps a trailing pointer one step behind the lead so the new last node can be unlinked.
pub struct SinglyLinkedList<T> {
    pub(crate) nodes: Arena<Node<T>>,
    pub(crate) head: Link,
}

impl<T> SinglyLinkedList<T> {
    /// Creates a new list with no elements.
    pub const fn new() -> SinglyLinkedList<T> {
        SinglyLinkedList {
            nodes: Arena::new(),
            head: None,
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
    }

    /// Returns a reference to the first element, if it exists.
    pub fn front(&self) -> Option<&T> {
        self.head.map(|id| &self.nodes[id].value)
    }

    /// Returns a reference to the last element, if it exists.
    pub fn back(&self) -> Option<&T> {
        self.tail().map(|id| &self.nodes[id].value)
    }

    /// Adds the provided element to the front of the list.
    pub fn insert_front(&mut self, value: T) {
        self.head = Some(self.nodes.alloc(Node::new(value, self.head)));
    }

    /// Adds the provided element to the back of the list, walking to the current last node first.
    pub fn insert_back(&mut self, value: T) {
        let node = self.nodes.alloc(Node::new(value, None));
        match self.tail() {
            Some(tail) => self.nodes[tail].next = Some(node),
            None => self.head = Some(node),
        }
    }

    /// Removes the first element and returns it.
    pub fn delete_front(&mut self) -> Result<T, ContainerEmpty> {
        let head = self.head.ok_or(ContainerEmpty)?;
        let node = self.nodes.release(head);
        self.head = node.next;
        Ok(node.value)
    }

    /// Removes the last element and returns it.
    pub fn delete_back(&mut self) -> Result<T, ContainerEmpty> {
        let mut lead = self.head.ok_or(ContainerEmpty)?;
        let mut trail = None;
        while let Some(next) = self.nodes[lead].next {
            trail = Some(lead);
            lead = next;
        }

        match trail {
            Some(trail) => self.nodes[trail].next = None,
            None => self.head = None,
        }
        Ok(self.nodes.release(lead).value)
    }

    /// Reverses the order of the list in place by turning every link around.
    pub fn reverse(&mut self) {
        let mut prev = None;
        let mut curr = self.head;
        while let Some(id) = curr {
            curr = self.nodes[id].next;
            self.nodes[id].next = prev;
            prev = Some(id);
        }
        self.head = prev;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    fn tail(&self) -> Link {
        let mut curr = self.head?;
        while let Some(next) = self.nodes[curr].next {
            curr = next;
        }
        Some(curr)
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
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

    /// Removes the first element equal to `key` and returns it.
    ///
    /// Removing the head only moves the head. Removing any other node, including the last one,
    /// relinks its predecessor to whatever followed it.
    pub fn delete(&mut self, key: &T) -> Result<T, KeyNotFound> {
        let Found { trail, node } = self.find(key).ok_or_else(|| {
            debug!(len = self.len(), "delete rejected: key not in singly linked list");
            KeyNotFound
        })?;

        let removed = self.nodes.release(node);
        match trail {
            Some(trail) => self.nodes[trail].next = removed.next,
            None => self.head = removed.next,
        }
        Ok(removed.value)
    }

    /// Inserts `value` directly after the first element equal to `key`.
    pub fn insert_after(&mut self, key: &T, value: T) -> Result<(), KeyNotFound> {
        let Found { node, .. } = self.find(key).ok_or_else(|| {
            debug!(len = self.len(), "insert_after rejected: key not in singly linked list");
            KeyNotFound
        })?;

        let next = self.nodes[node].next;
        let inserted = self.nodes.alloc(Node::new(value, next));
        self.nodes[node].next = Some(inserted);
        Ok(())
    }

    fn find(&self, key: &T) -> Option<Found> {
        node::find(&self.nodes, self.head, self.len(), key)
    }
}

impl<T: Ord> SinglyLinkedList<T> {
    /// Sorts the list into ascending order with a bubble sort over the values.
    pub fn sort(&mut self) {
        let (head, len) = (self.head, self.len());
        node::bubble_sort(&mut self.nodes, head, len);
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SinglyLinkedList::new();
        for item in iter {
            list.insert_front(item);
        }
        list.reverse();
        list
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: Debug> Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinglyLinkedList")
            .field("contents", &self.iter().collect::<Vec<_>>())
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({})",
            self.iter()
                .map(|i| format!("{i:?}"))
                .collect::<Vec<String>>()
                .join(") -> (")
        )
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            nodes: &self.nodes,
            next: self.head,
            remaining: self.len(),
        }
    }
}

/// A borrowed iterator from the front of a [`SinglyLinkedList`] to its back.
pub struct Iter<'a, T> {
    pub(crate) nodes: &'a Arena<Node<T>>,
    pub(crate) next: Link,
    pub(crate) remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let node = &self.nodes[id];
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

impl<T> IntoIterator for SinglyLinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

/// An owned iterator that drains a [`SinglyLinkedList`] from the front.
pub struct IntoIter<T> {
    pub(crate) list: SinglyLinkedList<T>,
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
