use std::mem;

use super::arena::{Arena, Link, NodeId};

/// A node with a single forward link, shared by the singly linked and circular lists and the
/// linked queue.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link,
}

/// A node linked in both directions. `prev` is purely navigational, the arena owns the node.
#[derive(Debug)]
pub(crate) struct DNode<T> {
    pub value: T,
    pub prev: Link,
    pub next: Link,
}

impl<T> Node<T> {
    pub const fn new(value: T, next: Link) -> Node<T> {
        Node { value, next }
    }
}

impl<T> DNode<T> {
    pub const fn new(value: T, prev: Link, next: Link) -> DNode<T> {
        DNode { value, prev, next }
    }
}

/// The forward half of a node, which is all that searching and sorting need.
pub(crate) trait Linked {
    type Value;

    fn value(&self) -> &Self::Value;

    fn value_mut(&mut self) -> &mut Self::Value;

    fn next(&self) -> Link;
}

impl<T> Linked for Node<T> {
    type Value = T;

    fn value(&self) -> &T {
        &self.value
    }

    fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    fn next(&self) -> Link {
        self.next
    }
}

impl<T> Linked for DNode<T> {
    type Value = T;

    fn value(&self) -> &T {
        &self.value
    }

    fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    fn next(&self) -> Link {
        self.next
    }
}

/// A node found by [`find`], along with the node that links to it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Found {
    pub trail: Link,
    pub node: NodeId,
}

/// Walks at most `len` nodes from `head` looking for `key`, keeping a trailing pointer one node
/// behind. The step bound makes this safe on circular chains too.
pub(crate) fn find<N>(nodes: &Arena<N>, head: Link, len: usize, key: &N::Value) -> Option<Found>
where
    N: Linked,
    N::Value: PartialEq,
{
    let mut trail = None;
    let mut curr = head;
    for _ in 0..len {
        let id = curr?;
        if nodes[id].value() == key {
            return Some(Found { trail, node: id });
        }
        trail = Some(id);
        curr = nodes[id].next();
    }
    None
}

/// Bubble sorts the first `len` values reachable from `head` into ascending order. Values are
/// swapped between nodes, the links themselves are never touched.
pub(crate) fn bubble_sort<N>(nodes: &mut Arena<N>, head: Link, len: usize)
where
    N: Linked,
    N::Value: Ord,
{
    let Some(head) = head else { return };

    for pass in 1..len {
        let mut swapped = false;
        let mut curr = head;
        for _ in 0..len - pass {
            let Some(next) = nodes[curr].next() else { break };
            let (a, b) = nodes.pair_mut(curr, next);
            if a.value() > b.value() {
                mem::swap(a.value_mut(), b.value_mut());
                swapped = true;
            }
            curr = next;
        }
        if !swapped {
            break;
        }
    }
}
