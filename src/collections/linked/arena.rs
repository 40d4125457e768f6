use std::fmt::{self, Debug, Formatter};
use std::mem;
use std::ops::{Index, IndexMut};

/// The slot of a node inside an [`Arena`]. Only meaningful for the arena that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

pub(crate) type Link = Option<NodeId>;

enum Slot<N> {
    Occupied(N),
    Vacant { next_free: Option<usize> },
}

/// Backing storage for the nodes of one linked container.
///
/// The arena owns every node, so links between nodes are plain indices and a node can be
/// referenced from any number of places (a `prev` link, a `rear` pointer, the last node of a
/// circular list) without any of them owning it. Released slots are threaded onto a free list and
/// reused by the next allocation.
pub(crate) struct Arena<N> {
    slots: Vec<Slot<N>>,
    free: Option<usize>,
    len: usize,
}

impl<N> Arena<N> {
    pub const fn new() -> Arena<N> {
        Arena {
            slots: Vec::new(),
            free: None,
            len: 0,
        }
    }

    /// Returns the number of live nodes.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub fn alloc(&mut self, node: N) -> NodeId {
        self.len += 1;
        match self.free {
            Some(index) => {
                let slot = mem::replace(&mut self.slots[index], Slot::Occupied(node));
                self.free = match slot {
                    Slot::Vacant { next_free } => next_free,
                    Slot::Occupied(_) => unreachable!("free list points at an occupied slot"),
                };
                NodeId(index)
            },
            None => {
                self.slots.push(Slot::Occupied(node));
                NodeId(self.slots.len() - 1)
            },
        }
    }

    /// Removes the node from the arena and hands ownership of it back to the caller.
    pub fn release(&mut self, id: NodeId) -> N {
        let vacant = Slot::Vacant { next_free: self.free };
        match mem::replace(&mut self.slots[id.0], vacant) {
            Slot::Occupied(node) => {
                self.free = Some(id.0);
                self.len -= 1;
                node
            },
            Slot::Vacant { .. } => unreachable!("released a vacant node"),
        }
    }

    /// Returns mutable references to two distinct nodes at once.
    pub fn pair_mut(&mut self, a: NodeId, b: NodeId) -> (&mut N, &mut N) {
        assert_ne!(a, b, "pair_mut requires two distinct nodes");
        let (low, high, swapped) = if a.0 < b.0 { (a.0, b.0, false) } else { (b.0, a.0, true) };
        let (head, tail) = self.slots.split_at_mut(high);
        let pair = (Self::occupied_mut(&mut head[low]), Self::occupied_mut(&mut tail[0]));
        if swapped { (pair.1, pair.0) } else { pair }
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.len = 0;
    }

    fn occupied(slot: &Slot<N>) -> &N {
        match slot {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("link points at a released node"),
        }
    }

    fn occupied_mut(slot: &mut Slot<N>) -> &mut N {
        match slot {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("link points at a released node"),
        }
    }
}

impl<N> Index<NodeId> for Arena<N> {
    type Output = N;

    fn index(&self, id: NodeId) -> &Self::Output {
        Self::occupied(&self.slots[id.0])
    }
}

impl<N> IndexMut<NodeId> for Arena<N> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        Self::occupied_mut(&mut self.slots[id.0])
    }
}

impl<N> Default for Arena<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Debug for Arena<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arena")
            .field("slots", &self.slots.len())
            .field("len", &self.len)
            .finish()
    }
}
