use std::fmt::{self, Debug, Formatter};

use tracing::debug;

use super::{Iter, Slots};
use crate::util::error::{CapacityExceeded, ContainerEmpty, InvalidCapacity};

/// A fixed-capacity queue that always dequeues its largest element.
///
/// The occupied slots are kept in descending order: every enqueue writes at the rear and then
/// selection sorts the whole occupied range, so the front slot always holds the maximum. That makes
/// enqueue `O(n^2)` and dequeue `O(n)` (the remaining values shift forward). Equal values come out
/// in an unspecified order.
pub struct PriorityQueue<T: Ord> {
    pub(crate) slots: Slots<T>,
    pub(crate) len: usize,
}

impl<T: Ord> PriorityQueue<T> {
    /// Creates an empty queue with `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Result<PriorityQueue<T>, InvalidCapacity> {
        Ok(PriorityQueue {
            slots: Slots::with_capacity(capacity)?,
            len: 0,
        })
    }

    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Adds `value` and restores the descending order of the occupied slots.
    pub fn enqueue(&mut self, value: T) -> Result<(), CapacityExceeded> {
        if self.is_full() {
            debug!(capacity = self.capacity(), "enqueue rejected: priority queue is full");
            return Err(CapacityExceeded { capacity: self.capacity() });
        }

        self.slots.write(self.len, value);
        self.len += 1;
        self.sort_descending();
        Ok(())
    }

    /// Removes the largest value and returns it.
    pub fn dequeue(&mut self) -> Result<T, ContainerEmpty> {
        if self.is_empty() {
            return Err(ContainerEmpty);
        }

        let value = self.slots.read(0).ok_or(ContainerEmpty)?;
        // The emptied front slot rotates to the end of the occupied range.
        self.slots[..self.len].rotate_left(1);
        self.len -= 1;
        Ok(value)
    }

    /// Returns the largest value without removing it.
    pub fn peek(&self) -> Result<&T, ContainerEmpty> {
        if self.is_empty() {
            return Err(ContainerEmpty);
        }
        self.slots.get(0).ok_or(ContainerEmpty)
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.len = 0;
    }

    /// Iterates from the largest value to the smallest.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    fn sort_descending(&mut self) {
        let occupied = &mut self.slots[..self.len];
        for i in 0..occupied.len() {
            let mut max = i;
            for j in i + 1..occupied.len() {
                if occupied[j] > occupied[max] {
                    max = j;
                }
            }
            occupied.swap(i, max);
        }
    }
}

impl<'a, T: Ord> IntoIterator for &'a PriorityQueue<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter { slots: &self.slots[..self.len] }
    }
}

impl<T: Ord + Debug> Debug for PriorityQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("contents", &self.iter().collect::<Vec<_>>())
            .field("capacity", &self.capacity())
            .finish()
    }
}
