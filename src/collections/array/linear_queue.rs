use std::fmt::{self, Debug, Formatter};

use tracing::debug;

use super::{Iter, Slots};
use crate::util::error::{CapacityExceeded, ContainerEmpty, InvalidCapacity};

/// A first-in-first-out queue backed by a fixed number of slots that are used exactly once.
///
/// `rear` is the last slot written, or [`None`] before the first enqueue. `front` is the next slot
/// to read. The queue is empty when `front` has moved past `rear` and full when `rear` reaches the
/// last slot.
///
/// # Limitations
/// Indices only ever move forward. Once an element has been dequeued its slot is never written
/// again, so a queue can report itself full while holding fewer than `capacity` elements, and once
/// every slot has been consumed it is both empty and full until [`clear`](LinearQueue::clear) is
/// called. [`CircularQueue`](super::CircularQueue) is the fix for this.
pub struct LinearQueue<T> {
    pub(crate) slots: Slots<T>,
    pub(crate) front: usize,
    pub(crate) rear: Option<usize>,
}

impl<T> LinearQueue<T> {
    /// Creates an empty queue with `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Result<LinearQueue<T>, InvalidCapacity> {
        Ok(LinearQueue {
            slots: Slots::with_capacity(capacity)?,
            front: 0,
            rear: None,
        })
    }

    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub fn len(&self) -> usize {
        self.rear.map_or(0, |rear| (rear + 1).saturating_sub(self.front))
    }

    pub fn is_empty(&self) -> bool {
        match self.rear {
            Some(rear) => self.front > rear,
            None => true,
        }
    }

    pub fn is_full(&self) -> bool {
        self.rear == Some(self.capacity() - 1)
    }

    /// Returns the number of slots that can still be written before the queue is full, which is
    /// not the same as the capacity minus the length.
    pub fn remaining(&self) -> usize {
        self.capacity() - self.rear.map_or(0, |rear| rear + 1)
    }

    /// Writes `value` into the next unused slot.
    pub fn enqueue(&mut self, value: T) -> Result<(), CapacityExceeded> {
        if self.is_full() {
            debug!(
                capacity = self.capacity(),
                len = self.len(),
                "enqueue rejected: linear queue has used its last slot"
            );
            return Err(CapacityExceeded { capacity: self.capacity() });
        }

        let rear = self.rear.map_or(0, |rear| rear + 1);
        self.slots.write(rear, value);
        self.rear = Some(rear);
        Ok(())
    }

    /// Removes the oldest value and returns it.
    pub fn dequeue(&mut self) -> Result<T, ContainerEmpty> {
        if self.is_empty() {
            return Err(ContainerEmpty);
        }

        let value = self.slots.read(self.front).ok_or(ContainerEmpty)?;
        self.front += 1;
        Ok(value)
    }

    /// Returns the oldest value without removing it.
    pub fn peek(&self) -> Result<&T, ContainerEmpty> {
        if self.is_empty() {
            return Err(ContainerEmpty);
        }
        self.slots.get(self.front).ok_or(ContainerEmpty)
    }

    /// Empties the queue and makes every slot usable again.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.front = 0;
        self.rear = None;
    }

    /// Iterates from the oldest value to the newest.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a LinearQueue<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        let slots: &[Option<T>] = match self.rear {
            Some(rear) if self.front <= rear => &self.slots[self.front..=rear],
            _ => &[],
        };
        Iter { slots }
    }
}

impl<T: Debug> Debug for LinearQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinearQueue")
            .field("contents", &self.iter().collect::<Vec<_>>())
            .field("front", &self.front)
            .field("rear", &self.rear)
            .field("capacity", &self.capacity())
            .finish()
    }
}
