use std::fmt::{self, Debug, Formatter};

use tracing::debug;

use super::{CircularIter, Slots};
use crate::util::error::{CapacityExceeded, ContainerEmpty, InvalidCapacity};

/// A first-in-first-out queue whose indices wrap around a fixed number of slots.
///
/// Once the indices have wrapped, `front == rear + 1` holds both when the queue is empty and when
/// it is full, so the queue keeps an element count and decides fullness and emptiness from that
/// alone. `rear` starts on the last slot so that the first enqueue lands in slot zero.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `enqueue/dequeue/peek` | `O(1)` |
/// | `iter` | `O(n)` |
pub struct CircularQueue<T> {
    pub(crate) slots: Slots<T>,
    pub(crate) front: usize,
    pub(crate) rear: usize,
    pub(crate) count: usize,
}

impl<T> CircularQueue<T> {
    /// Creates an empty queue with `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Result<CircularQueue<T>, InvalidCapacity> {
        let slots = Slots::with_capacity(capacity)?;
        Ok(CircularQueue {
            rear: slots.capacity() - 1,
            slots,
            front: 0,
            count: 0,
        })
    }

    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub const fn len(&self) -> usize {
        self.count
    }

    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count == self.capacity()
    }

    /// Writes `value` into the slot after the rear, wrapping to the first slot after the last.
    pub fn enqueue(&mut self, value: T) -> Result<(), CapacityExceeded> {
        if self.is_full() {
            debug!(capacity = self.capacity(), "enqueue rejected: circular queue is full");
            return Err(CapacityExceeded { capacity: self.capacity() });
        }

        self.rear = (self.rear + 1) % self.capacity();
        self.slots.write(self.rear, value);
        self.count += 1;
        Ok(())
    }

    /// Removes the oldest value and returns it.
    pub fn dequeue(&mut self) -> Result<T, ContainerEmpty> {
        if self.is_empty() {
            return Err(ContainerEmpty);
        }

        let value = self.slots.read(self.front).ok_or(ContainerEmpty)?;
        self.front = (self.front + 1) % self.capacity();
        self.count -= 1;
        Ok(value)
    }

    /// Returns the oldest value without removing it.
    pub fn peek(&self) -> Result<&T, ContainerEmpty> {
        if self.is_empty() {
            return Err(ContainerEmpty);
        }
        self.slots.get(self.front).ok_or(ContainerEmpty)
    }

    /// Returns the newest value without removing it.
    pub fn peek_rear(&self) -> Result<&T, ContainerEmpty> {
        if self.is_empty() {
            return Err(ContainerEmpty);
        }
        self.slots.get(self.rear).ok_or(ContainerEmpty)
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.front = 0;
        self.rear = self.capacity() - 1;
        self.count = 0;
    }

    /// Iterates from the oldest value to the newest, following the wrap.
    pub fn iter(&self) -> CircularIter<'_, T> {
        self.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a CircularQueue<T> {
    type Item = &'a T;

    type IntoIter = CircularIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        CircularIter {
            slots: &self.slots,
            index: self.front,
            remaining: self.count,
        }
    }
}

impl<T: Debug> Debug for CircularQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircularQueue")
            .field("contents", &self.iter().collect::<Vec<_>>())
            .field("front", &self.front)
            .field("rear", &self.rear)
            .field("capacity", &self.capacity())
            .finish()
    }
}
