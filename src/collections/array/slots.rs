use std::iter;
use std::ops::{Deref, DerefMut};

use crate::util::error::InvalidCapacity;

/// A fixed number of slots, each either holding a value or empty. The number of slots is chosen
/// at construction and never changes.
///
/// Values are moved out of a slot when they are read, so nothing is left behind outside the range a
/// container considers occupied.
#[derive(Debug, Clone)]
pub(crate) struct Slots<T>(Box<[Option<T>]>);

impl<T> Slots<T> {
    pub fn with_capacity(capacity: usize) -> Result<Slots<T>, InvalidCapacity> {
        if capacity == 0 {
            return Err(InvalidCapacity);
        }
        Ok(Slots(iter::repeat_with(|| None).take(capacity).collect()))
    }

    pub fn capacity(&self) -> usize {
        self.0.len()
    }

    pub fn write(&mut self, index: usize, value: T) {
        self.0[index] = Some(value);
    }

    /// Moves the value out of the slot at `index`, leaving it empty.
    pub fn read(&mut self, index: usize) -> Option<T> {
        self.0[index].take()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.0[index].as_ref()
    }

    pub fn clear(&mut self) {
        self.0.iter_mut().for_each(|slot| *slot = None);
    }
}

impl<T> Deref for Slots<T> {
    type Target = [Option<T>];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Slots<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
