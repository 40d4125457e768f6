use std::iter::FusedIterator;

/// A borrowed iterator over a contiguous run of occupied slots, front to back.
///
/// Stacks hand this out reversed, so that iteration starts at the top.
pub struct Iter<'a, T> {
    pub(crate) slots: &'a [Option<T>],
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let (first, rest) = self.slots.split_first()?;
        self.slots = rest;
        first.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.slots.len(), Some(self.slots.len()))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let (last, rest) = self.slots.split_last()?;
        self.slots = rest;
        last.as_ref()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { slots: self.slots }
    }
}

/// A borrowed iterator that walks a wrapped range of slots: `remaining` steps from `index`,
/// stepping with `(index + 1) % capacity`.
pub struct CircularIter<'a, T> {
    pub(crate) slots: &'a [Option<T>],
    pub(crate) index: usize,
    pub(crate) remaining: usize,
}

impl<'a, T> Iterator for CircularIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let value = self.slots[self.index].as_ref();
        self.index = (self.index + 1) % self.slots.len();
        self.remaining -= 1;
        value
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for CircularIter<'_, T> {}

impl<T> FusedIterator for CircularIter<'_, T> {}

impl<T> Clone for CircularIter<'_, T> {
    fn clone(&self) -> Self {
        CircularIter { ..*self }
    }
}
