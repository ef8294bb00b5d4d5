//! Bridge from a begin/end cursor pair to Rust's iterator traits.

use core::iter::FusedIterator;

use crate::cursor::{BidirectionalCursor, Cursor, RandomAccessCursor};

/// Iterator over the half-open cursor range `[front, back)`.
///
/// Yields `Cursor::get` for every position the front cursor visits until it
/// compares equal to the back cursor. Reversible when the cursors are
/// bidirectional and exact-sized when they are random access.
#[derive(Debug, Clone)]
pub struct Iter<C> {
    front: C,
    back: C,
}

impl<C: Cursor> Iter<C> {
    pub fn new(begin: C, end: C) -> Self {
        Iter {
            front: begin,
            back: end,
        }
    }

    /// The cursors delimiting what is left to iterate.
    pub fn into_cursors(self) -> (C, C) {
        (self.front, self.back)
    }
}

impl<C: Cursor> Iterator for Iter<C> {
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let item = self.front.get();
        self.front.step_forward();
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.front.remaining(&self.back) {
            Some(n) => (n, Some(n)),
            None => (0, None),
        }
    }
}

impl<C: BidirectionalCursor> DoubleEndedIterator for Iter<C> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back.step_backward();
        Some(self.back.get())
    }
}

impl<C: RandomAccessCursor> ExactSizeIterator for Iter<C> {
    #[inline]
    fn len(&self) -> usize {
        self.front.distance(&self.back).max(0).unsigned_abs()
    }
}

impl<C: Cursor> FusedIterator for Iter<C> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Sequence;

    #[test]
    fn test_iter_forward_and_back() {
        let data = [10, 20, 30];
        let seq = &data;
        let mut iter = Iter::new(seq.begin(), seq.end());

        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some(&10));
        assert_eq!(iter.next_back(), Some(&30));
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.next(), Some(&20));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn test_iter_empty() {
        let data: [i32; 0] = [];
        let seq = &data;
        let mut iter = Iter::new(seq.begin(), seq.end());

        assert_eq!(iter.size_hint(), (0, Some(0)));
        assert_eq!(iter.next(), None);
    }
}
