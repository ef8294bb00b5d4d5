//! Lockstep traversal of several sequences.
//!
//! `zip((a, b, c))` yields `(a[i], b[i], c[i])` for every index shorter than
//! all three inputs. The cursor compares equal to another as soon as one
//! component does, so iteration stops at the first exhausted input.

use crate::cursor::{BidirectionalCursor, Cursor, RandomAccessCursor};
use crate::error::{Result, ViewError};
use crate::tuple::{Lockstep, RandomAccessLockstep, ZipSequences};
use crate::view::BasicView;

/// Cursor over a flat tuple of component cursors.
///
/// The begin cursors travel along so that backward movement can place every
/// component at the zip's index, even from an end cursor whose components
/// sit at different offsets.
#[derive(Debug, Clone)]
pub struct ZipCursor<L> {
    begin: L,
    cursors: L,
}

impl<L: Lockstep> ZipCursor<L> {
    pub fn new(begin: L, cursors: L) -> Self {
        ZipCursor { begin, cursors }
    }

    pub fn cursors(&self) -> &L {
        &self.cursors
    }

    pub fn into_cursors(self) -> L {
        self.cursors
    }
}

impl<L: RandomAccessLockstep> ZipCursor<L> {
    /// Smallest per-component offset from begin.
    fn index(&self) -> usize {
        self.begin.distance(&self.cursors).max(0).unsigned_abs()
    }

    fn seek(&mut self, index: usize) {
        let mut cursors = self.begin.clone();
        cursors.advance(index);
        self.cursors = cursors;
    }
}

impl<L: Lockstep> PartialEq for ZipCursor<L> {
    fn eq(&self, other: &Self) -> bool {
        self.cursors.any_equal(&other.cursors)
    }
}

impl<L: Lockstep> Cursor for ZipCursor<L> {
    type Item = L::Item;

    #[inline]
    fn get(&self) -> Self::Item {
        self.cursors.get()
    }

    #[inline]
    fn step_forward(&mut self) {
        self.cursors.step_forward();
    }

    fn remaining(&self, end: &Self) -> Option<usize> {
        self.cursors.remaining(&end.cursors)
    }
}

impl<L: RandomAccessLockstep> BidirectionalCursor for ZipCursor<L> {
    fn step_backward(&mut self) {
        let index = self.index();
        self.seek(index.saturating_sub(1));
    }
}

impl<L: RandomAccessLockstep> RandomAccessCursor for ZipCursor<L> {
    fn advance(&mut self, n: usize) {
        self.cursors.advance(n);
    }

    fn retreat(&mut self, n: usize) -> Result<()> {
        let index = self.index();
        if n > index {
            tracing::debug!(requested = n, index, "backward jump before the zip begin");
            return Err(ViewError::OutOfRange {
                requested: n,
                available: index,
            });
        }
        self.seek(index - n);
        Ok(())
    }

    fn distance(&self, other: &Self) -> isize {
        self.cursors.distance(&other.cursors)
    }
}

/// View produced by [`zip`].
pub type Zip<L> = BasicView<ZipCursor<L>>;

/// Zips a tuple of up to eight sequences.
///
/// The view is reversible when every input is random access; reverse
/// iteration yields the forward pairs in reverse order even when the inputs
/// differ in length.
///
/// ```
/// use lazyview_core::{View, zip};
///
/// let ids = [1, 2, 3];
/// let names = vec!["a", "b"];
/// let pairs: Vec<_> = zip((&ids, &names)).iter().collect();
/// assert_eq!(pairs, [(&1, &"a"), (&2, &"b")]);
/// ```
pub fn zip<T: ZipSequences>(sequences: T) -> Zip<T::Cursors> {
    let begins = sequences.begins();
    BasicView::new(
        ZipCursor::new(begins.clone(), begins.clone()),
        ZipCursor::new(begins, sequences.ends()),
    )
}

impl<L: RandomAccessLockstep> Zip<L> {
    /// Moves the end cursor to `begin + len`.
    ///
    /// The end of a fresh zip holds every component's own end, so its
    /// components differ in index when the inputs differ in length. After
    /// aligning, every component of the end cursor sits at the same index.
    pub fn aligned(self) -> Self {
        let (begin, end) = self.into_cursors();
        let len = begin.distance(&end).max(0).unsigned_abs();
        let mut aligned_end = begin.clone();
        aligned_end.advance(len);
        BasicView::new(begin, aligned_end)
    }
}

#[cfg(test)]
#[path = "zip_test.rs"]
mod zip_test;
