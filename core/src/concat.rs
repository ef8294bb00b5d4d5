//! Several sequences exposed as one.
//!
//! `concat((a, b))` yields every element of `a`, then every element of `b`.
//! Later inputs may have a different item type as long as it converts into
//! the first input's item type with `Into`.
//!
//! The cursor keeps the begin and end markers of every component next to its
//! current position; stepping across a boundary compares against them.

use crate::cursor::{BidirectionalCursor, Cursor, RandomAccessCursor};
use crate::error::Result;
use crate::tuple::{BidirectionalSegments, ConcatSequences, RandomAccessSegments, Segments};
use crate::view::BasicView;

#[derive(Debug, Clone)]
pub struct ConcatCursor<S> {
    current: S,
    begin: S,
    end: S,
}

impl<S: Segments> ConcatCursor<S> {
    pub fn new(current: S, begin: S, end: S) -> Self {
        ConcatCursor {
            current,
            begin,
            end,
        }
    }

    /// The component cursors at this position.
    pub fn segments(&self) -> &S {
        &self.current
    }
}

impl<S: Segments> PartialEq for ConcatCursor<S> {
    fn eq(&self, other: &Self) -> bool {
        !self.current.differs(&other.current)
    }
}

impl<S: Segments> Cursor for ConcatCursor<S> {
    type Item = S::Item;

    #[inline]
    fn get(&self) -> Self::Item {
        self.current.get(&self.end)
    }

    #[inline]
    fn step_forward(&mut self) {
        self.current.advance_one(&self.end);
    }

    fn remaining(&self, end: &Self) -> Option<usize> {
        let from = self.current.remaining(&self.end)?;
        let to = end.current.remaining(&end.end)?;
        Some(from.saturating_sub(to))
    }
}

impl<S: BidirectionalSegments> BidirectionalCursor for ConcatCursor<S> {
    #[inline]
    fn step_backward(&mut self) {
        self.current.retreat_one(&self.begin);
    }
}

impl<S: RandomAccessSegments> RandomAccessCursor for ConcatCursor<S> {
    fn advance(&mut self, n: usize) {
        self.current.advance_by(&self.end, n);
    }

    fn retreat(&mut self, n: usize) -> Result<()> {
        let mut next = self.current.clone();
        next.retreat_by(&self.begin, n)?;
        self.current = next;
        Ok(())
    }

    fn distance(&self, other: &Self) -> isize {
        self.current.distance(&other.current)
    }
}

/// View produced by [`concat`].
pub type Concat<S> = BasicView<ConcatCursor<S>>;

/// Concatenates a tuple of up to eight sequences.
///
/// ```
/// use lazyview_core::{RandomAccessCursor, Sequence, View, concat};
///
/// let head = [1, 2];
/// let tail = vec![3, 4, 5];
/// let joined = concat((&head, &tail));
/// assert_eq!(joined.len(), 5);
/// assert_eq!(joined.begin().at(3), Ok(&4));
/// ```
pub fn concat<T: ConcatSequences>(sequences: T) -> Concat<T::Segments> {
    let begins = sequences.begins();
    let ends = sequences.ends();
    BasicView::new(
        ConcatCursor::new(begins.clone(), begins.clone(), ends.clone()),
        ConcatCursor::new(ends.clone(), begins, ends),
    )
}

#[cfg(test)]
#[path = "concat_test.rs"]
mod concat_test;
