//! Pairs every element with its index.

use lazyview_core::{
    BasicView, BidirectionalCursor, Cursor, RandomAccessCursor, Result, Sequence,
};
use num_traits::PrimInt;

/// Cursor yielding `(index, item)`.
///
/// Equality ignores the index: two cursors are equal when their inner cursors
/// are.
#[derive(Debug, Clone)]
pub struct EnumerateCursor<C, I> {
    inner: C,
    index: I,
}

impl<C: Cursor, I: PrimInt> EnumerateCursor<C, I> {
    pub fn new(inner: C, index: I) -> Self {
        EnumerateCursor { inner, index }
    }

    pub fn index(&self) -> I {
        self.index
    }
}

impl<C: Cursor, I: PrimInt> PartialEq for EnumerateCursor<C, I> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<C: Cursor, I: PrimInt> Cursor for EnumerateCursor<C, I> {
    type Item = (I, C::Item);

    fn get(&self) -> Self::Item {
        (self.index, self.inner.get())
    }

    fn step_forward(&mut self) {
        self.inner.step_forward();
        self.index = shift_up(self.index, 1);
    }

    fn remaining(&self, end: &Self) -> Option<usize> {
        self.inner.remaining(&end.inner)
    }
}

impl<C: BidirectionalCursor, I: PrimInt> BidirectionalCursor for EnumerateCursor<C, I> {
    fn step_backward(&mut self) {
        self.inner.step_backward();
        self.index = shift_down(self.index, 1);
    }
}

impl<C: RandomAccessCursor, I: PrimInt> RandomAccessCursor for EnumerateCursor<C, I> {
    fn advance(&mut self, n: usize) {
        self.inner.advance(n);
        self.index = shift_up(self.index, n);
    }

    fn retreat(&mut self, n: usize) -> Result<()> {
        self.inner.retreat(n)?;
        self.index = shift_down(self.index, n);
        Ok(())
    }

    fn distance(&self, other: &Self) -> isize {
        self.inner.distance(&other.inner)
    }
}

// Indices saturate at the bounds of `I` instead of wrapping.

fn shift_up<I: PrimInt>(index: I, n: usize) -> I {
    I::from(n)
        .and_then(|n| index.checked_add(&n))
        .unwrap_or_else(I::max_value)
}

fn shift_down<I: PrimInt>(index: I, n: usize) -> I {
    I::from(n)
        .and_then(|n| index.checked_sub(&n))
        .unwrap_or_else(I::min_value)
}

/// Tags every element of `sequence` with an index counting up from `start`.
///
/// The end cursor carries `start + len` when the length is known up front, so
/// reverse iteration reports the right indices.
pub fn enumerate<S, I>(sequence: S, start: I) -> BasicView<EnumerateCursor<S::Cursor, I>>
where
    S: Sequence,
    I: PrimInt,
{
    let (begin, end) = (sequence.begin(), sequence.end());
    tracing::trace!(len = ?begin.remaining(&end), "enumerate");
    let end_index = match begin.remaining(&end) {
        Some(len) => shift_up(start, len),
        None => start,
    };
    BasicView::new(
        EnumerateCursor::new(begin, start),
        EnumerateCursor::new(end, end_index),
    )
}

#[cfg(test)]
#[path = "enumerate_test.rs"]
mod enumerate_test;
