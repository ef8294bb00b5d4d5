//! Element-wise transformation.

use core::fmt;

use lazyview_core::{BasicView, BidirectionalCursor, Cursor, RandomAccessCursor, Result, Sequence};

/// Cursor applying a function to every element of its inner cursor. Keeps the
/// inner cursor's capabilities.
#[derive(Clone)]
pub struct MapCursor<C, F> {
    inner: C,
    f: F,
}

impl<C: fmt::Debug, F> fmt::Debug for MapCursor<C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapCursor")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl<C: PartialEq, F> PartialEq for MapCursor<C, F> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<C, F, U> Cursor for MapCursor<C, F>
where
    C: Cursor,
    F: Fn(C::Item) -> U + Clone,
{
    type Item = U;

    fn get(&self) -> U {
        (self.f)(self.inner.get())
    }

    fn step_forward(&mut self) {
        self.inner.step_forward();
    }

    fn remaining(&self, end: &Self) -> Option<usize> {
        self.inner.remaining(&end.inner)
    }
}

impl<C, F, U> BidirectionalCursor for MapCursor<C, F>
where
    C: BidirectionalCursor,
    F: Fn(C::Item) -> U + Clone,
{
    fn step_backward(&mut self) {
        self.inner.step_backward();
    }
}

impl<C, F, U> RandomAccessCursor for MapCursor<C, F>
where
    C: RandomAccessCursor,
    F: Fn(C::Item) -> U + Clone,
{
    fn advance(&mut self, n: usize) {
        self.inner.advance(n);
    }

    fn retreat(&mut self, n: usize) -> Result<()> {
        self.inner.retreat(n)
    }

    fn distance(&self, other: &Self) -> isize {
        self.inner.distance(&other.inner)
    }
}

/// Applies `f` to each element of `sequence` as it is read.
///
/// ```
/// use lazyview_adapters::map;
/// use lazyview_core::View;
///
/// let data = [1, 2, 3];
/// assert_eq!(map(&data, |x| x * 10).to_vec(), [10, 20, 30]);
/// ```
pub fn map<S, F, U>(sequence: S, f: F) -> BasicView<MapCursor<S::Cursor, F>>
where
    S: Sequence,
    F: Fn(<S::Cursor as Cursor>::Item) -> U + Clone,
{
    tracing::trace!(output = core::any::type_name::<U>(), "map");
    BasicView::new(
        MapCursor {
            inner: sequence.begin(),
            f: f.clone(),
        },
        MapCursor {
            inner: sequence.end(),
            f,
        },
    )
}

#[cfg(test)]
#[path = "map_test.rs"]
mod map_test;
