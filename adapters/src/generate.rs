//! Values produced by a generator function.

use core::fmt;

use lazyview_core::{BasicView, BidirectionalCursor, Cursor, RandomAccessCursor, Result, ViewError};

/// Cursor calling its generator on every dereference.
///
/// The position is a counter. An endless view ends at `usize::MAX`, which
/// traversal never reaches, and reports no remaining length.
#[derive(Clone)]
pub struct GenerateCursor<F> {
    generator: F,
    counter: usize,
    endless: bool,
}

impl<F> fmt::Debug for GenerateCursor<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerateCursor")
            .field("counter", &self.counter)
            .field("endless", &self.endless)
            .finish_non_exhaustive()
    }
}

impl<F> PartialEq for GenerateCursor<F> {
    fn eq(&self, other: &Self) -> bool {
        self.counter == other.counter
    }
}

impl<F, T> Cursor for GenerateCursor<F>
where
    F: Fn() -> T + Clone,
{
    type Item = T;

    fn get(&self) -> T {
        (self.generator)()
    }

    fn step_forward(&mut self) {
        self.counter = self.counter.saturating_add(1);
    }

    fn remaining(&self, end: &Self) -> Option<usize> {
        if self.endless {
            return None;
        }
        Some(end.counter.saturating_sub(self.counter))
    }
}

impl<F, T> BidirectionalCursor for GenerateCursor<F>
where
    F: Fn() -> T + Clone,
{
    fn step_backward(&mut self) {
        self.counter = self.counter.saturating_sub(1);
    }
}

impl<F, T> RandomAccessCursor for GenerateCursor<F>
where
    F: Fn() -> T + Clone,
{
    fn advance(&mut self, n: usize) {
        self.counter = self.counter.saturating_add(n);
    }

    fn retreat(&mut self, n: usize) -> Result<()> {
        if n > self.counter {
            return Err(ViewError::OutOfRange {
                requested: n,
                available: self.counter,
            });
        }
        self.counter -= n;
        Ok(())
    }

    fn distance(&self, other: &Self) -> isize {
        let (from, to) = (self.counter, other.counter);
        if to >= from {
            isize::try_from(to - from).unwrap_or(isize::MAX)
        } else {
            isize::try_from(from - to).map_or(isize::MIN, |d| -d)
        }
    }
}

/// Calls `generator` once per element.
///
/// `amount` bounds the number of elements; `None` makes the view endless, in
/// which case it must be bounded by something else (a zip with a finite
/// sequence, for instance) before it is materialized.
///
/// ```
/// use lazyview_adapters::generate;
/// use lazyview_core::View;
///
/// assert_eq!(generate(|| 7, Some(3)).to_vec(), [7, 7, 7]);
/// ```
pub fn generate<F, T>(generator: F, amount: Option<usize>) -> BasicView<GenerateCursor<F>>
where
    F: Fn() -> T + Clone,
{
    tracing::trace!(?amount, "generate");
    let endless = amount.is_none();
    let end = amount.unwrap_or(usize::MAX);
    BasicView::new(
        GenerateCursor {
            generator: generator.clone(),
            counter: 0,
            endless,
        },
        GenerateCursor {
            generator,
            counter: end,
            endless,
        },
    )
}

#[cfg(test)]
#[path = "generate_test.rs"]
mod generate_test;
