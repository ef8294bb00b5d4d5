//! Every n-th element of a sequence.

use lazyview_core::{BasicView, Cursor, Result, Sequence, ViewError};

/// Forward cursor that moves `offset` inner positions per step, stopping at
/// the inner end.
#[derive(Debug, Clone)]
pub struct TakeEveryCursor<C> {
    inner: C,
    end: C,
    offset: usize,
}

impl<C: Cursor> TakeEveryCursor<C> {
    fn skip(&mut self, n: usize) {
        for _ in 0..n {
            if self.inner == self.end {
                break;
            }
            self.inner.step_forward();
        }
    }
}

impl<C: Cursor> PartialEq for TakeEveryCursor<C> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<C: Cursor> Cursor for TakeEveryCursor<C> {
    type Item = C::Item;

    fn get(&self) -> C::Item {
        self.inner.get()
    }

    fn step_forward(&mut self) {
        self.skip(self.offset);
    }

    fn remaining(&self, end: &Self) -> Option<usize> {
        let inner = self.inner.remaining(&end.inner)?;
        Some(inner.div_ceil(self.offset))
    }
}

/// Selects the element at index `start`, then every `offset`-th one after it.
///
/// An `offset` of zero would never advance and is rejected with
/// [`ViewError::InvalidConfiguration`]. A `start` past the end yields an empty
/// view.
///
/// ```
/// use lazyview_adapters::take_every;
/// use lazyview_core::View;
///
/// let data = [1, 2, 3, 4, 5];
/// assert_eq!(take_every(&data, 2, 0).unwrap().to_vec(), [&1, &3, &5]);
/// assert_eq!(take_every(&data, 2, 1).unwrap().to_vec(), [&2, &4]);
/// ```
pub fn take_every<S: Sequence>(
    sequence: S,
    offset: usize,
    start: usize,
) -> Result<BasicView<TakeEveryCursor<S::Cursor>>> {
    tracing::trace!(offset, start, "take_every");
    if offset == 0 {
        return Err(ViewError::invalid_configuration(
            "with an offset of zero the sequence never advances",
        ));
    }
    let end = sequence.end();
    let mut begin = TakeEveryCursor {
        inner: sequence.begin(),
        end: end.clone(),
        offset,
    };
    begin.skip(start);
    Ok(BasicView::new(
        begin,
        TakeEveryCursor {
            inner: end.clone(),
            end,
            offset,
        },
    ))
}

#[cfg(test)]
#[path = "take_every_test.rs"]
mod take_every_test;
