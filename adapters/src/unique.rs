//! Adjacent duplicate suppression.

use lazyview_core::{BasicView, Cursor, Sequence};

/// Forward cursor that skips elements equal to the one it just left.
#[derive(Debug, Clone)]
pub struct UniqueCursor<C> {
    inner: C,
    end: C,
}

impl<C: Cursor> PartialEq for UniqueCursor<C> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<C> Cursor for UniqueCursor<C>
where
    C: Cursor,
    C::Item: PartialEq,
{
    type Item = C::Item;

    fn get(&self) -> C::Item {
        self.inner.get()
    }

    fn step_forward(&mut self) {
        let previous = self.inner.get();
        self.inner.step_forward();
        while self.inner != self.end && self.inner.get() == previous {
            self.inner.step_forward();
        }
    }
}

/// Drops every element equal to its predecessor. On sorted input this leaves
/// each distinct value once.
///
/// ```
/// use lazyview_adapters::unique;
/// use lazyview_core::View;
///
/// let data = [1, 1, 2, 3, 3, 1];
/// assert_eq!(unique(&data).to_vec(), [&1, &2, &3, &1]);
/// ```
pub fn unique<S>(sequence: S) -> BasicView<UniqueCursor<S::Cursor>>
where
    S: Sequence,
    <S::Cursor as Cursor>::Item: PartialEq,
{
    tracing::trace!("unique");
    let end = sequence.end();
    BasicView::new(
        UniqueCursor {
            inner: sequence.begin(),
            end: end.clone(),
        },
        UniqueCursor {
            inner: end.clone(),
            end,
        },
    )
}

#[cfg(test)]
#[path = "unique_test.rs"]
mod unique_test;
