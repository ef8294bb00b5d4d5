//! Arithmetic progressions.
//!
//! `range(start, end, step)` yields `start, start + step, ...` for every value
//! strictly before `end` (strictly after it for a negative step). Values are
//! computed from the cursor's index, so jumps are exact and floating-point
//! ranges do not accumulate rounding error.

use core::fmt;

use lazyview_core::{
    BasicView, BidirectionalCursor, Cursor, RandomAccessCursor, Result, ViewError,
};
use num_traits::{Num, NumCast, ToPrimitive};

// =============================================================================
// Arithmetic
// =============================================================================

/// Numbers a range can step through.
pub trait Arithmetic: Num + NumCast + PartialOrd + Copy + fmt::Debug {
    /// `start + step * n`, or `None` when it is not representable.
    fn offset(start: Self, step: Self, n: usize) -> Option<Self>;

    /// Number of values in `[start, end)` spaced by `step`, assuming the step
    /// points from `start` toward `end`.
    fn steps(start: Self, end: Self, step: Self) -> Option<usize>;
}

macro_rules! integer_arithmetic {
    ($($t:ty),* $(,)?) => {
        $(
            impl Arithmetic for $t {
                fn offset(start: Self, step: Self, n: usize) -> Option<Self> {
                    let n = i128::try_from(n).ok()?;
                    let value = start.to_i128()?.checked_add(step.to_i128()?.checked_mul(n)?)?;
                    <$t as NumCast>::from(value)
                }

                fn steps(start: Self, end: Self, step: Self) -> Option<usize> {
                    let span = end.to_i128()?.checked_sub(start.to_i128()?)?.unsigned_abs();
                    let step = step.to_i128()?.unsigned_abs();
                    usize::try_from(span.div_ceil(step)).ok()
                }
            }
        )*
    };
}

macro_rules! float_arithmetic {
    ($($t:ty),* $(,)?) => {
        $(
            impl Arithmetic for $t {
                fn offset(start: Self, step: Self, n: usize) -> Option<Self> {
                    let value = start.to_f64()? + step.to_f64()? * n.to_f64()?;
                    <$t as NumCast>::from(value)
                }

                fn steps(start: Self, end: Self, step: Self) -> Option<usize> {
                    let count = ((end.to_f64()? - start.to_f64()?) / step.to_f64()?).ceil();
                    <usize as NumCast>::from(count.max(0.0))
                }
            }
        )*
    };
}

integer_arithmetic!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
float_arithmetic!(f32, f64);

// =============================================================================
// RangeCursor
// =============================================================================

/// Random-access cursor over an arithmetic progression.
///
/// Position is an index into the progression; cursors of the same range
/// compare by index.
#[derive(Debug, Clone, Copy)]
pub struct RangeCursor<T> {
    start: T,
    step: T,
    end: T,
    index: usize,
}

impl<T: Arithmetic> PartialEq for RangeCursor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<T: Arithmetic> Cursor for RangeCursor<T> {
    type Item = T;

    fn get(&self) -> T {
        T::offset(self.start, self.step, self.index).unwrap_or(self.end)
    }

    fn step_forward(&mut self) {
        self.index = self.index.saturating_add(1);
    }

    fn remaining(&self, end: &Self) -> Option<usize> {
        Some(end.index.saturating_sub(self.index))
    }
}

impl<T: Arithmetic> BidirectionalCursor for RangeCursor<T> {
    fn step_backward(&mut self) {
        self.index = self.index.saturating_sub(1);
    }
}

impl<T: Arithmetic> RandomAccessCursor for RangeCursor<T> {
    fn advance(&mut self, n: usize) {
        self.index = self.index.saturating_add(n);
    }

    fn retreat(&mut self, n: usize) -> Result<()> {
        if n > self.index {
            return Err(ViewError::OutOfRange {
                requested: n,
                available: self.index,
            });
        }
        self.index -= n;
        Ok(())
    }

    fn distance(&self, other: &Self) -> isize {
        let (from, to) = (self.index, other.index);
        if to >= from {
            isize::try_from(to - from).unwrap_or(isize::MAX)
        } else {
            isize::try_from(from - to).map_or(isize::MIN, |d| -d)
        }
    }
}

// =============================================================================
// Constructors
// =============================================================================

/// Values from `start` toward `end` (exclusive) spaced by `step`.
///
/// Fails with [`ViewError::InvalidConfiguration`] for configurations that
/// would never terminate: a zero step, a positive step with `start > end`, or
/// a negative step with `start < end`.
///
/// ```
/// use lazyview_adapters::range;
/// use lazyview_core::View;
///
/// assert_eq!(range(0, 10, 3).unwrap().to_vec(), [0, 3, 6, 9]);
/// assert_eq!(range(5, 0, -2).unwrap().to_vec(), [5, 3, 1]);
/// assert!(range(0, 10, 0).is_err());
/// ```
pub fn range<T: Arithmetic>(start: T, end: T, step: T) -> Result<BasicView<RangeCursor<T>>> {
    tracing::trace!(?start, ?end, ?step, "range");
    let zero = T::zero();
    if step == zero {
        return Err(ViewError::invalid_configuration(
            "with a step of zero the range never ends",
        ));
    }
    if start > end && step > zero {
        return Err(ViewError::invalid_configuration(format!(
            "a positive step never reaches {end:?} from {start:?}"
        )));
    }
    if start < end && step < zero {
        return Err(ViewError::invalid_configuration(format!(
            "a negative step never reaches {end:?} from {start:?}"
        )));
    }
    let len = T::steps(start, end, step).ok_or_else(|| {
        ViewError::invalid_configuration(format!(
            "cannot count the steps from {start:?} to {end:?} by {step:?}"
        ))
    })?;

    let begin = RangeCursor {
        start,
        step,
        end,
        index: 0,
    };
    Ok(BasicView::new(begin, RangeCursor { index: len, ..begin }))
}

/// Values `0, 1, ..` up to `end` (exclusive).
pub fn range_to<T: Arithmetic>(end: T) -> Result<BasicView<RangeCursor<T>>> {
    range(T::zero(), end, T::one())
}

#[cfg(test)]
#[path = "range_test.rs"]
mod range_test;
