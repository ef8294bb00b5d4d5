//! Heterogeneous cursor tuples.
//!
//! Multi-sequence adapters hold one cursor per input, each of a different
//! concrete type. The operations here apply the cursor contract across all of
//! them with the scan order resolved at compile time: no trait objects, no
//! allocation.
//!
//! Two shapes are used:
//!
//! - [`Lockstep`] is implemented on flat tuples `(C0, C1, ..)` and drives every
//!   component at once (zip).
//! - [`Segments`] is implemented on the nested form `Link<C0, Link<C1,
//!   Last<C2>>>` and recurses from the first component to the last
//!   (concatenation). The nested form is what makes the per-index recursion and
//!   the special-cased final index expressible as ordinary trait impls.
//!
//! Flat tuples of sequences up to arity 8 convert into either shape through
//! [`ZipSequences`] and [`ConcatSequences`].

use crate::cursor::{BidirectionalCursor, Cursor, RandomAccessCursor, Sequence, to_isize};
use crate::error::{Result, ViewError};

// =============================================================================
// Segments - nested tuples for concatenation
// =============================================================================

/// The final component of a segment chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Last<C>(pub C);

/// A component followed by the rest of the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link<H, T>(pub H, pub T);

/// Forward operations over a chain of cursors traversed one after another.
///
/// Every method receives the chain of end markers (or begin markers) with the
/// same shape as `self`.
pub trait Segments: Clone {
    /// Item of the first component; later components convert into it.
    type Item;

    /// Steps the first component not at its end marker. The final component
    /// always steps, even when it is already exhausted.
    fn advance_one(&mut self, end: &Self);

    /// Dereferences the first component not at its end marker, falling back
    /// to the final component unconditionally.
    fn get(&self, end: &Self) -> Self::Item;

    /// True as soon as one component differs from its counterpart, scanning
    /// from the first; the final component decides when all others match.
    fn differs(&self, other: &Self) -> bool;

    /// Sum of the per-component remaining lengths, if all are known.
    fn remaining(&self, end: &Self) -> Option<usize>;
}

/// Backward single steps over a segment chain.
pub trait BidirectionalSegments: Segments {
    /// Scans from the last component toward the first: a component sitting
    /// on its begin marker defers to the previous one, otherwise it steps back
    /// and the scan stops. The first component steps back unconditionally.
    fn retreat_one(&mut self, begin: &Self);

    /// [`retreat_one`](Self::retreat_one) for a chain that is not at index 0.
    /// Returns whether some component stepped.
    #[doc(hidden)]
    fn retreat_one_tail(&mut self, begin: &Self) -> bool;
}

/// Offset jumps and distances over a segment chain.
pub trait RandomAccessSegments: BidirectionalSegments {
    /// Moves `n` positions forward, pinning exhausted components to their end
    /// and carrying the remainder. The final component absorbs whatever is
    /// left without bounds checks.
    fn advance_by(&mut self, end: &Self, n: usize);

    /// Moves `n` positions backward, scanning from the last component.
    ///
    /// Fails with [`ViewError::OutOfRange`] when the first component has not
    /// traversed enough positions to absorb the remaining offset.
    fn retreat_by(&mut self, begin: &Self, n: usize) -> Result<()>;

    /// [`retreat_by`](Self::retreat_by) for a chain that is not at index 0.
    /// Returns the offset still to be absorbed by earlier components, or
    /// `None` once it has been absorbed. A component that rejects its share
    /// fails the whole jump.
    #[doc(hidden)]
    fn retreat_by_tail(&mut self, begin: &Self, n: usize) -> Result<Option<usize>>;

    /// Sum of the per-component signed distances from `self` to `other`.
    fn distance(&self, other: &Self) -> isize;
}

// --- Last ---

impl<C: Cursor> Segments for Last<C> {
    type Item = C::Item;

    fn advance_one(&mut self, _end: &Self) {
        self.0.step_forward();
    }

    fn get(&self, _end: &Self) -> Self::Item {
        self.0.get()
    }

    fn differs(&self, other: &Self) -> bool {
        self.0 != other.0
    }

    fn remaining(&self, end: &Self) -> Option<usize> {
        self.0.remaining(&end.0)
    }
}

impl<C: BidirectionalCursor> BidirectionalSegments for Last<C> {
    fn retreat_one(&mut self, _begin: &Self) {
        self.0.step_backward();
    }

    fn retreat_one_tail(&mut self, begin: &Self) -> bool {
        if self.0 == begin.0 {
            return false;
        }
        self.0.step_backward();
        true
    }
}

impl<C: RandomAccessCursor> RandomAccessSegments for Last<C> {
    fn advance_by(&mut self, _end: &Self, n: usize) {
        self.0.advance(n);
    }

    fn retreat_by(&mut self, begin: &Self, n: usize) -> Result<()> {
        retreat_first(&mut self.0, &begin.0, n)
    }

    fn retreat_by_tail(&mut self, begin: &Self, n: usize) -> Result<Option<usize>> {
        retreat_component(&mut self.0, &begin.0, n)
    }

    fn distance(&self, other: &Self) -> isize {
        self.0.distance(&other.0)
    }
}

// --- Link ---

impl<H, T> Segments for Link<H, T>
where
    H: Cursor,
    T: Segments,
    T::Item: Into<H::Item>,
{
    type Item = H::Item;

    fn advance_one(&mut self, end: &Self) {
        if self.0 != end.0 {
            self.0.step_forward();
        } else {
            self.1.advance_one(&end.1);
        }
    }

    fn get(&self, end: &Self) -> Self::Item {
        if self.0 != end.0 {
            self.0.get()
        } else {
            self.1.get(&end.1).into()
        }
    }

    fn differs(&self, other: &Self) -> bool {
        if self.0 != other.0 {
            return true;
        }
        self.1.differs(&other.1)
    }

    fn remaining(&self, end: &Self) -> Option<usize> {
        let head = self.0.remaining(&end.0)?;
        let tail = self.1.remaining(&end.1)?;
        head.checked_add(tail)
    }
}

impl<H, T> BidirectionalSegments for Link<H, T>
where
    H: BidirectionalCursor,
    T: BidirectionalSegments,
    T::Item: Into<H::Item>,
{
    fn retreat_one(&mut self, begin: &Self) {
        if !self.1.retreat_one_tail(&begin.1) {
            self.0.step_backward();
        }
    }

    fn retreat_one_tail(&mut self, begin: &Self) -> bool {
        if self.1.retreat_one_tail(&begin.1) {
            return true;
        }
        if self.0 == begin.0 {
            return false;
        }
        self.0.step_backward();
        true
    }
}

impl<H, T> RandomAccessSegments for Link<H, T>
where
    H: RandomAccessCursor,
    T: RandomAccessSegments,
    T::Item: Into<H::Item>,
{
    fn advance_by(&mut self, end: &Self, n: usize) {
        let available = self.0.distance(&end.0).max(0).unsigned_abs();
        if n <= available {
            self.0.advance(n);
        } else {
            self.0 = end.0.clone();
            self.1.advance_by(&end.1, n - available);
        }
    }

    fn retreat_by(&mut self, begin: &Self, n: usize) -> Result<()> {
        match self.1.retreat_by_tail(&begin.1, n)? {
            None => Ok(()),
            Some(carry) => retreat_first(&mut self.0, &begin.0, carry),
        }
    }

    fn retreat_by_tail(&mut self, begin: &Self, n: usize) -> Result<Option<usize>> {
        match self.1.retreat_by_tail(&begin.1, n)? {
            None => Ok(None),
            Some(carry) => retreat_component(&mut self.0, &begin.0, carry),
        }
    }

    fn distance(&self, other: &Self) -> isize {
        self.0.distance(&other.0) + self.1.distance(&other.1)
    }
}

/// Backward jump on a component other than the first.
///
/// A component on its begin marker passes the whole offset on. A component
/// that has traversed no more than `n` positions is reset to its begin marker
/// and passes on what it could not absorb. Otherwise it absorbs `n` itself.
fn retreat_component<C: RandomAccessCursor>(
    cursor: &mut C,
    begin: &C,
    n: usize,
) -> Result<Option<usize>> {
    if *cursor == *begin {
        return Ok(Some(n));
    }
    let traversed = begin.distance(cursor).max(0).unsigned_abs();
    if traversed <= n {
        *cursor = begin.clone();
        return Ok(Some(n - traversed));
    }
    cursor.retreat(n)?;
    Ok(None)
}

/// Backward jump on the first component, the only place it can fail.
fn retreat_first<C: RandomAccessCursor>(cursor: &mut C, begin: &C, n: usize) -> Result<()> {
    let traversed = begin.distance(cursor);
    if to_isize(n) > traversed {
        tracing::debug!(requested = n, traversed, "backward jump before the first sequence");
        return Err(ViewError::OutOfRange {
            requested: n,
            available: traversed.max(0).unsigned_abs(),
        });
    }
    cursor.retreat(n)
}

// =============================================================================
// Lockstep - flat tuples for zip
// =============================================================================

/// Forward operations applied to every component of a flat cursor tuple.
pub trait Lockstep: Clone {
    /// Tuple of the component items.
    type Item;

    fn get(&self) -> Self::Item;

    fn step_forward(&mut self);

    /// True when at least one component equals its counterpart.
    fn any_equal(&self, other: &Self) -> bool;

    /// Smallest per-component remaining length, if all are known.
    fn remaining(&self, end: &Self) -> Option<usize>;
}

/// Offset jumps over a flat cursor tuple. Backward movement is resolved by
/// the zip cursor, which re-seeks from its begin cursors.
pub trait RandomAccessLockstep: Lockstep {
    fn advance(&mut self, n: usize);

    /// Per-component distance of smallest magnitude.
    fn distance(&self, other: &Self) -> isize;
}

// =============================================================================
// Conversions from flat tuples of sequences
// =============================================================================

/// A flat tuple of sequences that can be zipped.
pub trait ZipSequences {
    type Cursors: Lockstep;

    fn begins(&self) -> Self::Cursors;

    fn ends(&self) -> Self::Cursors;
}

/// A flat tuple of sequences that can be concatenated.
pub trait ConcatSequences {
    type Segments: Segments;

    fn begins(&self) -> Self::Segments;

    fn ends(&self) -> Self::Segments;
}

/// Nested segment type for a list of cursor types.
macro_rules! segments_ty {
    ($last:ty) => { Last<$last> };
    ($head:ty, $($rest:ty),+) => { Link<$head, segments_ty!($($rest),+)> };
}

/// Nested segment value for a list of cursor expressions.
macro_rules! segments_of {
    ($last:expr) => { Last($last) };
    ($head:expr, $($rest:expr),+) => { Link($head, segments_of!($($rest),+)) };
}

macro_rules! cursor_tuple {
    ($($c:ident $s:ident $idx:tt),+) => {
        impl<$($c: Cursor),+> Lockstep for ($($c,)+) {
            type Item = ($($c::Item,)+);

            #[inline]
            fn get(&self) -> Self::Item {
                ($(self.$idx.get(),)+)
            }

            #[inline]
            fn step_forward(&mut self) {
                $(self.$idx.step_forward();)+
            }

            #[inline]
            fn any_equal(&self, other: &Self) -> bool {
                $(self.$idx == other.$idx)||+
            }

            fn remaining(&self, end: &Self) -> Option<usize> {
                let mut min: Option<usize> = None;
                $(
                    let n = self.$idx.remaining(&end.$idx)?;
                    min = Some(min.map_or(n, |m| m.min(n)));
                )+
                min
            }
        }

        impl<$($c: RandomAccessCursor),+> RandomAccessLockstep for ($($c,)+) {
            fn advance(&mut self, n: usize) {
                $(self.$idx.advance(n);)+
            }

            fn distance(&self, other: &Self) -> isize {
                [$(self.$idx.distance(&other.$idx)),+]
                    .into_iter()
                    .min_by_key(|d| d.unsigned_abs())
                    .unwrap_or(0)
            }
        }

        impl<$($s: Sequence),+> ZipSequences for ($($s,)+) {
            type Cursors = ($($s::Cursor,)+);

            fn begins(&self) -> Self::Cursors {
                ($(self.$idx.begin(),)+)
            }

            fn ends(&self) -> Self::Cursors {
                ($(self.$idx.end(),)+)
            }
        }

        impl<$($s: Sequence),+> ConcatSequences for ($($s,)+)
        where
            segments_ty!($($s::Cursor),+): Segments,
        {
            type Segments = segments_ty!($($s::Cursor),+);

            fn begins(&self) -> Self::Segments {
                segments_of!($(self.$idx.begin()),+)
            }

            fn ends(&self) -> Self::Segments {
                segments_of!($(self.$idx.end()),+)
            }
        }
    };
}

cursor_tuple!(C0 S0 0);
cursor_tuple!(C0 S0 0, C1 S1 1);
cursor_tuple!(C0 S0 0, C1 S1 1, C2 S2 2);
cursor_tuple!(C0 S0 0, C1 S1 1, C2 S2 2, C3 S3 3);
cursor_tuple!(C0 S0 0, C1 S1 1, C2 S2 2, C3 S3 3, C4 S4 4);
cursor_tuple!(C0 S0 0, C1 S1 1, C2 S2 2, C3 S3 3, C4 S4 4, C5 S5 5);
cursor_tuple!(C0 S0 0, C1 S1 1, C2 S2 2, C3 S3 3, C4 S4 4, C5 S5 5, C6 S6 6);
cursor_tuple!(C0 S0 0, C1 S1 1, C2 S2 2, C3 S3 3, C4 S4 4, C5 S5 5, C6 S6 6, C7 S7 7);

#[cfg(test)]
#[path = "tuple_test.rs"]
mod tuple_test;
