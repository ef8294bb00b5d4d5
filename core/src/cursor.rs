//! The cursor contract every adapter implements.
//!
//! A cursor is a cheap, cloneable position inside a sequence. Capabilities are
//! layered as traits, so asking a forward-only cursor for its distance to
//! another cursor is a compile error rather than a runtime failure:
//!
//! | Trait | Adds |
//! |-------|------|
//! | [`Cursor`] | dereference, equality, single forward step |
//! | [`BidirectionalCursor`] | single backward step |
//! | [`RandomAccessCursor`] | jumps by an offset, signed distance |
//!
//! Sequences hand out cursors through [`Sequence`]. Borrowed slices, vectors
//! and arrays are sequences, and so is every view built by this crate.

use core::fmt;

use crate::error::{Result, ViewError};

// =============================================================================
// Contract
// =============================================================================

/// A position within a sequence.
///
/// `PartialEq` defines end detection: a cursor compares equal to the end
/// cursor of its sequence once the sequence is exhausted. A cursor that equals
/// the end cursor must not be dereferenced.
pub trait Cursor: Clone + PartialEq {
    type Item;

    /// The element at this position.
    fn get(&self) -> Self::Item;

    /// Moves one position forward.
    fn step_forward(&mut self);

    /// Number of forward steps from `self` to `end`, when it can be computed
    /// without traversing.
    ///
    /// Random-access cursors over finite sequences return `Some`, which gives
    /// [`Iter`](crate::Iter) an exact `size_hint`.
    fn remaining(&self, end: &Self) -> Option<usize> {
        let _ = end;
        None
    }
}

/// A cursor that can also move backward one position at a time.
pub trait BidirectionalCursor: Cursor {
    /// Moves one position backward.
    fn step_backward(&mut self);
}

/// A cursor that can jump by arbitrary offsets and measure distances in O(1).
pub trait RandomAccessCursor: BidirectionalCursor {
    /// Moves `n` positions forward. Moving past the end is representable; the
    /// resulting cursor must not be dereferenced.
    fn advance(&mut self, n: usize);

    /// Moves `n` positions backward.
    ///
    /// Fails with [`ViewError::OutOfRange`] when fewer than `n` positions lie
    /// between the start of the sequence and `self`. The cursor is left
    /// untouched on failure.
    fn retreat(&mut self, n: usize) -> Result<()>;

    /// Signed number of forward steps needed to get from `self` to `other`.
    fn distance(&self, other: &Self) -> isize;

    /// Moves by a signed offset.
    fn jump(&mut self, offset: isize) -> Result<()> {
        if offset >= 0 {
            self.advance(offset.unsigned_abs());
            Ok(())
        } else {
            self.retreat(offset.unsigned_abs())
        }
    }

    /// The element `offset` positions away from this cursor.
    fn at(&self, offset: isize) -> Result<Self::Item> {
        let mut cursor = self.clone();
        cursor.jump(offset)?;
        Ok(cursor.get())
    }

    /// Whether `self` lies strictly before `other`.
    fn precedes(&self, other: &Self) -> bool {
        self.distance(other) > 0
    }
}

/// Anything that can hand out a begin/end cursor pair.
///
/// Each call produces fresh cursors; a sequence never mutates its own state
/// when asked for them.
pub trait Sequence {
    type Cursor: Cursor;

    fn begin(&self) -> Self::Cursor;

    fn end(&self) -> Self::Cursor;
}

// =============================================================================
// SliceCursor
// =============================================================================

/// Random-access cursor into a borrowed slice.
///
/// Two slice cursors are equal only when they point into the same slice (by
/// address and length) at the same position.
pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    pos: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    pub fn new(slice: &'a [T], pos: usize) -> Self {
        SliceCursor { slice, pos }
    }

    /// Position of this cursor within its slice.
    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn slice(&self) -> &'a [T] {
        self.slice
    }
}

// --- Manual Clone/Copy/Debug/PartialEq to avoid bounds on T ---

impl<T> Clone for SliceCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<T> fmt::Debug for SliceCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceCursor")
            .field("len", &self.slice.len())
            .field("pos", &self.pos)
            .finish()
    }
}

impl<T> PartialEq for SliceCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.slice, other.slice) && self.pos == other.pos
    }
}

impl<T> Eq for SliceCursor<'_, T> {}

static_assertions::assert_eq_size!(SliceCursor<'static, u8>, (usize, usize, usize));
static_assertions::assert_impl_all!(SliceCursor<'static, u8>: Copy, Send, Sync);

impl<'a, T> Cursor for SliceCursor<'a, T> {
    type Item = &'a T;

    /// # Panics
    ///
    /// Panics when the cursor is at or past the end of the slice.
    fn get(&self) -> &'a T {
        &self.slice[self.pos]
    }

    fn step_forward(&mut self) {
        self.pos += 1;
    }

    fn remaining(&self, end: &Self) -> Option<usize> {
        Some(end.pos.saturating_sub(self.pos))
    }
}

impl<T> BidirectionalCursor for SliceCursor<'_, T> {
    fn step_backward(&mut self) {
        self.pos -= 1;
    }
}

impl<T> RandomAccessCursor for SliceCursor<'_, T> {
    fn advance(&mut self, n: usize) {
        self.pos = self.pos.saturating_add(n);
    }

    fn retreat(&mut self, n: usize) -> Result<()> {
        if n > self.pos {
            return Err(ViewError::OutOfRange {
                requested: n,
                available: self.pos,
            });
        }
        self.pos -= n;
        Ok(())
    }

    fn distance(&self, other: &Self) -> isize {
        to_isize(other.pos) - to_isize(self.pos)
    }
}

/// Positions are bounded by slice lengths, which never exceed `isize::MAX`.
pub(crate) fn to_isize(value: usize) -> isize {
    isize::try_from(value).unwrap_or(isize::MAX)
}

// =============================================================================
// Sequence impls for borrowed storage
// =============================================================================

impl<'a, T> Sequence for &'a [T] {
    type Cursor = SliceCursor<'a, T>;

    fn begin(&self) -> Self::Cursor {
        SliceCursor::new(*self, 0)
    }

    fn end(&self) -> Self::Cursor {
        SliceCursor::new(*self, self.len())
    }
}

impl<'a, T> Sequence for &'a Vec<T> {
    type Cursor = SliceCursor<'a, T>;

    fn begin(&self) -> Self::Cursor {
        SliceCursor::new((*self).as_slice(), 0)
    }

    fn end(&self) -> Self::Cursor {
        SliceCursor::new((*self).as_slice(), self.len())
    }
}

impl<'a, T, const N: usize> Sequence for &'a [T; N] {
    type Cursor = SliceCursor<'a, T>;

    fn begin(&self) -> Self::Cursor {
        SliceCursor::new((*self).as_slice(), 0)
    }

    fn end(&self) -> Self::Cursor {
        SliceCursor::new((*self).as_slice(), N)
    }
}

#[cfg(test)]
#[path = "cursor_test.rs"]
mod cursor_test;
