//! Views and materialization.
//!
//! Every adapter produces a [`BasicView`]: a begin/end cursor pair. The
//! [`View`] trait turns that pair into concrete results. All materializations
//! are non-destructive: a view hands out fresh cursors on every call, so
//! materializing twice yields two equal, independent results.

use core::fmt;
use core::hash::{BuildHasher, Hash};
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, LinkedList, VecDeque};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::cursor::{Cursor, RandomAccessCursor, Sequence};
use crate::error::{Result, ViewError};
use crate::execution::Execution;
use crate::iter::Iter;

/// Item type produced by a sequence's cursors.
pub type ItemOf<S> = <<S as Sequence>::Cursor as Cursor>::Item;

// =============================================================================
// BasicView
// =============================================================================

/// An immutable begin/end cursor pair.
///
/// Asking for `begin()` or `end()` clones the stored cursor, so a view can be
/// iterated any number of times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasicView<C> {
    begin: C,
    end: C,
}

static_assertions::assert_eq_size!(BasicView<crate::SliceCursor<'static, u8>>, [usize; 6]);

impl<C: Cursor> BasicView<C> {
    pub fn new(begin: C, end: C) -> Self {
        BasicView { begin, end }
    }

    pub fn into_cursors(self) -> (C, C) {
        (self.begin, self.end)
    }
}

/// Wraps any sequence in a view, giving it the materialization methods.
///
/// ```
/// use lazyview_core::{View, view};
///
/// let data = vec![3, 1, 2];
/// assert_eq!(view(&data).to_string_with("-"), "3-1-2");
/// ```
pub fn view<S: Sequence>(sequence: S) -> BasicView<S::Cursor> {
    BasicView::new(sequence.begin(), sequence.end())
}

impl<C: Cursor> Sequence for BasicView<C> {
    type Cursor = C;

    fn begin(&self) -> C {
        self.begin.clone()
    }

    fn end(&self) -> C {
        self.end.clone()
    }
}

impl<C: Cursor> Sequence for &BasicView<C> {
    type Cursor = C;

    fn begin(&self) -> C {
        self.begin.clone()
    }

    fn end(&self) -> C {
        self.end.clone()
    }
}

impl<C: Cursor> View for BasicView<C> {}

impl<C: Cursor> IntoIterator for BasicView<C> {
    type Item = C::Item;
    type IntoIter = Iter<C>;

    fn into_iter(self) -> Iter<C> {
        Iter::new(self.begin, self.end)
    }
}

impl<C: Cursor> IntoIterator for &BasicView<C> {
    type Item = C::Item;
    type IntoIter = Iter<C>;

    fn into_iter(self) -> Iter<C> {
        self.iter()
    }
}

/// Renders the elements separated by a single space.
impl<C> fmt::Display for BasicView<C>
where
    C: Cursor,
    C::Item: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(" "))
    }
}

// =============================================================================
// Container
// =============================================================================

/// A collection a view can be materialized into.
///
/// `reserve_for` is called with the exact element count before insertion when
/// the source can report it cheaply. Collections without a reservation
/// primitive keep the default no-op.
pub trait Container<T>: Extend<T> {
    fn reserve_for(&mut self, additional: usize) {
        let _ = additional;
    }
}

impl<T> Container<T> for Vec<T> {
    fn reserve_for(&mut self, additional: usize) {
        self.reserve(additional);
    }
}

impl<T> Container<T> for VecDeque<T> {
    fn reserve_for(&mut self, additional: usize) {
        self.reserve(additional);
    }
}

impl<T> Container<T> for LinkedList<T> {}

impl<T: Ord> Container<T> for BTreeSet<T> {}

impl<T: Ord> Container<T> for BinaryHeap<T> {
    fn reserve_for(&mut self, additional: usize) {
        self.reserve(additional);
    }
}

impl<T: Eq + Hash, S: BuildHasher> Container<T> for std::collections::HashSet<T, S> {
    fn reserve_for(&mut self, additional: usize) {
        self.reserve(additional);
    }
}

impl<T: Eq + Hash, S: BuildHasher> Container<T> for hashbrown::HashSet<T, S> {
    fn reserve_for(&mut self, additional: usize) {
        self.reserve(additional);
    }
}

impl<A: smallvec::Array> Container<A::Item> for smallvec::SmallVec<A> {
    fn reserve_for(&mut self, additional: usize) {
        self.reserve(additional);
    }
}

impl<T, A: allocator_api2::alloc::Allocator> Container<T> for allocator_api2::vec::Vec<T, A> {
    fn reserve_for(&mut self, additional: usize) {
        self.reserve(additional);
    }
}

impl Container<char> for String {
    fn reserve_for(&mut self, additional: usize) {
        self.reserve(additional);
    }
}

impl<'a> Container<&'a str> for String {}

impl Container<String> for String {}

// =============================================================================
// View
// =============================================================================

/// Materialization methods shared by every view.
///
/// Methods that need an element count take it from
/// [`Cursor::remaining`] when available and count by traversal otherwise.
pub trait View: Sequence + Sized {
    fn iter(&self) -> Iter<Self::Cursor> {
        Iter::new(self.begin(), self.end())
    }

    /// Number of elements. Constant time.
    fn len(&self) -> usize
    where
        Self::Cursor: RandomAccessCursor,
    {
        self.begin().distance(&self.end()).max(0).unsigned_abs()
    }

    fn is_empty(&self) -> bool {
        self.begin() == self.end()
    }

    /// Materializes into a default-constructed container.
    fn to<T>(&self) -> T
    where
        T: Container<ItemOf<Self>> + Default,
    {
        self.to_with(T::default())
    }

    /// Materializes into a caller-constructed container, e.g. one that carries
    /// a custom allocator or hasher. Existing contents are kept.
    fn to_with<T>(&self, mut target: T) -> T
    where
        T: Container<ItemOf<Self>>,
    {
        if let Some(n) = self.begin().remaining(&self.end()) {
            target.reserve_for(n);
        }
        target.extend(self.iter());
        target
    }

    fn to_vec(&self) -> Vec<ItemOf<Self>> {
        self.to()
    }

    /// Copies the elements into a fixed-size array, padding the tail with
    /// `Default::default()`.
    ///
    /// Fails with [`ViewError::CapacityExceeded`] when the view has more than
    /// `N` elements; nothing is copied in that case.
    fn to_array<const N: usize>(&self) -> Result<[ItemOf<Self>; N]>
    where
        ItemOf<Self>: Default,
    {
        let len = self.count();
        check_capacity(len, N)?;
        let mut out: [ItemOf<Self>; N] = core::array::from_fn(|_| Default::default());
        for (slot, item) in out.iter_mut().zip(self.iter()) {
            *slot = item;
        }
        Ok(out)
    }

    /// Moves the elements into an array of exactly `N` elements. Unlike
    /// [`to_array`](Self::to_array) it places no bound on the item type, so it
    /// works on views of borrowed elements.
    ///
    /// Fails with [`ViewError::CapacityExceeded`] when the view is longer than
    /// `N` and with [`ViewError::LengthMismatch`] when it is shorter.
    fn to_array_exact<const N: usize>(&self) -> Result<[ItemOf<Self>; N]> {
        let len = self.count();
        check_capacity(len, N)?;
        let items: Vec<ItemOf<Self>> = self.iter().collect();
        items.try_into().map_err(|items: Vec<ItemOf<Self>>| {
            tracing::debug!(
                len = items.len(),
                expected = N,
                "source is shorter than the requested array"
            );
            ViewError::LengthMismatch {
                len: items.len(),
                expected: N,
            }
        })
    }

    /// Builds an ordered map keyed by `key`. A later element replaces an
    /// earlier one with the same key.
    fn to_btree_map<K, F>(&self, key: F) -> BTreeMap<K, ItemOf<Self>>
    where
        K: Ord,
        F: FnMut(&ItemOf<Self>) -> K,
    {
        self.to_map_with(key, BTreeMap::new())
    }

    /// Builds a hash map keyed by `key`. A later element replaces an earlier
    /// one with the same key.
    fn to_hash_map<K, F>(&self, key: F) -> hashbrown::HashMap<K, ItemOf<Self>>
    where
        K: Eq + Hash,
        F: FnMut(&ItemOf<Self>) -> K,
    {
        self.to_map_with(key, hashbrown::HashMap::new())
    }

    /// Inserts `(key(&item), item)` for every element into `map`, which is
    /// returned with whatever hasher, comparator or allocator it was built
    /// with.
    fn to_map_with<K, F, M>(&self, mut key: F, mut map: M) -> M
    where
        F: FnMut(&ItemOf<Self>) -> K,
        M: Extend<(K, ItemOf<Self>)>,
    {
        map.extend(self.iter().map(|item| (key(&item), item)));
        map
    }

    /// Formats every element followed by `delimiter`, then drops the trailing
    /// delimiter.
    fn to_string_with(&self, delimiter: &str) -> String
    where
        ItemOf<Self>: fmt::Display,
    {
        let mut out = render(self.iter(), delimiter);
        trim_delimiter(&mut out, delimiter);
        out
    }

    // --- Execution-aware variants ---

    /// [`to_vec`](Self::to_vec) with an execution policy.
    fn to_vec_exec(&self, execution: Execution) -> Vec<ItemOf<Self>>
    where
        Self::Cursor: RandomAccessCursor + Sync,
        ItemOf<Self>: Send,
    {
        match gather(&self.begin(), &self.end(), execution) {
            Some(items) => items,
            None => self.to_vec(),
        }
    }

    /// [`to`](Self::to) with an execution policy.
    fn to_exec<T>(&self, execution: Execution) -> T
    where
        T: Container<ItemOf<Self>> + Default,
        Self::Cursor: RandomAccessCursor + Sync,
        ItemOf<Self>: Send,
    {
        match gather(&self.begin(), &self.end(), execution) {
            Some(items) => {
                let mut target = T::default();
                target.reserve_for(items.len());
                target.extend(items);
                target
            }
            None => self.to(),
        }
    }

    /// [`to_array`](Self::to_array) with an execution policy.
    fn to_array_exec<const N: usize>(&self, execution: Execution) -> Result<[ItemOf<Self>; N]>
    where
        ItemOf<Self>: Default + Send,
        Self::Cursor: RandomAccessCursor + Sync,
    {
        check_capacity(self.len(), N)?;
        match gather(&self.begin(), &self.end(), execution) {
            Some(items) => {
                let mut out: [ItemOf<Self>; N] = core::array::from_fn(|_| Default::default());
                for (slot, item) in out.iter_mut().zip(items) {
                    *slot = item;
                }
                Ok(out)
            }
            None => self.to_array(),
        }
    }

    /// [`to_string_with`](Self::to_string_with) with an execution policy.
    fn to_string_exec(&self, delimiter: &str, execution: Execution) -> String
    where
        ItemOf<Self>: fmt::Display + Send,
        Self::Cursor: RandomAccessCursor + Sync,
    {
        match render_chunks(&self.begin(), &self.end(), delimiter, execution) {
            Some(mut out) => {
                trim_delimiter(&mut out, delimiter);
                out
            }
            None => self.to_string_with(delimiter),
        }
    }

    /// Element count, by distance when the cursor knows it and by traversal
    /// otherwise.
    #[doc(hidden)]
    fn count(&self) -> usize {
        let (begin, end) = (self.begin(), self.end());
        match begin.remaining(&end) {
            Some(n) => n,
            None => Iter::new(begin, end).count(),
        }
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn check_capacity(len: usize, capacity: usize) -> Result<()> {
    if len > capacity {
        tracing::debug!(len, capacity, "source does not fit the requested array");
        return Err(ViewError::CapacityExceeded { len, capacity });
    }
    Ok(())
}

fn render<I>(items: I, delimiter: &str) -> String
where
    I: Iterator,
    I::Item: fmt::Display,
{
    use fmt::Write as _;

    items.fold(String::new(), |mut out, item| {
        let _ = write!(out, "{item}{delimiter}");
        out
    })
}

fn trim_delimiter(out: &mut String, delimiter: &str) {
    if out.ends_with(delimiter) {
        out.truncate(out.len() - delimiter.len());
    }
}

/// Elements per parallel work item.
#[cfg(feature = "parallel")]
const CHUNK: usize = 1024;

/// Runs `f` on each chunk of `[begin, end)` in parallel, returning the results
/// in source order. `f` receives a cursor at the chunk start and the number of
/// elements in the chunk.
#[cfg(feature = "parallel")]
fn par_chunks<C, R, F>(begin: &C, end: &C, f: F) -> Vec<R>
where
    C: RandomAccessCursor + Sync,
    R: Send,
    F: Fn(Iter<C>) -> R + Sync + Send,
{
    let len = begin.distance(end).max(0).unsigned_abs();
    (0..len.div_ceil(CHUNK))
        .into_par_iter()
        .map(|index| {
            let start = index * CHUNK;
            let mut from = begin.clone();
            from.advance(start);
            let mut to = from.clone();
            to.advance(CHUNK.min(len - start));
            f(Iter::new(from, to))
        })
        .collect()
}

#[cfg(feature = "parallel")]
fn gather<C>(begin: &C, end: &C, execution: Execution) -> Option<Vec<C::Item>>
where
    C: RandomAccessCursor + Sync,
    C::Item: Send,
{
    if !execution.is_parallel() {
        return None;
    }
    let chunks = par_chunks(begin, end, |chunk| chunk.collect::<Vec<_>>());
    Some(chunks.into_iter().flatten().collect())
}

#[cfg(feature = "parallel")]
fn render_chunks<C>(begin: &C, end: &C, delimiter: &str, execution: Execution) -> Option<String>
where
    C: RandomAccessCursor + Sync,
    C::Item: fmt::Display,
{
    if !execution.is_parallel() {
        return None;
    }
    let chunks = par_chunks(begin, end, |chunk| render(chunk, delimiter));
    Some(chunks.concat())
}

#[cfg(not(feature = "parallel"))]
fn gather<C>(_begin: &C, _end: &C, execution: Execution) -> Option<Vec<C::Item>>
where
    C: RandomAccessCursor,
{
    sequential_fallback(execution);
    None
}

#[cfg(not(feature = "parallel"))]
fn render_chunks<C>(_begin: &C, _end: &C, _delimiter: &str, execution: Execution) -> Option<String>
where
    C: RandomAccessCursor,
{
    sequential_fallback(execution);
    None
}

#[cfg(not(feature = "parallel"))]
fn sequential_fallback(execution: Execution) {
    if execution.is_parallel() {
        tracing::debug!("built without the parallel feature, materializing sequentially");
    }
}

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;
