//! lazyview - lazy, borrowing sequence views
//!
//! # Overview
//!
//! Views are begin/end cursor pairs that compute their elements on demand from
//! the sequences they borrow. Adapters compose: a zip of a range and a slice
//! can be concatenated with a mapped vector and only materialized at the end.
//!
//! # Quick Start
//!
//! ```
//! use lazyview::{View, concat, enumerate, range, unique, zip};
//!
//! let sorted = [1, 1, 2, 3, 3];
//! let letters = ["a", "b", "c"];
//!
//! // Adjacent duplicates dropped
//! let distinct = unique(&sorted);
//! assert_eq!(distinct.to_string_with(", "), "1, 2, 3");
//!
//! // Lockstep pairs, as long as the shortest input
//! let pairs = zip((&distinct, &letters)).to_vec();
//! assert_eq!(pairs, [(&1, &"a"), (&2, &"b"), (&3, &"c")]);
//!
//! // One sequence after another
//! let numbers = range(10, 13, 1).unwrap();
//! let joined = concat((&numbers, range(0, 2, 1).unwrap()));
//! assert_eq!(joined.to_vec(), [10, 11, 12, 0, 1]);
//!
//! // Materialize into a map keyed by index
//! let by_index = enumerate(&letters, 0u32).to_btree_map(|(i, _)| *i);
//! assert_eq!(by_index[&2], (2, &"c"));
//! ```
//!
//! # Crates
//!
//! - [`lazyview_core`]: the cursor contract, zip, concat and materialization.
//! - [`lazyview_adapters`]: enumerate, generate, map, range, take-every and
//!   unique.
//!
//! # Parallel materialization
//!
//! With the `parallel` feature (on by default), the `*_exec` methods of
//! [`View`] accept [`Execution::Parallel`] and split random-access views into
//! chunks collected with rayon. Output order is the same as the sequential
//! path.

// Re-export the cursor contract and multi-sequence adapters
pub use lazyview_core::{
    BasicView, BidirectionalCursor, Concat, ConcatCursor, Container, Cursor, Execution, Iter,
    RandomAccessCursor, Result, Sequence, SliceCursor, View, ViewError, Zip, ZipCursor, concat,
    view, zip,
};
pub use lazyview_core::{cursor, tuple};

// Re-export single-sequence adapters
pub use lazyview_adapters::{
    Arithmetic, EnumerateCursor, GenerateCursor, MapCursor, RangeCursor, TakeEveryCursor,
    UniqueCursor, enumerate, generate, map, range, range_to, take_every, unique,
};
