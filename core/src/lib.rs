//! Lazy, borrowing views over one or more sequences.
//!
//! A view is a pair of cursors. Adapters produce views whose cursors compute
//! values on demand from the cursors of the sequences they wrap; nothing is
//! copied until the view is materialized.
//!
//! ```text
//! ┌──────────────┐     ┌──────────────────┐     ┌──────────────────┐
//! │  cursor.rs   │────▶│    tuple.rs      │────▶│ zip.rs concat.rs │
//! │ (contract,   │     │ (per-component   │     │ (multi-sequence  │
//! │  Sequence)   │     │  recursion)      │     │  cursors)        │
//! └──────────────┘     └──────────────────┘     └──────────────────┘
//!        │                                               │
//!        ▼                                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                 view.rs (BasicView, View, Container)             │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use lazyview_core::{View, concat, zip};
//!
//! let numbers = [1, 2, 3];
//! let letters = ["a", "b"];
//!
//! let pairs = zip((&numbers, &letters)).to_vec();
//! assert_eq!(pairs, vec![(&1, &"a"), (&2, &"b")]);
//!
//! let tail = vec![4, 5];
//! let joined = concat((&numbers, &tail));
//! assert_eq!(joined.to_string_with(", "), "1, 2, 3, 4, 5");
//! ```

pub mod concat;
pub mod cursor;
pub mod error;
pub mod execution;
pub mod iter;
pub mod tuple;
pub mod view;
pub mod zip;

pub use concat::{Concat, ConcatCursor, concat};
pub use cursor::{BidirectionalCursor, Cursor, RandomAccessCursor, Sequence, SliceCursor};
pub use error::{Result, ViewError};
pub use execution::Execution;
pub use iter::Iter;
pub use view::{BasicView, Container, View, view};
pub use zip::{Zip, ZipCursor, zip};
