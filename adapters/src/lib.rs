//! Single-sequence adapters built on the `lazyview-core` cursor contract.
//!
//! Each adapter wraps one sequence (or none, for [`generate`] and [`range`])
//! and returns a [`BasicView`](lazyview_core::BasicView), so every adapter
//! gets the materialization methods of [`View`](lazyview_core::View) and can
//! be fed into `zip` or `concat` like any other sequence.
//!
//! ```
//! use lazyview_adapters::{enumerate, range, take_every};
//! use lazyview_core::View;
//!
//! let evens = range(0, 10, 2).unwrap();
//! assert_eq!(evens.to_string_with(","), "0,2,4,6,8");
//!
//! let every_other = take_every(&evens, 2, 0).unwrap();
//! let tagged: Vec<(usize, i32)> = enumerate(&every_other, 0).to_vec();
//! assert_eq!(tagged, [(0, 0), (1, 4), (2, 8)]);
//! ```

pub mod enumerate;
pub mod generate;
pub mod map;
pub mod range;
pub mod take_every;
pub mod unique;

pub use enumerate::{EnumerateCursor, enumerate};
pub use generate::{GenerateCursor, generate};
pub use map::{MapCursor, map};
pub use range::{Arithmetic, RangeCursor, range, range_to};
pub use take_every::{TakeEveryCursor, take_every};
pub use unique::{UniqueCursor, unique};
