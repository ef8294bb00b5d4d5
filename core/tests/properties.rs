//! Property tests for zip and concatenation.

use lazyview_core::{Cursor, RandomAccessCursor, Sequence, View, concat, zip};
use proptest::prelude::*;

fn small_vec() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(any::<i32>(), 0..16)
}

proptest! {
    /// Zipped length is the shortest input length.
    #[test]
    fn prop_zip_length_is_minimum(a in small_vec(), b in small_vec(), c in small_vec()) {
        let zipped = zip((&a, &b, &c));
        let expected = a.len().min(b.len()).min(c.len());

        prop_assert_eq!(zipped.len(), expected);
        prop_assert_eq!(zipped.to_vec().len(), expected);
        prop_assert_eq!(zipped.iter().count(), expected);
    }

    /// Concatenated length is the sum and element `i` comes from the input
    /// whose cumulative range contains `i`.
    #[test]
    fn prop_concat_indexing(a in small_vec(), b in small_vec(), c in small_vec()) {
        let joined = concat((&a, &b, &c));
        let flat: Vec<i32> = a.iter().chain(&b).chain(&c).copied().collect();

        prop_assert_eq!(joined.len(), flat.len());
        for (i, expected) in flat.iter().enumerate() {
            let mut cursor = joined.begin();
            cursor.advance(i);
            prop_assert_eq!(cursor.get(), expected);
        }
    }

    /// Jumping forward then back by the same offset returns to the origin.
    #[test]
    fn prop_concat_jump_round_trip(
        a in small_vec(),
        b in small_vec(),
        c in small_vec(),
        start in 0usize..48,
        k in 0usize..48,
    ) {
        let joined = concat((&a, &b, &c));
        let len = joined.len();
        let start = start.min(len);
        let k = k.min(len - start);

        let mut origin = joined.begin();
        origin.advance(start);
        let mut cursor = origin.clone();
        cursor.advance(k);
        prop_assert_eq!(cursor.retreat(k), Ok(()));
        prop_assert!(cursor == origin);
    }

    /// Distance is antisymmetric for both adapters.
    #[test]
    fn prop_distance_antisymmetric(
        a in small_vec(),
        b in small_vec(),
        i in 0usize..32,
        j in 0usize..32,
    ) {
        let joined = concat((&a, &b));
        let len = joined.len();
        let (mut x, mut y) = (joined.begin(), joined.begin());
        x.advance(i.min(len));
        y.advance(j.min(len));
        prop_assert_eq!(x.distance(&y), -y.distance(&x));

        let zipped = zip((&a, &b));
        let len = zipped.len();
        let (mut x, mut y) = (zipped.begin(), zipped.begin());
        x.advance(i.min(len));
        y.advance(j.min(len));
        prop_assert_eq!(x.distance(&y), -y.distance(&x));
    }

    /// Materializing twice gives equal results.
    #[test]
    fn prop_materialization_idempotent(a in small_vec(), b in small_vec()) {
        let joined = concat((&a, &b));
        prop_assert_eq!(joined.to_vec(), joined.to_vec());
        prop_assert_eq!(joined.to_string_with(","), joined.to_string_with(","));
    }

    /// Reverse iteration of a zip mirrors forward iteration, whatever the
    /// input lengths.
    #[test]
    fn prop_zip_reverse(a in small_vec(), b in small_vec(), c in small_vec()) {
        let zipped = zip((&a, &b, &c));
        let mut forward = zipped.to_vec();
        forward.reverse();
        let backward: Vec<_> = zipped.iter().rev().collect();
        prop_assert_eq!(backward, forward);
    }

    /// Reverse iteration of a concatenation mirrors forward iteration.
    #[test]
    fn prop_concat_reverse(a in small_vec(), b in small_vec(), c in small_vec()) {
        let joined = concat((&a, &b, &c));
        let mut forward = joined.to_vec();
        forward.reverse();
        let backward: Vec<_> = joined.iter().rev().collect();
        prop_assert_eq!(backward, forward);
    }
}
