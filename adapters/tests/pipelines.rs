//! Integration tests composing adapters with zip and concat.

use lazyview_adapters::{enumerate, generate, map, range, range_to, take_every, unique};
use lazyview_core::{Execution, View, concat, zip};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_scenarios() {
    let data = [1, 2, 3, 4, 5];
    let dupes = [1, 1, 2, 3, 3];
    let words = ["a", "b"];

    assert_eq!(range(0, 10, 3).unwrap().to_vec(), [0, 3, 6, 9]);
    assert!(range(0, 10, 0).is_err());
    assert_eq!(take_every(&data, 2, 0).unwrap().to_vec(), [&1, &3, &5]);
    assert_eq!(unique(&dupes).to_vec(), [&1, &2, &3]);
    assert_eq!(enumerate(&words, 0usize).to_vec(), [(0, &"a"), (1, &"b")]);
    assert_eq!(generate(|| 7, Some(3)).to_vec(), [7, 7, 7]);
}

#[test]
fn test_concat_of_ranges() {
    let low = range_to(3).unwrap();
    let high = range(10, 13, 1).unwrap();
    let joined = concat((&low, &high));

    assert_eq!(joined.to_vec(), [0, 1, 2, 10, 11, 12]);
    assert_eq!(joined.to_string_with(" "), joined.to_string());
}

#[test]
fn test_zip_adapters_to_map() {
    let names = ["ada", "alan", "grace"];
    let lengths = map(&names, |name| name.len());
    let by_index = zip((range_to(3usize).unwrap(), &names, &lengths)).to_btree_map(|(i, _, _)| *i);

    assert_eq!(by_index[&2], (2, &"grace", 5));
    assert_eq!(by_index.len(), 3);
}

#[test]
fn test_parallel_over_adapters() {
    let squares = map(range_to(20_000u64).unwrap(), |x| x * x);

    assert_eq!(
        squares.to_vec_exec(Execution::Parallel),
        squares.to_vec_exec(Execution::Sequential)
    );
}

proptest! {
    /// A range has `ceil((end - start) / step)` elements, each in bounds.
    #[test]
    fn prop_range_length_and_bounds(start in -1000i64..1000, span in 0i64..1000, step in 1i64..50) {
        let end = start + span;
        let values = range(start, end, step).unwrap().to_vec();

        prop_assert_eq!(values.len() as i64, (span + step - 1) / step);
        prop_assert!(values.iter().all(|v| *v >= start && *v < end));
    }

    /// Stride selection picks exactly the indices `start, start + offset, ..`.
    #[test]
    fn prop_take_every_matches_step_by(
        data in prop::collection::vec(any::<u16>(), 0..64),
        offset in 1usize..8,
        start in 0usize..8,
    ) {
        let expected: Vec<&u16> = data.iter().skip(start).step_by(offset).collect();
        let view = take_every(&data, offset, start).unwrap();

        prop_assert_eq!(view.iter().size_hint().0, expected.len());
        prop_assert_eq!(view.to_vec(), expected);
    }

    /// `unique` agrees with `Vec::dedup`.
    #[test]
    fn prop_unique_matches_dedup(data in prop::collection::vec(0u8..4, 0..64)) {
        let mut expected = data.clone();
        expected.dedup();
        let actual: Vec<u8> = unique(&data).iter().copied().collect();
        prop_assert_eq!(actual, expected);
    }
}
