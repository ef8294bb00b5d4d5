//! Integration tests for the public API.
//!
//! Exercises zip, concatenation and materialization the way a downstream
//! crate would, through the crate root re-exports only.

use std::collections::BTreeMap;

use lazyview_core::{
    BidirectionalCursor, Cursor, Execution, RandomAccessCursor, Sequence, View, ViewError, concat,
    view, zip,
};
use pretty_assertions::assert_eq;

#[test]
fn test_zip_of_numbers_and_letters() {
    let numbers = [1, 2, 3];
    let letters = ["a", "b"];
    let zipped = zip((&numbers, &letters));

    assert_eq!(zipped.to_vec(), vec![(&1, &"a"), (&2, &"b")]);
    assert_eq!(zipped.len(), 2);
}

#[test]
fn test_concat_and_jump() {
    let head = vec![1, 2];
    let tail = vec![3, 4, 5];
    let joined = concat((&head, &tail));

    assert_eq!(joined.to_vec(), vec![&1, &2, &3, &4, &5]);

    let mut cursor = joined.begin();
    cursor.advance(3);
    assert_eq!(cursor.get(), &4);
    cursor.step_backward();
    assert_eq!(cursor.get(), &3);
}

#[test]
fn test_to_string_scenarios() {
    let data = [1, 2, 3];
    let empty: [i32; 0] = [];

    assert_eq!(view(&data).to_string_with(", "), "1, 2, 3");
    assert_eq!(view(&empty).to_string_with(", "), "");
}

#[test]
fn test_zip_inside_concat() {
    let a = [1, 2];
    let b = [10, 20];
    let c = [3];
    let d = [30];
    let first = zip((&a, &b));
    let second = zip((&c, &d));
    let joined = concat((&first, &second));

    assert_eq!(joined.to_vec(), vec![(&1, &10), (&2, &20), (&3, &30)]);
    assert_eq!(joined.len(), 3);
}

#[test]
fn test_map_keyed_by_field() {
    let people = [("ada", 36), ("alan", 41), ("grace", 85)];
    let by_name: BTreeMap<_, _> = view(&people).to_btree_map(|(name, _)| *name);

    assert_eq!(by_name.keys().copied().collect::<Vec<_>>(), ["ada", "alan", "grace"]);
    assert_eq!(by_name["alan"], &("alan", 41));
}

#[test]
fn test_parallel_matches_sequential() {
    let left: Vec<i64> = (0..10_000).collect();
    let right: Vec<i64> = (0..10_000).map(|x| x * 2).collect();
    let tail: Vec<i64> = (0..3_333).collect();
    let joined = concat((&left, &right, &tail));

    assert_eq!(
        joined.to_vec_exec(Execution::Parallel),
        joined.to_vec_exec(Execution::Sequential)
    );
}

#[test]
fn test_out_of_range_surfaces_to_caller() {
    let head = [1, 2];
    let tail = [3];
    let joined = concat((&head, &tail));
    let cursor = joined.begin();

    assert_eq!(
        cursor.at(-1),
        Err(ViewError::OutOfRange {
            requested: 1,
            available: 0
        })
    );
}
