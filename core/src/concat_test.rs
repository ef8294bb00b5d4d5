//! Tests for the concatenate adapter

use super::*;
use crate::cursor::Sequence;
use crate::error::ViewError;
use crate::test_utils::copied;
use crate::view::View;
use pretty_assertions::assert_eq;

#[test]
fn test_concat_yields_inputs_in_order() {
    let head = [1, 2];
    let tail = vec![3, 4, 5];
    let joined = concat((&head, &tail));

    assert_eq!(joined.to_vec(), vec![&1, &2, &3, &4, &5]);
    assert_eq!(joined.len(), 5);
}

#[test]
fn test_concat_skips_empty_inputs() {
    let a: [i32; 0] = [];
    let b = [1];
    let c: Vec<i32> = Vec::new();
    let d = [2, 3];
    let joined = concat((&a, &b, &c, &d));

    assert_eq!(joined.to_vec(), vec![&1, &2, &3]);
    assert_eq!(joined.len(), 3);
}

#[test]
fn test_concat_jump_forward_lands_in_later_input() {
    let head = [1, 2];
    let tail = [3, 4, 5];
    let joined = concat((&head, &tail));
    let mut cursor = joined.begin();

    cursor.advance(3);
    assert_eq!(cursor.get(), &4);
    assert_eq!(joined.begin().at(4), Ok(&5));
}

#[test]
fn test_concat_jump_round_trip() {
    let head = [1, 2];
    let tail = [3, 4, 5];
    let joined = concat((&head, &tail));

    for start in 0..5 {
        for k in 0..=(5 - start) {
            let mut origin = joined.begin();
            origin.advance(start);
            let mut cursor = origin.clone();
            cursor.advance(k);
            assert_eq!(cursor.retreat(k), Ok(()));
            assert!(cursor == origin, "start {start}, k {k}");
        }
    }
}

#[test]
fn test_concat_retreat_before_begin_fails_atomically() {
    let head = [1, 2];
    let tail = [3, 4, 5];
    let joined = concat((&head, &tail));
    let mut cursor = joined.begin();
    cursor.advance(3);

    assert_eq!(
        cursor.retreat(4),
        Err(ViewError::OutOfRange {
            requested: 3,
            available: 2
        })
    );
    assert_eq!(cursor.get(), &4);
}

#[test]
fn test_concat_reverse_iteration() {
    let head = [1, 2];
    let tail = vec![3, 4, 5];
    let joined = concat((&head, &tail));

    let reversed: Vec<_> = joined.iter().rev().collect();
    assert_eq!(reversed, vec![&5, &4, &3, &2, &1]);
}

#[test]
fn test_concat_distance_is_antisymmetric() {
    let head = [1, 2];
    let tail = [3, 4, 5];
    let joined = concat((&head, &tail));
    let mut a = joined.begin();
    a.advance(1);
    let mut b = joined.begin();
    b.advance(4);

    assert_eq!(a.distance(&b), 3);
    assert_eq!(b.distance(&a), -3);
}

#[test]
fn test_concat_converts_later_items() {
    let wide: [u32; 2] = [300, 400];
    let small: [u8; 2] = [1, 2];
    let joined = concat((copied(&wide), copied(&small)));

    assert_eq!(joined.to_vec(), vec![300u32, 400, 1, 2]);
}
