//! Tests for enumerate

use super::*;
use lazyview_core::View;
use pretty_assertions::assert_eq;

#[test]
fn test_enumerate_from_zero() {
    let words = ["a", "b"];
    assert_eq!(
        enumerate(&words, 0usize).to_vec(),
        vec![(0, &"a"), (1, &"b")]
    );
}

#[test]
fn test_enumerate_custom_start_and_index_type() {
    let data = [7, 8, 9];
    let tagged: Vec<(i8, &i32)> = enumerate(&data, -1i8).to_vec();
    assert_eq!(tagged, vec![(-1, &7), (0, &8), (1, &9)]);
}

#[test]
fn test_enumerate_reverse_keeps_indices() {
    let data = ['x', 'y', 'z'];
    let reversed: Vec<_> = enumerate(&data, 10u32).iter().rev().collect();
    assert_eq!(reversed, vec![(12, &'z'), (11, &'y'), (10, &'x')]);
}

#[test]
fn test_enumerate_jumps_move_index() {
    let data = [1, 2, 3, 4];
    let view = enumerate(&data, 0u64);
    let mut cursor = view.begin();

    cursor.advance(3);
    assert_eq!(cursor.get(), (3, &4));
    assert_eq!(cursor.retreat(2), Ok(()));
    assert_eq!(cursor.get(), (1, &2));
    assert_eq!(cursor.distance(&view.end()), 3);
}

#[test]
fn test_enumerate_index_saturates() {
    let data = [1, 2, 3];
    let tagged: Vec<(u8, &i32)> = enumerate(&data, 254u8).to_vec();
    assert_eq!(tagged, vec![(254, &1), (255, &2), (255, &3)]);
}
