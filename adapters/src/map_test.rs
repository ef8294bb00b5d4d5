//! Tests for map

use super::*;
use lazyview_core::View;
use pretty_assertions::assert_eq;

#[test]
fn test_map_transforms_items() {
    let words = ["one", "three"];
    assert_eq!(map(&words, |w| w.len()).to_vec(), vec![3, 5]);
}

#[test]
fn test_map_keeps_random_access() {
    let data = [1, 2, 3, 4];
    let doubled = map(&data, |x| x * 2);

    assert_eq!(doubled.len(), 4);
    assert_eq!(doubled.begin().at(3), Ok(8));
    let reversed: Vec<_> = doubled.iter().rev().collect();
    assert_eq!(reversed, vec![8, 6, 4, 2]);
}

#[test]
fn test_map_changes_item_type() {
    let data = [1u8, 2];
    let view = map(&data, |x| format!("<{x}>"));
    assert_eq!(view.to_string_with(""), "<1><2>");
}
