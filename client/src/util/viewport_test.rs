#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn scroll_offset_is_zero_in_non_hydrate_tests() {
    assert!(scroll_offset().abs() < f64::EPSILON);
}

#[test]
fn scroll_to_top_is_noop_but_callable() {
    scroll_to_top();
}
