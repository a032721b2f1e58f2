//! Tests for slice and pop

use super::*;
use alloc::{
    string::{String, ToString},
    vec::Vec,
};
use pretty_assertions::assert_eq;

fn owned(vs: &[&str]) -> Vec<String> {
    vs.iter().map(|v| v.to_string()).collect()
}

// ============================================================================
// slice / slice_mut
// ============================================================================

#[test]
fn test_slice() {
    let vs = ["A", "B", "C", "D"];
    assert_eq!(slice(&vs, 1, -1), ["B", "C"]);
    assert_eq!(slice(&vs, 0, 3), ["A", "B", "C"]);
    assert_eq!(slice(&vs, -4, -1), ["A", "B", "C"]);
    assert_eq!(slice(&vs, -1, 3), [] as [&str; 0]);
}

#[test]
#[should_panic(expected = "index 4 out of range for sequence of length 4")]
fn test_slice_end_is_not_clamped() {
    // `end` is normalized like any other index, so `len` itself is rejected.
    slice(&["A", "B", "C", "D"], 0, 4);
}

#[test]
#[should_panic(expected = "index -9 out of range for sequence of length 4")]
fn test_slice_invalid_start() {
    slice(&["A", "B", "C", "D"], -9, 1);
}

#[test]
#[should_panic(expected = "slice index starts at 3 but ends at 1")]
fn test_slice_inverted() {
    slice(&["A", "B", "C", "D"], -1, 1);
}

#[test]
#[should_panic(expected = "index 0 out of range for sequence of length 0")]
fn test_slice_empty() {
    let vs: [i32; 0] = [];
    slice(&vs, 0, 0);
}

#[test]
fn test_slice_mut() {
    let mut vs = [1, 2, 3, 4, 5];
    for v in slice_mut(&mut vs, 1, -1) {
        *v *= 10;
    }
    assert_eq!(vs, [1, 20, 30, 40, 5]);
}

// ============================================================================
// pop
// ============================================================================

#[test]
fn test_pop() {
    let mut vs = owned(&["A", "B", "C"]);
    let (last, rest) = pop(&mut vs);
    assert_eq!(last, "C");
    assert_eq!(rest.len(), 2);
    assert_eq!(rest, ["A", "B"]);
}

#[test]
fn test_pop_clears_vacated_slot() {
    let mut vs = owned(&["A", "B"]);
    let (last, _) = pop(&mut vs);
    assert_eq!(last, "B");
    // The slot is still in storage, but no longer owns the popped string.
    assert_eq!(vs, owned(&["A", ""]));
}

#[test]
fn test_pop_until_empty() {
    let mut storage = owned(&["A", "B", "C", "D"]);
    let mut vs = &mut storage[..];
    let mut seen = String::new();
    while !vs.is_empty() {
        let len = vs.len();
        let (v, rest) = pop(core::mem::take(&mut vs));
        assert_eq!(rest.len(), len - 1);
        seen.push_str(&v);
        vs = rest;
    }
    assert_eq!(seen, "DCBA");
    assert!(storage.iter().all(String::is_empty));
}

#[test]
#[should_panic(expected = "index -1 out of range for sequence of length 0")]
fn test_pop_empty() {
    let mut vs: Vec<String> = Vec::new();
    pop(&mut vs);
}
