//! Sub-slicing and popping with negative indices.

use core::mem;

use crate::{
    error::{inverted_range, out_of_range},
    index::index_len,
};

/// Normalizes both ends of a half-open range over a sequence of length `len`.
#[track_caller]
fn bounds(len: usize, start: isize, end: isize) -> (usize, usize) {
    let Some(a) = index_len(len, start) else {
        out_of_range(len, start)
    };
    let Some(b) = index_len(len, end) else {
        out_of_range(len, end)
    };
    if a > b {
        inverted_range(a, b);
    }
    (a, b)
}

/// Slices `s` using [`n`](crate::n) for `start` and `end`.
///
/// # Panics
///
/// Panics if either bound is an invalid index, or if `start` resolves past
/// `end`. Bounds are never clamped.
///
/// # Examples
///
/// ```
/// use sidx::slice;
///
/// let vs = ["A", "B", "C", "D"];
/// assert_eq!(slice(&vs, 1, -1), ["B", "C"]);
/// assert_eq!(slice(&vs, -2, -1), ["C"]);
/// assert!(slice(&vs, 2, -2).is_empty());
/// ```
#[track_caller]
pub fn slice<T>(s: &[T], start: isize, end: isize) -> &[T] {
    let (a, b) = bounds(s.len(), start, end);
    &s[a..b]
}

/// Mutable version of [`slice`].
#[track_caller]
pub fn slice_mut<T>(s: &mut [T], start: isize, end: isize) -> &mut [T] {
    let (a, b) = bounds(s.len(), start, end);
    &mut s[a..b]
}

/// Returns the last element of `s` and the rest of `s` without it.
///
/// The last slot is reset to `T::default()` before returning, so the popped
/// value isn't left behind in storage the caller may still reach through
/// the original owner.
///
/// # Panics
///
/// Panics if `s` is empty.
///
/// # Examples
///
/// ```
/// use sidx::pop;
///
/// let mut vs = [1, 2, 3, 4];
/// let mut rest = &mut vs[..];
/// let mut popped = Vec::new();
/// while !rest.is_empty() {
///     let (v, tail) = pop(std::mem::take(&mut rest));
///     popped.push(v);
///     rest = tail;
/// }
/// assert_eq!(popped, [4, 3, 2, 1]);
/// assert_eq!(vs, [0, 0, 0, 0]);
/// ```
#[track_caller]
pub fn pop<T: Default>(s: &mut [T]) -> (T, &mut [T]) {
    let Some(i) = index_len(s.len(), -1) else {
        out_of_range(s.len(), -1)
    };
    let last = mem::take(&mut s[i]);
    (last, &mut s[..i])
}

#[cfg(test)]
#[path = "range_test.rs"]
mod range_test;
