//! Element lookup with negative indices.
//!
//! Three flavours, differing only in how an invalid index is reported:
//! [`at`] panics, [`at_ok`] and [`at_ok_or_default`] flag it, and [`at_or`]
//! substitutes a fallback.

use crate::{error::out_of_range, index::n, sequence::Sequence};

/// Returns `s[n(s, i)]`.
///
/// # Panics
///
/// Panics if `i` is not a valid index into `s`, like plain indexing does.
///
/// # Examples
///
/// ```
/// use sidx::at;
///
/// let vs = vec!["A", "B", "C", "D", "E"];
/// assert_eq!(*at(&vs, 2), "C");
/// assert_eq!(*at(&vs, -2), "D");
/// ```
#[track_caller]
pub fn at<S: Sequence + ?Sized>(s: &S, i: isize) -> &S::Output {
    match n(s, i) {
        Some(j) => &s[j],
        None => out_of_range(s.seq_len(), i),
    }
}

/// Like [`at`], but returns `None` if `i` is an invalid index.
///
/// # Examples
///
/// ```
/// use sidx::at_ok;
///
/// let vs = ["A", "B", "C", "D", "E"];
/// assert_eq!(at_ok(&vs, -2), Some(&"D"));
/// assert_eq!(at_ok(&vs, 40), None);
/// ```
pub fn at_ok<S: Sequence + ?Sized>(s: &S, i: isize) -> Option<&S::Output> {
    n(s, i).map(|j| &s[j])
}

/// Like [`at_ok`], but returns an owned element paired with a presence flag.
///
/// An invalid index yields `(T::default(), false)`.
pub fn at_ok_or_default<S>(s: &S, i: isize) -> (S::Output, bool)
where
    S: Sequence + ?Sized,
    S::Output: Clone + Default,
{
    match at_ok(s, i) {
        Some(v) => (v.clone(), true),
        None => (Default::default(), false),
    }
}

/// Like [`at`], but returns `default` if `i` is an invalid index.
///
/// # Examples
///
/// ```
/// use sidx::at_or;
///
/// let vs = ["A", "B", "C", "D", "E"];
/// assert_eq!(*at_or(&vs, 2, &"!"), "C");
/// assert_eq!(*at_or(&vs, 40, &"!"), "!");
/// ```
pub fn at_or<'a, S: Sequence + ?Sized>(
    s: &'a S,
    i: isize,
    default: &'a S::Output,
) -> &'a S::Output {
    at_ok(s, i).unwrap_or(default)
}

/// Returns the last element of `s`, that is [`at`]`(s, -1)`.
///
/// # Panics
///
/// Panics if `s` is empty.
#[track_caller]
pub fn end<S: Sequence + ?Sized>(s: &S) -> &S::Output {
    at(s, -1)
}

#[cfg(test)]
#[path = "lookup_test.rs"]
mod lookup_test;
