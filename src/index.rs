//! Index normalization.
//!
//! Every helper in this crate funnels through [`index`]: a negative index is
//! flipped to count from the end, then bounds checked. Out-of-range indices
//! are rejected, never clamped.

use crate::sequence::Sequence;

/// Computes a positive or negative index with respect to the length `len`.
///
/// `0` is the first element and `-1` the last. Returns `None` when `len` is
/// negative or when `i` does not land in `0..len` after flipping.
///
/// This is the form to use when only a length is at hand, for example the
/// byte length of a `str`. For sequences prefer [`n`].
///
/// # Examples
///
/// ```
/// use sidx::index;
///
/// assert_eq!(index(8, -1), Some(7));
/// assert_eq!(index(8, -3), Some(5));
/// assert_eq!(index(8, -8), Some(0));
/// assert_eq!(index(8, -9), None);
/// assert_eq!(index(8, 8), None);
/// assert_eq!(index(0, 0), None);
/// ```
pub fn index(len: isize, i: isize) -> Option<usize> {
    if len < 0 {
        tracing::trace!(len, index = i, "Rejected index: invalid length");
        return None;
    }
    // `len >= 0` and `i < 0`, so the sum can't overflow.
    let flipped = if i < 0 { len + i } else { i };
    if flipped < 0 || flipped >= len {
        tracing::trace!(len, index = i, "Rejected index: out of range");
        return None;
    }
    Some(flipped as usize)
}

/// Like [`index`], but reports an invalid index as `-1`.
pub fn index_raw(len: isize, i: isize) -> isize {
    index(len, i).map_or(-1, |j| j as isize)
}

/// Returns [`index`] called with the length of `s`.
///
/// # Examples
///
/// ```
/// use sidx::n;
///
/// let vs = ["A", "B", "C", "D"];
/// assert_eq!(&vs[1..n(&vs, -1).unwrap()], ["B", "C"]);
/// ```
#[inline]
pub fn n<S: Sequence + ?Sized>(s: &S, i: isize) -> Option<usize> {
    index_len(s.seq_len(), i)
}

/// [`index`] for an unsigned length. Lengths past `isize::MAX` (only possible
/// for zero-sized elements) are treated as invalid.
#[inline]
pub(crate) fn index_len(len: usize, i: isize) -> Option<usize> {
    isize::try_from(len).ok().and_then(|len| index(len, i))
}

#[cfg(test)]
#[path = "index_test.rs"]
mod index_test;
