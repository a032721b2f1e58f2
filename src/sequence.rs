//! The sequence abstraction shared by the lookup helpers.

use alloc::{collections::VecDeque, vec::Vec};
use core::ops::Index;

/// An ordered, randomly indexable collection with a known length.
///
/// Anything that can be indexed by `usize` and report its length can be used
/// with [`n`](crate::n), [`at`](crate::at) and the rest of the lookup family.
pub trait Sequence: Index<usize> {
    /// Number of elements in the sequence.
    fn seq_len(&self) -> usize;
}

impl<T> Sequence for [T] {
    #[inline]
    fn seq_len(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    #[inline]
    fn seq_len(&self) -> usize {
        N
    }
}

impl<T> Sequence for Vec<T> {
    #[inline]
    fn seq_len(&self) -> usize {
        self.len()
    }
}

impl<T> Sequence for VecDeque<T> {
    #[inline]
    fn seq_len(&self) -> usize {
        self.len()
    }
}
