//! Method syntax for the free functions, implemented on slices.

use crate::{index, lookup, range};

/// Negative indexing methods for `[T]`.
///
/// Each method behaves exactly like the free function of the same name
/// (`slice_idx` is [`slice`](crate::slice) and `pop_end` is
/// [`pop`](crate::pop)). `Vec<T>`, arrays and boxed slices pick these up
/// through deref.
pub trait SliceExt<T> {
    fn n(&self, i: isize) -> Option<usize>;

    fn at(&self, i: isize) -> &T;

    fn at_ok(&self, i: isize) -> Option<&T>;

    fn at_or<'a>(&'a self, i: isize, default: &'a T) -> &'a T;

    fn end(&self) -> &T;

    fn slice_idx(&self, start: isize, end: isize) -> &[T];

    fn pop_end(&mut self) -> (T, &mut [T])
    where
        T: Default;
}

impl<T> SliceExt<T> for [T] {
    #[inline]
    fn n(&self, i: isize) -> Option<usize> {
        index::n(self, i)
    }

    #[track_caller]
    fn at(&self, i: isize) -> &T {
        lookup::at(self, i)
    }

    fn at_ok(&self, i: isize) -> Option<&T> {
        lookup::at_ok(self, i)
    }

    fn at_or<'a>(&'a self, i: isize, default: &'a T) -> &'a T {
        lookup::at_or(self, i, default)
    }

    #[track_caller]
    fn end(&self) -> &T {
        lookup::end(self)
    }

    #[track_caller]
    fn slice_idx(&self, start: isize, end: isize) -> &[T] {
        range::slice(self, start, end)
    }

    #[track_caller]
    fn pop_end(&mut self) -> (T, &mut [T])
    where
        T: Default,
    {
        range::pop(self)
    }
}
