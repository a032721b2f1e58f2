//! Reasons an index can fail to normalize.
//!
//! None of the helpers return this type. It is the payload of every panic
//! raised by the fail-loud helpers, and [`IndexError::diagnose`] lets callers
//! of the optional forms find out why they got `None`.

use thiserror::Error;

use crate::index::index;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexError {
    #[error("invalid sequence length {len}")]
    InvalidLength { len: isize },

    #[error("index {index} out of range for sequence of length {len}")]
    OutOfRange { index: isize, len: usize },

    #[error("slice index starts at {start} but ends at {end}")]
    InvertedRange { start: usize, end: usize },
}

static_assertions::assert_impl_all!(IndexError: Copy, Send, Sync, core::error::Error);

impl IndexError {
    /// Explains why `index(len, i)` yields `None`, or returns `None` if it doesn't.
    ///
    /// # Examples
    ///
    /// ```
    /// use sidx::IndexError;
    ///
    /// assert_eq!(IndexError::diagnose(8, -3), None);
    /// assert_eq!(
    ///     IndexError::diagnose(8, 100),
    ///     Some(IndexError::OutOfRange { index: 100, len: 8 })
    /// );
    /// assert_eq!(
    ///     IndexError::diagnose(-1, 0),
    ///     Some(IndexError::InvalidLength { len: -1 })
    /// );
    /// ```
    pub fn diagnose(len: isize, i: isize) -> Option<Self> {
        if len < 0 {
            return Some(IndexError::InvalidLength { len });
        }
        match index(len, i) {
            Some(_) => None,
            None => Some(IndexError::OutOfRange {
                index: i,
                len: len as usize,
            }),
        }
    }
}

/// Panics for an index that doesn't resolve inside a sequence of length `len`.
#[cold]
#[track_caller]
pub(crate) fn out_of_range(len: usize, index: isize) -> ! {
    fail(IndexError::OutOfRange { index, len })
}

/// Panics for a range whose normalized start is past its normalized end.
#[cold]
#[track_caller]
pub(crate) fn inverted_range(start: usize, end: usize) -> ! {
    fail(IndexError::InvertedRange { start, end })
}

#[cold]
#[track_caller]
fn fail(err: IndexError) -> ! {
    tracing::debug!(error = %err, "Invalid index");
    panic!("{err}")
}
