//! sidx - negative indexing for slices and other sequences
//!
//! # Overview
//!
//! Rust indexes sequences from the front only. `sidx` adds the from-the-end
//! convention: `0` is the first element as usual, `-1` is the last, `-2` the
//! second to last, and so on.
//!
//! [`index`] does the arithmetic against a bare length and [`n`] is the more
//! convenient form for a sequence. Everything else is a thin wrapper around
//! [`n`]:
//!
//! - [`at`]`(s, i)` is `s[n(s, i)]` and [`end`] is `at(s, -1)`
//! - [`at_ok`] is the checked version of [`at`]
//! - [`at_or`] returns a fallback when the index is invalid
//! - [`slice`] slices with both bounds computed by [`n`]
//! - [`pop`] returns, clears, and slices off `at(s, -1)`
//!
//! # Quick Start
//!
//! ```
//! use sidx::{at, at_ok, at_or, end, slice};
//!
//! let vs = ["A", "B", "C", "D", "E"];
//!
//! assert_eq!(*at(&vs, 2), "C");
//! assert_eq!(*at(&vs, -2), "D");
//! assert_eq!(*end(&vs), "E");
//!
//! assert_eq!(at_ok(&vs, 40), None);
//! assert_eq!(*at_or(&vs, 40, &"!"), "!");
//!
//! assert_eq!(slice(&vs, 1, -1), ["B", "C", "D"]);
//! ```
//!
//! # Failure Modes
//!
//! Invalid indices are never clamped. Each helper picks how it reports them:
//!
//! 1. **Optional**: [`index`], [`n`] return `None` ([`index_raw`] returns `-1`)
//! 2. **Panic**: [`at`], [`end`], [`slice`], [`slice_mut`], [`pop`] panic like
//!    plain indexing does, reporting the caller's location
//! 3. **Quiet**: [`at_ok`] returns `None`, [`at_ok_or_default`] returns
//!    `(T::default(), false)` and [`at_or`] returns the fallback
//!
//! # Method Syntax
//!
//! The same helpers are available as methods on slices (and anything that
//! derefs to one, such as `Vec`) through [`SliceExt`]:
//!
//! ```
//! use sidx::SliceExt;
//!
//! let mut vs = vec![String::from("A"), String::from("B")];
//! assert_eq!(vs.at(-1), "B");
//!
//! let (last, rest) = vs.pop_end();
//! assert_eq!(last, "B");
//! assert_eq!(rest, ["A"]);
//! ```

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

pub mod error;
pub mod ext;
pub mod index;
pub mod lookup;
pub mod range;
pub mod sequence;

pub use error::IndexError;
pub use ext::SliceExt;
pub use index::{index, index_raw, n};
pub use lookup::{at, at_ok, at_ok_or_default, at_or, end};
pub use range::{pop, slice, slice_mut};
pub use sequence::Sequence;
