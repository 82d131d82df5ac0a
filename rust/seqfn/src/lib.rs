//! Generic higher-order operations over homogeneous sequences.
//!
//! This crate provides map, filter, reduce, lookup, replacement, deletion and
//! min/max operations over `Vec<T>` and `&[T]`. It offers:
//!
//! - **Free functions** in [`ops`]: operations that change a sequence take it by
//!   value and return the result, read-only operations borrow a slice
//! - **Method-call form** through the [`SequenceExt`] extension trait on `Vec<T>`
//! - **Two capability bounds**: `PartialEq` for lookups and replacements,
//!   [`Ordered`] for [`ops::max`] and [`ops::min`]
//!
//! # Example
//!
//! ```
//! use seqfn::ops;
//!
//! let numbers = vec![1, 2, 2, 3, 4, 5];
//! let numbers = ops::replace(numbers, &2, 10);
//! assert_eq!(numbers, [1, 10, 2, 3, 4, 5]);
//!
//! let (popped, rest) = ops::pop(numbers, 3);
//! assert_eq!(popped, 3);
//! assert_eq!(ops::index(&rest, &4), Some(3));
//! assert_eq!(ops::index(&rest, &42), None);
//! ```

pub mod error;
pub mod ext;
pub mod ops;
pub mod ordered;
pub mod result;


pub use error::{Error, ErrorKind, PopError};
pub use ext::SequenceExt;
pub use ordered::Ordered;
pub use result::Result;
