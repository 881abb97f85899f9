// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Safeint
//!
//! Checked integer values on top of the `safeint-core` predicates.
//!
//! `Safe<T>` behaves like the primitive `T`, except that an operator whose
//! native evaluation would overflow or be undefined is refused: the `try_*`
//! methods report a `RangeError`, the operator traits panic with its message.
//!
//! ```rust
//! use safeint::{SafeU8, make_safe};
//!
//! let mut total = SafeU8::ZERO;
//! for v in [100u8, 100, 55] {
//!     total += v;
//! }
//! assert_eq!(total, 255u8);
//! assert!(total.try_increment().is_err());
//! assert_eq!(make_safe(3i32) * make_safe(-4i32), -12i32);
//! ```
//!
//! The pure predicate, comparison and widening layers are re-exported as
//! `safeint::num` and `safeint::ops`.
//!
//! ## Features
//!
//! - `zero-default` (enabled by default): `Safe<T>` implements `Default`,
//!   yielding zero.

pub mod error;
pub mod safe;

pub use error::{Operator, RangeError};
pub use safe::{
    Safe, SafeI8, SafeI16, SafeI32, SafeI64, SafeI128, SafeIsize, SafeU8, SafeU16, SafeU32,
    SafeU64, SafeU128, SafeUsize, make_safe,
};
pub use safeint_core::{num, ops};
