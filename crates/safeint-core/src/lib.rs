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

//! # Safeint Core
//!
//! Side-effect-free building blocks for overflow-free integer arithmetic.
//! Every function in this crate is a pure decision: it never panics, never
//! wraps, and never allocates.
//!
//! ## Modules
//!
//! - `num`: The sealed `Integral` capability trait implemented by the twelve
//!   primitive integers, the `Domain` tag describing a type's value range,
//!   associated constant traits (`Zero`, `PlusOne`, `Bounds`), and `Sign`.
//! - `ops`: Overflow predicates for the native operators (`is_safe_add`,
//!   `is_safe_mult`, `is_safe_leftshift`, ...), cross-type comparison
//!   (`in_range`, `cmp_less`, ...), and widening-safe arithmetic
//!   (`safe_add::<T0, _, _>`, ...) returning `Option<T0>`.
//!
//! ```rust
//! use safeint_core::ops::compare::cmp_less;
//! use safeint_core::ops::predicates::is_safe_add;
//! use safeint_core::ops::widening::safe_diff;
//!
//! assert!(!is_safe_add(i32::MAX, 1));
//! assert!(cmp_less(-1i32, 0u32));
//! assert_eq!(safe_diff::<i64, _, _>(0u32, u32::MAX), Some(-(u32::MAX as i64)));
//! ```

pub mod num;
pub mod ops;
