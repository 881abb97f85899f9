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

//! # Cross-Type Range and Comparison
//!
//! Representability and ordering between values of two possibly different
//! integer primitives, decided on their mathematical values. Native mixed
//! comparisons need an `as` cast first, and `-1i32 as u32 == u32::MAX` is
//! exactly the kind of silent conversion these functions rule out:
//!
//! ```rust
//! use safeint_core::ops::compare::{cmp_equal, cmp_less, in_range};
//!
//! assert_eq!(-1i32 as u32, u32::MAX);
//! assert!(!cmp_equal(-1i32, u32::MAX));
//! assert!(cmp_less(-1i32, 0u32));
//! assert!(!in_range::<u32, _>(-1i32));
//! ```
//!
//! Each function branches on the signedness pair first, then widens the
//! narrower operand (by precision, not storage size) to the type of the
//! wider one before comparing.

use crate::num::integral::{Integral, cast};

#[inline(always)]
fn is_wider<T: Integral, U: Integral>() -> bool {
    T::DOMAIN.digits() > U::DOMAIN.digits()
}

#[inline]
fn in_range_unsigned_unsigned<R: Integral, T: Integral>(t: T) -> bool {
    if is_wider::<T, R>() {
        t <= cast::<T, R>(R::MAX)
    } else {
        true
    }
}

#[inline]
fn in_range_signed_signed<R: Integral, T: Integral>(t: T) -> bool {
    if is_wider::<T, R>() {
        t >= cast::<T, R>(R::MIN) && t <= cast::<T, R>(R::MAX)
    } else {
        true
    }
}

#[inline]
fn in_range_signed_unsigned<R: Integral, T: Integral>(t: T) -> bool {
    if t.is_negative() {
        false
    } else if is_wider::<T, R>() {
        t <= cast::<T, R>(R::MAX)
    } else {
        // every non-negative value of T fits
        true
    }
}

#[inline]
fn in_range_unsigned_signed<R: Integral, T: Integral>(t: T) -> bool {
    if is_wider::<T, R>() {
        t <= cast::<T, R>(R::MAX)
    } else {
        true
    }
}

/// Returns `true` if the value `t` is exactly representable in `R`.
///
/// # Examples
///
/// ```rust
/// # use safeint_core::ops::compare::in_range;
/// assert!(!in_range::<i16, _>(u16::MAX));
/// assert!(in_range::<i16, _>(u8::MAX));
/// assert!(!in_range::<u8, _>(-1));
/// assert!(in_range::<u8, _>(255u64));
/// assert!(!in_range::<i8, _>(i16::MIN));
/// ```
#[inline]
pub fn in_range<R, T>(t: T) -> bool
where
    R: Integral,
    T: Integral,
{
    match (T::SIGNED, R::SIGNED) {
        (false, false) => in_range_unsigned_unsigned::<R, T>(t),
        (false, true) => in_range_unsigned_signed::<R, T>(t),
        (true, true) => in_range_signed_signed::<R, T>(t),
        (true, false) => in_range_signed_unsigned::<R, T>(t),
    }
}

#[inline]
fn cmp_equal_same_sign<T: Integral, U: Integral>(t: T, u: U) -> bool {
    if is_wider::<T, U>() {
        t == cast::<T, U>(u)
    } else {
        cast::<U, T>(t) == u
    }
}

#[inline]
fn cmp_equal_signed_unsigned<S: Integral, U: Integral>(s: S, u: U) -> bool {
    if s.is_negative() {
        false
    } else if is_wider::<S, U>() {
        s == cast::<S, U>(u)
    } else {
        cast::<U, S>(s) == u
    }
}

#[inline]
fn cmp_less_same_sign<T: Integral, U: Integral>(t: T, u: U) -> bool {
    if is_wider::<T, U>() {
        t < cast::<T, U>(u)
    } else {
        cast::<U, T>(t) < u
    }
}

#[inline]
fn cmp_less_signed_unsigned<S: Integral, U: Integral>(s: S, u: U) -> bool {
    if s.is_negative() {
        true
    } else if is_wider::<S, U>() {
        s < cast::<S, U>(u)
    } else {
        cast::<U, S>(s) < u
    }
}

#[inline]
fn cmp_less_unsigned_signed<U: Integral, S: Integral>(u: U, s: S) -> bool {
    if s.is_negative() {
        false
    } else if is_wider::<S, U>() {
        cast::<S, U>(u) < s
    } else {
        u < cast::<U, S>(s)
    }
}

/// Returns `true` if `t` and `u` denote the same integer.
///
/// # Examples
///
/// ```rust
/// # use safeint_core::ops::compare::cmp_equal;
/// assert!(cmp_equal(1u64, 1i8));
/// assert!(!cmp_equal(u8::MAX, i8::MAX));
/// assert!(!cmp_equal(u8::MAX, -1));
/// ```
#[inline]
pub fn cmp_equal<T, U>(t: T, u: U) -> bool
where
    T: Integral,
    U: Integral,
{
    match (T::SIGNED, U::SIGNED) {
        (true, true) | (false, false) => cmp_equal_same_sign(t, u),
        (true, false) => cmp_equal_signed_unsigned(t, u),
        (false, true) => cmp_equal_signed_unsigned(u, t),
    }
}

/// Returns `true` if `t` and `u` denote different integers.
#[inline]
pub fn cmp_not_equal<T, U>(t: T, u: U) -> bool
where
    T: Integral,
    U: Integral,
{
    !cmp_equal(t, u)
}

/// Returns `true` if `t` is mathematically less than `u`.
///
/// # Examples
///
/// ```rust
/// # use safeint_core::ops::compare::cmp_less;
/// assert!(cmp_less(-1i64, 0u8));
/// assert!(!cmp_less(u8::MAX, i8::MAX));
/// assert!(!cmp_less(u8::MAX, -1));
/// assert!(cmp_less(1u8, 2i128));
/// ```
#[inline]
pub fn cmp_less<T, U>(t: T, u: U) -> bool
where
    T: Integral,
    U: Integral,
{
    match (T::SIGNED, U::SIGNED) {
        (true, true) | (false, false) => cmp_less_same_sign(t, u),
        (true, false) => cmp_less_signed_unsigned(t, u),
        (false, true) => cmp_less_unsigned_signed(t, u),
    }
}

/// Returns `true` if `t` is mathematically less than or equal to `u`.
#[inline]
pub fn cmp_less_eq<T, U>(t: T, u: U) -> bool
where
    T: Integral,
    U: Integral,
{
    !cmp_less(u, t)
}

/// Returns `true` if `t` is mathematically greater than `u`.
#[inline]
pub fn cmp_greater<T, U>(t: T, u: U) -> bool
where
    T: Integral,
    U: Integral,
{
    cmp_less(u, t)
}

/// Returns `true` if `t` is mathematically greater than or equal to `u`.
#[inline]
pub fn cmp_greater_eq<T, U>(t: T, u: U) -> bool
where
    T: Integral,
    U: Integral,
{
    !cmp_less(t, u)
}

#[cfg(test)]
mod tests {
    use super::{
        cmp_equal, cmp_greater, cmp_greater_eq, cmp_less, cmp_less_eq, cmp_not_equal, in_range,
    };
    use crate::num::integral::Integral;
    use proptest::prelude::*;

    /// Exact value of a primitive of at most 64 bits.
    fn exact<T: Integral>(v: T) -> i128 {
        assert!(T::DOMAIN.bits() <= 64);
        v.cast_i128()
    }

    fn check_in_range<R, T>(t: T)
    where
        R: Integral + TryFrom<T>,
        T: Integral,
    {
        assert_eq!(
            in_range::<R, T>(t),
            R::try_from(t).is_ok(),
            "in_range::<{}>({t}_{})",
            R::DOMAIN,
            T::DOMAIN
        );
    }

    fn check_in_range_all_targets<T>(t: T)
    where
        T: Integral,
        i8: TryFrom<T>,
        i16: TryFrom<T>,
        i32: TryFrom<T>,
        i64: TryFrom<T>,
        i128: TryFrom<T>,
        u8: TryFrom<T>,
        u16: TryFrom<T>,
        u32: TryFrom<T>,
        u64: TryFrom<T>,
        u128: TryFrom<T>,
    {
        check_in_range::<i8, T>(t);
        check_in_range::<i16, T>(t);
        check_in_range::<i32, T>(t);
        check_in_range::<i64, T>(t);
        check_in_range::<i128, T>(t);
        check_in_range::<u8, T>(t);
        check_in_range::<u16, T>(t);
        check_in_range::<u32, T>(t);
        check_in_range::<u64, T>(t);
        check_in_range::<u128, T>(t);
    }

    fn check_cmp<T: Integral, U: Integral>(t: T, u: U) {
        let (x, y) = (exact(t), exact(u));
        assert_eq!(cmp_equal(t, u), x == y, "cmp_equal({t}, {u})");
        assert_eq!(cmp_not_equal(t, u), x != y, "cmp_not_equal({t}, {u})");
        assert_eq!(cmp_less(t, u), x < y, "cmp_less({t}, {u})");
        assert_eq!(cmp_less_eq(t, u), x <= y, "cmp_less_eq({t}, {u})");
        assert_eq!(cmp_greater(t, u), x > y, "cmp_greater({t}, {u})");
        assert_eq!(cmp_greater_eq(t, u), x >= y, "cmp_greater_eq({t}, {u})");
    }

    #[test]
    fn test_in_range_literals() {
        assert!(in_range::<i16, _>(1));
        assert!(in_range::<i16, _>(1u32));
        assert!(in_range::<i16, _>(1u64));
        assert!(in_range::<i16, _>(-1i64));
        assert!(!in_range::<i16, _>(u16::MAX));
        assert!(in_range::<i16, _>(u8::MAX));
        assert!(!in_range::<u8, _>(-1));
        assert!(in_range::<i8, _>(-1));
        assert!(in_range::<u8, _>(u16::MIN));
        assert!(in_range::<i8, _>(u16::MIN));
        assert!(!in_range::<u8, _>(i16::MIN));
        assert!(!in_range::<i8, _>(i16::MIN));
    }

    #[test]
    fn test_in_range_exact_bounds() {
        assert!(in_range::<u8, _>(255u16));
        assert!(!in_range::<u8, _>(256u16));
        assert!(in_range::<i8, _>(-128i16));
        assert!(!in_range::<i8, _>(-129i16));
        assert!(in_range::<u8, _>(255i16));
        assert!(!in_range::<u8, _>(256i16));
        assert!(in_range::<i16, _>(32767u16));
        assert!(!in_range::<i16, _>(32768u16));
    }

    #[test]
    fn test_in_range_128_bit() {
        assert!(in_range::<u128, _>(i128::MAX));
        assert!(!in_range::<u128, _>(i128::MIN));
        assert!(!in_range::<i128, _>(u128::MAX));
        assert!(in_range::<i128, _>(i128::MAX as u128));
        assert!(!in_range::<i128, _>(i128::MAX as u128 + 1));
        assert!(in_range::<u64, _>(u64::MAX as u128));
        assert!(!in_range::<u64, _>(u64::MAX as u128 + 1));
        assert!(in_range::<i8, _>(-128i128));
        assert!(in_range::<usize, _>(0i128));
        assert!(!in_range::<isize, _>(u128::MAX));
    }

    #[test]
    fn test_in_range_exhaustive_16_bit_sources() {
        for v in i16::MIN..=i16::MAX {
            check_in_range_all_targets(v);
        }
        for v in u16::MIN..=u16::MAX {
            check_in_range_all_targets(v);
        }
    }

    #[test]
    fn test_cmp_literals() {
        assert!(cmp_equal(1, 1));
        assert!(cmp_equal(1u32, 1u32));
        assert!(cmp_equal(1u64, 1u32));
        assert!(cmp_equal(1u32, 1u64));
        assert!(cmp_equal(1i64, 1));
        assert!(cmp_equal(1, 1i64));
        assert!(cmp_equal(1u64, 1));
        assert!(cmp_equal(1, 1u64));

        assert!(!cmp_equal(1, 2));
        assert!(!cmp_equal(1, -1));
        assert!(!cmp_equal(2u64, 1));
        assert!(!cmp_equal(1, 2u64));
        assert!(!cmp_equal(u8::MAX, i8::MAX));
        assert!(!cmp_equal(u8::MAX, -1));

        assert!(!cmp_less(1, 1));
        assert!(!cmp_less(1u64, 1));
        assert!(!cmp_less(1, 1u64));
        assert!(cmp_less(1, 2));
        assert!(!cmp_less(1, -1));
        assert!(cmp_less(1u64, 2u32));
        assert!(!cmp_less(2u32, 1u64));
        assert!(cmp_less(1u64, 2));
        assert!(!cmp_less(2, 1u64));
        assert!(!cmp_less(u8::MAX, i8::MAX));
        assert!(!cmp_less(u8::MAX, -1));
    }

    #[test]
    fn test_cmp_128_bit() {
        assert!(!cmp_equal(u128::MAX, -1i128));
        assert!(cmp_less(-1i128, 0u128));
        assert!(cmp_less(i128::MAX, u128::MAX));
        assert!(cmp_equal(i128::MAX, i128::MAX as u128));
        assert!(!cmp_less(u128::MAX, i8::MIN));
        assert!(cmp_greater(u128::MAX, i128::MAX));
        assert!(cmp_less_eq(i128::MIN, u8::MIN));
    }

    #[test]
    fn test_cmp_exhaustive_8_bit_pairs() {
        for a in i8::MIN..=i8::MAX {
            for b in u8::MIN..=u8::MAX {
                check_cmp(a, b);
                check_cmp(b, a);
            }
            for b in [i16::MIN, -129, -128, -1, 0, 127, 128, i16::MAX] {
                check_cmp(a, b);
                check_cmp(b, a);
            }
        }
    }

    proptest! {
        #[test]
        fn prop_in_range_i64(v in any::<i64>()) {
            check_in_range_all_targets(v);
        }

        #[test]
        fn prop_in_range_u64(v in any::<u64>()) {
            check_in_range_all_targets(v);
        }

        #[test]
        fn prop_in_range_i32(v in any::<i32>()) {
            check_in_range_all_targets(v);
        }

        #[test]
        fn prop_cmp_mixed(a in any::<i64>(), b in any::<u32>(), c in any::<u64>(), d in any::<i16>()) {
            check_cmp(a, b);
            check_cmp(b, a);
            check_cmp(a, c);
            check_cmp(c, a);
            check_cmp(c, d);
            check_cmp(d, b);
        }
    }
}
