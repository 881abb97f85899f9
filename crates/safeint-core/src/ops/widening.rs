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

//! # Widening-Safe Arithmetic
//!
//! `safe_add::<T0, _, _>(a, b)` computes `a + b` for operands of two
//! independently chosen primitives `T1` and `T2`, and delivers the exact
//! mathematical result as a `T0`, or `None` when the result is not
//! representable in `T0` (or undefined, for a zero divisor). The three types
//! may have any relative width and signedness:
//!
//! ```rust
//! use safeint_core::ops::widening::{safe_add, safe_diff, safe_mult};
//!
//! let max32 = u32::MAX;
//! assert_eq!(safe_add::<u32, _, _>(max32, max32), None);
//! assert_eq!(safe_add::<u64, _, _>(max32, max32), Some(2 * max32 as u64));
//!
//! // 0 - 1 in unsigned operands, delivered as a signed result
//! assert_eq!(safe_diff::<i32, _, _>(0u32, 1u32), Some(-1));
//! assert_eq!(safe_mult::<u32, _, _>(i32::MIN, -1i32), Some(1 << 31));
//! ```
//!
//! Every operand fits in a `u128` or an `i128`, so those are the working
//! types. No native operation below can overflow them: each addition is
//! preceded by a distance-to-bound check (`a <= MAX - b`), products and
//! quotients operate on magnitudes, and negative results are built from
//! their magnitude without ever negating a minimum.

use crate::num::integral::Integral;
use crate::ops::compare::in_range;

/// Returns `|v|` as a `u128`.
///
/// Total for every primitive, including `i128::MIN`.
///
/// # Examples
///
/// ```rust
/// # use safeint_core::ops::widening::safe_abs;
/// assert_eq!(safe_abs(i8::MIN), 128);
/// assert_eq!(safe_abs(i128::MIN), 1 << 127);
/// assert_eq!(safe_abs(42u16), 42);
/// ```
#[inline(always)]
pub fn safe_abs<T: Integral>(v: T) -> u128 {
    v.magnitude()
}

/// `T0` value of the non-negative `v`, if it fits.
#[inline]
fn from_unsigned<T0: Integral>(v: u128) -> Option<T0> {
    if in_range::<T0, u128>(v) {
        Some(T0::from_u128_cast(v))
    } else {
        None
    }
}

/// `T0` value of the signed `v`, if it fits.
#[inline]
fn from_signed<T0: Integral>(v: i128) -> Option<T0> {
    if in_range::<T0, i128>(v) {
        Some(T0::from_i128_cast(v))
    } else {
        None
    }
}

/// `T0` value of `-magnitude`, if it fits.
#[inline]
fn from_negated<T0: Integral>(magnitude: u128) -> Option<T0> {
    if magnitude == 0 {
        return Some(T0::ZERO);
    }
    if magnitude > T0::DOMAIN.min_magnitude() {
        return None;
    }
    // magnitude - 1 <= |MIN(T0)| - 1 == MAX(T0) <= i128::MAX
    let v = -((magnitude - 1) as i128) - 1;
    Some(T0::from_i128_cast(v))
}

#[inline]
fn from_sign_magnitude<T0: Integral>(negative: bool, magnitude: u128) -> Option<T0> {
    if negative {
        from_negated(magnitude)
    } else {
        from_unsigned(magnitude)
    }
}

#[inline]
fn add_uu<T0: Integral>(a: u128, b: u128) -> Option<T0> {
    if a <= u128::MAX - b {
        from_unsigned(a + b)
    } else {
        None
    }
}

#[inline]
fn add_ss<T0: Integral>(a: i128, b: i128) -> Option<T0> {
    if b >= 0 {
        if a > 0 {
            // the sum may exceed i128::MAX and still fit an unsigned T0
            add_uu(a as u128, b as u128)
        } else if a <= i128::MAX - b {
            from_signed(a + b)
        } else {
            None
        }
    } else if a >= i128::MIN - b {
        from_signed(a + b)
    } else {
        // below i128::MIN, and so below the minimum of every T0
        None
    }
}

/// `a + b` with a negative-capable `a` and a non-negative `b`.
#[inline]
fn add_su<T0: Integral>(a: i128, b: u128) -> Option<T0> {
    if a >= 0 {
        add_uu(a as u128, b)
    } else if in_range::<i128, u128>(b) {
        add_ss(a, b as i128)
    } else {
        // b > i128::MAX >= |a| - 1, so b - |a| stays non-negative
        from_unsigned(b - a.unsigned_abs())
    }
}

#[inline]
fn diff_uu<T0: Integral>(a: u128, b: u128) -> Option<T0> {
    if a >= b {
        from_unsigned(a - b)
    } else {
        from_negated(b - a)
    }
}

#[inline]
fn diff_ss<T0: Integral>(a: i128, b: i128) -> Option<T0> {
    if b > 0 {
        add_ss(a, -b)
    } else {
        add_su(a, b.unsigned_abs())
    }
}

/// `a - b` with a negative-capable `a` and a non-negative `b`.
#[inline]
fn diff_su<T0: Integral>(a: i128, b: u128) -> Option<T0> {
    if a >= 0 {
        return diff_uu(a as u128, b);
    }
    // a - b == -(|a| + b)
    let magnitude = a.unsigned_abs();
    if b <= u128::MAX - magnitude {
        from_negated(magnitude + b)
    } else {
        None
    }
}

/// `a - b` with a non-negative `a` and a negative-capable `b`.
#[inline]
fn diff_us<T0: Integral>(a: u128, b: i128) -> Option<T0> {
    if b >= 0 {
        diff_uu(a, b as u128)
    } else {
        add_uu(a, b.unsigned_abs())
    }
}

/// Computes `a + b` exactly and returns it as a `T0`, or `None` if the sum
/// is not representable in `T0`.
///
/// # Examples
///
/// ```rust
/// # use safeint_core::ops::widening::safe_add;
/// assert_eq!(safe_add::<u32, _, _>(-1i32, 2u8), Some(1));
/// assert_eq!(safe_add::<i32, _, _>(i32::MAX as i64 + 1, -2i8), Some(i32::MAX - 1));
/// assert_eq!(safe_add::<u8, _, _>(i128::MIN, u128::MAX), None);
/// assert_eq!(safe_add::<u128, _, _>(i128::MAX, i128::MAX), Some(u128::MAX - 1));
/// ```
pub fn safe_add<T0, T1, T2>(a: T1, b: T2) -> Option<T0>
where
    T0: Integral,
    T1: Integral,
    T2: Integral,
{
    match (T1::SIGNED, T2::SIGNED) {
        (false, false) => add_uu(a.cast_u128(), b.cast_u128()),
        (true, true) => add_ss(a.cast_i128(), b.cast_i128()),
        (true, false) => add_su(a.cast_i128(), b.cast_u128()),
        (false, true) => add_su(b.cast_i128(), a.cast_u128()),
    }
}

/// Computes `a - b` exactly and returns it as a `T0`, or `None` if the
/// difference is not representable in `T0`.
///
/// # Examples
///
/// ```rust
/// # use safeint_core::ops::widening::safe_diff;
/// assert_eq!(safe_diff::<u32, _, _>(0i32, i32::MIN), Some(1 << 31));
/// assert_eq!(safe_diff::<i32, _, _>(0i32, i32::MIN), None);
/// assert_eq!(safe_diff::<i8, _, _>(0u128, 128u8), Some(i8::MIN));
/// assert_eq!(safe_diff::<u32, _, _>(u32::MAX - 1, -1i32), Some(u32::MAX));
/// ```
pub fn safe_diff<T0, T1, T2>(a: T1, b: T2) -> Option<T0>
where
    T0: Integral,
    T1: Integral,
    T2: Integral,
{
    match (T1::SIGNED, T2::SIGNED) {
        (false, false) => diff_uu(a.cast_u128(), b.cast_u128()),
        (true, true) => diff_ss(a.cast_i128(), b.cast_i128()),
        (true, false) => diff_su(a.cast_i128(), b.cast_u128()),
        (false, true) => diff_us(a.cast_u128(), b.cast_i128()),
    }
}

/// Computes `a * b` exactly and returns it as a `T0`, or `None` if the
/// product is not representable in `T0`.
///
/// # Examples
///
/// ```rust
/// # use safeint_core::ops::widening::safe_mult;
/// assert_eq!(safe_mult::<i32, _, _>(i32::MIN, -1i32), None);
/// assert_eq!(safe_mult::<i32, _, _>(i32::MAX, -1i32), Some(-i32::MAX));
/// assert_eq!(safe_mult::<i8, _, _>(-16i64, 8u64), Some(i8::MIN));
/// assert_eq!(safe_mult::<u32, _, _>(-1i32, 1u32), None);
/// assert_eq!(safe_mult::<u32, _, _>(i64::MAX, 0i32), Some(0));
/// ```
pub fn safe_mult<T0, T1, T2>(a: T1, b: T2) -> Option<T0>
where
    T0: Integral,
    T1: Integral,
    T2: Integral,
{
    if a == T1::ZERO || b == T2::ZERO {
        return Some(T0::ZERO);
    }
    let (ma, mb) = (safe_abs(a), safe_abs(b));
    let negative = a.is_negative() != b.is_negative();
    // 0 < |a||b| <= bound  <=>  bound / |b| >= |a|
    let bound = if negative {
        T0::DOMAIN.min_magnitude()
    } else {
        T0::DOMAIN.max_magnitude()
    };
    if bound / mb >= ma {
        from_sign_magnitude(negative, ma * mb)
    } else {
        None
    }
}

/// Computes `a / b` (truncating toward zero) and returns it as a `T0`, or
/// `None` if `b == 0` or the quotient is not representable in `T0`.
///
/// # Examples
///
/// ```rust
/// # use safeint_core::ops::widening::safe_div;
/// assert_eq!(safe_div::<u32, _, _>(1u32, 0u32), None);
/// assert_eq!(safe_div::<u32, _, _>(u64::MAX, 2u32), None);
/// assert_eq!(safe_div::<i32, _, _>(u64::MAX, i64::MAX as u64), Some(2));
/// assert_eq!(safe_div::<i8, _, _>(128u16, -1i8), Some(i8::MIN));
/// assert_eq!(safe_div::<i8, _, _>(-7i32, 2u8), Some(-3));
/// ```
pub fn safe_div<T0, T1, T2>(a: T1, b: T2) -> Option<T0>
where
    T0: Integral,
    T1: Integral,
    T2: Integral,
{
    if b == T2::ZERO {
        return None;
    }
    let quotient = safe_abs(a) / safe_abs(b);
    from_sign_magnitude(a.is_negative() != b.is_negative(), quotient)
}

/// Computes the remainder of `a / b` (with the sign of `a`, as `%` does)
/// and returns it as a `T0`, or `None` if `b == 0` or the remainder is not
/// representable in `T0`.
///
/// Unlike the native `%`, `MIN % -1` is well defined here and yields `0`.
///
/// # Examples
///
/// ```rust
/// # use safeint_core::ops::widening::safe_mod;
/// assert_eq!(safe_mod::<i32, _, _>(-7i32, 3u8), Some(-1));
/// assert_eq!(safe_mod::<i32, _, _>(i32::MIN, -1i32), Some(0));
/// assert_eq!(safe_mod::<u8, _, _>(-7i32, 3u8), None);
/// assert_eq!(safe_mod::<u8, _, _>(1u8, 0u8), None);
/// ```
pub fn safe_mod<T0, T1, T2>(a: T1, b: T2) -> Option<T0>
where
    T0: Integral,
    T1: Integral,
    T2: Integral,
{
    if b == T2::ZERO {
        return None;
    }
    let remainder = safe_abs(a) % safe_abs(b);
    from_sign_magnitude(a.is_negative(), remainder)
}
