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

//! # Checked Integers
//!
//! `Safe<T>` wraps a primitive integer and evaluates every arithmetic
//! operator only after the corresponding overflow predicate accepted the
//! operands. The value inside a `Safe<T>` therefore never wraps and never
//! reaches undefined territory (division by zero, `MIN / -1`, shifts by the
//! bit width or more, shifts of negative values).
//!
//! Two interfaces are offered:
//!
//! - `try_*` methods returning `Result<Safe<T>, RangeError>`;
//! - the operator traits (`+`, `-=`, `<<`, unary `-`, ...), which panic with
//!   the `RangeError` message when the predicate rejects the operands. An
//!   assigning operator that panics leaves its target unchanged.
//!
//! ```rust
//! use safeint::{Operator, RangeError, SafeI64, make_safe};
//!
//! let s = make_safe(i64::MAX - 15);
//! assert_eq!((s + 15i64).get(), i64::MAX);
//! assert_eq!(s.try_add(16), Err(RangeError::new(Operator::Add)));
//!
//! let min = SafeI64::new(i64::MIN);
//! assert!(min.try_div(-1).is_err());
//! assert!(min.try_rem(0).is_err());
//! assert_eq!(min.try_rem(-2).map(|r| r.get()), Ok(0));
//! ```
//!
//! The bitwise operators (`!`, `&`, `|`, `^`) cannot overflow and delegate
//! directly to `T`.

use crate::error::{Operator, RangeError};
use safeint_core::num::integral::Integral;
use safeint_core::num::sign::Sign;
use safeint_core::ops::predicates::SafePredicates;
use std::fmt::{Debug, Display};

/// An integer whose arithmetic operators are checked for overflow.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Safe<T>(T);

pub type SafeI8 = Safe<i8>;
pub type SafeI16 = Safe<i16>;
pub type SafeI32 = Safe<i32>;
pub type SafeI64 = Safe<i64>;
pub type SafeI128 = Safe<i128>;
pub type SafeIsize = Safe<isize>;
pub type SafeU8 = Safe<u8>;
pub type SafeU16 = Safe<u16>;
pub type SafeU32 = Safe<u32>;
pub type SafeU64 = Safe<u64>;
pub type SafeU128 = Safe<u128>;
pub type SafeUsize = Safe<usize>;

/// Wraps `value` into a `Safe<T>`.
///
/// # Examples
///
/// ```rust
/// # use safeint::make_safe;
/// const A: safeint::SafeI32 = make_safe(14);
/// assert_eq!(A.get(), 14);
/// ```
#[inline(always)]
pub const fn make_safe<T: SafePredicates>(value: T) -> Safe<T> {
    Safe::new(value)
}

#[inline]
fn checked<T>(accepted: bool, op: Operator, value: impl FnOnce() -> T) -> Result<Safe<T>, RangeError> {
    if accepted {
        Ok(Safe(value()))
    } else {
        Err(RangeError::new(op))
    }
}

#[inline]
#[track_caller]
fn or_panic<T>(result: Result<Safe<T>, RangeError>) -> Safe<T> {
    match result {
        Ok(v) => v,
        Err(e) => panic!("{e}"),
    }
}

impl<T> Safe<T>
where
    T: SafePredicates,
{
    /// The smallest value of `T`.
    pub const MIN: Self = Self(T::MIN);
    /// The largest value of `T`.
    pub const MAX: Self = Self(T::MAX);
    /// Zero.
    pub const ZERO: Self = Self(T::ZERO);

    #[inline(always)]
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    /// Returns the wrapped value.
    #[inline(always)]
    pub const fn get(&self) -> T {
        self.0
    }

    /// Unwraps into the primitive value.
    #[inline(always)]
    pub const fn into_inner(self) -> T {
        self.0
    }

    /// The sign of the value.
    #[inline]
    pub fn signum(&self) -> Sign {
        self.0.sign()
    }

    /// Computes `self + rhs`.
    ///
    /// # Errors
    ///
    /// `RangeError` with `Operator::Add` if the sum overflows `T`.
    #[inline]
    pub fn try_add(self, rhs: T) -> Result<Self, RangeError> {
        checked(self.0.is_safe_add(rhs), Operator::Add, || self.0 + rhs)
    }

    /// Computes `self - rhs`.
    ///
    /// # Errors
    ///
    /// `RangeError` with `Operator::Sub` if the difference overflows `T`.
    #[inline]
    pub fn try_sub(self, rhs: T) -> Result<Self, RangeError> {
        checked(self.0.is_safe_diff(rhs), Operator::Sub, || self.0 - rhs)
    }

    /// Computes `self * rhs`.
    ///
    /// # Errors
    ///
    /// `RangeError` with `Operator::Mul` if the product overflows `T`.
    #[inline]
    pub fn try_mul(self, rhs: T) -> Result<Self, RangeError> {
        checked(self.0.is_safe_mult(rhs), Operator::Mul, || self.0 * rhs)
    }

    /// Computes `self / rhs`.
    ///
    /// # Errors
    ///
    /// `RangeError` with `Operator::Div` if `rhs` is zero, or for `MIN / -1`.
    #[inline]
    pub fn try_div(self, rhs: T) -> Result<Self, RangeError> {
        checked(self.0.is_safe_div(rhs), Operator::Div, || self.0 / rhs)
    }

    /// Computes `self % rhs`.
    ///
    /// # Errors
    ///
    /// `RangeError` with `Operator::Rem` if `rhs` is zero, or for `MIN % -1`.
    #[inline]
    pub fn try_rem(self, rhs: T) -> Result<Self, RangeError> {
        checked(self.0.is_safe_mod(rhs), Operator::Rem, || self.0 % rhs)
    }

    /// Computes `self << rhs`.
    ///
    /// # Errors
    ///
    /// `RangeError` with `Operator::Shl` if `self` or `rhs` is negative,
    /// `rhs` is not below the bit width of `T`, or set bits would be shifted
    /// out.
    #[inline]
    pub fn try_shl(self, rhs: T) -> Result<Self, RangeError> {
        checked(self.0.is_safe_leftshift(rhs), Operator::Shl, || {
            self.0 << rhs.cast_u128() as usize
        })
    }

    /// Computes `self >> rhs`.
    ///
    /// # Errors
    ///
    /// `RangeError` with `Operator::Shr` if `self` or `rhs` is negative, or
    /// `rhs` is not below the bit width of `T`.
    #[inline]
    pub fn try_shr(self, rhs: T) -> Result<Self, RangeError> {
        checked(self.0.is_safe_rightshift(rhs), Operator::Shr, || {
            self.0 >> rhs.cast_u128() as usize
        })
    }

    /// Computes `-self`.
    ///
    /// # Errors
    ///
    /// `RangeError` with `Operator::Neg` for `MIN` of a signed type, or any
    /// non-zero value of an unsigned type.
    #[inline]
    pub fn try_neg(self) -> Result<Self, RangeError> {
        checked(self.0.is_safe_neg(), Operator::Neg, || T::ZERO - self.0)
    }

    /// Computes `|self|`.
    ///
    /// # Errors
    ///
    /// `RangeError` with `Operator::Abs` for `MIN` of a signed type.
    #[inline]
    pub fn try_abs(self) -> Result<Self, RangeError> {
        checked(self.0.is_safe_abs(), Operator::Abs, || {
            if self.0.is_negative() {
                T::ZERO - self.0
            } else {
                self.0
            }
        })
    }

    /// Computes `self + 1`.
    ///
    /// # Errors
    ///
    /// `RangeError` with `Operator::Increment` if `self` is `MAX`.
    #[inline]
    pub fn try_increment(self) -> Result<Self, RangeError> {
        let one = T::PLUS_ONE;
        checked(self.0.is_safe_add(one), Operator::Increment, || self.0 + one)
    }

    /// Computes `self - 1`.
    ///
    /// # Errors
    ///
    /// `RangeError` with `Operator::Decrement` if `self` is `MIN`.
    #[inline]
    pub fn try_decrement(self) -> Result<Self, RangeError> {
        let one = T::PLUS_ONE;
        checked(self.0.is_safe_diff(one), Operator::Decrement, || self.0 - one)
    }

    /// Increments `self` in place and returns the new value.
    ///
    /// # Panics
    ///
    /// Panics if `self` is `MAX`; `self` is left unchanged.
    #[inline]
    #[track_caller]
    pub fn increment(&mut self) -> Self {
        *self = or_panic(self.try_increment());
        *self
    }

    /// Decrements `self` in place and returns the new value.
    ///
    /// # Panics
    ///
    /// Panics if `self` is `MIN`; `self` is left unchanged.
    #[inline]
    #[track_caller]
    pub fn decrement(&mut self) -> Self {
        *self = or_panic(self.try_decrement());
        *self
    }
}

#[cfg(feature = "zero-default")]
impl<T> Default for Safe<T>
where
    T: SafePredicates,
{
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<T> Debug for Safe<T>
where
    T: SafePredicates,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Safe({:?})", self.0)
    }
}

impl<T> Display for Safe<T>
where
    T: SafePredicates,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl<T> From<T> for Safe<T>
where
    T: SafePredicates,
{
    #[inline(always)]
    fn from(value: T) -> Self {
        Self(value)
    }
}

macro_rules! impl_from_safe {
    ($($t:ty),*) => {
        $(
            impl From<Safe<$t>> for $t {
                #[inline(always)]
                fn from(value: Safe<$t>) -> Self {
                    value.0
                }
            }
        )*
    };
}

impl_from_safe!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<T> PartialEq<T> for Safe<T>
where
    T: SafePredicates,
{
    #[inline]
    fn eq(&self, other: &T) -> bool {
        self.0 == *other
    }
}

impl<T> PartialOrd<T> for Safe<T>
where
    T: SafePredicates,
{
    #[inline]
    fn partial_cmp(&self, other: &T) -> Option<std::cmp::Ordering> {
        Some(self.0.cmp(other))
    }
}

macro_rules! impl_checked_op {
    ($trait_name:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $try_method:ident) => {
        impl<T: SafePredicates> std::ops::$trait_name<T> for Safe<T> {
            type Output = Self;

            #[inline]
            #[track_caller]
            fn $method(self, rhs: T) -> Self::Output {
                or_panic(self.$try_method(rhs))
            }
        }
        impl<T: SafePredicates> std::ops::$trait_name for Safe<T> {
            type Output = Self;

            #[inline]
            #[track_caller]
            fn $method(self, rhs: Self) -> Self::Output {
                or_panic(self.$try_method(rhs.0))
            }
        }
        impl<T: SafePredicates> std::ops::$assign_trait<T> for Safe<T> {
            #[inline]
            #[track_caller]
            fn $assign_method(&mut self, rhs: T) {
                *self = or_panic(self.$try_method(rhs));
            }
        }
        impl<T: SafePredicates> std::ops::$assign_trait for Safe<T> {
            #[inline]
            #[track_caller]
            fn $assign_method(&mut self, rhs: Self) {
                *self = or_panic(self.$try_method(rhs.0));
            }
        }
    };
}

impl_checked_op!(Add, add, AddAssign, add_assign, try_add);
impl_checked_op!(Sub, sub, SubAssign, sub_assign, try_sub);
impl_checked_op!(Mul, mul, MulAssign, mul_assign, try_mul);
impl_checked_op!(Div, div, DivAssign, div_assign, try_div);
impl_checked_op!(Rem, rem, RemAssign, rem_assign, try_rem);
impl_checked_op!(Shl, shl, ShlAssign, shl_assign, try_shl);
impl_checked_op!(Shr, shr, ShrAssign, shr_assign, try_shr);

macro_rules! impl_bitwise_op {
    ($trait_name:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl<T: SafePredicates> std::ops::$trait_name<T> for Safe<T> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: T) -> Self::Output {
                Self(self.0 $op rhs)
            }
        }
        impl<T: SafePredicates> std::ops::$trait_name for Safe<T> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self::Output {
                Self(self.0 $op rhs.0)
            }
        }
        impl<T: SafePredicates> std::ops::$assign_trait<T> for Safe<T> {
            #[inline]
            fn $assign_method(&mut self, rhs: T) {
                self.0 = self.0 $op rhs;
            }
        }
        impl<T: SafePredicates> std::ops::$assign_trait for Safe<T> {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                self.0 = self.0 $op rhs.0;
            }
        }
    };
}

impl_bitwise_op!(BitAnd, bitand, BitAndAssign, bitand_assign, &);
impl_bitwise_op!(BitOr, bitor, BitOrAssign, bitor_assign, |);
impl_bitwise_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, ^);

impl<T: SafePredicates> std::ops::Not for Safe<T> {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        Self(!self.0)
    }
}

impl<T: SafePredicates> std::ops::Neg for Safe<T> {
    type Output = Self;

    #[inline]
    #[track_caller]
    fn neg(self) -> Self::Output {
        or_panic(self.try_neg())
    }
}

impl<T: SafePredicates> std::iter::Sum for Safe<T> {
    #[track_caller]
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, v| acc + v)
    }
}

impl<T: SafePredicates> std::iter::Product for Safe<T> {
    #[track_caller]
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self(T::PLUS_ONE), |acc, v| acc * v)
    }
}

impl<T: SafePredicates> num_traits::Zero for Safe<T> {
    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0 == T::ZERO
    }
}

impl<T: SafePredicates> num_traits::One for Safe<T> {
    #[inline]
    fn one() -> Self {
        Self(T::PLUS_ONE)
    }
}

impl<T: SafePredicates> num_traits::Bounded for Safe<T> {
    #[inline]
    fn min_value() -> Self {
        Self::MIN
    }

    #[inline]
    fn max_value() -> Self {
        Self::MAX
    }
}

macro_rules! impl_num_checked {
    ($trait_name:ident, $method:ident, $try_method:ident) => {
        impl<T: SafePredicates> num_traits::$trait_name for Safe<T> {
            #[inline]
            fn $method(&self, v: &Self) -> Option<Self> {
                self.$try_method(v.0).ok()
            }
        }
    };
}

impl_num_checked!(CheckedAdd, checked_add, try_add);
impl_num_checked!(CheckedSub, checked_sub, try_sub);
impl_num_checked!(CheckedMul, checked_mul, try_mul);
impl_num_checked!(CheckedDiv, checked_div, try_div);
impl_num_checked!(CheckedRem, checked_rem, try_rem);

impl<T: SafePredicates> num_traits::CheckedNeg for Safe<T> {
    #[inline]
    fn checked_neg(&self) -> Option<Self> {
        self.try_neg().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::{Bounded, CheckedAdd, CheckedDiv, CheckedNeg, One, Zero};
    use proptest::prelude::*;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    const S11: SafeI32 = make_safe(14);
    const S21: SafeI32 = make_safe(2);

    fn panics<F: FnOnce()>(f: F) -> bool {
        catch_unwind(AssertUnwindSafe(f)).is_err()
    }

    fn factorial(n: SafeI64) -> SafeI64 {
        if n <= 1i64 { Safe::one() } else { n * factorial(n - 1i64) }
    }

    #[test]
    fn test_const_construction() {
        assert_eq!(S11 + S21, 16i32);
        assert_eq!(S11 - S21, 12i32);
        assert_eq!(S11 * S21, 28i32);
        assert_eq!(S11 / S21, 7i32);
        assert_eq!(S11 % S21, 0i32);
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(make_safe(20)).get(), 2_432_902_008_176_640_000);
        assert!(panics(|| {
            factorial(make_safe(21));
        }));
    }

    #[test]
    fn test_conversions() {
        let s: SafeI64 = 42i64.into();
        assert_eq!(s.get(), 42);
        assert_eq!(s.into_inner(), 42);
        let v: i64 = s.into();
        assert_eq!(v, 42);
        assert_eq!(SafeU8::from(7u8), make_safe(7u8));
    }

    #[test]
    fn test_increment() {
        let mut i = 2i64;
        let mut s = make_safe(i);
        i += 1;
        assert_eq!(s.increment(), i);
        i += 1;
        assert_eq!(s.increment(), i);
        assert_eq!(s, i);

        let mut s = make_safe(i64::MAX - 1);
        assert!(!panics(|| {
            s.increment();
        }));
        assert!(panics(|| {
            s.increment();
        }));
        assert_eq!(s, i64::MAX);
        assert_eq!(
            s.try_increment(),
            Err(RangeError::new(Operator::Increment))
        );
    }

    #[test]
    fn test_decrement() {
        let mut s = make_safe(2i64);
        assert_eq!(s.decrement(), 1i64);
        assert_eq!(s.decrement(), 0i64);

        let mut s = make_safe(i64::MIN + 1);
        assert!(!panics(|| {
            s.decrement();
        }));
        assert!(panics(|| {
            s.decrement();
        }));
        assert_eq!(s, i64::MIN);
        assert_eq!(
            s.try_decrement(),
            Err(RangeError::new(Operator::Decrement))
        );
        assert!(SafeU8::new(0).try_decrement().is_err());
    }

    #[test]
    fn test_add() {
        let s = make_safe(2i64);
        assert_eq!((s + s).get(), 4);

        let s = make_safe(i64::MAX - 15);
        assert!(!panics(|| {
            let _ = s + 15i64;
        }));
        assert!(panics(|| {
            let _ = s + 16i64;
        }));
        assert!(!panics(|| {
            let _ = SafeI64::MAX + 0i64;
        }));
    }

    #[test]
    fn test_sub() {
        let s = make_safe(2i64);
        assert_eq!((s - 1i64).get(), 1);

        let s = make_safe(i64::MIN + 15);
        assert!(s.try_sub(15).is_ok());
        assert_eq!(s.try_sub(16), Err(RangeError::new(Operator::Sub)));
        assert!(SafeI64::MIN.try_add(0).is_ok());
        assert!(SafeU32::new(1).try_sub(2).is_err());
    }

    #[test]
    fn test_mul() {
        let s = make_safe(2i64);
        assert_eq!((s * 2i64).get(), 4);

        let s = make_safe(i64::MAX / 2 - 1);
        assert!(s.try_mul(2).is_ok());
        assert_eq!(s.try_mul(3), Err(RangeError::new(Operator::Mul)));
        assert!(SafeI64::MAX.try_mul(1).is_ok());
        assert!(SafeI64::MIN.try_mul(-1).is_err());
    }

    #[test]
    fn test_div_and_rem() {
        let s = make_safe(2i64);
        assert_eq!((s / 2i64).get(), 1);
        assert_eq!((s % 2i64).get(), 0);

        let s = SafeI64::MIN;
        assert!(s.try_div(1).is_ok());
        assert_eq!(s.try_div(0), Err(RangeError::new(Operator::Div)));
        assert_eq!(s.try_div(-1), Err(RangeError::new(Operator::Div)));
        assert!(s.try_rem(1).is_ok());
        assert_eq!(s.try_rem(0), Err(RangeError::new(Operator::Rem)));
        assert_eq!(s.try_rem(-1), Err(RangeError::new(Operator::Rem)));
        assert_eq!(s.try_rem(-2).map(|r| r.get()), Ok(0));
    }

    #[test]
    fn test_assign_ops() {
        let mut i = 2i64;
        let mut s = make_safe(i);
        s += 1i64;
        i += 1;
        assert_eq!(s, i);
        s -= 1i64;
        i -= 1;
        assert_eq!(s, i);
        s *= 5i64;
        i *= 5;
        assert_eq!(s, i);
        s /= 3i64;
        i /= 3;
        assert_eq!(s, i);
        s %= 2i64;
        i %= 2;
        assert_eq!(s, i);
        s <<= 4i64;
        i <<= 4;
        assert_eq!(s, i);
        s >>= 2i64;
        i >>= 2;
        assert_eq!(s, i);
        s += make_safe(10i64);
        i += 10;
        assert_eq!(s, i);
    }

    #[test]
    fn test_failed_assign_leaves_value_unchanged() {
        let mut s = SafeI64::MAX;
        assert!(!panics(|| s += 0i64));
        assert!(panics(|| s += 1i64));
        assert_eq!(s, i64::MAX);

        let mut s = SafeI64::MIN;
        assert!(!panics(|| s -= 0i64));
        assert!(panics(|| s -= 1i64));
        assert_eq!(s, i64::MIN);

        let mut s = make_safe(i64::MIN / 2 + 1);
        assert!(!panics(|| s *= 2i64));
        assert!(panics(|| s *= 3i64));
        assert_eq!(s, i64::MIN + 2);

        let mut s = SafeI64::MIN;
        assert!(!panics(|| s /= 1i64));
        assert!(panics(|| s /= -1i64));
        assert!(panics(|| s %= 0i64));
        assert!(panics(|| s %= -1i64));
        assert_eq!(s, i64::MIN);
    }

    #[test]
    fn test_panic_message() {
        let err = catch_unwind(|| {
            let _ = SafeI8::MAX + 1i8;
        })
        .unwrap_err();
        let msg = err
            .downcast_ref::<String>()
            .map(String::as_str)
            .unwrap_or_default();
        assert_eq!(msg, "overflow with operator+");
    }

    #[test]
    fn test_bitwise_ops() {
        let i = 2i64;
        let s = make_safe(i);
        assert_eq!((!s).get(), !i);
        assert_eq!((s & 1i64).get(), i & 1);
        assert_eq!((s | 1i64).get(), i | 1);
        assert_eq!((s ^ 2i64).get(), i ^ 2);
        assert_eq!((s & s).get(), i);

        let mut s = make_safe(0b1100u8);
        s &= 0b0100u8;
        assert_eq!(s, 0b0100u8);
        s |= 0b0001u8;
        assert_eq!(s, 0b0101u8);
        s ^= make_safe(0b0011u8);
        assert_eq!(s, 0b0110u8);
        assert_eq!((!SafeU8::ZERO).get(), u8::MAX);
    }

    #[test]
    fn test_shifts() {
        let i = 2i64;
        let s = make_safe(i);
        assert_eq!((s << 1i64).get(), i << 1);
        assert_eq!((s >> 1i64).get(), i >> 1);
        assert_eq!(s.try_shl(-1), Err(RangeError::new(Operator::Shl)));
        assert_eq!(s.try_shl(64), Err(RangeError::new(Operator::Shl)));
        assert_eq!(s.try_shl(62), Err(RangeError::new(Operator::Shl)));
        assert_eq!(s.try_shl(61).map(|v| v.get()), Ok(1 << 62));
        assert_eq!(s.try_shr(64), Err(RangeError::new(Operator::Shr)));
        assert!(make_safe(-1i64).try_shr(1).is_err());
        assert!(make_safe(-1i64).try_shl(1).is_err());
        assert_eq!(SafeU8::MAX.try_shr(7).map(|v| v.get()), Ok(1));
        assert!(SafeU8::MAX.try_shl(1).is_err());
        assert_eq!(make_safe(1u128).try_shl(127).map(|v| v.get()), Ok(1 << 127));
    }

    #[test]
    fn test_neg_and_abs() {
        assert_eq!((-make_safe(5i32)).get(), -5);
        assert_eq!((-SafeI32::MAX).get(), -i32::MAX);
        assert!(panics(|| {
            let _ = -SafeI32::MIN;
        }));
        assert_eq!(SafeU32::ZERO.try_neg(), Ok(SafeU32::ZERO));
        assert_eq!(make_safe(1u32).try_neg(), Err(RangeError::new(Operator::Neg)));

        assert_eq!(make_safe(-5i32).try_abs().map(|v| v.get()), Ok(5));
        assert_eq!(make_safe(5i32).try_abs().map(|v| v.get()), Ok(5));
        assert_eq!(SafeI32::MIN.try_abs(), Err(RangeError::new(Operator::Abs)));
        assert_eq!(SafeU8::MAX.try_abs(), Ok(SafeU8::MAX));
    }

    #[test]
    fn test_comparisons() {
        let a = make_safe(3i16);
        let b = make_safe(-4i16);
        assert!(b < a);
        assert!(a > -4i16);
        assert!(a >= 3i16);
        assert_eq!(a.max(b), a);
        assert_ne!(a, 4i16);
        assert_eq!(a.signum(), Sign::Positive);
        assert_eq!(b.signum(), Sign::Negative);
        assert_eq!(SafeI16::ZERO.signum(), Sign::Zero);
    }

    #[test]
    fn test_hash_matches_eq() {
        use std::collections::HashSet;
        let set: HashSet<SafeU16> = [1u16, 2, 2, 3].into_iter().map(Safe::new).collect();
        assert_eq!(set.len(), 3);
        assert!(set.contains(&make_safe(2u16)));
    }

    #[test]
    fn test_debug_and_display() {
        let s = make_safe(-7i32);
        assert_eq!(format!("{}", s), "-7");
        assert_eq!(format!("{:?}", s), "Safe(-7)");
        assert_eq!(format!("{:>4}", make_safe(7u8)), "   7");
    }

    #[cfg(feature = "zero-default")]
    #[test]
    fn test_default_is_zero() {
        assert_eq!(SafeI64::default(), 0i64);
        assert_eq!(SafeU128::default(), SafeU128::ZERO);
    }

    #[test]
    fn test_sum_and_product() {
        let sum: SafeU8 = [100u8, 100, 55].into_iter().map(Safe::new).sum();
        assert_eq!(sum, 255u8);
        assert!(panics(|| {
            let _: SafeU8 = [200u8, 100].into_iter().map(Safe::new).sum();
        }));
        let product: SafeI32 = (1..=12).map(Safe::new).product();
        assert_eq!(product, 479_001_600i32);
        assert!(panics(|| {
            let _: SafeI32 = (1..=13).map(Safe::new).product();
        }));
    }

    #[test]
    fn test_num_traits() {
        assert!(SafeI32::zero().is_zero());
        assert_eq!(SafeI32::one(), 1i32);
        assert_eq!(SafeI8::min_value(), i8::MIN);
        assert_eq!(SafeI8::max_value(), i8::MAX);
        assert_eq!(SafeI8::MAX.checked_add(&make_safe(1)), None);
        assert_eq!(make_safe(1i8).checked_add(&make_safe(1)), Some(make_safe(2)));
        assert_eq!(SafeI8::MIN.checked_div(&make_safe(-1)), None);
        assert_eq!(SafeI8::MIN.checked_neg(), None);
    }

    proptest! {
        #[test]
        fn prop_try_ops_match_checked(a in any::<i64>(), b in any::<i64>()) {
            let s = make_safe(a);
            prop_assert_eq!(s.try_add(b).ok().map(|v| v.get()), a.checked_add(b));
            prop_assert_eq!(s.try_sub(b).ok().map(|v| v.get()), a.checked_sub(b));
            prop_assert_eq!(s.try_mul(b).ok().map(|v| v.get()), a.checked_mul(b));
            prop_assert_eq!(s.try_div(b).ok().map(|v| v.get()), a.checked_div(b));
            prop_assert_eq!(s.try_rem(b).ok().map(|v| v.get()), a.checked_rem(b));
            prop_assert_eq!(s.try_neg().ok().map(|v| v.get()), a.checked_neg());
            prop_assert_eq!(s.try_abs().ok().map(|v| v.get()), a.checked_abs());
        }

        #[test]
        fn prop_unsigned_try_ops_match_checked(a in any::<u32>(), b in any::<u32>()) {
            let s = make_safe(a);
            prop_assert_eq!(s.try_add(b).ok().map(|v| v.get()), a.checked_add(b));
            prop_assert_eq!(s.try_sub(b).ok().map(|v| v.get()), a.checked_sub(b));
            prop_assert_eq!(s.try_mul(b).ok().map(|v| v.get()), a.checked_mul(b));
            prop_assert_eq!(s.try_div(b).ok().map(|v| v.get()), a.checked_div(b));
            prop_assert_eq!(s.try_neg().ok().map(|v| v.get()), a.checked_neg());
        }

        #[test]
        fn prop_shl_is_lossless(a in any::<u64>(), b in 0u64..64) {
            if let Ok(v) = make_safe(a).try_shl(b) {
                prop_assert_eq!(v.get() >> b, a);
            } else {
                prop_assert_ne!((a << b) >> b, a);
            }
        }
    }
}
