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

//! # Same-Type Safety Predicates
//!
//! For every arithmetic operator, decide whether applying the native
//! operator to two operands of the same primitive type is well defined and
//! free of overflow, without performing it.
//!
//! Each primitive gets a module of `const fn` predicates (`predicates::u32`,
//! `predicates::i64`, ...) that can be used in `const` items and static
//! assertions. The [`SafePredicates`] trait and the free functions of this
//! module expose the same predicates generically; they forward to the
//! per-type functions and always agree with them.
//!
//! ```rust
//! use safeint_core::ops::predicates::{self, is_safe_add};
//!
//! const FITS: bool = predicates::u32::is_safe_add(u32::MAX - 1, 1);
//! assert!(FITS);
//! assert!(!is_safe_add(u32::MAX, 1));
//! ```

use crate::num::integral::Integral;
use crate::num::sign::Sign;

/// Overflow and undefined-behaviour predicates for a single primitive type.
///
/// A method returns `true` exactly when the corresponding native operator,
/// applied to `self` and `rhs`, neither overflows nor panics.
pub trait SafePredicates: Integral {
    /// `self + rhs` stays within the bounds of `Self`.
    fn is_safe_add(self, rhs: Self) -> bool;

    /// `self - rhs` stays within the bounds of `Self`.
    fn is_safe_diff(self, rhs: Self) -> bool;

    /// `self * rhs` stays within the bounds of `Self`.
    fn is_safe_mult(self, rhs: Self) -> bool;

    /// `self / rhs` has a non-zero divisor and does not overflow.
    fn is_safe_div(self, rhs: Self) -> bool;

    /// `self % rhs` has a non-zero divisor and does not overflow.
    fn is_safe_mod(self, rhs: Self) -> bool;

    /// `|self|` is representable in `Self`.
    fn is_safe_abs(self) -> bool;

    /// `-self` is representable in `Self`.
    fn is_safe_neg(self) -> bool;

    /// `self << rhs` has an in-range shift amount and loses no significant bits.
    fn is_safe_leftshift(self, rhs: Self) -> bool;

    /// `self >> rhs` has an in-range shift amount and a non-negative operand.
    fn is_safe_rightshift(self, rhs: Self) -> bool;

    /// The sign of `self`.
    fn sign(self) -> Sign;
}

macro_rules! forward_predicates {
    ($t:ident) => {
        impl SafePredicates for ::core::primitive::$t {
            #[inline(always)]
            fn is_safe_add(self, rhs: Self) -> bool {
                $t::is_safe_add(self, rhs)
            }

            #[inline(always)]
            fn is_safe_diff(self, rhs: Self) -> bool {
                $t::is_safe_diff(self, rhs)
            }

            #[inline(always)]
            fn is_safe_mult(self, rhs: Self) -> bool {
                $t::is_safe_mult(self, rhs)
            }

            #[inline(always)]
            fn is_safe_div(self, rhs: Self) -> bool {
                $t::is_safe_div(self, rhs)
            }

            #[inline(always)]
            fn is_safe_mod(self, rhs: Self) -> bool {
                $t::is_safe_mod(self, rhs)
            }

            #[inline(always)]
            fn is_safe_abs(self) -> bool {
                $t::is_safe_abs(self)
            }

            #[inline(always)]
            fn is_safe_neg(self) -> bool {
                $t::is_safe_neg(self)
            }

            #[inline(always)]
            fn is_safe_leftshift(self, rhs: Self) -> bool {
                $t::is_safe_leftshift(self, rhs)
            }

            #[inline(always)]
            fn is_safe_rightshift(self, rhs: Self) -> bool {
                $t::is_safe_rightshift(self, rhs)
            }

            #[inline(always)]
            fn sign(self) -> Sign {
                $t::signum(self)
            }
        }
    };
}

macro_rules! unsigned_predicates {
    ($($t:ident),* $(,)?) => {
        $(
            #[doc = concat!("`const` safety predicates for `", stringify!($t), "`.")]
            pub mod $t {
                use crate::num::sign::Sign;

                #[inline(always)]
                pub const fn is_safe_add(a: $t, b: $t) -> bool {
                    b == 0 || a <= $t::MAX - b
                }

                #[inline(always)]
                pub const fn is_safe_diff(a: $t, b: $t) -> bool {
                    a >= b
                }

                #[inline(always)]
                pub const fn is_safe_mult(a: $t, b: $t) -> bool {
                    // fixed points
                    if a == 0 || b == 0 || a == 1 || b == 1 {
                        return true;
                    }
                    a <= $t::MAX / b
                }

                #[inline(always)]
                pub const fn is_safe_div(_a: $t, b: $t) -> bool {
                    b != 0
                }

                #[inline(always)]
                pub const fn is_safe_mod(_a: $t, b: $t) -> bool {
                    b != 0
                }

                #[inline(always)]
                pub const fn is_safe_abs(_a: $t) -> bool {
                    true
                }

                #[inline(always)]
                pub const fn is_safe_neg(a: $t) -> bool {
                    a == 0
                }

                #[inline(always)]
                pub const fn is_safe_leftshift(a: $t, b: $t) -> bool {
                    !(b >= $t::BITS as $t || a > ($t::MAX >> b))
                }

                /// Only the shift amount can make an unsigned `>>` overflow.
                #[inline(always)]
                pub const fn is_safe_rightshift(_a: $t, b: $t) -> bool {
                    b < $t::BITS as $t
                }

                #[inline(always)]
                pub const fn signum(x: $t) -> Sign {
                    if x > 0 { Sign::Positive } else { Sign::Zero }
                }
            }

            forward_predicates!($t);
        )*
    };
}

macro_rules! signed_predicates {
    ($($t:ident),* $(,)?) => {
        $(
            #[doc = concat!("`const` safety predicates for `", stringify!($t), "`.")]
            pub mod $t {
                use crate::num::sign::Sign;

                #[inline(always)]
                pub const fn is_safe_add(a: $t, b: $t) -> bool {
                    if b > 0 {
                        a <= $t::MAX - b
                    } else if b < 0 {
                        a >= $t::MIN - b
                    } else {
                        true
                    }
                }

                #[inline(always)]
                pub const fn is_safe_diff(a: $t, b: $t) -> bool {
                    if b > 0 {
                        a >= $t::MIN + b
                    } else if b < 0 {
                        a <= $t::MAX + b
                    } else {
                        true
                    }
                }

                #[inline(always)]
                pub const fn is_safe_mult(a: $t, b: $t) -> bool {
                    // fixed points
                    if a == 0 || b == 0 || a == 1 || b == 1 {
                        return true;
                    }
                    // MIN has no positive counterpart
                    if a == -1 {
                        return b != $t::MIN;
                    }
                    if b == -1 {
                        return a != $t::MIN;
                    }
                    // Each quotient divides a bound by a non-zero operand other
                    // than -1, so none of them can overflow.
                    if a > 0 {
                        if b > 0 { a <= $t::MAX / b } else { b >= $t::MIN / a }
                    } else if b > 0 {
                        a >= $t::MIN / b
                    } else {
                        b >= $t::MAX / a
                    }
                }

                #[inline(always)]
                pub const fn is_safe_div(a: $t, b: $t) -> bool {
                    b != 0 && !(b == -1 && a == $t::MIN)
                }

                #[inline(always)]
                pub const fn is_safe_mod(a: $t, b: $t) -> bool {
                    b != 0 && !(b == -1 && a == $t::MIN)
                }

                #[inline(always)]
                pub const fn is_safe_abs(a: $t) -> bool {
                    a != $t::MIN
                }

                #[inline(always)]
                pub const fn is_safe_neg(a: $t) -> bool {
                    a != $t::MIN
                }

                #[inline(always)]
                pub const fn is_safe_leftshift(a: $t, b: $t) -> bool {
                    !(a < 0 || b < 0 || b >= $t::BITS as $t || a > ($t::MAX >> b))
                }

                #[inline(always)]
                pub const fn is_safe_rightshift(a: $t, b: $t) -> bool {
                    !(a < 0 || b < 0 || b >= $t::BITS as $t)
                }

                #[inline(always)]
                pub const fn signum(x: $t) -> Sign {
                    if x > 0 {
                        Sign::Positive
                    } else if x < 0 {
                        Sign::Negative
                    } else {
                        Sign::Zero
                    }
                }
            }

            forward_predicates!($t);
        )*
    };
}

unsigned_predicates!(u8, u16, u32, u64, u128, usize);
signed_predicates!(i8, i16, i32, i64, i128, isize);

/// Checks whether `a + b` can be computed in `T` without overflow.
///
/// # Examples
///
/// ```rust
/// # use safeint_core::ops::predicates::is_safe_add;
/// assert!(is_safe_add(u32::MAX - 1, 1));
/// assert!(!is_safe_add(u32::MAX, 1));
/// assert!(!is_safe_add(i8::MIN, -1));
/// ```
#[inline(always)]
pub fn is_safe_add<T: SafePredicates>(a: T, b: T) -> bool {
    a.is_safe_add(b)
}

/// Checks whether `a - b` can be computed in `T` without overflow.
///
/// # Examples
///
/// ```rust
/// # use safeint_core::ops::predicates::is_safe_diff;
/// assert!(!is_safe_diff(0u8, 1));
/// assert!(is_safe_diff(0i8, 127));
/// assert!(!is_safe_diff(0i8, -128));
/// ```
#[inline(always)]
pub fn is_safe_diff<T: SafePredicates>(a: T, b: T) -> bool {
    a.is_safe_diff(b)
}

/// Checks whether `a * b` can be computed in `T` without overflow.
///
/// # Examples
///
/// ```rust
/// # use safeint_core::ops::predicates::is_safe_mult;
/// assert!(!is_safe_mult(i32::MIN, -1));
/// assert!(is_safe_mult(i32::MAX, -1));
/// assert!(is_safe_mult(-2i8, 64));
/// assert!(!is_safe_mult(-2i8, -64));
/// ```
#[inline(always)]
pub fn is_safe_mult<T: SafePredicates>(a: T, b: T) -> bool {
    a.is_safe_mult(b)
}

/// Checks whether `a / b` is defined and does not overflow in `T`.
///
/// # Examples
///
/// ```rust
/// # use safeint_core::ops::predicates::is_safe_div;
/// assert!(!is_safe_div(1u16, 0));
/// assert!(!is_safe_div(i64::MIN, -1));
/// assert!(is_safe_div(i64::MIN, 1));
/// ```
#[inline(always)]
pub fn is_safe_div<T: SafePredicates>(a: T, b: T) -> bool {
    a.is_safe_div(b)
}

/// Checks whether `a % b` is defined and does not overflow in `T`.
#[inline(always)]
pub fn is_safe_mod<T: SafePredicates>(a: T, b: T) -> bool {
    a.is_safe_mod(b)
}

/// Checks whether `|a|` is representable in `T`.
///
/// # Examples
///
/// ```rust
/// # use safeint_core::ops::predicates::is_safe_abs;
/// assert!(!is_safe_abs(i16::MIN));
/// assert!(is_safe_abs(i16::MIN + 1));
/// assert!(is_safe_abs(u16::MAX));
/// ```
#[inline(always)]
pub fn is_safe_abs<T: SafePredicates>(a: T) -> bool {
    a.is_safe_abs()
}

/// Checks whether `-a` is representable in `T`.
#[inline(always)]
pub fn is_safe_neg<T: SafePredicates>(a: T) -> bool {
    a.is_safe_neg()
}

/// Checks whether `a << b` is defined in `T` and keeps every significant bit.
///
/// # Examples
///
/// ```rust
/// # use safeint_core::ops::predicates::is_safe_leftshift;
/// assert!(is_safe_leftshift(1i64, 62));
/// assert!(!is_safe_leftshift(1i64, 63));
/// assert!(!is_safe_leftshift(-1i64, 1));
/// assert!(is_safe_leftshift(1u8, 7));
/// assert!(!is_safe_leftshift(1u8, 8));
/// ```
#[inline(always)]
pub fn is_safe_leftshift<T: SafePredicates>(a: T, b: T) -> bool {
    a.is_safe_leftshift(b)
}

/// Checks whether `a >> b` is defined in `T`.
///
/// Negative operands and negative shift amounts are rejected for signed
/// types, as are shift amounts of at least the bit width for all types.
///
/// For unsigned types the operand never matters, so the check reduces to
/// `b < T::BITS`. Unsigned right shifts are not unconditionally safe: Rust's
/// native `>>` overflows (and panics in debug builds) once the amount
/// reaches the bit width, exactly as `checked_shr` reports.
///
/// # Examples
///
/// ```rust
/// # use safeint_core::ops::predicates::is_safe_rightshift;
/// assert!(is_safe_rightshift(u32::MAX, 31));
/// assert!(!is_safe_rightshift(u32::MAX, 32));
/// assert_eq!(is_safe_rightshift(1u32, 32), 1u32.checked_shr(32).is_some());
/// assert!(!is_safe_rightshift(-2i32, 1));
/// assert!(!is_safe_rightshift(2i32, -1));
/// ```
#[inline(always)]
pub fn is_safe_rightshift<T: SafePredicates>(a: T, b: T) -> bool {
    a.is_safe_rightshift(b)
}

/// Returns the sign of `x`. Never [`Sign::Negative`] for unsigned types.
///
/// # Examples
///
/// ```rust
/// # use safeint_core::num::sign::Sign;
/// # use safeint_core::ops::predicates::signum;
/// assert_eq!(signum(-7i32), Sign::Negative);
/// assert_eq!(signum(0u64), Sign::Zero);
/// assert_eq!(signum(u8::MAX), Sign::Positive);
/// ```
#[inline(always)]
pub fn signum<T: SafePredicates>(x: T) -> Sign {
    x.sign()
}

// Compile-time checks of the `const` predicates.
mod static_assertions {
    use super::{i32, i64, u32};
    use crate::num::sign::Sign;

    const _: () = assert!(!u32::is_safe_add(::core::primitive::u32::MAX, 1));
    const _: () = assert!(u32::is_safe_add(::core::primitive::u32::MAX - 1, 1));
    const _: () = assert!(!i32::is_safe_mult(::core::primitive::i32::MIN, -1));
    const _: () = assert!(i64::is_safe_leftshift(1, 62));
    const _: () = assert!(!i64::is_safe_leftshift(1, 63));
    const _: () = assert!(!i32::is_safe_abs(::core::primitive::i32::MIN));
    const _: () = assert!(matches!(i32::signum(-3), Sign::Negative));
    const _: () = assert!(matches!(u32::signum(0), Sign::Zero));
}
