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

//! # Integral Capability
//!
//! The `Integral` trait is the single bound every generic function of this
//! crate is written against. It is sealed and implemented for the twelve
//! built-in integer primitives only, which keeps `bool`, `char` and any
//! user type out at compile time:
//!
//! ```compile_fail
//! # use safeint_core::num::integral::Integral;
//! fn digits<T: Integral>() -> u32 { T::DOMAIN.digits() }
//! digits::<bool>();
//! ```
//!
//! ```compile_fail
//! # use safeint_core::num::integral::Integral;
//! fn digits<T: Integral>() -> u32 { T::DOMAIN.digits() }
//! digits::<char>();
//! ```
//!
//! Signedness and width are carried by the associated constant
//! `Integral::DOMAIN`, a [`Domain`] tag that can be inspected in `const`
//! context.

use crate::num::constants::{Bounds, PlusOne, Zero};
use num_traits::PrimInt;
use std::fmt::{Debug, Display};
use std::hash::Hash;

mod sealed {
    pub trait Sealed {}
}

/// Signedness and bit width of an integer primitive.
///
/// Every supported value fits in either an `i128` or a `u128`, so the range
/// queries take those as their working types.
///
/// # Examples
///
/// ```rust
/// # use safeint_core::num::integral::Domain;
/// const I16: Domain = Domain::of::<i16>();
///
/// assert!(I16.is_signed());
/// assert_eq!(I16.bits(), 16);
/// assert_eq!(I16.digits(), 15);
/// assert!(I16.contains_signed(-32768));
/// assert!(!I16.contains_unsigned(32768));
/// ```
///
/// Tags only come from the supported primitives:
///
/// ```compile_fail
/// # use safeint_core::num::integral::Domain;
/// let _ = Domain::new(true, 24);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Domain {
    signed: bool,
    bits: u32,
}

impl Domain {
    /// Creates a new domain tag. Public code obtains tags through
    /// [`Domain::of`] or `Integral::DOMAIN`.
    ///
    /// # Panics
    ///
    /// Panics if `bits` is zero, greater than 128, or `1` for a signed domain.
    #[inline]
    pub(crate) const fn new(signed: bool, bits: u32) -> Self {
        assert!(
            bits > signed as u32 && bits <= 128,
            "Invalid domain: bit width must be in 1..=128 and leave room for a sign bit"
        );
        Self { signed, bits }
    }

    /// Returns the domain of the integer primitive `T`.
    #[inline(always)]
    pub const fn of<T: Integral>() -> Self {
        T::DOMAIN
    }

    /// Returns `true` if the domain can represent negative values.
    #[inline(always)]
    pub const fn is_signed(self) -> bool {
        self.signed
    }

    /// Returns the storage width in bits.
    #[inline(always)]
    pub const fn bits(self) -> u32 {
        self.bits
    }

    /// Returns the precision: the number of value bits, excluding the sign bit.
    #[inline(always)]
    pub const fn digits(self) -> u32 {
        self.bits - self.signed as u32
    }

    /// Returns the largest value of the domain as a `u128`.
    #[inline(always)]
    pub const fn max_magnitude(self) -> u128 {
        u128::MAX >> (128 - self.digits())
    }

    /// Returns the magnitude of the smallest value of the domain.
    ///
    /// This is `0` for unsigned domains and `2^digits` for signed ones,
    /// i.e. one more than [`Domain::max_magnitude`].
    #[inline(always)]
    pub const fn min_magnitude(self) -> u128 {
        if self.signed { 1u128 << self.digits() } else { 0 }
    }

    /// Returns `true` if the non-negative value `v` is representable.
    #[inline(always)]
    pub const fn contains_unsigned(self, v: u128) -> bool {
        v <= self.max_magnitude()
    }

    /// Returns `true` if the signed value `v` is representable.
    #[inline]
    pub const fn contains_signed(self, v: i128) -> bool {
        if v >= 0 {
            self.contains_unsigned(v as u128)
        } else {
            v.unsigned_abs() <= self.min_magnitude()
        }
    }

    /// Returns `true` if the value with the given sign and magnitude is representable.
    #[inline]
    pub const fn contains(self, negative: bool, magnitude: u128) -> bool {
        if negative && magnitude != 0 {
            magnitude <= self.min_magnitude()
        } else {
            magnitude <= self.max_magnitude()
        }
    }

    /// Returns `true` if every value of `self` is representable in `other`.
    #[inline]
    pub const fn is_subset_of(self, other: Domain) -> bool {
        (!self.signed || other.signed) && self.digits() <= other.digits()
    }
}

impl Debug for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Domain({})", self)
    }
}

impl Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = if self.signed { 'i' } else { 'u' };
        write!(f, "{}{}", prefix, self.bits)
    }
}

/// Returns the precision of `T`, the number of bits used to represent its
/// values excluding sign and padding bits.
///
/// # Examples
///
/// ```rust
/// # use safeint_core::num::integral::precision;
/// assert_eq!(precision::<u8>(), 8);
/// assert_eq!(precision::<i8>(), 7);
/// assert_eq!(precision::<i128>(), 127);
/// ```
#[inline(always)]
pub const fn precision<T: Integral>() -> u32 {
    T::DOMAIN.digits()
}

/// Counts the set bits of `max`.
///
/// Applied to the largest value of a type this yields its precision without
/// relying on the storage width, which stays correct on targets where
/// integers carry padding bits. All Rust primitives are padding free, so
/// [`precision`] uses the built-in width and this is kept as the portable
/// definition the two are tested against.
///
/// # Examples
///
/// ```rust
/// # use safeint_core::num::integral::population;
/// assert_eq!(population(i16::MAX as u128), 15);
/// assert_eq!(population(0), 0);
/// ```
pub const fn population(max: u128) -> u32 {
    let mut remaining = max;
    let mut count = 0;
    while remaining != 0 {
        count += (remaining & 1) as u32;
        remaining >>= 1;
    }
    count
}

/// A built-in integer primitive, tagged with its signedness and width.
///
/// Implemented for `i8`, `i16`, `i32`, `i64`, `i128`, `isize` and their
/// unsigned counterparts. The trait is sealed.
///
/// The casting methods have the semantics of Rust's `as` operator; callers
/// are expected to have established that the value fits before relying on
/// the result being exact.
pub trait Integral:
    PrimInt + Bounds + Zero + PlusOne + Hash + Debug + Display + Send + Sync + 'static + sealed::Sealed
{
    /// `true` for signed primitives.
    const SIGNED: bool;

    /// Signedness and width of the type.
    const DOMAIN: Domain;

    /// Returns `true` if `self < 0`. Always `false` for unsigned types.
    fn is_negative(self) -> bool;

    /// Returns `|self|` as a `u128`. Total, including for `MIN`.
    fn magnitude(self) -> u128;

    /// `self as u128`.
    fn cast_u128(self) -> u128;

    /// `self as i128`.
    fn cast_i128(self) -> i128;

    /// `v as Self`.
    fn from_u128_cast(v: u128) -> Self;

    /// `v as Self`.
    fn from_i128_cast(v: i128) -> Self;
}

macro_rules! impl_integral_common {
    (@negative true, $v:expr) => { $v < 0 };
    (@negative false, $v:expr) => {{
        let _ = $v;
        false
    }};
    (@magnitude true, $v:expr) => { $v.unsigned_abs() as u128 };
    (@magnitude false, $v:expr) => { $v as u128 };
    ($t:ty, $signed:tt) => {
        impl sealed::Sealed for $t {}

        impl Integral for $t {
            const SIGNED: bool = $signed;
            const DOMAIN: Domain = Domain::new($signed, <$t>::BITS);

            #[inline(always)]
            fn is_negative(self) -> bool {
                impl_integral_common!(@negative $signed, self)
            }

            #[inline(always)]
            fn magnitude(self) -> u128 {
                impl_integral_common!(@magnitude $signed, self)
            }

            #[inline(always)]
            fn cast_u128(self) -> u128 {
                self as u128
            }

            #[inline(always)]
            fn cast_i128(self) -> i128 {
                self as i128
            }

            #[inline(always)]
            fn from_u128_cast(v: u128) -> Self {
                v as $t
            }

            #[inline(always)]
            fn from_i128_cast(v: i128) -> Self {
                v as $t
            }
        }
    };
}

macro_rules! impl_integral {
    (signed: $($s:ty),*; unsigned: $($u:ty),* $(;)?) => {
        $( impl_integral_common!($s, true); )*
        $( impl_integral_common!($u, false); )*
    };
}

impl_integral!(
    signed: i8, i16, i32, i64, i128, isize;
    unsigned: u8, u16, u32, u64, u128, usize;
);

/// Converts `v` into `T` with the semantics of `v as T`.
///
/// Signed sources are sign-extended, unsigned sources zero-extended, and the
/// result is truncated to the width of `T`.
///
/// # Examples
///
/// ```rust
/// # use safeint_core::num::integral::cast;
/// assert_eq!(cast::<u8, i32>(-1), 255);
/// assert_eq!(cast::<i64, i8>(-5), -5);
/// assert_eq!(cast::<i16, u32>(40_000), -25_536);
/// ```
#[inline(always)]
pub fn cast<T, U>(v: U) -> T
where
    T: Integral,
    U: Integral,
{
    if U::SIGNED {
        T::from_i128_cast(v.cast_i128())
    } else {
        T::from_u128_cast(v.cast_u128())
    }
}

const _: () = assert!(Domain::of::<u8>().max_magnitude() == u8::MAX as u128);
const _: () = assert!(Domain::of::<i8>().min_magnitude() == 128);
const _: () = assert!(Domain::of::<u128>().max_magnitude() == u128::MAX);
const _: () = assert!(Domain::of::<i128>().min_magnitude() == i128::MIN.unsigned_abs());
const _: () = assert!(population(i64::MAX as u128) == precision::<i64>());
const _: () = assert!(Domain::of::<u16>().is_subset_of(Domain::of::<i32>()));
const _: () = assert!(!Domain::of::<u32>().is_subset_of(Domain::of::<i32>()));
