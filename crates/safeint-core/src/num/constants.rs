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

//! Associated-constant traits for the supported integer primitives.
//!
//! Generic code in this crate cannot call the inherent `i32::MAX` or
//! literal `0` for an arbitrary `T`, and `num_traits::Zero::zero()` is not
//! usable in constant position. These traits expose the same values as
//! associated constants.

/// A trait for integer types that have a constant representing 0.
pub trait Zero {
    /// The constant representing 0 for the implementing type.
    const ZERO: Self;
}

/// A trait for integer types that have a constant representing +1.
pub trait PlusOne {
    /// The constant representing +1 for the implementing type.
    const PLUS_ONE: Self;
}

/// A trait for integer types with a smallest and a largest value.
///
/// # Examples
///
/// ```rust
/// # use safeint_core::num::constants::Bounds;
/// fn span<T: Bounds>() -> (T, T) {
///     (T::MIN, T::MAX)
/// }
///
/// assert_eq!(span::<i8>(), (-128, 127));
/// assert_eq!(span::<u16>(), (0, 65535));
/// ```
pub trait Bounds {
    /// The smallest value representable by the implementing type.
    const MIN: Self;
    /// The largest value representable by the implementing type.
    const MAX: Self;
}

macro_rules! impl_const_for {
    ($trait_name:ident, $const_name:ident, $value:expr, $t:ty) => {
        impl $trait_name for $t {
            const $const_name: Self = $value;
        }
    };
}

macro_rules! impl_constants_for {
    ($($t:ty),* $(,)?) => {
        $(
            impl_const_for!(Zero, ZERO, 0, $t);
            impl_const_for!(PlusOne, PLUS_ONE, 1, $t);

            impl Bounds for $t {
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;
            }
        )*
    };
}

impl_constants_for!(
    i8, u8, i16, u16, i32, u32, i64, u64, i128, u128, isize, usize
);
