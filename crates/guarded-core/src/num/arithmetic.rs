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

//! # Eligible Underlying Types
//!
//! The closed set of primitive types a [`Guarded<T>`](crate::value::Guarded)
//! may wrap: booleans, characters, every signed and unsigned integer width and
//! both floating-point widths. The set is sealed, so no downstream crate can
//! widen it.
//!
//! C character types have no distinct Rust counterpart; they are carried by
//! their integer representation (`c_char` is `i8` or `u8`, `char16_t` is `u16`,
//! `char32_t` is `u32`), all of which are eligible. Rust's `char` is eligible
//! as well.
//!
//! ## Usage
//!
//! ```rust
//! use guarded_core::num::arithmetic::Arithmetic;
//!
//! fn zero_of<T: Arithmetic>() -> T {
//!     T::ZERO
//! }
//!
//! assert_eq!(zero_of::<u8>(), 0);
//! assert_eq!(zero_of::<bool>(), false);
//! assert_eq!(zero_of::<char>(), '\0');
//! assert_eq!(<f64 as Arithmetic>::NAME, "f64");
//! ```
//!
//! Anything outside the set is rejected wherever it is used as `T`:
//!
//! ```compile_fail
//! use guarded_core::num::arithmetic::Arithmetic;
//!
//! fn zero_of<T: Arithmetic>() -> T {
//!     T::ZERO
//! }
//!
//! let _ = zero_of::<String>();
//! ```

mod sealed {
    pub trait Sealed {}
}

/// A primitive type that can be wrapped by [`Guarded<T>`](crate::value::Guarded).
///
/// Implemented for `bool`, `char`, `i8`..`i128`, `isize`, `u8`..`u128`,
/// `usize`, `f32` and `f64`. The trait is sealed.
pub trait Arithmetic:
    sealed::Sealed
    + Copy
    + Default
    + PartialEq
    + PartialOrd
    + std::fmt::Debug
    + Send
    + Sync
    + 'static
{
    /// The zero-equivalent value: `0`, `0.0`, `false` or `'\0'`.
    const ZERO: Self;

    /// The primitive's name as written in source, e.g. `"u8"`.
    const NAME: &'static str;
}

macro_rules! impl_arithmetic_for {
    ($t:ty, $zero:expr) => {
        impl sealed::Sealed for $t {}

        impl Arithmetic for $t {
            const ZERO: Self = $zero;
            const NAME: &'static str = stringify!($t);
        }
    };
}

impl_arithmetic_for!(bool, false);
impl_arithmetic_for!(char, '\0');

impl_arithmetic_for!(i8, 0);
impl_arithmetic_for!(i16, 0);
impl_arithmetic_for!(i32, 0);
impl_arithmetic_for!(i64, 0);
impl_arithmetic_for!(i128, 0);
impl_arithmetic_for!(isize, 0);

impl_arithmetic_for!(u8, 0);
impl_arithmetic_for!(u16, 0);
impl_arithmetic_for!(u32, 0);
impl_arithmetic_for!(u64, 0);
impl_arithmetic_for!(u128, 0);
impl_arithmetic_for!(usize, 0);

impl_arithmetic_for!(f32, 0.0);
impl_arithmetic_for!(f64, 0.0);
