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

//! # Guarded Values
//!
//! `Guarded<T>` holds exactly one value of an [`Arithmetic`] type `T` and
//! refuses every implicit conversion into or out of it. A `Guarded<f32>` can
//! only be built from an `f32`, only be assigned an `f32`, only hand back an
//! `f32`, and only be compared with another `Guarded<f32>`. Widening,
//! narrowing and signedness changes never happen through this type; if one is
//! wanted, it has to be written out on the raw value first.
//!
//! ## Highlights
//!
//! - Eligibility is a bound on the struct itself, so `Guarded<String>` is
//!   rejected wherever it is named, before any method is looked at.
//! - Construction: `new`, `zero`, `Default`, `From<T>`. Nothing accepts a `U != T`.
//! - Access: `data` (`&T`), `data_mut` (`&mut T`), `get`/`into_inner` (by value)
//!   and `From<Guarded<T>> for T`. References never outlive the wrapper.
//! - Ordering follows `T`: `PartialEq`/`PartialOrd` always, `Eq`/`Ord`/`Hash`
//!   only when `T` has them, so `Guarded<u8>` sorts and keys maps while
//!   `Guarded<f32>` does not.
//! - Zero-cost: `#[repr(transparent)]` over `T`.
//!
//! ## Usage
//!
//! ```rust
//! use guarded_core::value::Guarded;
//!
//! let mut letter = Guarded::<u8>::default();
//! letter.assign(85);
//! assert_eq!(letter.get(), b'U');
//!
//! let next = Guarded::new(86u8);
//! assert!(letter < next);
//! assert!(letter != next);
//! ```
//!
//! ## Rejected at compile time
//!
//! A value of another type, even a lossless one:
//!
//! ```compile_fail
//! use guarded_core::value::Guarded;
//!
//! let wide: f64 = 2.3;
//! let _ = Guarded::<f32>::new(wide); // expected `f32`, found `f64`
//! ```
//!
//! ```compile_fail
//! use guarded_core::value::Guarded;
//!
//! let _: Guarded<u16> = Guarded::from(7u8); // no `From<u8>` for `Guarded<u16>`
//! ```
//!
//! A wrapper over another type:
//!
//! ```compile_fail
//! use guarded_core::value::Guarded;
//!
//! let narrow = Guarded::new(1u8);
//! let _ = Guarded::<u16>::from(narrow);
//! ```
//!
//! Assignment from another type, raw or wrapped:
//!
//! ```compile_fail
//! use guarded_core::value::Guarded;
//!
//! let mut signed = Guarded::<i8>::default();
//! signed.assign(b's'); // `b's'` is a `u8`
//! ```
//!
//! ```compile_fail
//! use guarded_core::value::Guarded;
//!
//! let mut signed = Guarded::<i8>::default();
//! let unsigned = Guarded::<u8>::default();
//! signed = unsigned;
//! ```
//!
//! Extraction into another type:
//!
//! ```compile_fail
//! use guarded_core::value::Guarded;
//!
//! let narrow = Guarded::new(1u8);
//! let _: u16 = narrow.into();
//! ```
//!
//! ```compile_fail
//! use guarded_core::value::Guarded;
//!
//! let _ = u32::from(Guarded::new(1u8));
//! ```
//!
//! Comparison across underlying types, or against a raw value:
//!
//! ```compile_fail
//! use guarded_core::value::Guarded;
//!
//! let _ = Guarded::new(1u8) == Guarded::new(1i8);
//! ```
//!
//! ```compile_fail
//! use guarded_core::value::Guarded;
//!
//! let _ = Guarded::new(2.3f32) < Guarded::new(2.3f64);
//! ```
//!
//! ```compile_fail
//! use guarded_core::value::Guarded;
//!
//! let _ = Guarded::new(1u8) == 1u8;
//! ```
//!
//! An ineligible underlying type:
//!
//! ```compile_fail
//! use guarded_core::value::Guarded;
//!
//! let _ = Guarded::new(String::from("text"));
//! ```
//!
//! ```compile_fail
//! use guarded_core::value::Guarded;
//!
//! fn takes_pointer(_: Guarded<*const u8>) {}
//! ```
//!
//! ```compile_fail
//! use guarded_core::value::Guarded;
//!
//! let _ = Guarded::<()>::default();
//! ```
//!
//! A reference outliving a temporary wrapper:
//!
//! ```compile_fail
//! use guarded_core::value::Guarded;
//!
//! let peek: &u8 = Guarded::new(5u8).data(); // temporary dropped while borrowed
//! assert_eq!(*peek, 5);
//! ```
//!
//! Mutable access through an immutable binding:
//!
//! ```compile_fail
//! use guarded_core::value::Guarded;
//!
//! let fixed = Guarded::new(1u8);
//! *fixed.data_mut() = 2;
//! ```
//!
//! Borrowing `T`'s own methods without unwrapping first:
//!
//! ```compile_fail
//! use guarded_core::value::Guarded;
//!
//! let base = Guarded::new(2u32);
//! let _ = base.pow(2);
//! ```
//!
//! Total ordering where `T` has none:
//!
//! ```compile_fail
//! use guarded_core::value::Guarded;
//!
//! let mut samples = vec![Guarded::new(1.5f32), Guarded::new(0.5f32)];
//! samples.sort();
//! ```

use crate::num::arithmetic::Arithmetic;

/// A value of type `T` that converts to and from nothing but `T`.
///
/// # Examples
///
/// ```rust
/// use guarded_core::value::Guarded;
///
/// let size = Guarded::new(3usize);
/// let raw: usize = size.into();
/// assert_eq!(raw, 3);
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Guarded<T: Arithmetic> {
    value: T,
}

impl<T: Arithmetic> Guarded<T> {
    /// Wraps `value`. Only a `T` is accepted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guarded_core::value::Guarded;
    ///
    /// let flag = Guarded::new(true);
    /// assert!(flag.get());
    /// ```
    #[inline(always)]
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    /// Wraps the zero-equivalent of `T` (`0`, `0.0`, `false` or `'\0'`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guarded_core::value::Guarded;
    ///
    /// assert_eq!(Guarded::<i64>::zero().get(), 0);
    /// assert_eq!(Guarded::<char>::zero().get(), '\0');
    /// ```
    #[inline(always)]
    pub const fn zero() -> Self {
        Self { value: T::ZERO }
    }

    /// Returns a shared reference to the stored value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guarded_core::value::Guarded;
    ///
    /// let g = Guarded::new(7i16);
    /// let peek: &i16 = g.data();
    /// assert_eq!(*peek, 7);
    /// ```
    #[inline(always)]
    pub const fn data(&self) -> &T {
        &self.value
    }

    /// Returns a mutable reference to the stored value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guarded_core::value::Guarded;
    ///
    /// let mut walker = Guarded::new(0usize);
    /// *walker.data_mut() += 1;
    /// assert_eq!(walker.get(), 1);
    /// ```
    #[inline(always)]
    pub fn data_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Copies the stored value out.
    #[inline(always)]
    pub const fn get(&self) -> T {
        self.value
    }

    /// Consumes the wrapper and returns the stored value.
    #[inline(always)]
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Stores `value` and returns the wrapper, so assignments chain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guarded_core::value::Guarded;
    ///
    /// let mut g = Guarded::<u32>::default();
    /// g.assign(1).assign(2);
    /// assert_eq!(g.get(), 2);
    /// ```
    #[inline(always)]
    pub fn assign(&mut self, value: T) -> &mut Self {
        self.value = value;
        self
    }

    /// Stores `value` and returns the previous one.
    #[inline(always)]
    pub fn replace(&mut self, value: T) -> T {
        std::mem::replace(&mut self.value, value)
    }

    /// Checks whether the stored value equals `T`'s zero-equivalent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guarded_core::value::Guarded;
    ///
    /// assert!(Guarded::<f32>::default().is_zero());
    /// assert!(!Guarded::new(true).is_zero());
    /// ```
    #[inline(always)]
    pub fn is_zero(&self) -> bool {
        self.value == T::ZERO
    }
}

impl<T: Arithmetic> Default for Guarded<T> {
    #[inline(always)]
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Arithmetic> From<T> for Guarded<T> {
    #[inline(always)]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

// Per type: a blanket `impl<T> From<Guarded<T>> for T` violates the orphan rules.
macro_rules! impl_from_guarded_for {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<Guarded<$t>> for $t {
                #[inline(always)]
                fn from(guarded: Guarded<$t>) -> Self {
                    guarded.value
                }
            }
        )*
    };
}

impl_from_guarded_for!(bool, char);
impl_from_guarded_for!(i8, i16, i32, i64, i128, isize);
impl_from_guarded_for!(u8, u16, u32, u64, u128, usize);
impl_from_guarded_for!(f32, f64);
