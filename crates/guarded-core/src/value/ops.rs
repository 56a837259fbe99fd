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

//! # Same-Type Arithmetic
//!
//! Arithmetic between two `Guarded<T>` of one and the same `T`. The operand is
//! always another `Guarded<T>`, never a raw value and never a wrapper over a
//! different type, so the no-conversion guarantee holds through every
//! operation. Overflow behaviour is chosen explicitly by name; there are no
//! `+`/`-` operator overloads.
//!
//! - Checked: `checked_add`, `checked_sub`, `checked_mul`, `checked_div`,
//!   `checked_rem` return `None` on overflow, underflow or division by zero.
//! - Saturating: `saturating_add`, `saturating_sub` clamp to `T`'s bounds.
//! - Wrapping: `wrapping_add`, `wrapping_sub` wrap around `T`'s bounds.
//! - Bounds: `min_value`, `max_value`.
//!
//! Each operation exists only when `T` supports it (via `num_traits`), so
//! `Guarded<f32>` has no `checked_add` and `Guarded<bool>` has no `max_value`.
//!
//! ## Usage
//!
//! ```rust
//! use guarded_core::value::Guarded;
//!
//! let a = Guarded::new(200u8);
//! let b = Guarded::new(100u8);
//!
//! assert_eq!(a.checked_add(b), None);
//! assert_eq!(a.saturating_add(b), Guarded::<u8>::max_value());
//! assert_eq!(a.wrapping_add(b), Guarded::new(44u8));
//! ```
//!
//! Mixing operand types does not compile:
//!
//! ```compile_fail
//! use guarded_core::value::Guarded;
//!
//! let _ = Guarded::new(1u32).checked_add(Guarded::new(1u64));
//! ```
//!
//! ```compile_fail
//! use guarded_core::value::Guarded;
//!
//! let _ = Guarded::new(1u32).checked_add(1u32);
//! ```
//!
//! ```compile_fail
//! use guarded_core::value::Guarded;
//!
//! let _ = Guarded::new(1u8) + Guarded::new(1u8);
//! ```

use crate::num::arithmetic::Arithmetic;
use crate::value::guarded::Guarded;
use num_traits::{
    Bounded, CheckedAdd, CheckedDiv, CheckedMul, CheckedRem, CheckedSub, SaturatingAdd,
    SaturatingSub, WrappingAdd, WrappingSub,
};

macro_rules! impl_checked_op {
    ($trait_name:ident, $method:ident, $what:literal) => {
        impl<T> Guarded<T>
        where
            T: Arithmetic + $trait_name,
        {
            #[doc = concat!("Checked ", $what, ". Returns `None` where the primitive operation would fail.")]
            #[inline(always)]
            pub fn $method(self, rhs: Self) -> Option<Self> {
                <T as $trait_name>::$method(self.data(), rhs.data()).map(Self::new)
            }
        }
    };
}

macro_rules! impl_total_op {
    ($trait_name:ident, $method:ident, $what:literal) => {
        impl<T> Guarded<T>
        where
            T: Arithmetic + $trait_name,
        {
            #[doc = concat!($what, " within the bounds of `T`.")]
            #[inline(always)]
            pub fn $method(self, rhs: Self) -> Self {
                Self::new(<T as $trait_name>::$method(self.data(), rhs.data()))
            }
        }
    };
}

impl_checked_op!(CheckedAdd, checked_add, "addition");
impl_checked_op!(CheckedSub, checked_sub, "subtraction");
impl_checked_op!(CheckedMul, checked_mul, "multiplication");
impl_checked_op!(CheckedDiv, checked_div, "division");
impl_checked_op!(CheckedRem, checked_rem, "remainder");

impl_total_op!(SaturatingAdd, saturating_add, "Saturating addition");
impl_total_op!(SaturatingSub, saturating_sub, "Saturating subtraction");
impl_total_op!(WrappingAdd, wrapping_add, "Wrapping addition");
impl_total_op!(WrappingSub, wrapping_sub, "Wrapping subtraction");

impl<T> Guarded<T>
where
    T: Arithmetic + Bounded,
{
    /// The smallest value `T` can hold.
    #[inline(always)]
    pub fn min_value() -> Self {
        Self::new(T::min_value())
    }

    /// The largest value `T` can hold.
    #[inline(always)]
    pub fn max_value() -> Self {
        Self::new(T::max_value())
    }
}

#[cfg(test)]
mod tests {
    use crate::value::guarded::Guarded;
    use proptest::prelude::*;

    #[test]
    fn test_checked_ops() {
        let ten = Guarded::new(10i8);
        let three = Guarded::new(3i8);
        let zero = Guarded::<i8>::zero();

        assert_eq!(ten.checked_add(three), Some(Guarded::new(13)));
        assert_eq!(ten.checked_sub(three), Some(Guarded::new(7)));
        assert_eq!(ten.checked_mul(three), Some(Guarded::new(30)));
        assert_eq!(ten.checked_div(three), Some(Guarded::new(3)));
        assert_eq!(ten.checked_rem(three), Some(Guarded::new(1)));

        assert_eq!(ten.checked_div(zero), None);
        assert_eq!(ten.checked_rem(zero), None);
        assert_eq!(Guarded::<i8>::max_value().checked_add(three), None);
        assert_eq!(Guarded::<i8>::min_value().checked_sub(three), None);
        assert_eq!(Guarded::new(100i8).checked_mul(three), None);
    }

    #[test]
    fn test_saturating_ops() {
        let hi = Guarded::new(250u8);
        let lo = Guarded::new(5u8);

        assert_eq!(hi.saturating_add(Guarded::new(10)), Guarded::<u8>::max_value());
        assert_eq!(lo.saturating_sub(Guarded::new(10)), Guarded::<u8>::min_value());
        assert_eq!(lo.saturating_add(lo), Guarded::new(10));
    }

    #[test]
    fn test_wrapping_ops() {
        assert_eq!(Guarded::new(u16::MAX).wrapping_add(Guarded::new(1)), Guarded::new(0));
        assert_eq!(Guarded::new(0u16).wrapping_sub(Guarded::new(1)), Guarded::new(u16::MAX));
    }

    #[test]
    fn test_bounds() {
        assert_eq!(Guarded::<usize>::min_value().get(), 0);
        assert_eq!(Guarded::<i64>::max_value().get(), i64::MAX);
        assert_eq!(Guarded::<f32>::max_value().get(), f32::MAX);
    }

    #[test]
    fn test_walker_increment() {
        let one = Guarded::new(1usize);
        let end = Guarded::new(4usize);
        let mut walker = Guarded::<usize>::zero();
        let mut steps = 0;

        while walker < end {
            walker = walker.checked_add(one).unwrap();
            steps += 1;
        }
        assert_eq!(steps, 4);
    }

    proptest! {
        #[test]
        fn prop_checked_add_matches_primitive(a in any::<u32>(), b in any::<u32>()) {
            let expected = a.checked_add(b).map(Guarded::new);
            prop_assert_eq!(Guarded::new(a).checked_add(Guarded::new(b)), expected);
        }

        #[test]
        fn prop_saturating_sub_matches_primitive(a in any::<i64>(), b in any::<i64>()) {
            let expected = Guarded::new(a.saturating_sub(b));
            prop_assert_eq!(Guarded::new(a).saturating_sub(Guarded::new(b)), expected);
        }
    }
}
