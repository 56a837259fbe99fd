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

//! Textual rendering for `Guarded<T>`.
//!
//! `Debug` is always available and names the underlying type, which keeps
//! assertion failures readable. `Display` forwards to `T` and only exists with
//! the `display` feature enabled.

use crate::num::arithmetic::Arithmetic;
use crate::value::guarded::Guarded;

impl<T: Arithmetic> std::fmt::Debug for Guarded<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Guarded<{}>({:?})", T::NAME, self.data())
    }
}

#[cfg(feature = "display")]
impl<T> std::fmt::Display for Guarded<T>
where
    T: Arithmetic + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self.data(), f)
    }
}

#[cfg(test)]
mod tests {
    use crate::value::guarded::Guarded;

    #[test]
    fn test_debug_output() {
        assert_eq!(format!("{:?}", Guarded::new(-3i32)), "Guarded<i32>(-3)");
        assert_eq!(format!("{:?}", Guarded::new(false)), "Guarded<bool>(false)");
        assert_eq!(format!("{:?}", Guarded::new(1.5f64)), "Guarded<f64>(1.5)");
    }

    #[cfg(feature = "display")]
    #[test]
    fn test_display_forwards_to_value() {
        assert_eq!(format!("{}", Guarded::new(85u8)), "85");
        assert_eq!(format!("{}", Guarded::new('U')), "U");
        assert_eq!(format!("{:>4}", Guarded::new(7u16)), "   7");
        assert_eq!(format!("{:.2}", Guarded::new(2.5f32)), "2.50");
    }
}
