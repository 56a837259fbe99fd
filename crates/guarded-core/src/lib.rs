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

//! # Guarded Core
//!
//! A value wrapper that stops implicit numeric conversions at compile time.
//! `Guarded<T>` holds one value of a primitive arithmetic type and will only
//! trade in that exact type: it is built from a `T`, assigned a `T`, read back
//! as a `T`, and compared with other `Guarded<T>`. Every attempt to construct,
//! assign, extract or compare across two different types fails to build,
//! so silent widening, narrowing and signedness changes cannot reach code that
//! uses it. Ordering and equality follow `T`, which keeps guarded values usable
//! as keys and elements of ordered containers.
//!
//! ## Modules
//!
//! - `num`: The sealed `Arithmetic` trait defining which types may be wrapped
//!   (`bool`, `char`, all integer widths, `f32`, `f64`).
//! - `value`: `Guarded<T>` with its construction, access and comparison rules,
//!   same-type checked/saturating/wrapping arithmetic, and formatting
//!   (`Display` behind the `display` feature).
//! - `utils`: `GuardedBuffer<T>`, a sequence sized and indexed only by
//!   `Guarded<usize>`.
//!
//! ## Usage
//!
//! ```rust
//! use guarded_core::utils::buffer::GuardedBuffer;
//! use guarded_core::value::Guarded;
//!
//! type SafeSize = Guarded<usize>;
//! type SafeByte = Guarded<u8>;
//!
//! let buffy: GuardedBuffer<u8> = GuardedBuffer::new(SafeSize::new(2), SafeByte::new(b'?'));
//! assert_eq!(buffy[SafeSize::zero()], SafeByte::new(b'?'));
//! ```
//!
//! ## Features
//!
//! - `display`: implements `std::fmt::Display` for `Guarded<T>`, rendering the
//!   stored value exactly as `T` would. Off by default.

pub mod num;
pub mod utils;
pub mod value;
