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

//! # Guarded Buffers
//!
//! A growable sequence of `Guarded<T>` whose size and positions are themselves
//! guarded: it is sized by a `Guarded<usize>`, reports its length as a
//! `Guarded<usize>` and can only be indexed by a `Guarded<usize>`. A buffer of
//! `Guarded<u8>` therefore never accepts an `i8`, and a loop walking it never
//! mixes its index with some other integer on the way.
//!
//! ## Usage
//!
//! ```rust
//! use guarded_core::utils::buffer::GuardedBuffer;
//! use guarded_core::value::Guarded;
//!
//! let mut buffy = GuardedBuffer::new(Guarded::new(3usize), Guarded::new(b'?'));
//!
//! let mut walker = Guarded::<usize>::zero();
//! while walker < buffy.len() {
//!     buffy[walker] = Guarded::new(b'A' + walker.get() as u8);
//!     *walker.data_mut() += 1;
//! }
//!
//! let text: String = buffy.iter().map(|c| char::from(c.get())).collect();
//! assert_eq!(text, "ABC");
//! ```
//!
//! Raw indices are rejected:
//!
//! ```compile_fail
//! use guarded_core::utils::buffer::GuardedBuffer;
//! use guarded_core::value::Guarded;
//!
//! let buffy = GuardedBuffer::new(Guarded::new(3usize), Guarded::new(b'?'));
//! let _ = buffy[1usize];
//! ```
//!
//! ```compile_fail
//! use guarded_core::utils::buffer::GuardedBuffer;
//! use guarded_core::value::Guarded;
//!
//! let mut buffy = GuardedBuffer::new(Guarded::new(3usize), Guarded::new(b'?'));
//! buffy.push(Guarded::new(-1i8));
//! ```

use crate::num::arithmetic::Arithmetic;
use crate::value::guarded::Guarded;

/// The error returned when a write addresses a position past the end of a
/// [`GuardedBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    index: usize,
    len: usize,
}

impl IndexOutOfBounds {
    /// The position that was addressed.
    #[inline]
    pub fn index(&self) -> Guarded<usize> {
        Guarded::new(self.index)
    }

    /// The length of the buffer at the time of the write.
    #[inline]
    pub fn buffer_len(&self) -> Guarded<usize> {
        Guarded::new(self.len)
    }
}

impl std::fmt::Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "index {} is out of bounds for a buffer of length {}",
            self.index, self.len
        )
    }
}

impl std::error::Error for IndexOutOfBounds {}

/// A sequence of `Guarded<T>` addressed only through `Guarded<usize>`.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GuardedBuffer<T: Arithmetic> {
    items: Vec<Guarded<T>>,
}

impl<T: Arithmetic> GuardedBuffer<T> {
    /// Creates a buffer holding `len` copies of `fill`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guarded_core::utils::buffer::GuardedBuffer;
    /// use guarded_core::value::Guarded;
    ///
    /// let buffy = GuardedBuffer::new(Guarded::new(0xFusize), Guarded::new(b'?'));
    /// assert_eq!(buffy.len(), Guarded::new(15));
    /// assert!(buffy.iter().all(|c| c.get() == b'?'));
    /// ```
    #[inline]
    pub fn new(len: Guarded<usize>, fill: Guarded<T>) -> Self {
        Self {
            items: vec![fill; len.get()],
        }
    }

    /// Creates an empty buffer with room for `capacity` elements.
    #[inline]
    pub fn with_capacity(capacity: Guarded<usize>) -> Self {
        Self {
            items: Vec::with_capacity(capacity.get()),
        }
    }

    /// The number of elements.
    #[inline]
    pub fn len(&self) -> Guarded<usize> {
        Guarded::new(self.items.len())
    }

    /// Checks whether the buffer holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends an element.
    #[inline]
    pub fn push(&mut self, item: Guarded<T>) {
        self.items.push(item);
    }

    /// Removes and returns the last element.
    #[inline]
    pub fn pop(&mut self) -> Option<Guarded<T>> {
        self.items.pop()
    }

    /// Returns the element at `index`, or `None` past the end.
    #[inline]
    pub fn get(&self, index: Guarded<usize>) -> Option<&Guarded<T>> {
        self.items.get(index.get())
    }

    /// Returns the element at `index` mutably, or `None` past the end.
    #[inline]
    pub fn get_mut(&mut self, index: Guarded<usize>) -> Option<&mut Guarded<T>> {
        self.items.get_mut(index.get())
    }

    /// Stores `item` at `index` and returns the element it replaced.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfBounds`] when `index` is not below `len()`; the
    /// buffer is left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guarded_core::utils::buffer::GuardedBuffer;
    /// use guarded_core::value::Guarded;
    ///
    /// let mut buffy = GuardedBuffer::new(Guarded::new(2usize), Guarded::new(0u32));
    /// assert_eq!(buffy.set(Guarded::new(1), Guarded::new(7)), Ok(Guarded::new(0)));
    /// assert!(buffy.set(Guarded::new(2), Guarded::new(7)).is_err());
    /// ```
    pub fn set(
        &mut self,
        index: Guarded<usize>,
        item: Guarded<T>,
    ) -> Result<Guarded<T>, IndexOutOfBounds> {
        let len = self.items.len();
        match self.items.get_mut(index.get()) {
            Some(slot) => Ok(std::mem::replace(slot, item)),
            None => Err(IndexOutOfBounds {
                index: index.get(),
                len,
            }),
        }
    }

    /// Iterates over the elements in order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Guarded<T>> {
        self.items.iter()
    }

    /// Iterates mutably over the elements in order.
    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Guarded<T>> {
        self.items.iter_mut()
    }

    /// Views the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Guarded<T>] {
        &self.items
    }
}

impl<T: Arithmetic> std::fmt::Debug for GuardedBuffer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T: Arithmetic> std::ops::Index<Guarded<usize>> for GuardedBuffer<T> {
    type Output = Guarded<T>;

    /// # Panics
    ///
    /// Panics if `index` is not below `len()`, as slice indexing does.
    #[inline]
    fn index(&self, index: Guarded<usize>) -> &Self::Output {
        &self.items[index.get()]
    }
}

impl<T: Arithmetic> std::ops::IndexMut<Guarded<usize>> for GuardedBuffer<T> {
    /// # Panics
    ///
    /// Panics if `index` is not below `len()`, as slice indexing does.
    #[inline]
    fn index_mut(&mut self, index: Guarded<usize>) -> &mut Self::Output {
        &mut self.items[index.get()]
    }
}

impl<T: Arithmetic> From<Vec<Guarded<T>>> for GuardedBuffer<T> {
    fn from(items: Vec<Guarded<T>>) -> Self {
        Self { items }
    }
}

impl<T: Arithmetic, const N: usize> From<[Guarded<T>; N]> for GuardedBuffer<T> {
    fn from(items: [Guarded<T>; N]) -> Self {
        Self {
            items: items.into(),
        }
    }
}

impl<T: Arithmetic> FromIterator<Guarded<T>> for GuardedBuffer<T> {
    fn from_iter<I: IntoIterator<Item = Guarded<T>>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: Arithmetic> IntoIterator for GuardedBuffer<T> {
    type Item = Guarded<T>;
    type IntoIter = std::vec::IntoIter<Guarded<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T: Arithmetic> IntoIterator for &'a GuardedBuffer<T> {
    type Item = &'a Guarded<T>;
    type IntoIter = std::slice::Iter<'a, Guarded<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T: Arithmetic> IntoIterator for &'a mut GuardedBuffer<T> {
    type Item = &'a mut Guarded<T>;
    type IntoIter = std::slice::IterMut<'a, Guarded<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn g(index: usize) -> Guarded<usize> {
        Guarded::new(index)
    }

    #[test]
    fn test_new_fills() {
        let buffy = GuardedBuffer::new(g(4), Guarded::new(b'?'));
        assert_eq!(buffy.len(), g(4));
        assert!(!buffy.is_empty());
        assert!(buffy.iter().all(|c| *c == Guarded::new(b'?')));

        let empty: GuardedBuffer<u8> = GuardedBuffer::new(g(0), Guarded::new(b'?'));
        assert!(empty.is_empty());
        assert_eq!(empty.len(), g(0));
    }

    #[test]
    fn test_vector_walk() {
        let mut buffy = GuardedBuffer::new(g(0xF), Guarded::new(b'?'));

        let mut walker = Guarded::<usize>::zero();
        let mut counter = Guarded::<usize>::zero();
        while walker < buffy.len() {
            let letter = 65 + counter.get() % 25;
            buffy[walker] = Guarded::new(letter as u8);
            *counter.data_mut() += 1;
            *walker.data_mut() += 1;
        }

        let text: String = buffy.iter().map(|c| char::from(c.get())).collect();
        assert_eq!(text, "ABCDEFGHIJKLMNO");
    }

    #[test]
    fn test_get_and_get_mut() {
        let mut buffy: GuardedBuffer<i32> = [1, 2, 3].into_iter().map(Guarded::new).collect();

        assert_eq!(buffy.get(g(1)), Some(&Guarded::new(2)));
        assert_eq!(buffy.get(g(3)), None);

        if let Some(slot) = buffy.get_mut(g(0)) {
            slot.assign(10);
        }
        assert_eq!(buffy[g(0)].get(), 10);
        assert!(buffy.get_mut(g(9)).is_none());
    }

    #[test]
    fn test_set_reports_out_of_bounds() {
        let mut buffy = GuardedBuffer::new(g(2), Guarded::new('a'));

        assert_eq!(buffy.set(g(0), Guarded::new('z')), Ok(Guarded::new('a')));
        assert_eq!(buffy[g(0)].get(), 'z');

        let err = buffy.set(g(5), Guarded::new('q')).unwrap_err();
        assert_eq!(err.index(), g(5));
        assert_eq!(err.buffer_len(), g(2));
        assert_eq!(
            err.to_string(),
            "index 5 is out of bounds for a buffer of length 2"
        );
        assert_eq!(buffy.as_slice(), &[Guarded::new('z'), Guarded::new('a')]);
    }

    #[test]
    #[should_panic]
    fn test_index_past_end_panics() {
        let buffy = GuardedBuffer::new(g(1), Guarded::new(0u8));
        let _value = buffy[g(1)];
    }

    #[test]
    fn test_push_pop_and_capacity() {
        let mut buffy = GuardedBuffer::<u64>::with_capacity(g(2));
        assert!(buffy.is_empty());

        buffy.push(Guarded::new(1));
        buffy.push(Guarded::new(2));
        assert_eq!(buffy.len(), g(2));
        assert_eq!(buffy.pop(), Some(Guarded::new(2)));
        assert_eq!(buffy.pop(), Some(Guarded::new(1)));
        assert_eq!(buffy.pop(), None);
    }

    #[test]
    fn test_array_and_vec_fill() {
        let mut from_array = GuardedBuffer::from([Guarded::<i8>::default(); 3]);
        let mut from_vec = GuardedBuffer::from(vec![Guarded::<i8>::default(); 3]);

        for buffy in [&mut from_array, &mut from_vec] {
            for (slot, letter) in buffy.iter_mut().zip([b'A', b'B', b'C']) {
                slot.assign(letter as i8);
            }
        }

        assert_eq!(from_array, from_vec);
        let read: Vec<i8> = (&from_array).into_iter().map(|c| c.get()).collect();
        assert_eq!(read, vec![65, 66, 67]);
    }

    #[test]
    fn test_into_iter_and_mut_iter() {
        let mut buffy = GuardedBuffer::new(g(3), Guarded::new(1u16));
        for slot in &mut buffy {
            *slot.data_mut() *= 2;
        }
        let total: u16 = buffy.into_iter().map(Guarded::into_inner).sum();
        assert_eq!(total, 6);
    }

    #[test]
    fn test_debug_lists_elements() {
        let buffy = GuardedBuffer::from([Guarded::new(true), Guarded::new(false)]);
        assert_eq!(
            format!("{:?}", buffy),
            "[Guarded<bool>(true), Guarded<bool>(false)]"
        );
    }
}
