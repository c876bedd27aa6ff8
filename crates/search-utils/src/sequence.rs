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

//! # Randomly-Indexable Sequences
//!
//! The search routines only ever need two things from a sequence: its
//! length and read access to the element at an index. `RandomAccess`
//! captures exactly that, so the same routines work over slices, arrays,
//! `Vec` and `VecDeque` without copying them into a contiguous buffer.
//!
//! `SortedSearch` is the method-call flavour of the free functions in
//! `crate::algorithm`, blanket-implemented for every `RandomAccess` type.
//!
//! ## Usage
//!
//! ```rust
//! use search_utils::sequence::SortedSearch;
//! use std::collections::VecDeque;
//!
//! let ring: VecDeque<u32> = (0..10).map(|x| x * 10).collect();
//! assert_eq!(ring.lower_bound_index(&35), 4);
//! assert_eq!(ring.binary_search_index(&70), Some(7));
//! ```

use crate::algorithm;
use std::{borrow::Borrow, collections::VecDeque, ops::Range};

/// A finite sequence whose elements can be read by index in constant time.
///
/// Implementations must be consistent: for every `index < self.len()`,
/// `self.at(index)` returns `Some`, and `at_unchecked(index)` returns the
/// same element.
pub trait RandomAccess {
    /// The element type of the sequence.
    type Item;

    /// Returns the number of elements in the sequence.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence has no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element at `index`, or `None` if `index >= self.len()`.
    fn at(&self, index: usize) -> Option<&Self::Item>;

    /// Returns the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// The caller must ensure `index < self.len()`.
    unsafe fn at_unchecked(&self, index: usize) -> &Self::Item;
}

impl<T> RandomAccess for [T] {
    type Item = T;

    #[inline(always)]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline(always)]
    fn at(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }

    #[inline(always)]
    unsafe fn at_unchecked(&self, index: usize) -> &T {
        debug_assert!(
            index < <[T]>::len(self),
            "called `RandomAccess::at_unchecked` with index out of bounds: the len is {} but the index is {}",
            <[T]>::len(self),
            index
        );
        // SAFETY: forwarded from the caller, index < len.
        unsafe { <[T]>::get_unchecked(self, index) }
    }
}

impl<T, const N: usize> RandomAccess for [T; N] {
    type Item = T;

    #[inline(always)]
    fn len(&self) -> usize {
        N
    }

    #[inline(always)]
    fn at(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    #[inline(always)]
    unsafe fn at_unchecked(&self, index: usize) -> &T {
        // SAFETY: forwarded from the caller, index < N.
        unsafe { RandomAccess::at_unchecked(self.as_slice(), index) }
    }
}

impl<T> RandomAccess for Vec<T> {
    type Item = T;

    #[inline(always)]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline(always)]
    fn at(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    #[inline(always)]
    unsafe fn at_unchecked(&self, index: usize) -> &T {
        // SAFETY: forwarded from the caller, index < len.
        unsafe { RandomAccess::at_unchecked(self.as_slice(), index) }
    }
}

impl<T> RandomAccess for VecDeque<T> {
    type Item = T;

    #[inline(always)]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline(always)]
    fn at(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }

    #[inline]
    unsafe fn at_unchecked(&self, index: usize) -> &T {
        debug_assert!(
            index < VecDeque::len(self),
            "called `RandomAccess::at_unchecked` with index out of bounds: the len is {} but the index is {}",
            VecDeque::len(self),
            index
        );
        // SAFETY: index < len, so `get` always returns `Some`.
        unsafe { VecDeque::get(self, index).unwrap_unchecked() }
    }
}

/// Method-call access to the sorted-sequence search routines.
///
/// Every method forwards to the free function of the same name in
/// `crate::algorithm` and shares its preconditions: the sequence must be
/// sorted in ascending order.
///
/// # Examples
///
/// ```rust
/// use search_utils::sequence::SortedSearch;
///
/// let names = vec!["ada".to_string(), "grace".to_string(), "linus".to_string()];
/// assert!(names.contains_sorted("grace"));
/// assert_eq!(names.lower_bound_index("hopper"), 2);
/// ```
pub trait SortedSearch: RandomAccess {
    /// See [`algorithm::lower_bound_index`].
    #[inline]
    fn lower_bound_index<Q>(&self, value: &Q) -> usize
    where
        Self::Item: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        algorithm::lower_bound_index(self, value)
    }

    /// See [`algorithm::upper_bound_index`].
    #[inline]
    fn upper_bound_index<Q>(&self, value: &Q) -> usize
    where
        Self::Item: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        algorithm::upper_bound_index(self, value)
    }

    /// See [`algorithm::binary_search_index`].
    #[inline]
    fn binary_search_index<Q>(&self, value: &Q) -> Option<usize>
    where
        Self::Item: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        algorithm::binary_search_index(self, value)
    }

    /// See [`algorithm::contains`].
    ///
    /// Named `contains_sorted` so it does not collide with the linear
    /// `contains` methods of slices and collections.
    #[inline]
    fn contains_sorted<Q>(&self, value: &Q) -> bool
    where
        Self::Item: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        algorithm::contains(self, value)
    }

    /// See [`algorithm::equal_range`].
    #[inline]
    fn equal_range<Q>(&self, value: &Q) -> Range<usize>
    where
        Self::Item: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        algorithm::equal_range(self, value)
    }

    /// See [`algorithm::count`].
    #[inline]
    fn count_sorted<Q>(&self, value: &Q) -> usize
    where
        Self::Item: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        algorithm::count(self, value)
    }
}

impl<S> SortedSearch for S where S: RandomAccess + ?Sized {}
