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

//! # Search Window
//!
//! The half-open index window `[left, right)` that every search routine
//! narrows. A search starts from `SearchWindow::full(len)`, probes the
//! `midpoint`, and then either discards the lower half (`discard_lower`) or
//! the upper half (`discard_upper`). Both moves strictly shrink a non-empty
//! window, which is why every search terminates regardless of whether the
//! underlying sequence is actually sorted.

/// A half-open window of candidate indices `[left, right)`.
///
/// # Invariants
///
/// `left` must always be less than or equal to `right`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SearchWindow {
    left: usize,
    right: usize,
}

impl SearchWindow {
    /// Creates a window covering every index of a sequence of length `len`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use search_utils::window::SearchWindow;
    ///
    /// let w = SearchWindow::full(5);
    /// assert_eq!(w.left(), 0);
    /// assert_eq!(w.right(), 5);
    /// ```
    #[inline]
    pub const fn full(len: usize) -> Self {
        Self {
            left: 0,
            right: len,
        }
    }

    /// Creates a new `SearchWindow`.
    ///
    /// # Panics
    ///
    /// Panics if `left > right`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use search_utils::window::SearchWindow;
    ///
    /// let w = SearchWindow::new(2, 6);
    /// assert_eq!(w.len(), 4);
    /// ```
    #[inline]
    pub fn new(left: usize, right: usize) -> Self {
        assert!(
            left <= right,
            "Invalid search window: left must be less than or equal to right"
        );
        Self { left, right }
    }

    /// Creates a new `SearchWindow` if the bounds are valid.
    ///
    /// Returns `None` if `left > right`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use search_utils::window::SearchWindow;
    ///
    /// assert!(SearchWindow::try_new(0, 3).is_some());
    /// assert!(SearchWindow::try_new(3, 0).is_none());
    /// ```
    #[inline]
    pub fn try_new(left: usize, right: usize) -> Option<Self> {
        if left <= right {
            Some(Self { left, right })
        } else {
            None
        }
    }

    /// Returns the inclusive lower end of the window.
    #[inline]
    pub const fn left(&self) -> usize {
        self.left
    }

    /// Returns the exclusive upper end of the window.
    #[inline]
    pub const fn right(&self) -> usize {
        self.right
    }

    /// Returns the number of candidate indices left in the window.
    #[inline]
    pub const fn len(&self) -> usize {
        self.right - self.left
    }

    /// Returns `true` once the window has collapsed to a single point
    /// (`left == right`), i.e. no candidates remain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use search_utils::window::SearchWindow;
    ///
    /// assert!(SearchWindow::full(0).is_empty());
    /// assert!(!SearchWindow::full(1).is_empty());
    /// ```
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.left == self.right
    }

    /// Returns `true` if `index` is a candidate of this window.
    #[inline]
    pub const fn contains(&self, index: usize) -> bool {
        self.left <= index && index < self.right
    }

    /// Returns the index probed next: `left + (right - left) / 2`.
    ///
    /// The subtraction form never overflows, even for windows near
    /// `usize::MAX`.
    ///
    /// # Panics
    ///
    /// In debug builds, this function will panic if the window is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use search_utils::window::SearchWindow;
    ///
    /// assert_eq!(SearchWindow::full(5).midpoint(), 2);
    /// assert_eq!(SearchWindow::new(3, 5).midpoint(), 4);
    /// assert_eq!(SearchWindow::new(usize::MAX - 1, usize::MAX).midpoint(), usize::MAX - 1);
    /// ```
    #[inline(always)]
    pub const fn midpoint(&self) -> usize {
        debug_assert!(
            self.left < self.right,
            "called `SearchWindow::midpoint` on an empty window"
        );
        self.left + ((self.right - self.left) >> 1)
    }

    /// Drops `mid` and every index below it (`left = mid + 1`).
    ///
    /// # Panics
    ///
    /// In debug builds, this function will panic if `mid` is not a candidate
    /// of the window.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use search_utils::window::SearchWindow;
    ///
    /// let mut w = SearchWindow::full(5);
    /// w.discard_lower(2);
    /// assert_eq!(w, SearchWindow::new(3, 5));
    /// ```
    #[inline(always)]
    pub fn discard_lower(&mut self, mid: usize) {
        debug_assert!(
            self.contains(mid),
            "called `SearchWindow::discard_lower` with index {} outside of {}",
            mid,
            self
        );
        self.left = mid + 1;
    }

    /// Drops `mid` and every index above it (`right = mid`).
    ///
    /// # Panics
    ///
    /// In debug builds, this function will panic if `mid` is not a candidate
    /// of the window.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use search_utils::window::SearchWindow;
    ///
    /// let mut w = SearchWindow::full(5);
    /// w.discard_upper(2);
    /// assert_eq!(w, SearchWindow::new(0, 2));
    /// ```
    #[inline(always)]
    pub fn discard_upper(&mut self, mid: usize) {
        debug_assert!(
            self.contains(mid),
            "called `SearchWindow::discard_upper` with index {} outside of {}",
            mid,
            self
        );
        self.right = mid;
    }

    /// Returns the candidate indices as a `Range<usize>`.
    #[inline]
    pub const fn as_range(&self) -> std::ops::Range<usize> {
        self.left..self.right
    }
}

impl std::fmt::Debug for SearchWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchWindow")
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}

impl std::fmt::Display for SearchWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.left, self.right)
    }
}

impl std::ops::RangeBounds<usize> for SearchWindow {
    fn start_bound(&self) -> std::ops::Bound<&usize> {
        std::ops::Bound::Included(&self.left)
    }

    fn end_bound(&self) -> std::ops::Bound<&usize> {
        std::ops::Bound::Excluded(&self.right)
    }
}

impl From<std::ops::Range<usize>> for SearchWindow {
    #[inline]
    fn from(range: std::ops::Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl From<SearchWindow> for std::ops::Range<usize> {
    #[inline]
    fn from(window: SearchWindow) -> Self {
        window.as_range()
    }
}
